//! Credential type.
//!
//! Wraps a hex-encoded private signing key with secure memory handling.

use zeroize::Zeroizing;

use crate::core::validation;
use crate::error::ResolveError;

/// A private signing key.
///
/// Stored normalized as `0x` followed by hex digits. The backing memory is
/// wiped on drop. Has no `Display`, `Serialize` or `Clone` implementation.
pub struct Credential {
    normalized: Zeroizing<String>,
    source: String,
}

impl Credential {
    /// Parse a raw key value read from the variable `source`.
    ///
    /// Accepts hex digits with or without a leading `0x`.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::InvalidCredential` naming `source` if the value
    /// is not a non-empty hex string. The value never appears in the error.
    pub fn parse(source: &str, raw: &str) -> Result<Self, ResolveError> {
        let digits = validation::strip_hex_prefix(raw.trim());
        if !validation::is_hex_digits(digits) {
            return Err(ResolveError::InvalidCredential {
                name: source.to_string(),
            });
        }

        let mut normalized = Zeroizing::new(String::with_capacity(digits.len() + 2));
        normalized.push_str("0x");
        normalized.push_str(digits);

        Ok(Self {
            normalized,
            source: source.to_string(),
        })
    }

    /// The `0x`-prefixed key, for handing to a deployment driver
    pub fn expose_hex(&self) -> &str {
        &self.normalized
    }

    /// Hex digits without the prefix
    pub fn hex_digits(&self) -> &str {
        &self.normalized[2..]
    }

    /// Decode to raw key bytes.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::InvalidCredential` if the digit count is odd.
    pub fn to_bytes(&self) -> Result<Zeroizing<Vec<u8>>, ResolveError> {
        hex::decode(self.hex_digits())
            .map(Zeroizing::new)
            .map_err(|_| ResolveError::InvalidCredential {
                name: self.source.clone(),
            })
    }

    /// Variable the key was read from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of hex digits, safe to display
    pub fn digit_count(&self) -> usize {
        self.normalized.len() - 2
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("source", &self.source)
            .field("digits", &self.digit_count())
            .finish_non_exhaustive()
    }
}

impl PartialEq for Credential {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.normalized.as_str() == other.normalized.as_str()
    }
}

impl Eq for Credential {}
