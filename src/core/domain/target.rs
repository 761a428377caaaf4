//! ResolvedTarget type.
//!
//! The output of resolution: an endpoint and a signer, both validated.

use crate::core::domain::Credential;

/// A fully validated deployment target.
///
/// Only the registry constructs these, and only after every check passed.
#[derive(Debug, PartialEq, Eq)]
pub struct ResolvedTarget {
    name: String,
    endpoint_url: String,
    credential: Credential,
}

impl ResolvedTarget {
    pub(crate) fn new(name: String, endpoint_url: String, credential: Credential) -> Self {
        Self {
            name,
            endpoint_url,
            credential,
        }
    }

    /// Target name this was resolved from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validated RPC endpoint
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Signing credential
    pub fn credential(&self) -> &Credential {
        &self.credential
    }
}

impl std::fmt::Display for ResolvedTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.endpoint_url)
    }
}
