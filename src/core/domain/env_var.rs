//! EnvVar type.
//!
//! A single named value read from the ambient configuration store.

use zeroize::Zeroizing;

/// An environment variable as seen at one point in time.
///
/// Values may be signing keys, so they live in wiped-on-drop memory and are
/// left out of `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct EnvVar {
    name: String,
    raw_value: Option<Zeroizing<String>>,
}

impl EnvVar {
    /// Create a variable with a value
    pub fn set(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_value: Some(Zeroizing::new(value.into())),
        }
    }

    /// Create a variable that is not present in the store
    pub fn unset(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_value: None,
        }
    }

    /// Variable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw value, `None` if unset
    pub fn raw_value(&self) -> Option<&str> {
        self.raw_value.as_ref().map(|v| v.as_str())
    }

    /// Whether the variable is present, even if empty
    pub fn is_set(&self) -> bool {
        self.raw_value.is_some()
    }

    /// Consume into the raw value
    pub fn into_value(self) -> Option<Zeroizing<String>> {
        self.raw_value
    }
}

impl std::fmt::Debug for EnvVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvVar")
            .field("name", &self.name)
            .field("set", &self.is_set())
            .finish()
    }
}
