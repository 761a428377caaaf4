//! CompilerSpec type.
//!
//! The compiler version handed to the external toolchain.

use serde::{Deserialize, Serialize};

use crate::core::constants;
use crate::core::validation;
use crate::error::ConfigError;

/// A validated compiler version string, e.g. `0.8.4`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompilerSpec(String);

impl CompilerSpec {
    /// Parse and validate a version string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCompilerVersion` if the string is empty
    /// or not shaped like `MAJOR.MINOR[.PATCH]`.
    pub fn parse(version: &str) -> Result<Self, ConfigError> {
        let version = version.trim();
        if !validation::is_valid_version(version) {
            return Err(ConfigError::InvalidCompilerVersion(version.to_string()));
        }
        Ok(Self(version.to_string()))
    }

    /// Version string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CompilerSpec {
    fn default() -> Self {
        Self(constants::DEFAULT_COMPILER_VERSION.to_string())
    }
}

impl TryFrom<String> for CompilerSpec {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CompilerSpec> for String {
    fn from(spec: CompilerSpec) -> Self {
        spec.0
    }
}

impl std::fmt::Display for CompilerSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
