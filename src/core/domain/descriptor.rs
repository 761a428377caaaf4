//! NetworkDescriptor type.
//!
//! Static definition of a deployment target: which variables supply its
//! endpoint and its signing key.

use serde::{Deserialize, Serialize};

use crate::core::types::{TargetName, VarName};
use crate::core::validation;
use crate::error::RegistryError;

/// A named deployment target and the variables that feed it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkDescriptor {
    name: TargetName,
    endpoint_env: VarName,
    credential_env: VarName,
}

impl NetworkDescriptor {
    /// Create a descriptor
    pub fn new(
        name: impl Into<TargetName>,
        endpoint_env: impl Into<VarName>,
        credential_env: impl Into<VarName>,
    ) -> Self {
        Self {
            name: name.into(),
            endpoint_env: endpoint_env.into(),
            credential_env: credential_env.into(),
        }
    }

    /// Target name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variable supplying the RPC URL
    pub fn endpoint_env(&self) -> &str {
        &self.endpoint_env
    }

    /// Variable supplying the private key
    pub fn credential_env(&self) -> &str {
        &self.credential_env
    }

    /// Check the descriptor is usable.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidDescriptor` if the name is blank or
    /// either variable name is not a valid environment variable name.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let invalid = |reason: String| RegistryError::InvalidDescriptor {
            name: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("target name cannot be empty".to_string()));
        }
        validation::validate_var_name(&self.endpoint_env)
            .map_err(|r| invalid(format!("endpoint_env: {}", r)))?;
        validation::validate_var_name(&self.credential_env)
            .map_err(|r| invalid(format!("credential_env: {}", r)))?;

        Ok(())
    }
}

impl std::fmt::Display for NetworkDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
