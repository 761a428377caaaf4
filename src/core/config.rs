//! Project configuration.
//!
//! Handles reading and validating `berth.toml`. Without a file, the
//! compiled-in defaults apply: compiler `0.8.4` and a single `goerli` target
//! fed by `GOERLI_URL` and `PRIVAT_KEY`.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::domain::{CompilerSpec, NetworkDescriptor};
use crate::core::registry::Registry;
use crate::core::types::{TargetName, VarName};
use crate::error::{ConfigError, Result};

/// Project configuration stored in `berth.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Toolchain settings
    #[serde(default)]
    pub compiler: Compiler,
    /// Deployment targets keyed by name
    #[serde(default = "default_networks")]
    pub networks: BTreeMap<TargetName, Network>,
}

/// `[compiler]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Compiler {
    /// Version handed to the toolchain
    #[serde(default)]
    pub version: CompilerSpec,
}

/// `[networks.<name>]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Network {
    /// Variable supplying the RPC URL
    pub endpoint_env: VarName,
    /// Variable supplying the private key
    pub credential_env: VarName,
}

fn default_networks() -> BTreeMap<TargetName, Network> {
    let mut networks = BTreeMap::new();
    networks.insert(
        constants::DEFAULT_NETWORK.to_string(),
        Network {
            endpoint_env: constants::DEFAULT_ENDPOINT_ENV.to_string(),
            credential_env: constants::DEFAULT_CREDENTIAL_ENV.to_string(),
        },
    );
    networks
}

impl Config {
    /// Default configuration path in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist. Without one,
    /// `berth.toml` in the current directory is used if present, and the
    /// compiled-in defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if an explicit file is missing or
    /// unreadable, `ConfigError::Parse` if the TOML is malformed, or any
    /// validation error from [`validate`](Self::validate).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = Self::config_path();
                if !default.exists() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        Self::from_path(&path)
    }

    /// Load and validate a specific file
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        debug!(
            networks = config.networks.len(),
            compiler = %config.compiler.version,
            "config loaded"
        );

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Checks:
    /// - At least one network is declared
    /// - Every network descriptor has a name and valid variable names
    ///
    /// The compiler version is already checked while deserializing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` or `RegistryError` on failure.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        if self.networks.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "networks",
                reason: "at least one network must be declared".to_string(),
            }
            .into());
        }

        for descriptor in self.descriptors() {
            descriptor.validate()?;
        }

        Ok(())
    }

    /// Network descriptors, sorted by name
    pub fn descriptors(&self) -> impl Iterator<Item = NetworkDescriptor> + '_ {
        self.networks.iter().map(|(name, network)| {
            NetworkDescriptor::new(
                name.clone(),
                network.endpoint_env.clone(),
                network.credential_env.clone(),
            )
        })
    }

    /// Build the frozen target registry
    ///
    /// # Errors
    ///
    /// Returns `RegistryError` if a descriptor is rejected.
    pub fn registry(&self) -> Result<Registry> {
        Ok(Registry::from_descriptors(self.descriptors())?)
    }

    /// Compiler version for the toolchain
    pub fn compiler(&self) -> &CompilerSpec {
        &self.compiler.version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compiler: Compiler::default(),
            networks: default_networks(),
        }
    }
}
