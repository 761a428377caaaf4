//! Error types.
//!
//! Each component has its own error enum; `Error` wraps them so callers can
//! propagate everything with `?` and still match on the specific failure.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Failures while turning a target name into a `ResolvedTarget`.
///
/// None of these variants ever carry credential material.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unknown target: {name}{}", known_suffix(.known))]
    UnknownTarget { name: String, known: Vec<String> },

    #[error("missing required environment variable: {name}")]
    MissingConfig { name: String },

    #[error("invalid endpoint url: {value}")]
    InvalidEndpoint { value: String },

    /// Names the variable that held the key, never the key itself.
    #[error("invalid credential in {name}: expected a hex-encoded private key")]
    InvalidCredential { name: String },
}

fn known_suffix(known: &[String]) -> String {
    if known.is_empty() {
        String::new()
    } else {
        format!(" (known targets: {})", known.join(", "))
    }
}

/// Failures while building the target registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate target: {name}")]
    DuplicateTarget { name: String },

    #[error("invalid target descriptor '{name}': {reason}")]
    InvalidDescriptor { name: String, reason: String },
}

/// Failures while loading or validating `berth.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("invalid compiler version: '{0}'")]
    InvalidCompilerVersion(String),

    #[error("failed to read env file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
