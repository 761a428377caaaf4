//! Constants used throughout berth.
//!
//! Centralizes file names, variable names, and compiled-in defaults.

/// Project configuration file name.
pub const CONFIG_FILE: &str = "berth.toml";

/// Dotenv file layered under the process environment.
pub const ENV_FILE: &str = ".env";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "BERTH_LOG";

/// Compiler version used when `berth.toml` does not set one.
pub const DEFAULT_COMPILER_VERSION: &str = "0.8.4";

/// Name of the compiled-in deployment target.
pub const DEFAULT_NETWORK: &str = "goerli";

/// Variable supplying the RPC URL of the compiled-in target.
pub const DEFAULT_ENDPOINT_ENV: &str = "GOERLI_URL";

/// Variable supplying the signing key of the compiled-in target.
pub const DEFAULT_CREDENTIAL_ENV: &str = "PRIVAT_KEY";

/// Variables injected into a deployment driver by `berth run`.
pub mod inject {
    /// Name of the resolved target.
    pub const NETWORK: &str = "BERTH_NETWORK";
    /// Validated RPC endpoint.
    pub const RPC_URL: &str = "BERTH_RPC_URL";
    /// `0x`-prefixed signing key.
    pub const PRIVATE_KEY: &str = "BERTH_PRIVATE_KEY";
    /// Compiler version for the toolchain.
    pub const COMPILER_VERSION: &str = "BERTH_COMPILER_VERSION";
}
