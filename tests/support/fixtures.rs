//! Test fixtures and constants.

/// Endpoint used by the goerli fixtures.
pub const GOERLI_URL: &str = "https://goerli.example/v1";

/// A short key that passes the hex check.
pub const SHORT_KEY: &str = "abc123";

/// A full-length 32-byte signing key.
pub const FULL_KEY: &str = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

/// A value that must never show up in any output.
pub const LEAKY_KEY: &str = "s3cr3t-zz-not-hex";

/// Fully populated environment for the default target.
pub const GOERLI_ENV: &[(&str, &str)] = &[("GOERLI_URL", GOERLI_URL), ("PRIVAT_KEY", SHORT_KEY)];

/// Project file declaring two targets.
pub const TWO_TARGETS: &str = r#"
[compiler]
version = "0.8.19"

[networks.goerli]
endpoint_env = "GOERLI_URL"
credential_env = "PRIVAT_KEY"

[networks.sepolia]
endpoint_env = "SEPOLIA_URL"
credential_env = "SEPOLIA_KEY"
"#;
