//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A deployment target name (e.g., goerli, sepolia).
pub type TargetName = String;

/// An environment variable name (e.g., GOERLI_URL).
pub type VarName = String;
