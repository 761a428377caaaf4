//! Ambient configuration access.
//!
//! Everything that reads environment variables goes through the `Source`
//! trait, so the registry never touches `std::env` directly and tests can
//! inject a fixed mapping.
//!
//! ## Adding a New Source
//!
//! 1. Implement `Source::get`
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Vault { /* ... */ }
//!
//! impl Source for Vault {
//!     fn get(&self, name: &str) -> EnvVar {
//!         // Look up in the secret store
//!     }
//! }
//! ```

use zeroize::Zeroizing;

use crate::core::domain::EnvVar;
use crate::error::ResolveError;

mod dotenv;
mod layered;
mod memory;
mod process;

pub use dotenv::Dotenv;
pub use layered::Layered;
pub use memory::Memory;
pub use process::Process;

/// Read access to an ambient key/value store.
pub trait Source: Send + Sync {
    /// Read a variable.
    ///
    /// Never fails; an unset variable comes back with no value.
    fn get(&self, name: &str) -> EnvVar;

    /// Read a variable that must be present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::MissingConfig` naming the variable if it is
    /// unset or empty.
    fn require(&self, name: &str) -> Result<Zeroizing<String>, ResolveError> {
        match self.get(name).into_value() {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ResolveError::MissingConfig {
                name: name.to_string(),
            }),
        }
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn get(&self, name: &str) -> EnvVar {
        (**self).get(name)
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn get(&self, name: &str) -> EnvVar {
        (**self).get(name)
    }
}
