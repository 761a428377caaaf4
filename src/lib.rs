//! Berth - Resolve deployment targets for smart-contract pipelines.
//!
//! Given a target name, berth reads the variables that target needs from the
//! environment, validates them, and hands back an endpoint plus a signing
//! key, or fails before anything touches the network.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── targets       # List registered targets
//! │   ├── resolve       # Resolve one target
//! │   ├── check         # Resolve every target
//! │   ├── compiler      # Print compiler version
//! │   ├── run           # Hand a target to a deployment driver
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # berth.toml management
//!     ├── domain/       # EnvVar, Credential, descriptors, targets
//!     ├── source/       # Ambient configuration backends
//!     │   ├── mod       # Source trait
//!     │   ├── process   # Process environment
//!     │   ├── dotenv    # .env files
//!     │   ├── layered   # Ordered fallback
//!     │   └── memory    # Fixed mapping
//!     ├── registry      # Target registration and resolution
//!     └── validation    # URL, hex and version checks
//! ```
//!
//! # Example
//!
//! ```
//! use berth::{Memory, NetworkDescriptor, Registry};
//!
//! let registry = Registry::builder()
//!     .with(NetworkDescriptor::new("goerli", "GOERLI_URL", "PRIVAT_KEY"))
//!     .unwrap()
//!     .build();
//!
//! let env = Memory::from_pairs([
//!     ("GOERLI_URL", "https://goerli.example/v1"),
//!     ("PRIVAT_KEY", "abc123"),
//! ]);
//!
//! let target = registry.resolve("goerli", &env).unwrap();
//! assert_eq!(target.endpoint_url(), "https://goerli.example/v1");
//! assert_eq!(target.credential().expose_hex(), "0xabc123");
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::config::Config;
pub use crate::core::domain::{CompilerSpec, Credential, EnvVar, NetworkDescriptor, ResolvedTarget};
pub use crate::core::registry::{Registry, RegistryBuilder};
pub use crate::core::source::{Dotenv, Layered, Memory, Process, Source};
pub use crate::error::{ConfigError, Error, RegistryError, ResolveError, Result};
