//! Deployment target registry.
//!
//! `RegistryBuilder` collects descriptors during startup; `build` freezes
//! them into a `Registry`, which only resolves. Resolution order:
//!
//! 1. the target name must be registered (checked before any variable read)
//! 2. the endpoint variable must be set, then must be a URL with a host
//! 3. the credential variable must be set, then must be hex digits
//!
//! The first failure is returned; nothing partial is ever handed out.

use std::collections::BTreeMap;

use tracing::debug;

use crate::core::domain::{Credential, NetworkDescriptor, ResolvedTarget};
use crate::core::source::Source;
use crate::core::types::TargetName;
use crate::core::validation;
use crate::error::{RegistryError, ResolveError};

/// Accepts descriptor registrations until frozen with [`build`](Self::build).
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    targets: BTreeMap<TargetName, NetworkDescriptor>,
}

impl RegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateTarget` if the name is taken, or
    /// `RegistryError::InvalidDescriptor` if the descriptor is malformed.
    pub fn register(&mut self, descriptor: NetworkDescriptor) -> Result<(), RegistryError> {
        descriptor.validate()?;

        if self.targets.contains_key(descriptor.name()) {
            return Err(RegistryError::DuplicateTarget {
                name: descriptor.name().to_string(),
            });
        }

        debug!(target_name = descriptor.name(), "registering target");
        self.targets
            .insert(descriptor.name().to_string(), descriptor);

        Ok(())
    }

    /// Chaining form of [`register`](Self::register).
    ///
    /// # Errors
    ///
    /// Same as `register`.
    pub fn with(mut self, descriptor: NetworkDescriptor) -> Result<Self, RegistryError> {
        self.register(descriptor)?;
        Ok(self)
    }

    /// Freeze the descriptor set.
    pub fn build(self) -> Registry {
        debug!(targets = self.targets.len(), "registry frozen");
        Registry {
            targets: self.targets,
        }
    }
}

/// A frozen set of deployment targets.
///
/// Holds no interior mutability, so shared references can resolve from any
/// number of threads.
#[derive(Debug, Clone)]
pub struct Registry {
    targets: BTreeMap<TargetName, NetworkDescriptor>,
}

impl Registry {
    /// Start registering targets
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Build a registry from a list of descriptors.
    ///
    /// # Errors
    ///
    /// Returns the first `RegistryError` hit while registering.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = NetworkDescriptor>,
    ) -> Result<Self, RegistryError> {
        let mut builder = RegistryBuilder::new();
        for descriptor in descriptors {
            builder.register(descriptor)?;
        }
        Ok(builder.build())
    }

    /// Resolve a named target against an environment.
    ///
    /// # Errors
    ///
    /// - `UnknownTarget` if `name` is not registered
    /// - `MissingConfig` if the endpoint or credential variable is unset/empty
    /// - `InvalidEndpoint` if the endpoint is not a URL with scheme and host,
    ///   or carries whitespace or control characters
    /// - `InvalidCredential` if the key is not hex (the value is never included)
    pub fn resolve(&self, name: &str, env: &dyn Source) -> Result<ResolvedTarget, ResolveError> {
        let descriptor = self
            .targets
            .get(name)
            .ok_or_else(|| ResolveError::UnknownTarget {
                name: name.to_string(),
                known: self.targets.keys().cloned().collect(),
            })?;

        debug!(
            target_name = name,
            endpoint_env = descriptor.endpoint_env(),
            credential_env = descriptor.credential_env(),
            "resolving target"
        );

        let endpoint = env.require(descriptor.endpoint_env())?;
        if !validation::is_valid_endpoint(&endpoint) {
            return Err(ResolveError::InvalidEndpoint {
                value: endpoint.to_string(),
            });
        }

        let raw_key = env.require(descriptor.credential_env())?;
        let credential = Credential::parse(descriptor.credential_env(), &raw_key)?;

        debug!(target_name = name, "target resolved");

        Ok(ResolvedTarget::new(
            name.to_string(),
            endpoint.to_string(),
            credential,
        ))
    }

    /// Resolve every target, keeping only the outcome.
    ///
    /// Resolved targets are dropped immediately so no credential outlives
    /// the call.
    pub fn check_all(&self, env: &dyn Source) -> Vec<(TargetName, Result<(), ResolveError>)> {
        self.targets
            .keys()
            .map(|name| (name.clone(), self.resolve(name, env).map(drop)))
            .collect()
    }

    /// Look up a descriptor
    pub fn get(&self, name: &str) -> Option<&NetworkDescriptor> {
        self.targets.get(name)
    }

    /// Registered target names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    /// Registered descriptors, sorted by name
    pub fn descriptors(&self) -> impl Iterator<Item = &NetworkDescriptor> {
        self.targets.values()
    }

    /// Whether a target is registered
    pub fn contains(&self, name: &str) -> bool {
        self.targets.contains_key(name)
    }

    /// Number of targets
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
