//! In-memory source.

use std::collections::BTreeMap;

use zeroize::Zeroizing;

use super::Source;
use crate::core::domain::EnvVar;

/// A fixed mapping of variables, used for tests and for composing sources.
#[derive(Default, Clone)]
pub struct Memory {
    vars: BTreeMap<String, Zeroizing<String>>,
}

impl Memory {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from name/value pairs; later pairs override earlier ones
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut source = Self::new();
        for (k, v) in pairs {
            source.insert(k, v);
        }
        source
    }

    /// Set a variable
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), Zeroizing::new(value.into()));
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Source for Memory {
    fn get(&self, name: &str) -> EnvVar {
        match self.vars.get(name) {
            Some(value) => EnvVar::set(name, value.as_str()),
            None => EnvVar::unset(name),
        }
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("names", &self.vars.keys().collect::<Vec<_>>())
            .finish()
    }
}
