//! Layered source.

use super::Source;
use crate::core::domain::EnvVar;

/// Consults several sources in order; the first one that has the variable
/// set (even to an empty string) answers.
///
/// The usual stack is process environment over a `.env` file, which keeps
/// dotenv's rule that the file never overrides a variable already present.
#[derive(Default)]
pub struct Layered {
    layers: Vec<Box<dyn Source>>,
}

impl Layered {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a lower-priority layer
    pub fn with(mut self, source: impl Source + 'static) -> Self {
        self.layers.push(Box::new(source));
        self
    }

    /// Number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether there are no layers
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Source for Layered {
    fn get(&self, name: &str) -> EnvVar {
        self.layers
            .iter()
            .map(|layer| layer.get(name))
            .find(EnvVar::is_set)
            .unwrap_or_else(|| EnvVar::unset(name))
    }
}

impl std::fmt::Debug for Layered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layered")
            .field("layers", &self.layers.len())
            .finish()
    }
}
