//! Process environment source.

use super::Source;
use crate::core::domain::EnvVar;

/// Reads the current process environment on every call.
///
/// Values that are not valid UTF-8 are treated as unset.
#[derive(Debug, Default, Clone, Copy)]
pub struct Process;

impl Source for Process {
    fn get(&self, name: &str) -> EnvVar {
        match std::env::var(name) {
            Ok(value) => EnvVar::set(name, value),
            Err(_) => EnvVar::unset(name),
        }
    }
}
