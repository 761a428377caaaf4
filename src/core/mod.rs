//! Core library components.
//!
//! This module contains the reusable resolution logic: reading ambient
//! configuration, validating it, and binding it to deployment targets.

pub mod config;
pub mod constants;
pub mod domain;
pub mod registry;
pub mod source;
pub mod types;
pub mod validation;
