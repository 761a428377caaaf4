//! Domain types.

mod compiler;
mod credential;
mod descriptor;
mod env_var;
mod target;

pub use compiler::CompilerSpec;
pub use credential::Credential;
pub use descriptor::NetworkDescriptor;
pub use env_var::EnvVar;
pub use target::ResolvedTarget;
