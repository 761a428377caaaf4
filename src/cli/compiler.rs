//! Compiler command.

use crate::cli::{output, Options};
use crate::core::config::Config;
use crate::error::Result;

/// Print the configured compiler version.
///
/// Only the project file is read; the environment is not consulted.
pub fn execute(options: &Options) -> Result<()> {
    let config = Config::load(options.config.as_deref())?;
    output::data(config.compiler().as_str());
    Ok(())
}
