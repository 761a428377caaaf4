//! Run command.
//!
//! Hands a resolved target to a deployment driver process through its
//! environment.

use tracing::debug;

use crate::cli::{Context, Options};
use crate::core::constants::inject;
use crate::error::{Error, Result};

/// Run a command with the resolved target injected.
pub fn execute(options: &Options, name: &str, command: &[String]) -> Result<()> {
    let exit_code = run_with_target(options, name, command)?;
    std::process::exit(exit_code);
}

/// Resolve `name`, spawn `command` with the target in its environment, and
/// wait for it.
///
/// The credential is dropped (and wiped) as soon as the child is spawned.
/// `Command` keeps its own plain copy of the injected key in its env map, and
/// the child's environment holds another; neither is wiped.
pub fn run_with_target(options: &Options, name: &str, command: &[String]) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::Other("no command specified".to_string()))?;

    let ctx = Context::load(options)?;

    let mut child = {
        let target = ctx.registry.resolve(name, &ctx.source)?;

        // `cmd` lives only in this block, so its unwiped key copy is freed on spawn
        let mut cmd = std::process::Command::new(program);
        cmd.args(args)
            .env(inject::NETWORK, target.name())
            .env(inject::RPC_URL, target.endpoint_url())
            .env(inject::PRIVATE_KEY, target.credential().expose_hex())
            .env(inject::COMPILER_VERSION, ctx.config.compiler().as_str());

        debug!(target_name = name, program = %program, "spawning driver");
        cmd.spawn()?
    };

    let status = child.wait()?;
    debug!(code = ?status.code(), "driver exited");

    // Signal-terminated children have no code
    Ok(status.code().unwrap_or(1))
}
