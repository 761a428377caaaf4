//! Command-line interface.

pub mod check;
pub mod compiler;
pub mod completions;
pub mod output;
pub mod resolve;
pub mod run;
pub mod targets;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::core::config::Config;
use crate::core::constants;
use crate::core::registry::Registry;
use crate::core::source::{Dotenv, Layered, Process};
use crate::error::Result;

/// Berth - Resolve deployment targets for smart-contract pipelines.
#[derive(Parser)]
#[command(
    name = "berth",
    about = "Resolve and validate smart-contract deployment targets",
    version
)]
pub struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the project file (defaults to ./berth.toml when present)
    #[arg(long, global = true, env = "BERTH_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Dotenv file layered under the process environment (defaults to ./.env)
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Read only the process environment
    #[arg(long, global = true, conflicts_with = "env_file")]
    pub no_env_file: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// List registered deployment targets
    Targets {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a target and show its endpoint (the key is never printed)
    Resolve {
        /// Target name (e.g., goerli)
        target: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve every target and report which ones are ready
    Check {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the compiler version for the toolchain
    Compiler,

    /// Run a deployment command with the resolved target injected
    Run {
        /// Target name (e.g., goerli)
        target: String,
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Where configuration comes from for one invocation.
#[derive(Debug, Default, Clone)]
pub struct Options {
    pub config: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    pub no_env_file: bool,
}

/// Loaded configuration, frozen registry, and ambient source.
pub struct Context {
    pub config: Config,
    pub registry: Registry,
    pub source: Layered,
}

impl Context {
    /// Load everything a command needs.
    ///
    /// # Errors
    ///
    /// Returns config, registry or env file errors.
    pub fn load(options: &Options) -> Result<Self> {
        let config = Config::load(options.config.as_deref())?;
        let registry = config.registry()?;

        let mut source = Layered::new().with(Process);
        if !options.no_env_file {
            let dotenv = match &options.env_file {
                Some(path) => Dotenv::load(path)?,
                None => Dotenv::load_optional(constants::ENV_FILE)?,
            };
            source = source.with(dotenv);
        }

        debug!(
            targets = registry.len(),
            layers = source.len(),
            "context loaded"
        );

        Ok(Self {
            config,
            registry,
            source,
        })
    }
}

/// Execute a command.
pub fn execute(command: Command, options: &Options) -> Result<()> {
    use Command::*;

    match command {
        Targets { json } => targets::execute(options, json),
        Resolve { target, json } => resolve::execute(options, &target, json),
        Check { json } => check::execute(options, json),
        Compiler => compiler::execute(options),
        Run { target, command } => run::execute(options, &target, &command),
        Completions { shell } => completions::execute(shell),
    }
}
