//! Berth - Resolve deployment targets for smart-contract pipelines.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use berth::cli::output;
use berth::cli::{execute, Cli, Options};
use berth::core::constants;
use berth::error::{Error, RegistryError, ResolveError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("berth=debug")
        } else {
            EnvFilter::new("berth=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).without_time())
        .init();

    let options = Options {
        config: cli.config,
        env_file: cli.env_file,
        no_env_file: cli.no_env_file,
    };

    if let Err(e) = execute(cli.command, &options) {
        let suggestion = match &e {
            Error::Resolve(ResolveError::UnknownTarget { .. }) => {
                Some("run: berth targets".to_string())
            }
            Error::Resolve(ResolveError::MissingConfig { name }) => Some(format!(
                "set {} in the environment or in {}",
                name,
                constants::ENV_FILE
            )),
            Error::Registry(RegistryError::InvalidDescriptor { .. }) => {
                Some(format!("check {}", constants::CONFIG_FILE))
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
