//! Targets command.
//!
//! List registered deployment targets and the variables they read.

use crate::cli::{output, Context, Options};
use crate::error::Result;

/// List targets.
pub fn execute(options: &Options, json: bool) -> Result<()> {
    let ctx = Context::load(options)?;
    let registry = &ctx.registry;

    if json {
        let targets: Vec<_> = registry
            .descriptors()
            .map(|d| {
                serde_json::json!({
                    "name": d.name(),
                    "endpoint_env": d.endpoint_env(),
                    "credential_env": d.credential_env(),
                })
            })
            .collect();

        let result = serde_json::json!({
            "targets": targets,
            "count": registry.len(),
        });
        output::data(&serde_json::to_string_pretty(&result)?);
    } else if registry.is_empty() {
        output::dimmed("no targets registered");
    } else {
        output::section(&format!(
            "{} target{}",
            registry.len(),
            if registry.len() == 1 { "" } else { "s" }
        ));
        for d in registry.descriptors() {
            output::kv(
                d.name(),
                format!("{} / {}", d.endpoint_env(), d.credential_env()),
            );
        }
    }

    Ok(())
}
