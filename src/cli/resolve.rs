//! Resolve command.
//!
//! Resolve one target and show what a deployment driver would receive,
//! minus the key itself.

use tracing::debug;

use crate::cli::{output, Context, Options};
use crate::error::Result;

/// Resolve a target.
pub fn execute(options: &Options, name: &str, json: bool) -> Result<()> {
    let ctx = Context::load(options)?;
    let target = ctx.registry.resolve(name, &ctx.source)?;
    let credential = target.credential();

    debug!(target_name = name, "printing resolved target");

    if json {
        let result = serde_json::json!({
            "target": target.name(),
            "endpoint_url": target.endpoint_url(),
            "credential_env": credential.source(),
            "credential_digits": credential.digit_count(),
            "compiler": ctx.config.compiler().as_str(),
        });
        output::data(&serde_json::to_string_pretty(&result)?);
    } else {
        output::success(&format!("{} resolved", target.name()));
        output::kv("endpoint", target.endpoint_url());
        output::kv(
            "credential",
            format!("{} hex digits from {}", credential.digit_count(), credential.source()),
        );
        output::kv("compiler", ctx.config.compiler());
    }

    Ok(())
}
