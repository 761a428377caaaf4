//! Check command.
//!
//! Resolve every registered target and report which are ready to deploy.

use crate::cli::{output, Context, Options};
use crate::error::{Error, Result};

/// Check all targets.
///
/// # Errors
///
/// Returns an error if any target fails to resolve, after reporting all of
/// them.
pub fn execute(options: &Options, json: bool) -> Result<()> {
    let ctx = Context::load(options)?;
    let results = ctx.registry.check_all(&ctx.source);
    let failed = results.iter().filter(|(_, r)| r.is_err()).count();

    if json {
        let targets: Vec<_> = results
            .iter()
            .map(|(name, result)| match result {
                Ok(()) => serde_json::json!({ "name": name, "ok": true }),
                Err(e) => serde_json::json!({
                    "name": name,
                    "ok": false,
                    "error": e.to_string(),
                }),
            })
            .collect();

        let result = serde_json::json!({
            "targets": targets,
            "failed": failed,
        });
        output::data(&serde_json::to_string_pretty(&result)?);
    } else {
        output::section("Targets");
        for (name, result) in &results {
            match result {
                Ok(()) => output::success(name),
                Err(e) => output::error(&format!("{}: {}", name, e)),
            }
        }
    }

    if failed > 0 {
        return Err(Error::Other(format!(
            "{} of {} targets failed to resolve",
            failed,
            results.len()
        )));
    }

    Ok(())
}
