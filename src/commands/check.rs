//! `seedusers check` command.

use std::path::Path;

use tracing::info;

use crate::check::{check_file, CheckReport};
use crate::config::GeneratorConfig;
use crate::context::ServiceContext;
use crate::error::Result;

/// Checks `path` (or the configured output) against the configured services.
///
/// # Errors
///
/// Returns an error if the config or the CSV cannot be loaded. Invariant
/// violations are returned inside the report.
pub fn run(
    ctx: &ServiceContext,
    path: Option<&Path>,
    config: Option<&Path>,
) -> Result<CheckReport> {
    let config = GeneratorConfig::load_optional(ctx.fs.as_ref(), config)?;
    let path = path.unwrap_or(config.output.as_path());
    let report = check_file(ctx.fs.as_ref(), path, &config.services)?;
    info!(
        path = %path.display(),
        rows = report.rows,
        violations = report.violations.len(),
        "checked users"
    );
    Ok(report)
}
