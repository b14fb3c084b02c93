//! Command dispatch and handlers.

pub mod check;
pub mod generate;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler using the live context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    dispatch_with_context(command, &ServiceContext::live())
}

/// Dispatch a command with the given service context, printing its result.
///
/// # Errors
///
/// Returns an error string if the handler fails or, for `check`, if any row
/// violates an invariant.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Generate(args) => {
            let outcome = generate::run(ctx, args).map_err(|e| e.to_string())?;
            println!("{}", outcome.summary());
            Ok(())
        }
        Command::Check { path, config } => {
            let report = check::run(ctx, path.as_deref(), config.as_deref())
                .map_err(|e| e.to_string())?;
            if report.passed() {
                println!("{}: {} users OK", report.path.display(), report.rows);
                return Ok(());
            }
            for violation in &report.violations {
                println!("{violation}");
            }
            Err(format!(
                "{}: {} violation(s) in {} users",
                report.path.display(),
                report.violations.len(),
                report.rows
            ))
        }
    }
}
