//! `seedusers generate` command.

use std::path::PathBuf;

use tracing::info;

use crate::cli::GenerateArgs;
use crate::config::GeneratorConfig;
use crate::context::ServiceContext;
use crate::csv_io::write_csv;
use crate::error::Result;
use crate::generator::Generator;
use crate::rng::SessionRng;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// Number of users written.
    pub count: usize,
    /// File the users were written to.
    pub path: PathBuf,
    /// Seed that reproduces this run.
    pub seed: u64,
}

impl GenerateOutcome {
    /// The one-line summary printed on success.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Generated {} unique users in {}", self.count, self.path.display())
    }
}

/// Resolves the config, generates the batch and writes it out.
///
/// # Errors
///
/// Returns an error if the config is invalid, the username space is
/// exhausted, or the output cannot be written.
pub fn run(ctx: &ServiceContext, args: &GenerateArgs) -> Result<GenerateOutcome> {
    let config = resolve_config(ctx, args)?;
    let mut rng = SessionRng::from_optional(args.seed);
    info!(
        seed = rng.seed(),
        count = config.count,
        output = %config.output.display(),
        "generating users"
    );

    let records = Generator::new(&config.words, &config.services)?
        .with_max_attempts(config.max_attempts)
        .generate_batch(config.count, &mut rng)?;
    write_csv(ctx.fs.as_ref(), &records, &config.output)?;

    Ok(GenerateOutcome { count: records.len(), path: config.output, seed: rng.seed() })
}

/// Layers CLI flags over the config file and defaults.
fn resolve_config(ctx: &ServiceContext, args: &GenerateArgs) -> Result<GeneratorConfig> {
    let mut config = GeneratorConfig::load_optional(ctx.fs.as_ref(), args.config.as_deref())?;
    if let Some(count) = args.count {
        config.count = count;
    }
    if let Some(output) = &args.output {
        config.output.clone_from(output);
    }
    if let Some(max_attempts) = args.max_attempts {
        config.max_attempts = max_attempts;
    }
    config.validate()?;
    Ok(config)
}
