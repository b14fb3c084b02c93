//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `seedusers`.
#[derive(Debug, Parser)]
#[command(name = "seedusers", version, about = "Generate synthetic user CSV files")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` wins when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// The command to execute; defaults to `generate`.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// `generate` options accepted before (or without) a subcommand.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

impl Cli {
    /// The command to run, falling back to `generate`.
    ///
    /// Options given before the subcommand fill in whatever the subcommand
    /// leaves unset: all of them for `generate`, and `--config` plus
    /// `--output` (as the file to check) for `check`.
    #[must_use]
    pub fn command(&self) -> Command {
        match &self.command {
            None => Command::Generate(self.generate.clone()),
            Some(Command::Generate(args)) => Command::Generate(args.clone().or(&self.generate)),
            Some(Command::Check { path, config }) => Command::Check {
                path: path.clone().or_else(|| self.generate.output.clone()),
                config: config.clone().or_else(|| self.generate.config.clone()),
            },
        }
    }
}

/// Supported top-level subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate a CSV of unique users with random service entitlements.
    Generate(GenerateArgs),
    /// Check an existing user CSV against the record invariants.
    Check {
        /// File to check; defaults to the configured output path.
        path: Option<PathBuf>,
        /// YAML or JSON config supplying the known service list.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Options for `seedusers generate`. Unset options fall back to the config
/// file, then to built-in defaults.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Number of users to generate.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,
    /// Destination CSV file; replaced if it exists.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Seed for a reproducible run.
    #[arg(long, env = "SEEDUSERS_SEED")]
    pub seed: Option<u64>,
    /// YAML or JSON config overriding the built-in word and service lists.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Username draws allowed per record before giving up.
    #[arg(long)]
    pub max_attempts: Option<usize>,
}

impl GenerateArgs {
    /// Keeps the options set here and takes the rest from `fallback`.
    #[must_use]
    pub fn or(self, fallback: &GenerateArgs) -> Self {
        Self {
            count: self.count.or(fallback.count),
            output: self.output.or_else(|| fallback.output.clone()),
            seed: self.seed.or(fallback.seed),
            config: self.config.or_else(|| fallback.config.clone()),
            max_attempts: self.max_attempts.or(fallback.max_attempts),
        }
    }
}
