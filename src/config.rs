//! Generator configuration: built-in defaults and optional config files.
//!
//! A config file may override any subset of the defaults. Files ending in
//! `.json` are parsed as JSON, everything else as YAML:
//!
//! ```yaml
//! count: 20
//! output: seed/users.csv
//! services: [gemini-direct, gemini-dialogue]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::generator::DEFAULT_MAX_ATTEMPTS;
use crate::ports::FileSystem;

/// Number of users generated when nothing else is configured.
pub const DEFAULT_COUNT: usize = 50;

/// Output file written when nothing else is configured.
pub const DEFAULT_OUTPUT: &str = "users.csv";

/// Short, readable words used to build usernames.
pub const DEFAULT_WORDS: [&str; 26] = [
    "apple", "baker", "candy", "delta", "eagle", "frost", "grape", "happy", "island", "jolly",
    "kitten", "lemon", "monkey", "noodle", "orange", "panda", "quartz", "rocket", "sunny", "tiger",
    "umbrella", "violet", "whale", "xenon", "yellow", "zebra",
];

/// Services a generated user can be entitled to.
pub const DEFAULT_SERVICES: [&str; 3] =
    ["gemini-direct", "gemini-explanation", "gemini-scaffolding"];

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of records to generate.
    pub count: usize,
    /// Candidate words for usernames.
    pub words: Vec<String>,
    /// Assignable service ids.
    pub services: Vec<String>,
    /// Username draws allowed per record.
    pub max_attempts: usize,
    /// Destination CSV path.
    pub output: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            words: DEFAULT_WORDS.iter().map(|w| (*w).to_string()).collect(),
            services: DEFAULT_SERVICES.iter().map(|s| (*s).to_string()).collect(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// On-disk shape of a config file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    count: Option<usize>,
    words: Option<Vec<String>>,
    services: Option<Vec<String>>,
    max_attempts: Option<usize>,
    output: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Loads `path` and layers it over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read and `Config` if it cannot be
    /// parsed.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        let content = fs.read_to_string(path).map_err(|source| Error::Io {
            operation: "read",
            path: path.to_path_buf(),
            source,
        })?;
        let file = parse(&content, path)?;
        Ok(Self::default().merge(file))
    }

    /// Loads `path` when given, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// See [`GeneratorConfig::load`].
    pub fn load_optional(fs: &dyn FileSystem, path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(fs, path),
            None => Ok(Self::default()),
        }
    }

    fn merge(mut self, file: FileConfig) -> Self {
        if let Some(count) = file.count {
            self.count = count;
        }
        if let Some(words) = file.words {
            self.words = words;
        }
        if let Some(services) = file.services {
            self.services = services;
        }
        if let Some(max_attempts) = file.max_attempts {
            self.max_attempts = max_attempts;
        }
        if let Some(output) = file.output {
            self.output = output;
        }
        self
    }

    /// Checks settings that the generator does not validate itself.
    ///
    /// Word and service lists are validated by [`crate::generator::Generator::new`].
    ///
    /// # Errors
    ///
    /// Returns `Config` for a zero attempt bound.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(Error::config("max_attempts must be at least 1"));
        }
        Ok(())
    }
}

fn parse(content: &str, path: &Path) -> Result<FileConfig> {
    let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let parsed: Result<FileConfig, String> = if is_json {
        serde_json::from_str(content).map_err(|e| e.to_string())
    } else if content.trim().is_empty() {
        Ok(FileConfig::default())
    } else {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    };
    parsed.map_err(|e| Error::config(format!("{}: {e}", path.display())))
}
