//! Error taxonomy for generation, serialization and configuration.

use std::path::PathBuf;

use thiserror::Error as ThisError;

/// Errors produced by the library.
#[derive(ThisError, Debug)]
pub enum Error {
    /// The candidate word list has no entries.
    #[error("word list is empty; at least one word is required")]
    EmptyWordList,

    /// The service enumeration has no entries.
    #[error("service list is empty; at least one service is required")]
    EmptyServices,

    /// A word is blank, so usernames could not be told apart.
    #[error("word list contains a blank word")]
    BlankWord,

    /// A service id is blank or contains the `,` used to join services.
    #[error("service '{service}' must be non-blank and must not contain ','")]
    InvalidService {
        /// The rejected service id.
        service: String,
    },

    /// The service enumeration lists the same id more than once.
    #[error("service '{service}' appears more than once in the service list")]
    DuplicateService {
        /// The repeated service id.
        service: String,
    },

    /// The username space ran out before `requested` records were produced.
    ///
    /// `attempts` is the per-record draw bound that was in effect.
    #[error(
        "exhausted unique usernames after {produced} of {requested} users \
         (limit {attempts} attempts per user)"
    )]
    GenerationExhausted {
        /// Records generated before giving up.
        produced: usize,
        /// Records asked for.
        requested: usize,
        /// Draw bound per record.
        attempts: usize,
    },

    /// Configuration could not be loaded or failed validation.
    #[error("invalid configuration: {message}")]
    Config {
        /// What is wrong with the configuration.
        message: String,
    },

    /// A CSV file does not start with the expected header row.
    #[error("unexpected header '{found}', expected 'username,allowedServices,defaultService'")]
    BadHeader {
        /// The header row that was read.
        found: String,
    },

    /// CSV encoding or decoding failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Reading or writing a file failed.
    #[error("failed to {operation} {}: {source}", path.display())]
    Io {
        /// `read` or `write`.
        operation: &'static str,
        /// The file involved.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Builds a `Config` error from any displayable message.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config { message: message.into() }
    }
}

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
