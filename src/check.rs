//! Re-validation of a previously written user file.
//!
//! Loads the CSV and reports every row that breaks a record invariant, so a
//! hand-edited or foreign file can be vetted before it is imported.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::csv_io::read_csv;
use crate::error::Result;
use crate::ports::FileSystem;
use crate::record::UserRecord;

/// The invariant a row violates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// `allowedServices` is empty.
    NoServices,
    /// A service appears twice in `allowedServices`.
    DuplicateService(String),
    /// `defaultService` is not one of the allowed services.
    DefaultNotAllowed(String),
    /// A service outside the known service list.
    UnknownService(String),
    /// The username was already used on an earlier row.
    DuplicateUsername { first_row: usize },
}

/// One invariant violation, located by its 1-based data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Data row number, not counting the header.
    pub row: usize,
    /// Username on the offending row.
    pub username: String,
    /// What is wrong with the row.
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} ({}): ", self.row, self.username)?;
        match &self.kind {
            ViolationKind::NoServices => write!(f, "no allowed services"),
            ViolationKind::DuplicateService(s) => write!(f, "service '{s}' listed twice"),
            ViolationKind::DefaultNotAllowed(s) => {
                write!(f, "default service '{s}' is not an allowed service")
            }
            ViolationKind::UnknownService(s) => write!(f, "unknown service '{s}'"),
            ViolationKind::DuplicateUsername { first_row } => {
                write!(f, "username already used on row {first_row}")
            }
        }
    }
}

/// Outcome of checking one file.
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// The file that was checked.
    pub path: PathBuf,
    /// Number of data rows read.
    pub rows: usize,
    /// Every violation found, in row order.
    pub violations: Vec<Violation>,
}

impl CheckReport {
    /// Returns `true` if no row violated an invariant.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Checks records against the invariants and the known service list.
#[must_use]
pub fn check_records<S: AsRef<str>>(records: &[UserRecord], services: &[S]) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        let row = index + 1;
        let mut push = |kind| {
            violations.push(Violation { row, username: record.username.clone(), kind });
        };

        if let Some(&first_row) = first_seen.get(record.username.as_str()) {
            push(ViolationKind::DuplicateUsername { first_row });
        } else {
            first_seen.insert(&record.username, row);
        }

        if record.allowed_services.is_empty() {
            push(ViolationKind::NoServices);
        }
        if let Some(dup) = record.duplicate_service() {
            push(ViolationKind::DuplicateService(dup.to_string()));
        }
        for service in &record.allowed_services {
            if !services.iter().any(|known| known.as_ref() == service) {
                push(ViolationKind::UnknownService(service.clone()));
            }
        }
        if !record.default_is_allowed() {
            push(ViolationKind::DefaultNotAllowed(record.default_service.clone()));
        }
    }

    violations
}

/// Reads `path` and checks every row.
///
/// # Errors
///
/// Returns an error when the file cannot be read or is not a well-formed
/// user CSV. Invariant violations are reported, not returned as errors.
pub fn check_file<S: AsRef<str>>(
    fs: &dyn FileSystem,
    path: &Path,
    services: &[S],
) -> Result<CheckReport> {
    let records = read_csv(fs, path)?;
    let violations = check_records(&records, services);
    Ok(CheckReport { path: path.to_path_buf(), rows: records.len(), violations })
}
