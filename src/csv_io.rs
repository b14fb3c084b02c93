//! CSV encoding of user records.

use std::path::Path;

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use tracing::info;

use crate::error::{Error, Result};
use crate::ports::FileSystem;
use crate::record::{UserRecord, HEADER};

/// Encodes records as CSV text, header first.
///
/// Rows end in CRLF. Fields containing a comma, quote or newline are
/// quoted. The header is always written, so an empty batch yields a single
/// line.
///
/// # Errors
///
/// Returns a `Csv` error if a record cannot be serialized.
pub fn encode_csv(records: &[UserRecord]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }

    let bytes = writer.into_inner().map_err(|e| Error::Csv(e.into_error().into()))?;
    String::from_utf8(bytes).map_err(|e| {
        Error::Csv(std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
    })
}

/// Parses CSV text produced by [`encode_csv`].
///
/// # Errors
///
/// Returns `BadHeader` when the first row is not the expected header, or a
/// `Csv` error for rows that do not have exactly three fields.
pub fn decode_csv(text: &str) -> Result<Vec<UserRecord>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(text.as_bytes());

    let headers = reader.headers()?;
    if headers.iter().ne(HEADER) {
        return Err(Error::BadHeader { found: headers.iter().collect::<Vec<_>>().join(",") });
    }

    reader.deserialize::<UserRecord>().map(|row| row.map_err(Error::from)).collect()
}

/// Writes records to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an `Io` error if the file cannot be written; the previous file,
/// if any, is left untouched.
pub fn write_csv(fs: &dyn FileSystem, records: &[UserRecord], path: &Path) -> Result<()> {
    let text = encode_csv(records)?;
    fs.write(path, &text).map_err(|source| Error::Io {
        operation: "write",
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows = records.len(), "wrote csv");
    Ok(())
}

/// Reads and parses the CSV file at `path`.
///
/// # Errors
///
/// Returns an `Io` error if the file cannot be read, otherwise see
/// [`decode_csv`].
pub fn read_csv(fs: &dyn FileSystem, path: &Path) -> Result<Vec<UserRecord>> {
    let text = fs.read_to_string(path).map_err(|source| Error::Io {
        operation: "read",
        path: path.to_path_buf(),
        source,
    })?;
    decode_csv(&text)
}
