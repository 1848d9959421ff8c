//! Record sources: the embedded dataset and user-supplied JSON files.
//!
//! Records are loaded once at startup and handed to the controller as-is; the
//! order in the file is the order shown when the query is empty.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::state::Record;

/// Dataset compiled into the binary, used when no data file is configured.
const BUILTIN_PEOPLE: &str = include_str!("../../data/people.json");

/// Failures while loading a record list.
#[derive(Debug, Error)]
pub enum DataError {
    /// The data file could not be read.
    #[error("cannot read data file {path}: {source}")]
    Io {
        /// File that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The content is not a JSON array of records.
    #[error("invalid record data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share the same slug.
    #[error("duplicate record slug '{0}'")]
    DuplicateSlug(String),
}

/// What: Parse and validate a JSON array of records.
///
/// Inputs:
/// - `json`: Array of objects with `slug`, `name`, `sex`, `born`, `died`
///   and optional `fatherName`/`motherName`
///
/// Output:
/// - Records in document order, or the first problem found.
///
/// # Errors
/// - [`DataError::Parse`] for malformed JSON or missing fields.
/// - [`DataError::DuplicateSlug`] when a slug appears twice.
pub fn parse_records(json: &str) -> Result<Vec<Record>, DataError> {
    let records: Vec<Record> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(records.len());
    for r in &records {
        if !seen.insert(r.slug.as_str()) {
            return Err(DataError::DuplicateSlug(r.slug.clone()));
        }
    }
    Ok(records)
}

/// What: Return the dataset compiled into the binary.
///
/// Output:
/// - Built-in people, sorted by name; empty (with an error logged) if the
///   embedded file were ever invalid.
#[must_use]
pub fn builtin_records() -> Vec<Record> {
    match parse_records(BUILTIN_PEOPLE) {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(error = %e, "embedded dataset is invalid");
            Vec::new()
        }
    }
}

/// What: Load records from a file, or the built-in dataset when no path is given.
///
/// Inputs:
/// - `path`: Optional JSON file
///
/// Output:
/// - Records in file order.
///
/// # Errors
/// - [`DataError::Io`] when the file cannot be read, plus anything
///   [`parse_records`] reports.
pub fn load_records(path: Option<&Path>) -> Result<Vec<Record>, DataError> {
    let Some(path) = path else {
        let records = builtin_records();
        tracing::info!(count = records.len(), "using built-in dataset");
        return Ok(records);
    };
    let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&content)?;
    tracing::info!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}
