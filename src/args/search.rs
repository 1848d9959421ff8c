//! Command-line search functionality.

use std::io::{self, Write};

use crate::logic::match_records;
use crate::state::Record;

/// What: Print the records matching `query`, one per line.
///
/// Inputs:
/// - `query`: Search text; matched the same way as in the TUI
/// - `records`: Base list
/// - `out`: Destination writer
///
/// Output:
/// - Number of matches written.
///
/// # Errors
/// - Propagates write errors.
///
/// Details:
/// - No debounce applies here; the matcher runs once.
/// - Lines read `Name (born - died)`; nothing is printed when nothing matches.
pub fn write_matches<W: Write>(query: &str, records: &[Record], out: &mut W) -> io::Result<usize> {
    let matches = match_records(query, records);
    for r in &matches {
        writeln!(out, "{}", r.title())?;
    }
    tracing::debug!(query = %query, matches = matches.len(), "cli search finished");
    Ok(matches.len())
}
