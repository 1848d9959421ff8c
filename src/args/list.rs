//! Command-line listing of every record.

use std::io::{self, Write};

use crate::state::{Record, Sex};

/// What: Print every record as `slug<TAB>sex<TAB>Name (born - died)`.
///
/// # Errors
/// - Propagates write errors.
pub fn write_all<W: Write>(records: &[Record], out: &mut W) -> io::Result<()> {
    for r in records {
        let sex = match r.sex {
            Sex::Male => 'm',
            Sex::Female => 'f',
        };
        writeln!(out, "{}\t{sex}\t{}", r.slug, r.title())?;
    }
    Ok(())
}
