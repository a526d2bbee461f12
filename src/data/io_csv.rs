//! Delimited-text pair reader.
//!
//! Records are read with the `csv` crate, so quoted fields (`"12","30"`)
//! and escaped quotes behave as in any spreadsheet export. There is no
//! header row. Fields are trimmed, and records whose fields are all empty
//! are skipped.

use std::io::{BufReader, Read};
use std::path::Path;

use super::model::Dataset;
use crate::error::ScoremapError;

/// Reads a dataset from a delimited-text file.
///
/// # Errors
/// Returns [`ScoremapError::SourceNotFound`] if the file does not exist and
/// [`ScoremapError::MalformedRecord`] for the first record that is not
/// exactly two non-negative integers.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use scoremap::data::io_csv::read_csv_pairs;
///
/// let dataset = read_csv_pairs(Path::new("grades.csv"))?;
/// # Ok::<(), scoremap::ScoremapError>(())
/// ```
pub fn read_csv_pairs(path: &Path) -> Result<Dataset, ScoremapError> {
    let file = super::open_source(path)?;
    from_csv_reader(BufReader::new(file), &path.display().to_string())
}

/// Reads a dataset from a delimited-text string.
///
/// Useful for testing without file I/O.
pub fn from_csv_str(csv_str: &str) -> Result<Dataset, ScoremapError> {
    from_csv_slice(csv_str.as_bytes())
}

/// Reads a dataset from delimited-text bytes.
///
/// Useful for fuzzing and processing raw bytes without requiring UTF-8 upfront.
pub fn from_csv_slice(bytes: &[u8]) -> Result<Dataset, ScoremapError> {
    from_csv_reader(bytes, "<bytes>")
}

pub(crate) fn from_csv_reader<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<Dataset, ScoremapError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut dataset = Dataset::new();

    for result in csv_reader.records() {
        let record = result.map_err(|err| csv_error(err, source_name))?;
        // A whitespace-only line trims to one empty field.
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        let line = record.position().map(|pos| pos.line()).unwrap_or(0);
        let fields: Vec<&str> = record.iter().collect();
        dataset.push(super::pair_from_fields(&fields, source_name, line)?);
    }

    Ok(dataset)
}

fn csv_error(err: csv::Error, source_name: &str) -> ScoremapError {
    let line = err.position().map(|pos| pos.line()).unwrap_or(0);
    let message = err.to_string();

    match err.into_kind() {
        csv::ErrorKind::Io(io) => ScoremapError::Io(io),
        _ => ScoremapError::MalformedRecord {
            source_name: source_name.to_string(),
            line,
            message,
        },
    }
}
