//! Paired-score datasets and their readers.
//!
//! A source is a text file (or any readable stream) holding one `x,y`
//! observation per record. Two readers exist:
//!
//! - [`io_csv`]: standard delimited text, with quoting and escaping
//! - [`io_lines`]: naive line-by-line splitting on the comma
//!
//! The reader is chosen once through [`SourceFormat`], either from the
//! path's extension or from an explicit caller choice. Both readers are
//! fail-fast: the first malformed record aborts ingestion and no partial
//! dataset is returned.
//!
//! # Example
//!
//! ```
//! use scoremap::data::{read_pairs_from_reader, SourceFormat};
//!
//! let dataset = read_pairs_from_reader("0,0\n5,5\n".as_bytes(), SourceFormat::PlainLines, "<inline>")?;
//! assert_eq!(dataset.len(), 2);
//! # Ok::<(), scoremap::ScoremapError>(())
//! ```

mod format;
pub mod io_csv;
pub mod io_lines;
mod model;

pub use format::SourceFormat;
pub use model::{CoordinatePair, Dataset};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::ScoremapError;

/// Reads a dataset from a file, choosing the reader from its extension.
pub fn read_pairs(path: &Path) -> Result<Dataset, ScoremapError> {
    read_pairs_as(path, SourceFormat::from_path(path))
}

/// Reads a dataset from a file with an explicit format.
///
/// The file handle is dropped before this returns, on success and on
/// failure alike.
pub fn read_pairs_as(path: &Path, format: SourceFormat) -> Result<Dataset, ScoremapError> {
    debug!(path = %path.display(), %format, "reading pair source");
    let dataset = match format {
        SourceFormat::DelimitedText => io_csv::read_csv_pairs(path)?,
        SourceFormat::PlainLines => io_lines::read_line_pairs(path)?,
    };
    debug!(path = %path.display(), pairs = dataset.len(), "pair source consumed");
    Ok(dataset)
}

/// Reads a dataset from an already-open stream.
///
/// `source_name` only labels error messages.
pub fn read_pairs_from_reader<R: Read>(
    reader: R,
    format: SourceFormat,
    source_name: &str,
) -> Result<Dataset, ScoremapError> {
    let dataset = match format {
        SourceFormat::DelimitedText => io_csv::from_csv_reader(reader, source_name)?,
        SourceFormat::PlainLines => {
            io_lines::from_lines_reader(BufReader::new(reader), source_name)?
        }
    };
    debug!(source = source_name, pairs = dataset.len(), "pair source consumed");
    Ok(dataset)
}

/// Opens a source file, reporting a missing file as [`ScoremapError::SourceNotFound`].
pub(crate) fn open_source(path: &Path) -> Result<File, ScoremapError> {
    File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => ScoremapError::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => ScoremapError::Io(err),
    })
}

/// Converts the fields of one record into a pair.
///
/// Fields must already be trimmed. Exactly two non-negative integers
/// are accepted.
pub(crate) fn pair_from_fields(
    fields: &[&str],
    source_name: &str,
    line: u64,
) -> Result<CoordinatePair, ScoremapError> {
    if fields.len() != 2 {
        return Err(ScoremapError::MalformedRecord {
            source_name: source_name.to_string(),
            line,
            message: format!("expected 2 fields, found {}", fields.len()),
        });
    }

    let x = parse_score_token(fields[0], "x", source_name, line)?;
    let y = parse_score_token(fields[1], "y", source_name, line)?;
    Ok(CoordinatePair::new(x, y))
}

fn parse_score_token(
    raw: &str,
    field_name: &str,
    source_name: &str,
    line: u64,
) -> Result<u32, ScoremapError> {
    raw.parse::<u32>()
        .map_err(|_| ScoremapError::MalformedRecord {
            source_name: source_name.to_string(),
            line,
            message: format!("invalid {field_name} '{raw}'; expected non-negative integer"),
        })
}
