//! Plain line-split pair reader.
//!
//! Each non-blank line is split on `,` with no quoting rules. This is the
//! reader for `.txt` exports and anything else that is not declared as
//! delimited text.

use std::io::{BufRead, BufReader};
use std::path::Path;

use super::model::{CoordinatePair, Dataset};
use crate::error::ScoremapError;

/// Reads a dataset from a plain-text file of `x,y` lines.
pub fn read_line_pairs(path: &Path) -> Result<Dataset, ScoremapError> {
    let file = super::open_source(path)?;
    from_lines_reader(BufReader::new(file), &path.display().to_string())
}

/// Reads a dataset from a string of `x,y` lines.
///
/// Useful for testing without file I/O.
pub fn from_lines_str(text: &str) -> Result<Dataset, ScoremapError> {
    from_lines_reader(text.as_bytes(), "<string>")
}

pub(crate) fn from_lines_reader<R: BufRead>(
    reader: R,
    source_name: &str,
) -> Result<Dataset, ScoremapError> {
    let mut dataset = Dataset::new();

    for (line_idx, line) in reader.lines().enumerate() {
        let line_num = (line_idx + 1) as u64;
        let line = line.map_err(|err| match err.kind() {
            std::io::ErrorKind::InvalidData => ScoremapError::MalformedRecord {
                source_name: source_name.to_string(),
                line: line_num,
                message: "line is not valid UTF-8".to_string(),
            },
            _ => ScoremapError::Io(err),
        })?;

        if let Some(pair) = parse_pair_line(&line, source_name, line_num)? {
            dataset.push(pair);
        }
    }

    Ok(dataset)
}

/// Parses one line. Blank lines yield `Ok(None)`.
fn parse_pair_line(
    line: &str,
    source_name: &str,
    line_num: u64,
) -> Result<Option<CoordinatePair>, ScoremapError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    // Take at most 3 tokens so pathological lines do not allocate unbounded memory.
    let fields: Vec<&str> = trimmed.splitn(3, ',').map(str::trim).collect();
    super::pair_from_fields(&fields, source_name, line_num).map(Some)
}

/// Fuzz-only entrypoint for single-line pair parsing.
#[cfg(feature = "fuzzing")]
pub fn fuzz_parse_pair_line(input: &str) -> Result<(), ScoremapError> {
    let _ = parse_pair_line(input, "<fuzz>", 1)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pair_line_accepts_valid_rows() {
        let pair = parse_pair_line("12,30", "<test>", 1)
            .expect("parse")
            .expect("line should produce a pair");
        assert_eq!(pair, CoordinatePair::new(12, 30));

        let padded = parse_pair_line("  4 , 9\r", "<test>", 1)
            .expect("parse")
            .expect("line should produce a pair");
        assert_eq!(padded, CoordinatePair::new(4, 9));
    }

    #[test]
    fn parse_pair_line_skips_empty_rows() {
        assert!(parse_pair_line("   ", "<test>", 1).expect("parse").is_none());
    }

    #[test]
    fn parse_pair_line_rejects_short_rows() {
        let err = parse_pair_line("12", "<test>", 4).unwrap_err();
        match err {
            ScoremapError::MalformedRecord { line, message, .. } => {
                assert_eq!(line, 4);
                assert!(message.contains("found 1"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_pair_line_rejects_extra_fields() {
        let err = parse_pair_line("1,2,3,4,5", "<test>", 1).unwrap_err();
        assert!(matches!(err, ScoremapError::MalformedRecord { .. }));
    }

    #[test]
    fn parse_failure_aborts_whole_read() {
        let err = from_lines_str("1,2\n12,abc\n3,4\n").unwrap_err();
        match err {
            ScoremapError::MalformedRecord { line, message, .. } => {
                assert_eq!(line, 2);
                assert!(message.contains("invalid y 'abc'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reads_lines_in_order() {
        let dataset = from_lines_str("0,0\n5,5\n5,5\n").expect("parse");
        assert_eq!(
            dataset,
            Dataset::from(vec![(0, 0), (5, 5), (5, 5)])
        );
    }
}
