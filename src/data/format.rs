//! Source format selection.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// How a pair source is tokenized.
///
/// Decided once when ingestion starts; readers never re-inspect the
/// source per line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceFormat {
    /// Standard comma-separated values with quoting and escaping.
    #[serde(rename = "csv")]
    DelimitedText,
    /// One `x,y` pair per line, split naively on the comma.
    #[default]
    #[serde(rename = "lines")]
    PlainLines,
}

impl SourceFormat {
    /// Picks the format from a path's extension.
    ///
    /// `.csv` (any case) is delimited text; everything else, including
    /// paths without an extension, is read as plain lines.
    pub fn from_path(path: &Path) -> Self {
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            SourceFormat::DelimitedText
        } else {
            SourceFormat::PlainLines
        }
    }

    /// Parses a CLI format name. `None` means the name is not recognized.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "csv" | "delimited" => Some(SourceFormat::DelimitedText),
            "lines" | "txt" | "plain" => Some(SourceFormat::PlainLines),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::DelimitedText => "csv",
            SourceFormat::PlainLines => "lines",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_extension_selects_delimited_text() {
        assert_eq!(
            SourceFormat::from_path(Path::new("grades.csv")),
            SourceFormat::DelimitedText
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("dir/GRADES.CSV")),
            SourceFormat::DelimitedText
        );
    }

    #[test]
    fn other_extensions_select_plain_lines() {
        assert_eq!(
            SourceFormat::from_path(Path::new("grades.txt")),
            SourceFormat::PlainLines
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("grades")),
            SourceFormat::PlainLines
        );
        // Only the extension counts, not a substring of the name.
        assert_eq!(
            SourceFormat::from_path(Path::new("grades.csv.txt")),
            SourceFormat::PlainLines
        );
    }

    #[test]
    fn serialized_name_matches_display() {
        for format in [SourceFormat::DelimitedText, SourceFormat::PlainLines] {
            let json = serde_json::to_value(format).expect("serialize format");
            assert_eq!(json, format.to_string());

            let back: SourceFormat = serde_json::from_value(json).expect("deserialize format");
            assert_eq!(back, format);
        }
    }

    #[test]
    fn from_name_accepts_aliases() {
        assert_eq!(
            SourceFormat::from_name("csv"),
            Some(SourceFormat::DelimitedText)
        );
        assert_eq!(
            SourceFormat::from_name("lines"),
            Some(SourceFormat::PlainLines)
        );
        assert_eq!(SourceFormat::from_name("xlsx"), None);
    }
}
