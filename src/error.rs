use std::path::PathBuf;
use thiserror::Error;

use crate::validation::{Field, ValidationError};

/// The main error type for scoremap operations.
#[derive(Debug, Error)]
pub enum ScoremapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Malformed record in {source_name} at line {line}: {message}")]
    MalformedRecord {
        source_name: String,
        line: u64,
        message: String,
    },

    #[error("No source file picked")]
    NoSourcePicked,

    #[error("{field} is incomplete: {reason}")]
    IncompleteParameter {
        field: Field,
        #[source]
        reason: ValidationError,
    },

    #[error("Unknown colormap: '{0}' (run 'scoremap colormaps' for the list)")]
    UnknownColormap(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to parse config from {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to write JSON output: {0}")]
    JsonWrite(#[source] serde_json::Error),

    #[error("Grid bound {effective_max} is too large to allocate")]
    GridTooLarge { effective_max: u32 },
}
