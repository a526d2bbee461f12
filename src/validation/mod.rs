//! Boundary validation for heatmap parameters.
//!
//! Everything here runs before the pipeline. A form calls
//! [`accepts_edit`] on every keystroke and [`preflight`] when the user asks
//! for a heatmap; the CLI calls [`preflight`] with its raw arguments. The
//! pipeline itself only ever sees a validated [`HeatmapParams`].

mod field;

pub use field::{accepts_edit, validate_field, Field, FieldKind, FieldValue, ValidationError};

use std::path::PathBuf;

use tracing::debug;

use crate::config::HeatmapConfig;
use crate::error::ScoremapError;
use crate::render::Colormap;

/// Where pairs are read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// A file on disk.
    Path(PathBuf),
    /// Standard input.
    Stdin,
}

impl Source {
    /// Label used in reports and error messages.
    pub fn label(&self) -> String {
        match self {
            Source::Path(path) => path.display().to_string(),
            Source::Stdin => "<stdin>".to_string(),
        }
    }
}

/// Unvalidated parameters as typed by a user.
#[derive(Clone, Debug, Default)]
pub struct RawParams {
    /// Source path as entered; `-` means standard input.
    pub source: Option<String>,
    pub max_score: String,
    pub sigma: String,
    /// Selected gradient; `None` keeps the default.
    pub colormap: Option<String>,
}

impl RawParams {
    /// Raw text for every field of `config`, with no source picked.
    pub fn from_config(config: &HeatmapConfig) -> Self {
        Self {
            source: None,
            max_score: config.max_score.to_string(),
            sigma: config.sigma.to_string(),
            colormap: Some(config.colormap.name().to_string()),
        }
    }
}

/// Parameters that passed pre-flight validation.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapParams {
    pub source: Source,
    pub config: HeatmapConfig,
}

/// Validates raw parameters in one pass before any work starts.
///
/// Checks run in the order a user fills the form: source, then max score,
/// then sigma, then colormap. The first failure is returned.
///
/// # Errors
/// - [`ScoremapError::NoSourcePicked`] if no source was given
/// - [`ScoremapError::SourceNotFound`] if the source path does not exist
/// - [`ScoremapError::IncompleteParameter`] for a blank or invalid number
/// - [`ScoremapError::UnknownColormap`] for a name outside the registry
pub fn preflight(raw: &RawParams) -> Result<HeatmapParams, ScoremapError> {
    let source = match raw.source.as_deref().map(str::trim) {
        None | Some("") => return Err(ScoremapError::NoSourcePicked),
        Some("-") => Source::Stdin,
        Some(path) => {
            let path = PathBuf::from(path);
            if !path.is_file() {
                return Err(ScoremapError::SourceNotFound { path });
            }
            Source::Path(path)
        }
    };

    let max_score = field::parse_integer(&raw.max_score).map_err(|reason| {
        ScoremapError::IncompleteParameter {
            field: Field::MaxScore,
            reason,
        }
    })?;

    let sigma = field::parse_float(&raw.sigma).map_err(|reason| {
        ScoremapError::IncompleteParameter {
            field: Field::Sigma,
            reason,
        }
    })?;

    let colormap = match raw.colormap.as_deref() {
        None => Colormap::default(),
        Some(name) => {
            Colormap::lookup(name).ok_or_else(|| ScoremapError::UnknownColormap(name.to_string()))?
        }
    };

    let params = HeatmapParams {
        source,
        config: HeatmapConfig {
            max_score,
            sigma,
            colormap,
        },
    };
    debug!(?params, "pre-flight validation passed");
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_with_source(source: &str) -> RawParams {
        RawParams {
            source: Some(source.to_string()),
            ..RawParams::from_config(&HeatmapConfig::default())
        }
    }

    #[test]
    fn missing_source_is_rejected_first() {
        let raw = RawParams {
            max_score: String::new(),
            ..RawParams::default()
        };
        assert!(matches!(preflight(&raw), Err(ScoremapError::NoSourcePicked)));
    }

    #[test]
    fn nonexistent_source_is_not_found() {
        let err = preflight(&raw_with_source("no/such/scores.csv")).unwrap_err();
        assert!(matches!(err, ScoremapError::SourceNotFound { .. }));
    }

    #[test]
    fn stdin_source_skips_existence_check() {
        let params = preflight(&raw_with_source("-")).expect("stdin is valid");
        assert_eq!(params.source, Source::Stdin);
        assert_eq!(params.config, HeatmapConfig::default());
    }

    #[test]
    fn blank_max_score_is_incomplete() {
        let raw = RawParams {
            max_score: "  ".to_string(),
            ..raw_with_source("-")
        };
        match preflight(&raw).unwrap_err() {
            ScoremapError::IncompleteParameter { field, reason } => {
                assert_eq!(field, Field::MaxScore);
                assert_eq!(reason, ValidationError::Blank);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn negative_sigma_is_incomplete() {
        let raw = RawParams {
            sigma: "-1".to_string(),
            ..raw_with_source("-")
        };
        match preflight(&raw).unwrap_err() {
            ScoremapError::IncompleteParameter { field, .. } => assert_eq!(field, Field::Sigma),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_colormap_is_rejected() {
        let raw = RawParams {
            colormap: Some("sunset".to_string()),
            ..raw_with_source("-")
        };
        assert!(matches!(
            preflight(&raw),
            Err(ScoremapError::UnknownColormap(name)) if name == "sunset"
        ));
    }

    #[test]
    fn existing_file_and_overrides_pass() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("scores.txt");
        std::fs::write(&path, "1,2\n").expect("write scores");

        let raw = RawParams {
            source: Some(path.display().to_string()),
            max_score: "100".to_string(),
            sigma: "0".to_string(),
            colormap: Some("viridis".to_string()),
        };
        let params = preflight(&raw).expect("valid params");
        assert_eq!(params.source, Source::Path(path));
        assert_eq!(params.config.max_score, 100);
        assert_eq!(params.config.sigma, 0.0);
        assert_eq!(params.config.colormap.name(), "viridis");
    }
}
