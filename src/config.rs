//! Heatmap configuration.
//!
//! Defaults are named constants; callers override them per invocation,
//! either directly or by loading a YAML file such as:
//!
//! ```yaml
//! max_score: 100
//! sigma: 2.5
//! colormap: viridis
//! ```
//!
//! Keys missing from the file keep their defaults.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ScoremapError;
use crate::render::Colormap;

/// Default floor for the axis bound.
pub const DEFAULT_MAX_SCORE: u32 = 30;

/// Default Gaussian smoothing width.
pub const DEFAULT_SIGMA: f64 = 1.2;

/// Default gradient name.
pub const DEFAULT_COLORMAP: &str = "jet";

/// Parameters for one heatmap build.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeatmapConfig {
    /// Floor for the axis bound; observations above it grow the grid.
    pub max_score: u32,
    /// Gaussian smoothing width in bins. 0 disables smoothing.
    pub sigma: f64,
    /// Gradient forwarded to the renderer.
    pub colormap: Colormap,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            max_score: DEFAULT_MAX_SCORE,
            sigma: DEFAULT_SIGMA,
            colormap: Colormap::default(),
        }
    }
}

impl HeatmapConfig {
    /// Loads a config from a YAML file.
    ///
    /// The values are not validated here; pass them through
    /// [`crate::validation::preflight`] before building.
    pub fn load(path: &Path) -> Result<Self, ScoremapError> {
        let file = File::open(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => ScoremapError::SourceNotFound {
                path: path.to_path_buf(),
            },
            _ => ScoremapError::Io(err),
        })?;

        let config: Self = serde_yaml::from_reader(BufReader::new(file)).map_err(|source| {
            ScoremapError::ConfigParse {
                path: path.to_path_buf(),
                source,
            }
        })?;

        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parses a config from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}
