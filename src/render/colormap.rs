//! Named color gradients.
//!
//! The pipeline never interprets a colormap; it only carries the name to
//! whatever renders the raster. The registry below is the set of names a
//! boundary (form or CLI) offers for selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_COLORMAP;

/// Predefined gradient names, grouped roughly by family.
#[rustfmt::skip]
pub const COLORMAP_NAMES: &[&str] = &[
    // Perceptually uniform sequential
    "viridis", "plasma", "inferno", "magma",
    // Sequential
    "Greys", "Purples", "Blues", "Greens", "Oranges", "Reds",
    "YlOrBr", "YlOrRd", "OrRd", "PuRd", "RdPu", "BuPu",
    "GnBu", "PuBu", "YlGnBu", "PuBuGn", "BuGn", "YlGn",
    "binary", "gist_yarg", "gist_gray", "gray", "bone", "pink",
    "spring", "summer", "autumn", "winter", "cool", "Wistia",
    "hot", "afmhot", "gist_heat", "copper",
    // Diverging
    "PiYG", "PRGn", "BrBG", "PuOr", "RdGy", "RdBu",
    "RdYlBu", "RdYlGn", "Spectral", "coolwarm", "bwr", "seismic",
    // Qualitative
    "Pastel1", "Pastel2", "Paired", "Accent",
    "Dark2", "Set1", "Set2", "Set3",
    "tab10", "tab20", "tab20b", "tab20c",
    // Miscellaneous
    "flag", "prism", "ocean", "gist_earth", "terrain", "gist_stern",
    "gnuplot", "gnuplot2", "CMRmap", "cubehelix", "brg", "hsv",
    "gist_rainbow", "rainbow", "jet", "nipy_spectral", "gist_ncar",
];

/// An opaque gradient name.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Colormap(String);

impl Colormap {
    /// Wraps a name without checking it against the registry.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Looks a name up in the registry (case-sensitive, as gradient names are).
    pub fn lookup(name: &str) -> Option<Self> {
        COLORMAP_NAMES
            .iter()
            .find(|&&known| known == name)
            .map(|&known| Self::new(known))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for Colormap {
    fn default() -> Self {
        Self::new(DEFAULT_COLORMAP)
    }
}

impl fmt::Debug for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Colormap({})", self.0)
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
