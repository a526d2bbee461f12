//! Packaging density grids for display.
//!
//! A [`DisplayRaster`] is what the renderer receives. The density grid is
//! indexed `[x][y]`, but rasters are indexed `[row][col]`, so packaging
//! transposes it: `rows[r][c]` holds the density at `x = c`, `y = r`. With
//! [`Origin::Lower`], row 0 is drawn at the bottom so bin `(0, 0)` sits in
//! the lower-left corner, matching the axes described by the extent.

mod colormap;
mod report;

pub use colormap::{Colormap, COLORMAP_NAMES};
pub use report::{AsciiPreview, HeatmapReport, PeakBin};

use serde::Serialize;

use crate::grid::{DensityGrid, Extent};

/// Where row 0 of a raster is drawn. Rasters are always packaged with the
/// lowest `y` at the bottom edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Row 0 at the bottom edge.
    Lower,
}

/// A renderable raster: values, axis extent, orientation and gradient.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayRaster {
    pub width: usize,
    pub height: usize,
    /// Row-major values; `rows[r][c]`.
    pub rows: Vec<Vec<f64>>,
    pub extent: Extent,
    pub origin: Origin,
    pub colormap: Colormap,
}

impl DisplayRaster {
    /// Transposes `grid` into raster order and attaches display metadata.
    pub fn package(grid: &DensityGrid, extent: Extent, colormap: Colormap) -> Self {
        let side = grid.side();
        let rows = (0..side)
            .map(|y| (0..side).map(|x| grid.get(x, y)).collect())
            .collect();

        Self {
            width: side,
            height: side,
            rows,
            extent,
            origin: Origin::Lower,
            colormap,
        }
    }

    /// Value at data coordinates `(x, y)`.
    pub fn value_at(&self, x: usize, y: usize) -> f64 {
        self.rows[y][x]
    }

    /// Largest value in the raster; 0 when empty or all-zero.
    pub fn max_value(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|row| row.iter().copied())
            .fold(0.0, f64::max)
    }

    /// Rows in the order they appear on screen, top edge first.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.rows.iter().rev().map(Vec::as_slice)
    }
}
