//! Heatmap summary report and terminal preview.

use std::fmt;

use serde::Serialize;

use super::{Colormap, DisplayRaster};
use crate::data::SourceFormat;
use crate::grid::Extent;

/// Shade ramp from empty to densest.
const SHADES: &[u8] = b" .:-=+*#%@";

/// Summary of one heatmap build.
#[derive(Clone, Debug, Serialize)]
pub struct HeatmapReport {
    /// Label of the pair source (path or `<stdin>`).
    pub source: String,
    pub format: SourceFormat,
    /// Number of observations binned.
    pub pairs: usize,
    /// Configured floor for the axis bound.
    pub max_score: u32,
    /// Axis bound actually used.
    pub effective_max: u32,
    pub sigma: f64,
    pub colormap: Colormap,
    pub extent: Extent,
    /// Sum of raw counts.
    pub raw_mass: f64,
    /// Sum of smoothed densities.
    pub smoothed_mass: f64,
    /// Bins with at least one observation before smoothing.
    pub occupied_bins: usize,
    /// Densest bin after smoothing.
    pub peak: PeakBin,
}

/// Location and value of the densest bin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PeakBin {
    pub x: usize,
    pub y: usize,
    pub density: f64,
}

impl HeatmapReport {
    /// Returns true if observations pushed the bound above the configured floor.
    pub fn grid_grew(&self) -> bool {
        self.effective_max > self.max_score
    }
}

impl fmt::Display for HeatmapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = self.effective_max as u64 + 1;

        writeln!(f, "Heatmap for {} ({})", self.source, self.format)?;
        writeln!(f)?;
        writeln!(f, "  Pairs:          {}", self.pairs)?;
        if self.grid_grew() {
            writeln!(
                f,
                "  Bound:          {} (grown from max score {})",
                self.effective_max, self.max_score
            )?;
        } else {
            writeln!(f, "  Bound:          {}", self.effective_max)?;
        }
        writeln!(f, "  Grid:           {side} x {side} bins")?;
        writeln!(
            f,
            "  Extent:         x {}..{}, y {}..{}",
            self.extent.x_min, self.extent.x_max, self.extent.y_min, self.extent.y_max
        )?;
        writeln!(f, "  Sigma:          {}", self.sigma)?;
        writeln!(f, "  Colormap:       {}", self.colormap)?;
        writeln!(f, "  Occupied bins:  {}", self.occupied_bins)?;
        writeln!(
            f,
            "  Mass:           {} raw, {:.3} smoothed",
            self.raw_mass, self.smoothed_mass
        )?;
        writeln!(
            f,
            "  Peak:           ({}, {}) = {:.3}",
            self.peak.x, self.peak.y, self.peak.density
        )
    }
}

/// Character-cell rendering of a raster, one character per bin.
///
/// Honors the raster's origin, so with a lower origin the highest `y`
/// row is printed first.
pub struct AsciiPreview<'a> {
    raster: &'a DisplayRaster,
}

impl<'a> AsciiPreview<'a> {
    pub fn new(raster: &'a DisplayRaster) -> Self {
        Self { raster }
    }

    fn shade(value: f64, max: f64) -> char {
        if max <= 0.0 || value <= 0.0 {
            return SHADES[0] as char;
        }
        let last = SHADES.len() - 1;
        let idx = ((value / max) * last as f64).round() as usize;
        // Any non-zero density gets at least the faintest mark.
        SHADES[idx.clamp(1, last)] as char
    }
}

impl fmt::Display for AsciiPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raster = self.raster;
        let max = raster.max_value();
        let extent = raster.extent;
        let label_width = extent.y_max.max(extent.y_min).to_string().len();

        let (top_label, bottom_label) = (extent.y_max, extent.y_min);

        let last_row = raster.height.saturating_sub(1);
        for (i, row) in raster.rows_top_down().enumerate() {
            let label = if i == 0 {
                top_label.to_string()
            } else if i == last_row {
                bottom_label.to_string()
            } else {
                String::new()
            };
            let line: String = row.iter().map(|&v| Self::shade(v, max)).collect();
            writeln!(f, "{label:>label_width$} |{line}")?;
        }

        writeln!(f, "{:>label_width$} +{}", "", "-".repeat(raster.width))?;

        let x_min = extent.x_min.to_string();
        let x_max = extent.x_max.to_string();
        let gap = raster.width.saturating_sub(x_min.len() + x_max.len());
        if raster.width > x_min.len() + x_max.len() {
            writeln!(f, "{:>label_width$}  {x_min}{}{x_max}", "", " ".repeat(gap))
        } else {
            writeln!(f, "{:>label_width$}  {x_min}..{x_max}", "")
        }
    }
}
