//! The heatmap pipeline: ingestion, binning, smoothing, packaging.

use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::config::HeatmapConfig;
use crate::data::{self, Dataset, SourceFormat};
use crate::error::ScoremapError;
use crate::grid::{self, DensityGrid, Histogram2d};
use crate::render::{DisplayRaster, HeatmapReport, PeakBin};

/// Everything one build produces.
#[derive(Clone, Debug)]
pub struct Heatmap {
    /// Raw counts and their extent.
    pub histogram: Histogram2d,
    /// Counts after Gaussian smoothing.
    pub smoothed: DensityGrid,
    /// The smoothed grid packaged for the renderer.
    pub raster: DisplayRaster,
    /// Number of pairs binned.
    pub pairs: usize,
}

impl Heatmap {
    /// Summarises this heatmap for display.
    pub fn report(
        &self,
        config: &HeatmapConfig,
        source: impl Into<String>,
        format: SourceFormat,
    ) -> HeatmapReport {
        let (x, y, density) = self.smoothed.peak();

        HeatmapReport {
            source: source.into(),
            format,
            pairs: self.pairs,
            max_score: config.max_score,
            effective_max: self.histogram.effective_max(),
            sigma: config.sigma,
            colormap: config.colormap.clone(),
            extent: self.histogram.extent,
            raw_mass: self.histogram.grid.sum(),
            smoothed_mass: self.smoothed.sum(),
            occupied_bins: self.histogram.grid.occupied_cells(),
            peak: PeakBin { x, y, density },
        }
    }
}

/// Builds heatmaps from paired scores.
///
/// The builder holds only its configuration; every call is independent.
///
/// # Example
///
/// ```
/// use scoremap::{Dataset, HeatmapBuilder, HeatmapConfig};
///
/// let config = HeatmapConfig { max_score: 5, sigma: 0.0, ..Default::default() };
/// let heatmap = HeatmapBuilder::new(config).build(&Dataset::from(vec![(0, 0), (5, 5), (5, 5)]))?;
///
/// assert_eq!(heatmap.histogram.grid.get(5, 5), 2.0);
/// assert_eq!(heatmap.raster.extent.as_tuple(), (0, 5, 0, 5));
/// # Ok::<(), scoremap::ScoremapError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct HeatmapBuilder {
    config: HeatmapConfig,
}

impl HeatmapBuilder {
    pub fn new(config: HeatmapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HeatmapConfig {
        &self.config
    }

    /// Bins, smooths and packages an in-memory dataset.
    pub fn build(&self, dataset: &Dataset) -> Result<Heatmap, ScoremapError> {
        let histogram = grid::bin_dataset(dataset, self.config.max_score)?;
        let smoothed = grid::smooth(&histogram.grid, self.config.sigma);
        let raster =
            DisplayRaster::package(&smoothed, histogram.extent, self.config.colormap.clone());

        info!(
            pairs = dataset.len(),
            effective_max = histogram.effective_max(),
            sigma = self.config.sigma,
            colormap = %self.config.colormap,
            "built heatmap"
        );

        Ok(Heatmap {
            histogram,
            smoothed,
            raster,
            pairs: dataset.len(),
        })
    }

    /// Reads a file in the given format, then builds.
    ///
    /// The file is fully read and closed before binning starts.
    pub fn build_from_path(
        &self,
        path: &Path,
        format: SourceFormat,
    ) -> Result<Heatmap, ScoremapError> {
        let dataset = data::read_pairs_as(path, format)?;
        self.build(&dataset)
    }

    /// Reads an open stream in the given format, then builds.
    pub fn build_from_reader<R: Read>(
        &self,
        reader: R,
        format: SourceFormat,
        source_name: &str,
    ) -> Result<Heatmap, ScoremapError> {
        let dataset = data::read_pairs_from_reader(reader, format, source_name)?;
        self.build(&dataset)
    }
}
