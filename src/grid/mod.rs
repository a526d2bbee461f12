//! Density grids: binning observations and smoothing the counts.
//!
//! Both axes share one bound, the *effective maximum*: the larger of the
//! configured `max_score` and every observed value. The configured value
//! is a floor, never a cap, so no observation is ever clamped. The grid
//! then has `effective_max + 1` unit-width bins per axis covering
//! `[0, effective_max]` inclusive, and a value `v` lands in bin `v`.

mod smooth;

pub use smooth::{smooth, GaussianKernel, FLAT_SIGMA_SIDES, TRUNCATE};

use std::mem;

use serde::Serialize;
use tracing::{debug, warn};

use crate::data::Dataset;
use crate::error::ScoremapError;

/// A square grid of non-negative densities, indexed `[x][y]`.
///
/// Storage is row-major by `x`: cell `(x, y)` lives at `x * side + y`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DensityGrid {
    side: usize,
    cells: Vec<f64>,
}

impl DensityGrid {
    /// Creates an all-zero grid with `side` bins per axis.
    ///
    /// `side` must be at least 1.
    pub fn zeros(side: usize) -> Self {
        debug_assert!(side >= 1, "a density grid has at least one cell");
        Self {
            side,
            cells: vec![0.0; side * side],
        }
    }

    /// Number of bins along each axis.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Density at bin `(x, y)`.
    ///
    /// # Panics
    /// Panics if either index is outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        assert!(x < self.side && y < self.side, "bin ({x}, {y}) out of range");
        self.cells[x * self.side + y]
    }

    #[inline]
    fn increment(&mut self, x: usize, y: usize) {
        self.cells[x * self.side + y] += 1.0;
    }

    /// Raw cell storage in `[x][y]` order.
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Total mass of the grid.
    pub fn sum(&self) -> f64 {
        self.cells.iter().sum()
    }

    /// Largest cell value; 0 for an all-zero grid.
    pub fn max(&self) -> f64 {
        self.cells.iter().copied().fold(0.0, f64::max)
    }

    /// Position and value of the densest cell, first in `[x][y]` order on ties.
    pub fn peak(&self) -> (usize, usize, f64) {
        let mut best = (0, 0, self.cells[0]);
        for (idx, &value) in self.cells.iter().enumerate() {
            if value > best.2 {
                best = (idx / self.side, idx % self.side, value);
            }
        }
        best
    }

    /// Number of cells with a non-zero value.
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0.0).count()
    }

    /// Like [`DensityGrid::zeros`], but returns `None` instead of aborting
    /// when `side * side` cells cannot be addressed or allocated.
    pub fn try_zeros(side: usize) -> Option<Self> {
        let len = side.checked_mul(side)?;
        let bytes = len.checked_mul(mem::size_of::<f64>())?;
        if bytes > isize::MAX as usize {
            return None;
        }

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, 0.0);
        Some(Self { side, cells })
    }

    pub(crate) fn from_cells(side: usize, cells: Vec<f64>) -> Self {
        debug_assert_eq!(cells.len(), side * side);
        Self { side, cells }
    }
}

/// The coordinate range a grid spans: `(x_min, x_max, y_min, y_max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Extent {
    pub x_min: u32,
    pub x_max: u32,
    pub y_min: u32,
    pub y_max: u32,
}

impl Extent {
    /// The square extent `(0, max, 0, max)`.
    pub fn square(max: u32) -> Self {
        Self {
            x_min: 0,
            x_max: max,
            y_min: 0,
            y_max: max,
        }
    }

    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x_min, self.x_max, self.y_min, self.y_max)
    }
}

/// Raw counts for a dataset together with the extent they cover.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Histogram2d {
    pub grid: DensityGrid,
    pub extent: Extent,
}

impl Histogram2d {
    /// The effective maximum used on both axes.
    pub fn effective_max(&self) -> u32 {
        self.extent.x_max
    }
}

/// The axis bound actually used for binning.
pub fn effective_bound(dataset: &Dataset, max_score: u32) -> u32 {
    dataset
        .max_value()
        .map_or(max_score, |observed| observed.max(max_score))
}

/// Bins every pair of `dataset` into a square count grid.
///
/// An empty dataset yields an all-zero grid sized by `max_score` alone, and
/// an effective maximum of 0 yields a single cell.
///
/// # Errors
/// Returns [`ScoremapError::GridTooLarge`] if the grid's cells cannot be
/// addressed or allocated.
pub fn bin_dataset(dataset: &Dataset, max_score: u32) -> Result<Histogram2d, ScoremapError> {
    let effective_max = effective_bound(dataset, max_score);
    if effective_max > max_score {
        warn!(
            max_score,
            effective_max, "observed scores exceed max score; grid grows to fit"
        );
    }

    let mut grid = (effective_max as usize)
        .checked_add(1)
        .and_then(DensityGrid::try_zeros)
        .ok_or(ScoremapError::GridTooLarge { effective_max })?;
    let side = grid.side();

    for pair in dataset {
        grid.increment(pair.x as usize, pair.y as usize);
    }

    debug!(
        pairs = dataset.len(),
        side,
        occupied = grid.occupied_cells(),
        "binned dataset"
    );

    Ok(Histogram2d {
        grid,
        extent: Extent::square(effective_max),
    })
}
