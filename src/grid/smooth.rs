//! Separable Gaussian smoothing.
//!
//! The filter runs a 1D Gaussian along `x`, then along `y`. Out-of-range
//! taps read the grid mirrored about its edges (`d c b a | a b c d | d c b a`),
//! repeating the mirror when the kernel is wider than the grid. The
//! reflection keeps total mass unchanged up to rounding.

use tracing::debug;

use super::DensityGrid;

/// Kernel half-width in standard deviations.
pub const TRUNCATE: f64 = 4.0;

/// Sigma, in grid sides, at which smoothing becomes a flat average.
///
/// The mirrored grid repeats every `2 * side` bins. From this width on, the
/// Gaussian summed over those repeats varies by less than `exp(-2π² · 4)`,
/// far below `f64` precision.
pub const FLAT_SIGMA_SIDES: f64 = 4.0;

/// Normalised 1D Gaussian taps, `2 * radius + 1` long.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    sigma: f64,
    taps: Vec<f64>,
}

impl GaussianKernel {
    /// Builds the kernel for `sigma`, truncated at [`TRUNCATE`] deviations.
    ///
    /// Returns `None` when `sigma` is zero, negative, or not finite, or when
    /// the taps would not fit in memory.
    pub fn new(sigma: f64) -> Option<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return None;
        }

        // `as` saturates, so an enormous sigma fails the checks below.
        let radius = (TRUNCATE * sigma + 0.5) as usize;
        let len = radius.checked_mul(2)?.checked_add(1)?;
        let mut taps: Vec<f64> = Vec::new();
        taps.try_reserve_exact(len).ok()?;

        let inv_two_var = 1.0 / (2.0 * sigma * sigma);
        taps.extend((0..len).map(|i| {
            let d = i as f64 - radius as f64;
            (-d * d * inv_two_var).exp()
        }));

        let total: f64 = taps.iter().sum();
        for tap in &mut taps {
            *tap /= total;
        }

        Some(Self { sigma, taps })
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Number of taps on each side of the centre.
    pub fn radius(&self) -> usize {
        self.taps.len() / 2
    }

    /// The taps in left-to-right order.
    pub fn taps(&self) -> &[f64] {
        &self.taps
    }
}

/// Returns a smoothed copy of `grid`.
///
/// `sigma == 0` returns an exact copy, and `sigma` of [`FLAT_SIGMA_SIDES`]
/// grid sides or more spreads the mass evenly. The output always has the
/// input's dimensions.
pub fn smooth(grid: &DensityGrid, sigma: f64) -> DensityGrid {
    let side = grid.side();
    if sigma.is_finite() && sigma >= FLAT_SIGMA_SIDES * side as f64 {
        debug!(sigma, side, "kernel spans the grid; flattening");
        return flatten(grid);
    }

    let Some(kernel) = GaussianKernel::new(sigma) else {
        return grid.clone();
    };

    debug!(sigma, radius = kernel.radius(), side, "smoothing grid");

    // Along x: neighbours of (x, y) are (x + k, y), stride `side`.
    let along_x = convolve_axis(grid.cells(), side, &kernel, |line, pos| pos * side + line);
    // Along y: neighbours are contiguous.
    let along_y = convolve_axis(&along_x, side, &kernel, |line, pos| line * side + pos);

    DensityGrid::from_cells(side, along_y)
}

/// Spreads the grid's mass evenly over its cells.
fn flatten(grid: &DensityGrid) -> DensityGrid {
    let count = grid.cells().len();
    DensityGrid::from_cells(grid.side(), vec![grid.sum() / count as f64; count])
}

/// Convolves every 1D line of a square grid along one axis.
///
/// `index(line, pos)` maps a line number and a position along that line to
/// the flat cell index.
fn convolve_axis<F>(cells: &[f64], side: usize, kernel: &GaussianKernel, index: F) -> Vec<f64>
where
    F: Fn(usize, usize) -> usize,
{
    let radius = kernel.radius() as isize;
    let mut out = vec![0.0; cells.len()];

    for line in 0..side {
        for pos in 0..side {
            let mut acc = 0.0;
            for (k, &tap) in kernel.taps().iter().enumerate() {
                let src = reflect_index(pos as isize + k as isize - radius, side);
                acc += tap * cells[index(line, src)];
            }
            out[index(line, pos)] = acc;
        }
    }

    out
}

/// Maps any index onto `0..len` by half-sample symmetric reflection.
fn reflect_index(i: isize, len: usize) -> usize {
    let len = len as isize;
    let period = 2 * len;
    let m = i.rem_euclid(period);
    if m < len {
        m as usize
    } else {
        (period - 1 - m) as usize
    }
}
