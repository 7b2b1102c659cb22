//! Point and gradient sampling over a populated distance field.
//!
//! The field is piecewise constant: a world point reads the value of the
//! cell containing it, with no interpolation between cells.

use glam::{DVec3, IVec3};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::field::DistanceField;
use crate::grid::Axis;

/// Result of a gradient query.
///
/// When `in_bounds` is false the distance and gradient are zero. A zero
/// distance here does not mean "touching an obstacle"; check the flag first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientSample {
    /// Distance stored in the containing cell
    pub distance: f64,
    /// Central-difference gradient
    pub gradient: DVec3,
    /// Whether the containing cell had a full one-cell margin
    pub in_bounds: bool,
}

impl GradientSample {
    /// Sample reported for points without a gradient margin.
    #[must_use]
    pub const fn out_of_bounds() -> Self {
        Self {
            distance: 0.0,
            gradient: DVec3::ZERO,
            in_bounds: false,
        }
    }
}

impl Default for GradientSample {
    fn default() -> Self {
        Self::out_of_bounds()
    }
}

/// Sampling operations available on every [`DistanceField`].
pub trait FieldSampler: DistanceField {
    /// Distance of the cell containing `world`, or `None` outside the grid.
    ///
    /// A point with a NaN or infinite component lies in no cell.
    fn sample_distance(&self, world: DVec3) -> Option<f64> {
        if !world.is_finite() {
            return None;
        }
        self.distance_at(self.world_to_grid(world))
    }

    /// Distance and central-difference gradient at `world`.
    ///
    /// The containing cell must satisfy `1 <= index < N - 1` on every axis.
    /// Otherwise, or when `world` is not finite, no cell is read and
    /// [`GradientSample::out_of_bounds`] is returned.
    fn sample_gradient(&self, world: DVec3) -> GradientSample {
        if !world.is_finite() {
            return GradientSample::out_of_bounds();
        }
        let cell = self.world_to_grid(world);
        self.cell_gradient(cell)
    }

    /// Gradient sample for a cell index.
    fn cell_gradient(&self, cell: IVec3) -> GradientSample {
        if !self.geometry().has_gradient_margin(cell) {
            trace!(x = cell.x, y = cell.y, z = cell.z, "Gradient sample outside margin");
            return GradientSample::out_of_bounds();
        }

        let inv_twice_resolution = 1.0 / (2.0 * self.resolution());
        let mut gradient = DVec3::ZERO;
        for axis in Axis::all() {
            let step = axis.unit();
            gradient[axis.index()] = (self.cell_distance(cell + step)
                - self.cell_distance(cell - step))
                * inv_twice_resolution;
        }

        GradientSample {
            distance: self.cell_distance(cell),
            gradient,
            in_bounds: true,
        }
    }

    /// World centers of every cell whose distance lies in `[min, max]`.
    ///
    /// Cells are visited in storage order (`x` fastest).
    fn cells_in_distance_range(&self, min: f64, max: f64) -> Vec<DVec3> {
        let geometry = self.geometry();
        (0..geometry.num_cells())
            .filter_map(|index| geometry.cell_at(index))
            .filter(|&cell| {
                let distance = self.cell_distance(cell);
                distance >= min && distance <= max
            })
            .map(|cell| geometry.grid_to_world(cell))
            .collect()
    }

    /// Gradient samples at cell centers with distance in `[min, max]`.
    ///
    /// Only in-bounds samples with a non-zero gradient are returned.
    fn gradient_samples(&self, min: f64, max: f64) -> Vec<(DVec3, GradientSample)> {
        let geometry = self.geometry();
        (0..geometry.num_cells())
            .filter_map(|index| geometry.cell_at(index))
            .filter_map(|cell| {
                let sample = self.cell_gradient(cell);
                let keep = sample.in_bounds
                    && sample.distance >= min
                    && sample.distance <= max
                    && sample.gradient != DVec3::ZERO;
                keep.then(|| (geometry.grid_to_world(cell), sample))
            })
            .collect()
    }
}

impl<T: DistanceField + ?Sized> FieldSampler for T {}
