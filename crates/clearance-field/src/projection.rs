//! Minimum projections of a distance field onto its three axis planes.
//!
//! Projecting along an axis keeps, for every line of cells parallel to that
//! axis, the smallest distance on the line. All three projections are
//! accumulated together in one pass over the grid.

use glam::IVec3;
use tracing::debug;

use crate::field::DistanceField;
use crate::grid::{Axis, GridGeometry};

/// Accumulator start value: no obstacle seen along the line yet.
pub const UNOBSERVED: f64 = f64::MAX;

/// A 2D array of minimum distances, perpendicular to `axis`.
///
/// The plane is addressed by the two remaining axes in ascending order:
/// `u` along the first, `v` along the second. Storage is row-major with `u`
/// varying fastest, i.e. `values[u + v * width]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    axis: Axis,
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl Projection {
    fn unobserved(axis: Axis, geometry: &GridGeometry) -> Self {
        let (u_axis, v_axis) = axis.others();
        let width = geometry.cells_along(u_axis);
        let height = geometry.cells_along(v_axis);
        Self {
            axis,
            width,
            height,
            values: vec![UNOBSERVED; width * height],
        }
    }

    /// Axis that was reduced away.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Cells along the first in-plane axis.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Cells along the second in-plane axis.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Minimum at `(u, v)`, or `None` outside the plane.
    #[must_use]
    pub fn get(&self, u: usize, v: usize) -> Option<f64> {
        (u < self.width && v < self.height).then(|| self.values[u + v * self.width])
    }

    /// Row-major values (`u` fastest).
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    fn accumulate(&mut self, u: usize, v: usize, distance: f64) {
        let slot = &mut self.values[u + v * self.width];
        if distance < *slot {
            *slot = distance;
        }
    }
}

/// The three axis projections of one field.
#[derive(Debug, Clone, PartialEq)]
pub struct MinProjections {
    /// Reduced along X, addressed `(y, z)`
    pub x: Projection,
    /// Reduced along Y, addressed `(x, z)`
    pub y: Projection,
    /// Reduced along Z, addressed `(x, y)`
    pub z: Projection,
}

impl MinProjections {
    /// Projection reduced along `axis`.
    #[must_use]
    pub fn along(&self, axis: Axis) -> &Projection {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Take ownership of the projection reduced along `axis`.
    #[must_use]
    pub fn into_axis(self, axis: Axis) -> Projection {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Compute all three minimum projections in a single grid traversal.
#[must_use]
pub fn min_projections<F: DistanceField + ?Sized>(field: &F) -> MinProjections {
    let geometry = *field.geometry();
    let mut x_proj = Projection::unobserved(Axis::X, &geometry);
    let mut y_proj = Projection::unobserved(Axis::Y, &geometry);
    let mut z_proj = Projection::unobserved(Axis::Z, &geometry);

    let nx = geometry.cells_along(Axis::X);
    let ny = geometry.cells_along(Axis::Y);
    let nz = geometry.cells_along(Axis::Z);

    for z in 0..nz {
        for y in 0..ny {
            for x in 0..nx {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let cell = IVec3::new(x as i32, y as i32, z as i32);
                let distance = field.cell_distance(cell);
                x_proj.accumulate(y, z, distance);
                y_proj.accumulate(x, z, distance);
                z_proj.accumulate(x, y, distance);
            }
        }
    }

    debug!(nx, ny, nz, "Computed minimum projections");

    MinProjections {
        x: x_proj,
        y: y_proj,
        z: z_proj,
    }
}

/// Minimum projection along one axis.
///
/// Runs the same single pass as [`min_projections`]; callers that need more
/// than one axis should call that directly.
#[must_use]
pub fn min_projection_along_axis<F: DistanceField + ?Sized>(field: &F, axis: Axis) -> Projection {
    min_projections(field).into_axis(axis)
}
