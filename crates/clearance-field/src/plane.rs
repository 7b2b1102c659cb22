//! Axis-aligned plane slices through a distance field.
//!
//! A slice is a one-cell-thick slab perpendicular to a fixed axis. Consumers
//! use it to inspect the field on a cut plane, e.g. for visualization.

use glam::{DVec3, IVec3};
use serde::{Deserialize, Serialize};

use crate::field::DistanceField;
use crate::grid::Axis;

/// Orientation of a slice plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaneKind {
    /// Spans X and Y, fixed Z
    Xy,
    /// Spans X and Z, fixed Y
    Xz,
    /// Spans Y and Z, fixed X
    Yz,
}

impl PlaneKind {
    /// Axis perpendicular to the plane.
    #[must_use]
    pub const fn fixed_axis(self) -> Axis {
        match self {
            PlaneKind::Xy => Axis::Z,
            PlaneKind::Xz => Axis::Y,
            PlaneKind::Yz => Axis::X,
        }
    }

    /// The two axes spanning the plane, in ascending order.
    #[must_use]
    pub const fn in_plane_axes(self) -> (Axis, Axis) {
        self.fixed_axis().others()
    }
}

/// A rectangular slice request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneSlice {
    /// Plane orientation
    pub kind: PlaneKind,
    /// Extent along the first in-plane axis, centered on `center`
    pub length: f64,
    /// Extent along the second in-plane axis, centered on `center`
    pub width: f64,
    /// Position along the fixed axis, relative to `center`
    pub offset: f64,
    /// Reference point of the slice
    pub center: DVec3,
}

impl PlaneSlice {
    /// Create a slice centered at `center`.
    #[must_use]
    pub fn new(kind: PlaneKind, length: f64, width: f64, offset: f64, center: DVec3) -> Self {
        Self {
            kind,
            length,
            width,
            offset,
            center,
        }
    }

    /// World-space corners `(min, max)` of the slice.
    ///
    /// The fixed axis collapses to a single coordinate.
    #[must_use]
    pub fn world_bounds(&self) -> (DVec3, DVec3) {
        let (u_axis, v_axis) = self.kind.in_plane_axes();
        let mut half = DVec3::ZERO;
        half[u_axis.index()] = self.length / 2.0;
        half[v_axis.index()] = self.width / 2.0;

        let mut anchor = self.center;
        anchor[self.kind.fixed_axis().index()] += self.offset;

        (anchor - half, anchor + half)
    }
}

/// One cell of a plane slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneCell {
    /// Grid index
    pub cell: IVec3,
    /// World position of the cell center
    pub world: DVec3,
    /// Stored distance
    pub distance: f64,
}

/// Every valid cell covered by `slice`, in storage order (`x` fastest).
///
/// Parts of the slice outside the grid are skipped. A slice with a NaN or
/// infinite bound covers no cells.
#[must_use]
pub fn plane_cells<F: DistanceField + ?Sized>(field: &F, slice: &PlaneSlice) -> Vec<PlaneCell> {
    let (world_min, world_max) = slice.world_bounds();
    if !(world_min.is_finite() && world_max.is_finite()) {
        return Vec::new();
    }
    let min_cell = field.world_to_grid(world_min);
    let max_cell = field.world_to_grid(world_max);

    // Clip to the grid so a huge slice does not walk empty index space
    let last = field.dimensions().as_ivec3() - IVec3::ONE;
    let lo = min_cell.max(IVec3::ZERO);
    let hi = max_cell.min(last);

    let mut cells = Vec::new();
    for z in lo.z..=hi.z {
        for y in lo.y..=hi.y {
            for x in lo.x..=hi.x {
                let cell = IVec3::new(x, y, z);
                if !field.is_cell_valid(cell) {
                    continue;
                }
                cells.push(PlaneCell {
                    cell,
                    world: field.grid_to_world(cell),
                    distance: field.cell_distance(cell),
                });
            }
        }
    }
    cells
}
