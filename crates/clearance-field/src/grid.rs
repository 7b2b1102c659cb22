//! Grid geometry: mapping between world space and cell indices.
//!
//! A grid is an axis-aligned block of `dimensions` cubic cells with edge
//! length `resolution`, whose minimum corner sits at `origin`. Cell `(0, 0, 0)`
//! spans `[origin, origin + resolution)` on every axis.

use glam::{DVec3, IVec3, UVec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FieldError, FieldResult};

/// Principal axis of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Axis {
    /// World X
    X = 0,
    /// World Y
    Y = 1,
    /// World Z
    Z = 2,
}

impl Axis {
    /// Total number of axes.
    pub const COUNT: usize = 3;

    /// All axes in index order.
    #[must_use]
    pub const fn all() -> &'static [Axis] {
        &[Axis::X, Axis::Y, Axis::Z]
    }

    /// Component index of this axis.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase axis name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// The two remaining axes, in ascending order.
    #[must_use]
    pub const fn others(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }

    /// Unit step along this axis in index space.
    #[must_use]
    pub const fn unit(self) -> IVec3 {
        match self {
            Axis::X => IVec3::X,
            Axis::Y => IVec3::Y,
            Axis::Z => IVec3::Z,
        }
    }
}

/// Serializable grid description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// World position of the minimum corner of cell `(0, 0, 0)`
    pub origin: DVec3,
    /// Number of cells per axis
    pub dimensions: UVec3,
    /// Edge length of a cubic cell
    pub resolution: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            origin: DVec3::ZERO,
            dimensions: UVec3::splat(64),
            resolution: 0.02,
        }
    }
}

impl GridConfig {
    /// Build a config covering `size` world units per axis.
    ///
    /// Each axis gets `ceil(size / resolution)` cells, so the grid covers at
    /// least the requested extent.
    ///
    /// # Errors
    ///
    /// Returns an error if `resolution` is not finite and positive, or if any
    /// component of `size` is not finite and positive.
    pub fn from_extent(size: DVec3, resolution: f64, origin: DVec3) -> FieldResult<Self> {
        if !(resolution.is_finite() && resolution > 0.0) {
            return Err(FieldError::InvalidResolution(resolution));
        }

        let mut dimensions = UVec3::ZERO;
        for axis in Axis::all() {
            let extent = size[axis.index()];
            if !(extent.is_finite() && extent > 0.0) {
                return Err(FieldError::InvalidExtent {
                    axis: axis.name(),
                    size: extent,
                });
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let cells = (extent / resolution).ceil().min(f64::from(u32::MAX)) as u32;
            dimensions[axis.index()] = cells.max(1);
        }

        Ok(Self {
            origin,
            dimensions,
            resolution,
        })
    }
}

/// Validated, immutable grid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridConfig", into = "GridConfig")]
pub struct GridGeometry {
    origin: DVec3,
    dimensions: UVec3,
    resolution: f64,
}

impl GridGeometry {
    /// Validate a config into a usable geometry.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-positive or non-finite resolution, a
    /// non-finite origin, a zero-length axis, or dimensions whose cells cannot
    /// all be indexed.
    pub fn new(config: &GridConfig) -> FieldResult<Self> {
        if !(config.resolution.is_finite() && config.resolution > 0.0) {
            return Err(FieldError::InvalidResolution(config.resolution));
        }
        if !config.origin.is_finite() {
            return Err(FieldError::NonFiniteOrigin);
        }
        let dims = config.dimensions;
        if dims.x == 0 || dims.y == 0 || dims.z == 0 {
            return Err(FieldError::InvalidDimensions {
                x: dims.x,
                y: dims.y,
                z: dims.z,
            });
        }
        let max_axis = i32::MAX.unsigned_abs();
        let addressable = dims.max_element() <= max_axis
            && (dims.x as usize)
                .checked_mul(dims.y as usize)
                .and_then(|n| n.checked_mul(dims.z as usize))
                .is_some();
        if !addressable {
            return Err(FieldError::TooManyCells {
                x: dims.x,
                y: dims.y,
                z: dims.z,
            });
        }

        debug!(
            nx = dims.x,
            ny = dims.y,
            nz = dims.z,
            resolution = config.resolution,
            "Created grid geometry"
        );

        Ok(Self {
            origin: config.origin,
            dimensions: dims,
            resolution: config.resolution,
        })
    }

    /// Cell edge length.
    #[must_use]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Cells per axis.
    #[must_use]
    pub fn dimensions(&self) -> UVec3 {
        self.dimensions
    }

    /// Minimum corner of cell `(0, 0, 0)`.
    #[must_use]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Cell count along one axis.
    #[must_use]
    pub fn cells_along(&self, axis: Axis) -> usize {
        self.dimensions[axis.index()] as usize
    }

    /// Total number of cells.
    ///
    /// Construction guarantees the product fits in `usize`.
    #[must_use]
    pub fn num_cells(&self) -> usize {
        self.cells_along(Axis::X) * self.cells_along(Axis::Y) * self.cells_along(Axis::Z)
    }

    /// World size covered by the grid.
    #[must_use]
    pub fn extent(&self) -> DVec3 {
        self.dimensions.as_dvec3() * self.resolution
    }

    /// Map a world point to the index of the cell containing it.
    ///
    /// No bounds are enforced; callers check the result with
    /// [`is_cell_valid`](Self::is_cell_valid).
    #[must_use]
    pub fn world_to_grid(&self, world: DVec3) -> IVec3 {
        ((world - self.origin) / self.resolution).floor().as_ivec3()
    }

    /// World position of the center of a cell.
    #[must_use]
    pub fn grid_to_world(&self, cell: IVec3) -> DVec3 {
        self.origin + (cell.as_dvec3() + DVec3::splat(0.5)) * self.resolution
    }

    /// Whether `cell` lies inside the grid.
    #[must_use]
    pub fn is_cell_valid(&self, cell: IVec3) -> bool {
        Axis::all().iter().all(|axis| {
            let i = i64::from(cell[axis.index()]);
            i >= 0 && i < i64::from(self.dimensions[axis.index()])
        })
    }

    /// Whether `cell` has a full neighbor on both sides of every axis.
    ///
    /// Central differences need `1 <= index < N - 1` on each axis.
    #[must_use]
    pub fn has_gradient_margin(&self, cell: IVec3) -> bool {
        Axis::all().iter().all(|axis| {
            let i = i64::from(cell[axis.index()]);
            i >= 1 && i < i64::from(self.dimensions[axis.index()]) - 1
        })
    }

    /// Row-major storage index (`x` fastest) of a valid cell.
    #[must_use]
    pub fn linear_index(&self, cell: IVec3) -> Option<usize> {
        if !self.is_cell_valid(cell) {
            return None;
        }
        #[allow(clippy::cast_sign_loss)]
        let (x, y, z) = (cell.x as usize, cell.y as usize, cell.z as usize);
        let nx = self.cells_along(Axis::X);
        let ny = self.cells_along(Axis::Y);
        Some(x + nx * (y + ny * z))
    }

    /// Inverse of [`linear_index`](Self::linear_index).
    #[must_use]
    pub fn cell_at(&self, index: usize) -> Option<IVec3> {
        if index >= self.num_cells() {
            return None;
        }
        let nx = self.cells_along(Axis::X);
        let ny = self.cells_along(Axis::Y);
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let cell = IVec3::new(
            (index % nx) as i32,
            ((index / nx) % ny) as i32,
            (index / (nx * ny)) as i32,
        );
        Some(cell)
    }
}

impl TryFrom<GridConfig> for GridGeometry {
    type Error = FieldError;

    fn try_from(config: GridConfig) -> Result<Self, Self::Error> {
        Self::new(&config)
    }
}

impl From<GridGeometry> for GridConfig {
    fn from(geometry: GridGeometry) -> Self {
        Self {
            origin: geometry.origin,
            dimensions: geometry.dimensions,
            resolution: geometry.resolution,
        }
    }
}
