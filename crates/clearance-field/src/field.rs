//! The distance field contract and a dense grid implementation.
//!
//! Filling a grid with distances (the distance transform) is the job of an
//! external producer. Producers either implement [`DistanceField`] over their
//! own storage or write into a [`VoxelGrid`]. Once populated, a field is only
//! read through this trait.

use glam::{DVec3, IVec3, UVec3};
use tracing::debug;

use crate::error::{FieldError, FieldResult};
use crate::grid::{GridConfig, GridGeometry};

/// A populated voxel grid of distances.
///
/// Implementors provide the geometry and per-cell reads; coordinate mapping
/// comes for free from the geometry.
pub trait DistanceField {
    /// Geometry of the underlying grid.
    fn geometry(&self) -> &GridGeometry;

    /// Distance stored in `cell`.
    ///
    /// Only called with cells for which
    /// [`is_cell_valid`](DistanceField::is_cell_valid) holds. Implementations
    /// may return any value for other cells.
    fn cell_distance(&self, cell: IVec3) -> f64;

    /// Cell edge length.
    fn resolution(&self) -> f64 {
        self.geometry().resolution()
    }

    /// Cells per axis.
    fn dimensions(&self) -> UVec3 {
        self.geometry().dimensions()
    }

    /// Minimum corner of cell `(0, 0, 0)`.
    fn origin(&self) -> DVec3 {
        self.geometry().origin()
    }

    /// Map a world point to the containing cell index (unchecked).
    fn world_to_grid(&self, world: DVec3) -> IVec3 {
        self.geometry().world_to_grid(world)
    }

    /// World position of a cell center.
    fn grid_to_world(&self, cell: IVec3) -> DVec3 {
        self.geometry().grid_to_world(cell)
    }

    /// Whether `cell` lies inside the grid.
    fn is_cell_valid(&self, cell: IVec3) -> bool {
        self.geometry().is_cell_valid(cell)
    }

    /// Checked cell read.
    fn distance_at(&self, cell: IVec3) -> Option<f64> {
        self.is_cell_valid(cell).then(|| self.cell_distance(cell))
    }
}

/// Dense, owned distance grid.
///
/// Values are stored row-major with `x` varying fastest.
#[derive(Debug, Clone)]
pub struct VoxelGrid {
    geometry: GridGeometry,
    distances: Vec<f64>,
}

impl VoxelGrid {
    /// Create a grid with every cell set to `initial`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid.
    pub fn new(config: GridConfig, initial: f64) -> FieldResult<Self> {
        let geometry = GridGeometry::new(&config)?;
        let distances = vec![initial; geometry.num_cells()];

        debug!(cells = distances.len(), initial, "Allocated voxel grid");

        Ok(Self {
            geometry,
            distances,
        })
    }

    /// Create a grid whose cells are filled by `f(cell)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid.
    pub fn from_fn(config: GridConfig, mut f: impl FnMut(IVec3) -> f64) -> FieldResult<Self> {
        let mut grid = Self::new(config, 0.0)?;
        for (index, slot) in grid.distances.iter_mut().enumerate() {
            if let Some(cell) = grid.geometry.cell_at(index) {
                *slot = f(cell);
            }
        }
        Ok(grid)
    }

    /// Write the distance of one cell.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::CellOutOfBounds`] if `cell` is not in the grid.
    pub fn set_cell_distance(&mut self, cell: IVec3, distance: f64) -> FieldResult<()> {
        let index = self
            .geometry
            .linear_index(cell)
            .ok_or(FieldError::CellOutOfBounds(cell))?;
        self.distances[index] = distance;
        Ok(())
    }

    /// Set every cell to `distance`.
    pub fn fill(&mut self, distance: f64) {
        self.distances.fill(distance);
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Whether the grid holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Raw row-major distances.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.distances
    }
}

impl DistanceField for VoxelGrid {
    fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    fn cell_distance(&self, cell: IVec3) -> f64 {
        self.geometry
            .linear_index(cell)
            .map_or(f64::MAX, |index| self.distances[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> GridConfig {
        GridConfig {
            origin: DVec3::ZERO,
            dimensions: UVec3::new(2, 3, 4),
            resolution: 0.5,
        }
    }

    #[test]
    fn test_new_fills_initial_value() {
        let grid = VoxelGrid::new(small_config(), 7.0).unwrap();
        assert_eq!(grid.len(), 24);
        assert!(grid.as_slice().iter().all(|&d| d == 7.0));
    }

    #[test]
    fn test_from_fn_addresses_cells() {
        let grid = VoxelGrid::from_fn(small_config(), |c| f64::from(c.x + 10 * c.y + 100 * c.z))
            .unwrap();
        assert_eq!(grid.cell_distance(IVec3::new(1, 2, 3)), 321.0);
        assert_eq!(grid.cell_distance(IVec3::new(0, 0, 0)), 0.0);
    }

    #[test]
    fn test_set_cell_distance() {
        let mut grid = VoxelGrid::new(small_config(), 1.0).unwrap();
        grid.set_cell_distance(IVec3::new(1, 1, 1), 0.25).unwrap();
        assert_eq!(grid.distance_at(IVec3::new(1, 1, 1)), Some(0.25));

        let err = grid.set_cell_distance(IVec3::new(2, 0, 0), 0.0);
        assert_eq!(err, Err(FieldError::CellOutOfBounds(IVec3::new(2, 0, 0))));
    }

    #[test]
    fn test_distance_at_rejects_invalid() {
        let grid = VoxelGrid::new(small_config(), 1.0).unwrap();
        assert_eq!(grid.distance_at(IVec3::new(-1, 0, 0)), None);
        assert_eq!(grid.distance_at(IVec3::new(0, 3, 0)), None);
    }

    #[test]
    fn test_fill() {
        let mut grid = VoxelGrid::new(small_config(), 1.0).unwrap();
        grid.fill(3.0);
        assert_eq!(grid.cell_distance(IVec3::new(1, 2, 3)), 3.0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = small_config();
        config.resolution = f64::NAN;
        assert!(matches!(
            VoxelGrid::new(config, 0.0),
            Err(FieldError::InvalidResolution(_))
        ));
    }
}
