//! # Clearance Field
//!
//! Read-side of a voxelized distance field used for proximity estimation in
//! motion planning.
//!
//! A distance field is a dense 3D grid of cubic cells, each holding the
//! distance from its center to the nearest obstacle surface. Populating the
//! grid (the distance transform) happens elsewhere; this crate only consumes
//! a populated grid and answers queries about it:
//!
//! - **Coordinate mapping**: world points to cell indices and back
//! - **Gradient sampling**: central differences with a one-cell boundary margin
//! - **Minimum projections**: three axis reductions computed in one grid pass
//! - **Plane slices**: every cell of an axis-aligned slab, for inspection
//!
//! ## Quick Start
//!
//! ```rust
//! use clearance_field::{FieldSampler, GridConfig, VoxelGrid};
//! use glam::{DVec3, UVec3};
//!
//! let config = GridConfig {
//!     origin: DVec3::ZERO,
//!     dimensions: UVec3::splat(10),
//!     resolution: 0.1,
//! };
//! // A planar field: distance grows along +x.
//! let grid = VoxelGrid::from_fn(config, |cell| f64::from(cell.x) * 0.1).unwrap();
//!
//! let sample = grid.sample_gradient(DVec3::new(0.5, 0.5, 0.5));
//! assert!(sample.in_bounds);
//! assert!((sample.gradient.x - 1.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod field;
pub mod grid;
pub mod plane;
pub mod projection;
pub mod sampler;

// Re-exports for convenience
pub use error::{FieldError, FieldResult};
pub use field::{DistanceField, VoxelGrid};
pub use grid::{Axis, GridConfig, GridGeometry};
pub use plane::{plane_cells, PlaneCell, PlaneKind, PlaneSlice};
pub use projection::{
    min_projection_along_axis, min_projections, MinProjections, Projection, UNOBSERVED,
};
pub use sampler::{FieldSampler, GradientSample};
