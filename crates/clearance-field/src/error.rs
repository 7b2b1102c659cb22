//! Error types for distance field construction and mutation.

use glam::IVec3;
use thiserror::Error;

/// Result type for distance field operations.
pub type FieldResult<T> = Result<T, FieldError>;

/// Errors raised while building or writing a distance field.
///
/// Read queries never fail: an out-of-range sample is reported through
/// [`GradientSample::in_bounds`](crate::GradientSample) or an `Option`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    /// Cell edge length is zero, negative, or not finite.
    #[error("invalid resolution {0}: must be finite and positive")]
    InvalidResolution(f64),

    /// At least one axis has no cells.
    #[error("invalid grid dimensions {x}x{y}x{z}: every axis needs at least one cell")]
    InvalidDimensions {
        /// Cells along X.
        x: u32,
        /// Cells along Y.
        y: u32,
        /// Cells along Z.
        z: u32,
    },

    /// Cell count overflows `usize`, or an axis is too long to address with
    /// `i32` indices.
    #[error("grid dimensions {x}x{y}x{z} exceed the addressable cell count")]
    TooManyCells {
        /// Cells along X.
        x: u32,
        /// Cells along Y.
        y: u32,
        /// Cells along Z.
        z: u32,
    },

    /// Origin has a NaN or infinite component.
    #[error("grid origin must be finite")]
    NonFiniteOrigin,

    /// Extent passed to [`GridConfig::from_extent`](crate::GridConfig::from_extent) is not usable.
    #[error("invalid grid extent along {axis}: {size}")]
    InvalidExtent {
        /// Offending axis name.
        axis: &'static str,
        /// Requested size in world units.
        size: f64,
    },

    /// Write addressed a cell outside the grid.
    #[error("cell {0} is outside the grid")]
    CellOutOfBounds(IVec3),
}
