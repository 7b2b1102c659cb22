//! Error types for cost source construction and set operations.

use thiserror::Error;

/// Result type for cost source operations.
pub type CostResult<T> = Result<T, CostError>;

/// Errors that can occur when building or combining cost sources.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CostError {
    /// Minimum corner exceeds the maximum corner on some axis.
    #[error("inverted region on {axis} axis: min {min} > max {max}")]
    InvalidRegion {
        /// Axis name.
        axis: &'static str,
        /// Minimum coordinate.
        min: f64,
        /// Maximum coordinate.
        max: f64,
    },

    /// A corner coordinate or the cost is NaN or infinite.
    #[error("cost source contains a non-finite value")]
    NonFinite,

    /// Box volume or `cost * volume` overflows to infinity.
    #[error("cost source volume {volume} or weighted cost {weighted_cost} is not finite")]
    UnboundedWeight {
        /// Box volume.
        volume: f64,
        /// Cost times volume.
        weighted_cost: f64,
    },

    /// Cost density is below zero.
    #[error("negative cost {0}")]
    NegativeCost(f64),

    /// Overlap threshold is outside `[0, 1]` or not finite.
    #[error("overlap threshold {0} must lie in [0, 1]")]
    InvalidThreshold(f64),

    /// Quantile for sensor positioning is outside `[0, 1]` or not finite.
    #[error("quantile {0} must lie in [0, 1]")]
    InvalidQuantile(f64),
}
