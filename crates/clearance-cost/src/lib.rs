//! # Clearance Cost
//!
//! Aggregation of weighted 3D cost regions reported by collision queries.
//!
//! A [`CostSource`] is an axis-aligned box with a non-negative cost density.
//! Sources are kept in a [`CostSourceSet`] ordered by a total order over
//! weighted cost and extent, which makes every set operation here
//! deterministic:
//!
//! - **Intersection**: exact-match ([`intersect_cost_sources`]) or geometric
//!   ([`intersect_regions`])
//! - **Removal**: drop sources overlapping another set ([`remove_cost_sources`])
//! - **Deduplication**: keep the heavier of overlapping pairs ([`remove_overlapping`])
//! - **Aggregation**: total cost ([`total_cost`]) and a sensor aim point
//!   ([`sensor_positioning_point`])
//!
//! ## Quick Start
//!
//! ```rust
//! use clearance_cost::{remove_overlapping, total_cost, CostSource, CostSourceSet};
//! use glam::DVec3;
//!
//! let light = CostSource::new(DVec3::ZERO, DVec3::ONE, 2.0).unwrap();
//! let heavy = CostSource::new(DVec3::ZERO, DVec3::ONE, 3.0).unwrap();
//! let set: CostSourceSet = [light, heavy].into_iter().collect();
//!
//! let deduped = remove_overlapping(&set, 0.99).unwrap();
//! assert_eq!(deduped.len(), 1);
//! assert_eq!(total_cost(&set) - total_cost(&deduped), 2.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algebra;
pub mod error;
pub mod sensor;
pub mod set;
pub mod source;

// Re-exports for convenience
pub use algebra::{
    intersect_cost_sources, intersect_regions, remove_cost_sources, remove_overlapping,
    total_cost,
};
pub use error::{CostError, CostResult};
pub use sensor::{sensor_positioning_point, SensorPositioning};
pub use set::CostSourceSet;
pub use source::{overlap_fraction, CostSource};
