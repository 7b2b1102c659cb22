//! The cost source model: a weighted axis-aligned box.

use std::cmp::Ordering;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{CostError, CostResult};

const AXIS_NAMES: [&str; 3] = ["x", "y", "z"];

/// Unvalidated wire form of a [`CostSource`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct CostSourceRepr {
    aabb_min: DVec3,
    aabb_max: DVec3,
    cost: f64,
}

/// A region of space contributing `cost` per unit volume.
///
/// Sources are totally ordered by, in turn: weighted cost (`cost * volume`),
/// cost density, minimum corner (x, y, z) and maximum corner (x, y, z). The
/// greater of two sources is the heavier one. Equality means equality under
/// this order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "CostSourceRepr", into = "CostSourceRepr")]
pub struct CostSource {
    aabb_min: DVec3,
    aabb_max: DVec3,
    cost: f64,
}

impl CostSource {
    /// Create a cost source.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is not finite, if `aabb_min` exceeds
    /// `aabb_max` on any axis, if `cost` is negative, or if the volume or
    /// weighted cost overflows. Inverted regions are rejected, never repaired.
    pub fn new(aabb_min: DVec3, aabb_max: DVec3, cost: f64) -> CostResult<Self> {
        if !(aabb_min.is_finite() && aabb_max.is_finite() && cost.is_finite()) {
            return Err(CostError::NonFinite);
        }
        for (i, axis) in AXIS_NAMES.into_iter().enumerate() {
            if aabb_min[i] > aabb_max[i] {
                return Err(CostError::InvalidRegion {
                    axis,
                    min: aabb_min[i],
                    max: aabb_max[i],
                });
            }
        }
        if cost < 0.0 {
            return Err(CostError::NegativeCost(cost));
        }

        let source = Self {
            aabb_min,
            aabb_max,
            cost,
        };
        let (volume, weighted_cost) = (source.volume(), source.weighted_cost());
        if !(volume.is_finite() && weighted_cost.is_finite()) {
            return Err(CostError::UnboundedWeight {
                volume,
                weighted_cost,
            });
        }
        Ok(source)
    }

    /// Create a box of half-size `half_extents` around `center`.
    ///
    /// # Errors
    ///
    /// See [`CostSource::new`]; negative half extents invert the box.
    pub fn from_center(center: DVec3, half_extents: DVec3, cost: f64) -> CostResult<Self> {
        Self::new(center - half_extents, center + half_extents, cost)
    }

    /// Minimum corner.
    #[must_use]
    pub fn aabb_min(&self) -> DVec3 {
        self.aabb_min
    }

    /// Maximum corner.
    #[must_use]
    pub fn aabb_max(&self) -> DVec3 {
        self.aabb_max
    }

    /// Cost density.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Box volume (zero for flat boxes).
    #[must_use]
    pub fn volume(&self) -> f64 {
        let size = self.aabb_max - self.aabb_min;
        size.x * size.y * size.z
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> DVec3 {
        (self.aabb_min + self.aabb_max) * 0.5
    }

    /// Total cost of the region, `cost * volume`.
    #[must_use]
    pub fn weighted_cost(&self) -> f64 {
        self.cost * self.volume()
    }

    /// Shared box with `other`, if the two overlap with positive volume.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<(DVec3, DVec3)> {
        let lo = self.aabb_min.max(other.aabb_min);
        let hi = self.aabb_max.min(other.aabb_max);
        (lo.x < hi.x && lo.y < hi.y && lo.z < hi.z).then_some((lo, hi))
    }

    /// Volume shared with `other`.
    #[must_use]
    pub fn intersection_volume(&self, other: &Self) -> f64 {
        self.intersection(other).map_or(0.0, |(lo, hi)| {
            let size = hi - lo;
            size.x * size.y * size.z
        })
    }

    /// The same source shifted by `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if the shifted box is not a valid source, e.g. for a
    /// non-finite `offset` or one that pushes a corner past `f64::MAX`.
    pub fn translated(&self, offset: DVec3) -> CostResult<Self> {
        Self::new(self.aabb_min + offset, self.aabb_max + offset, self.cost)
    }
}

/// Shared volume divided by the volume of the smaller region.
///
/// Returns a value in `[0, 1]`; zero when the regions are disjoint, only
/// touch, or either has zero volume.
#[must_use]
pub fn overlap_fraction(a: &CostSource, b: &CostSource) -> f64 {
    let smaller = a.volume().min(b.volume());
    if smaller <= 0.0 {
        return 0.0;
    }
    (a.intersection_volume(b) / smaller).clamp(0.0, 1.0)
}

fn cmp_vec(a: DVec3, b: DVec3) -> Ordering {
    a.x.total_cmp(&b.x)
        .then_with(|| a.y.total_cmp(&b.y))
        .then_with(|| a.z.total_cmp(&b.z))
}

impl Ord for CostSource {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weighted_cost()
            .total_cmp(&other.weighted_cost())
            .then_with(|| self.cost.total_cmp(&other.cost))
            .then_with(|| cmp_vec(self.aabb_min, other.aabb_min))
            .then_with(|| cmp_vec(self.aabb_max, other.aabb_max))
    }
}

impl PartialOrd for CostSource {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CostSource {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CostSource {}

impl TryFrom<CostSourceRepr> for CostSource {
    type Error = CostError;

    fn try_from(repr: CostSourceRepr) -> Result<Self, Self::Error> {
        Self::new(repr.aabb_min, repr.aabb_max, repr.cost)
    }
}

impl From<CostSource> for CostSourceRepr {
    fn from(source: CostSource) -> Self {
        Self {
            aabb_min: source.aabb_min,
            aabb_max: source.aabb_max,
            cost: source.cost,
        }
    }
}
