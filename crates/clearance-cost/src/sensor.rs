//! Picking a point to aim a sensor at from a set of cost sources.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CostError, CostResult};
use crate::set::CostSourceSet;

/// How to reduce a set of sources to a single aim point.
///
/// Every strategy is deterministic, moves with the sources under translation,
/// and returns a point inside the convex hull of the source boxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum SensorPositioning {
    /// Mean of source centers weighted by `cost * volume`.
    ///
    /// Falls back to the plain mean of centers when every weight is zero.
    #[default]
    WeightedCentroid,
    /// Center of the greatest source.
    Heaviest,
    /// Center of the source at rank `floor(q * len)` counting from the
    /// heaviest, clamped to the last source.
    Quantile(f64),
}

impl SensorPositioning {
    /// Check strategy parameters.
    ///
    /// # Errors
    ///
    /// Returns [`CostError::InvalidQuantile`] for a quantile outside `[0, 1]`.
    pub fn validate(&self) -> CostResult<()> {
        match *self {
            Self::Quantile(q) if !(q.is_finite() && (0.0..=1.0).contains(&q)) => {
                Err(CostError::InvalidQuantile(q))
            }
            _ => Ok(()),
        }
    }

    /// Aim point for `sources`, or `None` when the set is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy parameters are invalid.
    pub fn point(&self, sources: &CostSourceSet) -> CostResult<Option<DVec3>> {
        self.validate()?;
        if sources.is_empty() {
            return Ok(None);
        }

        let point = match *self {
            Self::WeightedCentroid => weighted_centroid(sources),
            Self::Heaviest => sources.heaviest().map(|s| s.center()),
            Self::Quantile(q) => {
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let rank = ((q * sources.len() as f64).floor() as usize).min(sources.len() - 1);
                sources.iter().nth(rank).map(|s| s.center())
            }
        };

        if let Some(p) = point {
            debug!(
                strategy = ?self,
                sources = sources.len(),
                x = p.x,
                y = p.y,
                z = p.z,
                "Derived sensor positioning point"
            );
        }
        Ok(point)
    }
}

fn weighted_centroid(sources: &CostSourceSet) -> Option<DVec3> {
    let total_weight: f64 = sources.iter().map(|s| s.weighted_cost()).sum();
    if total_weight > 0.0 {
        let sum = sources
            .iter()
            .fold(DVec3::ZERO, |acc, s| acc + s.center() * s.weighted_cost());
        return Some(sum / total_weight);
    }

    #[allow(clippy::cast_precision_loss)]
    let count = sources.len() as f64;
    let sum = sources.iter().fold(DVec3::ZERO, |acc, s| acc + s.center());
    (count > 0.0).then_some(sum / count)
}

/// Aim point using the default strategy ([`SensorPositioning::WeightedCentroid`]).
///
/// Returns `None` when `sources` is empty.
#[must_use]
pub fn sensor_positioning_point(sources: &CostSourceSet) -> Option<DVec3> {
    weighted_centroid(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::CostSource;

    const EPSILON: f64 = 1e-9;

    fn cube(min: DVec3, size: f64, cost: f64) -> CostSource {
        CostSource::new(min, min + DVec3::splat(size), cost).unwrap()
    }

    fn sample_set() -> CostSourceSet {
        [
            cube(DVec3::ZERO, 1.0, 3.0),               // weight 3
            cube(DVec3::new(4.0, 0.0, 0.0), 1.0, 1.0), // weight 1
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_empty_set_has_no_point() {
        let empty = CostSourceSet::new();
        assert_eq!(sensor_positioning_point(&empty), None);
        assert_eq!(SensorPositioning::Heaviest.point(&empty), Ok(None));
    }

    #[test]
    fn test_weighted_centroid() {
        let p = sensor_positioning_point(&sample_set()).unwrap();
        // (0.5 * 3 + 4.5 * 1) / 4
        assert!((p - DVec3::new(1.5, 0.5, 0.5)).length() < EPSILON);
    }

    #[test]
    fn test_zero_weight_falls_back_to_mean() {
        let set: CostSourceSet = [
            cube(DVec3::ZERO, 1.0, 0.0),
            cube(DVec3::new(2.0, 0.0, 0.0), 1.0, 0.0),
        ]
        .into_iter()
        .collect();
        let p = sensor_positioning_point(&set).unwrap();
        assert!((p - DVec3::new(1.5, 0.5, 0.5)).length() < EPSILON);
    }

    #[test]
    fn test_heaviest_and_quantile() {
        let set = sample_set();
        assert_eq!(
            SensorPositioning::Heaviest.point(&set),
            Ok(Some(DVec3::splat(0.5)))
        );
        assert_eq!(
            SensorPositioning::Quantile(0.0).point(&set),
            Ok(Some(DVec3::splat(0.5)))
        );
        assert_eq!(
            SensorPositioning::Quantile(1.0).point(&set),
            Ok(Some(DVec3::new(4.5, 0.5, 0.5)))
        );
    }

    #[test]
    fn test_translation_moves_point() {
        let offset = DVec3::new(-3.0, 7.0, 0.25);
        let moved: CostSourceSet = sample_set()
            .iter()
            .map(|s| s.translated(offset).unwrap())
            .collect();

        let before = sensor_positioning_point(&sample_set()).unwrap();
        let after = sensor_positioning_point(&moved).unwrap();
        assert!((after - (before + offset)).length() < 1e-9);
    }

    #[test]
    fn test_invalid_quantile() {
        assert_eq!(
            SensorPositioning::Quantile(-0.1).point(&sample_set()),
            Err(CostError::InvalidQuantile(-0.1))
        );
    }

    #[test]
    fn test_default_strategy() {
        assert_eq!(SensorPositioning::default(), SensorPositioning::WeightedCentroid);
    }
}
