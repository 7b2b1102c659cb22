//! Property-based tests for cost source set algebra.
//!
//! Run with: cargo test -p clearance-cost -- proptest

use clearance_cost::{
    intersect_cost_sources, overlap_fraction, remove_cost_sources, remove_overlapping,
    sensor_positioning_point, total_cost, CostSource, CostSourceSet, SensorPositioning,
};
use glam::DVec3;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// A box with corners in a bounded range and a non-negative cost.
fn arb_source() -> impl Strategy<Value = CostSource> {
    (
        prop::array::uniform3(-10.0..10.0f64),
        prop::array::uniform3(0.0..5.0f64),
        0.0..10.0f64,
    )
        .prop_map(|([x, y, z], [w, h, d], cost)| {
            let min = DVec3::new(x, y, z);
            CostSource::new(min, min + DVec3::new(w, h, d), cost).unwrap()
        })
}

fn arb_set(max: usize) -> impl Strategy<Value = CostSourceSet> {
    prop::collection::vec(arb_source(), 0..max).prop_map(|v| v.into_iter().collect())
}

/// Sources that all live in the half-space x < 0.
fn arb_left_set() -> impl Strategy<Value = CostSourceSet> {
    arb_set(8).prop_map(|set| {
        set.iter()
            .map(|s| s.translated(DVec3::new(-20.0 - s.aabb_max().x, 0.0, 0.0)).unwrap())
            .collect()
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn proptest_self_overlap_is_one(source in arb_source()) {
        prop_assume!(source.volume() > 1e-9);
        prop_assert!((overlap_fraction(&source, &source) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn proptest_overlap_is_symmetric_and_bounded(a in arb_source(), b in arb_source()) {
        let ab = overlap_fraction(&a, &b);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert_eq!(ab, overlap_fraction(&b, &a));
    }

    #[test]
    fn proptest_remove_overlapping_is_idempotent(set in arb_set(12), threshold in 0.0..=1.0f64) {
        let once = remove_overlapping(&set, threshold).unwrap();
        let twice = remove_overlapping(&once, threshold).unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.len() <= set.len());
    }

    #[test]
    fn proptest_remove_overlapping_leaves_no_qualifying_pair(
        set in arb_set(12),
        threshold in 0.0..=1.0f64,
    ) {
        let kept: Vec<CostSource> =
            remove_overlapping(&set, threshold).unwrap().into_iter().collect();
        for (i, a) in kept.iter().enumerate() {
            for b in &kept[i + 1..] {
                let fraction = overlap_fraction(a, b);
                prop_assert!(fraction == 0.0 || fraction < threshold);
            }
        }
    }

    #[test]
    fn proptest_total_cost_is_additive_over_disjoint_sets(
        left in arb_left_set(),
        right in arb_set(8),
    ) {
        let mut union = left.clone();
        union.extend(right.iter().copied());
        let expected = total_cost(&left) + total_cost(&right);
        prop_assert!((total_cost(&union) - expected).abs() < 1e-6 * expected.max(1.0));
    }

    #[test]
    fn proptest_intersection_is_subset_of_both(a in arb_set(8), b in arb_set(8)) {
        let mut b_with_shared = b.clone();
        b_with_shared.extend(a.iter().take(2).copied());
        let both = intersect_cost_sources(&a, &b_with_shared);
        for source in &both {
            prop_assert!(a.contains(source));
            prop_assert!(b_with_shared.contains(source));
        }
        prop_assert!(both.len() >= a.len().min(2));
    }

    #[test]
    fn proptest_remove_nothing_is_identity(set in arb_set(10), threshold in 0.0..=1.0f64) {
        let kept = remove_cost_sources(&set, &CostSourceSet::new(), threshold).unwrap();
        prop_assert_eq!(kept, set);
    }

    #[test]
    fn proptest_sensor_point_translates(
        set in arb_set(8),
        offset in prop::array::uniform3(-50.0..50.0f64),
    ) {
        let offset = DVec3::from_array(offset);
        let moved: CostSourceSet = set.iter().map(|s| s.translated(offset).unwrap()).collect();
        match (sensor_positioning_point(&set), sensor_positioning_point(&moved)) {
            (None, None) => prop_assert!(set.is_empty()),
            (Some(p), Some(q)) => prop_assert!((q - (p + offset)).length() < 1e-6),
            _ => prop_assert!(false, "translation changed emptiness"),
        }
    }

    #[test]
    fn proptest_sensor_point_inside_bounds(set in arb_set(8)) {
        if let Some(p) = sensor_positioning_point(&set) {
            let lo = set.iter().fold(DVec3::splat(f64::MAX), |acc, s| acc.min(s.aabb_min()));
            let hi = set.iter().fold(DVec3::splat(f64::MIN), |acc, s| acc.max(s.aabb_max()));
            prop_assert!(p.cmpge(lo - DVec3::splat(1e-9)).all());
            prop_assert!(p.cmple(hi + DVec3::splat(1e-9)).all());
        }
    }
}

// =============================================================================
// Fixed scenarios
// =============================================================================

#[test]
fn test_identical_cubes_keep_greater() {
    let light = CostSource::new(DVec3::ZERO, DVec3::ONE, 2.0).unwrap();
    let heavy = CostSource::new(DVec3::ZERO, DVec3::ONE, 3.0).unwrap();
    let set: CostSourceSet = [light, heavy].into_iter().collect();

    let deduped = remove_overlapping(&set, 0.99).unwrap();
    assert_eq!(deduped.len(), 1);
    assert!(deduped.contains(&heavy));
    assert_eq!(total_cost(&set) - total_cost(&deduped), light.cost() * light.volume());
}

#[test]
fn test_strategies_agree_on_single_source() {
    let only = CostSource::new(DVec3::new(1.0, 2.0, 3.0), DVec3::new(3.0, 4.0, 5.0), 1.0).unwrap();
    let set: CostSourceSet = std::iter::once(only).collect();
    for strategy in [
        SensorPositioning::WeightedCentroid,
        SensorPositioning::Heaviest,
        SensorPositioning::Quantile(0.4),
    ] {
        assert_eq!(strategy.point(&set), Ok(Some(DVec3::new(2.0, 3.0, 4.0))));
    }
}

#[test]
fn test_strategy_json_roundtrip() {
    let strategy = SensorPositioning::Quantile(0.4);
    let json = serde_json::to_string(&strategy).unwrap();
    let back: SensorPositioning = serde_json::from_str(&json).unwrap();
    assert_eq!(strategy, back);
}
