//! Set operations over cost sources.
//!
//! Every operation here reads its inputs and returns a new set. Overlap tests
//! use [`overlap_fraction`]; a pair meets a threshold only if it shares
//! positive volume and its fraction is at least the threshold.

use tracing::debug;

use crate::error::{CostError, CostResult};
use crate::set::CostSourceSet;
use crate::source::{overlap_fraction, CostSource};

fn check_threshold(threshold: f64) -> CostResult<()> {
    if threshold.is_finite() && (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(CostError::InvalidThreshold(threshold))
    }
}

fn meets_threshold(a: &CostSource, b: &CostSource, threshold: f64) -> bool {
    let fraction = overlap_fraction(a, b);
    fraction > 0.0 && fraction >= threshold
}

/// Sum of `cost * volume` over the set; zero for an empty set.
#[must_use]
pub fn total_cost(sources: &CostSourceSet) -> f64 {
    sources.iter().map(CostSource::weighted_cost).sum()
}

/// Sources present in both `a` and `b` (equality under the total order).
#[must_use]
pub fn intersect_cost_sources(a: &CostSourceSet, b: &CostSourceSet) -> CostSourceSet {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter(|source| large.contains(source))
        .copied()
        .collect()
}

/// Geometric intersection of two sets.
///
/// Every pair `(x, y)` from `a` and `b` sharing positive volume contributes a
/// source spanning the shared box, priced at the larger of the two costs.
#[must_use]
pub fn intersect_regions(a: &CostSourceSet, b: &CostSourceSet) -> CostSourceSet {
    let mut result = CostSourceSet::new();
    for x in a {
        for y in b {
            let Some((lo, hi)) = x.intersection(y) else {
                continue;
            };
            // Bounds come from valid sources, so the shared box is valid too
            if let Ok(shared) = CostSource::new(lo, hi, x.cost().max(y.cost())) {
                result.insert(shared);
            }
        }
    }
    result
}

/// Drop every source of `sources` that overlaps any source of `to_remove` by
/// at least `threshold`.
///
/// # Errors
///
/// Returns [`CostError::InvalidThreshold`] unless `threshold` is in `[0, 1]`.
pub fn remove_cost_sources(
    sources: &CostSourceSet,
    to_remove: &CostSourceSet,
    threshold: f64,
) -> CostResult<CostSourceSet> {
    check_threshold(threshold)?;

    let kept: CostSourceSet = sources
        .iter()
        .filter(|source| !to_remove.iter().any(|r| meets_threshold(source, r, threshold)))
        .copied()
        .collect();

    debug!(
        input = sources.len(),
        removed = sources.len() - kept.len(),
        threshold,
        "Removed overlapping cost sources"
    );

    Ok(kept)
}

/// Deduplicate a set against itself.
///
/// Sources are visited heaviest first; each is kept unless it overlaps an
/// already kept source by at least `threshold`. Of any overlapping pair the
/// greater source therefore survives, no two kept sources meet the threshold,
/// and running the operation again changes nothing.
///
/// # Errors
///
/// Returns [`CostError::InvalidThreshold`] unless `threshold` is in `[0, 1]`.
pub fn remove_overlapping(sources: &CostSourceSet, threshold: f64) -> CostResult<CostSourceSet> {
    check_threshold(threshold)?;

    let mut kept: Vec<CostSource> = Vec::with_capacity(sources.len());
    for source in sources {
        if kept.iter().all(|k| !meets_threshold(k, source, threshold)) {
            kept.push(*source);
        }
    }

    debug!(
        input = sources.len(),
        kept = kept.len(),
        threshold,
        "Removed self-overlapping cost sources"
    );

    Ok(kept.into_iter().collect())
}
