//! Ordered container of cost sources.

use std::collections::{btree_set, BTreeSet};
use std::iter::Rev;

use serde::{Deserialize, Serialize};

use crate::source::CostSource;

/// A set of cost sources under the [`CostSource`] total order.
///
/// Iteration runs heaviest first. Inserting a source equal to one already
/// present leaves the set unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostSourceSet {
    sources: BTreeSet<CostSource>,
}

impl CostSourceSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a source. Returns false if an equal source was already present.
    pub fn insert(&mut self, source: CostSource) -> bool {
        self.sources.insert(source)
    }

    /// Remove a source. Returns false if it was not present.
    pub fn remove(&mut self, source: &CostSource) -> bool {
        self.sources.remove(source)
    }

    /// Whether an equal source is present.
    #[must_use]
    pub fn contains(&self, source: &CostSource) -> bool {
        self.sources.contains(source)
    }

    /// Number of sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// The heaviest source.
    #[must_use]
    pub fn heaviest(&self) -> Option<&CostSource> {
        self.sources.last()
    }

    /// Iterate heaviest first.
    pub fn iter(&self) -> Rev<btree_set::Iter<'_, CostSource>> {
        self.sources.iter().rev()
    }
}

impl FromIterator<CostSource> for CostSourceSet {
    fn from_iter<I: IntoIterator<Item = CostSource>>(iter: I) -> Self {
        Self {
            sources: iter.into_iter().collect(),
        }
    }
}

impl Extend<CostSource> for CostSourceSet {
    fn extend<I: IntoIterator<Item = CostSource>>(&mut self, iter: I) {
        self.sources.extend(iter);
    }
}

impl IntoIterator for CostSourceSet {
    type Item = CostSource;
    type IntoIter = Rev<btree_set::IntoIter<CostSource>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sources.into_iter().rev()
    }
}

impl<'a> IntoIterator for &'a CostSourceSet {
    type Item = &'a CostSource;
    type IntoIter = Rev<btree_set::Iter<'a, CostSource>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
