//! Paired-score observations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One observation: two non-negative scores for the same subject.
///
/// No upper bound is enforced here. Values above the configured maximum
/// are legal and grow the grid when binned.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CoordinatePair {
    pub x: u32,
    pub y: u32,
}

impl CoordinatePair {
    /// Creates a new pair.
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Returns the larger of the two coordinates.
    #[inline]
    pub fn max_component(&self) -> u32 {
        self.x.max(self.y)
    }
}

impl fmt::Debug for CoordinatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for CoordinatePair {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x, y)
    }
}

/// An ordered sequence of observations.
///
/// Order is kept exactly as read so repeated parses compare equal, but
/// binning does not depend on it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    pub pairs: Vec<CoordinatePair>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends one observation.
    pub fn push(&mut self, pair: CoordinatePair) {
        self.pairs.push(pair);
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CoordinatePair> {
        self.pairs.iter()
    }

    /// Largest value observed on either axis, or `None` for an empty dataset.
    pub fn max_value(&self) -> Option<u32> {
        self.pairs.iter().map(CoordinatePair::max_component).max()
    }
}

impl FromIterator<CoordinatePair> for Dataset {
    fn from_iter<I: IntoIterator<Item = CoordinatePair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<(u32, u32)>> for Dataset {
    fn from(pairs: Vec<(u32, u32)>) -> Self {
        pairs.into_iter().map(CoordinatePair::from).collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a CoordinatePair;
    type IntoIter = std::slice::Iter<'a, CoordinatePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_value_spans_both_axes() {
        let dataset = Dataset::from(vec![(3, 9), (12, 1), (0, 0)]);
        assert_eq!(dataset.max_value(), Some(12));
    }

    #[test]
    fn max_value_of_empty_dataset_is_none() {
        assert_eq!(Dataset::new().max_value(), None);
    }

    #[test]
    fn collect_preserves_order() {
        let dataset: Dataset = [(5, 5), (0, 0), (5, 5)]
            .into_iter()
            .map(CoordinatePair::from)
            .collect();
        assert_eq!(dataset.pairs[0], CoordinatePair::new(5, 5));
        assert_eq!(dataset.pairs[1], CoordinatePair::new(0, 0));
        assert_eq!(dataset.len(), 3);
    }
}
