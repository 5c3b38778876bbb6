//! Exclusion constraints between catalog items

mod generator;

pub use generator::generate_forbidden_pairs;

use std::collections::HashSet;

/// Symmetric set of item index pairs that may not both appear in a build
///
/// A self-pair `(i, i)` caps item `i` to a single copy. Every insertion
/// adds both orderings, so `contains(i, j) == contains(j, i)` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForbiddenPairs {
    pairs: HashSet<(usize, usize)>,
}

impl ForbiddenPairs {
    /// Create an empty relation
    pub fn new() -> Self {
        ForbiddenPairs {
            pairs: HashSet::new(),
        }
    }

    /// Forbid `i` and `j` from appearing together (both orderings)
    pub fn forbid(&mut self, i: usize, j: usize) {
        self.pairs.insert((i, j));
        self.pairs.insert((j, i));
    }

    /// Cap item `i` to a single copy
    pub fn forbid_repeat(&mut self, i: usize) {
        self.pairs.insert((i, i));
    }

    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.pairs.contains(&(i, j))
    }

    /// Whether `candidate` conflicts with any already-chosen index
    pub fn conflicts_with<I>(&self, candidate: usize, chosen: I) -> bool
    where
        I: IntoIterator<Item = usize>,
    {
        !self.pairs.is_empty() && chosen.into_iter().any(|j| self.contains(candidate, j))
    }

    /// Number of ordered pairs, self-pairs included
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs.iter().copied()
    }
}

impl FromIterator<(usize, usize)> for ForbiddenPairs {
    fn from_iter<T: IntoIterator<Item = (usize, usize)>>(iter: T) -> Self {
        let mut pairs = ForbiddenPairs::new();
        for (i, j) in iter {
            pairs.forbid(i, j);
        }
        pairs
    }
}
