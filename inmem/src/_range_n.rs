use std::collections::btree_set::Range;
use std::collections::BTreeSet;

/// Prefix range queries on a sorted set of id-triples.
pub trait RangeN {
    fn range1(&self, k1: usize) -> Range<'_, [usize; 3]>;
    fn range2(&self, k1: usize, k2: usize) -> Range<'_, [usize; 3]>;
}

impl RangeN for BTreeSet<[usize; 3]> {
    fn range1(&self, k1: usize) -> Range<'_, [usize; 3]> {
        self.range([k1, 0, 0]..=[k1, usize::MAX, usize::MAX])
    }

    fn range2(&self, k1: usize, k2: usize) -> Range<'_, [usize; 3]> {
        self.range([k1, k2, 0]..=[k1, k2, usize::MAX])
    }
}
