//! I define the two layers of a [`TripleStore`](crate::TripleStore):
//! * a [`TermIndex`] is a bidirectional association of [terms](`Term`) with `usize` indices;
//! * a [`TripleIndex`] is a set of `[usize; 3]` triples, indexed in every useful order.
use crate::_range_n::RangeN;
use closure_term::Term;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap, HashSet};

/// A [`TermIndex`] is a bidirectional association of [terms](`Term`) with `usize` indices.
///
/// Indices are allocated contiguously from 0, and never reclaimed.
#[derive(Clone, Debug, Default)]
pub struct TermIndex {
    t2i: HashMap<Term, usize>,
    i2t: Vec<Term>,
}

impl TermIndex {
    /// Build an empty [`TermIndex`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of terms in this index.
    pub fn len(&self) -> usize {
        self.i2t.len()
    }

    /// Whether this index contains no term.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the index corresponding to term `t`, if it exists.
    pub fn get_index(&self, t: &Term) -> Option<usize> {
        self.t2i.get(t).copied()
    }

    /// Get the index corresponding to term `t`, adding it in the term-index if necessary.
    pub fn ensure_index(&mut self, t: &Term) -> usize {
        if let Some(i) = self.t2i.get(t) {
            return *i;
        }
        self.ensure_index_owned(t.clone())
    }

    /// Same as [`ensure_index`](Self::ensure_index), but avoids cloning `t` when it is new.
    pub fn ensure_index_owned(&mut self, t: Term) -> usize {
        match self.t2i.entry(t) {
            Entry::Vacant(e) => {
                let i = self.i2t.len();
                self.i2t.push(e.key().clone());
                e.insert(i);
                i
            }
            Entry::Occupied(e) => *e.get(),
        }
    }

    /// Get the term corresponding to index `i`.
    ///
    /// # Precondition
    /// `i` must have been returned previously by
    /// [`get_index`](TermIndex::get_index) or [`ensure_index`](TermIndex::ensure_index),
    /// otherwise this method panics.
    pub fn get_term(&self, i: usize) -> &Term {
        &self.i2t[i]
    }

    /// Iter over all terms of this index, in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Term> + '_ {
        self.i2t.iter()
    }
}

/// A set of `[usize; 3]` triples (in subject-predicate-object order).
///
/// Membership is answered by a hash set,
/// and pattern matching by three sorted indexes (`spo`, `pos`, `osp`),
/// covering all combinations of bound positions.
#[derive(Clone, Debug, Default)]
pub struct TripleIndex {
    members: HashSet<[usize; 3]>,
    spo: BTreeSet<[usize; 3]>,
    pos: BTreeSet<[usize; 3]>,
    osp: BTreeSet<[usize; 3]>,
}

impl TripleIndex {
    /// Build an empty [`TripleIndex`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of triples in this index.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether this index contains no triple.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether this index contains the triple `[s, p, o]`.
    pub fn contains(&self, spo: &[usize; 3]) -> bool {
        self.members.contains(spo)
    }

    /// Insert the triple `[s, p, o]`, and return whether it was new.
    pub fn insert(&mut self, [si, pi, oi]: [usize; 3]) -> bool {
        self.members.insert([si, pi, oi]) && {
            self.spo.insert([si, pi, oi]);
            self.pos.insert([pi, oi, si]);
            self.osp.insert([oi, si, pi]);
            true
        }
    }

    /// Iter over all triples, in `spo` order.
    pub fn iter(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.spo.iter().copied()
    }

    /// Iter over all triples matching the given pattern,
    /// where `None` stands for any value.
    ///
    /// Triples are always yielded in subject-predicate-object order,
    /// whatever the index used to find them.
    pub fn matching(&self, [s, p, o]: [Option<usize>; 3]) -> Box<dyn Iterator<Item = [usize; 3]> + '_> {
        match (s, p, o) {
            (None, None, None) => Box::new(self.iter()),
            (Some(si), None, None) => Box::new(self.spo.range1(si).copied()),
            (None, Some(pi), None) => Box::new(self.pos.range1(pi).map(|&[p, o, s]| [s, p, o])),
            (None, None, Some(oi)) => Box::new(self.osp.range1(oi).map(|&[o, s, p]| [s, p, o])),
            (Some(si), Some(pi), None) => Box::new(self.spo.range2(si, pi).copied()),
            (None, Some(pi), Some(oi)) => {
                Box::new(self.pos.range2(pi, oi).map(|&[p, o, s]| [s, p, o]))
            }
            (Some(si), None, Some(oi)) => {
                Box::new(self.osp.range2(oi, si).map(|&[o, s, p]| [s, p, o]))
            }
            (Some(si), Some(pi), Some(oi)) => {
                let spo = [si, pi, oi];
                Box::new(self.contains(&spo).then_some(spo).into_iter())
            }
        }
    }

    /// Estimate how many triples match the given pattern, without enumerating them when possible.
    ///
    /// The estimate is exact when 0, 1 or 3 positions are bound.
    pub fn count_matching(&self, spo: [Option<usize>; 3]) -> usize {
        match spo {
            [None, None, None] => self.len(),
            [Some(s), Some(p), Some(o)] => usize::from(self.contains(&[s, p, o])),
            _ => self.matching(spo).count(),
        }
    }
}

impl Extend<[usize; 3]> for TripleIndex {
    fn extend<T: IntoIterator<Item = [usize; 3]>>(&mut self, iter: T) {
        for spo in iter {
            self.insert(spo);
        }
    }
}

impl FromIterator<[usize; 3]> for TripleIndex {
    fn from_iter<T: IntoIterator<Item = [usize; 3]>>(iter: T) -> Self {
        let mut ret = TripleIndex::new();
        ret.extend(iter);
        ret
    }
}
