use crate::index::{TermIndex, TripleIndex};
use closure_term::{Term, Triple};

/// An in-memory set of RDF triples.
///
/// Every distinct term is stored once; triples are stored as triples of term indices.
/// Besides the [`Triple`]-level API, an id-level API is exposed for the reasoner,
/// which works on indices only.
///
/// No ordering guarantee is given on the triples yielded by this store,
/// but the order is deterministic for a given sequence of insertions.
#[derive(Clone, Debug, Default)]
pub struct TripleStore {
    terms: TermIndex,
    triples: TripleIndex,
}

impl TripleStore {
    /// Build an empty [`TripleStore`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of triples in this store.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Whether this store contains no triple.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// The number of distinct terms ever inserted in this store.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Insert `triple` in this store, and return whether it was new.
    pub fn insert(&mut self, triple: Triple) -> bool {
        let [s, p, o] = triple.into_spo();
        let spo = [
            self.terms.ensure_index_owned(s),
            self.terms.ensure_index_owned(p),
            self.terms.ensure_index_owned(o),
        ];
        self.triples.insert(spo)
    }

    /// Whether this store contains `triple`.
    pub fn contains(&self, triple: &Triple) -> bool {
        self.get_ids(triple)
            .is_some_and(|spo| self.triples.contains(&spo))
    }

    /// Iter over all triples of this store.
    pub fn triples(&self) -> impl Iterator<Item = Triple> + '_ {
        self.triples.iter().map(|spo| self.get_triple(spo))
    }

    /// Iter over all triples of this store matching the given matchers.
    ///
    /// Each matcher is either [`Any`] or a constant [`Term`].
    /// Whenever at least one position is bound,
    /// only the relevant part of one index is scanned.
    pub fn triples_matching<S, P, O>(&self, sm: S, pm: P, om: O) -> impl Iterator<Item = Triple> + '_
    where
        S: TermMatcher,
        P: TermMatcher,
        O: TermMatcher,
    {
        let pattern = [sm.constant(), pm.constant(), om.constant()]
            .map(|c| c.map(|t| self.terms.get_index(t)));
        // a constant absent from the term index can not match anything
        let ids: Option<[Option<usize>; 3]> = match pattern {
            [Some(None), _, _] | [_, Some(None), _] | [_, _, Some(None)] => None,
            [s, p, o] => Some([s.flatten(), p.flatten(), o.flatten()]),
        };
        ids.into_iter()
            .flat_map(|ids| self.triples.matching(ids))
            .map(|spo| self.get_triple(spo))
    }

    /// Get the index of `t` in this store, if it exists.
    pub fn get_index(&self, t: &Term) -> Option<usize> {
        self.terms.get_index(t)
    }

    /// Get the index of `t` in this store, adding it to the term index if necessary.
    ///
    /// NB: this does not add any triple to the store.
    pub fn ensure_index(&mut self, t: &Term) -> usize {
        self.terms.ensure_index(t)
    }

    /// Get the term with the given index.
    ///
    /// # Precondition
    /// `i` must have been returned by [`get_index`](Self::get_index) or
    /// [`ensure_index`](Self::ensure_index) on this store, otherwise this method panics.
    pub fn term(&self, i: usize) -> &Term {
        self.terms.get_term(i)
    }

    /// The underlying term index.
    pub fn terms(&self) -> &TermIndex {
        &self.terms
    }

    /// The underlying triple index.
    pub fn ids(&self) -> &TripleIndex {
        &self.triples
    }

    /// Insert a triple given as term indices, and return whether it was new.
    ///
    /// # Precondition
    /// The indices must be valid in this store,
    /// and must form a well-formed triple (no literal subject, IRI predicate).
    pub fn insert_ids(&mut self, spo: [usize; 3]) -> bool {
        debug_assert!(spo.iter().all(|i| *i < self.terms.len()));
        debug_assert!(!self.term(spo[0]).is_literal() && self.term(spo[1]).is_iri());
        self.triples.insert(spo)
    }

    /// Whether this store contains a triple given as term indices.
    pub fn contains_ids(&self, spo: &[usize; 3]) -> bool {
        self.triples.contains(spo)
    }

    /// Iter over all id-triples matching the given pattern (`None` stands for any value).
    pub fn ids_matching(&self, spo: [Option<usize>; 3]) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.triples.matching(spo)
    }

    /// Get the indices of the components of `triple`, if they are all in the term index.
    pub fn get_ids(&self, triple: &Triple) -> Option<[usize; 3]> {
        let [s, p, o] = triple.as_spo();
        Some([
            self.terms.get_index(s)?,
            self.terms.get_index(p)?,
            self.terms.get_index(o)?,
        ])
    }

    /// Rebuild a [`Triple`] from its indices.
    pub fn get_triple(&self, [s, p, o]: [usize; 3]) -> Triple {
        Triple::new_unchecked(
            self.term(s).clone(),
            self.term(p).clone(),
            self.term(o).clone(),
        )
    }
}

impl Extend<Triple> for TripleStore {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        for t in iter {
            self.insert(t);
        }
    }
}

impl FromIterator<Triple> for TripleStore {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        let mut ret = TripleStore::new();
        ret.extend(iter);
        ret
    }
}

/// A position in [`TripleStore::triples_matching`]: either a constant term or [`Any`].
pub trait TermMatcher {
    /// The constant term this matcher requires, or `None` if it matches any term.
    fn constant(&self) -> Option<&Term>;
}

/// A matcher matching any term.
#[derive(Clone, Copy, Debug)]
pub struct Any;

impl TermMatcher for Any {
    fn constant(&self) -> Option<&Term> {
        None
    }
}

impl TermMatcher for Term {
    fn constant(&self) -> Option<&Term> {
        Some(self)
    }
}

impl<T: TermMatcher + ?Sized> TermMatcher for &T {
    fn constant(&self) -> Option<&Term> {
        T::constant(*self)
    }
}

impl<T: TermMatcher> TermMatcher for Option<T> {
    fn constant(&self) -> Option<&Term> {
        self.as_ref().and_then(T::constant)
    }
}
