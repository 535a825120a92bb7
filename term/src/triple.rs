//! I define [`Triple`], an RDF statement whose positions are guaranteed to be well-formed.
use crate::Term;
use std::fmt;
use thiserror::Error;

/// An RDF triple.
///
/// The subject is never a literal, and the predicate is always an IRI.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Triple([Term; 3]);

impl Triple {
    /// Build a new triple, checking that it is well-formed.
    pub fn new(s: Term, p: Term, o: Term) -> Result<Self, InvalidTriple> {
        if s.is_literal() {
            return Err(InvalidTriple::LiteralSubject(s));
        }
        if !p.is_iri() {
            return Err(InvalidTriple::NonIriPredicate(p));
        }
        Ok(Triple([s, p, o]))
    }

    /// Build a new triple without checking that it is well-formed.
    ///
    /// This is meant for triples whose components come from another well-formed triple
    /// (e.g. when read back from a store).
    pub fn new_unchecked(s: Term, p: Term, o: Term) -> Self {
        debug_assert!(!s.is_literal() && p.is_iri(), "ill-formed triple {s} {p} {o}");
        Triple([s, p, o])
    }

    /// The subject of this triple.
    pub fn s(&self) -> &Term {
        &self.0[0]
    }

    /// The predicate of this triple.
    pub fn p(&self) -> &Term {
        &self.0[1]
    }

    /// The object of this triple.
    pub fn o(&self) -> &Term {
        &self.0[2]
    }

    /// The three components of this triple.
    pub fn as_spo(&self) -> &[Term; 3] {
        &self.0
    }

    /// Consume this triple, returning its three components.
    pub fn into_spo(self) -> [Term; 3] {
        self.0
    }
}

impl TryFrom<[Term; 3]> for Triple {
    type Error = InvalidTriple;

    fn try_from([s, p, o]: [Term; 3]) -> Result<Self, Self::Error> {
        Triple::new(s, p, o)
    }
}

/// Triples are displayed in N-Triples syntax.
impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.0[0], self.0[1], self.0[2])
    }
}

/// This error is raised when trying to build an ill-formed [`Triple`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidTriple {
    /// The subject is a literal
    #[error("Literal {0} can not be used as subject")]
    LiteralSubject(Term),
    /// The predicate is not an IRI
    #[error("{0} can not be used as predicate")]
    NonIriPredicate(Term),
}
