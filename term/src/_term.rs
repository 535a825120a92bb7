use crate::{BnodeId, Iri, Literal};
use std::fmt;

/// The different kinds of terms that a [`Term`] can represent.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum TermKind {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri,
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode,
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
}

/// An RDF term.
///
/// Two terms are equal iff they have the same kind and the same components;
/// in particular, literals are compared by lexical form, datatype and language tag,
/// not by value.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Term {
    /// An IRI
    Iri(Iri),
    /// A blank node
    BlankNode(BnodeId),
    /// A literal
    Literal(Literal),
}

impl Term {
    /// Build an IRI term from `iri`, which must be a valid absolute IRI.
    pub fn iri<T: AsRef<str>>(iri: T) -> Result<Self, crate::InvalidIri> {
        Iri::new(iri.as_ref()).map(Term::Iri)
    }

    /// The kind of this term.
    pub fn kind(&self) -> TermKind {
        match self {
            Term::Iri(_) => TermKind::Iri,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::Literal(_) => TermKind::Literal,
        }
    }

    /// Whether this term is an IRI.
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Whether this term is a blank node.
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Whether this term is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Whether this term is an IRI or a blank node,
    /// i.e. whether it can be used as the subject of a triple.
    pub fn is_resource(&self) -> bool {
        !self.is_literal()
    }

    /// The underlying IRI, if any.
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// The underlying blank node identifier, if any.
    pub fn as_blank_node(&self) -> Option<&BnodeId> {
        match self {
            Term::BlankNode(id) => Some(id),
            _ => None,
        }
    }

    /// The underlying literal, if any.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Whether this term is the IRI `iri`.
    pub fn is_iri_str(&self, iri: &str) -> bool {
        matches!(self, Term::Iri(i) if i == iri)
    }
}

impl From<Iri> for Term {
    fn from(value: Iri) -> Self {
        Term::Iri(value)
    }
}

impl From<BnodeId> for Term {
    fn from(value: BnodeId) -> Self {
        Term::BlankNode(value)
    }
}

impl From<Literal> for Term {
    fn from(value: Literal) -> Self {
        Term::Literal(value)
    }
}

/// Terms are displayed in N-Triples syntax.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => iri.fmt(f),
            Term::BlankNode(id) => id.fmt(f),
            Term::Literal(lit) => lit.fmt(f),
        }
    }
}
