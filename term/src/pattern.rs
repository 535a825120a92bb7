//! I define [`TriplePattern`]s, the building blocks of rules and queries.
use crate::{BnodeId, Iri, Literal, Term, VarName};
use std::fmt;

/// A position in a [`TriplePattern`]: either a constant term or a variable.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PatternTerm {
    /// A named variable
    Variable(VarName),
    /// A constant term
    Term(Term),
}

impl PatternTerm {
    /// The variable name, if this is a variable.
    pub fn as_variable(&self) -> Option<&VarName> {
        match self {
            PatternTerm::Variable(v) => Some(v),
            PatternTerm::Term(_) => None,
        }
    }

    /// The constant term, if this is not a variable.
    pub fn as_term(&self) -> Option<&Term> {
        match self {
            PatternTerm::Variable(_) => None,
            PatternTerm::Term(t) => Some(t),
        }
    }
}

impl From<VarName> for PatternTerm {
    fn from(value: VarName) -> Self {
        PatternTerm::Variable(value)
    }
}

impl From<Term> for PatternTerm {
    fn from(value: Term) -> Self {
        PatternTerm::Term(value)
    }
}

impl From<Iri> for PatternTerm {
    fn from(value: Iri) -> Self {
        PatternTerm::Term(value.into())
    }
}

impl From<BnodeId> for PatternTerm {
    fn from(value: BnodeId) -> Self {
        PatternTerm::Term(value.into())
    }
}

impl From<Literal> for PatternTerm {
    fn from(value: Literal) -> Self {
        PatternTerm::Term(value.into())
    }
}

impl fmt::Display for PatternTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternTerm::Variable(v) => v.fmt(f),
            PatternTerm::Term(t) => t.fmt(f),
        }
    }
}

/// A triple whose positions may be variables.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TriplePattern(pub [PatternTerm; 3]);

impl TriplePattern {
    /// Build a new pattern.
    pub fn new<S, P, O>(s: S, p: P, o: O) -> Self
    where
        S: Into<PatternTerm>,
        P: Into<PatternTerm>,
        O: Into<PatternTerm>,
    {
        TriplePattern([s.into(), p.into(), o.into()])
    }

    /// The subject position.
    pub fn s(&self) -> &PatternTerm {
        &self.0[0]
    }

    /// The predicate position.
    pub fn p(&self) -> &PatternTerm {
        &self.0[1]
    }

    /// The object position.
    pub fn o(&self) -> &PatternTerm {
        &self.0[2]
    }

    /// Iter over the variables of this pattern, in subject-predicate-object order.
    ///
    /// A variable occurring several times is yielded several times.
    pub fn variables(&self) -> impl Iterator<Item = &VarName> + '_ {
        self.0.iter().filter_map(PatternTerm::as_variable)
    }

    /// Whether this pattern contains no variable.
    pub fn is_ground(&self) -> bool {
        self.variables().next().is_none()
    }
}

impl fmt::Display for TriplePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.0[0], self.0[1], self.0[2])
    }
}
