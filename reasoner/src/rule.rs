//! I define [`Rule`]s, expressed as data:
//! an antecedent (a list of triple patterns),
//! a [`Conclusion`], and a list of [`Guard`]s restricting the accepted bindings.
use crate::error::{ConfigError, GuardError, MAX_ANTECEDENT_LEN};
use closure_inmem::Binding;
use closure_term::{PatternTerm, Term, TriplePattern, VarName};
use std::collections::BTreeSet;
use std::fmt;

/// An entailment rule.
///
/// A rule with an empty antecedent is an *axiom*:
/// its conclusion is asserted unconditionally, and must therefore be ground.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    name: String,
    antecedent: Vec<TriplePattern>,
    conclusion: Conclusion,
    guards: Vec<Guard>,
}

/// What a [`Rule`] concludes when its antecedent is satisfied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Conclusion {
    /// A triple to add to the store
    Triple(TriplePattern),
    /// The store is inconsistent; the binding is reported instead of being added
    Inconsistent,
}

/// A built-in test on bound variables.
///
/// Guards are pure functions of the binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Guard {
    /// The two variables are bound to different terms
    Distinct(VarName, VarName),
    /// The variable is bound to an IRI
    IsIri(VarName),
    /// The variable is bound to an IRI or a blank node
    IsResource(VarName),
    /// The variable is bound to a literal
    IsLiteral(VarName),
    /// The variable is bound to a literal with an XSD numeric datatype, whose value is the given integer
    NumericEquals(VarName, i64),
}

impl Rule {
    /// Build a rule concluding a triple.
    pub fn new<N: Into<String>>(name: N, antecedent: Vec<TriplePattern>, conclusion: TriplePattern) -> Self {
        Rule {
            name: name.into(),
            antecedent,
            conclusion: Conclusion::Triple(conclusion),
            guards: vec![],
        }
    }

    /// Build an axiom, i.e. a rule with an empty antecedent.
    pub fn axiom<N: Into<String>>(name: N, conclusion: TriplePattern) -> Self {
        Self::new(name, vec![], conclusion)
    }

    /// Build a constraint rule, whose conclusion is [`Conclusion::Inconsistent`].
    pub fn constraint<N: Into<String>>(name: N, antecedent: Vec<TriplePattern>) -> Self {
        Rule {
            name: name.into(),
            antecedent,
            conclusion: Conclusion::Inconsistent,
            guards: vec![],
        }
    }

    /// Add a guard to this rule.
    pub fn with_guard(mut self, guard: Guard) -> Self {
        self.guards.push(guard);
        self
    }

    /// The name of this rule.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The antecedent of this rule.
    pub fn antecedent(&self) -> &[TriplePattern] {
        &self.antecedent
    }

    /// The conclusion of this rule.
    pub fn conclusion(&self) -> &Conclusion {
        &self.conclusion
    }

    /// The guards of this rule.
    pub fn guards(&self) -> &[Guard] {
        &self.guards
    }

    /// Whether this rule is an axiom.
    pub fn is_axiom(&self) -> bool {
        self.antecedent.is_empty()
    }

    /// Whether this rule is a constraint rule.
    pub fn is_constraint(&self) -> bool {
        matches!(self.conclusion, Conclusion::Inconsistent)
    }

    /// The set of variables appearing in the antecedent.
    pub fn antecedent_variables(&self) -> BTreeSet<&VarName> {
        self.antecedent
            .iter()
            .flat_map(TriplePattern::variables)
            .collect()
    }

    /// Check that this rule is well-formed:
    /// * variables of the conclusion and of the guards appear in the antecedent,
    /// * axioms are ground,
    /// * constraints have a non-empty antecedent,
    /// * the antecedent is not longer than [`MAX_ANTECEDENT_LEN`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.antecedent.len() > MAX_ANTECEDENT_LEN {
            return Err(ConfigError::AntecedentTooLong {
                rule: self.name.clone(),
                len: self.antecedent.len(),
            });
        }
        match &self.conclusion {
            Conclusion::Triple(tp) if self.is_axiom() && !tp.is_ground() => {
                return Err(ConfigError::NonGroundAxiom(self.name.clone()));
            }
            Conclusion::Triple(tp) => {
                let bound = self.antecedent_variables();
                if let Some(var) = tp.variables().find(|v| !bound.contains(v)) {
                    return Err(ConfigError::UnboundConclusionVariable {
                        rule: self.name.clone(),
                        var: var.clone(),
                    });
                }
            }
            Conclusion::Inconsistent if self.is_axiom() => {
                return Err(ConfigError::EmptyConstraint(self.name.clone()));
            }
            Conclusion::Inconsistent => (),
        }
        let bound = self.antecedent_variables();
        for guard in &self.guards {
            if let Some(var) = guard.variables().find(|v| !bound.contains(v)) {
                return Err(ConfigError::UnboundGuardVariable {
                    rule: self.name.clone(),
                    var: var.clone(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.name)?;
        for (i, tp) in self.antecedent.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({tp})")?;
        }
        for guard in &self.guards {
            write!(f, ", {guard}")?;
        }
        match &self.conclusion {
            Conclusion::Triple(tp) => write!(f, " -> ({tp})"),
            Conclusion::Inconsistent => f.write_str(" -> false"),
        }
    }
}

impl Guard {
    /// Iter over the variables tested by this guard.
    pub fn variables(&self) -> impl Iterator<Item = &VarName> + '_ {
        let (v1, v2) = match self {
            Guard::Distinct(v1, v2) => (v1, Some(v2)),
            Guard::IsIri(v) | Guard::IsResource(v) | Guard::IsLiteral(v) => (v, None),
            Guard::NumericEquals(v, _) => (v, None),
        };
        std::iter::once(v1).chain(v2)
    }

    /// Evaluate this guard against `binding`.
    ///
    /// # Precondition
    /// All the [variables](Self::variables) of this guard must be bound,
    /// otherwise the guard is considered unsatisfied.
    pub fn evaluate(&self, binding: &Binding) -> Result<bool, GuardError> {
        let get = |v: &VarName| binding.get(v.as_str());
        match self {
            Guard::Distinct(v1, v2) => Ok(match (get(v1), get(v2)) {
                (Some(t1), Some(t2)) => t1 != t2,
                _ => false,
            }),
            Guard::IsIri(v) => Ok(get(v).is_some_and(Term::is_iri)),
            Guard::IsResource(v) => Ok(get(v).is_some_and(Term::is_resource)),
            Guard::IsLiteral(v) => Ok(get(v).is_some_and(Term::is_literal)),
            Guard::NumericEquals(v, n) => match get(v) {
                Some(t) => numeric_equals(t, *n),
                None => Ok(false),
            },
        }
    }
}

/// Whether `term` is a numeric literal equal to `n`.
pub(crate) fn numeric_equals(term: &Term, n: i64) -> Result<bool, GuardError> {
    let lit = term
        .as_literal()
        .ok_or_else(|| GuardError::NotALiteral(term.clone()))?;
    Ok(lit.to_numeric()?.equals_integer(n))
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guard::Distinct(v1, v2) => write!(f, "{v1} != {v2}"),
            Guard::IsIri(v) => write!(f, "isIRI({v})"),
            Guard::IsResource(v) => write!(f, "isResource({v})"),
            Guard::IsLiteral(v) => write!(f, "isLiteral({v})"),
            Guard::NumericEquals(v, n) => write!(f, "{v} = {n}"),
        }
    }
}

/// Shorthand for building a [`VarName`] known to be valid.
pub(crate) fn var(name: &'static str) -> VarName {
    VarName::new_unchecked(name)
}

/// Shorthand for building a constant [`PatternTerm`] from an IRI known to be valid.
pub(crate) fn iri(iri: &'static str) -> PatternTerm {
    PatternTerm::Term(Term::Iri(closure_term::Iri::new_unchecked(iri)))
}

/// Shorthand for building a [`TriplePattern`].
pub(crate) fn tp<S, P, O>(s: S, p: P, o: O) -> TriplePattern
where
    S: Into<PatternTerm>,
    P: Into<PatternTerm>,
    O: Into<PatternTerm>,
{
    TriplePattern::new(s, p, o)
}
