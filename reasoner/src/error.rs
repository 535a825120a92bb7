use closure_term::{NumericError, Term, VarName};
use thiserror::Error;

/// The maximum number of patterns in the antecedent of a rule.
pub const MAX_ANTECEDENT_LEN: usize = 32;

/// This error is raised when a [`RuleCatalog`](crate::RuleCatalog) can not be used by a
/// [`Reasoner`](crate::Reasoner).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable of the conclusion does not appear in the antecedent
    #[error("Rule {rule}: variable {var} of the conclusion does not appear in the antecedent")]
    UnboundConclusionVariable {
        /// The rule name
        rule: String,
        /// The offending variable
        var: VarName,
    },
    /// A variable of a guard does not appear in the antecedent
    #[error("Rule {rule}: variable {var} of a guard does not appear in the antecedent")]
    UnboundGuardVariable {
        /// The rule name
        rule: String,
        /// The offending variable
        var: VarName,
    },
    /// An axiom (rule with an empty antecedent) has a non-ground conclusion
    #[error("Rule {0}: an axiom must have a ground conclusion")]
    NonGroundAxiom(String),
    /// A constraint rule has an empty antecedent
    #[error("Rule {0}: a constraint rule must have a non-empty antecedent")]
    EmptyConstraint(String),
    /// Two rules have the same name
    #[error("Duplicate rule name {0}")]
    DuplicateRuleName(String),
    /// The antecedent of a rule is too long
    #[error("Rule {rule}: antecedent has {len} patterns (max {max})", max = MAX_ANTECEDENT_LEN)]
    AntecedentTooLong {
        /// The rule name
        rule: String,
        /// The length of the antecedent
        len: usize,
    },
    /// A rule name given to select rules does not match any rule
    #[error("No rule named {0}")]
    UnknownRule(String),
}

/// This error is raised when a [`Guard`](crate::Guard) can not be evaluated.
///
/// The candidate being checked is then skipped.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GuardError {
    /// A numeric test was applied to a term that is not a literal
    #[error("{0} is not a literal")]
    NotALiteral(Term),
    /// A numeric test was applied to a literal that is not a valid number
    #[error(transparent)]
    Numeric(#[from] NumericError),
}
