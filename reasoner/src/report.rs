//! I define [`ClosureReport`], the outcome of a closure run.
use closure_inmem::Binding;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Statistics and outcome of [`Reasoner::closure`](crate::Reasoner::closure).
///
/// A report whose [`status`](Self::status) is not [`ClosureStatus::Converged`]
/// describes a partial closure:
/// every triple in the store is entailed, but some entailed triples may be missing.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct ClosureReport {
    /// Number of triples in the store before the closure
    pub before: usize,
    /// Number of triples in the store after the closure
    pub after: usize,
    /// Number of iterations started
    pub iterations: usize,
    /// Number of new triples credited to each rule (rules deriving nothing are absent)
    pub derivations: BTreeMap<String, usize>,
    /// Number of well-formed candidate triples produced by the rules, including those already in the store
    pub candidates: usize,
    /// Number of partial bindings dropped because a guard could not be evaluated
    pub guard_errors: usize,
    /// Number of candidates dropped because they were not well-formed triples
    pub ill_formed: usize,
    /// Matches of constraint rules
    pub inconsistencies: Vec<Inconsistency>,
    /// How the closure ended
    pub status: ClosureStatus,
    /// Wall-clock duration of the closure
    pub elapsed: Duration,
}

/// A match of a constraint rule, i.e. evidence that the store is inconsistent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inconsistency {
    /// The name of the constraint rule
    pub rule: String,
    /// The binding satisfying its antecedent
    pub binding: Binding,
}

/// How a closure ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClosureStatus {
    /// A fixpoint was reached: the store is closed under the rules
    Converged,
    /// The cancellation flag was raised
    Cancelled,
    /// The timeout expired
    TimedOut,
    /// A resource ceiling was hit
    LimitReached(Limit),
}

/// The resource ceilings of [`ReasonerConfig`](crate::ReasonerConfig).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Limit {
    /// [`max_iterations`](crate::ReasonerConfig::max_iterations)
    Iterations,
    /// [`max_triples`](crate::ReasonerConfig::max_triples)
    Triples,
    /// [`max_candidates`](crate::ReasonerConfig::max_candidates)
    Candidates,
}

impl ClosureReport {
    /// Number of triples added by the closure.
    pub fn inferred(&self) -> usize {
        self.after - self.before
    }

    /// Growth of the store, in percent.
    ///
    /// If the store was initially empty, this is 0 if nothing was inferred, infinite otherwise.
    pub fn growth(&self) -> f64 {
        if self.before == 0 {
            if self.after == 0 {
                0.0
            } else {
                f64::INFINITY
            }
        } else {
            self.inferred() as f64 * 100.0 / self.before as f64
        }
    }

    /// Whether the closure reached a fixpoint.
    pub fn is_complete(&self) -> bool {
        self.status == ClosureStatus::Converged
    }

    /// Whether no constraint rule matched.
    pub fn is_consistent(&self) -> bool {
        self.inconsistencies.is_empty()
    }

    /// Number of new triples credited to the rule named `name`.
    pub fn derived_by(&self, name: &str) -> usize {
        self.derivations.get(name).copied().unwrap_or(0)
    }
}

impl fmt::Display for ClosureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "triples before closure: {}", self.before)?;
        writeln!(f, "triples after closure:  {}", self.after)?;
        writeln!(f, "inferred triples:       {}", self.inferred())?;
        if self.before > 0 {
            writeln!(f, "growth:                 +{:.1}%", self.growth())?;
        }
        writeln!(
            f,
            "{} iteration(s) in {:.3}s: {}",
            self.iterations,
            self.elapsed.as_secs_f64(),
            self.status
        )?;
        if self.guard_errors > 0 || self.ill_formed > 0 {
            writeln!(
                f,
                "skipped: {} guard error(s), {} ill-formed candidate(s)",
                self.guard_errors, self.ill_formed
            )?;
        }
        for (rule, n) in &self.derivations {
            writeln!(f, "  {rule}: {n}")?;
        }
        for inc in &self.inconsistencies {
            writeln!(f, "inconsistency [{}] {}", inc.rule, inc.binding)?;
        }
        Ok(())
    }
}

impl fmt::Display for ClosureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClosureStatus::Converged => f.write_str("converged"),
            ClosureStatus::Cancelled => f.write_str("cancelled"),
            ClosureStatus::TimedOut => f.write_str("timed out"),
            ClosureStatus::LimitReached(limit) => write!(f, "{limit} limit reached"),
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Limit::Iterations => "iteration",
            Limit::Triples => "triple",
            Limit::Candidates => "candidate",
        })
    }
}
