//! I provide [`Reasoner`], computing the closure of a [`TripleStore`] under a [`RuleCatalog`]
//! by semi-naive forward chaining.
//!
//! Each iteration evaluates, for every rule and every position `i` of its antecedent,
//! the join where pattern `i` only matches triples inserted by the previous iteration (the *delta*),
//! patterns before `i` only match older triples, and patterns after `i` match any triple.
//! Every binding of an antecedent is therefore produced exactly once over the whole closure.
//! The first iteration considers the whole store as the delta,
//! and only evaluates position 0 of each rule.
use crate::catalog::RuleCatalog;
use crate::config::ReasonerConfig;
use crate::error::ConfigError;
use crate::report::{ClosureReport, ClosureStatus, Inconsistency, Limit};
use closure_inmem::{TripleIndex, TripleStore};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

mod _compiled;
use _compiled::{CompiledRule, JobOutput, Source};

/// A forward-chaining reasoner, applying a [`RuleCatalog`] to [`TripleStore`]s.
///
/// ```
/// # use closure_inmem::TripleStore;
/// # use closure_reasoner::{Reasoner, RuleCatalog, ReasonerConfig};
/// # use closure_term::{ns::{rdf, rdfs}, Term, Triple};
/// let t = |s: &str, p: &str, o: &str| Triple::new(Term::iri(s).unwrap(), Term::iri(p).unwrap(), Term::iri(o).unwrap()).unwrap();
/// let mut store: TripleStore = [
///     t("http://example.org/alice", rdf::type_, "http://example.org/SerialKiller"),
///     t("http://example.org/SerialKiller", rdfs::subClassOf, "http://example.org/Criminal"),
/// ].into_iter().collect();
///
/// let reasoner = Reasoner::new(RuleCatalog::rdfs(), ReasonerConfig::default())?;
/// let report = reasoner.closure(&mut store);
/// assert!(report.is_complete());
/// assert!(store.contains(&t("http://example.org/alice", rdf::type_, "http://example.org/Criminal")));
/// # Ok::<(), closure_reasoner::ConfigError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Reasoner {
    catalog: RuleCatalog,
    config: ReasonerConfig,
}

/// A (rule, delta position) pair evaluated during an iteration.
#[derive(Clone, Copy, Debug)]
struct Job {
    rule: usize,
    delta_pos: Option<usize>,
}

impl Reasoner {
    /// Build a reasoner, checking that every rule of `catalog` is valid
    /// (see [`Rule::validate`](crate::Rule::validate)) and that rule names are unique.
    pub fn new(catalog: RuleCatalog, config: ReasonerConfig) -> Result<Self, ConfigError> {
        let mut names = HashSet::new();
        for rule in catalog.rules() {
            rule.validate()?;
            if !names.insert(rule.name()) {
                return Err(ConfigError::DuplicateRuleName(rule.name().to_string()));
            }
        }
        Ok(Reasoner { catalog, config })
    }

    /// The rules applied by this reasoner.
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// The configuration of this reasoner.
    pub fn config(&self) -> &ReasonerConfig {
        &self.config
    }

    /// Expand `store` with all the triples entailed by the rules.
    pub fn closure(&self, store: &mut TripleStore) -> ClosureReport {
        self.closure_with_cancel(store, &AtomicBool::new(false))
    }

    /// Expand `store` with all the triples entailed by the rules,
    /// stopping before the next iteration as soon as `cancel` is set.
    ///
    /// When stopped early, `store` holds a partial closure,
    /// and the [status](ClosureReport::status) of the report says why.
    pub fn closure_with_cancel(&self, store: &mut TripleStore, cancel: &AtomicBool) -> ClosureReport {
        let start = Instant::now();
        let before = store.len();
        log::info!(
            "closure of {} triple(s) under {} rule(s)",
            before,
            self.catalog.len()
        );
        let rules: Vec<_> = self
            .catalog
            .rules()
            .iter()
            .map(|r| CompiledRule::new(r, store))
            .collect();
        let mut run = Run {
            config: &self.config,
            rules: &rules,
            derivations: BTreeMap::new(),
            candidates: 0,
            guard_errors: 0,
            ill_formed: 0,
            inconsistencies: vec![],
        };

        let mut status = run.insert_axioms(store);
        let mut iterations = 0;
        let mut delta: Option<TripleIndex> = None;
        while status.is_none() {
            if cancel.load(Ordering::Relaxed) {
                status = Some(ClosureStatus::Cancelled);
                break;
            }
            if self.config.timeout.is_some_and(|t| start.elapsed() >= t) {
                status = Some(ClosureStatus::TimedOut);
                break;
            }
            if self.config.max_iterations.is_some_and(|m| iterations >= m) {
                status = Some(ClosureStatus::LimitReached(Limit::Iterations));
                break;
            }
            iterations += 1;
            let iter_start = Instant::now();
            let jobs = run.jobs(delta.as_ref());
            let outputs = run.evaluate(&jobs, store, delta.as_ref());
            let (new_delta, stop) = run.apply(&jobs, outputs, store);
            log::debug!(
                "iteration {}: {} job(s), {} new triple(s), {} triple(s) in store, {:?}",
                iterations,
                jobs.len(),
                new_delta.len(),
                store.len(),
                iter_start.elapsed(),
            );
            if stop.is_some() {
                status = stop;
            } else if new_delta.is_empty() {
                status = Some(ClosureStatus::Converged);
            } else {
                delta = Some(new_delta);
            }
        }
        let status = status.unwrap_or(ClosureStatus::Converged);
        if status != ClosureStatus::Converged {
            log::warn!("closure stopped after {} iteration(s): {}", iterations, status);
        }
        let report = ClosureReport {
            before,
            after: store.len(),
            iterations,
            derivations: run.derivations,
            candidates: run.candidates,
            guard_errors: run.guard_errors,
            ill_formed: run.ill_formed,
            inconsistencies: run.inconsistencies,
            status,
            elapsed: start.elapsed(),
        };
        log::info!(
            "closure {}: {} triple(s) inferred in {} iteration(s)",
            report.status,
            report.inferred(),
            report.iterations
        );
        report
    }
}

impl Default for Reasoner {
    /// A reasoner for the [standard](RuleCatalog::standard) catalog, with the default configuration.
    fn default() -> Self {
        Reasoner {
            catalog: RuleCatalog::standard(),
            config: ReasonerConfig::default(),
        }
    }
}

/// The mutable state of a closure run.
struct Run<'a> {
    config: &'a ReasonerConfig,
    rules: &'a [CompiledRule],
    derivations: BTreeMap<String, usize>,
    candidates: usize,
    guard_errors: usize,
    ill_formed: usize,
    inconsistencies: Vec<Inconsistency>,
}

impl Run<'_> {
    /// Insert the conclusions of axioms.
    ///
    /// Return a status if the closure must stop.
    fn insert_axioms(&mut self, store: &mut TripleStore) -> Option<ClosureStatus> {
        let rules = self.rules;
        for (i, rule) in rules.iter().enumerate().filter(|(_, r)| r.is_axiom()) {
            let Some(conclusion) = rule.conclusion else {
                continue;
            };
            let [Some(s), Some(p), Some(o)] = rule.constants_of(&conclusion) else {
                continue;
            };
            if store.term(s).is_literal() || !store.term(p).is_iri() {
                log::trace!("[{}] ill-formed axiom", rule.name);
                self.ill_formed += 1;
                continue;
            }
            self.candidates += 1;
            if let Err(status) = self.insert(i, [s, p, o], store, None) {
                return Some(status);
            }
        }
        None
    }

    /// The jobs of the next iteration.
    fn jobs(&self, delta: Option<&TripleIndex>) -> Vec<Job> {
        let mut jobs = vec![];
        for (r, rule) in self.rules.iter().enumerate() {
            if rule.is_axiom() {
                continue;
            }
            match delta {
                None => jobs.push(Job {
                    rule: r,
                    delta_pos: None,
                }),
                Some(delta) => {
                    for i in 0..rule.antecedent.len() {
                        if delta.matching(rule.constants(i)).next().is_some() {
                            jobs.push(Job {
                                rule: r,
                                delta_pos: Some(i),
                            });
                        }
                    }
                }
            }
        }
        jobs
    }

    /// Evaluate all `jobs` against `store` as it is now, in parallel if configured.
    ///
    /// Outputs are returned in the order of `jobs`.
    fn evaluate(&self, jobs: &[Job], store: &TripleStore, delta: Option<&TripleIndex>) -> Vec<JobOutput> {
        let rules = self.rules;
        let run_job = |job: &Job| {
            let source = match (job.delta_pos, delta) {
                (Some(i), Some(delta)) => Source::Delta(i, delta),
                _ => Source::Initial,
            };
            rules[job.rule].evaluate(store, source)
        };
        if self.config.parallel {
            jobs.par_iter().map(run_job).collect()
        } else {
            jobs.iter().map(run_job).collect()
        }
    }

    /// Insert the candidates produced by the jobs, in job order.
    ///
    /// Return the newly inserted triples, and a status if the closure must stop.
    fn apply(
        &mut self,
        jobs: &[Job],
        outputs: Vec<JobOutput>,
        store: &mut TripleStore,
    ) -> (TripleIndex, Option<ClosureStatus>) {
        let mut new_delta = TripleIndex::new();
        let mut new_candidates = 0;
        let rules = self.rules;
        for (job, out) in jobs.iter().zip(&outputs) {
            let rule = &rules[job.rule];
            self.candidates += out.candidates;
            self.guard_errors += out.guard_errors;
            self.ill_formed += out.ill_formed;
            new_candidates += out.triples.len();
            self.inconsistencies
                .extend(out.violations.iter().map(|ids| Inconsistency {
                    rule: rule.name.clone(),
                    binding: rule.binding(ids, store),
                }));
        }
        if let Some(max) = self.config.max_candidates {
            if new_candidates > max {
                return (new_delta, Some(ClosureStatus::LimitReached(Limit::Candidates)));
            }
        }
        for (job, out) in jobs.iter().zip(outputs) {
            for spo in out.triples {
                if let Err(status) = self.insert(job.rule, spo, store, Some(&mut new_delta)) {
                    return (new_delta, Some(status));
                }
            }
        }
        (new_delta, None)
    }

    /// Insert `spo` in `store` (and in `delta` if new), crediting rule `r`.
    ///
    /// Fail if the store has reached its maximum size.
    fn insert(
        &mut self,
        r: usize,
        spo: [usize; 3],
        store: &mut TripleStore,
        delta: Option<&mut TripleIndex>,
    ) -> Result<bool, ClosureStatus> {
        if store.contains_ids(&spo) {
            return Ok(false);
        }
        if self.config.max_triples.is_some_and(|m| store.len() >= m) {
            return Err(ClosureStatus::LimitReached(Limit::Triples));
        }
        store.insert_ids(spo);
        if let Some(delta) = delta {
            delta.insert(spo);
        }
        *self
            .derivations
            .entry(self.rules[r].name.clone())
            .or_default() += 1;
        Ok(true)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_reasoner_is_valid() {
        let def = Reasoner::default();
        assert!(Reasoner::new(def.catalog().clone(), def.config().clone()).is_ok());
    }
}
