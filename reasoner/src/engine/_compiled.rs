//! Rules compiled against the term index of a store,
//! and the semi-naive join evaluating them.
use crate::rule::{numeric_equals, Conclusion, Guard, Rule};
use closure_inmem::{Binding, TripleIndex, TripleStore};
use closure_term::{PatternTerm, Term, TriplePattern, VarName};
use smallvec::SmallVec;

/// A position of a compiled pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Slot {
    Const(usize),
    Var(usize),
}

/// A guard whose variables are replaced by their index in the binding.
#[derive(Clone, Copy, Debug)]
enum CompiledGuard {
    Distinct(usize, usize),
    IsIri(usize),
    IsResource(usize),
    IsLiteral(usize),
    NumericEquals(usize, i64),
}

pub(super) type Ids = SmallVec<[Option<usize>; 8]>;

/// A [`Rule`] whose constants are replaced by term indices,
/// and whose variables are replaced by their position in [`vars`](Self::vars).
#[derive(Clone, Debug)]
pub(super) struct CompiledRule {
    pub(super) name: String,
    pub(super) vars: Vec<VarName>,
    pub(super) antecedent: Vec<[Slot; 3]>,
    /// `None` for constraint rules
    pub(super) conclusion: Option<[Slot; 3]>,
    guards: Vec<(CompiledGuard, u128)>,
}

/// The triples matched by the pattern that a job evaluates first.
#[derive(Clone, Copy)]
pub(super) enum Source<'a> {
    /// First iteration: every pattern reads the whole store
    Initial,
    /// The given pattern reads the delta,
    /// patterns before it read the store minus the delta,
    /// patterns after it read the whole store
    Delta(usize, &'a TripleIndex),
}

/// What a job produced.
#[derive(Debug, Default)]
pub(super) struct JobOutput {
    pub(super) triples: Vec<[usize; 3]>,
    pub(super) candidates: usize,
    pub(super) guard_errors: usize,
    pub(super) ill_formed: usize,
    pub(super) violations: Vec<Ids>,
}

impl CompiledRule {
    /// Compile `rule`, interning its constants in `store`.
    pub(super) fn new(rule: &Rule, store: &mut TripleStore) -> Self {
        let mut vars = vec![];
        let antecedent = rule
            .antecedent()
            .iter()
            .map(|tp| compile_pattern(tp, &mut vars, store))
            .collect();
        let conclusion = match rule.conclusion() {
            Conclusion::Triple(tp) => Some(compile_pattern(tp, &mut vars, store)),
            Conclusion::Inconsistent => None,
        };
        // validated rules only use variables bound by the antecedent
        let index_of = |v: &VarName| vars.iter().position(|v2| v2 == v).unwrap_or(0);
        let guards = rule
            .guards()
            .iter()
            .map(|g| {
                let cg = match g {
                    Guard::Distinct(v1, v2) => CompiledGuard::Distinct(index_of(v1), index_of(v2)),
                    Guard::IsIri(v) => CompiledGuard::IsIri(index_of(v)),
                    Guard::IsResource(v) => CompiledGuard::IsResource(index_of(v)),
                    Guard::IsLiteral(v) => CompiledGuard::IsLiteral(index_of(v)),
                    Guard::NumericEquals(v, n) => CompiledGuard::NumericEquals(index_of(v), *n),
                };
                let mask = g.variables().fold(0u128, |m, v| m | (1u128 << index_of(v)));
                (cg, mask)
            })
            .collect();
        CompiledRule {
            name: rule.name().to_string(),
            vars,
            antecedent,
            conclusion,
            guards,
        }
    }

    /// Whether this rule is an axiom.
    pub(super) fn is_axiom(&self) -> bool {
        self.antecedent.is_empty()
    }

    /// The constants of the `i`-th pattern of the antecedent, `None` standing for variables.
    pub(super) fn constants(&self, i: usize) -> [Option<usize>; 3] {
        self.constants_of(&self.antecedent[i])
    }

    /// The constants of `slots`, `None` standing for variables.
    pub(super) fn constants_of(&self, slots: &[Slot; 3]) -> [Option<usize>; 3] {
        slots.map(|s| match s {
            Slot::Const(c) => Some(c),
            Slot::Var(_) => None,
        })
    }

    /// Evaluate this rule with the given source for its delta pattern.
    pub(super) fn evaluate(&self, store: &TripleStore, source: Source) -> JobOutput {
        let mut out = JobOutput::default();
        if self.is_axiom() {
            return out;
        }
        let mut job = Job {
            rule: self,
            store,
            source,
            b: SmallVec::from_elem(None, self.vars.len()),
            out: &mut out,
        };
        let remaining = (1u64 << self.antecedent.len()) - 1;
        job.join(remaining);
        out
    }

    /// Convert ids produced by [`evaluate`](Self::evaluate) into a [`Binding`].
    pub(super) fn binding(&self, ids: &Ids, store: &TripleStore) -> Binding {
        self.vars
            .iter()
            .zip(ids)
            .filter_map(|(v, i)| Some((v.clone(), store.term((*i)?).clone())))
            .collect()
    }
}

fn compile_pattern(tp: &TriplePattern, vars: &mut Vec<VarName>, store: &mut TripleStore) -> [Slot; 3] {
    tp.0.each_ref().map(|pt| match pt {
        PatternTerm::Variable(v) => Slot::Var(vars.iter().position(|v2| v2 == v).unwrap_or_else(|| {
            vars.push(v.clone());
            vars.len() - 1
        })),
        PatternTerm::Term(t) => Slot::Const(store.ensure_index(t)),
    })
}

struct Job<'a> {
    rule: &'a CompiledRule,
    store: &'a TripleStore,
    source: Source<'a>,
    b: Ids,
    out: &'a mut JobOutput,
}

impl Job<'_> {
    fn bound_count(&self, slots: &[Slot; 3]) -> usize {
        slots
            .iter()
            .filter(|s| match s {
                Slot::Const(_) => true,
                Slot::Var(v) => self.b[*v].is_some(),
            })
            .count()
    }

    /// Pick the next pattern to match:
    /// the delta pattern if still pending, otherwise the most bound one
    /// (ties broken by position in the antecedent).
    fn next_pattern(&self, remaining: u64) -> usize {
        if let Source::Delta(i, _) = self.source {
            if remaining & (1 << i) != 0 {
                return i;
            }
        }
        let antecedent = &self.rule.antecedent;
        (0..antecedent.len())
            .filter(|i| remaining & (1 << i) != 0)
            .max_by_key(|i| (self.bound_count(&antecedent[*i]), usize::MAX - i))
            .unwrap_or(0)
    }

    fn join(&mut self, remaining: u64) {
        if remaining == 0 {
            self.emit();
            return;
        }
        let i = self.next_pattern(remaining);
        let remaining = remaining & !(1 << i);
        let slots = self.rule.antecedent[i];
        let ids = slots.map(|s| match s {
            Slot::Const(c) => Some(c),
            Slot::Var(v) => self.b[v],
        });
        let store = self.store;
        let matches: Box<dyn Iterator<Item = [usize; 3]> + '_> = match self.source {
            Source::Delta(d, delta) if d == i => delta.matching(ids),
            Source::Delta(d, delta) if i < d => {
                Box::new(store.ids_matching(ids).filter(move |spo| !delta.contains(spo)))
            }
            _ => Box::new(store.ids_matching(ids)),
        };
        let mut newly_bound: SmallVec<[usize; 3]> = SmallVec::new();
        for spo in matches {
            if self.bind(&slots, spo, &mut newly_bound) && self.check_guards(&newly_bound) {
                self.join(remaining);
            }
            for v in newly_bound.drain(..) {
                self.b[v] = None;
            }
        }
    }

    /// Extend the binding with `spo` matched against `slots`,
    /// recording the newly bound variables.
    /// Return false if `spo` is incompatible with the binding.
    fn bind(&mut self, slots: &[Slot; 3], spo: [usize; 3], newly_bound: &mut SmallVec<[usize; 3]>) -> bool {
        for (slot, i) in slots.iter().zip(spo) {
            if let Slot::Var(v) = *slot {
                match self.b[v] {
                    Some(j) if i != j => return false,
                    Some(_) => (),
                    None => {
                        self.b[v] = Some(i);
                        newly_bound.push(v);
                    }
                }
            }
        }
        true
    }

    /// Check the guards that became evaluable by binding `newly_bound`.
    fn check_guards(&mut self, newly_bound: &[usize]) -> bool {
        if newly_bound.is_empty() {
            return true;
        }
        let new_mask = newly_bound.iter().fold(0u128, |m, v| m | (1 << v));
        let bound_mask = self
            .b
            .iter()
            .enumerate()
            .fold(0u128, |m, (v, i)| if i.is_some() { m | (1 << v) } else { m });
        let rule = self.rule;
        for (guard, mask) in &rule.guards {
            if mask & new_mask == 0 || mask & !bound_mask != 0 {
                continue;
            }
            match self.evaluate_guard(*guard) {
                Ok(true) => (),
                Ok(false) => return false,
                Err(err) => {
                    log::trace!("[{}] guard error: {}", rule.name, err);
                    self.out.guard_errors += 1;
                    return false;
                }
            }
        }
        true
    }

    fn term(&self, v: usize) -> &Term {
        // only called on variables known to be bound
        self.store.term(self.b[v].unwrap_or_default())
    }

    fn evaluate_guard(&self, guard: CompiledGuard) -> Result<bool, crate::GuardError> {
        Ok(match guard {
            CompiledGuard::Distinct(v1, v2) => self.b[v1] != self.b[v2],
            CompiledGuard::IsIri(v) => self.term(v).is_iri(),
            CompiledGuard::IsResource(v) => self.term(v).is_resource(),
            CompiledGuard::IsLiteral(v) => self.term(v).is_literal(),
            CompiledGuard::NumericEquals(v, n) => numeric_equals(self.term(v), n)?,
        })
    }

    fn emit(&mut self) {
        let Some(conclusion) = self.rule.conclusion else {
            self.out.violations.push(self.b.clone());
            return;
        };
        let spo = conclusion.map(|s| match s {
            Slot::Const(c) => c,
            Slot::Var(v) => self.b[v].unwrap_or_default(),
        });
        if self.store.term(spo[0]).is_literal() || !self.store.term(spo[1]).is_iri() {
            log::trace!(
                "[{}] ill-formed candidate {} {} {}",
                self.rule.name,
                self.store.term(spo[0]),
                self.store.term(spo[1]),
                self.store.term(spo[2]),
            );
            self.out.ill_formed += 1;
            return;
        }
        self.out.candidates += 1;
        if !self.store.contains_ids(&spo) {
            self.out.triples.push(spo);
        }
    }
}
