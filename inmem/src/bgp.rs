//! Evaluation of basic graph patterns against a [`TripleStore`].
use crate::TripleStore;
use closure_term::{PatternTerm, Term, TriplePattern, VarName};
use std::collections::BTreeMap;
use std::fmt;

/// A solution of a basic graph pattern: a mapping from variables to terms.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Binding(BTreeMap<VarName, Term>);

impl Binding {
    /// The term bound to variable `name` (without the leading `?`), if any.
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.0
            .iter()
            .find_map(|(k, v)| (k.as_str() == name).then_some(v))
    }

    /// The number of bound variables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no variable is bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iter over the bound variables and their values, in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (&VarName, &Term)> + '_ {
        self.0.iter()
    }

    /// Bind `var` to `term`, returning the previous value if any.
    pub fn insert(&mut self, var: VarName, term: Term) -> Option<Term> {
        self.0.insert(var, term)
    }
}

impl FromIterator<(VarName, Term)> for Binding {
    fn from_iter<T: IntoIterator<Item = (VarName, Term)>>(iter: T) -> Self {
        Binding(iter.into_iter().collect())
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k} -> {v}")?;
        }
        f.write_str("}")
    }
}

#[derive(Clone, Copy, Debug)]
enum Slot {
    Const(usize),
    Var(usize),
}

impl TripleStore {
    /// Evaluate the basic graph pattern `patterns` against this store.
    ///
    /// Every solution binds all the variables of `patterns`.
    /// An empty list of patterns has exactly one solution (the empty binding).
    pub fn query(&self, patterns: &[TriplePattern]) -> Vec<Binding> {
        let mut vars: Vec<VarName> = vec![];
        let mut compiled = Vec::with_capacity(patterns.len());
        for tp in patterns {
            let mut slots = [Slot::Const(0); 3];
            for (slot, pt) in slots.iter_mut().zip(&tp.0) {
                *slot = match pt {
                    PatternTerm::Variable(v) => {
                        let i = vars.iter().position(|v2| v2 == v).unwrap_or_else(|| {
                            vars.push(v.clone());
                            vars.len() - 1
                        });
                        Slot::Var(i)
                    }
                    PatternTerm::Term(t) => match self.get_index(t) {
                        Some(i) => Slot::Const(i),
                        // a term absent from the store can not match anything
                        None => return vec![],
                    },
                };
            }
            compiled.push(slots);
        }
        let mut solutions = vec![];
        let mut b = vec![None; vars.len()];
        self.bgp_rec(&mut compiled, &mut b, &mut solutions);
        log::trace!("{} solution(s) for {} pattern(s)", solutions.len(), patterns.len());
        solutions
            .into_iter()
            .map(|b| {
                vars.iter()
                    .zip(b)
                    .filter_map(|(v, i)| Some((v.clone(), self.term(i?).clone())))
                    .collect()
            })
            .collect()
    }

    /// Greedy nested-loop join:
    /// the pattern with the most bound positions is matched first,
    /// then the others recursively with the variables it binds.
    fn bgp_rec(
        &self,
        patterns: &mut [[Slot; 3]],
        b: &mut Vec<Option<usize>>,
        solutions: &mut Vec<Vec<Option<usize>>>,
    ) {
        let bound_count = |slots: &[Slot; 3]| {
            slots
                .iter()
                .filter(|s| match s {
                    Slot::Const(_) => true,
                    Slot::Var(v) => b[*v].is_some(),
                })
                .count()
        };
        let Some(best) = (0..patterns.len()).max_by_key(|i| (bound_count(&patterns[*i]), usize::MAX - i))
        else {
            solutions.push(b.clone());
            return;
        };
        patterns.swap(0, best);
        let (first, remaining) = patterns.split_at_mut(1);
        let first = first[0];
        let ids = first.map(|s| match s {
            Slot::Const(i) => Some(i),
            Slot::Var(v) => b[v],
        });
        for spo in self.ids_matching(ids) {
            let saved = b.clone();
            let consistent = first.iter().zip(spo).all(|(slot, i)| match slot {
                Slot::Const(_) => true,
                Slot::Var(v) => match b[*v] {
                    Some(j) => i == j,
                    None => {
                        b[*v] = Some(i);
                        true
                    }
                },
            });
            if consistent {
                self.bgp_rec(remaining, b, solutions);
            }
            *b = saved;
        }
        // restore the original order for the caller's siblings
        patterns.swap(0, best);
    }
}
