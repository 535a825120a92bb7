//! I provide a forward-chaining reasoning engine computing the closure of a
//! [`TripleStore`](closure_inmem::TripleStore) under RDFS and OWL 2 RL entailment rules.
//!
//! * [`RuleCatalog`] lists the [`Rule`]s to apply;
//!   the standard ones are enumerated by [`StandardRule`].
//! * [`Reasoner`] applies a catalog to a store, according to a [`ReasonerConfig`].
//! * [`ClosureReport`] describes the outcome of a closure.
#![deny(missing_docs)]

pub mod catalog;
pub use catalog::{RuleCatalog, StandardRule};
mod config;
pub use config::*;
mod engine;
pub use engine::*;
mod error;
pub use error::*;
pub mod report;
pub use report::{ClosureReport, ClosureStatus, Inconsistency, Limit};
mod rule;
pub use rule::{Conclusion, Guard, Rule};
