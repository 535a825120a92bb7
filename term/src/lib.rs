//! I define the term model shared by the closure crates:
//! * [`Term`], an owned RDF term ([`Iri`], [`BnodeId`] or [`Literal`]),
//!   cheap to clone and thread-safe (all text is held in [`Arc<str>`](std::sync::Arc));
//! * [`Triple`], a well-formed RDF statement;
//! * [`VarName`], [`PatternTerm`] and [`TriplePattern`], used to express rules and queries;
//! * the standard namespaces in [`ns`].
#![deny(missing_docs)]

mod _term;
pub use _term::*;
mod bnode_id;
pub use bnode_id::*;
mod error;
pub use error::*;
mod iri;
pub use iri::*;
mod language_tag;
pub use language_tag::*;
mod literal;
pub use literal::*;
pub mod ns;
mod pattern;
pub use pattern::*;
mod triple;
pub use triple::*;
mod var_name;
pub use var_name::*;

#[cfg(test)]
mod test;
