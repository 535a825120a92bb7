//! This crate computes the deductive closure of RDF graphs
//! under the [RDFS](https://www.w3.org/TR/rdf11-mt/#rdfs-entailment) and
//! [OWL 2 RL](https://www.w3.org/TR/owl2-profiles/#OWL_2_RL) entailment rules,
//! by semi-naive forward chaining.
//!
//! It re-exports the crates of the workspace:
//! * [`term`] defines terms, triples and triple patterns;
//! * [`inmem`] provides the indexed [`TripleStore`](inmem::TripleStore);
//! * [`reasoner`] provides the rules and the [`Reasoner`](reasoner::Reasoner);
//! * [`rio`] loads and saves stores in Turtle and N-Triples.
//!
//! # Getting Started
//!
//! ```
//! use closure::reasoner::Reasoner;
//! use closure::rio::{load_str, Syntax};
//! use closure::term::{ns::rdf, Term, Triple};
//!
//! let mut store = load_str(r#"
//!     @prefix : <http://example.org/> .
//!     @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//!     :SerialKiller rdfs:subClassOf :ViolentCriminal .
//!     :alice a :SerialKiller .
//! "#, Syntax::Turtle, None)?;
//!
//! let report = Reasoner::default().closure(&mut store);
//! println!("{report}");
//!
//! let expected = Triple::new(
//!     Term::iri("http://example.org/alice")?,
//!     Term::iri(rdf::type_)?,
//!     Term::iri("http://example.org/ViolentCriminal")?,
//! )?;
//! assert!(store.contains(&expected));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![deny(missing_docs)]

pub use closure_inmem as inmem;
pub use closure_reasoner as reasoner;
pub use closure_rio as rio;
pub use closure_term as term;

#[cfg(test)]
mod test;
