//! I provide the adapter between [`TripleStore`](closure_inmem::TripleStore)
//! and concrete RDF syntaxes, using the [Rio](https://docs.rs/rio_api/) parsers and formatters:
//! * [`load`], [`load_into`], [`load_str`] and [`load_reader`] parse Turtle or N-Triples;
//! * [`save`], [`save_writer`] and [`save_string`] serialize a store;
//! * [`query`] evaluates a basic graph pattern.
#![deny(missing_docs)]

use closure_inmem::{Binding, TripleStore};
use closure_term::{TermError, TriplePattern};
use rio_turtle::TurtleError;
use std::path::{Path, PathBuf};
use thiserror::Error;

mod model;
pub mod parser;
pub use parser::{load, load_into, load_reader, load_str};
pub mod serializer;
pub use serializer::{save, save_string, save_writer};

/// The RDF syntaxes supported by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Syntax {
    /// [Turtle](https://www.w3.org/TR/turtle/)
    Turtle,
    /// [N-Triples](https://www.w3.org/TR/n-triples/)
    NTriples,
}

impl Syntax {
    /// Guess the syntax of a file from its extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AdapterError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("ttl" | "turtle") => Ok(Syntax::Turtle),
            Some("nt" | "ntriples") => Ok(Syntax::NTriples),
            _ => Err(AdapterError::UnknownSyntax(path.to_path_buf())),
        }
    }
}

/// Any error raised while loading or saving a store.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Error while reading or writing data
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Syntax error in the parsed data
    #[error("Syntax error: {0}")]
    Syntax(#[from] TurtleError),
    /// The parsed data contains an invalid term
    #[error(transparent)]
    Term(#[from] TermError),
    /// The parsed data contains a quoted triple (RDF-star)
    #[error("Quoted triples are not supported")]
    QuotedTriple,
    /// The syntax of a file could not be guessed from its name
    #[error("Unknown syntax for {0}")]
    UnknownSyntax(PathBuf),
    /// The base IRI is not a valid absolute IRI
    #[error("Invalid base IRI <{0}>")]
    InvalidBase(String),
}

/// Evaluate the basic graph pattern `patterns` against `store`.
///
/// See [`TripleStore::query`].
pub fn query(store: &TripleStore, patterns: &[TriplePattern]) -> Vec<Binding> {
    store.query(patterns)
}

#[cfg(test)]
mod test;
