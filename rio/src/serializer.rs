//! Serializing a [`TripleStore`] as Turtle or N-Triples,
//! using the [Rio](https://docs.rs/rio_turtle/) formatters.
//!
//! Triples are written in the (deterministic) iteration order of the store.
use crate::model::to_rio;
use crate::{AdapterError, Syntax};
use closure_inmem::TripleStore;
use rio_api::formatter::TriplesFormatter;
use rio_turtle::{NTriplesFormatter, TurtleFormatter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Save `store` to the file at `path`, whose syntax is guessed from its extension.
pub fn save<P: AsRef<Path>>(store: &TripleStore, path: P) -> Result<(), AdapterError> {
    let path = path.as_ref();
    let syntax = Syntax::from_path(path)?;
    let file = BufWriter::new(File::create(path)?);
    save_writer(store, file, syntax)?.flush()?;
    log::debug!("saved {} triple(s) to {}", store.len(), path.display());
    Ok(())
}

/// Write `store` to `writer`, and give the writer back.
pub fn save_writer<W: Write>(store: &TripleStore, writer: W, syntax: Syntax) -> Result<W, AdapterError> {
    Ok(match syntax {
        Syntax::Turtle => {
            let mut formatter = TurtleFormatter::new(writer);
            for triple in store.triples() {
                formatter.format(&to_rio(&triple))?;
            }
            formatter.finish()?
        }
        Syntax::NTriples => {
            let mut formatter = NTriplesFormatter::new(writer);
            for triple in store.triples() {
                formatter.format(&to_rio(&triple))?;
            }
            formatter.finish()?
        }
    })
}

/// Serialize `store` into a string.
pub fn save_string(store: &TripleStore, syntax: Syntax) -> Result<String, AdapterError> {
    let bytes = save_writer(store, vec![], syntax)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
