//! Loading Turtle and N-Triples into a [`TripleStore`],
//! using the [Rio](https://docs.rs/rio_turtle/) parsers.
//!
//! Blank node labels are scoped to the document where they appear:
//! loading two documents using the same label yields two distinct blank nodes.
use crate::model::BnodeScope;
use crate::{AdapterError, Syntax};
use closure_inmem::TripleStore;
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesParser, TurtleParser};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a new store from the file at `path`, whose syntax is guessed from its extension.
pub fn load<P: AsRef<Path>>(path: P) -> Result<TripleStore, AdapterError> {
    let mut store = TripleStore::new();
    load_into(&mut store, path)?;
    Ok(store)
}

/// Load the file at `path` into `store`, and return the number of new triples.
///
/// The syntax is guessed from the extension of `path`,
/// and relative IRIs are resolved against the `file:` IRI of `path`.
pub fn load_into<P: AsRef<Path>>(store: &mut TripleStore, path: P) -> Result<usize, AdapterError> {
    let path = path.as_ref();
    let syntax = Syntax::from_path(path)?;
    let file = File::open(path)?;
    let base = std::fs::canonicalize(path)
        .ok()
        .map(|p| format!("file://{}", p.display()))
        .filter(|iri| oxiri::Iri::parse(iri.as_str()).is_ok());
    let added = load_reader(store, BufReader::new(file), syntax, base.as_deref())?;
    log::debug!("loaded {} new triple(s) from {}", added, path.display());
    Ok(added)
}

/// Load a new store from `txt`.
pub fn load_str(txt: &str, syntax: Syntax, base: Option<&str>) -> Result<TripleStore, AdapterError> {
    let mut store = TripleStore::new();
    load_reader(&mut store, txt.as_bytes(), syntax, base)?;
    Ok(store)
}

/// Load the content of `reader` into `store`, and return the number of new triples.
///
/// `base` is only used by [`Syntax::Turtle`].
pub fn load_reader<R: BufRead>(
    store: &mut TripleStore,
    reader: R,
    syntax: Syntax,
    base: Option<&str>,
) -> Result<usize, AdapterError> {
    let before = store.len();
    let mut scope = BnodeScope::new();
    let mut on_triple = |t: rio_api::model::Triple| -> Result<(), AdapterError> {
        let triple = scope.triple(&t, store)?;
        store.insert(triple);
        Ok(())
    };
    match syntax {
        Syntax::Turtle => {
            let base = base
                .map(|b| oxiri::Iri::parse(b.to_string()).map_err(|_| AdapterError::InvalidBase(b.into())))
                .transpose()?;
            TurtleParser::new(reader, base).parse_all(&mut on_triple)?;
        }
        Syntax::NTriples => NTriplesParser::new(reader).parse_all(&mut on_triple)?,
    }
    Ok(store.len() - before)
}
