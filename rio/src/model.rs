//! Conversions between Rio's borrowed model and [`closure_term`] terms.
use crate::AdapterError;
use closure_inmem::TripleStore;
use closure_term::ns::xsd;
use closure_term::{BnodeId, Iri, LanguageTag, Literal, Term, TermError, Triple};
use rio_api::model as rio;
use std::collections::{HashMap, HashSet};

/// Maps the blank node labels of one document to blank nodes of a store,
/// so that labels reused across documents do not merge unrelated nodes.
pub(crate) struct BnodeScope {
    map: HashMap<String, BnodeId>,
    allocated: HashSet<BnodeId>,
}

impl BnodeScope {
    pub(crate) fn new() -> Self {
        BnodeScope {
            map: HashMap::new(),
            allocated: HashSet::new(),
        }
    }

    /// The blank node standing for `label` in this document.
    ///
    /// A label is kept as is unless it is already used in `store`
    /// (by a previously loaded document), in which case it is suffixed.
    fn get(&mut self, label: &str, store: &TripleStore) -> Result<BnodeId, TermError> {
        if let Some(id) = self.map.get(label) {
            return Ok(id.clone());
        }
        let mut id = BnodeId::new(label)?;
        let mut n = 0;
        while self.allocated.contains(&id)
            || store.get_index(&Term::BlankNode(id.clone())).is_some()
        {
            n += 1;
            id = BnodeId::new(format!("{label}_{n}"))?;
        }
        self.allocated.insert(id.clone());
        self.map.insert(label.to_string(), id.clone());
        Ok(id)
    }

    /// Convert a Rio triple into a [`Triple`], in the context of `store`.
    pub(crate) fn triple(&mut self, t: &rio::Triple, store: &TripleStore) -> Result<Triple, AdapterError> {
        let s = match t.subject {
            rio::Subject::NamedNode(n) => named_node(n)?,
            rio::Subject::BlankNode(b) => self.get(b.id, store)?.into(),
            rio::Subject::Triple(_) => return Err(AdapterError::QuotedTriple),
        };
        let p = named_node(t.predicate)?;
        let o = match t.object {
            rio::Term::NamedNode(n) => named_node(n)?,
            rio::Term::BlankNode(b) => self.get(b.id, store)?.into(),
            rio::Term::Literal(lit) => literal(lit)?.into(),
            rio::Term::Triple(_) => return Err(AdapterError::QuotedTriple),
        };
        Ok(Triple::new(s, p, o).map_err(TermError::from)?)
    }
}

fn named_node(n: rio::NamedNode) -> Result<Term, TermError> {
    Ok(Iri::new(n.iri)?.into())
}

fn literal(lit: rio::Literal) -> Result<Literal, TermError> {
    Ok(match lit {
        rio::Literal::Simple { value } => Literal::new_simple(value),
        rio::Literal::LanguageTaggedString { value, language } => {
            Literal::new_lang(value, LanguageTag::new(language)?)
        }
        rio::Literal::Typed { value, datatype } => Literal::new_typed(value, Iri::new(datatype.iri)?),
    })
}

/// Convert a [`Triple`] into a Rio triple borrowing its content.
pub(crate) fn to_rio(t: &Triple) -> rio::Triple<'_> {
    let subject = match t.s() {
        Term::BlankNode(b) => rio::BlankNode { id: b.as_str() }.into(),
        // well-formed triples have an IRI or blank node subject
        other => rio::NamedNode {
            iri: other.as_iri().map(Iri::as_str).unwrap_or_default(),
        }
        .into(),
    };
    let predicate = rio::NamedNode {
        iri: t.p().as_iri().map(Iri::as_str).unwrap_or_default(),
    };
    let object = match t.o() {
        Term::Iri(iri) => rio::NamedNode { iri: iri.as_str() }.into(),
        Term::BlankNode(b) => rio::BlankNode { id: b.as_str() }.into(),
        Term::Literal(lit) => match lit.language_tag() {
            Some(tag) => rio::Literal::LanguageTaggedString {
                value: lit.lexical_form(),
                language: tag.as_str(),
            }
            .into(),
            None if lit.datatype() == xsd::string => rio::Literal::Simple {
                value: lit.lexical_form(),
            }
            .into(),
            None => rio::Literal::Typed {
                value: lit.lexical_form(),
                datatype: rio::NamedNode {
                    iri: lit.datatype(),
                },
            }
            .into(),
        },
    };
    rio::Triple {
        subject,
        predicate,
        object,
    }
}
