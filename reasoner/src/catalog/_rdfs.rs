//! RDFS entailment patterns with no counterpart in OWL 2 RL.
//!
//! See <https://www.w3.org/TR/rdf11-mt/#patterns-of-rdfs-entailment-informative>
//!
//! # Limitations
//!
//! * `rdfs1`, `rdfs4a` and `rdfs4b` are not provided:
//!   they would type every datatype, or every term, with a class,
//!   without further consequences on the rest of the closure.
//! * the axiomatic triples of RDFS are not provided.
use super::StandardRule::{self, *};
use crate::rule::{iri, tp, var, Rule};
use closure_term::ns::{rdf, rdfs};

pub(super) const RDFS: &[StandardRule] = &[
    PrpDom,  // rdfs2
    PrpRng,  // rdfs3
    ScmSpo,  // rdfs5
    Rdfs6,   // reflexivity of rdfs:subPropertyOf
    PrpSpo1, // rdfs7
    Rdfs8,   // classes are subclasses of rdfs:Resource
    CaxSco,  // rdfs9
    Rdfs10,  // reflexivity of rdfs:subClassOf
    ScmSco,  // rdfs11
    Rdfs12,  // container membership properties
    Rdfs13,  // datatypes are subclasses of rdfs:Literal
];

pub(super) fn rdfs6() -> Rule {
    Rule::new(
        "rdfs6",
        vec![tp(var("p"), iri(rdf::type_), iri(rdf::Property))],
        tp(var("p"), iri(rdfs::subPropertyOf), var("p")),
    )
}

pub(super) fn rdfs8() -> Rule {
    Rule::new(
        "rdfs8",
        vec![tp(var("c"), iri(rdf::type_), iri(rdfs::Class))],
        tp(var("c"), iri(rdfs::subClassOf), iri(rdfs::Resource)),
    )
}

pub(super) fn rdfs10() -> Rule {
    Rule::new(
        "rdfs10",
        vec![tp(var("c"), iri(rdf::type_), iri(rdfs::Class))],
        tp(var("c"), iri(rdfs::subClassOf), var("c")),
    )
}

pub(super) fn rdfs12() -> Rule {
    Rule::new(
        "rdfs12",
        vec![tp(
            var("p"),
            iri(rdf::type_),
            iri(rdfs::ContainerMembershipProperty),
        )],
        tp(var("p"), iri(rdfs::subPropertyOf), iri(rdfs::member)),
    )
}

pub(super) fn rdfs13() -> Rule {
    Rule::new(
        "rdfs13",
        vec![tp(var("d"), iri(rdf::type_), iri(rdfs::Datatype))],
        tp(var("d"), iri(rdfs::subClassOf), iri(rdfs::Literal)),
    )
}
