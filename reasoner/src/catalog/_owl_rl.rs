//! OWL 2 RL/RDF rules with a fixed antecedent.
//!
//! See <https://www.w3.org/TR/owl2-profiles/#Reasoning_in_OWL_2_RL_and_RDF_Graphs_using_Rules>
//!
//! Rules whose antecedent mentions `LIST[?x, ?e1, ..., ?en]` only to pick *one* member
//! of the list are expressed with the [`LIST_MEMBER`] relation,
//! computed by `list-member#1` and `list-member#2`.
use super::StandardRule::{self, *};
use super::LIST_MEMBER;
use crate::rule::{iri, tp, var, Guard, Rule};
use closure_term::ns::{owl, rdf, rdfs};
use closure_term::TriplePattern;

pub(super) const OWL_RL: &[StandardRule] = &[
    // list membership
    ListMember1, ListMember2,
    // table 4: equality
    EqSym, EqTrans, EqRepS, EqRepP, EqRepO, EqDiff1, EqDiff2, EqDiff3,
    // table 5: properties
    PrpDom, PrpRng, PrpFp, PrpIfp, PrpIrp, PrpSymp, PrpAsp, PrpTrp, PrpSpo1, PrpEqp1, PrpEqp2,
    PrpPdw, PrpAdp, PrpInv1, PrpInv2, PrpNpa1, PrpNpa2,
    // table 6: classes
    ClsThing, ClsNothing1, ClsNothing2, ClsInt2, ClsUni, ClsCom, ClsSvf1, ClsSvf2, ClsAvf,
    ClsHv1, ClsHv2, ClsMaxc1, ClsMaxc2, ClsMaxqc1, ClsMaxqc2, ClsMaxqc3, ClsMaxqc4, ClsOo,
    // table 7: class axioms
    CaxSco, CaxEqc1, CaxEqc2, CaxDw, CaxAdc,
    // table 9: schema vocabulary
    ScmCls1, ScmCls2, ScmCls3, ScmCls4, ScmSco, ScmEqc1a, ScmEqc1b, ScmEqc2, ScmOp1, ScmOp2,
    ScmDp1, ScmDp2, ScmSpo, ScmEqp1a, ScmEqp1b, ScmEqp2, ScmDom1, ScmDom2, ScmRng1, ScmRng2,
    ScmHv, ScmSvf1, ScmSvf2, ScmAvf1, ScmAvf2, ScmInt, ScmUni,
];

/// `?list` has `?m` as one of its members
fn member(list: &'static str, m: &'static str) -> TriplePattern {
    tp(var(list), iri(LIST_MEMBER), var(m))
}

// list membership

pub(super) fn list_member1() -> Rule {
    Rule::new(
        "list-member#1",
        vec![tp(var("l"), iri(rdf::first), var("m"))],
        member("l", "m"),
    )
}

pub(super) fn list_member2() -> Rule {
    Rule::new(
        "list-member#2",
        vec![
            tp(var("l"), iri(rdf::rest), var("r")),
            member("r", "m"),
        ],
        member("l", "m"),
    )
}

// equality

pub(super) fn eq_sym() -> Rule {
    Rule::new(
        "eq-sym",
        vec![tp(var("x"), iri(owl::sameAs), var("y"))],
        tp(var("y"), iri(owl::sameAs), var("x")),
    )
}

pub(super) fn eq_trans() -> Rule {
    Rule::new(
        "eq-trans",
        vec![
            tp(var("x"), iri(owl::sameAs), var("y")),
            tp(var("y"), iri(owl::sameAs), var("z")),
        ],
        tp(var("x"), iri(owl::sameAs), var("z")),
    )
}

pub(super) fn eq_rep_s() -> Rule {
    Rule::new(
        "eq-rep-s",
        vec![
            tp(var("s"), iri(owl::sameAs), var("s2")),
            tp(var("s"), var("p"), var("o")),
        ],
        tp(var("s2"), var("p"), var("o")),
    )
    .with_guard(Guard::IsResource(var("s2")))
}

pub(super) fn eq_rep_p() -> Rule {
    Rule::new(
        "eq-rep-p",
        vec![
            tp(var("p"), iri(owl::sameAs), var("p2")),
            tp(var("s"), var("p"), var("o")),
        ],
        tp(var("s"), var("p2"), var("o")),
    )
    .with_guard(Guard::IsIri(var("p2")))
}

pub(super) fn eq_rep_o() -> Rule {
    Rule::new(
        "eq-rep-o",
        vec![
            tp(var("o"), iri(owl::sameAs), var("o2")),
            tp(var("s"), var("p"), var("o")),
        ],
        tp(var("s"), var("p"), var("o2")),
    )
}

pub(super) fn eq_diff1() -> Rule {
    Rule::constraint(
        "eq-diff1",
        vec![
            tp(var("x"), iri(owl::sameAs), var("y")),
            tp(var("x"), iri(owl::differentFrom), var("y")),
        ],
    )
}

/// `eq-diff2` and `eq-diff3` only differ by the property linking `?x` to its list
fn all_different(name: &str, members: &'static str) -> Rule {
    Rule::constraint(
        name,
        vec![
            tp(var("x"), iri(rdf::type_), iri(owl::AllDifferent)),
            tp(var("x"), iri(members), var("l")),
            member("l", "y1"),
            member("l", "y2"),
            tp(var("y1"), iri(owl::sameAs), var("y2")),
        ],
    )
    .with_guard(Guard::Distinct(var("y1"), var("y2")))
}

pub(super) fn eq_diff2() -> Rule {
    all_different("eq-diff2", owl::members)
}

pub(super) fn eq_diff3() -> Rule {
    all_different("eq-diff3", owl::distinctMembers)
}

// properties

pub(super) fn prp_dom() -> Rule {
    Rule::new(
        "prp-dom",
        vec![
            tp(var("x"), var("p"), var("y")),
            tp(var("p"), iri(rdfs::domain), var("c")),
        ],
        tp(var("x"), iri(rdf::type_), var("c")),
    )
}

pub(super) fn prp_rng() -> Rule {
    Rule::new(
        "prp-rng",
        vec![
            tp(var("x"), var("p"), var("y")),
            tp(var("p"), iri(rdfs::range), var("c")),
        ],
        tp(var("y"), iri(rdf::type_), var("c")),
    )
    .with_guard(Guard::IsResource(var("y")))
}

pub(super) fn prp_fp() -> Rule {
    Rule::new(
        "prp-fp",
        vec![
            tp(var("p"), iri(rdf::type_), iri(owl::FunctionalProperty)),
            tp(var("x"), var("p"), var("y1")),
            tp(var("x"), var("p"), var("y2")),
        ],
        tp(var("y1"), iri(owl::sameAs), var("y2")),
    )
    .with_guard(Guard::Distinct(var("y1"), var("y2")))
}

pub(super) fn prp_ifp() -> Rule {
    Rule::new(
        "prp-ifp",
        vec![
            tp(
                var("p"),
                iri(rdf::type_),
                iri(owl::InverseFunctionalProperty),
            ),
            tp(var("x1"), var("p"), var("y")),
            tp(var("x2"), var("p"), var("y")),
        ],
        tp(var("x1"), iri(owl::sameAs), var("x2")),
    )
    .with_guard(Guard::Distinct(var("x1"), var("x2")))
}

pub(super) fn prp_irp() -> Rule {
    Rule::constraint(
        "prp-irp",
        vec![
            tp(var("p"), iri(rdf::type_), iri(owl::IrreflexiveProperty)),
            tp(var("x"), var("p"), var("x")),
        ],
    )
}

pub(super) fn prp_symp() -> Rule {
    Rule::new(
        "prp-symp",
        vec![
            tp(var("p"), iri(rdf::type_), iri(owl::SymmetricProperty)),
            tp(var("x"), var("p"), var("y")),
        ],
        tp(var("y"), var("p"), var("x")),
    )
}

pub(super) fn prp_asp() -> Rule {
    Rule::constraint(
        "prp-asp",
        vec![
            tp(var("p"), iri(rdf::type_), iri(owl::AsymmetricProperty)),
            tp(var("x"), var("p"), var("y")),
            tp(var("y"), var("p"), var("x")),
        ],
    )
}

pub(super) fn prp_trp() -> Rule {
    Rule::new(
        "prp-trp",
        vec![
            tp(var("p"), iri(rdf::type_), iri(owl::TransitiveProperty)),
            tp(var("x"), var("p"), var("y")),
            tp(var("y"), var("p"), var("z")),
        ],
        tp(var("x"), var("p"), var("z")),
    )
}

pub(super) fn prp_spo1() -> Rule {
    Rule::new(
        "prp-spo1",
        vec![
            tp(var("x"), var("p1"), var("y")),
            tp(var("p1"), iri(rdfs::subPropertyOf), var("p2")),
        ],
        tp(var("x"), var("p2"), var("y")),
    )
}

pub(super) fn prp_eqp1() -> Rule {
    Rule::new(
        "prp-eqp1",
        vec![
            tp(var("p1"), iri(owl::equivalentProperty), var("p2")),
            tp(var("x"), var("p1"), var("y")),
        ],
        tp(var("x"), var("p2"), var("y")),
    )
}

pub(super) fn prp_eqp2() -> Rule {
    Rule::new(
        "prp-eqp2",
        vec![
            tp(var("p1"), iri(owl::equivalentProperty), var("p2")),
            tp(var("x"), var("p2"), var("y")),
        ],
        tp(var("x"), var("p1"), var("y")),
    )
}

pub(super) fn prp_pdw() -> Rule {
    Rule::constraint(
        "prp-pdw",
        vec![
            tp(var("p1"), iri(owl::propertyDisjointWith), var("p2")),
            tp(var("x"), var("p1"), var("y")),
            tp(var("x"), var("p2"), var("y")),
        ],
    )
}

pub(super) fn prp_adp() -> Rule {
    Rule::constraint(
        "prp-adp",
        vec![
            tp(var("x"), iri(rdf::type_), iri(owl::AllDisjointProperties)),
            tp(var("x"), iri(owl::members), var("l")),
            member("l", "p1"),
            member("l", "p2"),
            tp(var("u"), var("p1"), var("v")),
            tp(var("u"), var("p2"), var("v")),
        ],
    )
    .with_guard(Guard::Distinct(var("p1"), var("p2")))
}

pub(super) fn prp_inv1() -> Rule {
    Rule::new(
        "prp-inv1",
        vec![
            tp(var("p1"), iri(owl::inverseOf), var("p2")),
            tp(var("x"), var("p1"), var("y")),
        ],
        tp(var("y"), var("p2"), var("x")),
    )
}

pub(super) fn prp_inv2() -> Rule {
    Rule::new(
        "prp-inv2",
        vec![
            tp(var("p1"), iri(owl::inverseOf), var("p2")),
            tp(var("x"), var("p2"), var("y")),
        ],
        tp(var("y"), var("p1"), var("x")),
    )
}

pub(super) fn prp_npa1() -> Rule {
    Rule::constraint(
        "prp-npa1",
        vec![
            tp(var("x"), iri(owl::sourceIndividual), var("i1")),
            tp(var("x"), iri(owl::assertionProperty), var("p")),
            tp(var("x"), iri(owl::targetIndividual), var("i2")),
            tp(var("i1"), var("p"), var("i2")),
        ],
    )
}

pub(super) fn prp_npa2() -> Rule {
    Rule::constraint(
        "prp-npa2",
        vec![
            tp(var("x"), iri(owl::sourceIndividual), var("i")),
            tp(var("x"), iri(owl::assertionProperty), var("p")),
            tp(var("x"), iri(owl::targetValue), var("lt")),
            tp(var("i"), var("p"), var("lt")),
        ],
    )
}

// classes

pub(super) fn cls_thing() -> Rule {
    Rule::axiom(
        "cls-thing",
        tp(iri(owl::Thing), iri(rdf::type_), iri(owl::Class)),
    )
}

pub(super) fn cls_nothing1() -> Rule {
    Rule::axiom(
        "cls-nothing1",
        tp(iri(owl::Nothing), iri(rdf::type_), iri(owl::Class)),
    )
}

pub(super) fn cls_nothing2() -> Rule {
    Rule::constraint(
        "cls-nothing2",
        vec![tp(var("x"), iri(rdf::type_), iri(owl::Nothing))],
    )
}

pub(super) fn cls_int2() -> Rule {
    Rule::new(
        "cls-int2",
        vec![
            tp(var("c"), iri(owl::intersectionOf), var("x")),
            member("x", "ci"),
            tp(var("y"), iri(rdf::type_), var("c")),
        ],
        tp(var("y"), iri(rdf::type_), var("ci")),
    )
}

pub(super) fn cls_uni() -> Rule {
    Rule::new(
        "cls-uni",
        vec![
            tp(var("c"), iri(owl::unionOf), var("x")),
            member("x", "ci"),
            tp(var("y"), iri(rdf::type_), var("ci")),
        ],
        tp(var("y"), iri(rdf::type_), var("c")),
    )
}

pub(super) fn cls_com() -> Rule {
    Rule::constraint(
        "cls-com",
        vec![
            tp(var("c1"), iri(owl::complementOf), var("c2")),
            tp(var("x"), iri(rdf::type_), var("c1")),
            tp(var("x"), iri(rdf::type_), var("c2")),
        ],
    )
}

pub(super) fn cls_svf1() -> Rule {
    Rule::new(
        "cls-svf1",
        vec![
            tp(var("x"), iri(owl::someValuesFrom), var("y")),
            tp(var("x"), iri(owl::onProperty), var("p")),
            tp(var("u"), var("p"), var("v")),
            tp(var("v"), iri(rdf::type_), var("y")),
        ],
        tp(var("u"), iri(rdf::type_), var("x")),
    )
}

pub(super) fn cls_svf2() -> Rule {
    Rule::new(
        "cls-svf2",
        vec![
            tp(var("x"), iri(owl::someValuesFrom), iri(owl::Thing)),
            tp(var("x"), iri(owl::onProperty), var("p")),
            tp(var("u"), var("p"), var("v")),
        ],
        tp(var("u"), iri(rdf::type_), var("x")),
    )
}

pub(super) fn cls_avf() -> Rule {
    Rule::new(
        "cls-avf",
        vec![
            tp(var("x"), iri(owl::allValuesFrom), var("y")),
            tp(var("x"), iri(owl::onProperty), var("p")),
            tp(var("u"), iri(rdf::type_), var("x")),
            tp(var("u"), var("p"), var("v")),
        ],
        tp(var("v"), iri(rdf::type_), var("y")),
    )
}

pub(super) fn cls_hv1() -> Rule {
    Rule::new(
        "cls-hv1",
        vec![
            tp(var("x"), iri(owl::hasValue), var("y")),
            tp(var("x"), iri(owl::onProperty), var("p")),
            tp(var("u"), iri(rdf::type_), var("x")),
        ],
        tp(var("u"), var("p"), var("y")),
    )
}

pub(super) fn cls_hv2() -> Rule {
    Rule::new(
        "cls-hv2",
        vec![
            tp(var("x"), iri(owl::hasValue), var("y")),
            tp(var("x"), iri(owl::onProperty), var("p")),
            tp(var("u"), var("p"), var("y")),
        ],
        tp(var("u"), iri(rdf::type_), var("x")),
    )
}

pub(super) fn cls_maxc1() -> Rule {
    Rule::constraint(
        "cls-maxc1",
        vec![
            tp(var("x"), iri(owl::maxCardinality), var("n")),
            tp(var("x"), iri(owl::onProperty), var("p")),
            tp(var("u"), iri(rdf::type_), var("x")),
            tp(var("u"), var("p"), var("y")),
        ],
    )
    .with_guard(Guard::NumericEquals(var("n"), 0))
}

pub(super) fn cls_maxc2() -> Rule {
    Rule::new(
        "cls-maxc2",
        vec![
            tp(var("x"), iri(owl::maxCardinality), var("n")),
            tp(var("x"), iri(owl::onProperty), var("p")),
            tp(var("u"), iri(rdf::type_), var("x")),
            tp(var("u"), var("p"), var("y1")),
            tp(var("u"), var("p"), var("y2")),
        ],
        tp(var("y1"), iri(owl::sameAs), var("y2")),
    )
    .with_guard(Guard::NumericEquals(var("n"), 1))
    .with_guard(Guard::Distinct(var("y1"), var("y2")))
}

pub(super) fn cls_maxqc1() -> Rule {
    Rule::constraint(
        "cls-maxqc1",
        vec![
            tp(var("x"), iri(owl::maxQualifiedCardinality), var("n")),
            tp(var("x"), iri(owl::onProperty), var("p")),
            tp(var("x"), iri(owl::onClass), var("c")),
            tp(var("u"), iri(rdf::type_), var("x")),
            tp(var("u"), var("p"), var("y")),
            tp(var("y"), iri(rdf::type_), var("c")),
        ],
    )
    .with_guard(Guard::NumericEquals(var("n"), 0))
}

pub(super) fn cls_maxqc2() -> Rule {
    Rule::constraint(
        "cls-maxqc2",
        vec![
            tp(var("x"), iri(owl::maxQualifiedCardinality), var("n")),
            tp(var("x"), iri(owl::onProperty), var("p")),
            tp(var("x"), iri(owl::onClass), iri(owl::Thing)),
            tp(var("u"), iri(rdf::type_), var("x")),
            tp(var("u"), var("p"), var("y")),
        ],
    )
    .with_guard(Guard::NumericEquals(var("n"), 0))
}

pub(super) fn cls_maxqc3() -> Rule {
    Rule::new(
        "cls-maxqc3",
        vec![
            tp(var("x"), iri(owl::maxQualifiedCardinality), var("n")),
            tp(var("x"), iri(owl::onProperty), var("p")),
            tp(var("x"), iri(owl::onClass), var("c")),
            tp(var("u"), iri(rdf::type_), var("x")),
            tp(var("u"), var("p"), var("y1")),
            tp(var("y1"), iri(rdf::type_), var("c")),
            tp(var("u"), var("p"), var("y2")),
            tp(var("y2"), iri(rdf::type_), var("c")),
        ],
        tp(var("y1"), iri(owl::sameAs), var("y2")),
    )
    .with_guard(Guard::NumericEquals(var("n"), 1))
    .with_guard(Guard::Distinct(var("y1"), var("y2")))
}

pub(super) fn cls_maxqc4() -> Rule {
    Rule::new(
        "cls-maxqc4",
        vec![
            tp(var("x"), iri(owl::maxQualifiedCardinality), var("n")),
            tp(var("x"), iri(owl::onProperty), var("p")),
            tp(var("x"), iri(owl::onClass), iri(owl::Thing)),
            tp(var("u"), iri(rdf::type_), var("x")),
            tp(var("u"), var("p"), var("y1")),
            tp(var("u"), var("p"), var("y2")),
        ],
        tp(var("y1"), iri(owl::sameAs), var("y2")),
    )
    .with_guard(Guard::NumericEquals(var("n"), 1))
    .with_guard(Guard::Distinct(var("y1"), var("y2")))
}

pub(super) fn cls_oo() -> Rule {
    Rule::new(
        "cls-oo",
        vec![
            tp(var("c"), iri(owl::oneOf), var("x")),
            member("x", "y"),
        ],
        tp(var("y"), iri(rdf::type_), var("c")),
    )
    .with_guard(Guard::IsResource(var("y")))
}

// class axioms

pub(super) fn cax_sco() -> Rule {
    Rule::new(
        "cax-sco",
        vec![
            tp(var("x"), iri(rdf::type_), var("c")),
            tp(var("c"), iri(rdfs::subClassOf), var("d")),
        ],
        tp(var("x"), iri(rdf::type_), var("d")),
    )
}

pub(super) fn cax_eqc1() -> Rule {
    Rule::new(
        "cax-eqc1",
        vec![
            tp(var("c1"), iri(owl::equivalentClass), var("c2")),
            tp(var("x"), iri(rdf::type_), var("c1")),
        ],
        tp(var("x"), iri(rdf::type_), var("c2")),
    )
}

pub(super) fn cax_eqc2() -> Rule {
    Rule::new(
        "cax-eqc2",
        vec![
            tp(var("c1"), iri(owl::equivalentClass), var("c2")),
            tp(var("x"), iri(rdf::type_), var("c2")),
        ],
        tp(var("x"), iri(rdf::type_), var("c1")),
    )
}

pub(super) fn cax_dw() -> Rule {
    Rule::constraint(
        "cax-dw",
        vec![
            tp(var("c1"), iri(owl::disjointWith), var("c2")),
            tp(var("x"), iri(rdf::type_), var("c1")),
            tp(var("x"), iri(rdf::type_), var("c2")),
        ],
    )
}

pub(super) fn cax_adc() -> Rule {
    Rule::constraint(
        "cax-adc",
        vec![
            tp(var("x"), iri(rdf::type_), iri(owl::AllDisjointClasses)),
            tp(var("x"), iri(owl::members), var("l")),
            member("l", "c1"),
            member("l", "c2"),
            tp(var("z"), iri(rdf::type_), var("c1")),
            tp(var("z"), iri(rdf::type_), var("c2")),
        ],
    )
    .with_guard(Guard::Distinct(var("c1"), var("c2")))
}

// schema vocabulary

fn scm_cls(n: u8, conclusion: TriplePattern) -> Rule {
    Rule::new(
        format!("scm-cls#{n}"),
        vec![tp(var("c"), iri(rdf::type_), iri(owl::Class))],
        conclusion,
    )
}

pub(super) fn scm_cls1() -> Rule {
    scm_cls(1, tp(var("c"), iri(rdfs::subClassOf), var("c")))
}

pub(super) fn scm_cls2() -> Rule {
    scm_cls(2, tp(var("c"), iri(owl::equivalentClass), var("c")))
}

pub(super) fn scm_cls3() -> Rule {
    scm_cls(3, tp(var("c"), iri(rdfs::subClassOf), iri(owl::Thing)))
}

pub(super) fn scm_cls4() -> Rule {
    scm_cls(4, tp(iri(owl::Nothing), iri(rdfs::subClassOf), var("c")))
}

pub(super) fn scm_sco() -> Rule {
    Rule::new(
        "scm-sco",
        vec![
            tp(var("c1"), iri(rdfs::subClassOf), var("c2")),
            tp(var("c2"), iri(rdfs::subClassOf), var("c3")),
        ],
        tp(var("c1"), iri(rdfs::subClassOf), var("c3")),
    )
}

pub(super) fn scm_eqc1a() -> Rule {
    Rule::new(
        "scm-eqc1#1",
        vec![tp(var("c1"), iri(owl::equivalentClass), var("c2"))],
        tp(var("c1"), iri(rdfs::subClassOf), var("c2")),
    )
}

pub(super) fn scm_eqc1b() -> Rule {
    Rule::new(
        "scm-eqc1#2",
        vec![tp(var("c1"), iri(owl::equivalentClass), var("c2"))],
        tp(var("c2"), iri(rdfs::subClassOf), var("c1")),
    )
}

pub(super) fn scm_eqc2() -> Rule {
    Rule::new(
        "scm-eqc2",
        vec![
            tp(var("c1"), iri(rdfs::subClassOf), var("c2")),
            tp(var("c2"), iri(rdfs::subClassOf), var("c1")),
        ],
        tp(var("c1"), iri(owl::equivalentClass), var("c2")),
    )
}

fn reflexive_property(name: &str, class: &'static str, property: &'static str) -> Rule {
    Rule::new(
        name,
        vec![tp(var("p"), iri(rdf::type_), iri(class))],
        tp(var("p"), iri(property), var("p")),
    )
}

pub(super) fn scm_op1() -> Rule {
    reflexive_property("scm-op#1", owl::ObjectProperty, rdfs::subPropertyOf)
}

pub(super) fn scm_op2() -> Rule {
    reflexive_property("scm-op#2", owl::ObjectProperty, owl::equivalentProperty)
}

pub(super) fn scm_dp1() -> Rule {
    reflexive_property("scm-dp#1", owl::DatatypeProperty, rdfs::subPropertyOf)
}

pub(super) fn scm_dp2() -> Rule {
    reflexive_property("scm-dp#2", owl::DatatypeProperty, owl::equivalentProperty)
}

pub(super) fn scm_spo() -> Rule {
    Rule::new(
        "scm-spo",
        vec![
            tp(var("p1"), iri(rdfs::subPropertyOf), var("p2")),
            tp(var("p2"), iri(rdfs::subPropertyOf), var("p3")),
        ],
        tp(var("p1"), iri(rdfs::subPropertyOf), var("p3")),
    )
}

pub(super) fn scm_eqp1a() -> Rule {
    Rule::new(
        "scm-eqp1#1",
        vec![tp(var("p1"), iri(owl::equivalentProperty), var("p2"))],
        tp(var("p1"), iri(rdfs::subPropertyOf), var("p2")),
    )
}

pub(super) fn scm_eqp1b() -> Rule {
    Rule::new(
        "scm-eqp1#2",
        vec![tp(var("p1"), iri(owl::equivalentProperty), var("p2"))],
        tp(var("p2"), iri(rdfs::subPropertyOf), var("p1")),
    )
}

pub(super) fn scm_eqp2() -> Rule {
    Rule::new(
        "scm-eqp2",
        vec![
            tp(var("p1"), iri(rdfs::subPropertyOf), var("p2")),
            tp(var("p2"), iri(rdfs::subPropertyOf), var("p1")),
        ],
        tp(var("p1"), iri(owl::equivalentProperty), var("p2")),
    )
}

pub(super) fn scm_dom1() -> Rule {
    Rule::new(
        "scm-dom1",
        vec![
            tp(var("p"), iri(rdfs::domain), var("c1")),
            tp(var("c1"), iri(rdfs::subClassOf), var("c2")),
        ],
        tp(var("p"), iri(rdfs::domain), var("c2")),
    )
}

pub(super) fn scm_dom2() -> Rule {
    Rule::new(
        "scm-dom2",
        vec![
            tp(var("p2"), iri(rdfs::domain), var("c")),
            tp(var("p1"), iri(rdfs::subPropertyOf), var("p2")),
        ],
        tp(var("p1"), iri(rdfs::domain), var("c")),
    )
}

pub(super) fn scm_rng1() -> Rule {
    Rule::new(
        "scm-rng1",
        vec![
            tp(var("p"), iri(rdfs::range), var("c1")),
            tp(var("c1"), iri(rdfs::subClassOf), var("c2")),
        ],
        tp(var("p"), iri(rdfs::range), var("c2")),
    )
}

pub(super) fn scm_rng2() -> Rule {
    Rule::new(
        "scm-rng2",
        vec![
            tp(var("p2"), iri(rdfs::range), var("c")),
            tp(var("p1"), iri(rdfs::subPropertyOf), var("p2")),
        ],
        tp(var("p1"), iri(rdfs::range), var("c")),
    )
}

pub(super) fn scm_hv() -> Rule {
    Rule::new(
        "scm-hv",
        vec![
            tp(var("c1"), iri(owl::hasValue), var("i")),
            tp(var("c1"), iri(owl::onProperty), var("p1")),
            tp(var("c2"), iri(owl::hasValue), var("i")),
            tp(var("c2"), iri(owl::onProperty), var("p2")),
            tp(var("p1"), iri(rdfs::subPropertyOf), var("p2")),
        ],
        tp(var("c1"), iri(rdfs::subClassOf), var("c2")),
    )
}

/// `scm-svf1` and `scm-avf1` share the same shape
fn restriction_by_class(name: &str, restriction: &'static str) -> Rule {
    Rule::new(
        name,
        vec![
            tp(var("c1"), iri(restriction), var("y1")),
            tp(var("c1"), iri(owl::onProperty), var("p")),
            tp(var("c2"), iri(restriction), var("y2")),
            tp(var("c2"), iri(owl::onProperty), var("p")),
            tp(var("y1"), iri(rdfs::subClassOf), var("y2")),
        ],
        tp(var("c1"), iri(rdfs::subClassOf), var("c2")),
    )
}

fn restriction_by_property(restriction: &'static str) -> Vec<TriplePattern> {
    vec![
        tp(var("c1"), iri(restriction), var("y")),
        tp(var("c1"), iri(owl::onProperty), var("p1")),
        tp(var("c2"), iri(restriction), var("y")),
        tp(var("c2"), iri(owl::onProperty), var("p2")),
        tp(var("p1"), iri(rdfs::subPropertyOf), var("p2")),
    ]
}

pub(super) fn scm_svf1() -> Rule {
    restriction_by_class("scm-svf1", owl::someValuesFrom)
}

pub(super) fn scm_svf2() -> Rule {
    Rule::new(
        "scm-svf2",
        restriction_by_property(owl::someValuesFrom),
        tp(var("c1"), iri(rdfs::subClassOf), var("c2")),
    )
}

pub(super) fn scm_avf1() -> Rule {
    restriction_by_class("scm-avf1", owl::allValuesFrom)
}

pub(super) fn scm_avf2() -> Rule {
    Rule::new(
        "scm-avf2",
        restriction_by_property(owl::allValuesFrom),
        tp(var("c2"), iri(rdfs::subClassOf), var("c1")),
    )
}

pub(super) fn scm_int() -> Rule {
    Rule::new(
        "scm-int",
        vec![
            tp(var("c"), iri(owl::intersectionOf), var("x")),
            member("x", "ci"),
        ],
        tp(var("c"), iri(rdfs::subClassOf), var("ci")),
    )
}

pub(super) fn scm_uni() -> Rule {
    Rule::new(
        "scm-uni",
        vec![
            tp(var("c"), iri(owl::unionOf), var("x")),
            member("x", "ci"),
        ],
        tp(var("ci"), iri(rdfs::subClassOf), var("c")),
    )
}
