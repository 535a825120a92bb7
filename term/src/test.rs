use super::*;
use crate::ns::{rdf, rdfs, xsd};

fn h<H: std::hash::Hash>(x: &H) -> u64 {
    use std::hash::Hasher;
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    x.hash(&mut hasher);
    hasher.finish()
}

fn iri(txt: &str) -> Term {
    Term::iri(txt).unwrap()
}

#[test]
fn iri_term() {
    let exp = "http://champin.net/";
    let t = iri(exp);
    assert_eq!(t.kind(), TermKind::Iri);
    assert!(t.is_iri() && t.is_resource() && !t.is_literal());
    assert_eq!(t.as_iri().unwrap().as_str(), exp);
    assert!(t.is_iri_str(exp));
    assert_eq!(t.to_string(), format!("<{exp}>"));
    assert!(Term::iri("1://champin.net/").is_err());
}

#[test]
fn bnode_term() {
    let t = Term::from(BnodeId::new("b1").unwrap());
    assert_eq!(t.kind(), TermKind::BlankNode);
    assert!(t.is_blank_node() && t.is_resource());
    assert_eq!(t.as_blank_node().unwrap().as_str(), "b1");
    assert_eq!(t.to_string(), "_:b1");
}

#[test]
fn literal_equality_is_structural() {
    let a = Term::from(Literal::new_simple("5"));
    let b = Term::from(Literal::new_typed("5", Iri::new(xsd::string).unwrap()));
    let c = Term::from(Literal::new_typed("5", Iri::new(xsd::integer).unwrap()));
    let d = Term::from(Literal::new_typed("05", Iri::new(xsd::integer).unwrap()));
    assert_eq!(a, b);
    assert_eq!(h(&a), h(&b));
    assert_ne!(a, c);
    assert_ne!(c, d);
}

#[test]
fn language_tags_are_normalized() {
    let a = Term::from(Literal::new_lang("chat", LanguageTag::new("FR").unwrap()));
    let b = Term::from(Literal::new_lang("chat", LanguageTag::new("fr").unwrap()));
    assert_eq!(a, b);
    assert_eq!(h(&a), h(&b));
    assert_eq!(a.as_literal().unwrap().datatype(), rdf::langString);
}

#[test]
fn kinds_never_equal() {
    let i = iri("http://example.org/x");
    let b = Term::from(BnodeId::new("x").unwrap());
    let l = Term::from(Literal::new_simple("http://example.org/x"));
    assert_ne!(i, b);
    assert_ne!(i, l);
    assert_ne!(b, l);
}

#[test]
fn triple_well_formed() {
    let t = Triple::new(
        iri("http://example.org/alice"),
        iri(rdf::type_),
        iri("http://example.org/Person"),
    )
    .unwrap();
    assert!(t.s().is_iri_str("http://example.org/alice"));
    assert!(t.p().is_iri_str(rdf::type_));
    assert_eq!(
        t.to_string(),
        "<http://example.org/alice> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://example.org/Person> ."
    );
    let [s, p, o] = t.clone().into_spo();
    assert_eq!(Triple::try_from([s, p, o]).unwrap(), t);
}

#[test]
fn triple_literal_subject() {
    let err = Triple::new(
        Literal::new_simple("x").into(),
        iri(rdfs::label),
        Literal::new_simple("y").into(),
    );
    assert!(matches!(err, Err(InvalidTriple::LiteralSubject(_))));
}

#[test]
fn triple_non_iri_predicate() {
    let err = Triple::new(
        iri("http://example.org/a"),
        BnodeId::new("p").unwrap().into(),
        iri("http://example.org/b"),
    );
    assert!(matches!(err, Err(InvalidTriple::NonIriPredicate(_))));
    let err = Triple::new(
        iri("http://example.org/a"),
        Literal::new_simple("p").into(),
        iri("http://example.org/b"),
    );
    assert!(matches!(err, Err(InvalidTriple::NonIriPredicate(_))));
}

#[test]
fn pattern_variables() {
    let x = VarName::new("x").unwrap();
    let pat = TriplePattern::new(
        x.clone(),
        Iri::new(rdfs::subClassOf).unwrap(),
        x.clone(),
    );
    assert_eq!(pat.variables().collect::<Vec<_>>(), vec![&x, &x]);
    assert!(!pat.is_ground());
    assert_eq!(
        pat.to_string(),
        "?x <http://www.w3.org/2000/01/rdf-schema#subClassOf> ?x"
    );

    let ground = TriplePattern::new(
        iri("http://example.org/a"),
        iri(rdf::type_),
        iri("http://example.org/C"),
    );
    assert!(ground.is_ground());
    assert_eq!(ground.p().as_term(), Some(&iri(rdf::type_)));
}

#[test]
fn term_error_wraps_every_failure() {
    fn build(s: &str, p: &str) -> Result<Triple, TermError> {
        let s = Term::iri(s)?;
        let p = Term::from(Literal::new_simple(p));
        Ok(Triple::new(s, p, iri("http://example.org/o"))?)
    }
    assert!(matches!(build("1://bad", "p"), Err(TermError::Iri(_))));
    assert!(matches!(
        build("http://example.org/s", "p"),
        Err(TermError::Triple(_))
    ));
    let err: TermError = VarName::new("not a var").unwrap_err().into();
    assert!(matches!(err, TermError::VarName(_)));
}
