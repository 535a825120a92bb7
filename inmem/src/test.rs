use super::*;
use closure_term::ns::{rdf, rdfs};
use closure_term::{BnodeId, Iri, Literal, Term, Triple, TriplePattern, VarName};
use test_case::test_case;

fn ex(suffix: &str) -> Term {
    Term::iri(format!("http://example.org/{suffix}")).unwrap()
}

fn ns(iri: &'static str) -> Term {
    Iri::new_unchecked(iri).into()
}

fn t(s: Term, p: Term, o: Term) -> Triple {
    Triple::new(s, p, o).unwrap()
}

fn v(name: &str) -> VarName {
    VarName::new(name).unwrap()
}

fn crime() -> TripleStore {
    [
        t(ex("alice"), ns(rdf::type_), ex("SerialKiller")),
        t(ex("bob"), ns(rdf::type_), ex("Thief")),
        t(ex("SerialKiller"), ns(rdfs::subClassOf), ex("ViolentCriminal")),
        t(ex("Thief"), ns(rdfs::subClassOf), ex("Criminal")),
        t(ex("alice"), ex("numberOfVictims"), Literal::new_simple("5").into()),
        t(BnodeId::new_unchecked("b0").into(), ex("knows"), ex("alice")),
    ]
    .into_iter()
    .collect()
}

#[test]
fn insert_is_set_semantics() {
    let mut store = TripleStore::new();
    assert!(store.is_empty());
    let tr = t(ex("a"), ex("p"), ex("b"));
    assert!(store.insert(tr.clone()));
    assert!(!store.insert(tr.clone()));
    assert_eq!(store.len(), 1);
    assert!(store.contains(&tr));
    assert!(!store.contains(&t(ex("b"), ex("p"), ex("a"))));
    assert!(!store.contains(&t(ex("unknown"), ex("p"), ex("b"))));
}

#[test]
fn triples_roundtrip() {
    let store = crime();
    assert_eq!(store.len(), 6);
    let copy: TripleStore = store.triples().collect();
    assert_eq!(copy.len(), store.len());
    for tr in store.triples() {
        assert!(copy.contains(&tr));
    }
}

#[test_case(Some("alice"), None, None, 2)]
#[test_case(None, Some(rdf::type_), None, 2)]
#[test_case(None, None, Some("alice"), 1)]
#[test_case(Some("alice"), Some(rdf::type_), None, 1)]
#[test_case(None, Some(rdfs::subClassOf), Some("Criminal"), 1)]
#[test_case(Some("Thief"), None, Some("Criminal"), 1)]
#[test_case(Some("bob"), Some(rdf::type_), Some("Thief"), 1)]
#[test_case(Some("bob"), Some(rdf::type_), Some("SerialKiller"), 0)]
#[test_case(Some("nobody"), None, None, 0)]
#[test_case(None, None, None, 6)]
fn triples_matching(s: Option<&str>, p: Option<&'static str>, o: Option<&str>, expected: usize) {
    let store = crime();
    let sm = s.map(ex);
    let pm = p.map(ns);
    let om = o.map(ex);
    let found: Vec<_> = store.triples_matching(&sm, &pm, &om).collect();
    assert_eq!(found.len(), expected);
    for tr in found {
        assert!(store.contains(&tr));
        if let Some(sm) = &sm {
            assert_eq!(tr.s(), sm);
        }
        if let Some(pm) = &pm {
            assert_eq!(tr.p(), pm);
        }
        if let Some(om) = &om {
            assert_eq!(tr.o(), om);
        }
    }
}

#[test]
fn matching_with_any() {
    let store = crime();
    assert_eq!(store.triples_matching(Any, Any, Any).count(), 6);
    assert_eq!(store.triples_matching(ex("alice"), Any, Any).count(), 2);
    assert_eq!(store.triples_matching(Any, Any, &ex("alice")).count(), 1);
}

#[test]
fn id_level_api() {
    let mut store = crime();
    let terms_before = store.term_count();
    let a = store.ensure_index(&ex("alice"));
    let c = store.ensure_index(&ex("Criminal"));
    let ty = store.ensure_index(&ns(rdf::type_));
    assert_eq!(store.term_count(), terms_before);
    assert_eq!(store.term(a), &ex("alice"));
    assert!(!store.contains_ids(&[a, ty, c]));
    assert!(store.insert_ids([a, ty, c]));
    assert!(!store.insert_ids([a, ty, c]));
    assert!(store.contains(&t(ex("alice"), ns(rdf::type_), ex("Criminal"))));
    assert_eq!(store.ids_matching([Some(a), Some(ty), None]).count(), 2);

    let z = store.ensure_index(&ex("zorro"));
    assert_eq!(store.term_count(), terms_before + 1);
    assert_eq!(store.get_index(&ex("zorro")), Some(z));
    assert_eq!(store.len(), 7);
}

#[test]
fn query_join() {
    let store = crime();
    let bindings = store.query(&[
        TriplePattern::new(v("x"), ns(rdf::type_), v("c")),
        TriplePattern::new(v("c"), ns(rdfs::subClassOf), ex("ViolentCriminal")),
    ]);
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].get("x"), Some(&ex("alice")));
    assert_eq!(bindings[0].get("c"), Some(&ex("SerialKiller")));
    assert_eq!(bindings[0].len(), 2);
}

#[test]
fn query_with_literal() {
    let store = crime();
    let bindings = store.query(&[TriplePattern::new(
        v("x"),
        ex("numberOfVictims"),
        Literal::new_simple("5"),
    )]);
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].get("x"), Some(&ex("alice")));
}

#[test]
fn query_empty_bgp() {
    let store = crime();
    let bindings = store.query(&[]);
    assert_eq!(bindings.len(), 1);
    assert!(bindings[0].is_empty());
}

#[test]
fn query_unknown_constant() {
    let store = crime();
    let bindings = store.query(&[TriplePattern::new(v("x"), ex("unknown"), v("y"))]);
    assert!(bindings.is_empty());
}

#[test]
fn query_repeated_variable() {
    let mut store = crime();
    store.insert(t(ex("narcissus"), ex("loves"), ex("narcissus")));
    store.insert(t(ex("echo"), ex("loves"), ex("narcissus")));
    let bindings = store.query(&[TriplePattern::new(v("x"), ex("loves"), v("x"))]);
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].get("x"), Some(&ex("narcissus")));
}

#[test]
fn query_cartesian_product() {
    let store = crime();
    let bindings = store.query(&[
        TriplePattern::new(v("x"), ns(rdf::type_), v("c")),
        TriplePattern::new(v("d"), ns(rdfs::subClassOf), v("e")),
    ]);
    assert_eq!(bindings.len(), 4);
}

#[cfg(feature = "all_tests")]
#[test]
fn big_store() {
    const MAX: usize = 20_000;
    let mut store = TripleStore::new();
    for i in 0..MAX {
        store.insert(t(ex(&format!("n{i}")), ex("next"), ex(&format!("n{}", i + 1))));
    }
    assert_eq!(store.len(), MAX);
    assert_eq!(store.term_count(), MAX + 2);
    assert_eq!(store.triples_matching(Any, ex("next"), Any).count(), MAX);
    assert_eq!(store.triples_matching(ex("n42"), Any, Any).count(), 1);
}
