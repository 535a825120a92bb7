use super::*;
use closure_term::ns::{rdf, xsd};
use closure_term::{Iri, LanguageTag, Literal, PatternTerm, Term, Triple, VarName};
use test_case::test_case;

const TTL: &str = r#"
@prefix : <http://example.org/> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

:alice a :SerialKiller ;
    :name "Alice" ;
    :nickname "la tueuse"@fr ;
    :numberOfVictims 5 ;
    :knows [ :name "Bob" ] .
"#;

fn ex(suffix: &str) -> Term {
    Term::iri(format!("http://example.org/{suffix}")).unwrap()
}

#[test]
fn load_turtle() {
    let store = load_str(TTL, Syntax::Turtle, None).unwrap();
    assert_eq!(store.len(), 6);
    assert!(store.contains(&Triple::new(ex("alice"), Term::iri(rdf::type_).unwrap(), ex("SerialKiller")).unwrap()));
    assert!(store.contains(
        &Triple::new(ex("alice"), ex("name"), Literal::new_simple("Alice").into()).unwrap()
    ));
    assert!(store.contains(
        &Triple::new(
            ex("alice"),
            ex("nickname"),
            Literal::new_lang("la tueuse", LanguageTag::new("fr").unwrap()).into()
        )
        .unwrap()
    ));
    assert!(store.contains(
        &Triple::new(
            ex("alice"),
            ex("numberOfVictims"),
            Literal::new_typed("5", Iri::new(xsd::integer).unwrap()).into()
        )
        .unwrap()
    ));
}

#[test]
fn relative_iris() {
    let txt = "<s> <p> <o> .";
    let store = load_str(txt, Syntax::Turtle, Some("http://example.org/")).unwrap();
    assert!(store.contains(&Triple::new(ex("s"), ex("p"), ex("o")).unwrap()));
    assert!(matches!(
        load_str(txt, Syntax::Turtle, Some("not an iri")),
        Err(AdapterError::InvalidBase(_))
    ));
}

#[test]
fn syntax_error() {
    let err = load_str("<http://example.org/s> <http://example.org/p> .", Syntax::NTriples, None);
    assert!(matches!(err, Err(AdapterError::Syntax(_))));
}

#[test]
fn blank_nodes_are_scoped_per_document() {
    let doc = "_:b <http://example.org/p> <http://example.org/o> .";
    let mut store = load_str(doc, Syntax::NTriples, None).unwrap();
    assert_eq!(load_reader(&mut store, doc.as_bytes(), Syntax::NTriples, None).unwrap(), 1);
    assert_eq!(store.len(), 2);
    // labels are preserved within a document
    let doc = "_:x <http://example.org/p> _:x .";
    let store = load_str(doc, Syntax::NTriples, None).unwrap();
    let t = store.triples().next().unwrap();
    assert_eq!(t.s(), t.o());
}

#[test_case(Syntax::Turtle)]
#[test_case(Syntax::NTriples)]
fn save_and_reload(syntax: Syntax) {
    let store = load_str(TTL, Syntax::Turtle, None).unwrap();
    let txt = save_string(&store, syntax).unwrap();
    let reloaded = load_str(&txt, syntax, None).unwrap();
    assert_eq!(reloaded.len(), store.len());
    let ground = |t: &Triple| !t.s().is_blank_node() && !t.o().is_blank_node();
    for t in store.triples().filter(ground) {
        assert!(reloaded.contains(&t), "{t}");
    }
}

#[test]
fn save_and_load_file() {
    let store = load_str(TTL, Syntax::Turtle, None).unwrap();
    let path = std::env::temp_dir().join(format!("closure_rio_test_{}.nt", std::process::id()));
    save(&store, &path).unwrap();
    let reloaded = load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(reloaded.len(), store.len());
}

#[test_case("data.ttl", Some(Syntax::Turtle))]
#[test_case("data.TTL", Some(Syntax::Turtle))]
#[test_case("dir/data.nt", Some(Syntax::NTriples))]
#[test_case("data.rdf", None)]
#[test_case("data", None)]
fn syntax_from_path(path: &str, expected: Option<Syntax>) {
    assert_eq!(Syntax::from_path(path).ok(), expected);
}

#[test]
fn query_loaded_store() {
    let store = load_str(TTL, Syntax::Turtle, None).unwrap();
    let x = VarName::new("x").unwrap();
    let n = VarName::new("n").unwrap();
    let patterns = [
        TriplePattern::new(ex("alice"), ex("knows"), x.clone()),
        TriplePattern::new(PatternTerm::from(x), ex("name"), n),
    ];
    let solutions = query(&store, &patterns);
    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].get("n"), Some(&Term::from(Literal::new_simple("Bob"))));
}
