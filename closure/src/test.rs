use crate::inmem::{Binding, TripleStore};
use crate::reasoner::{ClosureStatus, Reasoner, ReasonerConfig, RuleCatalog};
use crate::rio::{load_into, load_reader, load_str, query, save, save_string, Syntax};
use crate::term::ns::rdf;
use crate::term::{Iri, Literal, PatternTerm, Term, TriplePattern, VarName};
use test_case::test_case;

const CRIME: &str = "http://example.org/crime/";
const FOAF_NAME: &str = "http://xmlns.com/foaf/0.1/name";

const ONTOLOGY: &str = r#"
@prefix crime: <http://example.org/crime/> .
@prefix foaf: <http://xmlns.com/foaf/0.1/> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

crime:Criminal a owl:Class ; rdfs:subClassOf foaf:Person .
crime:ViolentCriminal a owl:Class ; rdfs:subClassOf crime:Criminal .
crime:SerialKiller a owl:Class ; rdfs:subClassOf crime:ViolentCriminal .
crime:Tueur owl:equivalentClass crime:SerialKiller .
crime:Victim a owl:Class ; rdfs:subClassOf foaf:Person .

crime:killed a owl:ObjectProperty ;
    rdfs:domain crime:ViolentCriminal ;
    rdfs:range crime:Victim ;
    owl:inverseOf crime:killedBy .
crime:numberOfVictims a owl:DatatypeProperty ;
    rdfs:domain crime:Criminal .

crime:Accomplice owl:equivalentClass [
    a owl:Restriction ;
    owl:onProperty crime:helped ;
    owl:someValuesFrom crime:SerialKiller
] .
"#;

const DATA: &str = r#"
@prefix crime: <http://example.org/crime/> .
@prefix foaf: <http://xmlns.com/foaf/0.1/> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .

crime:ted a crime:SerialKiller ; foaf:name "Ted" ; crime:numberOfVictims 30 .
crime:michel a crime:Tueur ; foaf:name "Michel" ; crime:numberOfVictims 11 .
crime:jack foaf:name "Jack" ; crime:killed crime:mary .
crime:mary foaf:name "Mary" .
crime:carol foaf:name "Carol" ; crime:helped crime:ted .
crime:theodore owl:sameAs crime:ted .
"#;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn crime(suffix: &str) -> Term {
    Term::iri(format!("{CRIME}{suffix}")).unwrap()
}

fn var(name: &str) -> VarName {
    VarName::new(name).unwrap()
}

fn name(b: &Binding) -> String {
    match b.get("name") {
        Some(Term::Literal(lit)) => lit.lexical_form().to_string(),
        other => panic!("unexpected name {other:?}"),
    }
}

/// Distinct names of the members of `class`, sorted.
fn named_members(store: &TripleStore, class: &str) -> Vec<String> {
    let patterns = [
        TriplePattern::new(var("person"), Term::iri(rdf::type_).unwrap(), crime(class)),
        TriplePattern::new(
            PatternTerm::from(var("person")),
            Term::iri(FOAF_NAME).unwrap(),
            var("name"),
        ),
    ];
    let mut names: Vec<_> = query(store, &patterns).iter().map(name).collect();
    names.sort();
    names.dedup();
    names
}

fn load_crime() -> TripleStore {
    let mut store = load_str(ONTOLOGY, Syntax::Turtle, None).unwrap();
    load_reader(&mut store, DATA.as_bytes(), Syntax::Turtle, None).unwrap();
    store
}

#[test]
fn crime_queries_before_and_after_closure() {
    init_logger();
    let mut store = load_crime();
    assert_eq!(named_members(&store, "SerialKiller"), ["Ted"]);
    assert!(named_members(&store, "ViolentCriminal").is_empty());

    let report = Reasoner::default().closure(&mut store);
    assert_eq!(report.status, ClosureStatus::Converged);
    assert!(report.inferred() > 0);
    assert!(report.growth() > 0.0);
    assert!(report.is_consistent());

    assert_eq!(named_members(&store, "SerialKiller"), ["Michel", "Ted"]);
    assert_eq!(
        named_members(&store, "ViolentCriminal"),
        ["Jack", "Michel", "Ted"]
    );
    assert_eq!(named_members(&store, "Victim"), ["Mary"]);
    assert_eq!(named_members(&store, "Accomplice"), ["Carol"]);
    // theodore is ted
    let patterns = [TriplePattern::new(
        crime("theodore"),
        Term::iri(FOAF_NAME).unwrap(),
        var("name"),
    )];
    let names: Vec<_> = query(&store, &patterns).iter().map(name).collect();
    assert_eq!(names, ["Ted"]);
}

#[test]
fn victims_are_kept_as_literals() {
    init_logger();
    let mut store = load_crime();
    let _ = Reasoner::default().closure(&mut store);
    let patterns = [
        TriplePattern::new(var("person"), Term::iri(rdf::type_).unwrap(), crime("SerialKiller")),
        TriplePattern::new(
            PatternTerm::from(var("person")),
            crime("numberOfVictims"),
            var("victims"),
        ),
    ];
    let integer = Iri::new(crate::term::ns::xsd::integer).unwrap();
    let mut victims: Vec<_> = query(&store, &patterns)
        .iter()
        .filter_map(|b| b.get("victims").cloned())
        .collect();
    victims.sort();
    victims.dedup();
    assert_eq!(
        victims,
        [
            Term::from(Literal::new_typed("11", integer.clone())),
            Term::from(Literal::new_typed("30", integer)),
        ]
    );
}

#[test_case(RuleCatalog::rdfs() ; "rdfs")]
#[test_case(RuleCatalog::standard() ; "standard")]
fn saved_closure_is_closed(catalog: RuleCatalog) {
    init_logger();
    let reasoner = Reasoner::new(catalog, ReasonerConfig::default()).unwrap();
    let mut store = load_crime();
    let _ = reasoner.closure(&mut store);
    let txt = save_string(&store, Syntax::NTriples).unwrap();

    let mut reloaded = load_str(&txt, Syntax::NTriples, None).unwrap();
    assert_eq!(reloaded.len(), store.len());
    let report = reasoner.closure(&mut reloaded);
    assert_eq!(report.inferred(), 0);
    assert_eq!(report.iterations, 1);
}

#[test]
fn files_end_to_end() {
    init_logger();
    let dir = std::env::temp_dir().join(format!("closure_e2e_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let ontology = dir.join("ontology.ttl");
    let data = dir.join("data.ttl");
    let output = dir.join("output.ttl");
    std::fs::write(&ontology, ONTOLOGY).unwrap();
    std::fs::write(&data, DATA).unwrap();

    let mut store = TripleStore::new();
    let n1 = load_into(&mut store, &ontology).unwrap();
    let n2 = load_into(&mut store, &data).unwrap();
    assert_eq!(store.len(), n1 + n2);
    let report = Reasoner::default().closure(&mut store);
    assert!(report.is_complete());
    save(&store, &output).unwrap();

    let reloaded = crate::rio::load(&output).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();
    assert_eq!(reloaded.len(), store.len());
    assert_eq!(named_members(&reloaded, "SerialKiller"), ["Michel", "Ted"]);
}

#[test]
fn blank_nodes_of_distinct_documents_are_not_merged() {
    init_logger();
    let doc = r#"
        @prefix crime: <http://example.org/crime/> .
        _:b a crime:SerialKiller .
    "#;
    let mut store = load_str(doc, Syntax::Turtle, None).unwrap();
    load_reader(&mut store, doc.as_bytes(), Syntax::Turtle, None).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn union_of_turtle_list() {
    init_logger();
    let doc = r#"
        @prefix crime: <http://example.org/crime/> .
        @prefix foaf: <http://xmlns.com/foaf/0.1/> .
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        crime:Killer owl:unionOf (crime:SerialKiller crime:MassMurderer) .
        crime:ted a crime:SerialKiller ; foaf:name "Ted" .
        crime:anders a crime:MassMurderer ; foaf:name "Anders" .
    "#;
    let mut store = load_str(doc, Syntax::Turtle, None).unwrap();
    let report = Reasoner::default().closure(&mut store);
    assert!(report.is_complete());
    assert_eq!(named_members(&store, "Killer"), ["Anders", "Ted"]);
}
