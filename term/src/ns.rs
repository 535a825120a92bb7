//! Standard and custom namespaces.
//!
//! This module provides:
//! * the [`namespace!`](crate::namespace) macro, to declare the terms of a vocabulary;
//! * modules corresponding to the vocabularies used by RDFS and OWL-RL reasoning.
//!
//! Terms are plain `&'static str` constants,
//! so that they can be used in `const` contexts and compared cheaply with [`Iri`](crate::Iri)s.
//!
//! # Example
//! ```
//! use closure_term::{ns::rdf, Iri, Term};
//! let t = Term::from(Iri::new_unchecked(rdf::type_));
//! assert_eq!(t.to_string(), "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>");
//! ```

/// Create a "namespace module"
/// defining a set of terms within a given IRI space.
///
/// # Tests
/// This macro also creates a test module to check that all created IRIs are valid.
///
/// This allows to skip those checks at runtime.
#[macro_export]
macro_rules! namespace {
    ($iri_prefix:literal, $($suffix:ident),*; $($r_id:ident, $r_sf:literal),*) => {
        /// Prefix used in this namespace.
        pub const PREFIX: &str = $iri_prefix;
        $(
            /// Generated term.
            #[allow(non_upper_case_globals)]
            pub const $suffix: &str = concat!($iri_prefix, stringify!($suffix));
        )*
        $(
            /// Generated term.
            #[allow(non_upper_case_globals)]
            pub const $r_id: &str = concat!($iri_prefix, $r_sf);
        )*

    };
    ($iri_prefix:literal, $($suffix:ident),*) => {
        $crate::namespace!($iri_prefix, $($suffix),*;);
    };
}

/// The standard `rdf:` namespace.
#[allow(missing_docs)]
pub mod rdf {
    crate::namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        // classes
        Alt,
        Bag,
        List,
        PlainLiteral,
        Property,
        Seq,
        Statement,
        // datatypes
        HTML,
        JSON,
        langString,
        XMLLiteral,
        // properties
        first,
        object,
        predicate,
        rest,
        subject,
        value,
        // individuals
        nil;
        type_, "type"
    );
}

/// The standard `rdfs:` namespace.
#[allow(missing_docs)]
pub mod rdfs {
    crate::namespace!(
        "http://www.w3.org/2000/01/rdf-schema#",
        // types
        Class,
        Container,
        ContainerMembershipProperty,
        Datatype,
        Literal,
        Resource,
        // properties
        comment,
        domain,
        isDefinedBy,
        label,
        member,
        range,
        seeAlso,
        subClassOf,
        subPropertyOf
    );
}

/// The standard `owl:` namespace.
#[allow(missing_docs)]
pub mod owl {
    crate::namespace!(
        "http://www.w3.org/2002/07/owl#",
        // classes
        AllDifferent,
        AllDisjointClasses,
        AllDisjointProperties,
        Annotation,
        AnnotationProperty,
        AsymmetricProperty,
        Axiom,
        Class,
        DataRange,
        DatatypeProperty,
        DeprecatedClass,
        DeprecatedProperty,
        FunctionalProperty,
        InverseFunctionalProperty,
        IrreflexiveProperty,
        NamedIndividual,
        NegativePropertyAssertion,
        Nothing,
        ObjectProperty,
        Ontology,
        OntologyProperty,
        ReflexiveProperty,
        Restriction,
        SymmetricProperty,
        Thing,
        TransitiveProperty,
        // properties
        allValuesFrom,
        annotatedProperty,
        annotatedSource,
        annotatedTarget,
        assertionProperty,
        cardinality,
        complementOf,
        datatypeComplementOf,
        differentFrom,
        disjointUnionOf,
        disjointWith,
        distinctMembers,
        equivalentClass,
        equivalentProperty,
        hasKey,
        hasSelf,
        hasValue,
        intersectionOf,
        inverseOf,
        maxCardinality,
        maxQualifiedCardinality,
        members,
        minCardinality,
        minQualifiedCardinality,
        onClass,
        onDataRange,
        onDatatype,
        oneOf,
        onProperty,
        onProperties,
        propertyChainAxiom,
        propertyDisjointWith,
        qualifiedCardinality,
        sameAs,
        someValuesFrom,
        sourceIndividual,
        targetIndividual,
        targetValue,
        unionOf,
        versionInfo,
        versionIRI,
        withRestrictions,
        // individuals
        bottomDataProperty,
        bottomObjectProperty,
        topDataProperty,
        topObjectProperty
    );
}

/// The standard `xsd:` namespace.
#[allow(missing_docs)]
pub mod xsd {
    crate::namespace!(
        "http://www.w3.org/2001/XMLSchema#",
        anyURI,
        boolean,
        byte,
        date,
        dateTime,
        decimal,
        double,
        float,
        int,
        integer,
        language,
        long,
        negativeInteger,
        nonNegativeInteger,
        nonPositiveInteger,
        positiveInteger,
        short,
        string,
        unsignedByte,
        unsignedInt,
        unsignedLong,
        unsignedShort
    );
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn renamed_term() {
        assert_eq!(rdf::type_, "http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
    }

    #[test]
    fn prefix() {
        assert!(owl::sameAs.starts_with(owl::PREFIX));
        assert_eq!(&rdfs::subClassOf[rdfs::PREFIX.len()..], "subClassOf");
    }
}
