//! I define the [`Iri`] wrapper type,
//! which guarantees that the underlying `str`
//! is a valid absolute [IRI](https://www.ietf.org/rfc/rfc3987.txt).
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// An absolute IRI, validated with [`oxiri`].
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Iri(Arc<str>);

impl Iri {
    /// Build a new [`Iri`], returning an error if `iri` is not a valid absolute IRI.
    pub fn new<T: Into<Arc<str>>>(iri: T) -> Result<Self, InvalidIri> {
        let iri = iri.into();
        match oxiri::Iri::parse(&*iri) {
            Ok(_) => Ok(Iri(iri)),
            Err(err) => Err(InvalidIri(iri.to_string(), err.to_string())),
        }
    }

    /// Build a new [`Iri`] without checking that `iri` is valid.
    ///
    /// This is meant for IRIs known at compile time, such as those of [`ns`](crate::ns).
    pub fn new_unchecked<T: Into<Arc<str>>>(iri: T) -> Self {
        let iri = iri.into();
        debug_assert!(oxiri::Iri::parse(&*iri).is_ok(), "invalid IRI <{iri}>");
        Iri(iri)
    }

    /// Gets a reference to the underlying `str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Iri {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Iri {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// This error is raised when trying to build an invalid [`Iri`].
#[derive(Clone, Debug, Error)]
#[error("The given IRI '{0}' is not valid: {1}")]
pub struct InvalidIri(pub String, pub String);

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("http://example.org/crime/alice")]
    #[test_case("http://www.w3.org/2002/07/owl#sameAs")]
    #[test_case("urn:isbn:0451450523")]
    #[test_case("tag:champin.net,2024:x")]
    fn valid(txt: &str) {
        let iri = Iri::new(txt).unwrap();
        assert_eq!(iri.as_str(), txt);
        assert_eq!(iri.to_string(), format!("<{txt}>"));
    }

    #[test_case(""; "empty")]
    #[test_case("alice"; "relative")]
    #[test_case("http://example.org/a b"; "with space")]
    #[test_case("1://example.org/"; "bad scheme")]
    fn invalid(txt: &str) {
        assert!(Iri::new(txt).is_err());
    }
}
