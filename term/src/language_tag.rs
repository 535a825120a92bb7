//! I define the [`LanguageTag`] wrapper type,
//! which guarantees that the underlying `str`
//! is a well-formed [BCP47](https://tools.ietf.org/search/bcp47) language tag,
//! normalized to lowercase.
use regex::Regex;
use std::fmt;
use std::sync::{Arc, LazyLock};
use thiserror::Error;

/// NB: this is slightly more permissive than BCP47,
/// as it does not check that the different subtags are registered codes.
static LANG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]{1,8}(-[a-zA-Z0-9]{1,8})*$").unwrap());

/// A language tag, stored in lowercase.
///
/// Language tags are case-insensitive,
/// so normalizing them makes structural equality of [`Literal`](crate::Literal)s sound.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct LanguageTag(Arc<str>);

impl LanguageTag {
    /// Build a new [`LanguageTag`] from `tag`,
    /// returning an error if it is not a valid BCP47 language tag.
    pub fn new(tag: &str) -> Result<Self, InvalidLanguageTag> {
        if LANG_TAG.is_match(tag) {
            Ok(LanguageTag(tag.to_ascii_lowercase().into()))
        } else {
            Err(InvalidLanguageTag(tag.to_string()))
        }
    }

    /// Gets a reference to the underlying `str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// This error is raised when trying to parse an invalid language tag.
#[derive(Clone, Debug, Error)]
#[error("The given language tag '{0}' does not comply with BCP47")]
pub struct InvalidLanguageTag(pub String);

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("en", "en")]
    #[test_case("fr", "fr")]
    #[test_case("en-US", "en-us")]
    #[test_case("zh-Hant-TW", "zh-hant-tw")]
    fn valid(txt: &str, normalized: &str) {
        assert_eq!(LanguageTag::new(txt).unwrap().as_str(), normalized);
    }

    #[test_case(""; "empty")]
    #[test_case("en_US"; "underscore")]
    #[test_case("-en"; "leading dash")]
    #[test_case("abcdefghi"; "too long")]
    fn invalid(txt: &str) {
        assert!(LanguageTag::new(txt).is_err());
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(
            LanguageTag::new("EN-gb").unwrap(),
            LanguageTag::new("en-GB").unwrap()
        );
    }
}
