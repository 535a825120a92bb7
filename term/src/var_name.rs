//! I define the [`VarName`] wrapper type,
//! which guarantees that the underlying `str`
//! satisfies the `VARNAME` rule in [SPARQL](https://www.w3.org/TR/sparql11-query/#rVARNAME).
use regex::Regex;
use std::fmt;
use std::sync::{Arc, LazyLock};
use thiserror::Error;

/// Production of SPARQL's VARNAME according to the
/// [SPARQL spec](https://www.w3.org/TR/sparql11-query/#rVARNAME).
///
/// # Rule
///
/// `VARNAME ::= ( PN_CHARS_U | [0-9] ) ( PN_CHARS_U | [0-9] | #x00B7 | [#x0300-#x036F] | [#x203F-#x2040] )*`
static VARNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?x)
      ^
      [_A-Za-z0-9\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{2FF}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\U{10000}-\U{EFFFF}]
      [_A-Za-z0-9\u{B7}\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{2FF}\u{300}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{203F}-\u{2040}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\U{10000}-\U{EFFFF}]*
      $
    ").unwrap()
});

/// The name of a pattern variable (without the leading `?`).
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VarName(Arc<str>);

impl VarName {
    /// Build a new [`VarName`], returning an error if `name` is not a valid SPARQL variable name.
    pub fn new<T: Into<Arc<str>>>(name: T) -> Result<Self, InvalidVarName> {
        let name = name.into();
        if VARNAME.is_match(&name) {
            Ok(VarName(name))
        } else {
            Err(InvalidVarName(name.to_string()))
        }
    }

    /// Build a new [`VarName`] without checking that `name` is valid.
    pub fn new_unchecked<T: Into<Arc<str>>>(name: T) -> Self {
        let name = name.into();
        debug_assert!(VARNAME.is_match(&name), "invalid variable name {name}");
        VarName(name)
    }

    /// Gets a reference to the underlying `str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.0)
    }
}

/// This error is raised when trying to parse an invalid variable name.
#[derive(Clone, Debug, Error)]
#[error("The given variable name '{0}' does not comply with SPARQL's VARNAME")]
pub struct InvalidVarName(pub String);
