//! I define [`Literal`], and the numeric interpretation of literals
//! with an XSD numeric datatype.
use crate::ns::{rdf, xsd};
use crate::{Iri, LanguageTag};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// An RDF literal: a lexical form, plus either a datatype or a language tag.
///
/// Simple literals are represented with the datatype `xsd:string`,
/// and language-tagged strings have the implicit datatype `rdf:langString`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Literal {
    lex: Arc<str>,
    kind: LiteralKind,
}

/// What, besides its lexical form, identifies a [`Literal`].
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum LiteralKind {
    /// A datatyped literal
    Typed(Iri),
    /// A language-tagged string
    Lang(LanguageTag),
}

impl Literal {
    /// A simple literal (`xsd:string`).
    pub fn new_simple<T: Into<Arc<str>>>(lex: T) -> Self {
        Self::new_typed(lex, Iri::new_unchecked(xsd::string))
    }

    /// A datatyped literal.
    pub fn new_typed<T: Into<Arc<str>>>(lex: T, datatype: Iri) -> Self {
        Literal {
            lex: lex.into(),
            kind: LiteralKind::Typed(datatype),
        }
    }

    /// A language-tagged string.
    pub fn new_lang<T: Into<Arc<str>>>(lex: T, tag: LanguageTag) -> Self {
        Literal {
            lex: lex.into(),
            kind: LiteralKind::Lang(tag),
        }
    }

    /// The lexical form of this literal.
    pub fn lexical_form(&self) -> &str {
        &self.lex
    }

    /// The datatype IRI of this literal (`rdf:langString` for language-tagged strings).
    pub fn datatype(&self) -> &str {
        match &self.kind {
            LiteralKind::Typed(iri) => iri.as_str(),
            LiteralKind::Lang(_) => rdf::langString,
        }
    }

    /// The language tag of this literal, if any.
    pub fn language_tag(&self) -> Option<&LanguageTag> {
        match &self.kind {
            LiteralKind::Typed(_) => None,
            LiteralKind::Lang(tag) => Some(tag),
        }
    }

    /// What identifies this literal besides its lexical form.
    pub fn kind(&self) -> &LiteralKind {
        &self.kind
    }

    /// Whether the datatype of this literal is one of the XSD numeric datatypes.
    pub fn is_numeric(&self) -> bool {
        numeric_datatype(self.datatype()).is_some()
    }

    /// Interpret this literal as a number.
    ///
    /// Fails if the datatype is not numeric,
    /// or if the lexical form is not valid for the datatype.
    pub fn to_numeric(&self) -> Result<Numeric, NumericError> {
        let Some(family) = numeric_datatype(self.datatype()) else {
            return Err(NumericError::NotNumeric(self.datatype().to_string()));
        };
        let lex = self.lex.trim();
        let ill_typed = || NumericError::IllTyped {
            lex: self.lex.to_string(),
            datatype: self.datatype().to_string(),
        };
        match family {
            NumericFamily::Integer(min, max) => {
                let digits = lex.strip_prefix('+').unwrap_or(lex);
                if digits.is_empty() || digits.starts_with(['+', '-']) {
                    return Err(ill_typed());
                }
                let value: i128 = digits.parse().map_err(|_| ill_typed())?;
                if min.is_some_and(|min| value < min) || max.is_some_and(|max| value > max) {
                    return Err(ill_typed());
                }
                Ok(Numeric::Integer(value))
            }
            NumericFamily::Decimal => parse_decimal(lex).ok_or_else(ill_typed),
            NumericFamily::Floating => {
                let value = match lex {
                    "INF" | "+INF" => f64::INFINITY,
                    "-INF" => f64::NEG_INFINITY,
                    "NaN" => f64::NAN,
                    _ if lex.contains(|c: char| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => {
                        return Err(ill_typed());
                    }
                    _ => lex.parse().map_err(|_| ill_typed())?,
                };
                Ok(Numeric::Floating(value))
            }
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.lex.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c => write!(f, "{c}")?,
            }
        }
        f.write_str("\"")?;
        match &self.kind {
            LiteralKind::Typed(dt) if dt == xsd::string => Ok(()),
            LiteralKind::Typed(dt) => write!(f, "^^{dt}"),
            LiteralKind::Lang(tag) => write!(f, "@{tag}"),
        }
    }
}

/// The value of a numeric [`Literal`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Numeric {
    /// A value of `xsd:integer` or one of its derived types,
    /// or an `xsd:decimal` without fractional part.
    Integer(i128),
    /// An `xsd:decimal` with a non-null fractional part.
    Decimal(f64),
    /// A value of `xsd:float` or `xsd:double`.
    Floating(f64),
}

impl Numeric {
    /// Whether this number is equal to the integer `n`.
    pub fn equals_integer(&self, n: i64) -> bool {
        match *self {
            Numeric::Integer(i) => i == i128::from(n),
            Numeric::Decimal(_) => false,
            #[allow(clippy::cast_precision_loss)]
            Numeric::Floating(f) => f == n as f64,
        }
    }
}

/// This error is raised when a [`Literal`] can not be interpreted as a number.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NumericError {
    /// The datatype is not one of the XSD numeric datatypes
    #[error("<{0}> is not a numeric datatype")]
    NotNumeric(String),
    /// The lexical form is not valid for the datatype
    #[error("Ill-typed literal {lex:?}^^<{datatype}>")]
    IllTyped {
        /// The offending lexical form
        lex: String,
        /// The datatype
        datatype: String,
    },
}

enum NumericFamily {
    Integer(Option<i128>, Option<i128>),
    Decimal,
    Floating,
}

fn numeric_datatype(datatype: &str) -> Option<NumericFamily> {
    use NumericFamily::*;
    let suffix = datatype.strip_prefix(xsd::PREFIX)?;
    Some(match suffix {
        "integer" => Integer(None, None),
        "nonNegativeInteger" => Integer(Some(0), None),
        "positiveInteger" => Integer(Some(1), None),
        "nonPositiveInteger" => Integer(None, Some(0)),
        "negativeInteger" => Integer(None, Some(-1)),
        "long" => Integer(Some(i64::MIN.into()), Some(i64::MAX.into())),
        "int" => Integer(Some(i32::MIN.into()), Some(i32::MAX.into())),
        "short" => Integer(Some(i16::MIN.into()), Some(i16::MAX.into())),
        "byte" => Integer(Some(i8::MIN.into()), Some(i8::MAX.into())),
        "unsignedLong" => Integer(Some(0), Some(u64::MAX.into())),
        "unsignedInt" => Integer(Some(0), Some(u32::MAX.into())),
        "unsignedShort" => Integer(Some(0), Some(u16::MAX.into())),
        "unsignedByte" => Integer(Some(0), Some(u8::MAX.into())),
        "decimal" => Decimal,
        "float" | "double" => Floating,
        _ => return None,
    })
}

fn parse_decimal(lex: &str) -> Option<Numeric> {
    let unsigned = lex.strip_prefix(['+', '-']).unwrap_or(lex);
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    if frac_part.bytes().all(|b| b == b'0') {
        let int_part = if int_part.is_empty() { "0" } else { int_part };
        let value: i128 = int_part.parse().ok()?;
        Some(Numeric::Integer(if lex.starts_with('-') {
            -value
        } else {
            value
        }))
    } else {
        lex.parse().ok().map(Numeric::Decimal)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    fn typed(lex: &str, dt: &'static str) -> Literal {
        Literal::new_typed(lex, Iri::new_unchecked(dt))
    }

    #[test_case("1", xsd::nonNegativeInteger, 1)]
    #[test_case("+1", xsd::nonNegativeInteger, 1)]
    #[test_case(" 0 ", xsd::nonNegativeInteger, 0)]
    #[test_case("5", xsd::integer, 5)]
    #[test_case("-3", xsd::int, -3)]
    #[test_case("1.000", xsd::decimal, 1)]
    #[test_case("-2.0", xsd::decimal, -2)]
    #[test_case("1.0e0", xsd::double, 1)]
    #[test_case("1", xsd::float, 1)]
    fn numeric_equals(lex: &str, dt: &'static str, n: i64) {
        let num = typed(lex, dt).to_numeric().unwrap();
        assert!(num.equals_integer(n), "{num:?} != {n}");
    }

    #[test_case("1.5", xsd::decimal, 1)]
    #[test_case("2", xsd::integer, 1)]
    #[test_case("NaN", xsd::double, 0)]
    fn numeric_differs(lex: &str, dt: &'static str, n: i64) {
        let num = typed(lex, dt).to_numeric().unwrap();
        assert!(!num.equals_integer(n));
    }

    #[test_case("one", xsd::nonNegativeInteger; "word")]
    #[test_case("-1", xsd::nonNegativeInteger; "negative")]
    #[test_case("300", xsd::byte; "overflow")]
    #[test_case("", xsd::integer; "empty")]
    #[test_case("+-1", xsd::integer; "double sign")]
    #[test_case("1.2.3", xsd::decimal; "two dots")]
    #[test_case(".", xsd::decimal; "lone dot")]
    #[test_case("infinity", xsd::double; "bad infinity")]
    fn ill_typed(lex: &str, dt: &'static str) {
        assert!(matches!(
            typed(lex, dt).to_numeric(),
            Err(NumericError::IllTyped { .. })
        ));
    }

    #[test]
    fn not_numeric() {
        assert!(matches!(
            Literal::new_simple("1").to_numeric(),
            Err(NumericError::NotNumeric(_))
        ));
        let fr = Literal::new_lang("un", LanguageTag::new("fr").unwrap());
        assert!(!fr.is_numeric());
        assert!(fr.to_numeric().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Literal::new_simple("a \"b\"").to_string(), r#""a \"b\"""#);
        assert_eq!(
            typed("5", xsd::integer).to_string(),
            "\"5\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
        let en = Literal::new_lang("hello", LanguageTag::new("EN").unwrap());
        assert_eq!(en.to_string(), "\"hello\"@en");
        assert_eq!(en.datatype(), rdf::langString);
    }
}
