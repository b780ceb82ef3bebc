//! Shared coercion core for both typed access surfaces.
//!
//! Every conversion from raw text to a semantic type happens here and
//! returns a discriminated result. The public wrappers decide the failure
//! policy: [`PropReader`](crate::PropReader) logs and substitutes a default,
//! [`PropBuilder`](crate::PropBuilder) records a message and continues.

use crate::store::PropStore;
use std::str::FromStr;

/// A failed coercion, carrying enough detail for either reporting policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Fault {
    /// The key is not present in the store.
    Missing,
    /// The value is present but not composed entirely of decimal digits,
    /// or overflows the requested integer type.
    NotNumeric { value: String },
    /// A comma-separated token did not match any enumerated value.
    IllegalToken { token: String },
}

/// A single unconvertible enum token, produced by [`parse_tokens`].
#[derive(Debug)]
pub(crate) struct BadToken(pub String);

impl From<BadToken> for Fault {
    fn from(bad: BadToken) -> Self {
        Fault::IllegalToken { token: bad.0 }
    }
}

impl Fault {
    /// Render the builder's error-set entry for this fault.
    pub(crate) fn builder_message(&self, key: &str) -> String {
        match self {
            Fault::Missing => format!("{key} : Does not exist in config file"),
            Fault::NotNumeric { .. } => format!("{key} : Is not a valid number"),
            Fault::IllegalToken { .. } => format!("{key} : Contains an illegal enum value"),
        }
    }
}

/// Fetch the raw value for a key, faulting when the key is absent.
pub(crate) fn lookup<'a>(store: &'a PropStore, key: &str) -> Result<&'a str, Fault> {
    store.get(key).ok_or(Fault::Missing)
}

/// True iff the value is non-empty and every character is an ASCII decimal
/// digit. No sign, no whitespace, no grouping separators.
pub(crate) fn is_decimal(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a digits-only value into the requested integer type.
///
/// A digits-only value that still fails to parse can only be overflowing
/// the target type; that is reported as the same `NotNumeric` fault rather
/// than allowed to escape.
pub(crate) fn parse_decimal<T: FromStr>(value: &str) -> Result<T, Fault> {
    if !is_decimal(value) {
        return Err(Fault::NotNumeric {
            value: value.to_string(),
        });
    }
    value.parse().map_err(|_| Fault::NotNumeric {
        value: value.to_string(),
    })
}

/// Lookup plus numeric parse in one step.
pub(crate) fn lookup_decimal<T: FromStr>(store: &PropStore, key: &str) -> Result<T, Fault> {
    parse_decimal(lookup(store, key)?)
}

/// Split a raw value on commas, trim each token, and convert every token
/// through the caller-declared `FromStr` implementation.
///
/// All-or-nothing: the first token that fails to convert aborts the whole
/// conversion and no partial output is produced.
pub(crate) fn parse_tokens<E: FromStr>(value: &str) -> Result<Vec<E>, BadToken> {
    value
        .split(',')
        .map(str::trim)
        .map(|token| E::from_str(token).map_err(|_| BadToken(token.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum Color {
        Red,
        Green,
    }

    impl FromStr for Color {
        type Err = ();

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "RED" => Ok(Color::Red),
                "GREEN" => Ok(Color::Green),
                _ => Err(()),
            }
        }
    }

    #[test]
    fn test_is_decimal() {
        assert!(is_decimal("0"));
        assert!(is_decimal("0042"));
        assert!(!is_decimal(""));
        assert!(!is_decimal("-1"));
        assert!(!is_decimal("+1"));
        assert!(!is_decimal(" 1"));
        assert!(!is_decimal("1.5"));
        assert!(!is_decimal("twelve"));
    }

    #[test]
    fn test_parse_decimal_exact() {
        assert_eq!(parse_decimal::<i32>("42"), Ok(42));
        assert_eq!(parse_decimal::<i64>("9223372036854775807"), Ok(i64::MAX));
    }

    #[test]
    fn test_parse_decimal_rejects_text() {
        assert_eq!(
            parse_decimal::<i32>("abc"),
            Err(Fault::NotNumeric {
                value: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_overflow_is_not_numeric() {
        // digits-only but exceeds i32 range
        assert_eq!(
            parse_decimal::<i32>("99999999999"),
            Err(Fault::NotNumeric {
                value: "99999999999".to_string()
            })
        );
    }

    #[test]
    fn test_parse_tokens_trims_each() {
        let colors: Vec<Color> = parse_tokens("RED, GREEN ,RED").unwrap();
        assert_eq!(colors, vec![Color::Red, Color::Green, Color::Red]);
    }

    #[test]
    fn test_parse_tokens_all_or_nothing() {
        let result: Result<Vec<Color>, _> = parse_tokens("RED,BLUE");
        assert_eq!(result.unwrap_err().0, "BLUE");
    }

    #[test]
    fn test_builder_messages() {
        assert_eq!(
            Fault::Missing.builder_message("db.host"),
            "db.host : Does not exist in config file"
        );
        assert_eq!(
            Fault::NotNumeric {
                value: "x".to_string()
            }
            .builder_message("db.port"),
            "db.port : Is not a valid number"
        );
        assert_eq!(
            Fault::IllegalToken {
                token: "x".to_string()
            }
            .builder_message("channels"),
            "channels : Contains an illegal enum value"
        );
    }
}
