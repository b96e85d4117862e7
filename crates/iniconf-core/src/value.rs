//! Typed read-side coercion.
//!
//! Every value in a store is text.  [`FromIni`] is the closed set of
//! conversions applied when a caller asks for a typed value: identity for
//! `String`, a fixed truth table for `bool`, and strict whole-string parses
//! for the primitive numeric types.
//!
//! "Strict" means the entire trimmed value must be consumed: `"123abc"` is
//! not the integer 123 followed by garbage, it is simply not an integer.
//! There is no partial-prefix truncation anywhere in this module.
//!
//! The write side needs no trait of its own — [`Store::set`] accepts any
//! `Display` type and stores its canonical text immediately.
//!
//! [`Store::set`]: crate::Store::set

use crate::text::trim::trim;

/// Conversion from stored INI text to a typed value.
///
/// `None` covers both "the text does not parse as `Self`" and — at the
/// call sites in [`Store`](crate::Store) — "the key is absent"; the two are
/// intentionally indistinguishable through the typed getters.
pub trait FromIni: Sized {
    /// Attempts to interpret `raw` as `Self`.
    fn from_ini(raw: &str) -> Option<Self>;
}

impl FromIni for String {
    /// Identity: the stored text, owned.
    fn from_ini(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl FromIni for bool {
    /// Case-insensitive truth table: `true`/`1` and `false`/`0`.
    ///
    /// Anything else — including `"yes"`, `"on"`, or `"2"` — is `None`, not
    /// `false`.
    fn from_ini(raw: &str) -> Option<Self> {
        match trim(raw).to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }
}

/// Strict whole-string `FromStr` parse of the trimmed value.
macro_rules! from_ini_via_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromIni for $ty {
                fn from_ini(raw: &str) -> Option<Self> {
                    trim(raw).parse::<$ty>().ok()
                }
            }
        )*
    };
}

from_ini_via_from_str!(i8, i16, i32, i64, i128, isize);
from_ini_via_from_str!(u8, u16, u32, u64, u128, usize);
from_ini_via_from_str!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_is_identity() {
        assert_eq!(String::from_ini("value"), Some("value".to_string()));
        assert_eq!(String::from_ini(""), Some(String::new()));
        assert_eq!(String::from_ini(" padded "), Some(" padded ".to_string()));
    }

    #[test]
    fn test_bool_truth_table() {
        assert_eq!(bool::from_ini("true"), Some(true));
        assert_eq!(bool::from_ini("True"), Some(true));
        assert_eq!(bool::from_ini("TRUE"), Some(true));
        assert_eq!(bool::from_ini("1"), Some(true));
        assert_eq!(bool::from_ini("false"), Some(false));
        assert_eq!(bool::from_ini("False"), Some(false));
        assert_eq!(bool::from_ini("0"), Some(false));
        assert_eq!(bool::from_ini(" true "), Some(true));
    }

    #[test]
    fn test_bool_rejects_everything_else() {
        for raw in ["maybe", "yes", "no", "on", "off", "2", "", "truefalse"] {
            assert_eq!(bool::from_ini(raw), None, "input {raw:?}");
        }
    }

    #[test]
    fn test_integer_parse_is_strict() {
        assert_eq!(i32::from_ini("123"), Some(123));
        assert_eq!(i32::from_ini("-42"), Some(-42));
        assert_eq!(i32::from_ini(" 123 "), Some(123));
        // Trailing garbage after a valid prefix is a failure, not truncation.
        assert_eq!(i32::from_ini("123abc"), None);
        assert_eq!(i32::from_ini("abc"), None);
        assert_eq!(i32::from_ini(""), None);
        assert_eq!(i32::from_ini("1 2"), None);
    }

    #[test]
    fn test_integer_parse_respects_type_range() {
        assert_eq!(u8::from_ini("255"), Some(255));
        assert_eq!(u8::from_ini("256"), None);
        assert_eq!(u8::from_ini("-1"), None);
        assert_eq!(i64::from_ini("9223372036854775807"), Some(i64::MAX));
    }

    #[test]
    fn test_float_parse() {
        assert_eq!(f64::from_ini("3.14"), Some(3.14));
        assert_eq!(f64::from_ini("33.1415926"), Some(33.1415926));
        assert_eq!(f64::from_ini("-0.5"), Some(-0.5));
        assert_eq!(f64::from_ini("1e3"), Some(1000.0));
        assert_eq!(f64::from_ini("xyz"), None);
        assert_eq!(f64::from_ini("1.5extra"), None);
    }
}
