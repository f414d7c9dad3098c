//! Typed value representation for INI field values.
//!
//! This module provides the [`Value`] enum, the typed form a raw INI value
//! takes on its way into a JSON document, and the classification routine
//! [`Value::infer`] that picks the form.
//!
//! ## Core Types
//!
//! - [`Value`]: a tagged union over the five JSON-representable shapes a
//!   raw string can take (big integer, big decimal, boolean, arbitrary
//!   JSON value, plain string)
//! - [`BigNumber`]: the precision-preserving decimal wrapper (re-exported
//!   from [`crate::number`])
//!
//! ## Classification
//!
//! [`Value::infer`] tries each shape in a fixed priority order and the
//! first match wins. Classification is total: the string fallback accepts
//! anything, so inference never fails and never panics.
//!
//! ```rust
//! use ini2json::Value;
//!
//! assert!(Value::infer("8080").is_int());
//! assert!(Value::infer("3.14").is_decimal());
//! assert_eq!(Value::infer("true").as_bool(), Some(true));
//! assert!(Value::infer("[1,2]").is_json());
//! assert_eq!(Value::infer("0x10").as_str(), Some("0x10"));
//! ```
//!
//! ## Serialization
//!
//! `Value` implements [`Serialize`] with a single match over the tag, so
//! the JSON encoder has exactly one dispatch point. Integers and decimals
//! take the raw-number path through `serde_json::Number` and never pass
//! through an `f64`.

use crate::BigNumber;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;
use std::fmt;

/// The typed form of one raw INI value.
///
/// Exactly one variant is chosen per value; nothing is ever stored in more
/// than one representation.
///
/// # Examples
///
/// ```rust
/// use ini2json::Value;
///
/// let port = Value::infer("8080");
/// let debug = Value::infer("true");
/// let name = Value::infer("alice");
///
/// assert!(port.is_int());
/// assert!(debug.is_bool());
/// assert!(name.is_string());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Base-10 integer of unbounded magnitude
    Int(BigInt),
    /// Decimal number held exactly, serialized without f64 rounding
    Decimal(BigNumber),
    /// Boolean literal
    Bool(bool),
    /// A complete JSON document embedded as a field value
    Json(JsonValue),
    /// Verbatim fallback when nothing else matches
    String(String),
}

impl Value {
    /// Classifies a raw string into its typed form.
    ///
    /// Candidates are tried in priority order and the first match wins:
    ///
    /// 1. **Integer** — the whole string is a base-10 integer literal
    ///    (optional sign, digits only). Stored at unbounded magnitude, so
    ///    integer-looking strings never lose precision through a float
    ///    path.
    /// 2. **Decimal** — the whole string is a decimal literal, optionally
    ///    with a fractional part and an `e`/`E` exponent. `1e10` lands
    ///    here. Held exactly, never rounded.
    /// 3. **Boolean** — exactly `true` or `false`, per Rust's boolean
    ///    literal grammar. Other spellings (`True`, `TRUE`, `t`) are not
    ///    booleans and fall through.
    /// 4. **JSON** — the whole string parses as one standalone JSON
    ///    document: `null`, arrays, objects, quoted strings, and number
    ///    spellings the earlier steps rejected.
    /// 5. **String** — anything else, verbatim. `0x10` is not a base-10
    ///    integer, not a decimal, not a boolean, and not valid JSON, so it
    ///    stays the literal string `0x10`. The empty string fails every
    ///    parse (empty input is not a JSON document) and stays empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini2json::Value;
    ///
    /// assert!(Value::infer("-42").is_int());
    /// assert!(Value::infer("1e10").is_decimal());
    /// assert_eq!(Value::infer("false").as_bool(), Some(false));
    /// assert!(Value::infer("null").is_json());
    /// assert_eq!(Value::infer("").as_str(), Some(""));
    /// assert_eq!(Value::infer("True").as_str(), Some("True"));
    /// ```
    #[must_use]
    pub fn infer(raw: &str) -> Value {
        if let Ok(int) = raw.parse::<BigInt>() {
            return Value::Int(int);
        }
        if let Ok(decimal) = raw.parse::<BigDecimal>() {
            return Value::Decimal(BigNumber::new(decimal));
        }
        if let Ok(boolean) = raw.parse::<bool>() {
            return Value::Bool(boolean);
        }
        if let Ok(json) = serde_json::from_str::<JsonValue>(raw) {
            return Value::Json(json);
        }
        Value::String(raw.to_string())
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns `true` if the value is a decimal.
    #[inline]
    #[must_use]
    pub const fn is_decimal(&self) -> bool {
        matches!(self, Value::Decimal(_))
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is an embedded JSON document.
    #[inline]
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Value::Json(_))
    }

    /// Returns `true` if the value is a plain string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// If the value is an integer, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            Value::Int(int) => Some(int),
            _ => None,
        }
    }

    /// If the value is a decimal, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_decimal(&self) -> Option<&BigNumber> {
        match self {
            Value::Decimal(decimal) => Some(decimal),
            _ => None,
        }
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini2json::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_bool(), Some(true));
    /// assert_eq!(Value::infer("8080").as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(boolean) => Some(*boolean),
            _ => None,
        }
    }

    /// If the value is an embedded JSON document, returns a reference to it.
    /// Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_json(&self) -> Option<&JsonValue> {
        match self {
            Value::Json(json) => Some(json),
            _ => None,
        }
    }

    /// If the value is a plain string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(string) => Some(string),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(int) => write!(f, "{}", int),
            Value::Decimal(decimal) => write!(f, "{}", decimal),
            Value::Bool(boolean) => write!(f, "{}", boolean),
            Value::Json(json) => write!(f, "{}", json),
            Value::String(string) => f.write_str(string),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // Big integers take the same raw-number path as decimals so
            // that magnitudes past i64/u64 still emit as bare numbers.
            Value::Int(int) => {
                let number: serde_json::Number = int
                    .to_string()
                    .parse()
                    .map_err(serde::ser::Error::custom)?;
                number.serialize(serializer)
            }
            Value::Decimal(decimal) => decimal.serialize(serializer),
            Value::Bool(boolean) => serializer.serialize_bool(*boolean),
            Value::Json(json) => json.serialize(serializer),
            Value::String(string) => serializer.serialize_str(string),
        }
    }
}

// From implementations for building values programmatically
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(BigInt::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(BigInt::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(BigInt::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Int(BigInt::from(value))
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Int(value)
    }
}

impl From<BigDecimal> for Value {
    fn from(value: BigDecimal) -> Self {
        Value::Decimal(BigNumber::new(value))
    }
}

impl From<BigNumber> for Value {
    fn from(value: BigNumber) -> Self {
        Value::Decimal(value)
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        Value::Json(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_infer_integers() {
        assert_eq!(Value::infer("8080"), Value::from(8080));
        assert_eq!(Value::infer("-42"), Value::from(-42));
        assert_eq!(Value::infer("+7"), Value::from(7));
        assert_eq!(Value::infer("0"), Value::from(0));
    }

    #[test]
    fn test_infer_big_integers_keep_magnitude() {
        let digits = "123456789012345678901234567890123456789";
        let value = Value::infer(digits);
        assert_eq!(value.as_int().map(|i| i.to_string()), Some(digits.into()));
    }

    #[test]
    fn test_infer_decimals() {
        assert!(Value::infer("3.14").is_decimal());
        assert!(Value::infer("-0.5").is_decimal());
        // Exponent spellings are decimals, not JSON leftovers.
        assert!(Value::infer("1e10").is_decimal());
        assert!(Value::infer("2.5E-3").is_decimal());
    }

    #[test]
    fn test_integer_strings_never_take_the_decimal_path() {
        // Order matters: a decimal parser would also accept "42".
        assert!(Value::infer("42").is_int());
        assert!(!Value::infer("42").is_decimal());
    }

    #[test]
    fn test_infer_booleans() {
        assert_eq!(Value::infer("true"), Value::Bool(true));
        assert_eq!(Value::infer("false"), Value::Bool(false));
        // Only exact lowercase spellings are booleans.
        assert_eq!(Value::infer("True"), Value::String("True".into()));
        assert_eq!(Value::infer("TRUE"), Value::String("TRUE".into()));
        assert_eq!(Value::infer("t"), Value::String("t".into()));
    }

    #[test]
    fn test_infer_json_documents() {
        assert_eq!(Value::infer("null"), Value::Json(JsonValue::Null));
        assert_eq!(Value::infer("[1,2]"), Value::Json(json!([1, 2])));
        assert_eq!(Value::infer(r#"{"a":1}"#), Value::Json(json!({"a": 1})));
        assert_eq!(Value::infer(r#""quoted""#), Value::Json(json!("quoted")));
    }

    #[test]
    fn test_infer_string_fallback() {
        assert_eq!(Value::infer("0x10"), Value::String("0x10".into()));
        assert_eq!(Value::infer(""), Value::String(String::new()));
        assert_eq!(Value::infer("hello world"), Value::String("hello world".into()));
        assert_eq!(Value::infer("127.0.0.1"), Value::String("127.0.0.1".into()));
    }

    #[test]
    fn test_serialize_dispatch() {
        assert_eq!(serde_json::to_string(&Value::infer("8080")).unwrap(), "8080");
        assert_eq!(serde_json::to_string(&Value::infer("3.14")).unwrap(), "3.14");
        assert_eq!(serde_json::to_string(&Value::infer("true")).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Value::infer("null")).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&Value::infer("[1,2]")).unwrap(),
            "[1,2]"
        );
        assert_eq!(
            serde_json::to_string(&Value::infer("0x10")).unwrap(),
            r#""0x10""#
        );
    }

    #[test]
    fn test_serialize_big_integer_as_bare_number() {
        let digits = "123456789012345678901234567890123456789";
        let json = serde_json::to_string(&Value::infer(digits)).unwrap();
        assert_eq!(json, digits);
    }

    #[test]
    fn test_integer_roundtrip_is_canonical() {
        let value = Value::infer("0042");
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "42");
        assert_eq!(Value::infer(&json), value);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::infer("8080").as_int().map(ToString::to_string), Some("8080".into()));
        assert_eq!(Value::infer("3.5").as_decimal().map(ToString::to_string), Some("3.5".into()));
        assert_eq!(Value::infer("true").as_bool(), Some(true));
        assert_eq!(Value::infer("null").as_json(), Some(&JsonValue::Null));
        assert_eq!(Value::infer("hi").as_str(), Some("hi"));
        assert_eq!(Value::infer("hi").as_bool(), None);
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i64), Value::Int(BigInt::from(42)));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(
            Value::from(json!([1])),
            Value::Json(json!([1]))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::infer("8080").to_string(), "8080");
        assert_eq!(Value::infer("true").to_string(), "true");
        assert_eq!(Value::infer("plain").to_string(), "plain");
        assert_eq!(Value::infer("[1,2]").to_string(), "[1,2]");
    }
}
