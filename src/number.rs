//! Precision-preserving JSON serialization for decimal values.
//!
//! JSON has no fixed numeric width, but most encoders round every number
//! through an `f64` on the way out, silently destroying digits past the
//! 53-bit significand. [`BigNumber`] wraps a [`BigDecimal`] and serializes
//! it as a raw JSON number token built from the exact decimal text, so a
//! value like `1234567890.12345678901234567890123456789` survives the trip
//! into the output document unchanged.
//!
//! The wrapper is write-only: it is constructed from an already-parsed
//! decimal and its entire contract is the `Serialize` impl. It performs no
//! arithmetic and no further parsing.
//!
//! ## Examples
//!
//! ```rust
//! use ini2json::BigNumber;
//! use bigdecimal::BigDecimal;
//! use std::str::FromStr;
//!
//! let decimal = BigDecimal::from_str("3.14").unwrap();
//! let number = BigNumber::new(decimal);
//! assert_eq!(serde_json::to_string(&number).unwrap(), "3.14");
//! ```

use bigdecimal::BigDecimal;
use serde::{Serialize, Serializer};
use std::fmt;

/// A decimal value that serializes to JSON without floating-point loss.
///
/// The JSON output is the exact decimal text of the wrapped value, emitted
/// as a bare number token (not a string). Exponent spellings accepted on
/// input normalize to plain decimal notation of equal value: `1e10`
/// serializes as `10000000000`.
///
/// # Examples
///
/// ```rust
/// use ini2json::BigNumber;
/// use bigdecimal::BigDecimal;
/// use std::str::FromStr;
///
/// let forty_digits = "1234567890.12345678901234567890123456789";
/// let number = BigNumber::new(BigDecimal::from_str(forty_digits).unwrap());
/// assert_eq!(serde_json::to_string(&number).unwrap(), forty_digits);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BigNumber(BigDecimal);

impl BigNumber {
    /// Wraps an already-parsed decimal value.
    #[must_use]
    pub fn new(value: BigDecimal) -> Self {
        BigNumber(value)
    }

    /// Returns a reference to the wrapped decimal.
    #[inline]
    #[must_use]
    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Unwraps the inner decimal value.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> BigDecimal {
        self.0
    }
}

impl From<BigDecimal> for BigNumber {
    fn from(value: BigDecimal) -> Self {
        BigNumber(value)
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for BigNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // serde_json's arbitrary_precision Number carries the digits as
        // text straight through to the encoder, bypassing f64 entirely.
        let number: serde_json::Number = self
            .0
            .to_string()
            .parse()
            .map_err(serde::ser::Error::custom)?;
        number.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn big(text: &str) -> BigNumber {
        BigNumber::new(BigDecimal::from_str(text).unwrap())
    }

    #[test]
    fn test_serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&big("3.14")).unwrap(), "3.14");
        assert_eq!(serde_json::to_string(&big("-0.5")).unwrap(), "-0.5");
    }

    #[test]
    fn test_forty_digit_golden_value() {
        let text = "1234567890.12345678901234567890123456789";
        assert_eq!(serde_json::to_string(&big(text)).unwrap(), text);
    }

    #[test]
    fn test_exponent_normalizes_to_plain_notation() {
        let json = serde_json::to_string(&big("1e10")).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed, serde_json::json!(10000000000u64));
    }

    #[test]
    fn test_value_exceeds_f64_precision() {
        let text = "0.10000000000000000000000000000000000001";
        let json = serde_json::to_string(&big(text)).unwrap();
        assert_eq!(json, text);
        // The same value through f64 would collapse to 0.1.
        assert_ne!(json, format!("{}", 0.1f64));
    }

    #[test]
    fn test_display_matches_decimal_text() {
        assert_eq!(big("2.5").to_string(), "2.5");
    }

    #[test]
    fn test_accessors() {
        let number = big("7.25");
        assert_eq!(number.as_decimal(), &BigDecimal::from_str("7.25").unwrap());
        assert_eq!(number.into_inner(), BigDecimal::from_str("7.25").unwrap());
    }
}
