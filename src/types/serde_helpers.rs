//! Serde helpers for Binance's numeric string fields.
//!
//! Prices and quantities arrive as JSON strings such as `"0.00001000"`.
//! They are decoded into [`Decimal`] keeping every digit, so the value
//! formats back to the exact wire string.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, de};

/// Parse a wire numeric string into an exact decimal.
///
/// Only plain notation is accepted: an optional `-`, integer digits without
/// leading zeros, and an optional fraction. Signs, exponents, separators and
/// bare `.` forms are rejected, as is anything with more digits than a
/// [`Decimal`] can hold.
///
/// ```rust
/// use binance_api_client::types::parse_decimal;
///
/// assert_eq!(parse_decimal("4.00000200").unwrap().to_string(), "4.00000200");
/// assert!(parse_decimal("1e2").is_err());
/// ```
pub fn parse_decimal(s: &str) -> Result<Decimal, rust_decimal::Error> {
    if !is_plain_decimal(s) {
        return Err(rust_decimal::Error::ErrorString(format!(
            "malformed decimal string `{s}`"
        )));
    }
    Decimal::from_str_exact(s)
}

fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    digits(int) && (int == "0" || !int.starts_with('0')) && frac.is_none_or(digits)
}

/// A decimal decoded from a wire string with [`parse_decimal`].
///
/// Used directly for positional array elements; named fields go through
/// [`exact_decimal`] and [`exact_decimal_option`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactDecimal(pub Decimal);

impl<'de> Deserialize<'de> for ExactDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ExactDecimalVisitor;

        impl de::Visitor<'_> for ExactDecimalVisitor {
            type Value = ExactDecimal;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_decimal(value).map(ExactDecimal).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ExactDecimalVisitor)
    }
}

/// Deserialize a required decimal string field.
///
/// ```rust
/// use rust_decimal::Decimal;
/// use serde::Deserialize;
/// use binance_api_client::types::serde_helpers::exact_decimal;
///
/// #[derive(Deserialize)]
/// struct Price {
///     #[serde(deserialize_with = "exact_decimal::deserialize")]
///     price: Decimal,
/// }
///
/// let price: Price = serde_json::from_str(r#"{"price":"0.00001000"}"#).unwrap();
/// assert_eq!(price.price.to_string(), "0.00001000");
/// ```
pub mod exact_decimal {
    use super::*;

    /// Deserialize a decimal string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        ExactDecimal::deserialize(deserializer).map(|d| d.0)
    }
}

/// Deserialize an optional decimal string field; `null` is `None`.
///
/// Pair with `#[serde(default)]` so a missing field is `None` too.
pub mod exact_decimal_option {
    use super::*;

    /// Deserialize an optional decimal string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<ExactDecimal>::deserialize(deserializer).map(|d| d.map(|d| d.0))
    }
}
