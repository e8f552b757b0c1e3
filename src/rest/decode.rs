//! Response decoding.
//!
//! Response records derive [`serde::Deserialize`]; decimal fields go through
//! [`crate::types::serde_helpers`] so they keep their exact wire digits.
//! Deserialization is tracked with `serde_path_to_error`, so a failure names
//! the endpoint and the path of the offending field (`bids[1][0]`,
//! `[0][8]`, `symbol`) instead of just a line and column.

use serde::de::DeserializeOwned;

use crate::error::BinanceError;

/// Field name used when the failure concerns the body as a whole.
pub(crate) const BODY: &str = "<body>";

/// Decode the body of a 2xx response into `T`.
///
/// An empty body is an error, never a default value.
pub(crate) fn decode_body<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<T, BinanceError> {
    if body.trim().is_empty() {
        return Err(BinanceError::decode(endpoint, BODY, "empty response body"));
    }

    let mut deserializer = serde_json::Deserializer::from_str(body);
    let value = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| located_error(endpoint, e))?;
    deserializer
        .end()
        .map_err(|e| BinanceError::decode(endpoint, BODY, e))?;
    Ok(value)
}

fn located_error(endpoint: &str, error: serde_path_to_error::Error<serde_json::Error>) -> BinanceError {
    let path = error.path().to_string();
    let inner = error.into_inner();

    // The root path renders as ".".
    let mut field = if path == "." { String::new() } else { path };
    if inner.is_data() {
        if let Some(name) = missing_field_name(&inner.to_string()) {
            if !field.is_empty() {
                field.push('.');
            }
            field.push_str(name);
        }
    }
    if field.is_empty() {
        field.push_str(BODY);
    }

    BinanceError::decode(endpoint, field, inner)
}

/// Extract `x` from serde's "missing field `x`" message.
fn missing_field_name(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")?
        .split('`')
        .next()
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde::Deserialize;

    use crate::types::serde_helpers::{ExactDecimal, exact_decimal};

    #[derive(Debug, Deserialize)]
    struct Ack {
        symbol: String,
        #[serde(rename = "orderId")]
        order_id: u64,
    }

    #[derive(Debug, Deserialize)]
    struct Book {
        bids: Vec<(ExactDecimal, ExactDecimal)>,
    }

    #[derive(Debug, Deserialize)]
    struct Quote {
        #[serde(deserialize_with = "exact_decimal::deserialize")]
        price: Decimal,
    }

    fn decode_error_field(err: BinanceError) -> (String, String) {
        match err {
            BinanceError::Decode {
                endpoint, field, ..
            } => (endpoint, field),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_body_is_decode_error() {
        let err = decode_body::<Ack>("/api/v3/order", "  ").unwrap_err();
        let (endpoint, field) = decode_error_field(err);
        assert_eq!(endpoint, "/api/v3/order");
        assert_eq!(field, "<body>");
    }

    #[test]
    fn test_malformed_json_is_located_at_body() {
        let err = decode_body::<Ack>("/api/v3/order", "<html>").unwrap_err();
        let (_, field) = decode_error_field(err);
        assert_eq!(field, "<body>");
    }

    #[test]
    fn test_missing_field_is_named() {
        let err = decode_body::<Ack>("/api/v3/order", "{}").unwrap_err();
        let (_, field) = decode_error_field(err);
        assert_eq!(field, "symbol");

        let err = decode_body::<Ack>("/api/v3/order", r#"{"symbol":"BTCUSDT"}"#).unwrap_err();
        let (_, field) = decode_error_field(err);
        assert_eq!(field, "orderId");
    }

    #[test]
    fn test_nested_paths() {
        let body = r#"{"bids": [["0.1", "2"], ["x", "3"]]}"#;
        let err = decode_body::<Book>("/api/v1/depth", body).unwrap_err();
        let (endpoint, field) = decode_error_field(err);
        assert_eq!(endpoint, "/api/v1/depth");
        assert_eq!(field, "bids[1][0]");

        let book: Book = decode_body("/api/v1/depth", r#"{"bids": [["0.1", "2"]]}"#).unwrap();
        assert_eq!(book.bids[0].0.0, dec!(0.1));
    }

    #[test]
    fn test_non_plain_decimal_is_decode_error() {
        for wire in ["1_000", ".5", "5.", "+5", "1e2"] {
            let body = format!(r#"{{"price":"{wire}"}}"#);
            let err = decode_body::<Quote>("/api/v1/ticker/allPrices", &body).unwrap_err();
            let (_, field) = decode_error_field(err);
            assert_eq!(field, "price", "for {wire}");
        }
    }

    #[test]
    fn test_trailing_data_is_rejected() {
        let err = decode_body::<Ack>("/api/v3/order", r#"{"symbol":"A","orderId":1} x"#).unwrap_err();
        let (_, field) = decode_error_field(err);
        assert_eq!(field, "<body>");
    }
}
