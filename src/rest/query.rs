//! Query canonicalization and signing.
//!
//! All request parameters, including those of POST and DELETE calls, travel
//! in the query string. Request structs derive [`serde::Serialize`] with
//! absent options skipped, so encoding them yields the present parameters
//! in declaration order. The canonical string built here is both the HMAC
//! input and the exact text transmitted; the signature is appended to it
//! without re-encoding or reordering anything.

use std::fmt::Display;

use serde::Serialize;

use crate::auth::{Credentials, sign_query};
use crate::error::BinanceError;

/// Name of the parameter carrying the request time for signed calls.
pub const TIMESTAMP_PARAM: &str = "timestamp";
/// Name of the parameter carrying the HMAC signature.
pub const SIGNATURE_PARAM: &str = "signature";
/// Name of the receive window parameter.
pub const RECV_WINDOW_PARAM: &str = "recvWindow";

/// Percent-encode request parameters as `key=value` pairs joined by `&`.
///
/// ```rust
/// use binance_api_client::rest::{OrderBookRequest, encode_params};
///
/// let query = encode_params(&OrderBookRequest::new("BTCUSDT")).unwrap();
/// assert_eq!(query, "symbol=BTCUSDT");
/// ```
pub fn encode_params<P>(params: &P) -> Result<String, BinanceError>
where
    P: Serialize + ?Sized,
{
    serde_urlencoded::to_string(params).map_err(|e| BinanceError::Validation(e.to_string()))
}

/// Build the canonical query string from encoded parameters.
///
/// When `timestamp` is given (signed calls) it is appended as the final
/// parameter, and any `timestamp` or `signature` pairs already present are
/// dropped so that exactly one timestamp is transmitted.
pub fn canonicalize(encoded: &str, timestamp: Option<u64>) -> String {
    let Some(timestamp) = timestamp else {
        return encoded.to_string();
    };

    let mut query = encoded
        .split('&')
        .filter(|pair| {
            let key = param_key(pair);
            !key.is_empty() && key != TIMESTAMP_PARAM && key != SIGNATURE_PARAM
        })
        .collect::<Vec<_>>()
        .join("&");
    append_param(&mut query, TIMESTAMP_PARAM, timestamp);
    query
}

/// Check whether an encoded query carries `key`.
pub(crate) fn has_param(encoded: &str, key: &str) -> bool {
    encoded.split('&').any(|pair| param_key(pair) == key)
}

/// Append `key=value` to an encoded query.
///
/// Only for keys and values that need no percent-encoding.
pub(crate) fn append_param(query: &mut String, key: &str, value: impl Display) {
    if !query.is_empty() {
        query.push('&');
    }
    query.push_str(key);
    query.push('=');
    query.push_str(&value.to_string());
}

fn param_key(pair: &str) -> &str {
    pair.split_once('=').map_or(pair, |(key, _)| key)
}

/// Parameters of endpoints that take only a symbol.
#[derive(Debug, Serialize)]
pub(crate) struct SymbolParams<'a> {
    pub symbol: &'a str,
}

/// The final query string of a signed call: canonical parameters followed
/// by `signature=<hex>`.
///
/// Built per call and dropped once the request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedQuery {
    query: String,
    canonical_len: usize,
}

impl SignedQuery {
    /// Sign a canonical query and append the signature as the last parameter.
    pub fn sign(canonical: String, credentials: &Credentials) -> Result<Self, BinanceError> {
        let signature = sign_query(credentials, &canonical)?;
        let canonical_len = canonical.len();
        let mut query = canonical;
        append_param(&mut query, SIGNATURE_PARAM, &signature);
        Ok(Self {
            query,
            canonical_len,
        })
    }

    /// The full transmitted query string.
    pub fn as_str(&self) -> &str {
        &self.query
    }

    /// The signed portion of the query (everything before `signature`).
    pub fn canonical(&self) -> &str {
        &self.query[..self.canonical_len]
    }

    /// The hex signature.
    pub fn signature(&self) -> &str {
        let start = self.query.len() - 64;
        &self.query[start..]
    }

    /// Consume into the full query string.
    pub fn into_string(self) -> String {
        self.query
    }
}
