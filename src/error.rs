//! Error types for the Binance client library.

use serde::Deserialize;
use thiserror::Error;

/// The main error type for all Binance client operations.
///
/// Every operation either returns a fully decoded value or exactly one of
/// these variants. Nothing is retried internally.
#[derive(Error, Debug)]
pub enum BinanceError {
    /// The client is not configured for the requested call
    /// (e.g. a signed endpoint without credentials).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network or TLS failure before an HTTP status was obtained.
    #[error("Connectivity error: {0}")]
    Connectivity(#[from] reqwest_middleware::Error),

    /// The venue answered with a non-2xx status.
    ///
    /// The body is preserved verbatim; see [`BinanceError::venue_error`].
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The response did not match the expected shape or numeric format.
    #[error("Failed to decode `{field}` from {endpoint}: {message}")]
    Decode {
        /// Endpoint path the response came from
        endpoint: String,
        /// Offending field (or `<body>` when the payload as a whole is malformed)
        field: String,
        /// What went wrong
        message: String,
    },

    /// The caller supplied an invalid combination of parameters.
    #[error("Invalid request: {0}")]
    Validation(String),
}

impl From<reqwest::Error> for BinanceError {
    fn from(err: reqwest::Error) -> Self {
        BinanceError::Connectivity(reqwest_middleware::Error::Reqwest(err))
    }
}

/// Classification tag for [`BinanceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`BinanceError::Configuration`]
    Configuration,
    /// See [`BinanceError::Connectivity`]
    Connectivity,
    /// See [`BinanceError::Http`]
    Http,
    /// See [`BinanceError::Decode`]
    Decode,
    /// See [`BinanceError::Validation`]
    Validation,
}

impl BinanceError {
    pub(crate) fn decode(
        endpoint: impl Into<String>,
        field: impl Into<String>,
        message: impl std::fmt::Display,
    ) -> Self {
        BinanceError::Decode {
            endpoint: endpoint.into(),
            field: field.into(),
            message: message.to_string(),
        }
    }

    /// Get the classification tag of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BinanceError::Configuration(_) => ErrorKind::Configuration,
            BinanceError::Connectivity(_) => ErrorKind::Connectivity,
            BinanceError::Http { .. } => ErrorKind::Http,
            BinanceError::Decode { .. } => ErrorKind::Decode,
            BinanceError::Validation(_) => ErrorKind::Validation,
        }
    }

    /// Get the HTTP status, if the venue answered with an error status.
    pub fn status(&self) -> Option<u16> {
        match self {
            BinanceError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parse the venue error payload carried by an [`BinanceError::Http`].
    ///
    /// Returns `None` for other variants or when the body is not a
    /// `{"code":..,"msg":..}` object.
    pub fn venue_error(&self) -> Option<VenueError> {
        match self {
            BinanceError::Http { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }

    /// Get the venue-supplied error code, if any.
    pub fn venue_code(&self) -> Option<i64> {
        self.venue_error().map(|e| e.code)
    }
}

/// Error payload returned by Binance in non-2xx response bodies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VenueError {
    /// Numeric error code (e.g. `-1121`)
    pub code: i64,
    /// Human-readable error message
    pub msg: String,
}

impl std::fmt::Display for VenueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.msg)
    }
}

impl VenueError {
    /// Check if this is a timestamp outside the receive window.
    pub fn is_timestamp_outside_recv_window(&self) -> bool {
        self.code == error_codes::INVALID_TIMESTAMP
    }

    /// Check if this is an invalid signature error.
    pub fn is_invalid_signature(&self) -> bool {
        self.code == error_codes::INVALID_SIGNATURE
    }

    /// Check if this is an unknown order error.
    pub fn is_unknown_order(&self) -> bool {
        self.code == error_codes::NO_SUCH_ORDER
    }

    /// Check if the venue rejected the request for too many requests.
    pub fn is_rate_limit(&self) -> bool {
        self.code == error_codes::TOO_MANY_REQUESTS
    }
}

/// Known Binance error codes for pattern matching.
pub mod error_codes {
    pub const UNKNOWN: i64 = -1000;
    pub const DISCONNECTED: i64 = -1001;
    pub const UNAUTHORIZED: i64 = -1002;
    pub const TOO_MANY_REQUESTS: i64 = -1003;
    pub const INVALID_TIMESTAMP: i64 = -1021;
    pub const INVALID_SIGNATURE: i64 = -1022;
    pub const ILLEGAL_CHARS: i64 = -1100;
    pub const MANDATORY_PARAM_EMPTY_OR_MALFORMED: i64 = -1102;
    pub const INVALID_SYMBOL: i64 = -1121;
    pub const NEW_ORDER_REJECTED: i64 = -2010;
    pub const CANCEL_REJECTED: i64 = -2011;
    pub const NO_SUCH_ORDER: i64 = -2013;
    pub const BAD_API_KEY_FMT: i64 = -2014;
    pub const REJECTED_MBX_KEY: i64 = -2015;
}
