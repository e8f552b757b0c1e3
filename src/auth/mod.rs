//! Authentication module for Binance signed endpoints.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Timestamp generation for the receive-window check
//! - HMAC-SHA256 signature generation for signed requests

mod credentials;
mod signature;
mod timestamp;

pub use credentials::{
    API_KEY_ENV, API_SECRET_ENV, Credentials, CredentialsProvider, EnvCredentials,
    StaticCredentials,
};
pub use signature::sign_query;
pub use timestamp::{FixedTimestamp, SystemClock, TimestampProvider};
