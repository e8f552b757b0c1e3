//! HMAC-SHA256 signature generation for Binance signed endpoints.
//!
//! Signed endpoints require a signature computed as:
//! ```text
//! hex(HMAC-SHA256(canonical_query, api_secret))
//! ```
//!
//! The canonical query already contains the `timestamp` parameter. The
//! signature is appended afterwards as the final `signature` parameter and
//! is never part of the signed payload itself.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::BinanceError;

type HmacSha256 = Hmac<Sha256>;

/// Sign a canonical query string.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret
/// * `canonical_query` - The exact encoded query that will be transmitted
///
/// # Returns
///
/// Lowercase hex-encoded HMAC-SHA256 digest (64 characters).
///
/// # Example
///
/// ```rust
/// use binance_api_client::auth::{Credentials, sign_query};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "api_secret");
/// let signature = sign_query(&credentials, "symbol=BTCUSDT&timestamp=1499827319559")?;
/// assert_eq!(signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign_query(credentials: &Credentials, canonical_query: &str) -> Result<String, BinanceError> {
    let secret = credentials.expose_secret();
    if secret.is_empty() {
        return Err(BinanceError::Configuration(
            "API secret is required for signed endpoints".to_string(),
        ));
    }

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| BinanceError::Configuration(format!("Invalid HMAC key: {e}")))?;
    mac.update(canonical_query.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Example key pair and query from the public Binance API documentation.
    const DOC_SECRET: &str = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";
    const DOC_QUERY: &str = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";

    #[test]
    fn test_signature_matches_published_vector() {
        let credentials = Credentials::new("key", DOC_SECRET);
        let signature = sign_query(&credentials, DOC_QUERY).unwrap();
        assert_eq!(
            signature,
            "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        );
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let credentials = Credentials::new("key", "my_secret");
        let signature = sign_query(&credentials, "timestamp=12345").unwrap();
        assert_eq!(signature.len(), 64);
        assert!(
            signature
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn test_signature_consistency() {
        let credentials = Credentials::new("key", "my_secret");
        let sig1 = sign_query(&credentials, "symbol=BTCUSDT&timestamp=12345").unwrap();
        let sig2 = sign_query(&credentials, "symbol=BTCUSDT&timestamp=12345").unwrap();
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn test_signature_changes_with_any_byte() {
        let credentials = Credentials::new("key", "my_secret");
        let sig1 = sign_query(&credentials, "symbol=BTCUSDT&timestamp=12345").unwrap();
        let sig2 = sign_query(&credentials, "symbol=BTCUSDT&timestamp=12346").unwrap();
        let sig3 = sign_query(&credentials, "symbol=BTCUSDS&timestamp=12345").unwrap();
        assert_ne!(sig1, sig2);
        assert_ne!(sig1, sig3);
    }

    #[test]
    fn test_signature_changes_with_secret() {
        let sig1 = sign_query(&Credentials::new("key", "secret_a"), "timestamp=1").unwrap();
        let sig2 = sign_query(&Credentials::new("key", "secret_b"), "timestamp=1").unwrap();
        assert_ne!(sig1, sig2);
    }

    #[test]
    fn test_empty_secret_is_configuration_error() {
        let credentials = Credentials::new("key", "");
        let result = sign_query(&credentials, "timestamp=1");
        assert!(matches!(result, Err(BinanceError::Configuration(_))));
    }
}
