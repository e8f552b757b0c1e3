//! Binance REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::{CredentialsProvider, SystemClock, TimestampProvider};
use crate::error::BinanceError;
use crate::rest::decode::decode_body;
use crate::rest::endpoints::{API_KEY_HEADER, BINANCE_BASE_URL};
use crate::rest::query::{
    RECV_WINDOW_PARAM, SignedQuery, append_param, canonicalize, encode_params, has_param,
};

/// Everything needed to dispatch one call.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    /// HTTP method.
    pub method: Method,
    /// Endpoint path (e.g. `/api/v3/order`).
    pub endpoint: &'static str,
    /// Whether the call must carry a timestamp, signature and API key.
    pub signed: bool,
    /// Encoded caller parameters, in declaration order.
    pub params: String,
}

impl RequestSpec {
    /// A public GET request.
    pub fn public(endpoint: &'static str) -> Self {
        Self {
            method: Method::GET,
            endpoint,
            signed: false,
            params: String::new(),
        }
    }

    /// A signed request.
    pub fn signed(method: Method, endpoint: &'static str) -> Self {
        Self {
            method,
            endpoint,
            signed: true,
            params: String::new(),
        }
    }

    /// Set the caller parameters from a serializable request.
    pub fn params<P>(mut self, params: &P) -> Result<Self, BinanceError>
    where
        P: Serialize + ?Sized,
    {
        self.params = encode_params(params)?;
        Ok(self)
    }
}

/// The Binance REST API client.
///
/// Credentials are fixed at construction and only read afterwards, so a
/// client can be cloned and shared between tasks freely. Each call is a
/// single request/response round trip: nothing is retried and no venue
/// error code is interpreted.
///
/// # Example
///
/// ```rust,no_run
/// use binance_api_client::rest::BinanceRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = BinanceRestClient::new();
///
///     let book = client.get_order_book(&"BTCUSDT".into()).await?;
///     println!("Best bid: {:?}", book.bids.first());
///
///     Ok(())
/// }
/// ```
///
/// For signed endpoints, provide credentials:
///
/// ```rust,no_run
/// use binance_api_client::rest::BinanceRestClient;
/// use binance_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
///     let client = BinanceRestClient::builder()
///         .credentials(credentials)
///         .recv_window(5_000)
///         .build();
///
///     let account = client.account_info().await?;
///     println!("Balances: {:?}", account.balances);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BinanceRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Arc<dyn TimestampProvider>,
    recv_window: Option<u64>,
}

impl BinanceRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`BinanceRestClient::builder()`] to configure credentials for signed endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> BinanceRestClientBuilder {
        BinanceRestClientBuilder::new()
    }

    /// Whether credentials are configured.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Build the query string that will be transmitted for `spec`.
    ///
    /// For signed calls this takes the timestamp, so it must run at
    /// dispatch time.
    fn build_query(&self, spec: &RequestSpec) -> Result<(String, Option<HeaderValue>), BinanceError> {
        if !spec.signed {
            return Ok((canonicalize(&spec.params, None), None));
        }

        let credentials = self
            .credentials
            .as_ref()
            .ok_or_else(|| {
                BinanceError::Configuration(format!(
                    "API key and secret required for signed endpoint {}",
                    spec.endpoint
                ))
            })?
            .get_credentials();
        if !credentials.is_complete() {
            return Err(BinanceError::Configuration(format!(
                "API key and secret must not be empty for signed endpoint {}",
                spec.endpoint
            )));
        }

        let mut api_key = HeaderValue::from_str(&credentials.api_key)
            .map_err(|e| BinanceError::Configuration(format!("Invalid API key header value: {e}")))?;
        api_key.set_sensitive(true);

        let mut params = spec.params.clone();
        if let Some(recv_window) = self.recv_window {
            if !has_param(&params, RECV_WINDOW_PARAM) {
                append_param(&mut params, RECV_WINDOW_PARAM, recv_window);
            }
        }

        let timestamp = self.timestamp_provider.now_millis();
        let canonical = canonicalize(&params, Some(timestamp));
        let signed = SignedQuery::sign(canonical, credentials)?;

        Ok((signed.into_string(), Some(api_key)))
    }

    /// Perform one HTTP round trip and return the raw body of a 2xx response.
    ///
    /// Non-2xx responses become [`BinanceError::Http`] with the body kept
    /// verbatim; transport failures become [`BinanceError::Connectivity`].
    pub async fn dispatch(&self, spec: &RequestSpec) -> Result<String, BinanceError> {
        let (query, api_key) = self.build_query(spec)?;

        let url = if query.is_empty() {
            format!("{}{}", self.base_url, spec.endpoint)
        } else {
            format!("{}{}?{}", self.base_url, spec.endpoint, query)
        };

        tracing::debug!(
            method = %spec.method,
            endpoint = spec.endpoint,
            signed = spec.signed,
            "Dispatching request"
        );

        let mut request = self.http_client.request(spec.method.clone(), &url);
        if let Some(api_key) = api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await.map_err(BinanceError::from);

        classify(status, spec.endpoint, body)
    }

    /// Dispatch and decode the body into a response record.
    pub(crate) async fn call<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T, BinanceError> {
        let body = self.dispatch(&spec).await?;
        decode_body(spec.endpoint, &body)
    }
}

/// Turn a received status and body into the call outcome.
///
/// Once a non-2xx status is known the call is an HTTP error, even if the
/// body could not be read.
fn classify(
    status: StatusCode,
    endpoint: &str,
    body: Result<String, BinanceError>,
) -> Result<String, BinanceError> {
    if status.is_success() {
        return body;
    }

    tracing::warn!(status = status.as_u16(), endpoint, "Request failed");
    let body = body.unwrap_or_else(|e| {
        tracing::warn!(error = %e, endpoint, "Failed to read error response body");
        String::new()
    });
    Err(BinanceError::Http {
        status: status.as_u16(),
        body,
    })
}

impl Default for BinanceRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BinanceRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .field("recv_window", &self.recv_window)
            .finish()
    }
}

/// Builder for [`BinanceRestClient`].
pub struct BinanceRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Option<Arc<dyn TimestampProvider>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    recv_window: Option<u64>,
    accept_invalid_certs: bool,
}

impl BinanceRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: BINANCE_BASE_URL.to_string(),
            credentials: None,
            timestamp_provider: None,
            user_agent: None,
            timeout: None,
            recv_window: None,
            accept_invalid_certs: false,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the credentials provider for signed requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom timestamp provider.
    pub fn timestamp_provider(mut self, provider: Arc<dyn TimestampProvider>) -> Self {
        self.timestamp_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a total timeout for each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the default receive window (milliseconds) for signed requests
    /// that do not specify one.
    pub fn recv_window(mut self, millis: u64) -> Self {
        self.recv_window = Some(millis);
        self
    }

    /// Disable TLS certificate verification.
    ///
    /// **Only for trusted test environments.** With this enabled any
    /// certificate is accepted, including ones presented by an attacker.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Build the client.
    pub fn build(self) -> BinanceRestClient {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("binance-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("binance-api-client"));
        headers.insert(USER_AGENT, header_value);

        if self.accept_invalid_certs {
            tracing::warn!("TLS certificate verification is disabled");
        }

        let mut reqwest_builder = reqwest::Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(self.accept_invalid_certs);
        if let Some(timeout) = self.timeout {
            reqwest_builder = reqwest_builder.timeout(timeout);
        }
        let reqwest_client = reqwest_builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to default HTTP client");
            reqwest::Client::new()
        });

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let timestamp_provider = self
            .timestamp_provider
            .unwrap_or_else(|| Arc::new(SystemClock));

        BinanceRestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            timestamp_provider,
            recv_window: self.recv_window,
        }
    }
}

impl Default for BinanceRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{FixedTimestamp, StaticCredentials};

    fn signed_client() -> BinanceRestClient {
        BinanceRestClient::builder()
            .credentials(Arc::new(StaticCredentials::new("key", "secret")))
            .timestamp_provider(Arc::new(FixedTimestamp(1_700_000_000_000)))
            .build()
    }

    #[test]
    fn test_public_query_has_no_timestamp() {
        let client = BinanceRestClient::new();
        let spec = RequestSpec::public("/api/v1/depth")
            .params(&[("symbol", "BTCUSDT")])
            .unwrap();
        let (query, api_key) = client.build_query(&spec).unwrap();
        assert_eq!(query, "symbol=BTCUSDT");
        assert!(api_key.is_none());
    }

    #[test]
    fn test_signed_query_layout() {
        let client = signed_client();
        let spec = RequestSpec::signed(Method::GET, "/api/v3/openOrders")
            .params(&[("symbol", "BTCUSDT")])
            .unwrap();
        let (query, api_key) = client.build_query(&spec).unwrap();
        let (canonical, signature) = query.split_once("&signature=").unwrap();
        assert_eq!(canonical, "symbol=BTCUSDT&timestamp=1700000000000");
        assert_eq!(signature.len(), 64);
        assert!(api_key.unwrap().is_sensitive());
    }

    #[test]
    fn test_default_recv_window_is_applied() {
        let client = BinanceRestClient::builder()
            .credentials(Arc::new(StaticCredentials::new("key", "secret")))
            .timestamp_provider(Arc::new(FixedTimestamp(1)))
            .recv_window(5_000)
            .build();

        let spec = RequestSpec::signed(Method::GET, "/api/v3/account");
        let (query, _) = client.build_query(&spec).unwrap();
        assert!(query.starts_with("recvWindow=5000&timestamp=1&signature="));

        let spec = RequestSpec::signed(Method::GET, "/api/v3/account")
            .params(&[("recvWindow", 1_000u64)])
            .unwrap();
        let (query, _) = client.build_query(&spec).unwrap();
        assert!(query.starts_with("recvWindow=1000&timestamp=1&signature="));
    }

    #[test]
    fn test_signed_without_credentials_is_configuration_error() {
        let client = BinanceRestClient::new();
        let spec = RequestSpec::signed(Method::GET, "/api/v3/account");
        let err = client.build_query(&spec).unwrap_err();
        assert!(matches!(err, BinanceError::Configuration(_)));
    }

    #[test]
    fn test_signed_with_empty_secret_is_configuration_error() {
        let client = BinanceRestClient::builder()
            .credentials(Arc::new(StaticCredentials::new("key", "")))
            .build();
        let spec = RequestSpec::signed(Method::GET, "/api/v3/account");
        let err = client.build_query(&spec).unwrap_err();
        assert!(matches!(err, BinanceError::Configuration(_)));
    }

    #[test]
    fn test_recv_window_is_omitted_when_unset() {
        let client = signed_client();
        let spec = RequestSpec::signed(Method::GET, "/api/v3/account");
        let (query, _) = client.build_query(&spec).unwrap();
        assert!(query.starts_with("timestamp=1700000000000&signature="));
    }

    #[test]
    fn test_success_status_returns_body() {
        let body = classify(StatusCode::OK, "/api/v3/time", Ok("{}".to_string())).unwrap();
        assert_eq!(body, "{}");
    }

    #[test]
    fn test_error_status_keeps_body_verbatim() {
        let body = r#"{"code":-1121,"msg":"Invalid symbol."}"#;
        let err = classify(StatusCode::BAD_REQUEST, "/api/v3/order", Ok(body.to_string()))
            .unwrap_err();
        match err {
            BinanceError::Http { status, body: kept } => {
                assert_eq!(status, 400);
                assert_eq!(kept, body);
            }
            other => panic!("expected HTTP error, got {other:?}"),
        }
    }

    #[test]
    fn test_unreadable_error_body_is_still_http_error() {
        let read_failure = BinanceError::Connectivity(reqwest_middleware::Error::middleware(
            std::io::Error::other("connection reset"),
        ));
        let err = classify(StatusCode::BAD_GATEWAY, "/api/v3/order", Err(read_failure)).unwrap_err();
        match err {
            BinanceError::Http { status, body } => {
                assert_eq!(status, 502);
                assert!(body.is_empty());
            }
            other => panic!("expected HTTP error, got {other:?}"),
        }
    }

    #[test]
    fn test_unreadable_success_body_is_connectivity_error() {
        let read_failure = BinanceError::Connectivity(reqwest_middleware::Error::middleware(
            std::io::Error::other("connection reset"),
        ));
        let err = classify(StatusCode::OK, "/api/v3/time", Err(read_failure)).unwrap_err();
        assert!(matches!(err, BinanceError::Connectivity(_)));
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client = signed_client();
        let debug = format!("{client:?}");
        assert!(debug.contains("has_credentials: true"));
        assert!(!debug.contains("secret"));
    }
}
