//! # Binance Client
//!
//! An async Rust client library for the Binance spot REST API.
//!
//! ## Features
//!
//! - Public market data and signed account/trading endpoints
//! - HMAC-SHA256 request signing with a deterministic query layout
//! - Financial precision with `rust_decimal`, no floating point on any price
//!   or quantity
//! - Typed errors separating configuration, connectivity, venue and decode
//!   failures
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use binance_api_client::rest::BinanceRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BinanceRestClient::new();
//!     let time = client.get_server_time().await?;
//!     println!("Server time: {:?}", time);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{BinanceError, ErrorKind, VenueError};
pub use types::common::{KlineInterval, OrderSide, OrderStatus, OrderType, TimeInForce};

/// Result type alias using BinanceError
pub type Result<T> = std::result::Result<T, BinanceError>;
