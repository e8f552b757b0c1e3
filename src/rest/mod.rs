//! Binance REST API client.
//!
//! Public market-data calls live in [`public`], signed account and trading
//! calls in [`private`]. Both go through [`BinanceRestClient::dispatch`], which
//! canonicalizes the query, signs it when required and classifies failures.
//!
//! The [`BinanceClient`] trait abstracts the same operations for mocking and
//! decoration.

mod client;
mod decode;
pub mod endpoints;
pub mod private;
pub mod public;
mod query;
mod traits;

pub use client::{BinanceRestClient, BinanceRestClientBuilder, RequestSpec};
pub use private::*;
pub use public::*;
pub use query::{SignedQuery, canonicalize, encode_params};
pub use traits::BinanceClient;
