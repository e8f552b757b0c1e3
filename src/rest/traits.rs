//! Trait definition for the Binance REST API client.
//!
//! [`BinanceClient`] abstracts the REST operations so callers can swap in mock
//! implementations or wrap the client in decorators.
//!
//! ```rust,no_run
//! use binance_api_client::rest::BinanceClient;
//!
//! async fn check_time<C: BinanceClient>(client: &C) -> Result<(), binance_api_client::BinanceError> {
//!     let time = client.get_server_time().await?;
//!     println!("Server time: {}", time.server_time);
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;
use std::future::Future;

use rust_decimal::Decimal;

use crate::error::BinanceError;
use crate::rest::BinanceRestClient;
use crate::rest::private::{
    AccountInfo, AccountTrade, AllOrdersRequest, CancelOrderRequest, CancelledOrder,
    MyTradesRequest, NewOrderRequest, Order, OrderAck, QueryOrderRequest,
};
use crate::rest::public::{
    AggTrade, AggTradesRequest, Candlestick, CandlesticksRequest, OrderBook, OrderBookRequest,
    ServerTime, Ticker24hr, TickerSnapshot,
};

/// Trait defining the Binance REST API operations.
///
/// All methods are async and return `Result<T, BinanceError>`.
pub trait BinanceClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Test connectivity.
    fn ping(&self) -> impl Future<Output = Result<(), BinanceError>> + Send;

    /// Get the server time.
    fn get_server_time(&self) -> impl Future<Output = Result<ServerTime, BinanceError>> + Send;

    /// Get the order book for a symbol.
    fn get_order_book(
        &self,
        request: &OrderBookRequest,
    ) -> impl Future<Output = Result<OrderBook, BinanceError>> + Send;

    /// Get aggregate trades.
    fn get_agg_trades(
        &self,
        request: &AggTradesRequest,
    ) -> impl Future<Output = Result<Vec<AggTrade>, BinanceError>> + Send;

    /// Get candlesticks.
    fn get_candlesticks(
        &self,
        request: &CandlesticksRequest,
    ) -> impl Future<Output = Result<Vec<Candlestick>, BinanceError>> + Send;

    /// Get the latest price of every symbol.
    fn get_prices(
        &self,
    ) -> impl Future<Output = Result<HashMap<String, Decimal>, BinanceError>> + Send;

    /// Get the best bid/ask of every symbol.
    fn get_book_tickers(
        &self,
    ) -> impl Future<Output = Result<HashMap<String, TickerSnapshot>, BinanceError>> + Send;

    /// Get 24 hour statistics for a symbol.
    fn get_24hr_ticker(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<Ticker24hr, BinanceError>> + Send;

    // ========== Signed Endpoints ==========

    /// Place a new order.
    fn new_order(
        &self,
        request: &NewOrderRequest,
    ) -> impl Future<Output = Result<OrderAck, BinanceError>> + Send;

    /// Query an order.
    fn query_order(
        &self,
        request: &QueryOrderRequest,
    ) -> impl Future<Output = Result<Order, BinanceError>> + Send;

    /// Cancel an order.
    fn cancel_order(
        &self,
        request: &CancelOrderRequest,
    ) -> impl Future<Output = Result<CancelledOrder, BinanceError>> + Send;

    /// Get open orders on a symbol.
    fn open_orders(&self, symbol: &str)
    -> impl Future<Output = Result<Vec<Order>, BinanceError>> + Send;

    /// Get all orders on a symbol.
    fn all_orders(
        &self,
        request: &AllOrdersRequest,
    ) -> impl Future<Output = Result<Vec<Order>, BinanceError>> + Send;

    /// Get account information.
    fn account_info(&self) -> impl Future<Output = Result<AccountInfo, BinanceError>> + Send;

    /// Get the account trade list.
    fn my_trades(
        &self,
        request: &MyTradesRequest,
    ) -> impl Future<Output = Result<Vec<AccountTrade>, BinanceError>> + Send;
}

impl BinanceClient for BinanceRestClient {
    async fn ping(&self) -> Result<(), BinanceError> {
        BinanceRestClient::ping(self).await
    }

    async fn get_server_time(&self) -> Result<ServerTime, BinanceError> {
        BinanceRestClient::get_server_time(self).await
    }

    async fn get_order_book(&self, request: &OrderBookRequest) -> Result<OrderBook, BinanceError> {
        BinanceRestClient::get_order_book(self, request).await
    }

    async fn get_agg_trades(
        &self,
        request: &AggTradesRequest,
    ) -> Result<Vec<AggTrade>, BinanceError> {
        BinanceRestClient::get_agg_trades(self, request).await
    }

    async fn get_candlesticks(
        &self,
        request: &CandlesticksRequest,
    ) -> Result<Vec<Candlestick>, BinanceError> {
        BinanceRestClient::get_candlesticks(self, request).await
    }

    async fn get_prices(&self) -> Result<HashMap<String, Decimal>, BinanceError> {
        BinanceRestClient::get_prices(self).await
    }

    async fn get_book_tickers(&self) -> Result<HashMap<String, TickerSnapshot>, BinanceError> {
        BinanceRestClient::get_book_tickers(self).await
    }

    async fn get_24hr_ticker(&self, symbol: &str) -> Result<Ticker24hr, BinanceError> {
        BinanceRestClient::get_24hr_ticker(self, symbol).await
    }

    async fn new_order(&self, request: &NewOrderRequest) -> Result<OrderAck, BinanceError> {
        BinanceRestClient::new_order(self, request).await
    }

    async fn query_order(&self, request: &QueryOrderRequest) -> Result<Order, BinanceError> {
        BinanceRestClient::query_order(self, request).await
    }

    async fn cancel_order(
        &self,
        request: &CancelOrderRequest,
    ) -> Result<CancelledOrder, BinanceError> {
        BinanceRestClient::cancel_order(self, request).await
    }

    async fn open_orders(&self, symbol: &str) -> Result<Vec<Order>, BinanceError> {
        BinanceRestClient::open_orders(self, symbol).await
    }

    async fn all_orders(&self, request: &AllOrdersRequest) -> Result<Vec<Order>, BinanceError> {
        BinanceRestClient::all_orders(self, request).await
    }

    async fn account_info(&self) -> Result<AccountInfo, BinanceError> {
        BinanceRestClient::account_info(self).await
    }

    async fn my_trades(&self, request: &MyTradesRequest) -> Result<Vec<AccountTrade>, BinanceError> {
        BinanceRestClient::my_trades(self, request).await
    }
}
