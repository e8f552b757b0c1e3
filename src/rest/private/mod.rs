//! Signed account and trading endpoints.
//!
//! Every call here needs credentials on the client; without them the request
//! fails with a configuration error before anything is sent.

mod types;

pub use types::*;

use reqwest::Method;

use crate::error::BinanceError;
use crate::rest::BinanceRestClient;
use crate::rest::client::RequestSpec;
use crate::rest::endpoints::private;
use crate::rest::query::SymbolParams;

impl BinanceRestClient {
    /// Place a new order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    ///
    /// use binance_api_client::auth::EnvCredentials;
    /// use binance_api_client::rest::{BinanceRestClient, NewOrderRequest};
    /// use binance_api_client::OrderSide;
    /// use rust_decimal::Decimal;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BinanceRestClient::builder()
    ///         .credentials(Arc::new(EnvCredentials::from_env()?))
    ///         .build();
    ///     let request = NewOrderRequest::limit(
    ///         "LTCBTC",
    ///         OrderSide::Buy,
    ///         Decimal::ONE,
    ///         Decimal::new(1, 1),
    ///     );
    ///     let ack = client.new_order(&request).await?;
    ///     println!("placed order {}", ack.order_id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn new_order(&self, request: &NewOrderRequest) -> Result<OrderAck, BinanceError> {
        self.call(RequestSpec::signed(Method::POST, private::ORDER).params(request)?)
            .await
    }

    /// Query the status of an order.
    pub async fn query_order(&self, request: &QueryOrderRequest) -> Result<Order, BinanceError> {
        request.validate()?;
        self.call(RequestSpec::signed(Method::GET, private::ORDER).params(request)?)
            .await
    }

    /// Cancel an active order.
    pub async fn cancel_order(
        &self,
        request: &CancelOrderRequest,
    ) -> Result<CancelledOrder, BinanceError> {
        request.validate()?;
        self.call(RequestSpec::signed(Method::DELETE, private::ORDER).params(request)?)
            .await
    }

    /// Get all open orders on a symbol.
    pub async fn open_orders(&self, symbol: &str) -> Result<Vec<Order>, BinanceError> {
        let params = SymbolParams { symbol };
        self.call(RequestSpec::signed(Method::GET, private::OPEN_ORDERS).params(&params)?)
            .await
    }

    /// Get all orders on a symbol: active, canceled or filled.
    pub async fn all_orders(&self, request: &AllOrdersRequest) -> Result<Vec<Order>, BinanceError> {
        self.call(RequestSpec::signed(Method::GET, private::ALL_ORDERS).params(request)?)
            .await
    }

    /// Get current account information and balances.
    pub async fn account_info(&self) -> Result<AccountInfo, BinanceError> {
        self.call(RequestSpec::signed(Method::GET, private::ACCOUNT))
            .await
    }

    /// Get trades of the account on a symbol.
    pub async fn my_trades(&self, request: &MyTradesRequest) -> Result<Vec<AccountTrade>, BinanceError> {
        self.call(RequestSpec::signed(Method::GET, private::MY_TRADES).params(request)?)
            .await
    }
}
