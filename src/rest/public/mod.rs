//! Public market-data endpoints (no authentication required).

mod types;

pub use types::*;

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::BinanceError;
use crate::rest::BinanceRestClient;
use crate::rest::client::RequestSpec;
use crate::rest::endpoints::public;
use crate::rest::query::SymbolParams;

impl BinanceRestClient {
    /// Test connectivity to the REST API.
    ///
    /// Returns `Ok(())` only when the venue answers with an empty JSON object.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use binance_api_client::rest::BinanceRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BinanceRestClient::new();
    ///     client.ping().await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn ping(&self) -> Result<(), BinanceError> {
        let _: Pong = self.call(RequestSpec::public(public::PING)).await?;
        Ok(())
    }

    /// Get the server time.
    pub async fn get_server_time(&self) -> Result<ServerTime, BinanceError> {
        self.call(RequestSpec::public(public::TIME)).await
    }

    /// Get the order book for a symbol.
    pub async fn get_order_book(&self, request: &OrderBookRequest) -> Result<OrderBook, BinanceError> {
        self.call(RequestSpec::public(public::DEPTH).params(request)?)
            .await
    }

    /// Get compressed, aggregate trades.
    ///
    /// Trades that fill at the same time, from the same order, with the same
    /// price are aggregated.
    pub async fn get_agg_trades(
        &self,
        request: &AggTradesRequest,
    ) -> Result<Vec<AggTrade>, BinanceError> {
        self.call(RequestSpec::public(public::AGG_TRADES).params(request)?)
            .await
    }

    /// Get candlesticks for a symbol.
    pub async fn get_candlesticks(
        &self,
        request: &CandlesticksRequest,
    ) -> Result<Vec<Candlestick>, BinanceError> {
        self.call(RequestSpec::public(public::KLINES).params(request)?)
            .await
    }

    /// Get the latest price of every symbol.
    pub async fn get_prices(&self) -> Result<HashMap<String, Decimal>, BinanceError> {
        let prices: Vec<SymbolPrice> = self
            .call(RequestSpec::public(public::TICKER_ALL_PRICES))
            .await?;
        Ok(prices
            .into_iter()
            .map(|entry| (entry.symbol, entry.price))
            .collect())
    }

    /// Get the best bid/ask of every symbol.
    pub async fn get_book_tickers(&self) -> Result<HashMap<String, TickerSnapshot>, BinanceError> {
        let tickers: Vec<BookTickerEntry> = self
            .call(RequestSpec::public(public::TICKER_ALL_BOOK_TICKERS))
            .await?;
        Ok(tickers.into_iter().map(BookTickerEntry::into_pair).collect())
    }

    /// Get 24 hour price change statistics for a symbol.
    pub async fn get_24hr_ticker(&self, symbol: &str) -> Result<Ticker24hr, BinanceError> {
        let params = SymbolParams { symbol };
        self.call(RequestSpec::public(public::TICKER_24HR).params(&params)?)
            .await
    }
}
