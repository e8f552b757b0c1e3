//! Types for public market-data endpoints.

use std::fmt;

use rust_decimal::Decimal;
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{TimestampMilliSeconds, serde_as};
use time::OffsetDateTime;

use crate::types::KlineInterval;
use crate::types::serde_helpers::{ExactDecimal, exact_decimal};

/// Reply of the connectivity check: an empty object.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Pong {}

/// Server time response.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ServerTime {
    /// Server time.
    #[serde(rename = "serverTime")]
    #[serde_as(as = "TimestampMilliSeconds<i64>")]
    pub server_time: OffsetDateTime,
}

/// Request parameters for the order book.
#[derive(Debug, Clone, Serialize)]
pub struct OrderBookRequest {
    /// Trading symbol (e.g. "BTCUSDT").
    pub symbol: String,
    /// Number of price levels per side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u16>,
}

impl OrderBookRequest {
    /// Create a new order book request.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            limit: None,
        }
    }

    /// Set the depth limit.
    pub fn limit(mut self, limit: u16) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl From<&str> for OrderBookRequest {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}

/// Order book snapshot.
///
/// Levels are kept in the order the venue sent them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBook {
    /// Last update ID of the snapshot.
    pub last_update_id: u64,
    /// Bid side entries.
    pub bids: Vec<OrderBookEntry>,
    /// Ask side entries.
    pub asks: Vec<OrderBookEntry>,
}

/// Single order book level.
/// Format: [price, quantity, ...] (extra trailing elements are ignored)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBookEntry {
    /// Price level.
    pub price: Decimal,
    /// Quantity at price level.
    pub quantity: Decimal,
}

impl<'de> Deserialize<'de> for OrderBookEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = OrderBookEntry;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an array of at least 2 elements")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let ExactDecimal(price) = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let ExactDecimal(quantity) = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(OrderBookEntry { price, quantity })
            }
        }

        deserializer.deserialize_seq(EntryVisitor)
    }
}

/// Request parameters for aggregate trades.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggTradesRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Aggregate trade ID to fetch from (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<u64>,
    /// Start time in milliseconds (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    /// End time in milliseconds (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    /// Maximum number of trades.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u16>,
}

impl AggTradesRequest {
    /// Create a new aggregate trades request.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            from_id: None,
            start_time: None,
            end_time: None,
            limit: None,
        }
    }

    /// Set the starting aggregate trade ID.
    pub fn from_id(mut self, from_id: u64) -> Self {
        self.from_id = Some(from_id);
        self
    }

    /// Set the time range in milliseconds.
    pub fn time_range(mut self, start_time: u64, end_time: u64) -> Self {
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        self
    }

    /// Set the result limit.
    pub fn limit(mut self, limit: u16) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Compressed, aggregate trade.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AggTrade {
    /// Aggregate trade ID.
    #[serde(rename = "a")]
    pub id: u64,
    /// Price.
    #[serde(rename = "p", deserialize_with = "exact_decimal::deserialize")]
    pub price: Decimal,
    /// Quantity.
    #[serde(rename = "q", deserialize_with = "exact_decimal::deserialize")]
    pub quantity: Decimal,
    /// First trade ID.
    #[serde(rename = "f")]
    pub first_trade_id: u64,
    /// Last trade ID.
    #[serde(rename = "l")]
    pub last_trade_id: u64,
    /// Trade time in milliseconds.
    #[serde(rename = "T")]
    pub timestamp: i64,
    /// Was the buyer the maker?
    #[serde(rename = "m")]
    pub is_buyer_maker: bool,
    /// Was the trade the best price match?
    #[serde(rename = "M")]
    pub is_best_match: bool,
}

/// Request parameters for candlesticks.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandlesticksRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Candlestick interval.
    pub interval: KlineInterval,
    /// Maximum number of candlesticks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u16>,
    /// Start time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    /// End time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
}

impl CandlesticksRequest {
    /// Create a new candlesticks request.
    pub fn new(symbol: impl Into<String>, interval: KlineInterval) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
            limit: None,
            start_time: None,
            end_time: None,
        }
    }

    /// Set the result limit.
    pub fn limit(mut self, limit: u16) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the start time in milliseconds.
    pub fn start_time(mut self, start_time: u64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Set the end time in milliseconds.
    pub fn end_time(mut self, end_time: u64) -> Self {
        self.end_time = Some(end_time);
        self
    }
}

/// Single candlestick.
/// Format: [open_time, open, high, low, close, volume, close_time,
/// quote_volume, trade_count, taker_buy_base_vol, taker_buy_quote_vol, ignore]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candlestick {
    /// Open time in milliseconds.
    pub open_time: i64,
    /// Open price.
    pub open: Decimal,
    /// High price.
    pub high: Decimal,
    /// Low price.
    pub low: Decimal,
    /// Close price.
    pub close: Decimal,
    /// Base asset volume.
    pub volume: Decimal,
    /// Close time in milliseconds.
    pub close_time: i64,
    /// Quote asset volume.
    pub quote_volume: Decimal,
    /// Number of trades.
    pub trade_count: u64,
    /// Taker buy base asset volume.
    pub taker_buy_base_vol: Decimal,
    /// Taker buy quote asset volume.
    pub taker_buy_quote_vol: Decimal,
}

impl<'de> Deserialize<'de> for Candlestick {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let arr: (
            i64,
            ExactDecimal,
            ExactDecimal,
            ExactDecimal,
            ExactDecimal,
            ExactDecimal,
            i64,
            ExactDecimal,
            u64,
            ExactDecimal,
            ExactDecimal,
            IgnoredAny,
        ) = Deserialize::deserialize(deserializer)?;
        Ok(Candlestick {
            open_time: arr.0,
            open: arr.1.0,
            high: arr.2.0,
            low: arr.3.0,
            close: arr.4.0,
            volume: arr.5.0,
            close_time: arr.6,
            quote_volume: arr.7.0,
            trade_count: arr.8,
            taker_buy_base_vol: arr.9.0,
            taker_buy_quote_vol: arr.10.0,
        })
    }
}

/// Best bid/ask for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerSnapshot {
    /// Best bid price.
    pub bid_price: Decimal,
    /// Best bid quantity.
    pub bid_qty: Decimal,
    /// Best ask price.
    pub ask_price: Decimal,
    /// Best ask quantity.
    pub ask_qty: Decimal,
}

impl TickerSnapshot {
    /// Difference between best ask and best bid.
    pub fn spread(&self) -> Decimal {
        self.ask_price - self.bid_price
    }
}

/// One element of the all-prices listing.
#[derive(Debug, Deserialize)]
pub(crate) struct SymbolPrice {
    pub symbol: String,
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub price: Decimal,
}

/// One element of the all-book-tickers listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookTickerEntry {
    pub symbol: String,
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub bid_price: Decimal,
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub bid_qty: Decimal,
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub ask_price: Decimal,
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub ask_qty: Decimal,
}

impl BookTickerEntry {
    pub(crate) fn into_pair(self) -> (String, TickerSnapshot) {
        let snapshot = TickerSnapshot {
            bid_price: self.bid_price,
            bid_qty: self.bid_qty,
            ask_price: self.ask_price,
            ask_qty: self.ask_qty,
        };
        (self.symbol, snapshot)
    }
}

/// 24 hour rolling window price change statistics.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker24hr {
    /// Trading symbol.
    pub symbol: String,
    /// Absolute price change.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub price_change: Decimal,
    /// Relative price change in percent.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub price_change_percent: Decimal,
    /// Volume weighted average price.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub weighted_avg_price: Decimal,
    /// Close price of the previous window.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub prev_close_price: Decimal,
    /// Last trade price.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub last_price: Decimal,
    /// Last trade quantity.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub last_qty: Decimal,
    /// Best bid price.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub bid_price: Decimal,
    /// Best bid quantity.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub bid_qty: Decimal,
    /// Best ask price.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub ask_price: Decimal,
    /// Best ask quantity.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub ask_qty: Decimal,
    /// Open price.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub open_price: Decimal,
    /// High price.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub high_price: Decimal,
    /// Low price.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub low_price: Decimal,
    /// Base asset volume.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub volume: Decimal,
    /// Quote asset volume.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub quote_volume: Decimal,
    /// Window open time in milliseconds.
    pub open_time: i64,
    /// Window close time in milliseconds.
    pub close_time: i64,
    /// First trade ID in the window.
    pub first_id: i64,
    /// Last trade ID in the window.
    pub last_id: i64,
    /// Number of trades in the window.
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use rust_decimal_macros::dec;
    use serde::de::DeserializeOwned;
    use serde_json::json;

    use crate::error::BinanceError;
    use crate::rest::decode::decode_body;
    use crate::rest::encode_params;

    fn decode<T: DeserializeOwned>(endpoint: &str, value: serde_json::Value) -> Result<T, BinanceError> {
        decode_body(endpoint, &value.to_string())
    }

    fn error_field(err: BinanceError) -> String {
        match err {
            BinanceError::Decode { field, .. } => field,
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_order_book_entry_is_exact() {
        let book: OrderBook = decode(
            "/api/v1/depth",
            json!({
                "lastUpdateId": 1027024,
                "bids": [["0.01000000", "5.00000000", []]],
                "asks": [["0.02000000", "12.50000000"]]
            }),
        )
        .unwrap();

        assert_eq!(book.last_update_id, 1027024);
        assert_eq!(book.bids[0].price, dec!(0.01));
        assert_eq!(book.bids[0].quantity, dec!(5));
        assert_eq!(book.bids[0].price.to_string(), "0.01000000");
        assert_eq!(book.asks[0].quantity, dec!(12.5));
    }

    #[test]
    fn test_order_book_keeps_wire_order() {
        let book: OrderBook = decode(
            "/api/v1/depth",
            json!({
                "lastUpdateId": 1,
                "bids": [["1.0", "1"], ["3.0", "1"], ["2.0", "1"]],
                "asks": []
            }),
        )
        .unwrap();
        let prices: Vec<_> = book.bids.iter().map(|e| e.price).collect();
        assert_eq!(prices, vec![dec!(1), dec!(3), dec!(2)]);
        assert!(book.asks.is_empty());
    }

    #[test]
    fn test_order_book_malformed_price_names_field() {
        let err = decode::<OrderBook>(
            "/api/v1/depth",
            json!({"lastUpdateId": 1, "bids": [["1.0", "1"], ["1,5", "1"]], "asks": []}),
        )
        .unwrap_err();
        assert_eq!(error_field(err), "bids[1][0]");
    }

    #[test]
    fn test_order_book_short_entry_is_error() {
        let err = decode::<OrderBook>(
            "/api/v1/depth",
            json!({"lastUpdateId": 1, "bids": [], "asks": [["1.0"]]}),
        )
        .unwrap_err();
        assert_eq!(error_field(err), "asks[0]");
    }

    #[test]
    fn test_agg_trade_decimals() {
        let trades: Vec<AggTrade> = decode(
            "/api/v1/aggTrades",
            json!([{
                "a": 26129,
                "p": "0.01633102",
                "q": "4.70443515",
                "f": 27781,
                "l": 27781,
                "T": 1498793709153i64,
                "m": true,
                "M": true
            }]),
        )
        .unwrap();

        assert_eq!(trades.len(), 1);
        let trade = &trades[0];
        assert_eq!(trade.id, 26129);
        assert_eq!(trade.price, dec!(0.01633102));
        assert_eq!(trade.quantity, dec!(4.70443515));
        assert_eq!(trade.first_trade_id, 27781);
        assert_eq!(trade.timestamp, 1498793709153);
        assert!(trade.is_buyer_maker);
        assert!(trade.is_best_match);
    }

    #[test]
    fn test_candlestick_drops_trailing_element() {
        let candles: Vec<Candlestick> = decode(
            "/api/v1/klines",
            json!([[
                1499040000000i64,
                "0.01634790",
                "0.80000000",
                "0.01575800",
                "0.01577100",
                "148976.11427815",
                1499644799999i64,
                "2434.19055334",
                308,
                "1756.87402397",
                "28.46694368",
                "17928899.62484339"
            ]]),
        )
        .unwrap();

        assert_eq!(
            candles[0],
            Candlestick {
                open_time: 1499040000000,
                open: dec!(0.01634790),
                high: dec!(0.80000000),
                low: dec!(0.01575800),
                close: dec!(0.01577100),
                volume: dec!(148976.11427815),
                close_time: 1499644799999,
                quote_volume: dec!(2434.19055334),
                trade_count: 308,
                taker_buy_base_vol: dec!(1756.87402397),
                taker_buy_quote_vol: dec!(28.46694368),
            }
        );
    }

    #[test]
    fn test_candlestick_wrong_arity() {
        let err = decode::<Vec<Candlestick>>(
            "/api/v1/klines",
            json!([[1499040000000i64, "0.1", "0.2", "0.1", "0.1", "1", 1499644799999i64, "1", 3, "1", "1"]]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid length 11"));
        assert_eq!(error_field(err), "[0]");
    }

    #[test]
    fn test_candlestick_trade_count_must_be_integer() {
        let err = decode::<Vec<Candlestick>>(
            "/api/v1/klines",
            json!([[1, "1", "1", "1", "1", "1", 2, "1", "308", "1", "1", "0"]]),
        )
        .unwrap_err();
        assert_eq!(error_field(err), "[0][8]");
    }

    #[test]
    fn test_prices_fold() {
        let value = json!([
            {"symbol": "BTCUSD", "price": "50000.12345678"},
            {"symbol": "ETHBTC", "price": "0.07946600"}
        ]);
        let prices: HashMap<String, Decimal> =
            decode::<Vec<SymbolPrice>>("/api/v1/ticker/allPrices", value)
                .unwrap()
                .into_iter()
                .map(|entry| (entry.symbol, entry.price))
                .collect();
        assert_eq!(prices.len(), 2);
        assert_eq!(prices["BTCUSD"], dec!(50000.12345678));
        assert_eq!(prices["BTCUSD"].to_string(), "50000.12345678");
    }

    #[test]
    fn test_book_tickers_fold() {
        let value = json!([{
            "symbol": "LTCBTC",
            "bidPrice": "4.00000000",
            "bidQty": "431.00000000",
            "askPrice": "4.00000200",
            "askQty": "9.00000000"
        }]);
        let tickers: HashMap<String, TickerSnapshot> =
            decode::<Vec<BookTickerEntry>>("/api/v1/ticker/allBookTickers", value)
                .unwrap()
                .into_iter()
                .map(BookTickerEntry::into_pair)
                .collect();
        let ltc = &tickers["LTCBTC"];
        assert_eq!(ltc.bid_price, dec!(4));
        assert_eq!(ltc.ask_price, dec!(4.000002));
        assert_eq!(ltc.spread(), dec!(0.000002));
    }

    #[test]
    fn test_ticker_24hr_schema() {
        let ticker: Ticker24hr = decode(
            "/api/v1/ticker/24hr",
            json!({
                "symbol": "BNBBTC",
                "priceChange": "-94.99999800",
                "priceChangePercent": "-95.960",
                "weightedAvgPrice": "0.29628482",
                "prevClosePrice": "0.10002000",
                "lastPrice": "4.00000200",
                "lastQty": "200.00000000",
                "bidPrice": "4.00000000",
                "bidQty": "100.00000000",
                "askPrice": "4.00000200",
                "askQty": "100.00000000",
                "openPrice": "99.00000000",
                "highPrice": "100.00000000",
                "lowPrice": "0.10000000",
                "volume": "8913.30000000",
                "quoteVolume": "15.30000000",
                "openTime": 1499783499040i64,
                "closeTime": 1499869899040i64,
                "firstId": 28385,
                "lastId": 28460,
                "count": 76
            }),
        )
        .unwrap();

        assert_eq!(ticker.symbol, "BNBBTC");
        assert_eq!(ticker.price_change, dec!(-94.999998));
        assert_eq!(ticker.price_change_percent.to_string(), "-95.960");
        assert_eq!(ticker.open_time, 1499783499040);
        assert_eq!(ticker.count, 76);
    }

    #[test]
    fn test_ticker_24hr_rejects_numeric_symbol() {
        let err = decode::<Ticker24hr>("/api/v1/ticker/24hr", json!({"symbol": 5})).unwrap_err();
        assert_eq!(error_field(err), "symbol");
    }

    #[test]
    fn test_book_ticker_missing_field_is_named() {
        let err = decode::<Vec<BookTickerEntry>>(
            "/api/v1/ticker/allBookTickers",
            json!([{"symbol": "LTCBTC", "bidPrice": "4.0", "bidQty": "1", "askPrice": "4.1"}]),
        )
        .unwrap_err();
        assert_eq!(error_field(err), "[0].askQty");
    }

    #[test]
    fn test_pong_must_be_empty_object() {
        assert!(decode::<Pong>("/api/v1/ping", json!({})).is_ok());
        assert!(decode::<Pong>("/api/v1/ping", json!({"ok": 1})).is_err());
    }

    #[test]
    fn test_request_params_skip_absent_values() {
        let book = OrderBookRequest::new("BTCUSDT").limit(100);
        assert_eq!(encode_params(&book).unwrap(), "symbol=BTCUSDT&limit=100");

        let trades = AggTradesRequest::new("BTCUSDT").time_range(1, 2);
        assert_eq!(
            encode_params(&trades).unwrap(),
            "symbol=BTCUSDT&startTime=1&endTime=2"
        );

        let candles = CandlesticksRequest::new("ETHBTC", KlineInterval::Hour1).limit(5);
        assert_eq!(
            encode_params(&candles).unwrap(),
            "symbol=ETHBTC&interval=1h&limit=5"
        );
    }

    #[test]
    fn test_server_time() {
        let time: ServerTime =
            decode("/api/v1/time", json!({"serverTime": 1499827319559i64})).unwrap();
        assert_eq!(
            time.server_time.unix_timestamp_nanos(),
            1_499_827_319_559_000_000
        );
    }
}
