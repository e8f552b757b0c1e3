//! Binance REST API endpoint constants.

/// Base URL for the Binance REST API.
pub const BINANCE_BASE_URL: &str = "https://api.binance.com";

/// Header carrying the API key on signed requests.
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Public endpoints (no authentication required).
pub mod public {
    /// Test connectivity.
    pub const PING: &str = "/api/v1/ping";
    /// Get server time.
    pub const TIME: &str = "/api/v1/time";
    /// Get order book.
    pub const DEPTH: &str = "/api/v1/depth";
    /// Get compressed, aggregate trades.
    pub const AGG_TRADES: &str = "/api/v1/aggTrades";
    /// Get candlesticks.
    pub const KLINES: &str = "/api/v1/klines";
    /// Get latest price for all symbols.
    pub const TICKER_ALL_PRICES: &str = "/api/v1/ticker/allPrices";
    /// Get best bid/ask for all symbols.
    pub const TICKER_ALL_BOOK_TICKERS: &str = "/api/v1/ticker/allBookTickers";
    /// Get 24 hour price change statistics.
    pub const TICKER_24HR: &str = "/api/v1/ticker/24hr";
}

/// Signed endpoints (API key and signature required).
pub mod private {
    /// Place (POST), query (GET) or cancel (DELETE) an order.
    pub const ORDER: &str = "/api/v3/order";
    /// Get open orders.
    pub const OPEN_ORDERS: &str = "/api/v3/openOrders";
    /// Get all orders.
    pub const ALL_ORDERS: &str = "/api/v3/allOrders";
    /// Get account information.
    pub const ACCOUNT: &str = "/api/v3/account";
    /// Get account trade list.
    pub const MY_TRADES: &str = "/api/v3/myTrades";
}
