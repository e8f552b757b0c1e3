//! Types for signed account and trading endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::BinanceError;
use crate::types::serde_helpers::{exact_decimal, exact_decimal_option};
use crate::types::{OrderSide, OrderStatus, OrderType, TimeInForce};

/// Request to place a new order.
///
/// Fields serialize in the order the venue documents them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Buy or sell.
    pub side: OrderSide,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Time in force (default: GTC).
    pub time_in_force: TimeInForce,
    /// Order quantity.
    pub quantity: Decimal,
    /// Limit price.
    pub price: Decimal,
    /// Client-assigned order ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_client_order_id: Option<String>,
    /// Stop price for stop and take-profit orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
    /// Visible quantity for iceberg orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iceberg_qty: Option<Decimal>,
    /// Receive window in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recv_window: Option<u64>,
}

impl NewOrderRequest {
    /// Create a new order request.
    pub fn new(
        symbol: impl Into<String>,
        side: OrderSide,
        order_type: OrderType,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type,
            time_in_force: TimeInForce::default(),
            quantity,
            price,
            new_client_order_id: None,
            stop_price: None,
            iceberg_qty: None,
            recv_window: None,
        }
    }

    /// Create a limit order request.
    pub fn limit(symbol: impl Into<String>, side: OrderSide, quantity: Decimal, price: Decimal) -> Self {
        Self::new(symbol, side, OrderType::Limit, quantity, price)
    }

    /// Set the time in force.
    pub fn time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = tif;
        self
    }

    /// Set a client order ID.
    pub fn client_order_id(mut self, id: impl Into<String>) -> Self {
        self.new_client_order_id = Some(id.into());
        self
    }

    /// Set the stop price.
    pub fn stop_price(mut self, price: Decimal) -> Self {
        self.stop_price = Some(price);
        self
    }

    /// Set the iceberg quantity.
    pub fn iceberg_qty(mut self, qty: Decimal) -> Self {
        self.iceberg_qty = Some(qty);
        self
    }

    /// Set the receive window.
    pub fn recv_window(mut self, millis: u64) -> Self {
        self.recv_window = Some(millis);
        self
    }
}

fn missing_order_identity() -> BinanceError {
    BinanceError::Validation("must specify orderId or origClientOrderId".to_string())
}

/// Request to look up one order.
///
/// At least one of `order_id` and `orig_client_order_id` must be set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOrderRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Venue order ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    /// Client order ID given at placement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_client_order_id: Option<String>,
    /// Receive window in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recv_window: Option<u64>,
}

impl QueryOrderRequest {
    /// Identify an order by its venue order ID.
    pub fn by_order_id(symbol: impl Into<String>, order_id: u64) -> Self {
        Self {
            symbol: symbol.into(),
            order_id: Some(order_id),
            orig_client_order_id: None,
            recv_window: None,
        }
    }

    /// Identify an order by its client order ID.
    pub fn by_client_order_id(symbol: impl Into<String>, client_order_id: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            order_id: None,
            orig_client_order_id: Some(client_order_id.into()),
            recv_window: None,
        }
    }

    /// Set the receive window.
    pub fn recv_window(mut self, millis: u64) -> Self {
        self.recv_window = Some(millis);
        self
    }

    /// Check that the order is identified.
    pub fn validate(&self) -> Result<(), BinanceError> {
        if self.order_id.is_none() && self.orig_client_order_id.is_none() {
            return Err(missing_order_identity());
        }
        Ok(())
    }
}

/// Request to cancel one order.
///
/// At least one of `order_id` and `orig_client_order_id` must be set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Venue order ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    /// Client order ID given at placement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_client_order_id: Option<String>,
    /// New client ID for the cancel itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_client_order_id: Option<String>,
    /// Receive window in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recv_window: Option<u64>,
}

impl CancelOrderRequest {
    /// Identify an order by its venue order ID.
    pub fn by_order_id(symbol: impl Into<String>, order_id: u64) -> Self {
        Self {
            symbol: symbol.into(),
            order_id: Some(order_id),
            orig_client_order_id: None,
            new_client_order_id: None,
            recv_window: None,
        }
    }

    /// Identify an order by its client order ID.
    pub fn by_client_order_id(symbol: impl Into<String>, client_order_id: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            order_id: None,
            orig_client_order_id: Some(client_order_id.into()),
            new_client_order_id: None,
            recv_window: None,
        }
    }

    /// Set the client ID of the cancel request.
    pub fn new_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.new_client_order_id = Some(id.into());
        self
    }

    /// Set the receive window.
    pub fn recv_window(mut self, millis: u64) -> Self {
        self.recv_window = Some(millis);
        self
    }

    /// Check that the order is identified.
    pub fn validate(&self) -> Result<(), BinanceError> {
        if self.order_id.is_none() && self.orig_client_order_id.is_none() {
            return Err(missing_order_identity());
        }
        Ok(())
    }
}

/// Request for all orders of a symbol.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllOrdersRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Return orders with this ID and newer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    /// Maximum number of orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u16>,
    /// Receive window in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recv_window: Option<u64>,
}

impl AllOrdersRequest {
    /// Create a new request for a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            order_id: None,
            limit: None,
            recv_window: None,
        }
    }

    /// Start from this order ID.
    pub fn order_id(mut self, order_id: u64) -> Self {
        self.order_id = Some(order_id);
        self
    }

    /// Set the result limit.
    pub fn limit(mut self, limit: u16) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Request for the account trade list of a symbol.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyTradesRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Maximum number of trades.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u16>,
    /// Trade ID to fetch from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<u64>,
    /// Receive window in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recv_window: Option<u64>,
}

impl MyTradesRequest {
    /// Create a new request for a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            limit: None,
            from_id: None,
            recv_window: None,
        }
    }

    /// Set the result limit.
    pub fn limit(mut self, limit: u16) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Start from this trade ID.
    pub fn from_id(mut self, from_id: u64) -> Self {
        self.from_id = Some(from_id);
        self
    }
}

/// Acknowledgement of a placed order.
///
/// `symbol`, `orderId` and `clientOrderId` are required: a success response
/// without them is a decode error, never an empty acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAck {
    /// Trading symbol.
    pub symbol: String,
    /// Venue order ID.
    pub order_id: u64,
    /// Client order ID.
    pub client_order_id: String,
    /// Transaction time in milliseconds.
    pub transact_time: Option<i64>,
    /// Order status (RESULT and FULL responses).
    pub status: Option<OrderStatus>,
    /// Limit price (RESULT and FULL responses).
    #[serde(default, deserialize_with = "exact_decimal_option::deserialize")]
    pub price: Option<Decimal>,
    /// Original quantity (RESULT and FULL responses).
    #[serde(default, deserialize_with = "exact_decimal_option::deserialize")]
    pub orig_qty: Option<Decimal>,
    /// Executed quantity (RESULT and FULL responses).
    #[serde(default, deserialize_with = "exact_decimal_option::deserialize")]
    pub executed_qty: Option<Decimal>,
}

/// Order details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Trading symbol.
    pub symbol: String,
    /// Venue order ID.
    pub order_id: u64,
    /// Client order ID.
    pub client_order_id: String,
    /// Limit price.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub price: Decimal,
    /// Original quantity.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub orig_qty: Decimal,
    /// Executed quantity.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub executed_qty: Decimal,
    /// Order status.
    pub status: OrderStatus,
    /// Time in force.
    pub time_in_force: TimeInForce,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Buy or sell.
    pub side: OrderSide,
    /// Stop price, if any.
    #[serde(default, deserialize_with = "exact_decimal_option::deserialize")]
    pub stop_price: Option<Decimal>,
    /// Iceberg quantity, if any.
    #[serde(default, deserialize_with = "exact_decimal_option::deserialize")]
    pub iceberg_qty: Option<Decimal>,
    /// Creation time in milliseconds.
    pub time: i64,
    /// Last update time in milliseconds.
    pub update_time: Option<i64>,
    /// Whether the order is on the book.
    pub is_working: bool,
}

/// Result of a cancel request.
///
/// `symbol` and `orderId` are required, as for [`OrderAck`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelledOrder {
    /// Trading symbol.
    pub symbol: String,
    /// Venue order ID.
    pub order_id: u64,
    /// Client order ID the order was placed with.
    pub orig_client_order_id: Option<String>,
    /// Client ID of the cancel request.
    pub client_order_id: Option<String>,
    /// Status after the cancel.
    pub status: Option<OrderStatus>,
}

/// Account information.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    /// Maker commission in basis points.
    pub maker_commission: i64,
    /// Taker commission in basis points.
    pub taker_commission: i64,
    /// Buyer commission in basis points.
    pub buyer_commission: i64,
    /// Seller commission in basis points.
    pub seller_commission: i64,
    /// Trading is enabled.
    pub can_trade: bool,
    /// Withdrawals are enabled.
    pub can_withdraw: bool,
    /// Deposits are enabled.
    pub can_deposit: bool,
    /// Last update time in milliseconds.
    pub update_time: Option<i64>,
    /// Per-asset balances.
    pub balances: Vec<Balance>,
}

impl AccountInfo {
    /// Look up the balance of an asset.
    pub fn balance(&self, asset: &str) -> Option<&Balance> {
        self.balances.iter().find(|b| b.asset == asset)
    }
}

/// Balance of a single asset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Balance {
    /// Asset name.
    pub asset: String,
    /// Available amount.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub free: Decimal,
    /// Amount locked in open orders.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub locked: Decimal,
}

impl Balance {
    /// Free plus locked.
    pub fn total(&self) -> Decimal {
        self.free + self.locked
    }
}

/// A trade of the account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTrade {
    /// Trade ID.
    pub id: u64,
    /// Order ID the trade belongs to.
    pub order_id: u64,
    /// Price.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub price: Decimal,
    /// Quantity.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub qty: Decimal,
    /// Commission paid.
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub commission: Decimal,
    /// Asset the commission was paid in.
    pub commission_asset: String,
    /// Trade time in milliseconds.
    pub time: i64,
    /// The account was the buyer.
    pub is_buyer: bool,
    /// The account was the maker.
    pub is_maker: bool,
    /// The trade was the best price match.
    pub is_best_match: bool,
}
