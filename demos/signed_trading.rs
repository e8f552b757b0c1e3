//! Example: Signed account queries and order placement.
//!
//! Requires `BINANCE_API_KEY` and `BINANCE_API_SECRET` (a `.env` file works).
//! The order is only placed when `BINANCE_PLACE_ORDER=1` is also set.
//!
//! Run with: cargo run --example signed_trading

use std::sync::Arc;

use binance_api_client::auth::EnvCredentials;
use binance_api_client::error::ErrorKind;
use binance_api_client::rest::{
    BinanceRestClient, CancelOrderRequest, MyTradesRequest, NewOrderRequest,
    QueryOrderRequest,
};
use binance_api_client::{OrderSide, TimeInForce};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = EnvCredentials::from_env()?;
    let client = BinanceRestClient::builder()
        .credentials(Arc::new(credentials))
        .recv_window(5000)
        .build();

    println!("=== Account ===");
    let account = client.account_info().await?;
    println!(
        "Can trade: {}, maker/taker commission: {}/{}",
        account.can_trade, account.maker_commission, account.taker_commission
    );
    for balance in account.balances.iter().filter(|b| !b.total().is_zero()) {
        println!("  {}: free {} locked {}", balance.asset, balance.free, balance.locked);
    }

    println!("\n=== Open Orders (BNBBTC) ===");
    let open = client.open_orders("BNBBTC").await?;
    for order in &open {
        println!(
            "  {} {:?} {} @ {} [{:?}]",
            order.order_id, order.side, order.orig_qty, order.price, order.status
        );
    }

    println!("\n=== Recent Trades (BNBBTC) ===");
    let trades = client.my_trades(&MyTradesRequest::new("BNBBTC").limit(5)).await?;
    for trade in &trades {
        println!(
            "  {} {} @ {} fee {} {}",
            trade.id, trade.qty, trade.price, trade.commission, trade.commission_asset
        );
    }

    if std::env::var("BINANCE_PLACE_ORDER").ok().as_deref() != Some("1") {
        println!("\nSet BINANCE_PLACE_ORDER=1 to place and cancel a test order.");
        return Ok(());
    }

    println!("\n=== Place and Cancel ===");
    // Far below market so it rests on the book.
    let request = NewOrderRequest::limit("BNBBTC", OrderSide::Buy, Decimal::ONE, Decimal::new(1, 6))
        .time_in_force(TimeInForce::GTC)
        .client_order_id("demo-order-1");
    let ack = match client.new_order(&request).await {
        Ok(ack) => ack,
        Err(e) if e.kind() == ErrorKind::Http => {
            println!("Order rejected: {}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    println!("Placed order {} ({})", ack.order_id, ack.client_order_id);

    let order = client
        .query_order(&QueryOrderRequest::by_order_id("BNBBTC", ack.order_id))
        .await?;
    println!("Status: {:?}", order.status);

    let cancelled = client
        .cancel_order(&CancelOrderRequest::by_order_id("BNBBTC", ack.order_id))
        .await?;
    println!("Cancelled order {}", cancelled.order_id);

    Ok(())
}
