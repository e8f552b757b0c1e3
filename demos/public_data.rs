//! Example: Fetching public market data from Binance.
//!
//! Run with: cargo run --example public_data

use binance_api_client::KlineInterval;
use binance_api_client::rest::{
    AggTradesRequest, BinanceRestClient, CandlesticksRequest, OrderBookRequest,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Create a client for public endpoints (no credentials needed)
    let client = BinanceRestClient::new();

    println!("=== Connectivity ===");
    client.ping().await?;
    let time = client.get_server_time().await?;
    println!("Server time: {}", time.server_time);

    println!("\n=== Order Book (BNBBTC, top 5) ===");
    let book = client
        .get_order_book(&OrderBookRequest::new("BNBBTC").limit(5))
        .await?;
    println!("Last update ID: {}", book.last_update_id);
    for (bid, ask) in book.bids.iter().zip(book.asks.iter()) {
        println!(
            "  {} @ {}    |    {} @ {}",
            bid.quantity, bid.price, ask.quantity, ask.price
        );
    }

    println!("\n=== Aggregate Trades (BNBBTC) ===");
    let trades = client
        .get_agg_trades(&AggTradesRequest::new("BNBBTC").limit(5))
        .await?;
    for trade in &trades {
        println!(
            "  #{} {} @ {} (buyer maker: {})",
            trade.id, trade.quantity, trade.price, trade.is_buyer_maker
        );
    }

    println!("\n=== Candlesticks (BNBBTC, 1h) ===");
    let candles = client
        .get_candlesticks(&CandlesticksRequest::new("BNBBTC", KlineInterval::Hour1).limit(3))
        .await?;
    for candle in &candles {
        println!(
            "  {}: O={} H={} L={} C={} V={}",
            candle.open_time, candle.open, candle.high, candle.low, candle.close, candle.volume
        );
    }

    println!("\n=== Prices ===");
    let prices = client.get_prices().await?;
    println!("{} symbols", prices.len());
    if let Some(price) = prices.get("BTCUSDT") {
        println!("BTCUSDT: {}", price);
    }

    println!("\n=== Book Tickers ===");
    let tickers = client.get_book_tickers().await?;
    if let Some(ticker) = tickers.get("BTCUSDT") {
        println!(
            "BTCUSDT: bid {} / ask {} (spread {})",
            ticker.bid_price,
            ticker.ask_price,
            ticker.spread()
        );
    }

    println!("\n=== 24hr Ticker (BNBBTC) ===");
    let ticker = client.get_24hr_ticker("BNBBTC").await?;
    println!(
        "Last {} change {}% volume {} trades {}",
        ticker.last_price, ticker.price_change_percent, ticker.volume, ticker.count
    );

    Ok(())
}
