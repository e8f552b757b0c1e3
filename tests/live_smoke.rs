use std::sync::Arc;

use binance_api_client::auth::EnvCredentials;
use binance_api_client::rest::BinanceRestClient;

fn live_tests_enabled() -> bool {
    std::env::var("BINANCE_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = BinanceRestClient::new();
    client.ping().await?;
    let prices = client.get_prices().await?;
    assert!(!prices.is_empty());

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_signed_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = BinanceRestClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    let account = client.account_info().await?;
    assert!(account.balances.iter().all(|b| b.free >= rust_decimal::Decimal::ZERO));

    Ok(())
}
