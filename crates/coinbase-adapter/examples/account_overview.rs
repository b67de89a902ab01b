/*
[INPUT]:  COINBASE_KEY / COINBASE_SECRET environment variables
[OUTPUT]: Balance, exchange rate and price quotes printed to stdout
[POS]:    Examples - read-only account queries
[UPDATE]: When adding new read endpoints
*/

use coinbase_adapter::*;

/// Example: read-only queries against the live API
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Coinbase Account Example ===\n");

    let key = std::env::var("COINBASE_KEY").unwrap_or_default();
    let secret = std::env::var("COINBASE_SECRET").unwrap_or_default();

    let client = match CoinbaseClient::new(key, secret) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    println!("Querying balance...");
    match client.get_balance().await {
        Ok(balance) => println!("✓ Balance: {} BTC", balance),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying BTC/USD rate...");
    match client.get_exchange_rate("btc", "usd").await {
        Ok(rate) => println!("✓ Rate: {}", rate),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying buy and sell quotes for 1 BTC...");
    match client.get_buy_price(1u32).await {
        Ok(quote) => println!("✓ Buy total: {} {}", quote.total.amount, quote.total.currency),
        Err(e) => println!("✗ Error: {}", e),
    }
    match client.get_sell_price(1u32).await {
        Ok(quote) => println!("✓ Sell total: {} {}", quote.total.amount, quote.total.currency),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Account example complete");
}
