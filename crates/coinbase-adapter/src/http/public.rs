/*
[INPUT]:  Currency codes and quantities
[OUTPUT]: Market data (exchange rates, currencies, buy/sell quotes)
[POS]:    HTTP layer - market data endpoints
[UPDATE]: When adding new market data endpoints or changing response format
*/

use rust_decimal::Decimal;

use crate::http::{CoinbaseClient, CoinbaseError, Result};
use crate::types::{Currency, ExchangeRates, PriceQuote, rate_key};

impl CoinbaseClient {
    /// Full exchange rate table
    ///
    /// GET currencies/exchange_rates
    pub async fn get_exchange_rates(&self) -> Result<ExchangeRates> {
        self.get_json("currencies/exchange_rates", &[]).await
    }

    /// Single exchange rate, e.g. `get_exchange_rate("btc", "usd")`
    ///
    /// Looks up `"{from}_to_{to}"` in the rate table and parses it as a plain
    /// floating point rate. A pair missing from the table is an
    /// `InvalidResponse`.
    pub async fn get_exchange_rate(&self, from: &str, to: &str) -> Result<f64> {
        if from.trim().is_empty() || to.trim().is_empty() {
            return Err(CoinbaseError::Validation(
                "both currency codes are required".to_string(),
            ));
        }
        let key = rate_key(from, to);
        let rates = self.get_exchange_rates().await?;
        let value = rates
            .get(&key)
            .ok_or_else(|| {
                CoinbaseError::InvalidResponse(format!("exchange rates have no entry for {key}"))
            })?;
        value.trim().parse::<f64>().map_err(|e| {
            CoinbaseError::InvalidResponse(format!("rate {key}={value:?} is not a number: {e}"))
        })
    }

    /// Supported currencies
    ///
    /// GET currencies
    pub async fn get_currencies(&self) -> Result<Vec<Currency>> {
        self.get_json("currencies", &[]).await
    }

    /// Quote for buying `qty` bitcoin. The quantity is sent as given; range
    /// checks are left to the API.
    ///
    /// GET prices/buy?qty={qty}
    pub async fn get_buy_price(&self, qty: impl Into<Decimal>) -> Result<PriceQuote> {
        self.price_quote("prices/buy", qty.into()).await
    }

    /// Quote for selling `qty` bitcoin
    ///
    /// GET prices/sell?qty={qty}
    pub async fn get_sell_price(&self, qty: impl Into<Decimal>) -> Result<PriceQuote> {
        self.price_quote("prices/sell", qty.into()).await
    }

    async fn price_quote(&self, endpoint: &str, qty: Decimal) -> Result<PriceQuote> {
        self.get_json(endpoint, &[("qty", qty.normalize().to_string())])
            .await
    }
}
