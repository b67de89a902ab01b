/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::models::{AddressEntry, Amount, ButtonInfo, Cents, Transaction, TransactionEntry, User, UserSummary};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateAddressResponse {
    #[serde(default)]
    pub success: bool,
    pub address: String,
    #[serde(default)]
    pub callback_url: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiveAddress {
    #[serde(default)]
    pub success: bool,
    pub address: String,
    #[serde(default)]
    pub callback_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressList {
    pub addresses: Vec<AddressEntry>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub num_pages: u32,
    #[serde(default)]
    pub current_page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonResponse {
    #[serde(default)]
    pub success: bool,
    pub button: ButtonInfo,
    pub embed_html: String,
}

/// Exchange rate table keyed by `"{from}_to_{to}"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeRates(pub BTreeMap<String, String>);

impl ExchangeRates {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn rate(&self, from: &str, to: &str) -> Option<&str> {
        self.get(&rate_key(from, to))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub(crate) fn rate_key(from: &str, to: &str) -> String {
    format!(
        "{}_to_{}",
        from.trim().to_ascii_lowercase(),
        to.trim().to_ascii_lowercase()
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionList {
    #[serde(default)]
    pub current_user: Option<UserSummary>,
    #[serde(default)]
    pub balance: Option<Amount>,
    pub total_count: u64,
    #[serde(default)]
    pub num_pages: u32,
    #[serde(default)]
    pub current_page: u32,
    pub transactions: Vec<TransactionEntry>,
}

impl TransactionList {
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().map(|entry| &entry.transaction)
    }
}

/// Body of `GET transactions/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEnvelope {
    pub transaction: Transaction,
}

/// Buy or sell quote; every amount keeps the provider's string form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub subtotal: Amount,
    #[serde(default)]
    pub fees: Vec<BTreeMap<String, Cents>>,
    pub total: Amount,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl PriceQuote {
    /// Fee charged by `name` (e.g. "coinbase", "bank")
    pub fn fee(&self, name: &str) -> Option<&Cents> {
        self.fees.iter().find_map(|fee| fee.get(name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<UserEntry>,
}

/// Error payload shapes the API uses: `{"success": false, "errors": [..]}`
/// and `{"error": ".."}`
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    errors: Option<Vec<String>>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorEnvelope {
    /// Messages carried by the envelope, or `None` when the body is not an
    /// error payload.
    pub(crate) fn messages(&self) -> Option<Vec<String>> {
        if let Some(error) = &self.error {
            let mut messages = vec![error.clone()];
            messages.extend(self.errors.iter().flatten().cloned());
            return Some(messages);
        }
        let errors = self.errors.clone().unwrap_or_default();
        match self.success {
            Some(false) => Some(errors),
            None if !errors.is_empty() => Some(errors),
            _ => None,
        }
    }

    pub(crate) fn parse(body: &str) -> Option<Vec<String>> {
        serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| envelope.messages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_shapes() {
        assert_eq!(
            ErrorEnvelope::parse(r#"{"success":false,"errors":["Invalid amount"]}"#),
            Some(vec!["Invalid amount".to_string()])
        );
        assert_eq!(
            ErrorEnvelope::parse(r#"{"error":"Transaction not found"}"#),
            Some(vec!["Transaction not found".to_string()])
        );
        assert_eq!(
            ErrorEnvelope::parse(r#"{"errors":["Access denied"]}"#),
            Some(vec!["Access denied".to_string()])
        );
    }

    #[test]
    fn test_success_bodies_are_not_errors() {
        assert_eq!(ErrorEnvelope::parse(r#"{"success":true,"address":"abc"}"#), None);
        assert_eq!(ErrorEnvelope::parse(r#"{"btc_to_usd":"400.1"}"#), None);
        assert_eq!(ErrorEnvelope::parse(r#"[["US Dollar (USD)","USD"]]"#), None);
        assert_eq!(ErrorEnvelope::parse("not json"), None);
    }

    #[test]
    fn test_rate_key_normalizes_codes() {
        assert_eq!(rate_key("BTC", " usd "), "btc_to_usd");
    }

    #[test]
    fn test_price_quote_fee_lookup() {
        let quote: PriceQuote = serde_json::from_str(
            r#"{
                "subtotal": {"amount": "10.10", "currency": "USD"},
                "fees": [
                    {"coinbase": {"cents": 10, "currency_iso": "USD"}},
                    {"bank": {"cents": 15, "currency_iso": "USD"}}
                ],
                "total": {"amount": "10.35", "currency": "USD"},
                "amount": "10.35",
                "currency": "USD"
            }"#,
        )
        .unwrap();

        assert_eq!(quote.fee("bank").map(|c| c.cents), Some(15));
        assert_eq!(quote.fee("coinbase").map(|c| c.cents), Some(10));
        assert!(quote.fee("network").is_none());
        assert_eq!(quote.total.amount, "10.35");
    }
}
