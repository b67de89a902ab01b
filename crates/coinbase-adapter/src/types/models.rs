/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs shared across responses
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{ButtonStyle, ButtonType, TransactionStatus};

/// Monetary amount as reported by the API; the amount stays a string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub amount: String,
    pub currency: String,
}

impl Amount {
    /// Parse the amount into a decimal without going through floating point
    pub fn to_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        self.amount.trim().parse()
    }
}

/// Amount in minor currency units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cents {
    pub cents: i64,
    pub currency_iso: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address: String,
    #[serde(default)]
    pub callback_url: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    pub created_at: String,
}

/// The API wraps every address record in an `address` object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressEntry {
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonInfo {
    pub code: String,
    #[serde(rename = "type")]
    pub button_type: ButtonType,
    #[serde(default)]
    pub style: Option<ButtonStyle>,
    #[serde(default)]
    pub text: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub custom: Option<String>,
    #[serde(default)]
    pub callback_url: Option<String>,
    #[serde(default)]
    pub price: Option<Cents>,
}

/// Counterparty of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub created_at: String,
    /// Blockchain hash; absent until the transaction is broadcast
    #[serde(default)]
    pub hsh: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub amount: Amount,
    #[serde(default)]
    pub request: bool,
    pub status: TransactionStatus,
    #[serde(default)]
    pub sender: Option<UserSummary>,
    #[serde(default)]
    pub recipient: Option<UserSummary>,
    #[serde(default)]
    pub recipient_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEntry {
    pub transaction: Transaction,
}

/// Supported currency as a `[name, iso]` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency(pub String, pub String);

impl Currency {
    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn iso(&self) -> &str {
        &self.1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub native_currency: Option<String>,
    #[serde(default)]
    pub balance: Option<Amount>,
    #[serde(default)]
    pub buy_level: Option<u32>,
    #[serde(default)]
    pub sell_level: Option<u32>,
    #[serde(default)]
    pub buy_limit: Option<Amount>,
    #[serde(default)]
    pub sell_limit: Option<Amount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_to_decimal_keeps_precision() {
        let amount = Amount {
            amount: "36.62800000".to_string(),
            currency: "BTC".to_string(),
        };
        assert_eq!(amount.to_decimal().unwrap(), "36.628".parse::<Decimal>().unwrap());
        assert_eq!(amount.to_decimal().unwrap().to_string(), "36.62800000");
    }

    #[test]
    fn test_transaction_without_hash() {
        let json = r#"{
            "id": "5018f833f8182b129c00002f",
            "created_at": "2012-08-01T02:34:43-07:00",
            "amount": {"amount": "-1.10000000", "currency": "BTC"},
            "request": true,
            "status": "pending",
            "sender": {"id": "5011f33df8182b142400000e", "name": "User Two", "email": "user2@example.com"},
            "recipient": {"id": "5011f33df8182b142400000a", "name": "User One", "email": "user1@example.com"},
            "notes": ""
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.hsh, None);
        assert_eq!(tx.status, TransactionStatus::Pending);
        assert_eq!(tx.amount.currency, "BTC");
        assert!(tx.request);
    }

    #[test]
    fn test_unknown_transaction_status() {
        let status: TransactionStatus = serde_json::from_str(r#""expired""#).unwrap();
        assert_eq!(status, TransactionStatus::Unknown);
    }

    #[test]
    fn test_currency_pair() {
        let currencies: Vec<Currency> =
            serde_json::from_str(r#"[["Afghan Afghani (AFN)", "AFN"], ["US Dollar (USD)", "USD"]]"#)
                .unwrap();
        assert_eq!(currencies.len(), 2);
        assert_eq!(currencies[1].iso(), "USD");
        assert_eq!(currencies[0].name(), "Afghan Afghani (AFN)");
    }
}
