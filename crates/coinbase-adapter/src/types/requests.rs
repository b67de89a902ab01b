/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization and structural checks
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::{ButtonStyle, ButtonType, Repeat};
use crate::http::{CoinbaseError, Result};

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoinbaseError::Validation(format!("{field} is required")));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Body for `POST account/generate_receive_address`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceiveAddressParams {
    pub address: AddressParams,
}

impl ReceiveAddressParams {
    /// Every field is optional; values are sent as given.
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Query for `GET addresses`. Values are passed through as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl AddressesParams {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(account_id) = &self.account_id {
            pairs.push(("account_id", account_id.clone()));
        }
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        pairs
    }
}

/// Payment button definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub name: String,
    #[serde(rename = "type")]
    pub button_type: ButtonType,
    #[serde(default)]
    pub subscription: bool,
    pub price_string: String,
    pub price_currency_iso: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<Repeat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_secure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_redirect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_price: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choose_price: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_email: Option<bool>,
}

impl Button {
    /// Button with the required fields set and everything else unset
    pub fn new(
        name: impl Into<String>,
        button_type: ButtonType,
        price_string: impl Into<String>,
        price_currency_iso: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            button_type,
            subscription: matches!(button_type, ButtonType::Subscription),
            price_string: price_string.into(),
            price_currency_iso: price_currency_iso.into(),
            repeat: None,
            style: None,
            text: None,
            description: None,
            custom: None,
            custom_secure: None,
            callback_url: None,
            success_url: None,
            cancel_url: None,
            info_url: None,
            auto_redirect: None,
            variable_price: None,
            choose_price: None,
            include_address: None,
            include_email: None,
        }
    }
}

/// Body for `POST buttons`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonParams {
    pub button: Button,
}

impl ButtonParams {
    pub fn validate(&self) -> Result<()> {
        let button = &self.button;
        require_non_empty("button.name", &button.name)?;
        require_non_empty("button.price_string", &button.price_string)?;
        require_non_empty("button.price_currency_iso", &button.price_currency_iso)
    }
}
