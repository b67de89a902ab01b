/*
[INPUT]:  Request URL, body, credentials and nonce source
[OUTPUT]: Signed request headers (ACCESS_KEY, ACCESS_SIGNATURE, ACCESS_NONCE)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use std::sync::Arc;

use crate::auth::{ApiKeyCredentials, HmacSigner, NonceSource};
use crate::http::{CoinbaseError, Result};

pub const ACCESS_KEY_HEADER: &str = "ACCESS_KEY";
pub const ACCESS_SIGNATURE_HEADER: &str = "ACCESS_SIGNATURE";
pub const ACCESS_NONCE_HEADER: &str = "ACCESS_NONCE";

/// Authentication headers attached to one outgoing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub nonce: u64,
    headers: Vec<(&'static str, String)>,
}

impl SignedHeaders {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.headers.iter().map(|(name, value)| (*name, value.as_str()))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn signature(&self) -> Option<&str> {
        self.get(ACCESS_SIGNATURE_HEADER)
    }
}

/// Signs requests with the account's API key
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: ApiKeyCredentials,
    nonce_source: Arc<dyn NonceSource>,
}

impl RequestSigner {
    pub fn new(credentials: ApiKeyCredentials, nonce_source: Arc<dyn NonceSource>) -> Self {
        Self {
            credentials,
            nonce_source,
        }
    }

    pub fn credentials(&self) -> &ApiKeyCredentials {
        &self.credentials
    }

    /// Sign a request using the next nonce from the configured source
    pub fn sign_request(&self, url: &str, body: &str) -> Result<SignedHeaders> {
        self.ensure_credentials()?;
        let nonce = self.nonce_source.next_nonce();
        self.sign_with_nonce(nonce, url, body)
    }

    /// Sign a request with an explicit nonce.
    ///
    /// Message format: "{nonce}{url}{body}", HMAC-SHA256 keyed with the
    /// secret, hex-encoded.
    pub fn sign_with_nonce(&self, nonce: u64, url: &str, body: &str) -> Result<SignedHeaders> {
        self.ensure_credentials()?;
        let signer = HmacSigner::new(self.credentials.secret())?;
        let message = format!("{nonce}{url}{body}");
        let signature = signer.sign(message.as_bytes())?;

        Ok(SignedHeaders {
            nonce,
            headers: vec![
                (ACCESS_KEY_HEADER, self.credentials.key().to_string()),
                (ACCESS_SIGNATURE_HEADER, signature),
                (ACCESS_NONCE_HEADER, nonce.to_string()),
            ],
        })
    }

    fn ensure_credentials(&self) -> Result<()> {
        if self.credentials.key().is_empty() {
            return Err(CoinbaseError::Configuration("API key is empty".to_string()));
        }
        if self.credentials.secret().is_empty() {
            return Err(CoinbaseError::Configuration(
                "API secret is empty".to_string(),
            ));
        }
        Ok(())
    }
}
