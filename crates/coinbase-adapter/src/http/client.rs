/*
[INPUT]:  HTTP configuration (base URL, timeouts), credentials, transport
[OUTPUT]: Configured client ready for signed API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::auth::{ApiKeyCredentials, MonotonicNonce, NonceSource};
use crate::http::signature::RequestSigner;
use crate::http::transport::{ReqwestTransport, Transport, TransportRequest};
use crate::http::{CoinbaseError, Result};
use crate::types::ErrorEnvelope;

/// Base URL for the Coinbase v1 API
pub const DEFAULT_BASE_URL: &str = "https://coinbase.com/api/v1/";

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: concat!("coinbase-adapter/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Parsed base URL, always ending in `/` so endpoints join beneath it
    pub fn parsed_base_url(&self) -> Result<Url> {
        let mut base = self.base_url.trim().to_string();
        if base.is_empty() {
            return Err(CoinbaseError::Configuration("base URL is empty".to_string()));
        }
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Url::parse(&base)?)
    }
}

/// Main HTTP client for the Coinbase API
#[derive(Debug, Clone)]
pub struct CoinbaseClient {
    base_url: Url,
    signer: RequestSigner,
    transport: Arc<dyn Transport>,
}

impl CoinbaseClient {
    /// Create a new client from an API key and secret with default configuration
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        Self::with_config(ApiKeyCredentials::new(key, secret), ClientConfig::default())
    }

    /// Create a new client with custom configuration and the reqwest transport
    pub fn with_config(credentials: ApiKeyCredentials, config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(credentials, config, Arc::new(transport))
    }

    /// Create a new client on top of an arbitrary transport
    pub fn with_transport(
        credentials: ApiKeyCredentials,
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        Ok(Self {
            base_url: config.parsed_base_url()?,
            signer: RequestSigner::new(credentials, Arc::new(MonotonicNonce::new())),
            transport,
        })
    }

    /// Replace the nonce source; clients sharing a key should share one source
    pub fn with_nonce_source(mut self, nonce_source: Arc<dyn NonceSource>) -> Self {
        self.signer = RequestSigner::new(self.signer.credentials().clone(), nonce_source);
        self
    }

    pub fn credentials(&self) -> &ApiKeyCredentials {
        self.signer.credentials()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint relative to the base URL
    pub(crate) fn endpoint_url(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base_url.join(endpoint.trim_start_matches('/'))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint_url(endpoint, query)?;
        self.send_json(Method::GET, url, None).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.endpoint_url(endpoint, &[])?;
        let body = serde_json::to_string(body)?;
        self.send_json(Method::POST, url, Some(body)).await
    }

    /// Sign, send and decode one request
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
    ) -> Result<T> {
        let signed = self
            .signer
            .sign_request(url.as_str(), body.as_deref().unwrap_or_default())?;

        let mut headers: Vec<(String, String)> = signed
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        headers.push(("Content-Type".to_string(), "application/json".to_string()));
        headers.push(("Accept".to_string(), "application/json".to_string()));

        debug!(
            method = %method,
            path = url.path(),
            nonce = signed.nonce,
            "sending Coinbase request"
        );

        let response = self
            .transport
            .execute(TransportRequest {
                method,
                url,
                headers,
                body,
            })
            .await?;

        debug!(status = %response.status, bytes = response.body.len(), "received Coinbase response");
        decode_response(response.status, response.body)
    }
}

/// Classify a raw response into a typed model or an error
pub(crate) fn decode_response<T: DeserializeOwned>(status: StatusCode, body: String) -> Result<T> {
    if let Some(messages) = ErrorEnvelope::parse(&body) {
        warn!(status = %status, errors = ?messages, "Coinbase returned an error payload");
        return Err(CoinbaseError::Remote { status, messages });
    }
    if !status.is_success() {
        return Err(CoinbaseError::Status { status, body });
    }
    serde_json::from_str(&body).map_err(|source| CoinbaseError::Decode { source, body })
}
