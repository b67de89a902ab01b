/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for coinbase-adapter tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use coinbase_adapter::{
    ApiKeyCredentials, ClientConfig, CoinbaseClient, Result, Transport, TransportRequest,
    TransportResponse,
};
use reqwest::StatusCode;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> ApiKeyCredentials {
    ApiKeyCredentials::new("test-key", "test-secret")
}

/// Client pointed at the mock server's `/api/v1/` prefix
pub fn mock_client(server: &MockServer) -> CoinbaseClient {
    CoinbaseClient::with_config(
        test_credentials(),
        ClientConfig::with_base_url(format!("{}/api/v1/", server.uri())),
    )
    .expect("client init")
}

/// Client against the live API, when credentials are present in the environment
pub fn live_client() -> Option<CoinbaseClient> {
    let key = std::env::var("COINBASE_KEY").ok()?;
    let secret = std::env::var("COINBASE_SECRET").ok()?;
    if key.is_empty() || secret.is_empty() {
        return None;
    }
    CoinbaseClient::new(key, secret).ok()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// In-memory transport that replays canned responses and records requests
#[derive(Debug, Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<TransportResponse>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_response(&self, status: StatusCode, body: impl Into<String>) {
        self.responses
            .lock()
            .expect("responses lock")
            .push_back(TransportResponse {
                status,
                body: body.into(),
            });
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse> {
        self.requests.lock().expect("requests lock").push(request);
        let response = self
            .responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or(TransportResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "no canned response".to_string(),
            });
        Ok(response)
    }
}

pub fn header<'a>(request: &'a TransportRequest, name: &str) -> Option<&'a str> {
    request
        .headers
        .iter()
        .find(|(header, _)| header.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}
