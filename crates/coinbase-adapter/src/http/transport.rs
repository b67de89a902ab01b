/*
[INPUT]:  Method, URL, headers and optional body for one request
[OUTPUT]: Raw status code and response body
[POS]:    HTTP layer - transport boundary (reqwest by default)
[UPDATE]: When adding transport implementations or connection options
*/

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, Url};

use crate::http::client::ClientConfig;
use crate::http::Result;

/// Outgoing request handed to a transport
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Raw response returned by a transport
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Performs HTTP calls on behalf of the client.
///
/// Non-success statuses are returned as responses; only network failures are
/// errors at this layer.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse>;
}

/// Default transport backed by reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { http_client })
    }

    pub fn from_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse> {
        let mut builder = self.http_client.request(request.method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}
