//! HTTP transport used to post the questionnaire payload

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use hyper::client::HttpConnector;
use hyper::header::{ACCEPT, CONTENT_TYPE};
use hyper::{Body, Client, Method, Request};
use url::Url;

/// Status and raw body of an endpoint response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx responses count as success
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` as `application/json` to `path`
    async fn post_json(&self, path: &str, body: Vec<u8>) -> Result<TransportResponse>;
}

/// Plain-HTTP transport on top of the hyper client
#[derive(Clone)]
pub struct HyperTransport {
    client: Client<HttpConnector>,
    base_url: Url,
}

impl HyperTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.scheme() != "http" {
            return Err(Error::config(format!(
                "HyperTransport speaks plain HTTP only, got '{}'",
                base_url
            )));
        }

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HyperTransport {
    async fn post_json(&self, path: &str, body: Vec<u8>) -> Result<TransportResponse> {
        let url = self.base_url.join(path)?;
        log::debug!("POST {} ({} bytes)", url, body.len());

        let request = Request::builder()
            .method(Method::POST)
            .uri(url.as_str())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(Body::from(body))
            .map_err(|e| Error::internal(format!("Failed to build request: {}", e)))?;

        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| Error::network(format!("POST {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let body = hyper::body::to_bytes(response.into_body()).await?;

        log::debug!("POST {} -> {} ({} bytes)", url, status, body.len());
        Ok(TransportResponse::new(status, body.to_vec()))
    }
}
