use super::constants::{self, headers};
use super::models::{EnvRequest, RawResponse};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

/// Sends a built request and hands back the raw response
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &EnvRequest) -> anyhow::Result<RawResponse>;
}

/// Vercel REST API transport backed by reqwest
#[derive(Clone)]
pub struct HttpTransport {
    http_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(constants::USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http_client })
    }

    /// Create a transport over an already configured HTTP client
    pub fn with_custom_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &EnvRequest) -> anyhow::Result<RawResponse> {
        log::debug!("POST {}", request.url);

        let response = self
            .http_client
            .post(&request.url)
            .header(AUTHORIZATION, format!("Bearer {}", request.bearer))
            .header(CONTENT_TYPE, headers::CONTENT_TYPE_JSON)
            .json(&request.payload)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", request.url))?;

        let status = response.status().as_u16();
        log::debug!("Response status: {}", status);

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        Ok(RawResponse { status, body })
    }
}
