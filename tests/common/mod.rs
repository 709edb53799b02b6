use async_trait::async_trait;
use std::sync::Mutex;
use vercel_env::api::{EnvRequest, RawResponse, Transport};

/// Transport that records requests and answers with a fixed response
pub struct MockTransport {
    response: RawResponse,
    requests: Mutex<Vec<EnvRequest>>,
}

impl MockTransport {
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            response: RawResponse::new(status, body),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<EnvRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &EnvRequest) -> anyhow::Result<RawResponse> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}

/// Transport that fails like an unreachable host
pub struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn send(&self, _request: &EnvRequest) -> anyhow::Result<RawResponse> {
        anyhow::bail!("connection refused")
    }
}
