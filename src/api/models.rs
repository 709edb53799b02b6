use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment tier a variable value applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentTarget {
    Production,
    Preview,
    Development,
}

impl DeploymentTarget {
    pub const ALL: [DeploymentTarget; 3] = [
        DeploymentTarget::Production,
        DeploymentTarget::Preview,
        DeploymentTarget::Development,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentTarget::Production => "production",
            DeploymentTarget::Preview => "preview",
            DeploymentTarget::Development => "development",
        }
    }
}

impl fmt::Display for DeploymentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variable type tag. Only plain variables are created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvType {
    #[default]
    Plain,
}

/// JSON body of a create-variable request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvVarPayload {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub env_type: EnvType,
    pub target: Vec<DeploymentTarget>,
}

/// A fully built request, ready for a transport
#[derive(Clone)]
pub struct EnvRequest {
    pub url: String,
    pub bearer: String,
    pub payload: EnvVarPayload,
}

impl fmt::Debug for EnvRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvRequest")
            .field("url", &self.url)
            .field("bearer", &"<redacted>")
            .field("key", &self.payload.key)
            .field("target", &self.payload.target)
            .finish()
    }
}

/// Status and body of a response, read in full
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Vercel answers 201 on create, some deployments answer 200
    pub fn is_created(&self) -> bool {
        matches!(self.status, 200 | 201)
    }
}
