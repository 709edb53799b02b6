//! Vercel REST API access
//!
//! Request/response models, the transport seam and the single operation this
//! tool performs: creating a project environment variable.

pub mod client;
pub mod constants;
pub mod models;
pub mod setter;

pub use client::{HttpTransport, Transport};
pub use models::{DeploymentTarget, EnvRequest, EnvType, EnvVarPayload, RawResponse};
pub use setter::{SetOutcome, attempt_set, build_request};
