//! Setting a single environment variable on a project

use super::client::Transport;
use super::constants::TOKEN_ENV_VAR;
use super::models::{EnvRequest, EnvType, EnvVarPayload, RawResponse};
use crate::auth::Credential;
use crate::config::TargetConfig;
use colored::*;
use log::{info, warn};
use std::fmt;
use std::io::{self, Write};

/// Terminal result of one attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOutcome {
    /// The API accepted the variable
    Created { key: String },
    /// No credential was available, nothing was sent
    MissingCredential,
    /// The API answered with a non-success status
    Rejected { status: u16, body: String },
}

impl SetOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SetOutcome::Created { .. })
    }

    /// Print the outcome the way the CLI shows it
    pub fn report(&self, out: &mut impl Write) -> io::Result<()> {
        let marker = if self.is_success() {
            "✓".bright_green().bold()
        } else {
            "✗".bright_red().bold()
        };
        writeln!(out, "{} {}", marker, self)
    }
}

impl fmt::Display for SetOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetOutcome::Created { key } => {
                write!(f, "Success: variable {} added to Vercel", key)
            }
            SetOutcome::MissingCredential => {
                write!(f, "Error: {} not found in the environment", TOKEN_ENV_VAR)
            }
            SetOutcome::Rejected { status, body } => {
                write!(f, "Failed to add variable: {}\n{}", status, body)
            }
        }
    }
}

/// Build the create-variable request for a target and credential
pub fn build_request(config: &TargetConfig, credential: &Credential) -> anyhow::Result<EnvRequest> {
    let value = config
        .value
        .clone()
        .ok_or_else(|| anyhow::anyhow!("No value configured for variable '{}'", config.key))?;

    Ok(EnvRequest {
        url: config.env_url(),
        bearer: credential.expose().to_string(),
        payload: EnvVarPayload {
            key: config.key.clone(),
            value,
            env_type: EnvType::Plain,
            target: config.targets.clone(),
        },
    })
}

/// Try once to set the configured variable.
///
/// A missing credential short-circuits before any I/O. Transport faults are
/// returned as errors; HTTP-level failures are an outcome.
pub async fn attempt_set<T>(
    config: &TargetConfig,
    credential: Option<&Credential>,
    transport: &T,
) -> anyhow::Result<SetOutcome>
where
    T: Transport + ?Sized,
{
    let Some(credential) = credential else {
        warn!("{} not set, skipping request", TOKEN_ENV_VAR);
        return Ok(SetOutcome::MissingCredential);
    };

    let request = build_request(config, credential)?;
    info!(
        "Setting {} on project {} (team {}) for targets {:?}",
        config.key, config.project_id, config.team_id, config.targets
    );

    let response: RawResponse = transport.send(&request).await?;
    if response.is_created() {
        info!("Variable {} created ({})", config.key, response.status);
        Ok(SetOutcome::Created {
            key: config.key.clone(),
        })
    } else {
        warn!("Variable {} rejected with status {}", config.key, response.status);
        Ok(SetOutcome::Rejected {
            status: response.status,
            body: response.body,
        })
    }
}
