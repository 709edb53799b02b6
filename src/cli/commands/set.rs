//! The set command: resolve target and credential, then send if asked to

use crate::api::constants::TOKEN_ENV_VAR;
use crate::api::{HttpTransport, SetOutcome, Transport, attempt_set};
use crate::auth::{Credential, load_env_file};
use crate::config::{TargetConfig, TargetOverrides};
use anyhow::Result;
use clap::Args;
use colored::*;
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct SetArgs {
    /// Send the request. Without this flag nothing goes over the network.
    #[arg(long)]
    pub apply: bool,
    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Load environment variables from this .env file
    #[arg(long)]
    pub env_file: Option<PathBuf>,
    /// Vercel project ID
    #[arg(long)]
    pub project_id: Option<String>,
    /// Vercel team ID
    #[arg(long)]
    pub team_id: Option<String>,
    /// Variable name
    #[arg(long)]
    pub key: Option<String>,
    /// Variable value (defaults to the process variable named by --key)
    #[arg(long)]
    pub value: Option<String>,
    /// API base URL
    #[arg(long)]
    pub api_url: Option<String>,
}

impl SetArgs {
    fn overrides(&self) -> TargetOverrides {
        TargetOverrides {
            api_url: self.api_url.clone(),
            project_id: self.project_id.clone(),
            team_id: self.team_id.clone(),
            key: self.key.clone(),
            value: self.value.clone(),
        }
    }
}

/// Entry point for the command line. Returns whether the run succeeded.
///
/// Without a credential only the `.env` file is read before reporting.
pub async fn set_command<W: Write>(args: SetArgs, out: &mut W) -> Result<bool> {
    writeln!(out, "Attempting to configure environment variable...")?;

    load_env_file(args.env_file.as_deref())?;

    let Some(credential) = Credential::from_env() else {
        SetOutcome::MissingCredential.report(out)?;
        return Ok(true);
    };

    let mut config = TargetConfig::load(args.config.as_deref())?;
    config.apply_overrides(args.overrides());
    config.resolve_value_from_env();
    config.validate()?;
    info!("Resolved target: {:?}", config);

    let transport = HttpTransport::new()?;

    run_set(&config, Some(&credential), args.apply, &transport, out).await
}

/// Run against a resolved target. The transport is only used with `apply`
/// and a credential present.
pub async fn run_set<T, W>(
    config: &TargetConfig,
    credential: Option<&Credential>,
    apply: bool,
    transport: &T,
    out: &mut W,
) -> Result<bool>
where
    T: Transport + ?Sized,
    W: Write,
{
    if credential.is_none() {
        SetOutcome::MissingCredential.report(out)?;
        return Ok(true);
    }

    if !apply {
        print_preview(config, out)?;
        return Ok(true);
    }

    let outcome = attempt_set(config, credential, transport).await?;
    outcome.report(out)?;
    Ok(outcome.is_success())
}

fn print_preview(config: &TargetConfig, out: &mut impl Write) -> io::Result<()> {
    let targets = config
        .targets
        .iter()
        .map(|target| target.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let value_state = if config.value.is_some() {
        "set".green()
    } else {
        "missing".bright_yellow()
    };

    writeln!(out, "{}", "Request not sent".bright_yellow().bold())?;
    writeln!(out, "  {}: POST {}", "Endpoint".dimmed(), config.env_url().cyan())?;
    writeln!(out, "  {}: {}", "Key".dimmed(), config.key.bright_white())?;
    writeln!(out, "  {}: {}", "Value".dimmed(), value_state)?;
    writeln!(out, "  {}: {}", "Targets".dimmed(), targets)?;
    writeln!(
        out,
        "Run again with {} to send it using {}",
        "--apply".cyan(),
        TOKEN_ENV_VAR
    )
}
