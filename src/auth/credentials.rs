use crate::api::constants::TOKEN_ENV_VAR;
use anyhow::Result;
use log::{debug, info};
use std::fmt;
use std::path::Path;

/// Bearer token for the Vercel API
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Read the token from `VERCEL_TOKEN`. Unset or blank means no credential.
    pub fn from_env() -> Option<Credential> {
        let credential = Self::from_value(std::env::var(TOKEN_ENV_VAR).ok());
        debug!(
            "{} {}",
            TOKEN_ENV_VAR,
            if credential.is_some() { "found" } else { "not set" }
        );
        credential
    }

    /// Whitespace-only counts as unset; otherwise the token is kept as given
    pub fn from_value(value: Option<String>) -> Option<Credential> {
        value
            .filter(|token| !token.trim().is_empty())
            .map(Credential)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Load a `.env` file into the process environment.
///
/// An explicit path must exist; without one, a `.env` in the working
/// directory is picked up if present.
pub fn load_env_file(path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            info!("Importing from .env file: {}", path.display());
            if !path.exists() {
                anyhow::bail!("Environment file not found: {}", path.display());
            }
            dotenvy::from_path(path).map_err(|e| {
                anyhow::anyhow!("Failed to load .env file '{}': {}", path.display(), e)
            })?;
        }
        None => match dotenvy::dotenv() {
            Ok(found) => info!("Loaded .env file: {}", found.display()),
            Err(e) => debug!("No .env file loaded: {}", e),
        },
    }
    Ok(())
}
