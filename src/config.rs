use crate::api::constants::{self, defaults};
use crate::api::models::DeploymentTarget;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// The project variable to set and where to send it
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub api_url: String,
    pub project_id: String,
    pub team_id: String,
    pub key: String,
    pub value: Option<String>,
    pub targets: Vec<DeploymentTarget>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            api_url: constants::API_BASE_URL.to_string(),
            project_id: defaults::PROJECT_ID.to_string(),
            team_id: defaults::TEAM_ID.to_string(),
            key: defaults::ENV_KEY.to_string(),
            value: None,
            targets: DeploymentTarget::ALL.to_vec(),
        }
    }
}

impl fmt::Debug for TargetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetConfig")
            .field("api_url", &self.api_url)
            .field("project_id", &self.project_id)
            .field("team_id", &self.team_id)
            .field("key", &self.key)
            .field("value", &self.value.as_ref().map(|_| "<redacted>"))
            .field("targets", &self.targets)
            .finish()
    }
}

/// Command-line values that replace configured ones
#[derive(Debug, Default, Clone)]
pub struct TargetOverrides {
    pub api_url: Option<String>,
    pub project_id: Option<String>,
    pub team_id: Option<String>,
    pub key: Option<String>,
    pub value: Option<String>,
}

impl TargetConfig {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("vercel-env")
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".vercel-env")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load from an explicit file, or from the default location if it exists
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                path.to_path_buf()
            }
            None => {
                let default_path = Self::get_config_path()?;
                if !default_path.exists() {
                    info!("No config file at {:?}, using defaults", default_path);
                    return Ok(Self::default());
                }
                default_path
            }
        };

        debug!("Loading config from: {:?}", config_path);
        let config_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        Self::from_toml_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TargetConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, overrides: TargetOverrides) {
        if let Some(api_url) = overrides.api_url {
            self.api_url = api_url;
        }
        if let Some(project_id) = overrides.project_id {
            self.project_id = project_id;
        }
        if let Some(team_id) = overrides.team_id {
            self.team_id = team_id;
        }
        if let Some(key) = overrides.key {
            self.key = key;
        }
        if overrides.value.is_some() {
            self.value = overrides.value;
        }
    }

    /// Fill a missing value from the process variable named after the key
    pub fn resolve_value_from_env(&mut self) {
        self.resolve_value_with(|name| std::env::var(name).ok());
    }

    pub fn resolve_value_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if self.value.is_some() {
            return;
        }
        self.value = lookup(&self.key).filter(|value| !value.is_empty());
        if self.value.is_some() {
            debug!("Value for {} taken from the environment", self.key);
        }
    }

    /// Reject empty identifiers and drop repeated targets
    pub fn validate(&mut self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            anyhow::bail!("API URL must not be empty");
        }
        if self.project_id.trim().is_empty() {
            anyhow::bail!("Project ID must not be empty");
        }
        if self.team_id.trim().is_empty() {
            anyhow::bail!("Team ID must not be empty");
        }
        if self.key.trim().is_empty() {
            anyhow::bail!("Variable key must not be empty");
        }
        if self.targets.is_empty() {
            anyhow::bail!("At least one deployment target is required");
        }

        let mut seen = Vec::with_capacity(self.targets.len());
        self.targets.retain(|target| {
            if seen.contains(target) {
                false
            } else {
                seen.push(*target);
                true
            }
        });

        Ok(())
    }

    pub fn env_url(&self) -> String {
        constants::project_env_endpoint(&self.api_url, &self.project_id, &self.team_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_target_all_tiers() {
        let config = TargetConfig::default();
        assert_eq!(
            config.targets,
            vec![
                DeploymentTarget::Production,
                DeploymentTarget::Preview,
                DeploymentTarget::Development
            ]
        );
        assert_eq!(config.key, "VITE_GEMINI_API_KEY");
        assert!(config.value.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = TargetConfig::from_toml_str(
            r#"
            key = "DATABASE_URL"
            targets = ["preview"]
            "#,
        )
        .unwrap();

        assert_eq!(config.key, "DATABASE_URL");
        assert_eq!(config.targets, vec![DeploymentTarget::Preview]);
        assert_eq!(config.project_id, defaults::PROJECT_ID);
        assert_eq!(config.api_url, constants::API_BASE_URL);
    }

    #[test]
    fn test_unknown_target_is_rejected() {
        assert!(TargetConfig::from_toml_str(r#"targets = ["staging"]"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "project_id = \"prj_abc\"\nteam_id = \"team_xyz\"").unwrap();

        let config = TargetConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.project_id, "prj_abc");
        assert_eq!(config.team_id, "team_xyz");
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let err = TargetConfig::load(Some(Path::new("/nonexistent/vercel-env.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_overrides_win() {
        let mut config = TargetConfig::default();
        config.apply_overrides(TargetOverrides {
            team_id: Some("team_other".to_string()),
            value: Some("v".to_string()),
            ..Default::default()
        });

        assert_eq!(config.team_id, "team_other");
        assert_eq!(config.project_id, defaults::PROJECT_ID);
        assert_eq!(config.value.as_deref(), Some("v"));
    }

    #[test]
    fn test_value_lookup_by_key() {
        let mut config = TargetConfig::default();
        config.resolve_value_with(|name| {
            (name == "VITE_GEMINI_API_KEY").then(|| "from-env".to_string())
        });
        assert_eq!(config.value.as_deref(), Some("from-env"));

        config.resolve_value_with(|_| Some("ignored".to_string()));
        assert_eq!(config.value.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_validate_dedups_targets() {
        let mut config = TargetConfig {
            targets: vec![
                DeploymentTarget::Preview,
                DeploymentTarget::Production,
                DeploymentTarget::Preview,
            ],
            ..TargetConfig::default()
        };
        config.validate().unwrap();
        assert_eq!(
            config.targets,
            vec![DeploymentTarget::Preview, DeploymentTarget::Production]
        );
    }

    #[test]
    fn test_validate_rejects_empty_ids() {
        let mut config = TargetConfig {
            project_id: String::new(),
            ..TargetConfig::default()
        };
        assert!(config.validate().is_err());

        let mut config = TargetConfig {
            targets: Vec::new(),
            ..TargetConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_hides_value() {
        let config = TargetConfig {
            value: Some("AIza-secret".to_string()),
            ..TargetConfig::default()
        };
        assert!(!format!("{:?}", config).contains("AIza-secret"));
    }
}
