use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Chat provider whose formatting dialect the reminder uses.
/// Names are matched case-insensitively; unknown ones become `Other`,
/// which renders like Slack.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Slack,
    Msteams,
    Other,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Slack => write!(f, "slack"),
            Provider::Msteams => write!(f, "msteams"),
            Provider::Other => write!(f, "other"),
        }
    }
}

impl From<&str> for Provider {
    fn from(selector: &str) -> Self {
        match selector.trim().to_ascii_lowercase().as_str() {
            "slack" => Provider::Slack,
            "msteams" => Provider::Msteams,
            _ => Provider::Other,
        }
    }
}

impl From<String> for Provider {
    fn from(selector: String) -> Self {
        Provider::from(selector.as_str())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_github_config")]
    pub github: GithubConfig,
    pub notification: NotificationConfig,
    #[serde(default)]
    pub schedule: Option<ScheduleConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GithubConfig {
    /// `owner/repo`; falls back to `GITHUB_REPOSITORY`.
    #[serde(default)]
    pub repository: Option<String>,
    /// Falls back to `GITHUB_TOKEN`.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl GithubConfig {
    pub fn effective_repository(&self) -> Option<String> {
        non_empty_or_env(&self.repository, "GITHUB_REPOSITORY")
    }

    pub fn effective_token(&self) -> Option<String> {
        non_empty_or_env(&self.token, "GITHUB_TOKEN")
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationConfig {
    #[serde(default)]
    pub provider: Provider,
    pub webhook_url: String,
    /// Slack channel override, e.g. `#reviews`.
    #[serde(default)]
    pub channel: Option<String>,
    /// Raw `user:ID,user:ID` mapping from GitHub login to chat identifier.
    #[serde(default)]
    pub identifier_map: String,
    /// Pull requests carrying this label are never reminded about.
    #[serde(default)]
    pub ignore_label: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleConfig {
    /// Six-field cron expression (seconds first).
    pub cron: String,
}

fn non_empty_or_env(value: &Option<String>, var: &str) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var(var).ok().filter(|v| !v.trim().is_empty()))
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_github_config() -> GithubConfig {
    GithubConfig {
        repository: None,
        token: None,
        api_url: default_api_url(),
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Invalid TOML")?;

        if config.notification.webhook_url.trim().is_empty() {
            anyhow::bail!("notification.webhook_url must not be empty");
        }

        Ok(config)
    }
}
