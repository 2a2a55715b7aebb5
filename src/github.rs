use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::GithubConfig;

/// An open pull request as returned by `GET /repos/{owner}/{repo}/pulls`.
/// Only the fields the reminder needs are kept.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PullRequest {
    #[serde(rename = "html_url")]
    pub url: String,
    #[serde(default)]
    pub title: String,
    /// Absent or `null` in the payload is read as no reviewers.
    #[serde(
        rename = "requested_reviewers",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub reviewers: Vec<ReviewerRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReviewerRef {
    #[serde(rename = "login")]
    pub username: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Label {
    pub name: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Anything that can list the open pull requests to remind about.
#[async_trait]
pub trait PullRequestSource: Send + Sync {
    async fn open_pull_requests(&self) -> Result<Vec<PullRequest>>;
}

pub struct GithubClient {
    client: reqwest::Client,
    api_url: String,
    repository: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(config: &GithubConfig) -> Result<Self> {
        let repository = config
            .effective_repository()
            .context("No repository configured (set github.repository or GITHUB_REPOSITORY)")?;
        Ok(Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            repository,
            token: config.effective_token(),
        })
    }

    fn pulls_url(&self) -> String {
        format!(
            "{}/repos/{}/pulls?state=open&per_page=100",
            self.api_url, self.repository
        )
    }
}

#[async_trait]
impl PullRequestSource for GithubClient {
    async fn open_pull_requests(&self) -> Result<Vec<PullRequest>> {
        let url = self.pulls_url();

        debug!("Fetching open pull requests: {}", url);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "review-reminder");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .context("Failed to send request to GitHub")?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!("GitHub API error ({}): {}", status, error_body);
        }

        response
            .json()
            .await
            .context("Failed to parse GitHub pull requests response")
    }
}
