use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

/// Where a finished payload goes.
#[async_trait]
pub trait Delivery: Send + Sync {
    async fn deliver(&self, payload: &Value) -> Result<()>;
}

/// Incoming-webhook poster shared by every chat platform.
pub struct WebhookClient {
    client: reqwest::Client,
    url: String,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl Delivery for WebhookClient {
    async fn deliver(&self, payload: &Value) -> Result<()> {
        debug!("Posting reminder to webhook: {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .context("Failed to send request to webhook")?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!("Webhook error ({}): {}", status, error_body);
        }

        info!("Reminder delivered ({})", status);
        Ok(())
    }
}
