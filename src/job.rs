use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::NotificationConfig;
use crate::github::PullRequestSource;
use crate::platform::webhook::Delivery;
use crate::platform::OutgoingMessage;
use crate::reminder;

/// One pass of the reminder: fetch, filter, render, deliver.
pub struct ReminderJob {
    source: Arc<dyn PullRequestSource>,
    delivery: Arc<dyn Delivery>,
    notification: NotificationConfig,
}

impl ReminderJob {
    pub fn new(
        source: Arc<dyn PullRequestSource>,
        delivery: Arc<dyn Delivery>,
        notification: NotificationConfig,
    ) -> Self {
        Self {
            source,
            delivery,
            notification,
        }
    }

    /// Run once. Returns how many reviewers were reminded; nothing is
    /// delivered when that is zero.
    pub async fn run(&self) -> Result<usize> {
        let pull_requests = self
            .source
            .open_pull_requests()
            .await
            .context("Failed to fetch pull requests")?;
        debug!("Fetched {} open pull request(s)", pull_requests.len());

        let pending = reminder::filter_with_pending_reviewers(&pull_requests);
        let pending =
            reminder::filter_without_label(&pending, self.notification.ignore_label.as_deref());
        if pending.is_empty() {
            info!("No pull requests waiting for review");
            return Ok(0);
        }

        let records = reminder::expand_to_records(&pending);
        let identifiers = reminder::parse_identifier_map(&self.notification.identifier_map);
        let provider = &self.notification.provider;
        let text = reminder::render_message(&records, &identifiers, provider);

        info!(
            "Reminding {} reviewer(s) on {} pull request(s) via {}",
            records.len(),
            pending.len(),
            provider
        );

        let payload = OutgoingMessage {
            provider,
            channel: self.notification.channel.as_deref(),
            text: &text,
            records: &records,
            identifiers: &identifiers,
        }
        .payload();

        self.delivery
            .deliver(&payload)
            .await
            .context("Failed to deliver reminder")?;

        Ok(records.len())
    }
}
