use std::sync::Arc;

use anyhow::{Context, Result};
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use crate::job::ReminderJob;

/// Runs the reminder job on a cron expression.
pub struct Scheduler {
    inner: JobScheduler,
}

impl Scheduler {
    pub async fn new() -> Result<Self> {
        let inner = JobScheduler::new()
            .await
            .context("Failed to create job scheduler")?;
        Ok(Self { inner })
    }

    /// Register `job` to fire on `cron_expr` (six fields, seconds first).
    ///
    /// A failed run is logged and the schedule keeps going.
    pub async fn schedule_reminder(&self, cron_expr: &str, job: Arc<ReminderJob>) -> Result<()> {
        let cron_job = Job::new_async(cron_expr, move |_uuid, _lock| {
            let job = job.clone();
            Box::pin(async move {
                info!("Running scheduled review reminder");
                match job.run().await {
                    Ok(count) => info!("Scheduled reminder finished: {} reviewer(s)", count),
                    Err(e) => error!("Scheduled reminder failed: {:#}", e),
                }
            })
        })
        .with_context(|| format!("Invalid cron expression: {}", cron_expr))?;

        self.inner
            .add(cron_job)
            .await
            .context("Failed to add reminder job")?;

        info!("Review reminder scheduled with cron: {}", cron_expr);
        Ok(())
    }

    pub async fn start(&self) -> Result<()> {
        self.inner
            .start()
            .await
            .context("Failed to start scheduler")?;
        info!("Scheduler started");
        Ok(())
    }

    pub async fn shutdown(&mut self) -> Result<()> {
        self.inner
            .shutdown()
            .await
            .context("Failed to shutdown scheduler")?;
        info!("Scheduler stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NotificationConfig, Provider};
    use crate::github::{PullRequest, PullRequestSource};
    use crate::platform::webhook::Delivery;
    use async_trait::async_trait;
    use serde_json::Value;

    struct Empty;

    #[async_trait]
    impl PullRequestSource for Empty {
        async fn open_pull_requests(&self) -> Result<Vec<PullRequest>> {
            Ok(Vec::new())
        }
    }

    #[async_trait]
    impl Delivery for Empty {
        async fn deliver(&self, _payload: &Value) -> Result<()> {
            Ok(())
        }
    }

    fn reminder_job() -> Arc<ReminderJob> {
        let notification = NotificationConfig {
            provider: Provider::Slack,
            webhook_url: "https://example.com/hook".to_string(),
            channel: None,
            identifier_map: String::new(),
            ignore_label: None,
        };
        Arc::new(ReminderJob::new(Arc::new(Empty), Arc::new(Empty), notification))
    }

    #[tokio::test]
    async fn test_schedule_valid_cron() {
        let scheduler = Scheduler::new().await.unwrap();
        scheduler
            .schedule_reminder("0 0 9 * * Mon-Fri", reminder_job())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_invalid_cron_is_rejected() {
        let scheduler = Scheduler::new().await.unwrap();
        let err = scheduler
            .schedule_reminder("every morning", reminder_job())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("every morning"));
    }
}
