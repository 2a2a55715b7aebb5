use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use review_reminder::config::Config;
use review_reminder::github::GithubClient;
use review_reminder::job::ReminderJob;
use review_reminder::platform::webhook::WebhookClient;
use review_reminder::scheduler::Scheduler;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,review_reminder=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Usage: review-reminder [config.toml] [--once]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let once = args.iter().any(|a| a == "--once");
    let config_path = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"));

    info!("Loading configuration from: {}", config_path.display());
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    info!("Configuration loaded successfully");
    info!("  Provider: {}", config.notification.provider);
    info!(
        "  Repository: {}",
        config
            .github
            .effective_repository()
            .as_deref()
            .unwrap_or("<unset>")
    );
    if let Some(label) = &config.notification.ignore_label {
        info!("  Ignoring label: {}", label);
    }

    let source = GithubClient::new(&config.github)?;
    let delivery = WebhookClient::new(config.notification.webhook_url.clone());
    let job = Arc::new(ReminderJob::new(
        Arc::new(source),
        Arc::new(delivery),
        config.notification.clone(),
    ));

    match config.schedule.as_ref().filter(|_| !once) {
        Some(schedule) => {
            let mut scheduler = Scheduler::new().await?;
            scheduler.schedule_reminder(&schedule.cron, job).await?;
            scheduler.start().await?;

            tokio::signal::ctrl_c()
                .await
                .context("Failed to listen for shutdown signal")?;
            info!("Shutting down...");
            scheduler.shutdown().await?;
        }
        None => {
            let count = job.run().await?;
            info!("Done: reminded {} reviewer(s)", count);
        }
    }

    Ok(())
}
