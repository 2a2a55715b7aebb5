//! Pull request review reminders for chat webhooks.
//!
//! [`reminder`] holds the pure pipeline from pull requests to message text.
//! The other modules fetch pull requests, build provider payloads, deliver
//! them, and schedule runs.

pub mod config;
pub mod github;
pub mod job;
pub mod platform;
pub mod reminder;
pub mod scheduler;
