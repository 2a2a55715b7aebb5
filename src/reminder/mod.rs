//! Turns open pull requests into a reviewer reminder message.
//!
//! Every function here is pure: no I/O, no logging, no failure path.
//! Fetching pull requests and delivering the message live in
//! [`crate::github`] and [`crate::platform`].

pub mod expand;
pub mod filter;
pub mod identifiers;
pub mod render;

pub use expand::expand_to_records;
pub use filter::{filter_with_pending_reviewers, filter_without_label};
pub use identifiers::{parse_identifier_map, IdentifierMap};
pub use render::{render_message, Dialect};

/// One reminder line: a single reviewer of a single pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRecord {
    pub url: String,
    pub title: String,
    pub username: String,
}
