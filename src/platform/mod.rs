pub mod msteams;
pub mod slack;
pub mod webhook;

use serde_json::Value;

use crate::config::Provider;
use crate::reminder::{IdentifierMap, NotificationRecord};

/// A rendered reminder on its way to a chat platform
#[derive(Debug, Clone)]
pub struct OutgoingMessage<'a> {
    pub provider: &'a Provider,
    /// Slack channel override; ignored by other platforms
    pub channel: Option<&'a str>,
    /// The rendered reminder text
    pub text: &'a str,
    /// Records the text was rendered from, used for Teams mention entities
    pub records: &'a [NotificationRecord],
    pub identifiers: &'a IdentifierMap,
}

impl OutgoingMessage<'_> {
    /// JSON body for the provider's incoming webhook.
    pub fn payload(&self) -> Value {
        match self.provider {
            Provider::Msteams => msteams::payload(self),
            Provider::Slack | Provider::Other => slack::payload(self),
        }
    }
}
