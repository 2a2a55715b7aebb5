use serde_json::{json, Value};

use super::OutgoingMessage;

const BOT_NAME: &str = "Pull Request reviews reminder";

/// Incoming-webhook body. Slack renders `<@ID>` mentions from plain text.
pub fn payload(message: &OutgoingMessage<'_>) -> Value {
    let mut body = json!({
        "username": BOT_NAME,
        "text": message.text,
    });
    if let Some(channel) = message.channel.map(str::trim).filter(|c| !c.is_empty()) {
        body["channel"] = json!(channel);
    }
    body
}
