use serde_json::{json, Value};

use super::OutgoingMessage;
use crate::reminder::Dialect;

/// Adaptive Card webhook body.
///
/// Teams only turns `<at>..</at>` into a ping when a matching mention
/// entity is attached, so every resolved reviewer gets one.
pub fn payload(message: &OutgoingMessage<'_>) -> Value {
    json!({
        "type": "message",
        "attachments": [{
            "contentType": "application/vnd.microsoft.card.adaptive",
            "content": {
                "type": "AdaptiveCard",
                "$schema": "http://adaptivecards.io/schemas/adaptive-card.json",
                "version": "1.0",
                "body": [{
                    "type": "TextBlock",
                    "text": message.text,
                    "wrap": true,
                }],
                "msteams": {
                    "width": "Full",
                    "entities": mentions(message),
                },
            },
        }],
    })
}

fn mentions(message: &OutgoingMessage<'_>) -> Vec<Value> {
    message
        .records
        .iter()
        .filter_map(|record| {
            let id = message.identifiers.resolve(&record.username)?;
            Some(json!({
                "type": "mention",
                "text": (Dialect::MSTEAMS.resolved_mention)(id),
                "mentioned": {
                    "id": id,
                    "name": record.username,
                },
            }))
        })
        .collect()
}
