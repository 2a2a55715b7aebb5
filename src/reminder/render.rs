use crate::config::Provider;

use super::{IdentifierMap, NotificationRecord};

/// Formatting rules of one chat provider.
#[derive(Clone, Copy)]
pub struct Dialect {
    /// Mention for a reviewer whose identifier is known.
    pub resolved_mention: fn(&str) -> String,
    /// Mention for a reviewer with no identifier, given the raw username.
    pub fallback_mention: fn(&str) -> String,
    pub link: fn(&str) -> String,
    pub separator: &'static str,
}

fn at_username(username: &str) -> String {
    format!("@{}", username)
}

fn raw_url(url: &str) -> String {
    url.to_string()
}

impl Dialect {
    pub const SLACK: Dialect = Dialect {
        resolved_mention: |id| format!("<@{}>", id),
        fallback_mention: at_username,
        link: raw_url,
        separator: "\n",
    };

    /// Teams markdown needs two trailing spaces to break a line.
    pub const MSTEAMS: Dialect = Dialect {
        resolved_mention: |id| format!("<at>{}</at>", id),
        fallback_mention: at_username,
        link: |url| format!("[{}]({})", url, url),
        separator: "  \n",
    };

    pub fn for_provider(provider: &Provider) -> &'static Dialect {
        match provider {
            Provider::Msteams => &Self::MSTEAMS,
            Provider::Slack | Provider::Other => &Self::SLACK,
        }
    }

    pub fn mention(&self, username: &str, identifiers: &IdentifierMap) -> String {
        match identifiers.resolve(username) {
            Some(id) => (self.resolved_mention)(id),
            None => (self.fallback_mention)(username),
        }
    }

    fn line(&self, record: &NotificationRecord, identifiers: &IdentifierMap) -> String {
        format!(
            "Hey {}, the PR \"{}\" is waiting for your review: {}",
            self.mention(&record.username, identifiers),
            record.title,
            (self.link)(&record.url)
        )
    }
}

/// Render one reminder line per record, joined with the provider's line break.
pub fn render_message(
    records: &[NotificationRecord],
    identifiers: &IdentifierMap,
    provider: &Provider,
) -> String {
    let dialect = Dialect::for_provider(provider);
    records
        .iter()
        .map(|record| dialect.line(record, identifiers))
        .collect::<Vec<_>>()
        .join(dialect.separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<NotificationRecord> {
        [
            ("https://example.com/1", "Title1", "User1"),
            ("https://example.com/1", "Title1", "User2"),
            ("https://example.com/3", "Title3", "User3"),
        ]
        .into_iter()
        .map(|(url, title, username)| NotificationRecord {
            url: url.to_string(),
            title: title.to_string(),
            username: username.to_string(),
        })
        .collect()
    }

    fn full_map() -> IdentifierMap {
        [
            ("User1", Some("ID123".to_string())),
            ("User2", Some("ID456".to_string())),
            ("User3", Some("ID789".to_string())),
        ]
        .into_iter()
        .collect()
    }

    fn unresolved_map() -> IdentifierMap {
        [("User1", None::<String>), ("User2", None)].into_iter().collect()
    }

    #[test]
    fn test_slack_correct_map() {
        let message = render_message(&records(), &full_map(), &Provider::Slack);
        let rows: Vec<&str> = message.split('\n').collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            "Hey <@ID123>, the PR \"Title1\" is waiting for your review: https://example.com/1"
        );
        assert_eq!(
            rows[1],
            "Hey <@ID456>, the PR \"Title1\" is waiting for your review: https://example.com/1"
        );
        assert_eq!(
            rows[2],
            "Hey <@ID789>, the PR \"Title3\" is waiting for your review: https://example.com/3"
        );
    }

    #[test]
    fn test_slack_unresolved_map() {
        let message = render_message(&records(), &unresolved_map(), &Provider::Slack);
        let rows: Vec<&str> = message.split('\n').collect();
        assert_eq!(
            rows[0],
            "Hey @User1, the PR \"Title1\" is waiting for your review: https://example.com/1"
        );
        assert_eq!(
            rows[1],
            "Hey @User2, the PR \"Title1\" is waiting for your review: https://example.com/1"
        );
    }

    #[test]
    fn test_slack_no_map() {
        let message = render_message(&records(), &IdentifierMap::new(), &Provider::Slack);
        let rows: Vec<&str> = message.split('\n').collect();
        assert_eq!(
            rows,
            vec![
                "Hey @User1, the PR \"Title1\" is waiting for your review: https://example.com/1",
                "Hey @User2, the PR \"Title1\" is waiting for your review: https://example.com/1",
                "Hey @User3, the PR \"Title3\" is waiting for your review: https://example.com/3",
            ]
        );
    }

    #[test]
    fn test_empty_and_unresolved_maps_render_the_same() {
        let records = records();
        for provider in [Provider::Slack, Provider::Msteams, Provider::Other] {
            let subset = &records[..2];
            assert_eq!(
                render_message(subset, &IdentifierMap::new(), &provider),
                render_message(subset, &unresolved_map(), &provider)
            );
        }
    }

    #[test]
    fn test_msteams_no_map() {
        let message = render_message(&records(), &IdentifierMap::new(), &Provider::Msteams);
        let rows: Vec<&str> = message.split("  \n").collect();
        assert_eq!(
            rows,
            vec![
                "Hey @User1, the PR \"Title1\" is waiting for your review: [https://example.com/1](https://example.com/1)",
                "Hey @User2, the PR \"Title1\" is waiting for your review: [https://example.com/1](https://example.com/1)",
                "Hey @User3, the PR \"Title3\" is waiting for your review: [https://example.com/3](https://example.com/3)",
            ]
        );
    }

    #[test]
    fn test_msteams_resolved_mention() {
        let message = render_message(&records()[2..], &full_map(), &Provider::Msteams);
        assert_eq!(
            message,
            "Hey <at>ID789</at>, the PR \"Title3\" is waiting for your review: [https://example.com/3](https://example.com/3)"
        );
    }

    #[test]
    fn test_unknown_provider_uses_slack_dialect() {
        assert_eq!(
            render_message(&records(), &full_map(), &Provider::Other),
            render_message(&records(), &full_map(), &Provider::Slack)
        );
    }

    #[test]
    fn test_no_leading_or_trailing_separator() {
        let message = render_message(&records(), &full_map(), &Provider::Msteams);
        assert!(message.starts_with("Hey "));
        assert!(!message.ends_with('\n'));
        assert_eq!(message.matches("  \n").count(), 2);
    }

    #[test]
    fn test_empty_records() {
        assert_eq!(render_message(&[], &full_map(), &Provider::Slack), "");
        assert_eq!(render_message(&[], &full_map(), &Provider::Msteams), "");
    }
}
