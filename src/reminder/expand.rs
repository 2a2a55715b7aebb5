use crate::github::PullRequest;

use super::NotificationRecord;

/// One record per (pull request, reviewer) pair, in input order.
///
/// Pull requests without reviewers yield nothing, so unfiltered input is fine.
pub fn expand_to_records(pull_requests: &[PullRequest]) -> Vec<NotificationRecord> {
    pull_requests
        .iter()
        .flat_map(|pr| {
            pr.reviewers.iter().map(move |reviewer| NotificationRecord {
                url: pr.url.clone(),
                title: pr.title.clone(),
                username: reviewer.username.clone(),
            })
        })
        .collect()
}
