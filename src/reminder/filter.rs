use crate::github::PullRequest;

/// Pull requests that still have at least one requested reviewer, in input order.
pub fn filter_with_pending_reviewers(pull_requests: &[PullRequest]) -> Vec<PullRequest> {
    pull_requests
        .iter()
        .filter(|pr| !pr.reviewers.is_empty())
        .cloned()
        .collect()
}

/// Drop pull requests carrying `label`. A missing or blank label keeps everything.
pub fn filter_without_label(pull_requests: &[PullRequest], label: Option<&str>) -> Vec<PullRequest> {
    let label = match label.map(str::trim) {
        Some(l) if !l.is_empty() => l,
        _ => return pull_requests.to_vec(),
    };

    pull_requests
        .iter()
        .filter(|pr| !pr.labels.iter().any(|l| l.name == label))
        .cloned()
        .collect()
}
