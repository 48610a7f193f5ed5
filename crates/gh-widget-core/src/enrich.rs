//! Per-PR status resolvers and the enrichment fan-out
//!
//! Three independent lookups per pull request: CI rollup, review decision,
//! Graphite deep link. Each resolver catches its own transport/parsing
//! failures and degrades to its defined fallback value, so enrichment is
//! always best-effort and never aborts a refresh cycle.
//!
//! The fan-out issues all N×3 resolver calls before awaiting any of them:
//! `join_all` across items, `tokio::join!` across the three resolvers of one
//! item. Wall-clock cost is one round-trip latency, and the merged result
//! preserves list order structurally no matter which call settles first.

use crate::snapshot::EnrichedPullRequest;
use crate::status::{CiStatus, ReviewStatus};
use gh_widget_client::{GitHubClient, IssueComment, PullRequestSummary, Review, RollupState};
use log::warn;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Comment substrings identifying a Graphite bot comment
const GRAPHITE_SENTINELS: [&str; 2] = ["managed by Graphite", "View in Graphite"];

/// Enrich every pull request in the list, preserving list order
pub(crate) async fn enrich_all<C: GitHubClient>(
    client: &C,
    token: &str,
    summaries: Vec<PullRequestSummary>,
) -> Vec<EnrichedPullRequest> {
    let tasks = summaries
        .into_iter()
        .map(|summary| enrich_one(client, token, summary));
    futures::future::join_all(tasks).await
}

/// Run the three resolvers of one pull request concurrently and merge
async fn enrich_one<C: GitHubClient>(
    client: &C,
    token: &str,
    summary: PullRequestSummary,
) -> EnrichedPullRequest {
    let (ci_status, review_status, graphite_url) = tokio::join!(
        resolve_ci_status(client, token, &summary),
        resolve_review_status(client, token, &summary),
        resolve_graphite_url(client, token, &summary),
    );

    EnrichedPullRequest {
        summary,
        ci_status,
        review_status,
        graphite_url,
    }
}

/// CI resolver: status-check rollup of the PR's current head commit
///
/// Failure of any kind degrades to `Unknown`.
async fn resolve_ci_status<C: GitHubClient>(
    client: &C,
    token: &str,
    pr: &PullRequestSummary,
) -> CiStatus {
    let Some(repo) = pr.repo() else {
        warn!("Unparseable repository_url on PR #{}", pr.number);
        return CiStatus::Unknown;
    };

    match client.fetch_status_rollup(token, &repo, pr.number).await {
        Ok(rollup) => ci_status_from_rollup(rollup),
        Err(e) => {
            warn!("CI rollup failed for {} #{}: {}", repo, pr.number, e);
            CiStatus::Unknown
        }
    }
}

/// Review resolver: latest verdict per distinct reviewer
///
/// Failure of any kind degrades to `Unknown`.
async fn resolve_review_status<C: GitHubClient>(
    client: &C,
    token: &str,
    pr: &PullRequestSummary,
) -> ReviewStatus {
    let Some(repo) = pr.repo() else {
        warn!("Unparseable repository_url on PR #{}", pr.number);
        return ReviewStatus::Unknown;
    };

    match client.fetch_reviews(token, &repo, pr.number).await {
        Ok(reviews) => review_status_from(&reviews, &pr.user.login),
        Err(e) => {
            warn!("Review fetch failed for {} #{}: {}", repo, pr.number, e);
            ReviewStatus::Unknown
        }
    }
}

/// External-link resolver: first Graphite URL in the PR's comments
///
/// Absence is a plain `None`, never an error.
async fn resolve_graphite_url<C: GitHubClient>(
    client: &C,
    token: &str,
    pr: &PullRequestSummary,
) -> Option<String> {
    let repo = pr.repo()?;

    match client.fetch_issue_comments(token, &repo, pr.number).await {
        Ok(comments) => graphite_url_from(&comments),
        Err(e) => {
            warn!("Comment fetch failed for {} #{}: {}", repo, pr.number, e);
            None
        }
    }
}

/// Map the provider rollup state onto the four-value CI taxonomy
///
/// Precedence: SUCCESS → success; FAILURE/ERROR → failure;
/// PENDING/EXPECTED → pending; absent rollup (zero checks) or any other
/// state → unknown.
pub fn ci_status_from_rollup(rollup: Option<RollupState>) -> CiStatus {
    match rollup {
        Some(RollupState::Success) => CiStatus::Success,
        Some(RollupState::Failure) | Some(RollupState::Error) => CiStatus::Failure,
        Some(RollupState::Pending) | Some(RollupState::Expected) => CiStatus::Pending,
        Some(RollupState::Other) | None => CiStatus::Unknown,
    }
}

/// Aggregate review objects into a single review decision
///
/// Self-reviews by the PR author never count. Only the most recent review
/// per distinct reviewer is retained (reviews arrive oldest-first, so a
/// later entry overwrites an earlier one). Over the retained set: any
/// changes_requested wins, else any approved, else pending.
pub fn review_status_from(reviews: &[Review], pr_author: &str) -> ReviewStatus {
    let mut latest: HashMap<&str, &Review> = HashMap::new();
    for review in reviews {
        if review.user.login != pr_author {
            latest.insert(&review.user.login, review);
        }
    }

    use gh_widget_client::ReviewState;

    let states: Vec<ReviewState> = latest.values().map(|r| r.state).collect();
    if states.contains(&ReviewState::ChangesRequested) {
        ReviewStatus::ChangesRequested
    } else if states.contains(&ReviewState::Approved) {
        ReviewStatus::Approved
    } else {
        ReviewStatus::Pending
    }
}

/// Scan comments in delivered order for a Graphite deep link
///
/// First match wins. A sentinel comment without a well-formed URL does not
/// stop the scan.
pub fn graphite_url_from(comments: &[IssueComment]) -> Option<String> {
    comments
        .iter()
        .filter_map(|c| c.body.as_deref())
        .filter(|body| GRAPHITE_SENTINELS.iter().any(|s| body.contains(s)))
        .find_map(|body| extract_graphite_url(body).map(str::to_string))
}

/// Extract the first Graphite URL from a comment body
///
/// Matches `https://app.graphite.dev/` followed by everything up to the
/// next whitespace or closing parenthesis, so Markdown links like
/// `[View in Graphite](https://app.graphite.dev/...)` terminate cleanly.
pub fn extract_graphite_url(body: &str) -> Option<&str> {
    static GRAPHITE_URL_REGEX: OnceLock<Regex> = OnceLock::new();

    let re = GRAPHITE_URL_REGEX
        .get_or_init(|| Regex::new(r"https://app\.graphite\.dev/[^\s)]+").unwrap());

    re.find(body).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_widget_client::{Author, ReviewState};

    fn review(login: &str, state: ReviewState) -> Review {
        Review {
            user: Author {
                login: login.to_string(),
                avatar_url: String::new(),
            },
            state,
        }
    }

    fn comment(body: &str) -> IssueComment {
        IssueComment {
            body: Some(body.to_string()),
        }
    }

    #[test]
    fn test_ci_precedence_table() {
        assert_eq!(
            ci_status_from_rollup(Some(RollupState::Success)),
            CiStatus::Success
        );
        assert_eq!(
            ci_status_from_rollup(Some(RollupState::Failure)),
            CiStatus::Failure
        );
        assert_eq!(
            ci_status_from_rollup(Some(RollupState::Error)),
            CiStatus::Failure
        );
        assert_eq!(
            ci_status_from_rollup(Some(RollupState::Pending)),
            CiStatus::Pending
        );
        assert_eq!(
            ci_status_from_rollup(Some(RollupState::Expected)),
            CiStatus::Pending
        );
        assert_eq!(
            ci_status_from_rollup(Some(RollupState::Other)),
            CiStatus::Unknown
        );
        assert_eq!(ci_status_from_rollup(None), CiStatus::Unknown);
    }

    #[test]
    fn test_changes_requested_beats_approval() {
        let reviews = vec![
            review("alice", ReviewState::Approved),
            review("bob", ReviewState::ChangesRequested),
        ];
        assert_eq!(
            review_status_from(&reviews, "author"),
            ReviewStatus::ChangesRequested
        );
    }

    #[test]
    fn test_single_approval() {
        let reviews = vec![review("alice", ReviewState::Approved)];
        assert_eq!(review_status_from(&reviews, "author"), ReviewStatus::Approved);
    }

    #[test]
    fn test_zero_reviews_is_pending() {
        assert_eq!(review_status_from(&[], "author"), ReviewStatus::Pending);
    }

    #[test]
    fn test_self_review_is_excluded() {
        let reviews = vec![review("author", ReviewState::Approved)];
        assert_eq!(review_status_from(&reviews, "author"), ReviewStatus::Pending);
    }

    #[test]
    fn test_latest_review_per_reviewer_wins() {
        // alice requested changes, then approved: only the approval counts
        let reviews = vec![
            review("alice", ReviewState::ChangesRequested),
            review("alice", ReviewState::Approved),
        ];
        assert_eq!(review_status_from(&reviews, "author"), ReviewStatus::Approved);
    }

    #[test]
    fn test_comment_review_does_not_approve() {
        let reviews = vec![
            review("alice", ReviewState::Approved),
            review("alice", ReviewState::Commented),
        ];
        // alice's latest review is a plain comment, so no approval stands
        assert_eq!(review_status_from(&reviews, "author"), ReviewStatus::Pending);
    }

    #[test]
    fn test_extract_graphite_url_stops_at_whitespace() {
        let body = "View in Graphite: https://app.graphite.dev/github/pr/user/repo/42 today";
        assert_eq!(
            extract_graphite_url(body),
            Some("https://app.graphite.dev/github/pr/user/repo/42")
        );
    }

    #[test]
    fn test_extract_graphite_url_stops_at_closing_paren() {
        let body = "This PR is managed by Graphite ([View in Graphite](https://app.graphite.dev/github/pr/user/repo/42))";
        assert_eq!(
            extract_graphite_url(body),
            Some("https://app.graphite.dev/github/pr/user/repo/42")
        );
    }

    #[test]
    fn test_graphite_url_requires_sentinel() {
        let comments = vec![comment(
            "unrelated bot: https://app.graphite.dev/github/pr/user/repo/42",
        )];
        assert_eq!(graphite_url_from(&comments), None);
    }

    #[test]
    fn test_first_matching_comment_wins() {
        let comments = vec![
            comment("just a human comment"),
            comment("managed by Graphite https://app.graphite.dev/first"),
            comment("View in Graphite https://app.graphite.dev/second"),
        ];
        assert_eq!(
            graphite_url_from(&comments),
            Some("https://app.graphite.dev/first".to_string())
        );
    }

    #[test]
    fn test_sentinel_without_url_does_not_stop_scan() {
        let comments = vec![
            comment("managed by Graphite, link coming soon"),
            comment("View in Graphite https://app.graphite.dev/late"),
        ];
        assert_eq!(
            graphite_url_from(&comments),
            Some("https://app.graphite.dev/late".to_string())
        );
    }

    #[test]
    fn test_missing_bodies_are_skipped() {
        let comments = vec![IssueComment { body: None }];
        assert_eq!(graphite_url_from(&comments), None);
    }
}
