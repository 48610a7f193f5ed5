//! GitHub API data transfer objects
//!
//! These types mirror the wire shapes the widget consumes: search items,
//! review objects, issue comments, and the GraphQL status-check rollup
//! state. They are intentionally separate from the enriched domain model
//! in `gh-widget-core` to keep this crate pure and reusable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pull request as returned by the issue search endpoint
///
/// This is the list-item shape: identity and display data only. Enrichment
/// (CI status, review status, Graphite link) is layered on top by the
/// aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestSummary {
    /// Numeric issue id (distinct from the PR number)
    pub id: u64,

    /// PR number (e.g., 123)
    pub number: u64,

    /// PR title
    pub title: String,

    /// Canonical web URL for opening in a browser
    pub html_url: String,

    /// API URL of the owning repository
    pub repository_url: String,

    /// Open/closed state
    pub state: PrState,

    /// Whether the PR is a draft
    #[serde(default)]
    pub draft: bool,

    /// When the PR was created
    pub created_at: DateTime<Utc>,

    /// When the PR was last updated
    pub updated_at: DateTime<Utc>,

    /// PR author
    pub user: Author,
}

impl PullRequestSummary {
    /// Owner/name reference of the repository this PR belongs to
    pub fn repo(&self) -> Option<RepoRef> {
        RepoRef::from_repository_url(&self.repository_url)
    }

    /// Short repository name for display (last path segment)
    pub fn repo_name(&self) -> &str {
        self.repository_url
            .rsplit('/')
            .next()
            .unwrap_or("Unknown")
    }

    /// Display label: "Draft" wins over the open/closed state
    pub fn state_label(&self) -> &'static str {
        if self.draft {
            "Draft"
        } else {
            self.state.label()
        }
    }
}

/// Open/closed state of a pull request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrState {
    /// PR is open
    Open,
    /// PR is closed (should not appear in the open-PR search)
    Closed,
    /// Unrecognised state from the API
    #[serde(other)]
    Unknown,
}

impl PrState {
    pub fn label(&self) -> &'static str {
        match self {
            PrState::Open => "open",
            PrState::Closed => "closed",
            PrState::Unknown => "unknown",
        }
    }
}

/// A GitHub user as embedded in search items, reviews and comments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// GitHub username
    pub login: String,

    /// Avatar image URL
    #[serde(default)]
    pub avatar_url: String,
}

/// Owner/name pair identifying a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    /// Parse a repository reference from an API `repository_url`
    ///
    /// The search endpoint hands back URLs of the form
    /// `https://api.github.com/repos/{owner}/{repo}`; the owner and name are
    /// the last two path segments.
    pub fn from_repository_url(url: &str) -> Option<Self> {
        let mut segments = url.trim_end_matches('/').rsplit('/');
        let name = segments.next()?;
        let owner = segments.next()?;
        if name.is_empty() || owner.is_empty() {
            return None;
        }
        Some(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Response envelope of the issue search endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    pub items: Vec<PullRequestSummary>,
}

/// A review on a pull request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Reviewer
    pub user: Author,

    /// Review state as reported by the API
    pub state: ReviewState,
}

/// State of a single review object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    /// Reviewer approved the PR
    Approved,
    /// Reviewer requested changes
    ChangesRequested,
    /// Reviewer commented without a verdict
    Commented,
    /// Review was dismissed
    Dismissed,
    /// Review is pending submission
    Pending,
    /// Unrecognised state from the API
    #[serde(other)]
    Other,
}

/// An issue/PR comment body as delivered by the comments endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueComment {
    #[serde(default)]
    pub body: Option<String>,
}

/// Status-check rollup state from the GraphQL API
///
/// Raw provider states; the mapping onto the widget's four-value CI taxonomy
/// lives in `gh-widget-core`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RollupState {
    Success,
    Failure,
    Error,
    Pending,
    Expected,
    #[serde(other)]
    Other,
}

impl RollupState {
    /// Parse a rollup state string from a GraphQL response
    pub fn parse(state: &str) -> Self {
        match state {
            "SUCCESS" => RollupState::Success,
            "FAILURE" => RollupState::Failure,
            "ERROR" => RollupState::Error,
            "PENDING" => RollupState::Pending,
            "EXPECTED" => RollupState::Expected,
            _ => RollupState::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_ref_from_repository_url() {
        let repo = RepoRef::from_repository_url("https://api.github.com/repos/user/repo").unwrap();
        assert_eq!(repo.owner, "user");
        assert_eq!(repo.name, "repo");
        assert_eq!(repo.to_string(), "user/repo");
    }

    #[test]
    fn test_repo_ref_trailing_slash() {
        let repo =
            RepoRef::from_repository_url("https://api.github.com/repos/user/repo/").unwrap();
        assert_eq!(repo.name, "repo");
    }

    #[test]
    fn test_search_item_deserialization() {
        let json = r#"{
            "items": [{
                "id": 101,
                "number": 42,
                "title": "Add theme customization feature",
                "html_url": "https://github.com/user/awesome-project/pull/42",
                "repository_url": "https://api.github.com/repos/user/awesome-project",
                "state": "open",
                "draft": false,
                "created_at": "2023-01-01T00:00:00Z",
                "updated_at": "2023-01-02T00:00:00Z",
                "user": { "login": "developer", "avatar_url": "https://example.com/a.png" }
            }]
        }"#;

        let results: SearchResults = serde_json::from_str(json).unwrap();
        assert_eq!(results.items.len(), 1);

        let pr = &results.items[0];
        assert_eq!(pr.id, 101);
        assert_eq!(pr.number, 42);
        assert_eq!(pr.state, PrState::Open);
        assert_eq!(pr.user.login, "developer");
        assert_eq!(pr.repo_name(), "awesome-project");
        assert_eq!(pr.state_label(), "open");
    }

    #[test]
    fn test_draft_label_wins_over_state() {
        let json = r#"{
            "id": 1,
            "number": 7,
            "title": "wip",
            "html_url": "https://github.com/o/r/pull/7",
            "repository_url": "https://api.github.com/repos/o/r",
            "state": "open",
            "draft": true,
            "created_at": "2023-01-01T00:00:00Z",
            "updated_at": "2023-01-01T00:00:00Z",
            "user": { "login": "dev" }
        }"#;

        let pr: PullRequestSummary = serde_json::from_str(json).unwrap();
        assert!(pr.draft);
        assert_eq!(pr.state_label(), "Draft");
    }

    #[test]
    fn test_review_state_serde() {
        let states = vec![
            (ReviewState::Approved, "\"APPROVED\""),
            (ReviewState::ChangesRequested, "\"CHANGES_REQUESTED\""),
            (ReviewState::Commented, "\"COMMENTED\""),
            (ReviewState::Dismissed, "\"DISMISSED\""),
        ];

        for (state, expected_json) in states {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, expected_json);

            let deserialized: ReviewState = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, state);
        }
    }

    #[test]
    fn test_unrecognised_review_state_maps_to_other() {
        let state: ReviewState = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(state, ReviewState::Other);
    }

    #[test]
    fn test_rollup_state_parse() {
        assert_eq!(RollupState::parse("SUCCESS"), RollupState::Success);
        assert_eq!(RollupState::parse("FAILURE"), RollupState::Failure);
        assert_eq!(RollupState::parse("ERROR"), RollupState::Error);
        assert_eq!(RollupState::parse("PENDING"), RollupState::Pending);
        assert_eq!(RollupState::parse("EXPECTED"), RollupState::Expected);
        assert_eq!(RollupState::parse("whatever"), RollupState::Other);
    }
}
