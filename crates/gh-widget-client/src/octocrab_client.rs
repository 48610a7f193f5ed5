//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab
//! library. REST endpoints are issued through octocrab's raw `get` so the
//! responses deserialize straight into this crate's DTOs; the CI rollup uses
//! the GraphQL entry point.

use crate::client::GitHubClient;
use crate::error::ApiError;
use crate::types::{
    IssueComment, PullRequestSummary, RepoRef, Review, RollupState, SearchResults,
};
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use std::sync::{Arc, RwLock};

/// Search query for "open pull requests authored by the current identity"
const AUTHORED_PRS_QUERY: &str = "is:pr is:open author:@me";

/// GraphQL query for the status-check rollup of a PR's current head commit
const STATUS_ROLLUP_QUERY: &str = r"
    query($owner: String!, $repo: String!, $number: Int!) {
      repository(owner: $owner, name: $repo) {
        pullRequest(number: $number) {
          statusCheckRollup {
            state
          }
        }
      }
    }
";

/// Direct GitHub API client using octocrab
///
/// Holds one built octocrab handle per credential, rebuilt lazily whenever
/// the credential changes. Callers pass the token on every call, so a
/// refresh cycle that pinned its token at cycle start keeps using it even if
/// the settings store has moved on.
#[derive(Debug, Default)]
pub struct OctocrabClient {
    handle: RwLock<Option<(String, Arc<Octocrab>)>>,
}

impl OctocrabClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get (or build) the octocrab handle for the given token
    fn handle(&self, token: &str) -> Result<Arc<Octocrab>, ApiError> {
        if token.is_empty() {
            return Err(ApiError::MissingToken);
        }

        if let Some((cached_token, octocrab)) = self.handle.read().unwrap().as_ref() {
            if cached_token == token {
                return Ok(Arc::clone(octocrab));
            }
        }

        debug!("Building octocrab handle for updated token");
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let octocrab = Arc::new(octocrab);

        *self.handle.write().unwrap() = Some((token.to_string(), Arc::clone(&octocrab)));
        Ok(octocrab)
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn search_authored_pull_requests(
        &self,
        token: &str,
    ) -> Result<Vec<PullRequestSummary>, ApiError> {
        let octocrab = self.handle(token)?;

        debug!("Searching authored open PRs");
        let results: SearchResults = octocrab
            .get("/search/issues", Some(&[("q", AUTHORED_PRS_QUERY)]))
            .await?;

        debug!("Search returned {} PRs", results.items.len());
        Ok(results.items)
    }

    async fn fetch_status_rollup(
        &self,
        token: &str,
        repo: &RepoRef,
        pr_number: u64,
    ) -> Result<Option<RollupState>, ApiError> {
        let octocrab = self.handle(token)?;

        debug!("Fetching status rollup for {} #{}", repo, pr_number);
        let payload = serde_json::json!({
            "query": STATUS_ROLLUP_QUERY,
            "variables": {
                "owner": repo.owner,
                "repo": repo.name,
                "number": pr_number,
            },
        });

        let response: serde_json::Value = octocrab.graphql(&payload).await?;

        // The rollup is null for PRs with no checks configured.
        let state = response
            .pointer("/data/repository/pullRequest/statusCheckRollup/state")
            .and_then(serde_json::Value::as_str)
            .map(RollupState::parse);

        Ok(state)
    }

    async fn fetch_reviews(
        &self,
        token: &str,
        repo: &RepoRef,
        pr_number: u64,
    ) -> Result<Vec<Review>, ApiError> {
        let octocrab = self.handle(token)?;

        debug!("Fetching reviews for {} #{}", repo, pr_number);
        let route = format!(
            "/repos/{}/{}/pulls/{}/reviews",
            repo.owner, repo.name, pr_number
        );
        let reviews: Vec<Review> = octocrab.get(route, None::<&()>).await?;

        Ok(reviews)
    }

    async fn fetch_issue_comments(
        &self,
        token: &str,
        repo: &RepoRef,
        pr_number: u64,
    ) -> Result<Vec<IssueComment>, ApiError> {
        let octocrab = self.handle(token)?;

        debug!("Fetching comments for {} #{}", repo, pr_number);
        let route = format!(
            "/repos/{}/{}/issues/{}/comments",
            repo.owner, repo.name, pr_number
        );
        let comments: Vec<IssueComment> = octocrab.get(route, None::<&()>).await?;

        Ok(comments)
    }
}
