//! GitHub client trait
//!
//! This module defines the `GitHubClient` trait that all client
//! implementations must satisfy. The widget's aggregator only ever talks to
//! this trait, so tests can substitute a recording mock and the octocrab
//! implementation stays swappable.

use crate::error::ApiError;
use crate::types::{IssueComment, PullRequestSummary, RepoRef, Review, RollupState};
use async_trait::async_trait;

/// GitHub API client trait
///
/// The four provider endpoints the widget needs: the authored-PR search plus
/// the three per-PR enrichment lookups. Every method takes the credential
/// explicitly so a cycle can pin the token it started with, regardless of
/// settings updates landing mid-flight.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks.
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch all open pull requests authored by the token's identity
    ///
    /// Returns the pull requests in the order delivered by the search
    /// endpoint; no client-side re-sorting. Fails with
    /// `ApiError::MissingToken` on an empty credential (before any network
    /// call) and `ApiError::Status` on a non-2xx response. Does not retry.
    async fn search_authored_pull_requests(
        &self,
        token: &str,
    ) -> Result<Vec<PullRequestSummary>, ApiError>;

    /// Fetch the status-check rollup state for a pull request's head commit
    ///
    /// Returns `None` when the PR has no rollup (zero checks configured).
    async fn fetch_status_rollup(
        &self,
        token: &str,
        repo: &RepoRef,
        pr_number: u64,
    ) -> Result<Option<RollupState>, ApiError>;

    /// Fetch all reviews on a pull request
    async fn fetch_reviews(
        &self,
        token: &str,
        repo: &RepoRef,
        pr_number: u64,
    ) -> Result<Vec<Review>, ApiError>;

    /// Fetch all issue comments on a pull request, in delivered order
    async fn fetch_issue_comments(
        &self,
        token: &str,
        repo: &RepoRef,
        pr_number: u64,
    ) -> Result<Vec<IssueComment>, ApiError>;
}
