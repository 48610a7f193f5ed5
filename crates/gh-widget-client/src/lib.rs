//! GitHub API access for the PR widget
//!
//! This crate provides a trait-based GitHub API client covering the four
//! endpoints the widget polls: the authored-PR search and the three per-PR
//! enrichment lookups (status-check rollup, reviews, issue comments).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │               GitHubClient trait                 │
//! │  - search_authored_pull_requests()               │
//! │  - fetch_status_rollup()                         │
//! │  - fetch_reviews()                               │
//! │  - fetch_issue_comments()                        │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              │ (direct API)    │
//!              └─────────────────┘
//! ```
//!
//! Every method takes the bearer token explicitly: the aggregator pins the
//! credential at the start of each refresh cycle, and `OctocrabClient`
//! lazily rebuilds its underlying octocrab handle whenever the token it is
//! handed changes.

pub mod client;
pub mod error;
pub mod octocrab_client;
pub mod types;

pub use client::GitHubClient;
pub use error::ApiError;
pub use octocrab_client::OctocrabClient;
pub use types::{
    Author, IssueComment, PrState, PullRequestSummary, RepoRef, Review, ReviewState, RollupState,
    SearchResults,
};
