//! Enriched pull-request snapshot
//!
//! A `Snapshot` is the complete, ordered, enriched PR list the aggregator
//! holds after a refresh cycle. Change detection between polls is plain
//! structural equality, so an unchanged poll never triggers a re-render.

use crate::status::{CiStatus, ReviewStatus};
use gh_widget_client::PullRequestSummary;
use serde::{Deserialize, Serialize};

/// A pull request with its enrichment fields resolved
///
/// The enrichment fields are always materialised: absence of data resolves
/// to `Unknown`/`Pending`/`None` rather than an unset field, so rendering
/// never branches on "missing enrichment" separately from
/// "resolved-to-unknown".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedPullRequest {
    /// Identity and display data from the list fetch
    pub summary: PullRequestSummary,

    /// Aggregated CI state of the head commit
    pub ci_status: CiStatus,

    /// Aggregated review decision
    pub review_status: ReviewStatus,

    /// Deep link into Graphite, if a Graphite bot comment was found
    pub graphite_url: Option<String>,
}

/// Ordered sequence of enriched pull requests
///
/// Order matches the list fetch exactly (insertion order significant for
/// stable rendering). Two snapshots compare equal iff every field of every
/// item, enrichment included, is equal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    items: Vec<EnrichedPullRequest>,
}

impl Snapshot {
    pub fn new(items: Vec<EnrichedPullRequest>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[EnrichedPullRequest] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnrichedPullRequest> {
        self.items.iter()
    }
}
