//! PR aggregation & status-enrichment pipeline
//!
//! The widget's core data flow: fetch the user's open pull requests, fan out
//! three enrichment lookups per PR (CI rollup, review decision, Graphite
//! link), merge the results in list order, and detect changes against the
//! last accepted snapshot so unchanged polls never re-render.
//!
//! ```text
//! refresh(silent)
//!    │
//!    ├─ list fetch ──────────── AuthenticationError / ProviderError surface
//!    │
//!    ├─ enrichment fan-out ──── N×3 concurrent calls, failures degrade to
//!    │                          unknown/pending/absent, never abort
//!    │
//!    └─ compare & accept ────── structural equality vs. last snapshot;
//!                               changed → RefreshObserver::snapshot_changed
//! ```

pub mod aggregator;
pub mod enrich;
pub mod error;
pub mod snapshot;
pub mod status;

pub use aggregator::{Aggregator, NoopObserver, Phase, RefreshObserver, RefreshOutcome};
pub use error::RefreshError;
pub use snapshot::{EnrichedPullRequest, Snapshot};
pub use status::{CiStatus, ReviewStatus};

// Re-export the client crate so consumers don't need to depend on it directly
pub use gh_widget_client as client;
