//! PR aggregation pipeline
//!
//! The `Aggregator` orchestrates one refresh cycle: list fetch, concurrent
//! enrichment fan-out, merge, and change detection against the last accepted
//! snapshot. It owns the snapshot exclusively; only a completed enrichment
//! pass ever overwrites it.
//!
//! Cycle phases: `Idle → Fetching → Enriching → Comparing → Idle`, with an
//! `Errored` phase that is never sticky (the next `refresh` proceeds
//! normally).

use crate::enrich;
use crate::error::RefreshError;
use crate::snapshot::Snapshot;
use gh_widget_client::GitHubClient;
use log::{debug, info};

/// Where the aggregator currently is in its refresh cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Fetching,
    Enriching,
    Comparing,
    Errored,
}

/// Result of a completed refresh cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The snapshot changed and was handed to the observer
    Updated,
    /// The new snapshot equals the accepted one; nothing externally visible
    Unchanged,
}

/// Renderer-facing hooks invoked during a refresh cycle
///
/// `snapshot_changed` fires on every accepted snapshot, silent cycles
/// included. The loading and error hooks are suppressed on silent cycles so
/// background polls never flash indicators or banners.
pub trait RefreshObserver {
    /// A non-silent cycle started (show a loading indicator)
    fn refresh_started(&mut self) {}

    /// A cycle produced a different snapshot; it is now the accepted one
    fn snapshot_changed(&mut self, _snapshot: &Snapshot) {}

    /// A non-silent cycle failed at the list stage (show the error)
    fn refresh_failed(&mut self, _error: &RefreshError) {}
}

/// Observer that ignores every hook
pub struct NoopObserver;

impl RefreshObserver for NoopObserver {}

/// The PR aggregation pipeline core
///
/// Holds a working copy of the credential (empty string means
/// unconfigured) and the last accepted snapshot. One instance per widget;
/// no global state, so multiple instances and tests run in isolation.
pub struct Aggregator<C: GitHubClient> {
    client: C,
    credential: String,
    snapshot: Option<Snapshot>,
    phase: Phase,
}

impl<C: GitHubClient> Aggregator<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            credential: String::new(),
            snapshot: None,
            phase: Phase::Idle,
        }
    }

    /// Replace the working credential
    ///
    /// Takes effect on the next cycle; a cycle already in flight keeps the
    /// credential it pinned at its start.
    pub fn set_credential(&mut self, token: impl Into<String>) {
        self.credential = token.into();
    }

    pub fn credential_configured(&self) -> bool {
        !self.credential.is_empty()
    }

    /// The last accepted snapshot, if any cycle has completed yet
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run one refresh cycle
    ///
    /// With an empty credential this fails synchronously, before any network
    /// call. A list-fetch failure leaves the previously accepted snapshot
    /// untouched. Resolver failures never surface here; they degrade to the
    /// per-field fallbacks inside the fan-out.
    ///
    /// `silent` suppresses the `refresh_started`/`refresh_failed` observer
    /// hooks (background polling); the fetch/enrich/compare logic is
    /// identical either way.
    pub async fn refresh(
        &mut self,
        silent: bool,
        observer: &mut dyn RefreshObserver,
    ) -> Result<RefreshOutcome, RefreshError> {
        // Pin the credential for the whole cycle; settings updates landing
        // mid-flight must not affect calls already issued.
        let token = self.credential.clone();

        if token.is_empty() {
            self.phase = Phase::Errored;
            let err = RefreshError::Authentication;
            if !silent {
                observer.refresh_failed(&err);
            }
            return Err(err);
        }

        if !silent {
            observer.refresh_started();
        }

        self.phase = Phase::Fetching;
        let summaries = match self.client.search_authored_pull_requests(&token).await {
            Ok(items) => items,
            Err(e) => {
                self.phase = Phase::Errored;
                let err = RefreshError::from(e);
                if !silent {
                    observer.refresh_failed(&err);
                }
                return Err(err);
            }
        };

        debug!("List fetch returned {} PRs, enriching", summaries.len());
        self.phase = Phase::Enriching;
        let enriched = enrich::enrich_all(&self.client, &token, summaries).await;

        self.phase = Phase::Comparing;
        let next = Snapshot::new(enriched);
        let outcome = if self.snapshot.as_ref() == Some(&next) {
            debug!("Snapshot unchanged, skipping re-render");
            RefreshOutcome::Unchanged
        } else {
            info!("Snapshot changed ({} PRs)", next.len());
            observer.snapshot_changed(&next);
            self.snapshot = Some(next);
            RefreshOutcome::Updated
        };

        self.phase = Phase::Idle;
        Ok(outcome)
    }
}
