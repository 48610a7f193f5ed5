//! Enrichment status taxonomies
//!
//! The two four-value statuses every pull request carries after enrichment,
//! with their display icon and tooltip tables. The tables are exhaustive
//! matches so a new variant cannot silently fall through to a default.

use serde::{Deserialize, Serialize};

/// Aggregated CI state of a pull request's head commit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CiStatus {
    /// The rollup reports all checks passing
    Success,
    /// The rollup reports a failure or error
    Failure,
    /// Checks are still running or expected
    Pending,
    /// No checks, or the rollup could not be fetched
    #[default]
    Unknown,
}

impl CiStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            CiStatus::Success => "✓",
            CiStatus::Failure => "✗",
            CiStatus::Pending => "⏳",
            CiStatus::Unknown => "?",
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            CiStatus::Success => "CI Checks: Passed ✓",
            CiStatus::Failure => "CI Checks: Fail ✗",
            CiStatus::Pending => "CI Checks: Running ⏳",
            CiStatus::Unknown => "CI Checks: Unknown ?",
        }
    }
}

/// Aggregated review decision on a pull request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// At least one reviewer approved and none requests changes
    Approved,
    /// At least one reviewer requests changes
    ChangesRequested,
    /// No verdict yet (including zero reviews)
    Pending,
    /// Reviews could not be fetched
    #[default]
    Unknown,
}

impl ReviewStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            ReviewStatus::Approved => "✓",
            ReviewStatus::ChangesRequested => "✗",
            ReviewStatus::Pending => "⏳",
            ReviewStatus::Unknown => "?",
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Code Review: Approved by reviewer(s) ✓",
            ReviewStatus::ChangesRequested => "Code Review: Changes requested ✗",
            ReviewStatus::Pending => "Code Review: Waiting for review ⏳",
            ReviewStatus::Unknown => "Code Review: No review activity ?",
        }
    }
}
