#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Result and filter-selection types for collision aggregations.
//!
//! Aggregation outputs are plain data: sorted maps of normalized category
//! strings to numbers. No formatting, color, or layout concerns live here;
//! the presentation layer decides how to render them.

use std::collections::BTreeMap;

use collision_map_collision_models::normalize_category;
use serde::{Deserialize, Serialize};

/// A proportional distribution over categorical values.
///
/// Values are proportions in `[0, 1]` that sum to 1.0 (within floating
/// tolerance) for a non-empty input subset. An empty map means "no data",
/// which callers must distinguish from all-zero entries.
pub type CategoryDistribution = BTreeMap<String, f64>;

/// A joint percentage table of category value × time-of-day bucket.
///
/// Each entry holds four percentages indexed by
/// [`collision_map_collision_models::TimeBucket::index`]. The grand total
/// across all cells of all entries is 100.0 (within tolerance) for a
/// non-empty input subset; this is a joint distribution, not four
/// independent per-category distributions.
pub type TimeBucketTable = BTreeMap<String, [f64; 4]>;

/// A category filter: either everything, or one exact normalized value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategorySelection {
    /// No filtering; the input collection passes through unchanged.
    All,
    /// Keep only records whose field equals this normalized value.
    Value(String),
}

impl CategorySelection {
    /// Builds a selection from an optional raw filter value, normalizing
    /// it through the same pipeline as ingested data so that comparisons
    /// are exact string equality.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        raw.map_or(Self::All, |value| {
            Self::Value(normalize_category(Some(value)))
        })
    }

    /// Whether a normalized record value passes this selection.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Value(wanted) => wanted == value,
        }
    }
}
