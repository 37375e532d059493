//! Outcome classification and categorical distributions.

use std::collections::BTreeSet;

use collision_map_analytics_models::{CategoryDistribution, CategorySelection};
use collision_map_collision_models::{CategoryField, CollisionRecord, OutcomeClass};

/// Proportional distribution of outcome classes over a record subset.
///
/// For a non-empty input the map holds exactly the three keys `Unharmed`,
/// `Injured`, and `Dead`, including zero-count classes, and the
/// proportions sum to 1.0 within floating tolerance. An empty input
/// yields an empty map.
#[must_use]
pub fn outcome_distribution(records: &[CollisionRecord]) -> CategoryDistribution {
    let mut distribution = CategoryDistribution::new();
    if records.is_empty() {
        return distribution;
    }

    for class in OutcomeClass::all() {
        distribution.insert(class.to_string(), 0.0);
    }

    let share = 1.0 / records.len() as f64;
    for record in records {
        if let Some(proportion) = distribution.get_mut(record.outcome().as_ref()) {
            *proportion += share;
        }
    }
    distribution
}

/// Proportional distribution of a categorical field over a record subset.
///
/// Keys are the distinct normalized values of `field` actually present in
/// the subset. An empty input yields an empty map.
#[must_use]
pub fn category_distribution(
    records: &[CollisionRecord],
    field: CategoryField,
) -> CategoryDistribution {
    let mut distribution = CategoryDistribution::new();
    if records.is_empty() {
        return distribution;
    }

    let share = 1.0 / records.len() as f64;
    for record in records {
        *distribution
            .entry(field.value_of(record).to_string())
            .or_insert(0.0) += share;
    }
    distribution
}

/// Filters records by an exact match on one categorical field.
///
/// [`CategorySelection::All`] returns the whole input; a value selection
/// keeps records whose normalized field equals the normalized value. The
/// source collection is never mutated; the result is an independent,
/// order-preserving copy.
#[must_use]
pub fn filter_by_category(
    records: &[CollisionRecord],
    field: CategoryField,
    selection: &CategorySelection,
) -> Vec<CollisionRecord> {
    records
        .iter()
        .filter(|record| selection.matches(field.value_of(record)))
        .cloned()
        .collect()
}

/// The sorted distinct values of one categorical field across a subset.
///
/// This is what a selector UI offers as filter options.
#[must_use]
pub fn distinct_values(records: &[CollisionRecord], field: CategoryField) -> Vec<String> {
    let unique: BTreeSet<&str> = records.iter().map(|r| field.value_of(r)).collect();
    unique.into_iter().map(str::to_string).collect()
}
