//! Time-of-day joint distribution.

use collision_map_analytics_models::TimeBucketTable;
use collision_map_collision_models::{CategoryField, CollisionRecord};

/// Joint percentage table of `field` value × time-of-day bucket.
///
/// Records whose time text is missing or unparseable are excluded before
/// anything is counted, so they never appear in the denominator. Each
/// remaining record contributes `100 / N` to exactly one cell, where N is
/// the size of the whole time-parseable subset; the table's grand total is
/// therefore 100% across all cells. This is deliberately a joint
/// distribution: normalizing each category row to its own subtotal would
/// be a different statistic.
///
/// An empty (or entirely unparseable) input yields an empty table.
#[must_use]
pub fn joint_distribution(records: &[CollisionRecord], field: CategoryField) -> TimeBucketTable {
    let parseable: Vec<(&str, usize)> = records
        .iter()
        .filter_map(|record| {
            record
                .time_bucket()
                .map(|bucket| (field.value_of(record), bucket.index()))
        })
        .collect();

    let mut table = TimeBucketTable::new();
    if parseable.is_empty() {
        log::debug!("no time-parseable records for {field} joint distribution");
        return table;
    }

    let share = 100.0 / parseable.len() as f64;
    for (value, bucket_index) in parseable {
        table.entry(value.to_string()).or_insert([0.0; 4])[bucket_index] += share;
    }
    table
}

#[cfg(test)]
mod tests {
    use collision_map_collision_models::RecordFields;

    use super::*;

    fn record(factor: &str, time: Option<&str>) -> CollisionRecord {
        CollisionRecord::new(RecordFields {
            vehicle1_factor: factor.to_string(),
            time: time.map(str::to_string),
            ..RecordFields::default()
        })
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "got {actual}, expected {expected}"
        );
    }

    #[test]
    fn buckets_one_factor_across_the_day() {
        let records = vec![
            record("X", Some("05:00")),
            record("X", Some("07:00")),
            record("X", Some("07:30")),
            record("X", Some("23:00")),
        ];

        let table = joint_distribution(&records, CategoryField::Vehicle1Factor);
        assert_eq!(table.len(), 1);
        let row = table["X"];
        assert_close(row[0], 25.0);
        assert_close(row[1], 50.0);
        assert_close(row[2], 0.0);
        assert_close(row[3], 25.0);
    }

    #[test]
    fn grand_total_is_one_hundred_percent() {
        let records = vec![
            record("Speeding", Some("01:15")),
            record("Speeding", Some("13:40")),
            record("Fatigue", Some("06:00")),
            record("Fatigue", Some("19:05")),
            record("Distraction", Some("12:00")),
        ];

        let table = joint_distribution(&records, CategoryField::Vehicle1Factor);
        let total: f64 = table.values().flatten().sum();
        assert_close(total, 100.0);
    }

    #[test]
    fn joint_not_per_category_normalization() {
        // Two factors, one record each: each cell must hold 50%, not 100%.
        let records = vec![
            record("Speeding", Some("03:00")),
            record("Fatigue", Some("15:00")),
        ];

        let table = joint_distribution(&records, CategoryField::Vehicle1Factor);
        assert_close(table["Speeding"][0], 50.0);
        assert_close(table["Fatigue"][2], 50.0);
    }

    #[test]
    fn unparseable_times_are_excluded_from_denominator() {
        let records = vec![
            record("X", Some("05:00")),
            record("X", None),
            record("X", Some("garbled")),
            record("X", Some("23:00")),
        ];

        let table = joint_distribution(&records, CategoryField::Vehicle1Factor);
        let row = table["X"];
        assert_close(row[0], 50.0);
        assert_close(row[3], 50.0);
    }

    #[test]
    fn empty_or_unparseable_input_yields_empty_table() {
        assert!(joint_distribution(&[], CategoryField::Vehicle1Factor).is_empty());

        let records = vec![record("X", None), record("Y", Some("nope"))];
        assert!(joint_distribution(&records, CategoryField::Vehicle1Factor).is_empty());
    }

    #[test]
    fn keys_are_the_values_present_in_the_parseable_subset() {
        let records = vec![
            record("OnlyUnparseable", Some("bad")),
            record("Present", Some("09:00")),
        ];

        let table = joint_distribution(&records, CategoryField::Vehicle1Factor);
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["Present"]);
    }
}
