//! Plain-text rendering of query results.
//!
//! Aligned columns only; charts, maps, and color belong to other
//! presentation layers.

use collision_map_analytics_models::{CategoryDistribution, TimeBucketTable};
use collision_map_collision_models::TimeBucket;
use collision_map_geo::DistanceRankedRecord;

/// Prints a nearest-first proximity table.
pub fn print_ranked(ranked: &[DistanceRankedRecord], radius_miles: f64) {
    if ranked.is_empty() {
        println!("No collisions within {radius_miles} miles.");
        return;
    }

    println!(
        "{:>7}  {:<10}  {:<8}  {:<13}  {:<30}  {:<18}  {:<18}",
        "MILES", "DATE", "TIME", "BOROUGH", "FACTOR", "VEHICLE 1", "VEHICLE 2"
    );
    for entry in ranked {
        let record = &entry.record;
        println!(
            "{:>7.2}  {:<10}  {:<8}  {:<13}  {:<30}  {:<18}  {:<18}",
            entry.miles,
            record.date,
            record.time.as_deref().unwrap_or("-"),
            record.borough,
            record.vehicle1_factor,
            record.vehicle1_type,
            record.vehicle2_type,
        );
    }
    println!();
    println!(
        "{} collision(s) within {radius_miles} miles.",
        ranked.len()
    );
}

/// Prints a titled proportion table, values as percentages.
pub fn print_distribution(title: &str, distribution: &CategoryDistribution) {
    println!("{title}");
    if distribution.is_empty() {
        println!("  (no matching records)");
        println!();
        return;
    }

    let width = distribution.keys().map(String::len).max().unwrap_or(0);
    for (value, proportion) in distribution {
        println!("  {value:<width$}  {:>6.1}%", proportion * 100.0);
    }
    println!();
}

/// Prints the factor × time-of-day joint table, time buckets as rows.
pub fn print_time_table(table: &TimeBucketTable, borough: &str) {
    println!("Time of day of collisions ({borough})");
    if table.is_empty() {
        println!("  (no matching records)");
        return;
    }

    let label_width = TimeBucket::ALL
        .iter()
        .map(|b| b.to_string().len())
        .max()
        .unwrap_or(0);

    print!("{:<label_width$}", "");
    for factor in table.keys() {
        print!("  {factor:>24}");
    }
    println!();

    for bucket in TimeBucket::ALL {
        print!("{:<label_width$}", bucket.to_string());
        for percentages in table.values() {
            print!("  {:>23.2}%", percentages[bucket.index()]);
        }
        println!();
    }
}

/// Prints one field's distinct values.
pub fn print_values(field: &str, values: &[String]) {
    println!("{field}:");
    for value in values {
        println!("  {value}");
    }
    println!();
}
