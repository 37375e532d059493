#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line driver for the collision analytics engine.
//!
//! One subcommand per query mode: proximity lookup, outcome/category
//! distributions, and the factor × time-of-day joint table. The engine
//! crates return plain data structures; this binary only collects
//! parameters and prints results as aligned text or JSON.
//!
//! Geocoding is not performed here: `nearby` takes raw coordinates, and a
//! separate geocoding service is expected to resolve addresses before
//! invoking this tool.

mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use collision_map_analytics::{
    category_distribution, distinct_values, filter_by_category, joint_distribution,
    outcome_distribution,
};
use collision_map_analytics_models::CategorySelection;
use collision_map_collision_models::{CategoryField, CollisionRecord, GeoPoint};
use collision_map_geo::within_radius;
use serde_json::json;

#[derive(Parser)]
#[command(name = "collision_map_cli", about = "Vehicle collision analytics")]
struct Cli {
    /// Path to the collision CSV file
    #[arg(long, default_value = "data/nyc_veh_crash_sample.csv")]
    data: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

/// How query results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Aligned plain-text tables.
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List collisions within a radius of a point, nearest first
    Nearby {
        /// Origin latitude in degrees
        #[arg(long)]
        lat: f64,
        /// Origin longitude in degrees
        #[arg(long)]
        lon: f64,
        /// Radius in statute miles
        #[arg(long, default_value_t = 2.5)]
        radius: f64,
    },
    /// Outcome and category distributions for factor/vehicle subsets
    Outcomes {
        /// Contributing factor to restrict to (default: all factors)
        #[arg(long)]
        factor: Option<String>,
        /// Vehicle type to restrict to (default: all vehicles)
        #[arg(long)]
        vehicle: Option<String>,
    },
    /// Contributing factor x time-of-day joint percentage table
    TimeOfDay {
        /// Borough to restrict to (default: all boroughs)
        #[arg(long)]
        borough: Option<String>,
    },
    /// List the distinct values of each categorical field
    Fields,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let records = collision_map_ingest::load_csv(&cli.data)?;

    match cli.command {
        Commands::Nearby { lat, lon, radius } => {
            let origin = GeoPoint::new(lat, lon);
            let ranked = within_radius(origin, radius, &records)?;
            match cli.format {
                Format::Text => output::print_ranked(&ranked, radius),
                Format::Json => println!("{}", serde_json::to_string_pretty(&ranked)?),
            }
        }
        Commands::Outcomes { factor, vehicle } => {
            let factor_sel = selection(&records, CategoryField::Vehicle1Factor, factor.as_deref());
            let vehicle_sel = selection(&records, CategoryField::Vehicle1Type, vehicle.as_deref());

            let factor_subset =
                filter_by_category(&records, CategoryField::Vehicle1Factor, &factor_sel);
            let vehicle_subset =
                filter_by_category(&records, CategoryField::Vehicle1Type, &vehicle_sel);

            let factor_outcomes = outcome_distribution(&factor_subset);
            let vehicle_outcomes = outcome_distribution(&vehicle_subset);
            let vehicle_types = category_distribution(&factor_subset, CategoryField::Vehicle1Type);
            let factors = category_distribution(&vehicle_subset, CategoryField::Vehicle1Factor);

            match cli.format {
                Format::Text => {
                    output::print_distribution(
                        &format!("Outcomes for factor: {}", label(&factor_sel)),
                        &factor_outcomes,
                    );
                    output::print_distribution(
                        &format!("Outcomes for vehicle type: {}", label(&vehicle_sel)),
                        &vehicle_outcomes,
                    );
                    output::print_distribution(
                        &format!("Vehicle types for factor: {}", label(&factor_sel)),
                        &vehicle_types,
                    );
                    output::print_distribution(
                        &format!("Factors for vehicle type: {}", label(&vehicle_sel)),
                        &factors,
                    );
                }
                Format::Json => {
                    let report = json!({
                        "factorOutcomes": factor_outcomes,
                        "vehicleOutcomes": vehicle_outcomes,
                        "vehicleTypesForFactor": vehicle_types,
                        "factorsForVehicle": factors,
                    });
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
        }
        Commands::TimeOfDay { borough } => {
            let borough_sel = selection(&records, CategoryField::Borough, borough.as_deref());
            let subset = filter_by_category(&records, CategoryField::Borough, &borough_sel);
            let table = joint_distribution(&subset, CategoryField::Vehicle1Factor);

            match cli.format {
                Format::Text => output::print_time_table(&table, &label(&borough_sel)),
                Format::Json => println!("{}", serde_json::to_string_pretty(&table)?),
            }
        }
        Commands::Fields => {
            let fields = [
                CategoryField::Borough,
                CategoryField::Vehicle1Type,
                CategoryField::Vehicle1Factor,
                CategoryField::Vehicle2Type,
            ];
            match cli.format {
                Format::Text => {
                    for field in fields {
                        output::print_values(&field.to_string(), &distinct_values(&records, field));
                    }
                }
                Format::Json => {
                    let report = json!({
                        "borough": distinct_values(&records, CategoryField::Borough),
                        "vehicle1Type": distinct_values(&records, CategoryField::Vehicle1Type),
                        "vehicle1Factor": distinct_values(&records, CategoryField::Vehicle1Factor),
                        "vehicle2Type": distinct_values(&records, CategoryField::Vehicle2Type),
                    });
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
        }
    }

    Ok(())
}

/// Normalizes a raw filter argument and warns when the value does not
/// occur in the dataset, listing what does.
fn selection(
    records: &[CollisionRecord],
    field: CategoryField,
    raw: Option<&str>,
) -> CategorySelection {
    let sel = CategorySelection::from_raw(raw);
    if let CategorySelection::Value(value) = &sel {
        let known = distinct_values(records, field);
        if !known.iter().any(|v| v == value) {
            log::warn!(
                "no records with {field} = {value:?}; known values: {}",
                known.join(", ")
            );
        }
    }
    sel
}

fn label(selection: &CategorySelection) -> String {
    match selection {
        CategorySelection::All => "All".to_string(),
        CategorySelection::Value(value) => value.clone(),
    }
}
