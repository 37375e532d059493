#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CSV loading and normalization of collision records.
//!
//! One load produces the immutable record collection every query runs
//! against. Loading is the system's only I/O boundary; everything
//! downstream is a pure function of the returned `Vec`.
//!
//! A structurally unusable source (no columns, no rows) is a fatal
//! [`LoadError`]. A malformed *row* never is: unparseable counts degrade
//! to zero, unparseable coordinates leave the record without a location,
//! and blank categoricals become the `Unspecified` sentinel. Row order is
//! preserved; nothing is filtered, deduplicated, or geocoded here.

pub mod schema;

use std::io::Read;
use std::path::Path;

use collision_map_collision_models::{
    CollisionRecord, GeoPoint, RecordFields, RoadUserCounts, normalize_category,
};
use csv::StringRecord;
use thiserror::Error;

use crate::schema::Columns;

/// Errors that make a collision source unusable.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading or parsing the CSV stream failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The source has a header but no data rows (or no header at all).
    #[error("source contains no collision rows")]
    Empty,

    /// A required column is missing from the header row.
    #[error("missing required column: {name}")]
    MissingColumn {
        /// The column that could not be resolved.
        name: &'static str,
    },
}

/// Loads and normalizes a collision CSV file.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be read or is structurally
/// unusable (missing columns, zero rows).
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<CollisionRecord>, LoadError> {
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path.as_ref())?;
    load(reader)
}

/// Loads and normalizes collision rows from any CSV byte stream.
///
/// # Errors
///
/// Returns [`LoadError`] if the stream cannot be read or is structurally
/// unusable (missing columns, zero rows).
pub fn load_reader<R: Read>(source: R) -> Result<Vec<CollisionRecord>, LoadError> {
    let reader = csv::ReaderBuilder::new().flexible(true).from_reader(source);
    load(reader)
}

fn load<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<CollisionRecord>, LoadError> {
    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(LoadError::Empty);
    }
    let columns = Columns::resolve(&headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(record_from_row(&row, &columns));
    }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }

    log::info!("loaded {} collision records", records.len());
    Ok(records)
}

fn record_from_row(row: &StringRecord, columns: &Columns) -> CollisionRecord {
    CollisionRecord::new(RecordFields {
        date: field(row, columns.date).unwrap_or_default().to_string(),
        time: field(row, columns.time).map(str::to_string),
        borough: normalize_category(field(row, columns.borough)),
        location: parse_location(field(row, columns.latitude), field(row, columns.longitude)),
        vehicle1_type: normalize_category(field(row, columns.vehicle1_type)),
        vehicle1_factor: normalize_category(field(row, columns.vehicle1_factor)),
        vehicle2_type: normalize_category(field(row, columns.vehicle2_type)),
        injured: parse_counts(row, &columns.injured),
        killed: parse_counts(row, &columns.killed),
    })
}

/// Returns the trimmed cell at `index`, `None` when absent or blank.
fn field(row: &StringRecord, index: usize) -> Option<&str> {
    let value = row.get(index)?.trim();
    (!value.is_empty()).then_some(value)
}

/// Parses lat/lng cells into a point. Missing or unparseable coordinates
/// leave the record without a location; no synthetic point is invented.
fn parse_location(latitude: Option<&str>, longitude: Option<&str>) -> Option<GeoPoint> {
    let latitude = latitude?.parse::<f64>().ok()?;
    let longitude = longitude?.parse::<f64>().ok()?;
    Some(GeoPoint::new(latitude, longitude))
}

fn parse_counts(row: &StringRecord, indexes: &[usize; 4]) -> RoadUserCounts {
    RoadUserCounts {
        persons: parse_count(field(row, indexes[0])),
        pedestrians: parse_count(field(row, indexes[1])),
        cyclists: parse_count(field(row, indexes[2])),
        motorists: parse_count(field(row, indexes[3])),
    }
}

/// Missing or unparseable counts degrade to zero rather than failing the
/// load. This is a normalization choice, not an error.
fn parse_count(value: Option<&str>) -> u32 {
    value.and_then(|v| v.parse::<u32>().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use collision_map_collision_models::{OutcomeClass, UNSPECIFIED};

    use super::*;

    const HEADER: &str = "DATE,TIME,BOROUGH,LATITUDE,LONGITUDE,\
        VEHICLE 1 TYPE,VEHICLE 1 FACTOR,VEHICLE 2 TYPE,\
        PERSONS INJURED,PEDESTRIANS INJURED,CYCLISTS INJURED,MOTORISTS INJURED,\
        PERSONS KILLED,PEDESTRIANS KILLED,CYCLISTS KILLED,MOTORISTS KILLED";

    fn load_str(body: &str) -> Result<Vec<CollisionRecord>, LoadError> {
        load_reader(format!("{HEADER}\n{body}").as_bytes())
    }

    #[test]
    fn loads_and_normalizes_a_row() {
        let records = load_str(
            "04/12/2019,14:30,BROOKLYN,40.6892,-73.9857,\
             TAXI,DRIVER INATTENTION,SPORT UTILITY,1,0,2,0,0,0,0,0",
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.date, "04/12/2019");
        assert_eq!(rec.time.as_deref(), Some("14:30"));
        assert_eq!(rec.borough, "Brooklyn");
        assert_eq!(rec.vehicle1_type, "Taxi");
        assert_eq!(rec.vehicle1_factor, "Driver Inattention");
        assert_eq!(rec.vehicle2_type, "Sport Utility");
        assert_eq!(rec.total_injured(), 3);
        assert_eq!(rec.total_killed(), 0);
        assert_eq!(rec.outcome(), OutcomeClass::Injured);
        let location = rec.location.unwrap();
        assert!((location.latitude - 40.6892).abs() < f64::EPSILON);
        assert!((location.longitude - -73.9857).abs() < f64::EPSILON);
    }

    #[test]
    fn blank_categoricals_become_the_sentinel() {
        let records =
            load_str("04/12/2019,,,40.7,-74.0,,,,0,0,0,0,0,0,0,0").unwrap();

        let rec = &records[0];
        assert_eq!(rec.time, None);
        assert_eq!(rec.borough, UNSPECIFIED);
        assert_eq!(rec.vehicle1_type, UNSPECIFIED);
        assert_eq!(rec.vehicle1_factor, UNSPECIFIED);
        assert_eq!(rec.vehicle2_type, UNSPECIFIED);
    }

    #[test]
    fn unparseable_counts_degrade_to_zero() {
        let records = load_str(
            "04/12/2019,09:00,QUEENS,40.7,-73.8,SEDAN,SPEEDING,SEDAN,\
             abc,,-1,2,0,0,0,n/a",
        )
        .unwrap();

        // Only the motorists-injured cell parses.
        assert_eq!(records[0].total_injured(), 2);
        assert_eq!(records[0].total_killed(), 0);
    }

    #[test]
    fn unparseable_coordinates_leave_location_absent() {
        let records = load_str(
            "04/12/2019,09:00,QUEENS,,-73.8,SEDAN,SPEEDING,SEDAN,0,0,0,0,0,0,0,0\n\
             04/13/2019,10:00,QUEENS,forty,-73.8,SEDAN,SPEEDING,SEDAN,0,0,0,0,0,0,0,0",
        )
        .unwrap();

        assert_eq!(records[0].location, None);
        assert_eq!(records[1].location, None);
    }

    #[test]
    fn short_rows_do_not_abort_the_load() {
        let records = load_str(
            "04/12/2019,09:00,QUEENS\n\
             04/13/2019,10:00,BRONX,40.8,-73.9,SEDAN,SPEEDING,SEDAN,0,0,0,0,0,0,0,0",
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].borough, "Queens");
        assert_eq!(records[0].location, None);
        assert_eq!(records[1].borough, "Bronx");
    }

    #[test]
    fn preserves_row_order() {
        let records = load_str(
            "01/01/2019,01:00,BRONX,40.8,-73.9,SEDAN,SPEEDING,SEDAN,0,0,0,0,0,0,0,0\n\
             02/02/2019,02:00,QUEENS,40.7,-73.8,TAXI,FATIGUE,BUS,0,0,0,0,0,0,0,0\n\
             03/03/2019,03:00,BROOKLYN,40.6,-73.9,BUS,SPEEDING,VAN,0,0,0,0,0,0,0,0",
        )
        .unwrap();

        let dates: Vec<&str> = records.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["01/01/2019", "02/02/2019", "03/03/2019"]);
    }

    #[test]
    fn empty_source_is_a_load_error() {
        assert!(matches!(load_reader(&b""[..]), Err(LoadError::Empty)));
        assert!(matches!(load_str(""), Err(LoadError::Empty)));
    }

    #[test]
    fn missing_column_is_a_load_error() {
        let result = load_reader(&b"DATE,TIME\n04/12/2019,09:00"[..]);
        assert!(matches!(
            result,
            Err(LoadError::MissingColumn { name: "BOROUGH" })
        ));
    }
}
