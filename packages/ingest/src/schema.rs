//! Column layout of the collision CSV source.
//!
//! Columns are resolved by header name (trimmed, case-insensitive) rather
//! than position, so column reordering in the source export is harmless.

use csv::StringRecord;

use crate::LoadError;

/// Date of the collision.
pub const DATE: &str = "DATE";
/// Time of the collision (`HH:MM[:SS]`).
pub const TIME: &str = "TIME";
/// Administrative borough.
pub const BOROUGH: &str = "BOROUGH";
/// Latitude in decimal degrees.
pub const LATITUDE: &str = "LATITUDE";
/// Longitude in decimal degrees.
pub const LONGITUDE: &str = "LONGITUDE";
/// Type of the first vehicle.
pub const VEHICLE_1_TYPE: &str = "VEHICLE 1 TYPE";
/// Contributing factor of the first vehicle.
pub const VEHICLE_1_FACTOR: &str = "VEHICLE 1 FACTOR";
/// Type of the second vehicle.
pub const VEHICLE_2_TYPE: &str = "VEHICLE 2 TYPE";

/// The four injury-count columns, one per road-user category.
pub const INJURED: [&str; 4] = [
    "PERSONS INJURED",
    "PEDESTRIANS INJURED",
    "CYCLISTS INJURED",
    "MOTORISTS INJURED",
];

/// The four death-count columns, one per road-user category.
pub const KILLED: [&str; 4] = [
    "PERSONS KILLED",
    "PEDESTRIANS KILLED",
    "CYCLISTS KILLED",
    "MOTORISTS KILLED",
];

/// Resolved column indexes for one CSV source.
#[derive(Debug, Clone)]
pub struct Columns {
    /// Index of the [`DATE`] column.
    pub date: usize,
    /// Index of the [`TIME`] column.
    pub time: usize,
    /// Index of the [`BOROUGH`] column.
    pub borough: usize,
    /// Index of the [`LATITUDE`] column.
    pub latitude: usize,
    /// Index of the [`LONGITUDE`] column.
    pub longitude: usize,
    /// Index of the [`VEHICLE_1_TYPE`] column.
    pub vehicle1_type: usize,
    /// Index of the [`VEHICLE_1_FACTOR`] column.
    pub vehicle1_factor: usize,
    /// Index of the [`VEHICLE_2_TYPE`] column.
    pub vehicle2_type: usize,
    /// Indexes of the [`INJURED`] columns, persons/pedestrians/cyclists/motorists.
    pub injured: [usize; 4],
    /// Indexes of the [`KILLED`] columns, same order.
    pub killed: [usize; 4],
}

impl Columns {
    /// Resolves every required column against a header row.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MissingColumn`] naming the first column that
    /// cannot be found.
    pub fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        Ok(Self {
            date: find(headers, DATE)?,
            time: find(headers, TIME)?,
            borough: find(headers, BOROUGH)?,
            latitude: find(headers, LATITUDE)?,
            longitude: find(headers, LONGITUDE)?,
            vehicle1_type: find(headers, VEHICLE_1_TYPE)?,
            vehicle1_factor: find(headers, VEHICLE_1_FACTOR)?,
            vehicle2_type: find(headers, VEHICLE_2_TYPE)?,
            injured: find_all(headers, &INJURED)?,
            killed: find_all(headers, &KILLED)?,
        })
    }
}

fn find(headers: &StringRecord, name: &'static str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or(LoadError::MissingColumn { name })
}

fn find_all(headers: &StringRecord, names: &[&'static str; 4]) -> Result<[usize; 4], LoadError> {
    Ok([
        find(headers, names[0])?,
        find(headers, names[1])?,
        find(headers, names[2])?,
        find(headers, names[3])?,
    ])
}
