#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Proximity queries over collision records.
//!
//! Computes geodesic (WGS84) distances in statute miles and filters a
//! record collection down to the records within a caller-supplied radius
//! of an origin point, ordered nearest-first.
//!
//! The origin is always a caller-supplied [`GeoPoint`]; resolving a
//! human-readable address to coordinates is a geocoding concern that
//! lives outside this crate.

use collision_map_collision_models::{CollisionRecord, GeoPoint};
use geo::{Distance, Geodesic, Point};
use serde::Serialize;
use thiserror::Error;

/// Statute mile in meters.
const METERS_PER_MILE: f64 = 1609.344;

/// Errors from proximity queries.
#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    /// A caller-supplied coordinate is outside valid WGS84 degree ranges.
    #[error("invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate {
        /// The out-of-range (or paired) latitude in degrees.
        latitude: f64,
        /// The out-of-range (or paired) longitude in degrees.
        longitude: f64,
    },
}

/// A collision record paired with its distance from a query origin.
///
/// Produced by [`within_radius`], consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceRankedRecord {
    /// The matched record.
    pub record: CollisionRecord,
    /// Distance from the query origin in statute miles.
    pub miles: f64,
}

/// Geodesic distance between two points in statute miles.
///
/// Uses the WGS84 ellipsoid, so results track reference geodesic
/// implementations to well under 0.1% at city scales.
#[must_use]
pub fn distance_miles(a: GeoPoint, b: GeoPoint) -> f64 {
    let meters = Geodesic.distance(
        Point::new(a.longitude, a.latitude),
        Point::new(b.longitude, b.latitude),
    );
    meters / METERS_PER_MILE
}

/// Returns the records within `radius_miles` of `origin`, nearest first.
///
/// Records without a location are excluded; no synthetic coordinates are
/// invented for them. The sort is stable, so records at equal distances
/// keep their original collection order. A non-positive (or NaN) radius
/// yields an empty result rather than an error.
///
/// # Errors
///
/// Returns [`GeoError::InvalidCoordinate`] if `origin` is outside valid
/// WGS84 degree ranges.
pub fn within_radius(
    origin: GeoPoint,
    radius_miles: f64,
    records: &[CollisionRecord],
) -> Result<Vec<DistanceRankedRecord>, GeoError> {
    if !origin.is_in_range() {
        return Err(GeoError::InvalidCoordinate {
            latitude: origin.latitude,
            longitude: origin.longitude,
        });
    }

    if radius_miles.is_nan() || radius_miles <= 0.0 {
        return Ok(Vec::new());
    }

    let mut ranked: Vec<DistanceRankedRecord> = records
        .iter()
        .filter_map(|record| {
            let location = record.location?;
            let miles = distance_miles(origin, location);
            (miles <= radius_miles).then(|| DistanceRankedRecord {
                record: record.clone(),
                miles,
            })
        })
        .collect();

    ranked.sort_by(|a, b| a.miles.total_cmp(&b.miles));

    log::debug!(
        "{} of {} records within {radius_miles} miles of ({}, {})",
        ranked.len(),
        records.len(),
        origin.latitude,
        origin.longitude
    );

    Ok(ranked)
}
