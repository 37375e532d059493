#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Core collision record types shared across the collision-map system.
//!
//! Defines the immutable [`CollisionRecord`] produced by ingestion, the
//! severity classification ([`OutcomeClass`]), the fixed time-of-day
//! buckets ([`TimeBucket`]), and the open-ended categorical vocabulary
//! handling (normalization + the `Unspecified` sentinel).
//!
//! Category values (borough, vehicle type, contributing factor) are
//! data-driven and not a closed enumeration, so they are represented as
//! plain normalized strings rather than enum variants.

pub mod normalize;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

pub use normalize::{UNSPECIFIED, normalize_category, title_case};

/// A WGS84 coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    /// Latitude in degrees, valid range [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, valid range [-180, 180].
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a point without range checking. Use [`Self::is_in_range`]
    /// before handing a caller-supplied point to a geo query.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both coordinates are within valid WGS84 degree ranges.
    #[must_use]
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Injury or death counts broken down by road-user category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadUserCounts {
    /// Persons (the dataset's catch-all category).
    pub persons: u32,
    /// Pedestrians.
    pub pedestrians: u32,
    /// Cyclists.
    pub cyclists: u32,
    /// Motorists.
    pub motorists: u32,
}

impl RoadUserCounts {
    /// Sum across all four road-user categories.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.persons + self.pedestrians + self.cyclists + self.motorists
    }
}

/// The normalized fields of one collision row, before total derivation.
///
/// Categorical fields are expected to already be normalized (title-cased,
/// sentinel-substituted); [`CollisionRecord::new`] derives the totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFields {
    /// Raw date text as it appears in the source.
    pub date: String,
    /// Raw time text (`HH:MM[:SS]`), `None` when the source field is blank.
    pub time: Option<String>,
    /// Normalized borough name.
    pub borough: String,
    /// Collision coordinates, `None` when the source values are unparseable.
    pub location: Option<GeoPoint>,
    /// Normalized type of the first vehicle.
    pub vehicle1_type: String,
    /// Normalized contributing factor of the first vehicle.
    pub vehicle1_factor: String,
    /// Normalized type of the second vehicle.
    pub vehicle2_type: String,
    /// Injury counts by road-user category.
    pub injured: RoadUserCounts,
    /// Death counts by road-user category.
    pub killed: RoadUserCounts,
}

/// One vehicle-collision record, immutable after load.
///
/// The injury/death totals are derived exactly once in [`Self::new`] and
/// kept private so nothing can drift them out of sync with the per-category
/// counts. The severity classification is a computed method
/// ([`Self::outcome`]), never a stored field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollisionRecord {
    /// Raw date text.
    pub date: String,
    /// Raw time text, absent when the source field is blank.
    pub time: Option<String>,
    /// Normalized borough name (`Unspecified` when missing).
    pub borough: String,
    /// Collision coordinates, if the source row had parseable ones.
    pub location: Option<GeoPoint>,
    /// Normalized type of the first vehicle.
    pub vehicle1_type: String,
    /// Normalized contributing factor of the first vehicle.
    pub vehicle1_factor: String,
    /// Normalized type of the second vehicle.
    pub vehicle2_type: String,
    /// Injury counts by road-user category.
    pub injured: RoadUserCounts,
    /// Death counts by road-user category.
    pub killed: RoadUserCounts,
    total_injured: u32,
    total_killed: u32,
}

impl CollisionRecord {
    /// Builds a record from normalized fields, deriving the injury and
    /// death totals from the per-road-user counts.
    #[must_use]
    pub fn new(fields: RecordFields) -> Self {
        let total_injured = fields.injured.total();
        let total_killed = fields.killed.total();
        Self {
            date: fields.date,
            time: fields.time,
            borough: fields.borough,
            location: fields.location,
            vehicle1_type: fields.vehicle1_type,
            vehicle1_factor: fields.vehicle1_factor,
            vehicle2_type: fields.vehicle2_type,
            injured: fields.injured,
            killed: fields.killed,
            total_injured,
            total_killed,
        }
    }

    /// Total people injured, summed across road-user categories at load.
    #[must_use]
    pub const fn total_injured(&self) -> u32 {
        self.total_injured
    }

    /// Total people killed, summed across road-user categories at load.
    #[must_use]
    pub const fn total_killed(&self) -> u32 {
        self.total_killed
    }

    /// Classifies this record's severity.
    ///
    /// Precedence: any death makes the record [`OutcomeClass::Dead`], even
    /// when injuries are also present; otherwise any injury makes it
    /// [`OutcomeClass::Injured`]; otherwise [`OutcomeClass::Unharmed`].
    #[must_use]
    pub const fn outcome(&self) -> OutcomeClass {
        if self.total_killed > 0 {
            OutcomeClass::Dead
        } else if self.total_injured > 0 {
            OutcomeClass::Injured
        } else {
            OutcomeClass::Unharmed
        }
    }

    /// The hour-of-day bucket for this record's time field, `None` when
    /// the time is missing or unparseable.
    #[must_use]
    pub fn time_bucket(&self) -> Option<TimeBucket> {
        TimeBucket::from_text(self.time.as_deref()?)
    }
}

/// The coarsest severity classification of a collision record.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "PascalCase")]
#[strum(serialize_all = "title_case")]
pub enum OutcomeClass {
    /// Nobody injured or killed.
    Unharmed,
    /// At least one injury, no deaths.
    Injured,
    /// At least one death.
    Dead,
}

impl OutcomeClass {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Unharmed, Self::Injured, Self::Dead]
    }
}

/// One of the four fixed times-of-day a collision is bucketed into.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TimeBucket {
    /// Midnight up to (but excluding) 6:00 AM.
    BeforeSix,
    /// 6:00 AM up to noon.
    SixToNoon,
    /// Noon up to 6:00 PM.
    NoonToSix,
    /// 6:00 PM through midnight.
    AfterSix,
}

impl TimeBucket {
    /// All buckets in chronological order, matching [`Self::index`].
    pub const ALL: [Self; 4] = [
        Self::BeforeSix,
        Self::SixToNoon,
        Self::NoonToSix,
        Self::AfterSix,
    ];

    /// Buckets an hour of day (0-23).
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            0..=5 => Self::BeforeSix,
            6..=11 => Self::SixToNoon,
            12..=17 => Self::NoonToSix,
            _ => Self::AfterSix,
        }
    }

    /// Parses time text of the form `HH:MM` or `HH:MM:SS` and buckets its
    /// hour component. Returns `None` for malformed text; the owning
    /// record is then simply excluded from time-of-day aggregations.
    #[must_use]
    pub fn from_text(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let time = NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
            .ok()?;
        Some(Self::from_hour(time.hour()))
    }

    /// Stable column index, 0 through 3 in chronological order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::BeforeSix => 0,
            Self::SixToNoon => 1,
            Self::NoonToSix => 2,
            Self::AfterSix => 3,
        }
    }
}

impl std::fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BeforeSix => write!(f, "Before 6:00 AM"),
            Self::SixToNoon => write!(f, "6:00 AM - 12:00 PM"),
            Self::NoonToSix => write!(f, "12:00 PM - 6:00 PM"),
            Self::AfterSix => write!(f, "After 6:00 PM"),
        }
    }
}

/// Selects one of the categorical string fields of a [`CollisionRecord`].
///
/// Aggregations are generic over the field they group by, so a secondary
/// breakdown (e.g. vehicle types within one contributing factor) is plain
/// function composition rather than a special-cased code path.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "kebab-case")]
pub enum CategoryField {
    /// The administrative borough.
    Borough,
    /// Type of the first vehicle.
    Vehicle1Type,
    /// Contributing factor of the first vehicle.
    Vehicle1Factor,
    /// Type of the second vehicle.
    Vehicle2Type,
}

impl CategoryField {
    /// Returns the normalized value of this field on `record`.
    #[must_use]
    pub fn value_of<'a>(self, record: &'a CollisionRecord) -> &'a str {
        match self {
            Self::Borough => &record.borough,
            Self::Vehicle1Type => &record.vehicle1_type,
            Self::Vehicle1Factor => &record.vehicle1_factor,
            Self::Vehicle2Type => &record.vehicle2_type,
        }
    }
}

impl std::fmt::Display for CategoryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Borough => write!(f, "Borough"),
            Self::Vehicle1Type => write!(f, "Vehicle 1 Type"),
            Self::Vehicle1Factor => write!(f, "Vehicle 1 Factor"),
            Self::Vehicle2Type => write!(f, "Vehicle 2 Type"),
        }
    }
}
