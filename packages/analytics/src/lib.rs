#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Categorical aggregations over collision records.
//!
//! All functions here are pure: they take a record slice plus parameters
//! and return new values, never mutating the input collection. Empty
//! inputs produce empty outputs rather than errors, so callers branch on
//! emptiness instead of catching anything.
//!
//! Secondary breakdowns (e.g. the vehicle types involved in collisions
//! caused by one factor) are plain composition of [`filter_by_category`]
//! with a distribution function; there is no special-cased path for them.

pub mod outcome;
pub mod time_of_day;

pub use outcome::{
    category_distribution, distinct_values, filter_by_category, outcome_distribution,
};
pub use time_of_day::joint_distribution;
