//! Solar position models for analemma computation
//!
//! This crate provides the celestial side of the analemma pipeline:
//! closed-form models for solar declination and the equation of time,
//! a provider abstraction over precision modes, and year-long series
//! generation at a fixed clock time.

use thiserror::Error;
use time::PrimitiveDateTime;

pub mod models;
pub mod provider;
pub mod series;

pub use models::{ApproximateModel, EARTH_OBLIQUITY_DEG};
pub use provider::{
    build_provider, DelegatedEphemerisModel, EphemerisSource, PrecisionMode,
    SolarPositionProvider, SunCoordinates,
};
pub use series::{compare_modes, ModeComparison, SolarPositionSeries};

/// Sun's celestial state for one instant, as consumed by the horizon
/// projection layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Solar declination in degrees
    pub declination_deg: f64,
    /// Equation of time in minutes
    pub equation_of_time_min: f64,
    /// Day of year (1-365, or 1-366 in leap years)
    pub day_of_year: u16,
    /// Local civil timestamp the position was computed for
    pub timestamp: PrimitiveDateTime,
}

/// Error types for solar position calculations
#[derive(Debug, Error)]
pub enum SolarError {
    #[error("invalid time: {0}")]
    InvalidTime(String),

    #[error("high-precision mode requires an ephemeris source")]
    MissingEphemerisSource,

    #[error("ephemeris lookup failed: {0}")]
    Ephemeris(String),
}

pub type Result<T> = std::result::Result<T, SolarError>;
