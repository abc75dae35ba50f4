//! Closed-form models for solar declination and the equation of time
//!
//! Both formulas are day-of-year approximations: declination as a single
//! sine wave with the obliquity as its amplitude, the equation of time as
//! a two-harmonic combination of the obliquity and eccentricity effects.

use std::f64::consts::TAU;

use time::PrimitiveDateTime;

use crate::{Result, SolarPosition, SolarPositionProvider};

/// Earth's axial tilt in degrees, the amplitude of the declination wave
pub const EARTH_OBLIQUITY_DEG: f64 = 23.45;

/// Approximate day of year of the vernal equinox, where declination
/// crosses zero going north
pub const VERNAL_EQUINOX_DAY: u16 = 81;

const DAYS_PER_YEAR: f64 = 365.0;

/// Solar declination in degrees for a given day of year.
///
/// Uses the sine-wave approximation `23.45 * sin(2pi/365 * (day + 284))`.
/// The phase shift of 284 days puts the zero crossing at the vernal
/// equinox (day ~81), the maximum at the summer solstice (day ~172) and
/// the minimum at the winter solstice (day ~355). Bounded to
/// +/-23.45 degrees by construction.
pub fn declination_deg(day_of_year: u16) -> f64 {
    let angle = TAU / DAYS_PER_YEAR * (day_of_year as f64 + 284.0);
    EARTH_OBLIQUITY_DEG * angle.sin()
}

/// Equation of time in minutes for a given day of year.
///
/// Combines two effects relative to mean clock time:
/// - obliquity of the ecliptic: `9.87 * sin(2B)`
/// - orbital eccentricity: `7.53 * cos(B) - 1.5 * sin(B)`
///
/// with `B = 2pi * (day - 81) / 365`. The result crosses zero four times
/// per year and stays within +/-20 minutes.
pub fn equation_of_time_min(day_of_year: u16) -> f64 {
    let b = TAU * (day_of_year as f64 - VERNAL_EQUINOX_DAY as f64) / DAYS_PER_YEAR;

    let obliquity_term = 9.87 * (2.0 * b).sin();
    let eccentricity_term = 7.53 * b.cos() - 1.5 * b.sin();

    obliquity_term - eccentricity_term
}

/// Closed-form solar position model.
///
/// Computes declination and equation of time from the day of year alone,
/// with no external data. Fast and accurate to roughly a degree in
/// declination and a couple of minutes in the equation of time, which is
/// sufficient for plotting an analemma at photographic scales.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateModel;

impl ApproximateModel {
    pub fn new() -> Self {
        Self
    }

    /// Extreme declination values reached at the solstices, in degrees
    pub fn declination_bounds(&self) -> (f64, f64) {
        (EARTH_OBLIQUITY_DEG, -EARTH_OBLIQUITY_DEG)
    }
}

impl SolarPositionProvider for ApproximateModel {
    fn position_at(&self, timestamp: PrimitiveDateTime) -> Result<SolarPosition> {
        let day_of_year = timestamp.date().ordinal();

        Ok(SolarPosition {
            declination_deg: declination_deg(day_of_year),
            equation_of_time_min: equation_of_time_min(day_of_year),
            day_of_year,
            timestamp,
        })
    }
}
