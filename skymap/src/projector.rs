//! Celestial-to-horizon coordinate projection.
//!
//! Implements the spherical-trigonometry transform from solar declination
//! and equation of time to local altitude and azimuth. Azimuth is measured
//! clockwise from North and is undefined when the Sun sits exactly at the
//! zenith or nadir; that singularity is surfaced as `None` rather than a
//! floating-point fault.

use solar::{SolarPosition, SolarPositionSeries};

use crate::observer::{ObserverLocation, DEGREES_PER_HOUR};

/// Altitude this close to +/-90 degrees is treated as the azimuth
/// singularity
const ZENITH_TOLERANCE_DEG: f64 = 1e-9;

/// Sun's position as seen from the observer at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonPosition {
    /// Angle above the horizon in degrees, in [-90, 90]
    pub altitude_deg: f64,
    /// Compass bearing clockwise from North in [0, 360), or `None` at
    /// the exact zenith/nadir where the bearing is undefined
    pub azimuth_deg: Option<f64>,
    /// Hour angle in degrees, negative east of the meridian
    pub hour_angle_deg: f64,
    /// Celestial state this position was derived from
    pub solar: SolarPosition,
}

impl HorizonPosition {
    /// Whether the Sun is above the geometric horizon
    pub fn is_above_horizon(&self) -> bool {
        self.altitude_deg >= 0.0
    }
}

/// Projects solar positions into the local horizon frame of one observer.
///
/// Immutable after construction; every projection is a pure function of
/// the inputs, so one projector can serve any number of series.
#[derive(Debug, Clone, Copy)]
pub struct HorizonProjector {
    observer: ObserverLocation,
}

impl HorizonProjector {
    pub fn new(observer: ObserverLocation) -> Self {
        Self { observer }
    }

    pub fn observer(&self) -> &ObserverLocation {
        &self.observer
    }

    /// Hour angle in degrees for a local civil clock reading.
    ///
    /// Folds three corrections into one linear combination: the civil-time
    /// offset from local noon (15 degrees per hour), the equation of time
    /// (4 minutes of time per degree), and the residual between the true
    /// longitude and the timezone reference meridian.
    pub fn hour_angle_deg(&self, equation_of_time_min: f64, hour: u8, minute: u8) -> f64 {
        let time_from_noon_hours = (hour as f64 - 12.0) + minute as f64 / 60.0;

        time_from_noon_hours * DEGREES_PER_HOUR
            + equation_of_time_min / 4.0
            + self.observer.longitude_correction_deg()
    }

    /// Altitude in degrees via the spherical law of cosines:
    /// `sin(alt) = sin(lat)sin(dec) + cos(lat)cos(dec)cos(H)`.
    pub fn altitude_deg(&self, declination_deg: f64, hour_angle_deg: f64) -> f64 {
        let lat = self.observer.latitude_deg.to_radians();
        let dec = declination_deg.to_radians();
        let hour_angle = hour_angle_deg.to_radians();

        let sin_altitude = lat.sin() * dec.sin() + lat.cos() * dec.cos() * hour_angle.cos();

        // Rounding can push the sine a hair outside [-1, 1]
        sin_altitude.clamp(-1.0, 1.0).asin().to_degrees()
    }

    /// Azimuth in degrees clockwise from North, or `None` at the zenith
    /// singularity.
    ///
    /// The atan2 quadrant form yields a bearing measured from South;
    /// adding 180 and wrapping moves it to the North-referenced convention.
    pub fn azimuth_deg(
        &self,
        declination_deg: f64,
        hour_angle_deg: f64,
        altitude_deg: f64,
    ) -> Option<f64> {
        if 90.0 - altitude_deg.abs() < ZENITH_TOLERANCE_DEG {
            // cos(altitude) == 0: every bearing points away from the
            // zenith, none is the answer
            return None;
        }

        let lat = self.observer.latitude_deg.to_radians();
        let dec = declination_deg.to_radians();
        let hour_angle = hour_angle_deg.to_radians();

        // Numerator and denominator share the positive cos(altitude)
        // factor, which atan2 cancels
        let sin_azimuth = dec.cos() * hour_angle.sin();
        let cos_azimuth = dec.cos() * hour_angle.cos() * lat.sin() - dec.sin() * lat.cos();

        let from_south = sin_azimuth.atan2(cos_azimuth).to_degrees();
        Some((from_south + 180.0).rem_euclid(360.0))
    }

    /// Project one solar position at the clock time embedded in its
    /// timestamp.
    pub fn project(&self, solar: &SolarPosition) -> HorizonPosition {
        self.project_at(solar, solar.timestamp.hour(), solar.timestamp.minute())
    }

    /// Project one solar position at an explicit local clock time.
    pub fn project_at(&self, solar: &SolarPosition, hour: u8, minute: u8) -> HorizonPosition {
        let hour_angle_deg = self.hour_angle_deg(solar.equation_of_time_min, hour, minute);
        let altitude_deg = self.altitude_deg(solar.declination_deg, hour_angle_deg);
        let azimuth_deg = self.azimuth_deg(solar.declination_deg, hour_angle_deg, altitude_deg);

        HorizonPosition {
            altitude_deg,
            azimuth_deg,
            hour_angle_deg,
            solar: *solar,
        }
    }

    /// Project a whole year series, one horizon position per day.
    pub fn project_series(&self, series: &SolarPositionSeries) -> Vec<HorizonPosition> {
        series.iter().map(|solar| self.project(solar)).collect()
    }
}
