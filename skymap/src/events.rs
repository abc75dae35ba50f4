//! Day-cycle quantities derived from declination alone: meridian-transit
//! altitude, sunrise/sunset hour angles, and the clock time of solar noon.

use crate::projector::HorizonProjector;

impl HorizonProjector {
    /// Maximum altitude reached at meridian transit, in degrees:
    /// `90 - |latitude - declination|`.
    pub fn max_altitude_deg(&self, declination_deg: f64) -> f64 {
        90.0 - (self.observer().latitude_deg - declination_deg).abs()
    }

    /// Sunrise and sunset hour angles `(-H, +H)` for the geometric
    /// horizon, from `cos(H) = -tan(lat) * tan(dec)`.
    ///
    /// Returns `None` during polar day or polar night, when the cosine
    /// falls outside [-1, 1] and the Sun never crosses the horizon. That
    /// is an expected physical condition at high latitudes, not an error.
    pub fn sunrise_sunset_hour_angles(&self, declination_deg: f64) -> Option<(f64, f64)> {
        let lat = self.observer().latitude_deg.to_radians();
        let dec = declination_deg.to_radians();

        let cos_hour_angle = -lat.tan() * dec.tan();
        if cos_hour_angle.abs() > 1.0 {
            return None;
        }

        let hour_angle_deg = cos_hour_angle.acos().to_degrees();
        Some((-hour_angle_deg, hour_angle_deg))
    }

    /// Local clock time `(hour, minute)` at which the Sun crosses the
    /// meridian.
    ///
    /// Solar noon is where the hour angle is zero, so 12:00 is shifted
    /// backwards by the equation of time and by the longitude residual at
    /// 4 minutes per degree. Wraps across midnight for extreme offsets.
    pub fn solar_noon(&self, equation_of_time_min: f64) -> (u8, u8) {
        let correction_min =
            equation_of_time_min + 4.0 * self.observer().longitude_correction_deg();

        let noon_min = (12.0 * 60.0 - correction_min).rem_euclid(24.0 * 60.0);

        let hour = (noon_min / 60.0).floor() as u8 % 24;
        let minute = (noon_min % 60.0).floor() as u8;
        (hour, minute)
    }
}
