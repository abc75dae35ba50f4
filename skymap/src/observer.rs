//! Observer location on Earth

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Result, SkyMapError};

/// Degrees of Earth rotation per hour of clock time
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// A fixed point on Earth from which the sky is observed.
///
/// Latitude is positive north, longitude positive east. The timezone
/// offset links local civil time to the Sun's hour angle; when not given
/// it is derived from the longitude, since standard zones are spaced
/// roughly 15 degrees apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverLocation {
    /// Latitude in degrees, positive north
    pub latitude_deg: f64,
    /// Longitude in degrees, positive east
    pub longitude_deg: f64,
    /// Offset of local civil time from UTC in hours
    pub timezone_offset_hours: f64,
}

impl ObserverLocation {
    /// Create an observer, deriving the timezone offset from longitude.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self> {
        let timezone_offset_hours = (longitude_deg / DEGREES_PER_HOUR).round();
        Self::with_timezone(latitude_deg, longitude_deg, timezone_offset_hours)
    }

    /// Create an observer with an explicit timezone offset.
    pub fn with_timezone(
        latitude_deg: f64,
        longitude_deg: f64,
        timezone_offset_hours: f64,
    ) -> Result<Self> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(SkyMapError::LatitudeOutOfRange(latitude_deg));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(SkyMapError::LongitudeOutOfRange(longitude_deg));
        }
        if !timezone_offset_hours.is_finite() || timezone_offset_hours.abs() > 14.0 {
            return Err(SkyMapError::TimezoneOutOfRange(timezone_offset_hours));
        }

        Ok(Self {
            latitude_deg,
            longitude_deg,
            timezone_offset_hours,
        })
    }

    /// Reference meridian of the observer's timezone, in degrees
    pub fn timezone_meridian_deg(&self) -> f64 {
        self.timezone_offset_hours * DEGREES_PER_HOUR
    }

    /// Residual between the true longitude and the timezone meridian,
    /// in degrees
    pub fn longitude_correction_deg(&self) -> f64 {
        self.longitude_deg - self.timezone_meridian_deg()
    }
}

impl fmt::Display for ObserverLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({:.4}, {:.4}) UTC{:+}",
            self.latitude_deg, self.longitude_deg, self.timezone_offset_hours
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_timezone_derived_from_longitude() {
        let observer = ObserverLocation::new(40.1, -88.2).unwrap();
        assert_relative_eq!(observer.timezone_offset_hours, -6.0);
        assert_relative_eq!(observer.timezone_meridian_deg(), -90.0);
        assert_relative_eq!(observer.longitude_correction_deg(), 1.8, epsilon = 1e-12);
    }

    #[test]
    fn test_explicit_timezone_kept() {
        let observer = ObserverLocation::with_timezone(22.3, 114.2, 8.0).unwrap();
        assert_relative_eq!(observer.timezone_offset_hours, 8.0);
    }

    #[test]
    fn test_latitude_validation() {
        assert!(matches!(
            ObserverLocation::new(90.5, 0.0),
            Err(SkyMapError::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            ObserverLocation::new(f64::NAN, 0.0),
            Err(SkyMapError::LatitudeOutOfRange(_))
        ));
    }

    #[test]
    fn test_longitude_validation() {
        assert!(matches!(
            ObserverLocation::new(0.0, -181.0),
            Err(SkyMapError::LongitudeOutOfRange(_))
        ));
    }

    #[test]
    fn test_timezone_validation() {
        assert!(matches!(
            ObserverLocation::with_timezone(0.0, 0.0, 15.0),
            Err(SkyMapError::TimezoneOutOfRange(_))
        ));
    }

    #[test]
    fn test_poles_are_valid() {
        assert!(ObserverLocation::new(90.0, 0.0).is_ok());
        assert!(ObserverLocation::new(-90.0, 0.0).is_ok());
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = ObserverLocation::new(40.1, -88.2).unwrap();
        let json = serde_json::to_string(&original).unwrap();
        let recovered: ObserverLocation = serde_json::from_str(&json).unwrap();
        assert_eq!(original, recovered);
    }

    #[test]
    fn test_display() {
        let observer = ObserverLocation::with_timezone(40.1, -88.2, -6.0).unwrap();
        let text = format!("{}", observer);
        assert!(text.contains("40.1"));
        assert!(text.contains("-6"));
    }
}
