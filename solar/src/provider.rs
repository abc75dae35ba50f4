//! Precision-mode selection for solar position computation
//!
//! The pipeline consumes a single [`SolarPositionProvider`] capability
//! chosen once at construction, rather than branching on a mode flag at
//! every call site. Two implementations exist: the closed-form
//! [`ApproximateModel`](crate::ApproximateModel) and
//! [`DelegatedEphemerisModel`], which obtains declination from an injected
//! ephemeris collaborator.

use time::PrimitiveDateTime;

use crate::models;
use crate::{ApproximateModel, Result, SolarError, SolarPosition};

/// Sun coordinates returned by an external ephemeris source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunCoordinates {
    /// Right ascension in hours
    pub right_ascension_hours: f64,
    /// Declination in degrees
    pub declination_deg: f64,
}

/// Narrow interface to an external high-precision ephemeris.
///
/// The core never computes ephemerides itself: given a timestamp, a source
/// returns the Sun's equatorial coordinates. A source that performs network
/// or service calls is expected to be synchronous here; timeout and retry
/// policy belong to the caller that constructs it.
pub trait EphemerisSource {
    /// Get the Sun's equatorial coordinates at a specific time
    fn sun_coordinates(&self, timestamp: PrimitiveDateTime) -> Result<SunCoordinates>;
}

/// Capability handed to the rest of the pipeline: one solar position per
/// timestamp, whatever the underlying precision mode.
pub trait SolarPositionProvider {
    fn position_at(&self, timestamp: PrimitiveDateTime) -> Result<SolarPosition>;
}

/// Calculation precision modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecisionMode {
    /// Fast sine-wave formulas, no external data
    Approximate,
    /// Declination delegated to an ephemeris source
    HighPrecision,
}

impl std::str::FromStr for PrecisionMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "approximate" => Ok(PrecisionMode::Approximate),
            "high-precision" => Ok(PrecisionMode::HighPrecision),
            _ => Err(format!(
                "Unknown precision mode: {}. Valid options: approximate, high-precision",
                s
            )),
        }
    }
}

/// Solar position model backed by an external ephemeris source.
///
/// Declination comes from the injected [`EphemerisSource`]. The equation
/// of time still uses the closed-form approximation: no high-precision
/// equation-of-time method is wired up, and mixing a precise declination
/// with an approximate equation of time is an acknowledged accuracy gap
/// of this mode, not something corrected silently.
pub struct DelegatedEphemerisModel {
    source: Box<dyn EphemerisSource + Send + Sync>,
}

impl DelegatedEphemerisModel {
    /// Create a model around an ephemeris source.
    ///
    /// The source is mandatory; selecting high-precision mode without one
    /// fails in [`build_provider`] before any position is requested.
    pub fn new(source: Box<dyn EphemerisSource + Send + Sync>) -> Self {
        Self { source }
    }
}

impl SolarPositionProvider for DelegatedEphemerisModel {
    fn position_at(&self, timestamp: PrimitiveDateTime) -> Result<SolarPosition> {
        let coordinates = self.source.sun_coordinates(timestamp)?;
        let day_of_year = timestamp.date().ordinal();

        Ok(SolarPosition {
            declination_deg: coordinates.declination_deg,
            equation_of_time_min: models::equation_of_time_min(day_of_year),
            day_of_year,
            timestamp,
        })
    }
}

/// Build the provider for a precision mode.
///
/// Requesting high-precision mode without a source is a configuration
/// error raised here, at construction, so the failure surfaces before any
/// per-date computation starts.
pub fn build_provider(
    mode: PrecisionMode,
    source: Option<Box<dyn EphemerisSource + Send + Sync>>,
) -> Result<Box<dyn SolarPositionProvider + Send + Sync>> {
    match mode {
        PrecisionMode::Approximate => Ok(Box::new(ApproximateModel::new())),
        PrecisionMode::HighPrecision => {
            let source = source.ok_or(SolarError::MissingEphemerisSource)?;
            Ok(Box::new(DelegatedEphemerisModel::new(source)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use time::macros::datetime;

    /// Ephemeris stub returning fixed coordinates
    struct FixedSource {
        declination_deg: f64,
    }

    impl EphemerisSource for FixedSource {
        fn sun_coordinates(&self, _timestamp: PrimitiveDateTime) -> Result<SunCoordinates> {
            Ok(SunCoordinates {
                right_ascension_hours: 6.0,
                declination_deg: self.declination_deg,
            })
        }
    }

    /// Ephemeris stub that always fails
    struct BrokenSource;

    impl EphemerisSource for BrokenSource {
        fn sun_coordinates(&self, _timestamp: PrimitiveDateTime) -> Result<SunCoordinates> {
            Err(SolarError::Ephemeris("service unreachable".to_string()))
        }
    }

    #[test]
    fn test_high_precision_without_source_fails_at_construction() {
        let result = build_provider(PrecisionMode::HighPrecision, None);
        assert!(matches!(result, Err(SolarError::MissingEphemerisSource)));
    }

    #[test]
    fn test_approximate_mode_needs_no_source() {
        let provider = build_provider(PrecisionMode::Approximate, None).unwrap();
        let position = provider.position_at(datetime!(2026-03-22 12:00)).unwrap();
        assert!(position.declination_deg.abs() < 1.0);
    }

    #[test]
    fn test_delegated_declination_comes_from_source() {
        let source = FixedSource {
            declination_deg: 17.2,
        };
        let model = DelegatedEphemerisModel::new(Box::new(source));

        let position = model.position_at(datetime!(2026-05-01 12:00)).unwrap();
        assert_relative_eq!(position.declination_deg, 17.2, epsilon = 1e-12);
    }

    #[test]
    fn test_delegated_equation_of_time_stays_approximate() {
        let source = FixedSource {
            declination_deg: 17.2,
        };
        let model = DelegatedEphemerisModel::new(Box::new(source));

        let timestamp = datetime!(2026-05-01 12:00);
        let position = model.position_at(timestamp).unwrap();
        let expected = models::equation_of_time_min(timestamp.date().ordinal());

        assert_relative_eq!(position.equation_of_time_min, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_source_failure_surfaces_to_caller() {
        let model = DelegatedEphemerisModel::new(Box::new(BrokenSource));
        let result = model.position_at(datetime!(2026-05-01 12:00));
        assert!(matches!(result, Err(SolarError::Ephemeris(_))));
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(
            "approximate".parse::<PrecisionMode>().unwrap(),
            PrecisionMode::Approximate
        );
        assert_eq!(
            "High-Precision".parse::<PrecisionMode>().unwrap(),
            PrecisionMode::HighPrecision
        );
        assert!("nasa-grade".parse::<PrecisionMode>().is_err());
    }
}
