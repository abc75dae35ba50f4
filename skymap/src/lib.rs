//! Horizon-coordinate projection for a fixed observer
//!
//! Transforms solar celestial coordinates (declination, equation of time)
//! into local altitude and azimuth for an observer at a given latitude and
//! longitude, plus the derived day-cycle quantities: meridian-transit
//! altitude, sunrise/sunset hour angles, and the clock time of solar noon.

use thiserror::Error;

pub mod events;
pub mod observer;
pub mod projector;

pub use observer::ObserverLocation;
pub use projector::{HorizonPosition, HorizonProjector};

/// Error types for observer and projection configuration
#[derive(Debug, Error)]
pub enum SkyMapError {
    /// Latitude outside [-90, 90] degrees, or not finite.
    #[error("latitude out of range: {0} (expected -90 to 90 degrees)")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180] degrees, or not finite.
    #[error("longitude out of range: {0} (expected -180 to 180 degrees)")]
    LongitudeOutOfRange(f64),

    /// Timezone offset too large to correspond to a real zone.
    #[error("timezone offset out of range: {0} hours")]
    TimezoneOutOfRange(f64),
}

pub type Result<T> = std::result::Result<T, SkyMapError>;
