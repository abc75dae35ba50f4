//! Anchor point linking one real observation to one image pixel

use skymap::HorizonPosition;
use time::PrimitiveDateTime;

use crate::{OverlayError, Result};

/// Ground truth tying the sky to the image: the Sun's computed horizon
/// position at the moment the photograph was taken, and the pixel where
/// the photograph shows it.
///
/// Every projected point is expressed as an angular offset from this
/// anchor, converted to a pixel offset. Created once per photograph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPoint {
    timestamp: PrimitiveDateTime,
    altitude_deg: f64,
    azimuth_deg: f64,
    pixel: (f64, f64),
}

impl AnchorPoint {
    /// Create an anchor from the computed horizon position and the
    /// observed Sun pixel.
    ///
    /// An anchor at the exact zenith has no defined azimuth and cannot
    /// serve as the origin of an angular-offset mapping; that is rejected
    /// here rather than surfacing later as NaN pixel coordinates.
    pub fn new(horizon: HorizonPosition, pixel: (f64, f64)) -> Result<Self> {
        let azimuth_deg = horizon
            .azimuth_deg
            .ok_or(OverlayError::AnchorAtZenith {
                altitude_deg: horizon.altitude_deg,
            })?;

        Ok(Self {
            timestamp: horizon.solar.timestamp,
            altitude_deg: horizon.altitude_deg,
            azimuth_deg,
            pixel,
        })
    }

    /// Moment the photograph was taken
    pub fn timestamp(&self) -> PrimitiveDateTime {
        self.timestamp
    }

    /// Sun altitude at the anchor instant, degrees
    pub fn altitude_deg(&self) -> f64 {
        self.altitude_deg
    }

    /// Sun azimuth at the anchor instant, degrees clockwise from North
    pub fn azimuth_deg(&self) -> f64 {
        self.azimuth_deg
    }

    /// Observed Sun pixel as sub-pixel (x, y)
    pub fn pixel(&self) -> (f64, f64) {
        self.pixel
    }
}
