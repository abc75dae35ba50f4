//! Camera calibration: pixels-per-degree scale for sky-to-image mapping.
//!
//! The calibration is a value object produced once, from either a known
//! field of view or a focal length plus sensor dimensions, and passed
//! explicitly to every sky-to-pixel conversion. There is no mutable
//! "calibrate first, convert later" state to get wrong.
//!
//! The per-axis linear scale is a small-angle approximation: it treats the
//! image as a flat patch of sky, which holds near the anchor point and
//! degrades toward the frame edges. It is not a gnomonic or otherwise
//! projective camera model, and no lens distortion is represented.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::pixel::PixelShape;
use crate::{OverlayError, Result};

/// Pixel/angle scale factors for one photograph
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraCalibration {
    /// Pixels per degree along the azimuth (horizontal) axis
    pub px_per_deg_azimuth: f64,
    /// Pixels per degree along the altitude (vertical) axis
    pub px_per_deg_altitude: f64,
}

impl CameraCalibration {
    /// Calibrate from a known field of view.
    ///
    /// Scale factors are simply `width / horizontal_fov` and
    /// `height / vertical_fov`.
    pub fn from_fov(
        image: PixelShape,
        horizontal_fov_deg: f64,
        vertical_fov_deg: f64,
    ) -> Result<Self> {
        if image.width == 0 || image.height == 0 {
            return Err(OverlayError::DegenerateImage(image));
        }
        if !horizontal_fov_deg.is_finite()
            || !vertical_fov_deg.is_finite()
            || horizontal_fov_deg <= 0.0
            || vertical_fov_deg <= 0.0
        {
            return Err(OverlayError::InvalidFieldOfView {
                horizontal_deg: horizontal_fov_deg,
                vertical_deg: vertical_fov_deg,
            });
        }

        Ok(Self {
            px_per_deg_azimuth: image.width as f64 / horizontal_fov_deg,
            px_per_deg_altitude: image.height as f64 / vertical_fov_deg,
        })
    }

    /// Calibrate from lens focal length and physical sensor dimensions.
    ///
    /// Field of view per axis is `2 * atan(sensor / (2 * focal))`, then
    /// the FOV calibration applies.
    pub fn from_focal_length(
        image: PixelShape,
        focal_length_mm: f64,
        sensor_width_mm: f64,
        sensor_height_mm: f64,
    ) -> Result<Self> {
        if !focal_length_mm.is_finite() || focal_length_mm <= 0.0 {
            return Err(OverlayError::InvalidFocalLength(focal_length_mm));
        }
        if !sensor_width_mm.is_finite()
            || !sensor_height_mm.is_finite()
            || sensor_width_mm <= 0.0
            || sensor_height_mm <= 0.0
        {
            return Err(OverlayError::InvalidSensorSize {
                width_mm: sensor_width_mm,
                height_mm: sensor_height_mm,
            });
        }

        let horizontal_fov_deg = fov_deg(sensor_width_mm, focal_length_mm);
        let vertical_fov_deg = fov_deg(sensor_height_mm, focal_length_mm);

        Self::from_fov(image, horizontal_fov_deg, vertical_fov_deg)
    }

    /// Calibrate from a named sensor format.
    pub fn from_format(
        image: PixelShape,
        focal_length_mm: f64,
        format: &SensorFormat,
    ) -> Result<Self> {
        Self::from_focal_length(image, focal_length_mm, format.width_mm, format.height_mm)
    }
}

/// Angular field of view of one sensor axis behind a lens, in degrees
fn fov_deg(sensor_dim_mm: f64, focal_length_mm: f64) -> f64 {
    2.0 * (sensor_dim_mm / (2.0 * focal_length_mm)).atan().to_degrees()
}

/// Physical sensor dimensions for common camera formats
#[derive(Debug, Clone)]
pub struct SensorFormat {
    /// Format name or identifier
    pub name: String,
    /// Sensor width in millimeters
    pub width_mm: f64,
    /// Sensor height in millimeters
    pub height_mm: f64,
}

impl SensorFormat {
    pub fn new(name: impl Into<String>, width_mm: f64, height_mm: f64) -> Self {
        Self {
            name: name.into(),
            width_mm,
            height_mm,
        }
    }

    /// Sensor diagonal in millimeters
    pub fn diagonal_mm(&self) -> f64 {
        (self.width_mm.powi(2) + self.height_mm.powi(2)).sqrt()
    }
}

/// Standard sensor formats
pub mod formats {
    use super::*;

    /// 35mm full-frame sensor
    pub static FULL_FRAME: Lazy<SensorFormat> =
        Lazy::new(|| SensorFormat::new("Full frame", 36.0, 24.0));

    /// Canon/Nikon/Sony APS-C sensor
    pub static APS_C: Lazy<SensorFormat> = Lazy::new(|| SensorFormat::new("APS-C", 23.5, 15.6));

    /// Micro Four Thirds sensor
    pub static MICRO_FOUR_THIRDS: Lazy<SensorFormat> =
        Lazy::new(|| SensorFormat::new("Micro Four Thirds", 17.3, 13.0));

    /// 1-inch compact sensor
    pub static ONE_INCH: Lazy<SensorFormat> = Lazy::new(|| SensorFormat::new("1-inch", 13.2, 8.8));
}
