//! Image-space side of the analemma pipeline
//!
//! Takes the horizon coordinates produced by `skymap` and maps them into
//! the pixel space of a real photograph: camera calibration gives the
//! pixels-per-degree scale, a detected or user-supplied Sun pixel anchors
//! the mapping, and the projector turns a year of horizon positions into
//! a pixel trajectory ready for an external renderer.

use thiserror::Error;

pub mod anchor;
pub mod calibration;
pub mod detector;
pub mod image_proc;
pub mod pixel;
pub mod stats;
pub mod trajectory;

pub use anchor::AnchorPoint;
pub use calibration::{CameraCalibration, SensorFormat};
pub use detector::{
    detect_sun, detect_sun_with, largest_blob, DetectionStrategy, SunBlob, SunDetection,
};
pub use image_proc::brightness_plane;
pub use pixel::PixelShape;
pub use stats::ExtentScan;
pub use trajectory::{ImageProjector, Trajectory, TrajectoryPoint, TrajectoryStats};

/// Error types for calibration, anchoring, and detection
#[derive(Debug, Error)]
pub enum OverlayError {
    /// Field of view must be strictly positive on both axes.
    #[error("invalid field of view: {horizontal_deg} x {vertical_deg} degrees")]
    InvalidFieldOfView {
        horizontal_deg: f64,
        vertical_deg: f64,
    },

    /// Focal length must be strictly positive.
    #[error("invalid focal length: {0} mm")]
    InvalidFocalLength(f64),

    /// Sensor dimensions must be strictly positive.
    #[error("invalid sensor dimensions: {width_mm} x {height_mm} mm")]
    InvalidSensorSize { width_mm: f64, height_mm: f64 },

    /// Calibration needs an image with at least one pixel on each axis.
    #[error("image dimensions are degenerate: {0}")]
    DegenerateImage(pixel::PixelShape),

    /// Detection was handed a buffer with no pixels.
    #[error("image has no pixels")]
    EmptyImage,

    /// Every strategy in a caller-supplied detection chain declined.
    #[error("no detection strategy produced a coordinate")]
    DetectionExhausted,

    /// The anchor observation sits at the zenith, where azimuth (and with
    /// it the whole angular-offset mapping) is undefined.
    #[error("anchor sun position has no defined azimuth (altitude {altitude_deg:.3} degrees)")]
    AnchorAtZenith { altitude_deg: f64 },
}

pub type Result<T> = std::result::Result<T, OverlayError>;
