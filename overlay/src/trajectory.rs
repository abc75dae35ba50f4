//! Year-long analemma trajectory in image pixel space.
//!
//! Combines an anchor point with a camera calibration to map horizon
//! coordinates into pixels: each day's angular offset from the anchor is
//! scaled by the pixels-per-degree factors and added to the anchor pixel.
//! Valid near the anchor by the same small-angle argument as the
//! calibration itself.

use skymap::HorizonPosition;
use time::PrimitiveDateTime;

use crate::anchor::AnchorPoint;
use crate::calibration::CameraCalibration;
use crate::pixel::PixelShape;
use crate::stats::ExtentScan;

/// One visible point of the projected analemma
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    /// Day of year the point belongs to
    pub day_of_year: u16,
    /// Local civil timestamp of the observation
    pub timestamp: PrimitiveDateTime,
    /// Sub-pixel image x coordinate
    pub pixel_x: f64,
    /// Sub-pixel image y coordinate (grows downward)
    pub pixel_y: f64,
    /// Sun altitude in degrees
    pub altitude_deg: f64,
    /// Sun azimuth in degrees clockwise from North
    pub azimuth_deg: f64,
}

/// Bookkeeping for a projected year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrajectoryStats {
    /// Days that produced a visible point
    pub visible: usize,
    /// Days excluded because the Sun was below the horizon
    pub filtered_below_horizon: usize,
    /// Days excluded because azimuth was undefined (Sun at the zenith)
    pub skipped_undefined_azimuth: usize,
}

impl TrajectoryStats {
    /// Total number of days considered
    pub fn total_days(&self) -> usize {
        self.visible + self.filtered_below_horizon + self.skipped_undefined_azimuth
    }
}

/// Projected analemma: visible points ordered by day of year, plus
/// filtering statistics
#[derive(Debug, Clone)]
pub struct Trajectory {
    pub points: Vec<TrajectoryPoint>,
    pub stats: TrajectoryStats,
}

impl Trajectory {
    /// Extent of visible altitudes in degrees
    pub fn altitude_extent(&self) -> ExtentScan<f64> {
        ExtentScan::new(&self.points.iter().map(|p| p.altitude_deg).collect::<Vec<_>>())
    }

    /// Extent of visible azimuths in degrees
    pub fn azimuth_extent(&self) -> ExtentScan<f64> {
        ExtentScan::new(&self.points.iter().map(|p| p.azimuth_deg).collect::<Vec<_>>())
    }

    /// Count of visible points whose pixel lands inside the image
    pub fn within_bounds(&self, image: PixelShape) -> usize {
        self.points
            .iter()
            .filter(|p| image.contains(p.pixel_x, p.pixel_y))
            .count()
    }
}

/// Maps horizon positions into pixel space around one anchored
/// photograph.
///
/// Stateless between calls: the projection is a pure function of the
/// anchor, the calibration, and the input positions.
#[derive(Debug, Clone, Copy)]
pub struct ImageProjector {
    anchor: AnchorPoint,
    calibration: CameraCalibration,
}

impl ImageProjector {
    pub fn new(anchor: AnchorPoint, calibration: CameraCalibration) -> Self {
        Self {
            anchor,
            calibration,
        }
    }

    pub fn anchor(&self) -> &AnchorPoint {
        &self.anchor
    }

    /// Convert sky coordinates to a sub-pixel image coordinate.
    ///
    /// The angular offset from the anchor is scaled per axis; the
    /// vertical offset is negated because image y grows downward while
    /// altitude grows upward. Zero offset reproduces the anchor pixel
    /// exactly.
    pub fn sky_to_pixel(&self, altitude_deg: f64, azimuth_deg: f64) -> (f64, f64) {
        let delta_az = azimuth_deg - self.anchor.azimuth_deg();
        let delta_alt = altitude_deg - self.anchor.altitude_deg();

        let delta_x = delta_az * self.calibration.px_per_deg_azimuth;
        let delta_y = -delta_alt * self.calibration.px_per_deg_altitude;

        let (anchor_x, anchor_y) = self.anchor.pixel();
        (anchor_x + delta_x, anchor_y + delta_y)
    }

    /// Project a year of horizon positions into pixel space.
    ///
    /// Days below the horizon or at the zenith are excluded from the
    /// visible sequence but counted in the statistics. The output is
    /// ordered like the input, one candidate per day.
    pub fn project_year(&self, positions: &[HorizonPosition]) -> Trajectory {
        let mut points = Vec::with_capacity(positions.len());
        let mut stats = TrajectoryStats::default();

        for position in positions {
            let azimuth_deg = match position.azimuth_deg {
                Some(azimuth) => azimuth,
                None => {
                    stats.skipped_undefined_azimuth += 1;
                    continue;
                }
            };

            if position.altitude_deg < 0.0 {
                stats.filtered_below_horizon += 1;
                continue;
            }

            let (pixel_x, pixel_y) = self.sky_to_pixel(position.altitude_deg, azimuth_deg);
            points.push(TrajectoryPoint {
                day_of_year: position.solar.day_of_year,
                timestamp: position.solar.timestamp,
                pixel_x,
                pixel_y,
                altitude_deg: position.altitude_deg,
                azimuth_deg,
            });
            stats.visible += 1;
        }

        log::debug!(
            "trajectory projection: visible={}, below_horizon={}, zenith={}",
            stats.visible,
            stats.filtered_below_horizon,
            stats.skipped_undefined_azimuth
        );

        Trajectory { points, stats }
    }
}
