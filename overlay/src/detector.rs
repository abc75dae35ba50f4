//! Automatic detection of the Sun's pixel position in a photograph.
//!
//! Detection runs an explicit ordered chain of strategies, each of which
//! either produces a coordinate or passes to the next tier:
//!
//! 1. **BlobCentroid** - threshold near the brightness maximum, label
//!    connected components, take the brightness-weighted centroid of the
//!    largest one (the Sun's saturated core).
//! 2. **WeightedThreshold** - brightness-weighted centroid over all
//!    thresholded pixels, without component analysis.
//! 3. **BrightestPixel** - location of the global maximum.
//!
//! The chain never fails on a non-empty buffer: the last tier always
//! produces a coordinate, so degraded images (haze, no clean disc, a
//! single hot pixel) still yield an anchor candidate.

use ndarray::ArrayView2;

use crate::image_proc::{
    apply_threshold, component_areas, connected_components, labeled_centroid, masked_centroid,
    sun_threshold,
};
use crate::{OverlayError, Result};

/// Minimum number of thresholded pixels for the weighted-threshold tier
/// to trust its centroid
const MIN_THRESHOLD_PIXELS: usize = 10;

/// Detected bright region, transient output of the blob tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunBlob {
    /// Brightness-weighted centroid as sub-pixel (x, y)
    pub centroid: (f64, f64),
    /// Number of pixels in the region
    pub area: usize,
}

/// One tier of the detection chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionStrategy {
    /// Largest connected component of near-maximum pixels
    BlobCentroid,
    /// Weighted centroid over all thresholded pixels
    WeightedThreshold,
    /// Global maximum pixel
    BrightestPixel,
}

/// Default tier ordering, most to least discriminating
pub const DEFAULT_STRATEGY_CHAIN: [DetectionStrategy; 3] = [
    DetectionStrategy::BlobCentroid,
    DetectionStrategy::WeightedThreshold,
    DetectionStrategy::BrightestPixel,
];

/// Detection result with the tier that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunDetection {
    /// Estimated Sun position as sub-pixel (x, y)
    pub pixel: (f64, f64),
    /// Strategy tier that produced the coordinate
    pub strategy: DetectionStrategy,
    /// Pixel count backing the estimate (1 for the brightest-pixel tier)
    pub area: usize,
}

impl DetectionStrategy {
    /// Run one tier against a brightness plane.
    fn attempt(&self, brightness: &ArrayView2<f64>) -> Option<SunDetection> {
        match self {
            DetectionStrategy::BlobCentroid => {
                let blob = largest_blob(brightness)?;
                Some(SunDetection {
                    pixel: blob.centroid,
                    strategy: *self,
                    area: blob.area,
                })
            }
            DetectionStrategy::WeightedThreshold => {
                let threshold = sun_threshold(brightness);
                let mask = apply_threshold(brightness, threshold);
                let area = mask.iter().filter(|&&selected| selected).count();
                if area < MIN_THRESHOLD_PIXELS {
                    return None;
                }

                let centroid = masked_centroid(brightness, &mask.view())?;
                Some(SunDetection {
                    pixel: centroid,
                    strategy: *self,
                    area,
                })
            }
            DetectionStrategy::BrightestPixel => {
                let ((row, col), _) = brightness
                    .indexed_iter()
                    .fold(None, |best: Option<((usize, usize), f64)>, (index, &value)| {
                        match best {
                            Some((_, best_value)) if best_value >= value => best,
                            _ => Some((index, value)),
                        }
                    })?;

                Some(SunDetection {
                    pixel: (col as f64, row as f64),
                    strategy: *self,
                    area: 1,
                })
            }
        }
    }
}

/// Largest connected region of near-maximum pixels, if any has
/// measurable brightness.
pub fn largest_blob(brightness: &ArrayView2<f64>) -> Option<SunBlob> {
    let threshold = sun_threshold(brightness);
    let mask = apply_threshold(brightness, threshold);
    let (labels, count) = connected_components(&mask.view());
    if count == 0 {
        return None;
    }

    let areas = component_areas(&labels.view(), count);
    let (largest_index, &area) = areas.iter().enumerate().max_by_key(|(_, &area)| area)?;

    let centroid = labeled_centroid(brightness, &labels.view(), largest_index + 1)?;
    Some(SunBlob { centroid, area })
}

/// Detect the Sun with the default strategy chain.
pub fn detect_sun(brightness: &ArrayView2<f64>) -> Result<SunDetection> {
    detect_sun_with(&DEFAULT_STRATEGY_CHAIN, brightness)
}

/// Detect the Sun with an explicit strategy chain, tried in order.
///
/// Fails only on an empty buffer or when every supplied strategy declines;
/// any chain ending in [`DetectionStrategy::BrightestPixel`] succeeds on
/// every non-empty image.
pub fn detect_sun_with(
    strategies: &[DetectionStrategy],
    brightness: &ArrayView2<f64>,
) -> Result<SunDetection> {
    if brightness.is_empty() {
        return Err(OverlayError::EmptyImage);
    }

    let start = std::time::Instant::now();
    for strategy in strategies {
        if let Some(detection) = strategy.attempt(brightness) {
            log::debug!(
                "sun detection: strategy={:?}, pixel=({:.2}, {:.2}), area={}, duration={:.3}ms",
                detection.strategy,
                detection.pixel.0,
                detection.pixel.1,
                detection.area,
                start.elapsed().as_secs_f64() * 1000.0
            );
            return Ok(detection);
        }
    }

    Err(OverlayError::DetectionExhausted)
}
