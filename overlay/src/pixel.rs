//! Pixel-grid dimensions and bounds checks

use serde::{Deserialize, Serialize};
use std::fmt;

/// Width and height of an image in pixels.
///
/// Uses `usize` for direct compatibility with ndarray indexing; image
/// coordinates elsewhere are sub-pixel `f64` pairs in (x, y) order with
/// y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelShape {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
}

impl PixelShape {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Center point as sub-pixel (x, y) coordinates
    pub fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// Whether a sub-pixel point falls inside the image
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x < self.width as f64 && y < self.height as f64
    }
}

impl From<(usize, usize)> for PixelShape {
    fn from((width, height): (usize, usize)) -> Self {
        Self::new(width, height)
    }
}

impl fmt::Display for PixelShape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
