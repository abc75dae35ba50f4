//! Pixel-buffer processing for sun detection.
//!
//! All algorithms operate on `ndarray` views of a single `f64` brightness
//! plane; the `brightness` submodule handles reduction from color or
//! grayscale `image` crate buffers to that plane.

pub mod brightness;
pub mod centroid;
pub mod thresholding;

pub use brightness::{brightness_plane, gray_image_to_array2};
pub use centroid::{labeled_centroid, masked_centroid};
pub use thresholding::{apply_threshold, component_areas, connected_components, sun_threshold};
