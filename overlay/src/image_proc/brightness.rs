//! Reduction of image buffers to a single brightness plane.
//!
//! Detection works on one `f64` channel. Color images are reduced with a
//! per-pixel channel maximum rather than a luminance weighting: the Sun's
//! disc saturates at least one channel, and the maximum keeps saturated
//! pixels at the top of the range regardless of their hue. Alpha channels
//! are ignored.

use image::DynamicImage;
use ndarray::Array2;

/// Reduce any supported image to a brightness plane.
///
/// Grayscale inputs pass through unchanged; color inputs take the maximum
/// of the red, green, and blue channels per pixel. Output is row-major
/// `[y, x]` with values in the source bit-depth range as `f64`.
pub fn brightness_plane(image: &DynamicImage) -> Array2<f64> {
    match image {
        DynamicImage::ImageLuma8(gray) => gray_image_to_array2(gray),
        other => {
            let rgb = other.to_rgb8();
            let (width, height) = rgb.dimensions();

            let mut plane = Array2::zeros((height as usize, width as usize));
            for (x, y, pixel) in rgb.enumerate_pixels() {
                let [r, g, b] = pixel.0;
                plane[[y as usize, x as usize]] = r.max(g).max(b) as f64;
            }
            plane
        }
    }
}

/// Convert an 8-bit grayscale image to an `f64` array in `[y, x]` order.
pub fn gray_image_to_array2(image: &image::GrayImage) -> Array2<f64> {
    let (width, height) = image.dimensions();

    let mut plane = Array2::zeros((height as usize, width as usize));
    for (x, y, pixel) in image.enumerate_pixels() {
        plane[[y as usize, x as usize]] = pixel.0[0] as f64;
    }
    plane
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn test_gray_passthrough() {
        let mut gray = GrayImage::new(3, 2);
        gray.put_pixel(2, 1, Luma([200]));

        let plane = brightness_plane(&DynamicImage::ImageLuma8(gray));

        assert_eq!(plane.dim(), (2, 3));
        assert_eq!(plane[[1, 2]], 200.0);
        assert_eq!(plane[[0, 0]], 0.0);
    }

    #[test]
    fn test_rgb_takes_channel_maximum() {
        let mut rgb = RgbImage::new(2, 2);
        rgb.put_pixel(0, 0, Rgb([10, 250, 30]));
        rgb.put_pixel(1, 1, Rgb([90, 20, 80]));

        let plane = brightness_plane(&DynamicImage::ImageRgb8(rgb));

        assert_eq!(plane[[0, 0]], 250.0);
        assert_eq!(plane[[1, 1]], 90.0);
    }

    #[test]
    fn test_plane_is_row_major() {
        let mut gray = GrayImage::new(4, 2);
        gray.put_pixel(3, 0, Luma([77]));

        let plane = gray_image_to_array2(&gray);

        // (x=3, y=0) lands at [row 0, col 3]
        assert_eq!(plane[[0, 3]], 77.0);
    }
}
