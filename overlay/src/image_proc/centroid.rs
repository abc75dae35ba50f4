//! Brightness-weighted centroid calculation.
//!
//! Centroids are returned as sub-pixel `(x, y)` coordinates, x along
//! columns and y along rows, matching image conventions.

use ndarray::ArrayView2;

/// Brightness-weighted centroid of one labeled region.
///
/// Returns `None` when the region has no total brightness, which would
/// make the center of mass undefined.
pub fn labeled_centroid(
    image: &ArrayView2<f64>,
    labels: &ArrayView2<usize>,
    label: usize,
) -> Option<(f64, f64)> {
    weighted_centroid(image, |row, col| labels[[row, col]] == label)
}

/// Brightness-weighted centroid of all pixels selected by a mask.
pub fn masked_centroid(image: &ArrayView2<f64>, mask: &ArrayView2<bool>) -> Option<(f64, f64)> {
    weighted_centroid(image, |row, col| mask[[row, col]])
}

fn weighted_centroid<F>(image: &ArrayView2<f64>, selected: F) -> Option<(f64, f64)>
where
    F: Fn(usize, usize) -> bool,
{
    let mut total = 0.0;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;

    for ((row, col), &intensity) in image.indexed_iter() {
        if selected(row, col) {
            total += intensity;
            sum_x += col as f64 * intensity;
            sum_y += row as f64 * intensity;
        }
    }

    if total < f64::EPSILON {
        return None;
    }

    Some((sum_x / total, sum_y / total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array2;

    #[test]
    fn test_symmetric_cross_centroid() {
        let mut image = Array2::<f64>::zeros((5, 5));
        image[[2, 2]] = 1.0;
        image[[1, 2]] = 0.5;
        image[[2, 1]] = 0.5;
        image[[3, 2]] = 0.5;
        image[[2, 3]] = 0.5;

        let mask = image.mapv(|v| v > 0.0);
        let (x, y) = masked_centroid(&image.view(), &mask.view()).unwrap();

        assert_relative_eq!(x, 2.0, epsilon = 1e-10);
        assert_relative_eq!(y, 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_brightness_bias_shifts_centroid() {
        let mut image = Array2::<f64>::zeros((5, 5));
        image[[2, 1]] = 0.4;
        image[[2, 2]] = 1.0;
        image[[2, 3]] = 0.6;

        let mask = image.mapv(|v| v > 0.0);
        let (x, y) = masked_centroid(&image.view(), &mask.view()).unwrap();

        // Brighter east pixel pulls x past the center column
        assert!(x > 2.0);
        assert_relative_eq!(y, 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_labeled_centroid_ignores_other_regions() {
        let mut image = Array2::<f64>::zeros((5, 5));
        image[[0, 0]] = 9.0;
        image[[4, 4]] = 3.0;

        let mut labels = Array2::<usize>::zeros((5, 5));
        labels[[0, 0]] = 1;
        labels[[4, 4]] = 2;

        let (x, y) = labeled_centroid(&image.view(), &labels.view(), 2).unwrap();
        assert_relative_eq!(x, 4.0, epsilon = 1e-12);
        assert_relative_eq!(y, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_mass_region_is_none() {
        let image = Array2::<f64>::zeros((3, 3));
        let mask = Array2::from_elem((3, 3), true);

        assert_eq!(masked_centroid(&image.view(), &mask.view()), None);
    }
}
