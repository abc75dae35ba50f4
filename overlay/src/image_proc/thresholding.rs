//! Thresholding and connected component labeling for bright-region
//! detection

use ndarray::{Array2, ArrayView2};

/// Fraction of the maximum brightness used as the detection threshold.
///
/// Only the very brightest pixels survive; on a daytime sky photograph
/// that is the saturated core of the Sun's disc.
pub const SUN_THRESHOLD_FRACTION: f64 = 0.999;

/// Detection threshold for a brightness plane: `max * 0.999`.
pub fn sun_threshold(image: &ArrayView2<f64>) -> f64 {
    let max = image.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    max * SUN_THRESHOLD_FRACTION
}

/// Binary mask of pixels at or above the threshold.
pub fn apply_threshold(image: &ArrayView2<f64>, threshold: f64) -> Array2<bool> {
    image.mapv(|pixel| pixel >= threshold)
}

/// Label connected regions of a binary mask.
///
/// Two-pass labeling with 4-connectivity: the first pass assigns
/// provisional labels and records equivalences where two provisional
/// regions touch, the second pass resolves each pixel to its region's
/// root label. Returns the label image (0 = background) and the number
/// of regions.
pub fn connected_components(mask: &ArrayView2<bool>) -> (Array2<usize>, usize) {
    let (height, width) = mask.dim();
    let mut labels = Array2::zeros((height, width));

    // parent[l] links label l toward its equivalence-class root
    let mut parent: Vec<usize> = vec![0];

    for row in 0..height {
        for col in 0..width {
            if !mask[[row, col]] {
                continue;
            }

            let above = if row > 0 { labels[[row - 1, col]] } else { 0 };
            let left = if col > 0 { labels[[row, col - 1]] } else { 0 };

            labels[[row, col]] = match (above, left) {
                (0, 0) => {
                    parent.push(parent.len());
                    parent.len() - 1
                }
                (a, 0) => a,
                (0, l) => l,
                (a, l) => {
                    union(&mut parent, a, l);
                    a.min(l)
                }
            };
        }
    }

    // Compact the surviving roots into consecutive labels
    let mut remap = vec![0usize; parent.len()];
    let mut count = 0;
    for label in 1..parent.len() {
        let root = find(&mut parent, label);
        if remap[root] == 0 {
            count += 1;
            remap[root] = count;
        }
    }

    for value in labels.iter_mut() {
        if *value != 0 {
            *value = remap[find(&mut parent, *value)];
        }
    }

    (labels, count)
}

/// Pixel count of each labeled region, indexed by `label - 1`.
pub fn component_areas(labels: &ArrayView2<usize>, count: usize) -> Vec<usize> {
    let mut areas = vec![0usize; count];
    for &label in labels.iter() {
        if label > 0 {
            areas[label - 1] += 1;
        }
    }
    areas
}

fn find(parent: &mut Vec<usize>, label: usize) -> usize {
    let mut root = label;
    while parent[root] != root {
        root = parent[root];
    }
    // Path compression
    let mut current = label;
    while parent[current] != root {
        let next = parent[current];
        parent[current] = root;
        current = next;
    }
    root
}

fn union(parent: &mut Vec<usize>, a: usize, b: usize) {
    let root_a = find(parent, a);
    let root_b = find(parent, b);
    if root_a != root_b {
        // Smaller root wins so labels stay stable
        let (low, high) = (root_a.min(root_b), root_a.max(root_b));
        parent[high] = low;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_sun_threshold_tracks_maximum() {
        let mut image = Array2::<f64>::zeros((4, 4));
        image[[2, 2]] = 1000.0;

        let threshold = sun_threshold(&image.view());
        assert_eq!(threshold, 999.0);
    }

    #[test]
    fn test_apply_threshold() {
        let mut image = Array2::<f64>::zeros((2, 2));
        image[[0, 0]] = 5.0;
        image[[1, 1]] = 10.0;

        let mask = apply_threshold(&image.view(), 5.0);

        assert!(mask[[0, 0]]);
        assert!(mask[[1, 1]]);
        assert!(!mask[[0, 1]]);
    }

    #[test]
    fn test_two_separate_components() {
        let mut mask = Array2::from_elem((5, 5), false);
        mask[[0, 0]] = true;
        mask[[0, 1]] = true;
        mask[[4, 4]] = true;

        let (labels, count) = connected_components(&mask.view());

        assert_eq!(count, 2);
        assert_eq!(labels[[0, 0]], labels[[0, 1]]);
        assert_ne!(labels[[0, 0]], labels[[4, 4]]);
    }

    #[test]
    fn test_u_shape_is_one_component() {
        // Two vertical arms joined at the bottom: the arms get different
        // provisional labels that must be merged in the second pass
        let mut mask = Array2::from_elem((4, 3), false);
        mask[[0, 0]] = true;
        mask[[1, 0]] = true;
        mask[[2, 0]] = true;
        mask[[0, 2]] = true;
        mask[[1, 2]] = true;
        mask[[2, 2]] = true;
        mask[[3, 0]] = true;
        mask[[3, 1]] = true;
        mask[[3, 2]] = true;

        let (labels, count) = connected_components(&mask.view());

        assert_eq!(count, 1);
        assert_eq!(labels[[0, 0]], labels[[0, 2]]);
    }

    #[test]
    fn test_diagonal_pixels_are_separate() {
        // 4-connectivity: diagonal neighbors do not join
        let mut mask = Array2::from_elem((3, 3), false);
        mask[[0, 0]] = true;
        mask[[1, 1]] = true;

        let (_, count) = connected_components(&mask.view());
        assert_eq!(count, 2);
    }

    #[test]
    fn test_component_areas() {
        let mut mask = Array2::from_elem((4, 4), false);
        mask[[0, 0]] = true;
        mask[[0, 1]] = true;
        mask[[0, 2]] = true;
        mask[[3, 3]] = true;

        let (labels, count) = connected_components(&mask.view());
        let areas = component_areas(&labels.view(), count);

        assert_eq!(areas.len(), 2);
        let mut sorted = areas.clone();
        sorted.sort();
        assert_eq!(sorted, vec![1, 3]);
    }

    #[test]
    fn test_empty_mask_has_no_components() {
        let mask = Array2::from_elem((3, 3), false);
        let (labels, count) = connected_components(&mask.view());

        assert_eq!(count, 0);
        assert!(labels.iter().all(|&l| l == 0));
    }
}
