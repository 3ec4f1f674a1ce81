use ndarray::{Array1, ArrayView1, ArrayView2};
use rayon::prelude::*;

/// Euclidean distance between two points of the same dimension.
///
/// Squared differences are accumulated left to right before the square
/// root is taken, so equal inputs always give bit-identical results.
#[inline]
pub fn euclidean_distance(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "points must share a dimension");

    a.iter()
        .zip(b.iter())
        .fold(0.0f64, |acc, (x, y)| {
            let diff = x - y;
            acc + diff * diff
        })
        .sqrt()
}

/// Find the index of the centroid closest to `point`.
///
/// Centroids are scanned in index order and only a strictly smaller
/// distance replaces the current best, so exact ties go to the lowest
/// index.
pub fn nearest_centroid(centroids: &ArrayView2<f64>, point: &ArrayView1<f64>) -> usize {
    let mut best_label = 0;
    let mut best_dist = euclidean_distance(&centroids.row(0), point);

    for (j, centroid) in centroids.outer_iter().enumerate().skip(1) {
        let dist = euclidean_distance(&centroid, point);
        if dist < best_dist {
            best_dist = dist;
            best_label = j;
        }
    }

    best_label
}

/// Assign every row of `data` to its nearest centroid.
///
/// With `parallel` set, rows are processed on the rayon pool. Each row
/// only reads the shared centroids and writes its own label, so both paths
/// return the same labels.
pub fn assign_labels(
    data: &ArrayView2<f64>,
    centroids: &ArrayView2<f64>,
    parallel: bool,
) -> Array1<usize> {
    if parallel {
        let labels: Vec<usize> = (0..data.nrows())
            .into_par_iter()
            .map(|i| nearest_centroid(centroids, &data.row(i)))
            .collect();
        Array1::from_vec(labels)
    } else {
        data.outer_iter()
            .map(|point| nearest_centroid(centroids, &point))
            .collect()
    }
}

/// Convergence test between two consecutive centroid sets.
///
/// Returns `true` ("keep iterating") on the first coordinate that moved by
/// `tol` or more, `false` once every coordinate moved by strictly less.
pub fn centroids_moved(old: &ArrayView2<f64>, new: &ArrayView2<f64>, tol: f64) -> bool {
    debug_assert_eq!(old.dim(), new.dim());

    old.iter()
        .zip(new.iter())
        .any(|(o, n)| (n - o).abs() >= tol)
}

/// Largest absolute coordinate change between two centroid sets
pub fn max_centroid_shift(old: &ArrayView2<f64>, new: &ArrayView2<f64>) -> f64 {
    old.iter()
        .zip(new.iter())
        .map(|(o, n)| (n - o).abs())
        .fold(0.0f64, f64::max)
}
