use crate::config::KMeansConfig;
use crate::distance::{assign_labels, centroids_moved, max_centroid_shift};
use crate::error::KMeansError;
use log::{debug, info, warn};
use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2};
use std::time::Instant;

/// Result of the k-means algorithm
#[derive(Debug, Clone)]
pub struct KMeansResult {
    /// Final centroid set, shape (k, n_features)
    pub centroids: Array2<f64>,
    /// Assignment of each sample computed during the final update round
    pub labels: Array1<usize>,
    /// Number of completed update rounds
    pub n_iterations: usize,
    /// Whether the run stopped because no centroid moved by `tol` or more
    pub converged: bool,
}

/// Run Lloyd's k-means algorithm.
///
/// Seeds the centroids with the first `k` rows of `data`, then alternates
/// assignment and aggregation. The first update round always runs; the
/// driver continues only while some centroid coordinate moved by at least
/// `config.tol` and fewer than `config.max_iters` rounds have completed.
pub fn lloyd(
    data: &ArrayView2<f64>,
    config: &KMeansConfig,
) -> Result<KMeansResult, KMeansError> {
    let n_samples = data.nrows();
    let n_features = data.ncols();
    let k = config.k;

    // Validate inputs
    if k == 0 {
        return Err(KMeansError::InvalidK(
            "k must be greater than 0".to_string(),
        ));
    }

    if n_samples < k {
        return Err(KMeansError::InsufficientData(format!(
            "Number of samples ({}) is less than k ({})",
            n_samples, k
        )));
    }

    if config.max_iters == 0 {
        return Err(KMeansError::InvalidMaxIters(
            "max_iters must be greater than 0".to_string(),
        ));
    }

    info!(
        "Training k-means: {} samples, {} features, {} clusters, max {} iterations",
        n_samples, n_features, k, config.max_iters
    );

    let mut old_centroids = seed_centroids(data, k);

    let mut labels = assign_labels(data, &old_centroids.view(), config.parallel);
    let mut centroids = update_centroids(data, &labels.view(), k);
    let mut n_iterations = 1;
    let mut moved = centroids_moved(&old_centroids.view(), &centroids.view(), config.tol);
    log_round(n_iterations, config, &old_centroids, &centroids);

    while moved && n_iterations < config.max_iters {
        let iter_start = Instant::now();

        old_centroids = centroids;
        labels = assign_labels(data, &old_centroids.view(), config.parallel);
        centroids = update_centroids(data, &labels.view(), k);
        n_iterations += 1;
        moved = centroids_moved(&old_centroids.view(), &centroids.view(), config.tol);

        log_round(n_iterations, config, &old_centroids, &centroids);
        debug!(
            "  Iteration {} took {:.4}s",
            n_iterations,
            iter_start.elapsed().as_secs_f64()
        );
    }

    if moved {
        info!("Stopped at the iteration cap after {} iterations", n_iterations);
    } else {
        info!("Converged after {} iterations", n_iterations);
    }

    Ok(KMeansResult {
        centroids,
        labels,
        n_iterations,
        converged: !moved,
    })
}

/// Initial centroids: a verbatim copy of the first `k` rows
pub fn seed_centroids(data: &ArrayView2<f64>, k: usize) -> Array2<f64> {
    data.slice(s![..k, ..]).to_owned()
}

/// Recompute each centroid as the coordinate-wise mean of the samples
/// labelled with it.
///
/// Sums are accumulated in sample order. A cluster with no samples becomes
/// the all-zero vector; it is neither kept from the previous round nor
/// reseeded.
pub fn update_centroids(
    data: &ArrayView2<f64>,
    labels: &ArrayView1<usize>,
    k: usize,
) -> Array2<f64> {
    let n_features = data.ncols();

    // Accumulators for new centroids
    let mut cluster_sums: Array2<f64> = Array2::zeros((k, n_features));
    let mut cluster_counts = vec![0usize; k];

    for (point, &label) in data.outer_iter().zip(labels.iter()) {
        cluster_counts[label] += 1;
        let mut sum = cluster_sums.row_mut(label);
        sum += &point;
    }

    for (cluster_idx, (mut centroid, &count)) in cluster_sums
        .outer_iter_mut()
        .zip(cluster_counts.iter())
        .enumerate()
    {
        if count > 0 {
            let count = count as f64;
            centroid.mapv_inplace(|sum| sum / count);
        } else {
            warn!(
                "Cluster {} received no points; resetting it to the origin",
                cluster_idx
            );
        }
    }

    cluster_sums
}

fn log_round(
    iteration: usize,
    config: &KMeansConfig,
    old_centroids: &Array2<f64>,
    centroids: &Array2<f64>,
) {
    if log::log_enabled!(log::Level::Debug) {
        debug!(
            "  Iteration {}/{}: max shift = {:.6}",
            iteration,
            config.max_iters,
            max_centroid_shift(&old_centroids.view(), &centroids.view())
        );
    }
}
