use crate::algorithm::lloyd;
use crate::config::KMeansConfig;
use crate::distance::assign_labels;
use crate::error::KMeansError;
use ndarray::{Array1, Array2, ArrayView2};

/// Deterministic Lloyd k-means model compatible with ndarray.
///
/// Centroids are seeded from the first `k` samples in row order, so the same
/// data and configuration always produce the same centroids.
///
/// # Example
///
/// ```
/// use lloyd_kmeans::KMeans;
/// use ndarray::array;
///
/// let data = array![[0.0, 0.0], [0.0, 2.0], [10.0, 0.0], [10.0, 2.0]];
///
/// let mut kmeans = KMeans::new(2);
/// kmeans.train(&data.view()).unwrap();
///
/// let labels = kmeans.predict(&data.view()).unwrap();
/// assert_eq!(labels.to_vec(), vec![0, 1, 0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct KMeans {
    /// Model configuration
    config: KMeansConfig,

    /// Number of features (dimensions), 0 until the first train call
    d: usize,

    /// Trained centroids (None if not yet fitted)
    centroids: Option<Array2<f64>>,

    /// Update rounds completed by the last training run
    n_iterations: usize,

    /// Whether the last training run converged before the iteration cap
    converged: bool,
}

impl KMeans {
    /// Create a new KMeans instance with default configuration.
    ///
    /// # Panics
    ///
    /// Panics if `k` is 0.
    pub fn new(k: usize) -> Self {
        Self::with_config(KMeansConfig::new(k))
    }

    /// Create a new KMeans instance with custom configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config.k` is 0.
    pub fn with_config(config: KMeansConfig) -> Self {
        assert!(config.k > 0, "k must be greater than 0");

        Self {
            config,
            d: 0,
            centroids: None,
            n_iterations: 0,
            converged: false,
        }
    }

    /// Train the model on the given data.
    ///
    /// # Arguments
    ///
    /// * `data` - Training data of shape (n_samples, n_features)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Number of samples is less than k
    /// - Data dimensions don't match (for subsequent calls)
    pub fn train(&mut self, data: &ArrayView2<f64>) -> Result<(), KMeansError> {
        let n_features = data.ncols();

        // Set dimensions on first call, validate on subsequent calls
        if self.d == 0 {
            self.d = n_features;
        } else if n_features != self.d {
            return Err(KMeansError::InvalidDimensions(format!(
                "Expected {} features, got {}",
                self.d, n_features
            )));
        }

        let result = lloyd(data, &self.config)?;

        self.centroids = Some(result.centroids);
        self.n_iterations = result.n_iterations;
        self.converged = result.converged;
        Ok(())
    }

    /// Fit the model to the data. Equivalent to `train()`.
    ///
    /// Returns `&mut Self` for method chaining.
    pub fn fit(&mut self, data: &ArrayView2<f64>) -> Result<&mut Self, KMeansError> {
        self.train(data)?;
        Ok(self)
    }

    /// Predict cluster assignments for new data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The model has not been fitted yet
    /// - Data dimensions don't match the training data
    pub fn predict(&self, data: &ArrayView2<f64>) -> Result<Array1<usize>, KMeansError> {
        let centroids = self.centroids.as_ref().ok_or(KMeansError::NotFitted)?;

        let n_features = data.ncols();
        if n_features != self.d {
            return Err(KMeansError::InvalidDimensions(format!(
                "Expected {} features, got {}",
                self.d, n_features
            )));
        }

        Ok(assign_labels(data, &centroids.view(), self.config.parallel))
    }

    /// Fit the model and predict cluster assignments in one call.
    pub fn fit_predict(&mut self, data: &ArrayView2<f64>) -> Result<Array1<usize>, KMeansError> {
        self.train(data)?;
        self.predict(data)
    }

    /// Get the centroids of the fitted model.
    pub fn centroids(&self) -> Option<&Array2<f64>> {
        self.centroids.as_ref()
    }

    /// Number of update rounds completed by the last training run.
    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    /// Whether the last training run converged before the iteration cap.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Get the number of clusters.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Get the number of features (dimensions).
    pub fn d(&self) -> usize {
        self.d
    }

    /// Get the configuration.
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }
}
