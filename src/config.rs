/// Convergence tolerance shared by every run: a centroid coordinate that
/// moved by less than this between two rounds counts as settled.
pub const EPSILON: f64 = 0.001;

/// Iteration cap used when none is given on the command line.
pub const DEFAULT_MAX_ITERS: usize = 200;

/// Exclusive upper bound accepted for the iteration cap.
pub const MAX_ITERS_LIMIT: usize = 1000;

/// Configuration for the Lloyd k-means driver
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansConfig {
    /// Number of clusters
    pub k: usize,

    /// Maximum number of completed update rounds
    pub max_iters: usize,

    /// Convergence tolerance. The run stops once no centroid coordinate
    /// moved by `tol` or more. Set to a negative value to always run
    /// `max_iters` rounds.
    pub tol: f64,

    /// Assign points to centroids on the rayon thread pool.
    /// Results are identical to the serial path.
    pub parallel: bool,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            k: 2,
            max_iters: DEFAULT_MAX_ITERS,
            tol: EPSILON,
            parallel: true,
        }
    }
}

impl KMeansConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the maximum number of iterations
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Set the convergence tolerance
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Enable or disable parallel assignment
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
