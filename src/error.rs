use thiserror::Error;

/// Error types for the k-means engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KMeansError {
    /// The number of clusters k is invalid (must be > 0)
    #[error("Invalid k value: {0}")]
    InvalidK(String),

    /// Not enough data points to seed the requested number of clusters
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// The iteration cap is invalid (must be > 0)
    #[error("Invalid max_iters value: {0}")]
    InvalidMaxIters(String),

    /// Model has not been fitted yet
    #[error("Model has not been fitted. Call train() or fit() first.")]
    NotFitted,

    /// Dimension mismatch between data and model
    #[error("Dimension mismatch: {0}")]
    InvalidDimensions(String),
}

/// Errors raised while turning raw text into a point table
#[derive(Error, Debug)]
pub enum DataError {
    #[error("no points found in input")]
    Empty,

    #[error("line {line}: cannot parse {value:?} as a number")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: expected {expected} coordinates, found {found}")]
    DimensionMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid point table: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the argument predicates
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0:?} is not a number")]
    NotANumber(String),

    #[error("{0} is not an integer")]
    NotIntegral(f64),

    #[error("{value} is outside the open interval ({low}, {high})")]
    OutOfRange { value: f64, low: f64, high: f64 },
}
