//! # lloyd-kmeans
//!
//! Deterministic Lloyd's k-means clustering in Rust, compatible with
//! ndarray.
//!
//! ## Features
//!
//! - **Deterministic seeding**: the first `k` points, in input order, are the
//!   initial centroids. Identical inputs give bit-identical centroids.
//! - **Parallel assignment**: nearest-centroid search runs on rayon without
//!   changing results
//! - **ndarray compatible**: points and centroids are `Array2<f64>`
//! - **Command line tool**: `kmeans <k> [<max_iters>] <file>` reads
//!   comma-separated points and prints centroids with four decimals
//!
//! ## Example
//!
//! ```rust
//! use lloyd_kmeans::{KMeans, KMeansConfig};
//! use ndarray::array;
//!
//! let data = array![[0.0, 0.0], [0.0, 2.0], [10.0, 0.0], [10.0, 2.0]];
//!
//! let mut kmeans = KMeans::with_config(KMeansConfig::new(2).with_max_iters(200));
//! kmeans.train(&data.view()).unwrap();
//!
//! let centroids = kmeans.centroids().unwrap();
//! assert_eq!(centroids, &array![[5.0, 0.0], [5.0, 2.0]]);
//! assert!(kmeans.converged());
//! ```
//!
//! ## Loading and printing
//!
//! ```rust
//! use lloyd_kmeans::{format_centroids, read_points, KMeans};
//! use std::io::Cursor;
//!
//! let points = read_points(Cursor::new("1,1\n1,2\n8,8\n9,8\n")).unwrap();
//!
//! let mut kmeans = KMeans::new(2);
//! kmeans.train(&points.view()).unwrap();
//!
//! let text = format_centroids(&kmeans.centroids().unwrap().view());
//! assert_eq!(text.lines().count(), 2);
//! ```

pub mod algorithm;
pub mod cli;
mod config;
pub mod dataset;
pub mod distance;
mod error;
mod format;
mod kmeans;
pub mod validate;

pub use algorithm::{lloyd, KMeansResult};
pub use config::{KMeansConfig, DEFAULT_MAX_ITERS, EPSILON, MAX_ITERS_LIMIT};
pub use dataset::{load_points, read_points, resolve_path};
pub use error::{DataError, KMeansError, ValidationError};
pub use format::{format_centroids, write_centroids, PRECISION};
pub use kmeans::KMeans;
