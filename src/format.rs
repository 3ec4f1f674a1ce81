use ndarray::ArrayView2;
use std::io::{self, Write};

/// Digits printed after the decimal point for every coordinate
pub const PRECISION: usize = 4;

/// Write one line per centroid, coordinates comma-separated with
/// [`PRECISION`] decimals.
///
/// The table is rendered in full and handed to the writer in a single
/// `write_all`.
pub fn write_centroids<W: Write>(out: &mut W, centroids: &ArrayView2<f64>) -> io::Result<()> {
    out.write_all(format_centroids(centroids).as_bytes())
}

/// Render centroids to a `String` in the same layout as [`write_centroids`]
pub fn format_centroids(centroids: &ArrayView2<f64>) -> String {
    let mut text = String::new();
    for centroid in centroids.outer_iter() {
        let line = centroid
            .iter()
            .map(|value| format!("{:.*}", PRECISION, value))
            .collect::<Vec<_>>()
            .join(",");
        text.push_str(&line);
        text.push('\n');
    }
    text
}
