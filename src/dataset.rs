//! Loading point tables from comma-separated text.
//!
//! Each line holds one point, coordinates separated by commas. The
//! dimension is taken from the last line and every other line must match
//! it.

use crate::error::DataError;
use crate::validate::parse_decimal;
use ndarray::Array2;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// File argument that selects standard input instead of a file
pub const STDIN_PATH: &str = "-";

/// Resolve a user-supplied file name against the current directory.
///
/// The name is tried as given first, then with `.txt` appended. Returns
/// `None` when neither names a regular file.
pub fn resolve_path<S: AsRef<OsStr>>(file_name: S) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    resolve_path_in(&cwd, file_name)
}

/// Same as [`resolve_path`] with an explicit base directory
pub fn resolve_path_in<S: AsRef<OsStr>>(base: &Path, file_name: S) -> Option<PathBuf> {
    let path = base.join(file_name.as_ref());
    if path.is_file() {
        return Some(path);
    }

    let mut with_suffix = path.into_os_string();
    with_suffix.push(".txt");
    let path = PathBuf::from(with_suffix);
    path.is_file().then_some(path)
}

/// Parse points from any buffered reader.
pub fn read_points<R: BufRead>(reader: R) -> Result<Array2<f64>, DataError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let row = line
            .split(',')
            .map(|field| parse_coordinate(field, idx + 1))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    let d = rows.last().map(Vec::len).ok_or(DataError::Empty)?;

    let mut flat = Vec::with_capacity(rows.len() * d);
    for (idx, row) in rows.iter().enumerate() {
        if row.len() != d {
            return Err(DataError::DimensionMismatch {
                line: idx + 1,
                expected: d,
                found: row.len(),
            });
        }
        flat.extend_from_slice(row);
    }

    let n = rows.len();
    Ok(Array2::from_shape_vec((n, d), flat)?)
}

/// Load points from a file on disk.
pub fn load_points(path: &Path) -> Result<Array2<f64>, DataError> {
    let file = File::open(path)?;
    let points = read_points(BufReader::new(file))?;

    log::info!(
        "Loaded {} points x {} coordinates from {}",
        points.nrows(),
        points.ncols(),
        path.display()
    );

    Ok(points)
}

fn parse_coordinate(field: &str, line: usize) -> Result<f64, DataError> {
    parse_decimal(field).ok_or_else(|| DataError::InvalidNumber {
        line,
        value: field.to_string(),
    })
}
