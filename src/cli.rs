//! Command line front end: `kmeans <k> [<max_iters>] <file>`.
//!
//! Every failure is reported as a single line on standard output and exit
//! code 1. Only invalid iteration caps and invalid cluster counts get a
//! specific message; all other failures share a generic one.

use crate::config::{KMeansConfig, DEFAULT_MAX_ITERS};
use crate::dataset::{load_points, read_points, resolve_path, STDIN_PATH};
use crate::error::{DataError, KMeansError, ValidationError};
use crate::format::write_centroids;
use crate::kmeans::KMeans;
use crate::validate::{validate_k, validate_max_iters};
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use thiserror::Error;

pub const INVALID_MAX_ITERS_MESSAGE: &str = "Invalid maximum iteration!";
pub const INVALID_K_MESSAGE: &str = "Invalid number of clusters!";
pub const GENERIC_ERROR_MESSAGE: &str = "An Error Has Occurred";

/// Failures of a command line run
#[derive(Error, Debug)]
pub enum CliError {
    #[error("expected <k> [<max_iters>] <file>, got {0} arguments")]
    Usage(usize),

    #[error("invalid maximum iteration: {0}")]
    InvalidMaxIters(ValidationError),

    #[error("no such file: {0}")]
    FileNotFound(String),

    #[error("invalid number of clusters: {0}")]
    InvalidClusterCount(ValidationError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    KMeans(#[from] KMeansError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// The fixed line printed for this failure
    pub fn message(&self) -> &'static str {
        match self {
            CliError::InvalidMaxIters(_) => INVALID_MAX_ITERS_MESSAGE,
            CliError::InvalidClusterCount(_) => INVALID_K_MESSAGE,
            _ => GENERIC_ERROR_MESSAGE,
        }
    }
}

/// Positional arguments as given, before validation.
///
/// The file name stays an `OsString` so paths that are not valid UTF-8
/// still resolve. Numeric arguments are converted lossily; a replaced byte
/// never parses as a number, so they fail validation with their own
/// message.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub k: String,
    pub max_iters: Option<String>,
    pub file: OsString,
}

impl Args {
    /// Split the user arguments (program name excluded).
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let lossy = |arg: OsString| arg.to_string_lossy().into_owned();
        match args.len() {
            2 => {
                let file = args.remove(1);
                let k = lossy(args.remove(0));
                Ok(Self {
                    k,
                    max_iters: None,
                    file,
                })
            }
            3 => {
                let file = args.remove(2);
                let max_iters = lossy(args.remove(1));
                let k = lossy(args.remove(0));
                Ok(Self {
                    k,
                    max_iters: Some(max_iters),
                    file,
                })
            }
            n => Err(CliError::Usage(n)),
        }
    }
}

/// Run a full clustering job and write the centroids to `out`.
///
/// The iteration cap is checked before the input is touched, and the
/// cluster count only after the points are loaded.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), CliError> {
    let max_iters = match &args.max_iters {
        Some(raw) => validate_max_iters(raw).map_err(CliError::InvalidMaxIters)?,
        None => DEFAULT_MAX_ITERS,
    };

    let points = if args.file.as_os_str() == OsStr::new(STDIN_PATH) {
        read_points(io::stdin().lock())?
    } else {
        let path = resolve_path(&args.file)
            .ok_or_else(|| CliError::FileNotFound(args.file.to_string_lossy().into_owned()))?;
        load_points(&path)?
    };

    let k = validate_k(&args.k, points.nrows()).map_err(CliError::InvalidClusterCount)?;

    let config = KMeansConfig::new(k).with_max_iters(max_iters);
    let mut kmeans = KMeans::with_config(config);
    kmeans.train(&points.view())?;

    let centroids = kmeans.centroids().ok_or(KMeansError::NotFitted)?;
    write_centroids(out, &centroids.view())?;
    out.flush()?;
    Ok(())
}

/// Parse, run and report. Returns the process exit code.
pub fn main_with_args<I, S, W>(args: I, out: &mut W) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    W: Write,
{
    let result = Args::parse(args).and_then(|args| {
        log::debug!("Arguments: {:?}", args);
        run(&args, out)
    });

    match result {
        Ok(()) => 0,
        Err(err) => {
            log::error!("{}", err);
            // Nothing else can be reported if stdout itself is gone
            let _ = writeln!(out, "{}", err.message());
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_max_iters() {
        let args = Args::parse(["3", "input.txt"]).unwrap();
        assert_eq!(
            args,
            Args {
                k: "3".to_string(),
                max_iters: None,
                file: OsString::from("input.txt"),
            }
        );
    }

    #[test]
    fn test_args_with_max_iters() {
        let args = Args::parse(["3", "100", "input.txt"]).unwrap();
        assert_eq!(args.k, "3");
        assert_eq!(args.max_iters.as_deref(), Some("100"));
        assert_eq!(args.file, "input.txt");
    }

    #[test]
    fn test_args_wrong_count() {
        assert!(matches!(Args::parse(["3"]), Err(CliError::Usage(1))));
        assert!(matches!(
            Args::parse(["3", "100", "input.txt", "extra"]),
            Err(CliError::Usage(4))
        ));
        assert!(matches!(
            Args::parse(Vec::<String>::new()),
            Err(CliError::Usage(0))
        ));
    }

    #[test]
    fn test_error_messages() {
        let bad = ValidationError::NotANumber("x".to_string());

        assert_eq!(
            CliError::InvalidMaxIters(bad.clone()).message(),
            "Invalid maximum iteration!"
        );
        assert_eq!(
            CliError::InvalidClusterCount(bad).message(),
            "Invalid number of clusters!"
        );
        assert_eq!(
            CliError::FileNotFound("x".to_string()).message(),
            "An Error Has Occurred"
        );
        assert_eq!(
            CliError::Data(DataError::Empty).message(),
            "An Error Has Occurred"
        );
        assert_eq!(CliError::Usage(0).message(), "An Error Has Occurred");
    }

    #[test]
    fn test_invalid_max_iters_checked_before_file() {
        let args = Args::parse(["2", "abc", "/definitely/not/a/file"]).unwrap();
        let mut out = Vec::new();

        let err = run(&args, &mut out).unwrap_err();
        assert!(matches!(err, CliError::InvalidMaxIters(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_file_is_generic_error() {
        let args = Args::parse(["2", "/definitely/not/a/file"]).unwrap();
        let mut out = Vec::new();

        let err = run(&args, &mut out).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
        assert_eq!(err.message(), GENERIC_ERROR_MESSAGE);
    }

    #[cfg(unix)]
    #[test]
    fn test_args_keep_non_utf8_file_name() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"\xff\xfe");
        let args = Args::parse([OsStr::new("2"), raw]).unwrap();

        assert_eq!(args.k, "2");
        assert_eq!(args.file.as_os_str(), raw);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_numeric_argument_fails_validation() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"\xff");
        let args = Args::parse([OsStr::new("2"), raw, OsStr::new("input.txt")]).unwrap();
        let err = run(&args, &mut Vec::new()).unwrap_err();

        assert_eq!(err.message(), INVALID_MAX_ITERS_MESSAGE);
    }
}
