//! Cluster comma-separated points with Lloyd's k-means
//!
//! Usage: `kmeans <k> [<max_iters>] <file>`
//!
//! Centroids are printed to stdout, one per line. Diagnostics go to stderr
//! and are enabled through `KMEANS_LOG` (for example `KMEANS_LOG=debug`).

use env_logger::Env;
use std::io;

fn main() {
    let env = Env::default().filter_or("KMEANS_LOG", "off");
    env_logger::init_from_env(env);

    let args = std::env::args_os().skip(1);
    let code = lloyd_kmeans::cli::main_with_args(args, &mut io::stdout().lock());
    std::process::exit(code);
}
