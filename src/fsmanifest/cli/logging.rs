use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace,hyper=debug,reqwest=debug",
    }
}

/// Logs go to stderr so `--json` output on stdout stays machine readable.
/// `RUST_LOG` takes precedence over `-v` when set.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .try_init();

    debug!("fsmanifest started with verbosity level: {}", verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
