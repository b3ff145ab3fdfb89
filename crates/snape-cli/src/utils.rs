use std::io;
use tracing::Level;

/// Route progress messages to stdout when `--verbose` is given. Without it no
/// subscriber is installed and nothing is printed.
pub fn init_logging(verbose: bool) {
    if !verbose {
        return;
    }

    let _ = tracing_subscriber::fmt()
        .with_writer(io::stdout)
        .with_max_level(Level::INFO)
        .without_time()
        .with_target(false)
        .with_level(false)
        .try_init();
}
