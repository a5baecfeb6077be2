//! Binary entry point for the payroll tracker console.

use std::io;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use payroll_tracker::console::Session;

fn main() -> ExitCode {
    init_tracing();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    info!("payroll tracker starting");
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "session aborted on I/O error");
            ExitCode::FAILURE
        }
    }
}

/// Installs the fmt subscriber on stderr, honoring `RUST_LOG` (default `info`).
///
/// Logging goes to stderr so it never interleaves with the report on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
