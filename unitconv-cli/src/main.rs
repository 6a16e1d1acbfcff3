//! unitconv - interactive terminal unit converter
//!
//! Reads one request per line from stdin ("5 km to miles", "3 lb in kg")
//! and answers on stdout until `exit` or end of input. Diagnostics go to
//! stderr through `tracing`, filtered by `RUST_LOG`.

use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use unitconv::{Session, CATALOG};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when `RUST_LOG` is unset or invalid
const DEFAULT_LOG_FILTER: &str = "warn";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // stdout carries the conversation only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    info!(version = VERSION, units = CATALOG.len(), "unitconv started");
    info!(
        stdin_terminal = io::stdin().is_terminal(),
        stdout_terminal = io::stdout().is_terminal(),
        "terminal"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();

    match Session::new().run(stdin.lock(), stdout.lock()) {
        Ok(stats) => {
            info!(
                requests = stats.requests,
                conversions = stats.conversions,
                errors = stats.errors,
                "session finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "terminal I/O failed");
            ExitCode::FAILURE
        }
    }
}
