//! CLI entry point for the street map generator

use clap::Parser;
use streetmap::io::cli::{Cli, MapSession};
use tracing_subscriber::EnvFilter;

fn main() -> streetmap::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    let mut session = MapSession::new(cli)?;
    session.process()
}

/// Log to stderr, honoring `RUST_LOG` unless `-v` was given
fn init_logging(cli: &Cli) {
    let filter = if cli.verbose > 0 {
        EnvFilter::new(cli.log_directive())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_directive()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
