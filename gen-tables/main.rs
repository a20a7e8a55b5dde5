// Cached power-of-ten table generator for fast float parsing and printing.
//
// Writes a C header with a fine table (10^0 .. 10^27) and a coarse table
// (every 28th power from 10^-330) of 64-bit significands to stdout.
//
// Flags: -d/--detail, -i/--implicit-one, -p/--powers. Log output goes to
// stderr and is controlled by RUST_LOG.

use anyhow::Context as _;
use pow10_tables::Config;
use std::io::{self, Write as _};
use tracing_subscriber::EnvFilter;

fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    setup_logging();

    let config = Config::from_args(std::env::args())?;
    tracing::info!(?config, "generating tables");

    let header = pow10_tables::generate(&config)?;
    io::stdout()
        .lock()
        .write_all(header.as_bytes())
        .context("failed to write header")?;
    Ok(())
}
