//! CLI entry point for the road grid generator

use clap::Parser;
use roadtile::io::cli::{BatchRunner, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> roadtile::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut runner = BatchRunner::new(cli);
    runner.process()
}
