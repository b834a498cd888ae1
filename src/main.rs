//! termwrap binary: parse the selector, dispatch through the registry.

mod commands;

use anyhow::Result;
use clap::Parser;

use termwrap::cli::Cli;

#[cfg(not(tarpaulin_include))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    // RUST_LOG controls verbosity; default to silence so tool output on
    // stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    commands::builtin_registry().dispatch(cli.tool(), cli.args())
}
