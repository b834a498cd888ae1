//! The `wrap` tool: reflow stdin onto stdout at a fixed width.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;

use termwrap::{LineWrapper, StreamWriter, TerminalWriter};

/// Reflow text to a fixed terminal width.
#[derive(Debug, Parser)]
#[command(name = "wrap", about)]
struct WrapArgs {
    /// Total columns per line, including the continuation column.
    #[arg(long, default_value_t = 80)]
    width: usize,

    /// Character marking a wrapped line.
    #[arg(long, default_value_t = '\\')]
    marker: char,
}

/// Run the tool with the residual arguments from the dispatcher.
#[cfg(not(tarpaulin_include))]
pub fn run(args: &[String]) -> Result<()> {
    let args = parse_args(args);
    tracing::debug!(width = args.width, marker = %args.marker, "wrapping stdin");

    let mut text = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;

    let stdout = io::stdout().lock();
    let mut sink = StreamWriter::new(stdout);
    let mut wrapper =
        LineWrapper::new(&mut sink, args.width, args.marker).context("Invalid wrap settings")?;
    wrapper.append(&text)?;
    sink.flush()?;
    Ok(())
}

/// Parse the residual arguments, exiting with usage on bad input the same
/// way a standalone binary would.
#[cfg(not(tarpaulin_include))]
fn parse_args(args: &[String]) -> WrapArgs {
    WrapArgs::try_parse_from(std::iter::once("wrap".to_string()).chain(args.iter().cloned()))
        .unwrap_or_else(|e| e.exit())
}
