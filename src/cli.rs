//! Command-line surface of the termwrap binary.
//!
//! Lives in the library so xtask can generate man pages from the same
//! definitions the binary parses with.

use clap::{Parser, Subcommand};

/// Line-wrapping terminal output for build tools.
///
/// Everything after the tool selector is handed to the selected tool
/// untouched; each tool parses its own options.
#[derive(Debug, Parser)]
#[command(name = "termwrap", about, version = crate::version_string())]
pub struct Cli {
    #[command(subcommand)]
    invocation: Invocation,
}

/// The tool invocation, captured verbatim.
///
/// An external subcommand makes clap stop parsing at the selector, so
/// flags like `--help` in the residual arguments reach the tool's own
/// parser instead of being claimed here.
#[derive(Debug, Subcommand)]
enum Invocation {
    #[command(external_subcommand)]
    Tool(Vec<String>),
}

impl Cli {
    /// Tool selector (use `tools` to list what is available).
    pub fn tool(&self) -> &str {
        let Invocation::Tool(argv) = &self.invocation;
        &argv[0]
    }

    /// Arguments passed through to the selected tool.
    pub fn args(&self) -> &[String] {
        let Invocation::Tool(argv) = &self.invocation;
        &argv[1..]
    }
}
