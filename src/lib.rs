//! termwrap - line-wrapping terminal output for build tools.
//!
//! A build tool that renders progress on a fixed-width terminal has to
//! reflow its own output: once a line reaches the terminal width, the
//! remainder must continue on the next line, with a continuation character
//! marking the cut. This crate provides that layer:
//!
//! - [`TerminalWriter`]: the capability set every output sink supports
//!   (text, line breaks, ok/fail/normal status markers)
//! - [`LineWrapper`]: a decorator adding column tracking and lazy wrapping
//!   on top of any sink
//! - [`StreamWriter`]: a plain-text transport onto any [`std::io::Write`]
//! - [`RecordingWriter`]: an event-recording sink for tests and diagnostics
//! - [`registry::ToolRegistry`]: the selector-to-entry-point dispatch used
//!   by the host binary
//!
//! The wrapper never renders escape sequences and never measures display
//! width beyond one column per character; those concerns belong to the
//! sink behind it.

pub mod cli;
pub mod registry;
pub mod writer;

pub use writer::{LineWrapper, RecordingWriter, StreamWriter, TerminalWriter, WrapConfigError};

/// Build a version string for the CLI.
///
/// Dev builds carry the git commit hash so bug reports can be pinned to a
/// revision; official builds (the `release` feature) show only the version
/// and build date.
pub fn version_string() -> String {
    #[cfg(not(feature = "release"))]
    {
        format!(
            "{} ({} {})",
            env!("CARGO_PKG_VERSION"),
            env!("VERGEN_GIT_SHA"),
            env!("TERMWRAP_BUILD_DATE")
        )
    }
    #[cfg(feature = "release")]
    {
        format!(
            "{} ({})",
            env!("CARGO_PKG_VERSION"),
            env!("TERMWRAP_BUILD_DATE")
        )
    }
}
