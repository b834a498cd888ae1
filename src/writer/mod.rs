//! Terminal output sinks and the capability set they share.
//!
//! Every consumer of build-tool output implements [`TerminalWriter`]: five
//! operations covering literal text, explicit line breaks, and the three
//! status markers. Wrappers such as [`LineWrapper`] implement the same
//! trait over another sink, so layers compose without the caller knowing
//! how deep the stack is.

mod recording;
mod stream;
mod wrap;

pub use recording::{Event, RecordingWriter};
pub use stream::StreamWriter;
pub use wrap::{LineWrapper, WrapConfigError};

use std::io;

/// The capability set of a terminal output sink.
///
/// Each operation returns the writer itself so calls chain fluently:
///
/// ```
/// use termwrap::{RecordingWriter, TerminalWriter};
///
/// let mut out = RecordingWriter::new();
/// out.ok_status()?.append("done")?.newline()?;
/// assert_eq!(out.transcript(), "[ok]done\n");
/// # std::io::Result::Ok(())
/// ```
///
/// Any operation may fail with the underlying transport's error; wrappers
/// must propagate such failures unchanged, never swallow them.
pub trait TerminalWriter {
    /// Write literal text. The text is taken as-is; implementations decide
    /// whether embedded line terminators get special treatment.
    fn append(&mut self, text: &str) -> io::Result<&mut Self>;

    /// Emit an explicit line break.
    fn newline(&mut self) -> io::Result<&mut Self>;

    /// Emit the success status marker.
    fn ok_status(&mut self) -> io::Result<&mut Self>;

    /// Emit the failure status marker.
    fn fail_status(&mut self) -> io::Result<&mut Self>;

    /// Reset to normal output, ending any status highlighting.
    fn normal(&mut self) -> io::Result<&mut Self>;
}
