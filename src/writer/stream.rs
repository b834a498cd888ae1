//! Plain-text transport onto any byte sink.

use std::io::{self, Write};

use super::TerminalWriter;

/// A [`TerminalWriter`] forwarding to an [`io::Write`].
///
/// Text and line breaks become bytes; status markers are accepted and
/// dropped, since a plain transport has no styling to offer. Failures from
/// the underlying writer propagate unchanged.
#[derive(Debug)]
pub struct StreamWriter<W: Write> {
    inner: W,
}

impl<W: Write> StreamWriter<W> {
    /// Wrap a byte sink.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Consume the transport and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> TerminalWriter for StreamWriter<W> {
    fn append(&mut self, text: &str) -> io::Result<&mut Self> {
        self.inner.write_all(text.as_bytes())?;
        Ok(self)
    }

    fn newline(&mut self) -> io::Result<&mut Self> {
        self.inner.write_all(b"\n")?;
        Ok(self)
    }

    fn ok_status(&mut self) -> io::Result<&mut Self> {
        Ok(self)
    }

    fn fail_status(&mut self) -> io::Result<&mut Self> {
        Ok(self)
    }

    fn normal(&mut self) -> io::Result<&mut Self> {
        Ok(self)
    }
}
