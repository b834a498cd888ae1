//! Line-wrapping decorator over a terminal sink.
//!
//! Tracks the column position of the current line and, once a character no
//! longer fits, emits a continuation character plus a line break before
//! placing it. Wrapping is lazy: a line that is exactly full is left alone
//! until more content actually arrives, so output ending on a line
//! boundary carries no trailing marker.

use std::io;

use super::TerminalWriter;

/// Invalid construction parameters for a [`LineWrapper`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WrapConfigError {
    /// The width must leave room for at least one content column plus the
    /// reserved continuation column.
    #[error("terminal width {width} is too small to wrap (minimum is 2)")]
    WidthTooSmall { width: usize },
}

/// A [`TerminalWriter`] that reflows text to a fixed width.
///
/// Wraps a borrowed sink; the caller keeps ownership of the sink and is
/// responsible for its lifetime. `width` counts total displayable columns
/// per line including the reserved continuation column, so each line holds
/// at most `width - 1` content characters. Status markers pass through
/// untouched and never affect the column position.
///
/// One character is one column; display width of wide or combining
/// characters is the sink's problem, not this layer's.
#[derive(Debug)]
pub struct LineWrapper<'a, W: TerminalWriter> {
    sink: &'a mut W,
    /// Total columns per line, including the continuation column.
    width: usize,
    /// Character written into the reserved column at a wrap point.
    continuation: char,
    /// Content characters on the current line since the last break.
    /// Always in `0..width`.
    column: usize,
}

impl<'a, W: TerminalWriter> LineWrapper<'a, W> {
    /// Create a wrapper around `sink` reflowing at `width` columns.
    ///
    /// `width` must be at least 2: one content column plus the reserved
    /// continuation column. Smaller widths are rejected, not clamped.
    pub fn new(
        sink: &'a mut W,
        width: usize,
        continuation: char,
    ) -> Result<Self, WrapConfigError> {
        if width < 2 {
            return Err(WrapConfigError::WidthTooSmall { width });
        }
        tracing::trace!(width, continuation = %continuation, "created line wrapper");
        Ok(Self {
            sink,
            width,
            continuation,
            column: 0,
        })
    }

    /// Columns currently occupied on the visible line.
    pub fn column(&self) -> usize {
        self.column
    }

    fn put_char(&mut self, c: char) -> io::Result<()> {
        let mut buf = [0u8; 4];
        self.sink.append(c.encode_utf8(&mut buf))?;
        Ok(())
    }
}

impl<W: TerminalWriter> TerminalWriter for LineWrapper<'_, W> {
    /// Write `text`, breaking lines as needed.
    ///
    /// Embedded `'\n'` characters become line breaks on the sink and reset
    /// the column; they consume no column themselves. Any other character
    /// that would land in the reserved column first forces the
    /// continuation character and a break. A sink failure aborts the call
    /// mid-text; whatever was already forwarded stays forwarded.
    fn append(&mut self, text: &str) -> io::Result<&mut Self> {
        for c in text.chars() {
            if c == '\n' {
                self.sink.newline()?;
                self.column = 0;
                continue;
            }
            if self.column == self.width - 1 {
                // Line is full and another character must be placed: wrap
                // before it, not when the line filled up.
                self.put_char(self.continuation)?;
                self.sink.newline()?;
                self.column = 0;
            }
            self.put_char(c)?;
            self.column += 1;
        }
        Ok(self)
    }

    fn newline(&mut self) -> io::Result<&mut Self> {
        self.sink.newline()?;
        self.column = 0;
        Ok(self)
    }

    fn ok_status(&mut self) -> io::Result<&mut Self> {
        self.sink.ok_status()?;
        Ok(self)
    }

    fn fail_status(&mut self) -> io::Result<&mut Self> {
        self.sink.fail_status()?;
        Ok(self)
    }

    fn normal(&mut self) -> io::Result<&mut Self> {
        self.sink.normal()?;
        Ok(self)
    }
}
