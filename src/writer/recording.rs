//! Event-recording sink for observing terminal output.
//!
//! Captures the exact operation sequence a writer stack produced, without
//! touching any real terminal. Used by the wrapping tests and handy for
//! diagnosing what a layer actually forwarded.

use std::io;

use super::TerminalWriter;

/// One recorded sink operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Literal text, exactly as passed to `append`.
    Text(String),
    /// An explicit line break.
    Newline,
    /// The success status marker.
    OkStatus,
    /// The failure status marker.
    FailStatus,
    /// Reset to normal output.
    Normal,
}

/// A [`TerminalWriter`] that records every operation instead of rendering.
///
/// The event list preserves call granularity; [`transcript`] flattens it
/// into a single string with line breaks as `"\n"` and status markers as
/// `"[ok]"`, `"[fail]"` and `"[normal]"`. Recording never fails.
///
/// [`transcript`]: RecordingWriter::transcript
#[derive(Debug, Default)]
pub struct RecordingWriter {
    events: Vec<Event>,
    discard_markers: bool,
}

impl RecordingWriter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder whose transcript leaves out status markers,
    /// keeping only the visible text and line breaks.
    pub fn discarding_markers() -> Self {
        Self {
            discard_markers: true,
            ..Self::default()
        }
    }

    /// The recorded operations, in call order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Flatten the recording into one string.
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for event in &self.events {
            match event {
                Event::Text(text) => out.push_str(text),
                Event::Newline => out.push('\n'),
                Event::OkStatus if !self.discard_markers => out.push_str("[ok]"),
                Event::FailStatus if !self.discard_markers => out.push_str("[fail]"),
                Event::Normal if !self.discard_markers => out.push_str("[normal]"),
                Event::OkStatus | Event::FailStatus | Event::Normal => {}
            }
        }
        out
    }
}

impl TerminalWriter for RecordingWriter {
    fn append(&mut self, text: &str) -> io::Result<&mut Self> {
        self.events.push(Event::Text(text.to_string()));
        Ok(self)
    }

    fn newline(&mut self) -> io::Result<&mut Self> {
        self.events.push(Event::Newline);
        Ok(self)
    }

    fn ok_status(&mut self) -> io::Result<&mut Self> {
        self.events.push(Event::OkStatus);
        Ok(self)
    }

    fn fail_status(&mut self) -> io::Result<&mut Self> {
        self.events.push(Event::FailStatus);
        Ok(self)
    }

    fn normal(&mut self) -> io::Result<&mut Self> {
        self.events.push(Event::Normal);
        Ok(self)
    }
}
