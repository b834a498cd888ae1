//! Tests for the writer stack through the public API

use termwrap::{LineWrapper, RecordingWriter, StreamWriter, TerminalWriter};

#[test]
fn wrapper_composes_over_a_byte_transport() {
    let mut sink = StreamWriter::new(Vec::new());
    {
        let mut wrapper = LineWrapper::new(&mut sink, 5, '+').unwrap();
        wrapper
            .ok_status()
            .unwrap()
            .append("abcdefghij")
            .unwrap()
            .normal()
            .unwrap()
            .newline()
            .unwrap();
    }
    // The plain transport drops the markers and keeps the wrapped text.
    assert_eq!(sink.into_inner(), b"abcd+\nefgh+\nij\n");
}

#[test]
fn wrapping_a_progress_stream_keeps_every_line_within_width() {
    let lines = [
        "Compiling //src/base:base (143 actions running)",
        "Linking //src/tools:frontend",
        "PASS //src/base:base_test",
    ];
    let width = 20;

    let mut out = RecordingWriter::new();
    let mut wrapper = LineWrapper::new(&mut out, width, '\\').unwrap();
    for line in lines {
        wrapper.append(line).unwrap().newline().unwrap();
    }

    let transcript = out.transcript();
    for visible in transcript.split('\n') {
        assert!(visible.chars().count() <= width, "{visible:?}");
    }
    // Undoing the wrap insertions restores the original lines.
    assert_eq!(transcript.replace("\\\n", ""), lines.join("\n") + "\n");
}

#[test]
fn status_markers_survive_the_full_stack_in_order() {
    let mut out = RecordingWriter::new();
    let mut wrapper = LineWrapper::new(&mut out, 80, '\\').unwrap();
    wrapper
        .fail_status()
        .unwrap()
        .append("FAIL")
        .unwrap()
        .normal()
        .unwrap()
        .append(" //src:broken_test")
        .unwrap()
        .newline()
        .unwrap();
    assert_eq!(out.transcript(), "[fail]FAIL[normal] //src:broken_test\n");
}
