//! Integration test harness.

mod dispatch_test;
mod wrap_cli_test;
mod writer_test;
