//! The `tools` tool: list the selectors the binary knows about.

use anyhow::Result;

/// Print one registered selector per line.
#[cfg(not(tarpaulin_include))]
pub fn run(_args: &[String]) -> Result<()> {
    for name in super::builtin_registry().names() {
        println!("{name}");
    }
    Ok(())
}
