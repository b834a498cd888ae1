//! Tool entry points bundled into the termwrap binary.

pub mod tools;
pub mod wrap;

use termwrap::registry::ToolRegistry;

/// Build the registry of bundled tools. Called once at startup.
pub fn builtin_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register("wrap", wrap::run);
    registry.register("tools", tools::run);
    registry
}
