//! Selector-based dispatch of named tools.
//!
//! The host binary bundles several independent entry points behind one
//! executable. Rather than an enum with per-variant behavior, tools live
//! in an explicit registry: a map from selector string to a plain function
//! taking the residual command-line arguments. The registry is populated
//! once at startup and consulted exactly once per run.

use std::collections::BTreeMap;

/// Entry point of a named tool. Receives the arguments remaining after
/// the selector was consumed.
pub type ToolFn = fn(&[String]) -> anyhow::Result<()>;

/// Dispatch errors.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown tool '{selector}' (known tools: {})", .known.join(", "))]
    UnknownTool {
        selector: String,
        known: Vec<&'static str>,
    },
}

/// Maps tool selectors to their entry points.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<&'static str, ToolFn>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under `name`. Re-registering a name replaces the
    /// earlier entry.
    pub fn register(&mut self, name: &'static str, entry: ToolFn) -> &mut Self {
        self.tools.insert(name, entry);
        self
    }

    /// Registered selectors, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tools.keys().copied()
    }

    /// Look up `selector` and invoke its entry point with `args`.
    pub fn dispatch(&self, selector: &str, args: &[String]) -> anyhow::Result<()> {
        let Some(entry) = self.tools.get(selector) else {
            return Err(RegistryError::UnknownTool {
                selector: selector.to_string(),
                known: self.names().collect(),
            }
            .into());
        };
        tracing::debug!(tool = selector, args = args.len(), "dispatching");
        entry(args)
    }
}
