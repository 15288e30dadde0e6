//! Target identifiers, the built-in target list, and random selection.
mod defaults;
mod loader;
mod selector;

#[cfg(test)]
mod tests;

use std::fmt;
use std::sync::Arc;

pub use defaults::DEFAULT_TARGETS;
pub use loader::{default_targets, parse_targets, read_targets_file, resolve_targets};
pub use selector::select_targets;

/// A single endpoint to request. Cloning shares the underlying string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Target(Arc<str>);

impl Target {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Target {
    fn from(value: &str) -> Self {
        Self(Arc::from(value))
    }
}

impl From<String> for Target {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl AsRef<str> for Target {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
