//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
mod parsers;
mod types;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use cli::TrafficArgs;
pub use types::PositiveUsize;

pub(crate) use defaults::{DEFAULT_CONFIG_FILES, DEFAULT_USER_AGENT};
pub(crate) use parsers::parse_duration_arg;
