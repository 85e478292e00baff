//! roster-cli library
//!
//! Command definitions and the runner that executes them against a roster
//! store, exported for the `roster` binary and for tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod output;
pub mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use output::{CommandOutcome, CommandOutput};
pub use runner::Runner;
