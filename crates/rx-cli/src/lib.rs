//! `rx` - command-line host for the admin and customer sessions.
//!
//! Exposes the pieces of the binary so they can be tested without a process.

pub mod cli;
pub mod commands;
pub mod error;
pub mod form;
pub mod logger;
pub mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use runner::run;
