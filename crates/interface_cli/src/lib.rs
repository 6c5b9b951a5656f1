//! Estimate Command-Line Interface
//!
//! Quotes annual premiums from the terminal, either against PostgreSQL or
//! against the built-in rate tables (`--offline`).
//!
//! # Modules
//!
//! - `cli`: argument definitions
//! - `config`: environment configuration
//! - `commands`: subcommand implementations
//! - `output`: table and JSON rendering
//! - `error`: CLI error type

pub mod cli;
pub mod config;
pub mod commands;
pub mod output;
pub mod error;

pub use cli::{Cli, Commands, OutputFormat};
pub use config::EstimateConfig;
pub use error::CliError;
