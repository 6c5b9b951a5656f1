//! CLI argument definitions.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Estimate - insurance premium quotes from the command line
#[derive(Debug, Parser)]
#[command(name = "estimate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Use the built-in rate tables instead of the database
    #[arg(long, global = true)]
    pub offline: bool,

    /// Evaluate ages on this date instead of today (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the insurance products on offer
    Types,

    /// List the answers to "how did you hear about us"
    Sources,

    /// Quote the annual premium and refund for an applicant
    Quote(QuoteArgs),

    /// Check whether an applicant's age can be quoted
    Eligible(EligibleArgs),
}

/// Arguments for `quote`
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Insurance product code
    #[arg(short = 't', long = "type")]
    pub insurance_type: i32,

    /// Date of birth (YYYY-MM-DD)
    #[arg(short, long)]
    pub birth: NaiveDate,
}

/// Arguments for `eligible`
#[derive(Debug, Args)]
pub struct EligibleArgs {
    /// Date of birth (YYYY-MM-DD)
    #[arg(short, long)]
    pub birth: NaiveDate,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}
