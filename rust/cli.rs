use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Japanese public holidays computed from a rule table.
#[derive(Parser)]
#[command(name = "jp-holidays", version, about = "Japanese public holiday calendar")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Load a JSON rule table instead of the built-in one.
    #[arg(long, global = true)]
    pub rules: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the holiday title of a date, or `-` if it is not a holiday.
    Get {
        /// Date as YYYY-MM-DD.
        date: String,
    },
    /// List the holidays of a year.
    Year {
        year: i32,
        /// Print the holiday map as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the holidays between two dates, both inclusive.
    Between {
        start: NaiveDate,
        end: NaiveDate,
    },
    /// List the loaded rules in table order.
    Rules {
        /// Print the rule table as JSON.
        #[arg(long)]
        json: bool,
    },
}
