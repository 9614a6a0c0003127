//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate.

use clap::{Parser, ValueEnum};
use unixtools_core::config::DEFAULT_DELIMITER;

use crate::arguments::{determine, Provider, Request};

/// The text operation to perform.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Select fields from delimited lines
    Cut,
    /// Count lines, words and characters
    Wc,
    /// Print an inclusive range of lines from a file
    Extract,
}

/// Command-line arguments for the unixtools CLI.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use unixtools_cli::cli_args::{Args, Operation};
///
/// let args = Args::parse_from(["unixtools", "wc"]);
/// assert_eq!(args.operation, Operation::Wc);
/// ```
#[derive(Parser, Debug)]
#[command(term_width = 0, about = "Command line text manipulation tool")]
pub struct Args {
    /// Operation to perform: cut, wc, or extract
    #[arg(value_enum)]
    pub operation: Operation,

    /// Path to the file.
    ///
    /// Required for `extract`. For `cut` and `wc` the whole file is used
    /// instead of prompting for a line of text.
    #[arg(long, short = 'f')]
    pub file: Option<String>,

    /// Delimiter character (for cut operation)
    #[arg(long, short = 'd', default_value = DEFAULT_DELIMITER)]
    pub delimiter: String,

    /// Fields to extract (for cut operation).
    ///
    /// Each value is a 1-based index (`2`), an inclusive range (`2-4`) or a
    /// comma separated list of both (`1,3-4`).
    #[arg(long, short = 'F', num_args = 1..)]
    pub fields: Vec<String>,

    /// Starting line number (for extract operation)
    #[arg(long = "in_line", short = 'i', alias = "in-line", allow_negative_numbers = true)]
    pub in_line: Option<i64>,

    /// Ending line number (for extract operation)
    #[arg(long = "out_line", short = 'o', alias = "out-line", allow_negative_numbers = true)]
    pub out_line: Option<i64>,
}

impl Provider for Args {
    fn get_request(&self) -> Request {
        determine(
            self.operation,
            self.file.as_deref(),
            &self.delimiter,
            &self.fields,
            self.in_line,
            self.out_line,
        )
    }
}
