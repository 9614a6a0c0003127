//! Unixtools CLI Library
//!
//! This crate provides the command-line interface for unixtools. It parses
//! the sub-command and its flags, gathers input from a prompt or a file and
//! prints the result of the matching core operation.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`arguments`]: Turning parsed arguments into a [`arguments::Request`]
//! - [`input`]: Prompting for text or reading it from a file
//! - [`dispatch`]: Running a request and writing its output
//!
//! # Examples
//!
//! ```bash
//! # Second and third comma separated fields of a typed line
//! unixtools cut -d , -F 2-3
//!
//! # Count a typed line
//! unixtools wc
//!
//! # Lines 10 through 20 of a file
//! unixtools extract -f notes.txt -i 10 -o 20
//! ```

pub mod arguments;
pub mod cli_args;
pub mod dispatch;
pub mod input;
