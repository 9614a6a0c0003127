//! Defaults and path utilities for unixtools.
//!
//! There is no configuration file; this module holds the values the CLI
//! falls back to and the fixed user-facing text it prints.

/// Default field delimiter for `cut` (horizontal tab)
pub const DEFAULT_DELIMITER: &str = "\t";

/// Prompt printed before reading text from standard input
pub const INPUT_PROMPT: &str = "Enter text: ";

/// Printed when `cut` is invoked without `--fields`
pub const MISSING_FIELDS_MESSAGE: &str = "Please specify fields to cut.";

/// Printed when `extract` is missing any of its required flags
pub const MISSING_EXTRACT_ARGUMENTS_MESSAGE: &str =
    "Please specify file path, input line number, and output line number.";

/// Expands a leading `~` in a user supplied path.
///
/// # Examples
///
/// ```
/// use unixtools_core::config::expand_path;
///
/// assert_eq!(expand_path("/tmp/input.txt"), "/tmp/input.txt");
/// ```
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}
