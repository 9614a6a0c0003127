//! Request determination from parsed arguments.

use unixtools_core::config::{MISSING_EXTRACT_ARGUMENTS_MESSAGE, MISSING_FIELDS_MESSAGE};

use crate::cli_args::Operation;

/// A fully determined unit of work for the dispatcher.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Request {
    /// Select fields from the input text
    Cut {
        fields: Vec<String>,
        delimiter: String,
        file: Option<String>,
    },
    /// Count lines, words and characters of the input text
    Wc { file: Option<String> },
    /// Extract an inclusive line range from a file
    Extract {
        file: String,
        in_line: i64,
        out_line: i64,
    },
    /// Required flags were not given; holds the guidance to print
    MissingArguments(&'static str),
}

/// Trait for argument structures that can be turned into a [`Request`].
pub trait Provider {
    fn get_request(&self) -> Request;
}

/// Determines the request for `operation` from the individual flags.
///
/// # Examples
///
/// ```rust
/// use unixtools_cli::arguments::{determine, Request};
/// use unixtools_cli::cli_args::Operation;
///
/// let request = determine(Operation::Extract, None, "\t", &[], Some(1), Some(2));
/// assert!(matches!(request, Request::MissingArguments(_)));
/// ```
#[must_use]
pub fn determine(
    operation: Operation,
    file: Option<&str>,
    delimiter: &str,
    fields: &[String],
    in_line: Option<i64>,
    out_line: Option<i64>,
) -> Request {
    match operation {
        Operation::Cut => {
            if fields.is_empty() {
                return Request::MissingArguments(MISSING_FIELDS_MESSAGE);
            }

            Request::Cut {
                fields: fields.to_vec(),
                delimiter: delimiter.to_string(),
                file: file.map(ToString::to_string),
            }
        }
        Operation::Wc => Request::Wc {
            file: file.map(ToString::to_string),
        },
        Operation::Extract => match (file, in_line, out_line) {
            (Some(file), Some(in_line), Some(out_line)) => Request::Extract {
                file: file.to_string(),
                in_line,
                out_line,
            },
            _ => Request::MissingArguments(MISSING_EXTRACT_ARGUMENTS_MESSAGE),
        },
    }
}
