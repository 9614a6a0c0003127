//! Runs a [`Request`] against the core operations and prints the result.

use std::io::{BufRead, Write};

use itertools::Itertools;
use log::{debug, info};
use unixtools_core::config::expand_path;
use unixtools_core::count::wc;
use unixtools_core::cut::cut_text;
use unixtools_core::error::Result;
use unixtools_core::extract::extract_text_from_file;
use unixtools_core::selector::parse_selectors;

use crate::arguments::Request;
use crate::input::acquire_text;

/// Executes `request`, reading any prompted text from `reader` and writing
/// prompts and results to `writer`.
///
/// Missing arguments and the line range outcomes of `extract` are written
/// as plain output and are not errors.
///
/// # Errors
///
/// Returns an error for malformed field selectors, field indices past the
/// end of a line, unreadable input and failures writing output.
pub fn run<R: BufRead, W: Write>(request: &Request, reader: &mut R, writer: &mut W) -> Result<()> {
    match request {
        Request::MissingArguments(message) => {
            info!("Required arguments missing, printing guidance");
            writeln!(writer, "{message}")?;
        }
        Request::Cut {
            fields,
            delimiter,
            file,
        } => {
            let selectors = parse_selectors(fields.as_slice())?;
            debug!("Field selectors: {}", selectors.iter().join(","));

            let text = acquire_text(file.as_deref(), reader, writer)?;
            let result = cut_text(&text, delimiter, &selectors)?;
            writeln!(writer, "{result}")?;
        }
        Request::Wc { file } => {
            let text = acquire_text(file.as_deref(), reader, writer)?;
            writeln!(writer, "{}", wc(&text))?;
        }
        Request::Extract {
            file,
            in_line,
            out_line,
        } => {
            let path = expand_path(file);
            debug!("Extracting lines {in_line}-{out_line} from `{path}`");

            match extract_text_from_file(&path, *in_line, *out_line) {
                Ok(text) => writeln!(writer, "{text}")?,
                Err(e) if e.is_range_outcome() => writeln!(writer, "{e}")?,
                Err(e) => return Err(e),
            }
        }
    }

    Ok(())
}
