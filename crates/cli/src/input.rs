use std::fs;
use std::io::{BufRead, Write};

use log::debug;
use unixtools_core::config::{expand_path, INPUT_PROMPT};
use unixtools_core::error::{Error, Result};

/// Prompts for a single line of text and returns it without its line
/// terminator.
///
/// # Errors
///
/// Returns [`Error::EndOfInput`] if the input is exhausted before any line
/// is read, or [`Error::Stdio`] if reading or writing fails.
pub fn prompt_text<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<String> {
    write!(writer, "{INPUT_PROMPT}")?;
    writer.flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(Error::EndOfInput);
    }

    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }

    Ok(input)
}

/// Reads the whole of the file at `path` as text.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read.
pub fn read_text_file(path: &str) -> Result<String> {
    let path = expand_path(path);
    let text = fs::read_to_string(&path)
        .map_err(|e| Error::io_error("input".to_string(), path.clone(), e))?;
    debug!("Read {} byte(s) of input from `{}`", text.len(), path);
    Ok(text)
}

/// Uses the file when one is given, otherwise prompts for a line of text.
pub fn acquire_text<R: BufRead, W: Write>(
    file: Option<&str>,
    reader: &mut R,
    writer: &mut W,
) -> Result<String> {
    match file {
        Some(path) => read_text_file(path),
        None => prompt_text(reader, writer),
    }
}
