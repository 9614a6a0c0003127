//! Inclusive line range extraction from files.

use std::fs::File;
use std::io::{ErrorKind, Read};

use log::debug;

use crate::error::Error::{FileNotFound, InvalidLineNumbers, InvertedLineRange};
use crate::error::{Error, Result};

fn get_reader(path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(FileNotFound {
            path: path.to_string(),
        }),
        Err(e) => Err(Error::io_error("input".to_string(), path.to_string(), e)),
    }
}

/// Returns lines `in_line_no..=out_line_no` (1-based) of `text`, each with
/// the line terminator it carried.
///
/// # Errors
///
/// Returns [`InvalidLineNumbers`] if either number is below 1 or past the
/// last line, and [`InvertedLineRange`] if `in_line_no > out_line_no`.
pub fn extract_line_range(text: &str, in_line_no: i64, out_line_no: i64) -> Result<String> {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let total_lines = i64::try_from(lines.len()).map_err(|_| InvalidLineNumbers)?;

    if in_line_no < 1 || out_line_no < 1 || in_line_no > total_lines || out_line_no > total_lines
    {
        return Err(InvalidLineNumbers);
    }

    if in_line_no > out_line_no {
        return Err(InvertedLineRange);
    }

    // Both bounds are within 1..=total_lines here
    let start = (in_line_no - 1) as usize;
    let end = out_line_no as usize;

    Ok(lines[start..end].concat())
}

/// Reads the file at `file_path` and returns the inclusive line range
/// `in_line_no..=out_line_no`, keeping each line's original newline.
///
/// # Errors
///
/// Returns [`FileNotFound`] if the file does not exist,
/// [`InvalidLineNumbers`] or [`InvertedLineRange`] for a bad range, and
/// [`Error::Io`] if the file exists but cannot be read as text.
///
/// # Examples
///
/// ```no_run
/// use unixtools_core::extract::extract_text_from_file;
///
/// let text = extract_text_from_file("notes.txt", 2, 4)?;
/// print!("{text}");
/// # Ok::<(), unixtools_core::error::Error>(())
/// ```
pub fn extract_text_from_file(
    file_path: &str,
    in_line_no: i64,
    out_line_no: i64,
) -> Result<String> {
    let mut text = String::new();

    {
        let mut reader = get_reader(file_path)?;
        reader
            .read_to_string(&mut text)
            .map_err(|e| Error::io_error("input".to_string(), file_path.to_string(), e))?;
    }

    debug!("Read {} byte(s) from `{}`", text.len(), file_path);

    extract_line_range(&text, in_line_no, out_line_no)
}
