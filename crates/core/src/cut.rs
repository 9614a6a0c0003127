//! Field extraction, after the Unix `cut` utility.

use itertools::Itertools;
use log::debug;

use crate::error::{Error, Result};
use crate::selector::FieldSelector;

/// Reduces every line of `text` to the fields picked by `fields`.
///
/// Lines are split on `\n` and fields on `delimiter`; the selected fields
/// are joined back with `delimiter` and the lines with `\n`. A trailing
/// newline in `text` produces a trailing empty line, processed like any
/// other. With no selectors every line passes through unchanged.
///
/// # Errors
///
/// Returns [`Error::EmptyDelimiter`] for an empty delimiter and
/// [`Error::FieldIndexOutOfRange`] when a single-index selector points
/// past the last field of some line.
///
/// # Examples
///
/// ```
/// use unixtools_core::cut::cut_text;
/// use unixtools_core::selector::FieldSelector;
///
/// let result = cut_text("1,John,Doe\n2,Jane,Smith", ",", &[FieldSelector::Index(2)])?;
/// assert_eq!(result, "John\nJane");
/// # Ok::<(), unixtools_core::error::Error>(())
/// ```
pub fn cut_text(text: &str, delimiter: &str, fields: &[FieldSelector]) -> Result<String> {
    if delimiter.is_empty() {
        return Err(Error::EmptyDelimiter);
    }

    if fields.is_empty() {
        debug!("No field selectors given, passing text through");
    }

    let lines = text
        .split('\n')
        .enumerate()
        .map(|(index, line)| cut_line(line, index + 1, delimiter, fields))
        .collect::<Result<Vec<String>>>()?;

    Ok(lines.join("\n"))
}

fn cut_line(
    line: &str,
    line_number: usize,
    delimiter: &str,
    fields: &[FieldSelector],
) -> Result<String> {
    let line_fields: Vec<&str> = line.split(delimiter).collect();

    if fields.is_empty() {
        return Ok(line_fields.iter().join(delimiter));
    }

    let mut selected = Vec::with_capacity(fields.len());
    for selector in fields {
        selector.select_into(&line_fields, line_number, &mut selected)?;
    }

    Ok(selected.iter().join(delimiter))
}
