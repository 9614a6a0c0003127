//! Field selectors for `cut`.
//!
//! A selector is either a single 1-based field index (`3`) or an inclusive
//! 1-based range (`2-5`). Several selectors may share one token when
//! separated by commas (`1,3-5`).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error::{InvalidFieldIndex, MalformedSelector};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSelector {
    /// A single 1-based field index
    Index(usize),
    /// An inclusive 1-based range of fields
    Range { start: usize, end: usize },
}

impl FieldSelector {
    /// Appends the fields this selector picks out of `fields` to `selected`.
    ///
    /// Ranges are truncated to the available fields, an index past the end
    /// is an error. `line` is the 1-based line number, used for reporting.
    pub fn select_into<'a>(
        &self,
        fields: &[&'a str],
        line: usize,
        selected: &mut Vec<&'a str>,
    ) -> Result<()> {
        match *self {
            FieldSelector::Index(index) => {
                let field = index
                    .checked_sub(1)
                    .and_then(|position| fields.get(position))
                    .ok_or(Error::FieldIndexOutOfRange {
                        index,
                        line,
                        available: fields.len(),
                    })?;
                selected.push(*field);
            }
            FieldSelector::Range { start, end } => {
                let start = start.max(1);
                let end = end.min(fields.len());
                if start <= end {
                    selected.extend_from_slice(&fields[start - 1..end]);
                }
            }
        }

        Ok(())
    }
}

fn parse_position(value: &str, token: &str) -> Result<usize> {
    let position: i64 = value
        .trim()
        .parse()
        .map_err(|_| MalformedSelector(token.to_string()))?;

    if position < 1 {
        return Err(InvalidFieldIndex(token.to_string()));
    }

    usize::try_from(position).map_err(|_| MalformedSelector(token.to_string()))
}

impl FromStr for FieldSelector {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        match token.split_once('-') {
            Some((start, end)) => Ok(FieldSelector::Range {
                start: parse_position(start, token)?,
                end: parse_position(end, token)?,
            }),
            None => Ok(FieldSelector::Index(parse_position(token, token)?)),
        }
    }
}

impl Display for FieldSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldSelector::Index(index) => write!(f, "{index}"),
            FieldSelector::Range { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

/// Parses user supplied selector tokens, splitting each on commas.
///
/// # Errors
///
/// Returns [`MalformedSelector`] for anything that is not an integer or an
/// `start-end` pair of integers, and [`InvalidFieldIndex`] for positions
/// below 1.
///
/// # Examples
///
/// ```
/// use unixtools_core::selector::{parse_selectors, FieldSelector};
///
/// let selectors = parse_selectors(&["1,3-4"])?;
/// assert_eq!(
///     selectors,
///     vec![FieldSelector::Index(1), FieldSelector::Range { start: 3, end: 4 }]
/// );
/// # Ok::<(), unixtools_core::error::Error>(())
/// ```
pub fn parse_selectors<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<FieldSelector>> {
    tokens
        .iter()
        .flat_map(|token| token.as_ref().split(','))
        .map(FieldSelector::from_str)
        .collect()
}
