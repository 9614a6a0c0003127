//! Unixtools Core Library
//!
//! This crate provides the text transformations behind unixtools, a small
//! re-creation of the classic `cut` and `wc` utilities plus line range
//! extraction from files.
//!
//! # Key Features
//!
//! - **Field Extraction**: Select fields by index or inclusive range from delimited lines
//! - **Counting**: Line, word and character counts over text
//! - **Line Ranges**: Pull an inclusive range of lines out of a file
//! - **Error Handling**: A single error type with the user-facing messages
//!
//! # Examples
//!
//! Cutting the second column out of comma separated text:
//!
//! ```
//! use unixtools_core::cut::cut_text;
//! use unixtools_core::selector::parse_selectors;
//!
//! let fields = parse_selectors(&["2"])?;
//! let names = cut_text("1,John,Doe\n2,Jane,Smith", ",", &fields)?;
//! assert_eq!(names, "John\nJane");
//! # Ok::<(), unixtools_core::error::Error>(())
//! ```

pub mod config;
pub mod count;
pub mod cut;
pub mod error;
pub mod extract;
pub mod selector;
