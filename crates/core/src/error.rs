use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid field selector `{}`: expected an index like `3` or a range like `2-5`", .0)]
    MalformedSelector(String),

    #[error("Invalid field selector `{}`: field numbers start at 1", .0)]
    InvalidFieldIndex(String),

    #[error("Field {} is out of range on line {} ({} field(s) present)", .index, .line, .available)]
    FieldIndexOutOfRange {
        index: usize,
        line: usize,
        available: usize,
    },

    #[error("The delimiter may not be empty.")]
    EmptyDelimiter,

    #[error("File not found.")]
    FileNotFound { path: String },

    #[error("Invalid line numbers provided.")]
    InvalidLineNumbers,

    #[error("Input line number should be less than or equal to output line number.")]
    InvertedLineRange,

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("No input was provided.")]
    EndOfInput,
}

impl Error {
    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    /// Whether this error is one of the line range outcomes that are
    /// reported as plain output rather than as a failure.
    pub fn is_range_outcome(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. } | Self::InvalidLineNumbers | Self::InvertedLineRange
        )
    }
}
