use json_format_core::FormatError;
use thiserror::Error;

/// Why the pack parser rejected its input. Offsets are byte positions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("invalid JSON at byte {0}")]
    Invalid(usize),
    #[error("invalid number at byte {0}")]
    InvalidNumber(usize),
    #[error("invalid string at byte {0}")]
    InvalidString(usize),
    #[error("trailing characters at byte {0}")]
    TrailingData(usize),
    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),
}

impl From<DecodeError> for FormatError {
    fn from(err: DecodeError) -> Self {
        FormatError::MalformedJson(err.to_string())
    }
}
