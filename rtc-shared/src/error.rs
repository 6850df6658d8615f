#![allow(dead_code)]

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The two failure classes a candidate attribute parse can report.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Structural problem: wrong keyword, too few fields, unknown token.
    InvalidParameter,
    /// A numeric field, or a field from a small fixed token set, is malformed.
    SyntaxError,
}

#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("syntax error: {0}")]
    SyntaxError(String),
}

impl Error {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Error::InvalidParameter(msg.into())
    }

    pub fn syntax_error(msg: impl Into<String>) -> Self {
        Error::SyntaxError(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidParameter(_) => ErrorKind::InvalidParameter,
            Error::SyntaxError(_) => ErrorKind::SyntaxError,
        }
    }

    /// Returns the human readable message without the class prefix.
    pub fn message(&self) -> &str {
        match self {
            Error::InvalidParameter(msg) | Error::SyntaxError(msg) => msg,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_kind() {
        assert_eq!(
            Error::invalid_parameter("Expect one line only").kind(),
            ErrorKind::InvalidParameter
        );
        assert_eq!(
            Error::syntax_error("Invalid port").kind(),
            ErrorKind::SyntaxError
        );
    }

    #[test]
    fn test_error_message() {
        let err = Error::syntax_error("Invalid port");
        assert_eq!(err.message(), "Invalid port");
        assert_eq!(err.to_string(), "syntax error: Invalid port");
    }
}
