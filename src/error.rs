//! Contains the Error and Result type used by the parser.
use std::fmt;

/// A parse failure. Carries what went wrong and the byte offset into the
/// input at which it was detected.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    pos: usize,
}

/// The ways a parse can fail. Every variant corresponds to a specific
/// grammar violation or the depth limit; there is no catch-all.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// No value can begin with this character.
    UnexpectedChar(char),
    /// The input ended in the middle of a value.
    UnexpectedEof,
    /// A required punctuation character was missing.
    Expected(char),
    /// An entry must be followed by `,` or the closing delimiter.
    BadSeparator(char),
    /// A quoted string reached end of input before its closing quote.
    UnterminatedString,
    /// An unquoted token that does not form a valid identifier.
    InvalidUnquotedString(String),
    /// A typed-array tag letter other than `B`, `I` or `L`.
    UnknownArrayType(char),
    /// A numeric token that failed to convert.
    InvalidNumber(String),
    /// Nesting deeper than the configured maximum.
    DepthExceeded(usize),
    /// Non-whitespace content remained after a complete top-level value.
    TrailingInput(char),
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Byte offset into the input at which parsing failed.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn unexpected_char(c: char, pos: usize) -> Error {
        Error {
            kind: ErrorKind::UnexpectedChar(c),
            pos,
        }
    }

    pub(crate) fn unexpected_eof(pos: usize) -> Error {
        Error {
            kind: ErrorKind::UnexpectedEof,
            pos,
        }
    }

    pub(crate) fn expected(c: char, pos: usize) -> Error {
        Error {
            kind: ErrorKind::Expected(c),
            pos,
        }
    }

    pub(crate) fn bad_separator(close: char, pos: usize) -> Error {
        Error {
            kind: ErrorKind::BadSeparator(close),
            pos,
        }
    }

    pub(crate) fn unterminated_string(pos: usize) -> Error {
        Error {
            kind: ErrorKind::UnterminatedString,
            pos,
        }
    }

    pub(crate) fn invalid_unquoted_string(s: &str, pos: usize) -> Error {
        Error {
            kind: ErrorKind::InvalidUnquotedString(s.to_owned()),
            pos,
        }
    }

    pub(crate) fn unknown_array_type(c: char, pos: usize) -> Error {
        Error {
            kind: ErrorKind::UnknownArrayType(c),
            pos,
        }
    }

    pub(crate) fn invalid_number(s: &str, pos: usize) -> Error {
        Error {
            kind: ErrorKind::InvalidNumber(s.to_owned()),
            pos,
        }
    }

    pub(crate) fn depth_exceeded(max_depth: usize, pos: usize) -> Error {
        Error {
            kind: ErrorKind::DepthExceeded(max_depth),
            pos,
        }
    }

    pub(crate) fn trailing_input(c: char, pos: usize) -> Error {
        Error {
            kind: ErrorKind::TrailingInput(c),
            pos,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnexpectedChar(c) => write!(f, "unexpected character {:?}", c),
            ErrorKind::UnexpectedEof => f.write_str("unexpectedly ran out of input"),
            ErrorKind::Expected(c) => write!(f, "expected {:?}", c),
            ErrorKind::BadSeparator(close) => write!(f, "expected ',' or {:?}", close),
            ErrorKind::UnterminatedString => f.write_str("unterminated string"),
            ErrorKind::InvalidUnquotedString(s) => {
                write!(f, "invalid unquoted string {:?}", s)
            }
            ErrorKind::UnknownArrayType(c) => write!(f, "unknown array type {:?}", c),
            ErrorKind::InvalidNumber(s) => write!(f, "invalid number {:?}", s),
            ErrorKind::DepthExceeded(max) => write!(f, "maximum depth {} exceeded", max),
            ErrorKind::TrailingInput(c) => write!(f, "unexpected trailing character {:?}", c),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.kind, self.pos)
    }
}

impl std::error::Error for Error {}
