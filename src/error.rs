//! Error types for JSON parsing and validation.
//!
//! Parsing is the only fallible operation in this crate, and every parse
//! diagnostic carries a [`Location`] pinpointing the first syntactic
//! violation in the input document.
//!
//! ## Examples
//!
//! ```rust
//! use json_tidy::parse;
//!
//! let err = parse("{\"a\":}").unwrap_err();
//! let loc = err.location().unwrap();
//! assert_eq!((loc.line, loc.column, loc.offset), (1, 6, 5));
//! ```

use std::fmt;
use thiserror::Error;

/// A position in the source document.
///
/// `offset` is a 0-based character offset; `line` and `column` are 1-based,
/// with `\n` as the line separator. The three are always consistent: given
/// the document and the offset, [`Location::of`] reproduces line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Location {
    /// Derives the line and column for a character offset into `input`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_tidy::Location;
    ///
    /// let loc = Location::of("{\n  \"a\": 1\n}", 4);
    /// assert_eq!(loc.line, 2);
    /// assert_eq!(loc.column, 3);
    /// ```
    #[must_use]
    pub fn of(input: &str, offset: usize) -> Self {
        let mut line = 1;
        let mut column = 1;
        for ch in input.chars().take(offset) {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Location {
            line,
            column,
            offset,
        }
    }

    /// The start of a document: line 1, column 1, offset 0.
    #[must_use]
    pub const fn start() -> Self {
        Location {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Represents all possible errors reported by this crate.
///
/// All parse diagnostics are terminal: the parser fails at the first
/// violation with no partial output, and the caller must resubmit
/// corrected input.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// The document is empty or contains only whitespace.
    #[error("empty input: no JSON value found")]
    EmptyInput { location: Location },

    /// An unexpected character where a different token was required.
    #[error("unexpected character {found:?} at {location}: expected {expected}")]
    Unexpected {
        location: Location,
        found: char,
        expected: String,
    },

    /// The input ended in the middle of a value.
    #[error("unexpected end of input at {location}: expected {expected}")]
    UnexpectedEof { location: Location, expected: String },

    /// A number token violating the JSON number grammar, or one that
    /// overflows every representable numeric type.
    #[error("invalid number at {location}: {msg}")]
    InvalidNumber { location: Location, msg: String },

    /// A malformed escape sequence inside a string literal.
    #[error("invalid escape at {location}: {msg}")]
    InvalidEscape { location: Location, msg: String },

    /// Non-whitespace content after the root value.
    #[error("trailing characters after JSON value at {location}")]
    TrailingCharacters { location: Location },

    /// Error raised while building a [`JsonValue`](crate::JsonValue)
    /// through serde (e.g. a map with non-string keys).
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an empty-input error anchored at the start of the document.
    pub fn empty_input() -> Self {
        Error::EmptyInput {
            location: Location::start(),
        }
    }

    /// Creates an unexpected-character error.
    pub fn unexpected(location: Location, found: char, expected: &str) -> Self {
        Error::Unexpected {
            location,
            found,
            expected: expected.to_string(),
        }
    }

    /// Creates an unexpected-end-of-input error.
    pub fn eof(location: Location, expected: &str) -> Self {
        Error::UnexpectedEof {
            location,
            expected: expected.to_string(),
        }
    }

    /// Creates an invalid-number error.
    pub fn invalid_number(location: Location, msg: &str) -> Self {
        Error::InvalidNumber {
            location,
            msg: msg.to_string(),
        }
    }

    /// Creates an invalid-escape error.
    pub fn invalid_escape(location: Location, msg: &str) -> Self {
        Error::InvalidEscape {
            location,
            msg: msg.to_string(),
        }
    }

    /// Creates a trailing-characters error.
    pub fn trailing(location: Location) -> Self {
        Error::TrailingCharacters { location }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    /// The location of the diagnostic.
    ///
    /// Always `Some` for parse errors; `None` only for [`Error::Message`],
    /// which originates from serde value construction rather than parsing.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        match self {
            Error::EmptyInput { location }
            | Error::Unexpected { location, .. }
            | Error::UnexpectedEof { location, .. }
            | Error::InvalidNumber { location, .. }
            | Error::InvalidEscape { location, .. }
            | Error::TrailingCharacters { location } => Some(*location),
            Error::Message(_) => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
