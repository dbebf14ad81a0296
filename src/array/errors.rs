//! Array literal parse errors
//!
//! Error codes:
//! - PGM_ARRAY_MISSING_OPEN_BRACE
//! - PGM_ARRAY_UNBALANCED_BRACES
//! - PGM_ARRAY_UNTERMINATED_QUOTE
//! - PGM_ARRAY_DELIMITER_EXPECTED
//! - PGM_ARRAY_UNEXPECTED_CHARACTER
//! - PGM_ARRAY_EMPTY_ELEMENT
//! - PGM_ARRAY_TRAILING_CHARACTERS
//! - PGM_ARRAY_TOO_DEEP
//!
//! All of them are data-integrity failures: the caller must surface them,
//! no partial result is produced.

use std::fmt;

use thiserror::Error;

/// What went wrong while parsing an array literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input does not start with `{` (after an optional dimension decoration)
    MissingOpenBrace,
    /// Input ended before every `{` was closed
    UnbalancedBraces,
    /// A quoted element was never closed
    UnterminatedQuote,
    /// An element was followed by something other than the delimiter or `}`
    DelimiterExpected,
    /// A structural character appeared where element text was expected
    UnexpectedCharacter,
    /// Two delimiters, or a delimiter and a brace, with nothing between
    EmptyElement,
    /// Characters after the closing brace of the top-level array
    TrailingCharacters,
    /// A `{` opening a level beyond [`MAX_DEPTH`](super::MAX_DEPTH)
    TooDeep,
}

impl ParseErrorKind {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            ParseErrorKind::MissingOpenBrace => "PGM_ARRAY_MISSING_OPEN_BRACE",
            ParseErrorKind::UnbalancedBraces => "PGM_ARRAY_UNBALANCED_BRACES",
            ParseErrorKind::UnterminatedQuote => "PGM_ARRAY_UNTERMINATED_QUOTE",
            ParseErrorKind::DelimiterExpected => "PGM_ARRAY_DELIMITER_EXPECTED",
            ParseErrorKind::UnexpectedCharacter => "PGM_ARRAY_UNEXPECTED_CHARACTER",
            ParseErrorKind::EmptyElement => "PGM_ARRAY_EMPTY_ELEMENT",
            ParseErrorKind::TrailingCharacters => "PGM_ARRAY_TRAILING_CHARACTERS",
            ParseErrorKind::TooDeep => "PGM_ARRAY_TOO_DEEP",
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            ParseErrorKind::MissingOpenBrace => "array literal must start with '{'",
            ParseErrorKind::UnbalancedBraces => "unexpected end of input, unbalanced braces",
            ParseErrorKind::UnterminatedQuote => "unterminated quoted element",
            ParseErrorKind::DelimiterExpected => "expected delimiter or '}'",
            ParseErrorKind::UnexpectedCharacter => "unexpected character",
            ParseErrorKind::EmptyElement => "empty element",
            ParseErrorKind::TrailingCharacters => "trailing characters after array literal",
            ParseErrorKind::TooDeep => "array nesting exceeds the maximum depth",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Structurally invalid array literal text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message} at byte {position}")]
pub struct ParseError {
    kind: ParseErrorKind,
    message: String,
    position: usize,
}

impl ParseError {
    /// Create an error of `kind` at byte offset `position`
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self {
            kind,
            message: kind.describe().to_string(),
            position,
        }
    }

    /// Create an error naming the offending character
    pub fn unexpected(found: char, position: usize) -> Self {
        Self {
            kind: ParseErrorKind::UnexpectedCharacter,
            message: format!("unexpected character {:?}", found),
            position,
        }
    }

    /// Returns the error kind
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Returns the human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset into the input where parsing stopped
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Result type for array codec operations
pub type ArrayResult<T> = Result<T, ParseError>;
