//! Array literal parser strategies
//!
//! Grammar:
//!
//! ```text
//! literal   := [dims '='] array
//! dims      := ('[' [bound ':'] bound ']')+
//! bound     := ['+' | '-'] DIGIT+
//! array     := '{' [element (DELIM element)*] '}'
//! element   := array | quoted | bareword
//! quoted    := '"' (ESCAPE | any but '"' or '\')* '"'
//! bareword  := (ESCAPE | any but DELIM, '}', '{', '"', '\')+
//! ESCAPE    := '\' any
//! ```
//!
//! An unescaped bareword spelled `NULL` decodes to null. Whitespace inside a
//! bareword is part of its text. At most [`MAX_DEPTH`] levels may be open at
//! once. Two implementations satisfy the grammar:
//! [`ReferenceParser`](super::ReferenceParser) for any delimiter and
//! [`NativeParser`](super::NativeParser), a byte scanner for ASCII delimiters.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::errors::{ArrayResult, ParseError, ParseErrorKind};
use super::native::NativeParser;
use super::reference::ReferenceParser;
use super::value::ArrayValue;

/// The bare token that decodes to null
pub(crate) const NULL_TOKEN: &str = "NULL";

/// Maximum nesting depth, PostgreSQL's `MAXDIM`
pub const MAX_DEPTH: usize = 6;

/// Decodes array literal text
///
/// Implementations are interchangeable: for any input they return the same
/// value or an error of the same kind at the same position.
pub trait ArrayParser: Send + Sync + fmt::Debug {
    /// Short name used in logs and configuration
    fn name(&self) -> &'static str;

    /// Whether this parser can handle `delimiter` natively
    fn supports(&self, _delimiter: char) -> bool {
        true
    }

    /// Parse a complete array literal
    fn parse(&self, input: &str, delimiter: char) -> ArrayResult<ArrayValue>;
}

/// Parser strategy selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParserKind {
    /// Byte-level scanner, ASCII delimiters only
    #[default]
    Native,
    /// Character-level recursive descent
    Reference,
}

impl ParserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParserKind::Native => "native",
            ParserKind::Reference => "reference",
        }
    }

    /// Instantiate the strategy
    pub fn build(self) -> Arc<dyn ArrayParser> {
        match self {
            ParserKind::Native => Arc::new(NativeParser),
            ParserKind::Reference => Arc::new(ReferenceParser),
        }
    }
}

impl fmt::Display for ParserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Byte offset of the opening brace, skipping a dimension decoration
///
/// PostgreSQL prefixes arrays whose lower bound is not 1 with
/// `[lower:upper]...=`. The bounds carry no information for the decoded
/// value, but their shape is checked.
pub(crate) fn open_brace_offset(input: &str) -> ArrayResult<usize> {
    let bytes = input.as_bytes();
    let mut pos = 0;

    while bytes.get(pos) == Some(&b'[') {
        pos = dimension_end(input, pos + 1)?;
    }
    if pos > 0 {
        pos = expect_byte(input, pos, b'=')?;
    }

    match bytes.get(pos) {
        Some(b'{') => Ok(pos),
        _ => Err(ParseError::new(ParseErrorKind::MissingOpenBrace, pos)),
    }
}

/// Offset just past `[lower:]upper]`, scanning from after the `[`
fn dimension_end(input: &str, start: usize) -> ArrayResult<usize> {
    let mut pos = bound_end(input, start)?;
    if input.as_bytes().get(pos) == Some(&b':') {
        pos = bound_end(input, pos + 1)?;
    }
    expect_byte(input, pos, b']')
}

/// Offset just past an optionally signed integer
fn bound_end(input: &str, start: usize) -> ArrayResult<usize> {
    let bytes = input.as_bytes();
    let mut pos = start;
    if matches!(bytes.get(pos), Some(b'+' | b'-')) {
        pos += 1;
    }
    let digits = bytes[pos..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return Err(unexpected_at(input, pos));
    }
    Ok(pos + digits)
}

fn expect_byte(input: &str, pos: usize, expected: u8) -> ArrayResult<usize> {
    if input.as_bytes().get(pos) == Some(&expected) {
        Ok(pos + 1)
    } else {
        Err(unexpected_at(input, pos))
    }
}

/// Only ever called at offsets reached by stepping over ASCII bytes
fn unexpected_at(input: &str, pos: usize) -> ParseError {
    match input.get(pos..).and_then(|rest| rest.chars().next()) {
        Some(c) => ParseError::unexpected(c, pos),
        None => ParseError::new(ParseErrorKind::MissingOpenBrace, pos),
    }
}
