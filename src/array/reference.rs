//! Character-level recursive descent parser

use super::errors::{ArrayResult, ParseError, ParseErrorKind};
use super::parser::{open_brace_offset, ArrayParser, MAX_DEPTH, NULL_TOKEN};
use super::value::ArrayValue;

/// Reference parser, handles any delimiter character
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceParser;

impl ArrayParser for ReferenceParser {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn parse(&self, input: &str, delimiter: char) -> ArrayResult<ArrayValue> {
        let start = open_brace_offset(input)?;
        let mut cursor = Cursor {
            input,
            pos: start + 1,
            delimiter,
            depth: 1,
        };

        let items = cursor.parse_array()?;
        if cursor.pos < input.len() {
            return Err(ParseError::new(ParseErrorKind::TrailingCharacters, cursor.pos));
        }
        Ok(ArrayValue::Array(items))
    }
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    delimiter: char,
    /// Levels currently open, the top level included
    depth: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn end_of_input(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.input.len())
    }

    /// Parse the elements of a level whose `{` was already consumed
    fn parse_array(&mut self) -> ArrayResult<Vec<ArrayValue>> {
        let mut items = Vec::new();

        if self.peek() == Some('}') {
            self.bump();
            return Ok(items);
        }

        loop {
            items.push(self.parse_element()?);

            let at = self.pos;
            match self.bump() {
                Some(c) if c == self.delimiter => continue,
                Some('}') => return Ok(items),
                Some(_) => return Err(ParseError::new(ParseErrorKind::DelimiterExpected, at)),
                None => return Err(self.end_of_input(ParseErrorKind::UnbalancedBraces)),
            }
        }
    }

    fn parse_element(&mut self) -> ArrayResult<ArrayValue> {
        match self.peek() {
            None => Err(self.end_of_input(ParseErrorKind::UnbalancedBraces)),
            Some('{') => {
                if self.depth >= MAX_DEPTH {
                    return Err(ParseError::new(ParseErrorKind::TooDeep, self.pos));
                }
                self.bump();
                self.depth += 1;
                let items = self.parse_array()?;
                self.depth -= 1;
                Ok(ArrayValue::Array(items))
            }
            Some('"') => {
                self.bump();
                self.parse_quoted()
            }
            Some(c) if c == self.delimiter || c == '}' => {
                Err(ParseError::new(ParseErrorKind::EmptyElement, self.pos))
            }
            Some(_) => self.parse_bareword(),
        }
    }

    fn parse_quoted(&mut self) -> ArrayResult<ArrayValue> {
        let mut text = String::new();
        loop {
            match self.bump() {
                None => return Err(self.end_of_input(ParseErrorKind::UnterminatedQuote)),
                Some('"') => return Ok(ArrayValue::Text(text)),
                Some('\\') => match self.bump() {
                    Some(c) => text.push(c),
                    None => return Err(self.end_of_input(ParseErrorKind::UnterminatedQuote)),
                },
                Some(c) => text.push(c),
            }
        }
    }

    fn parse_bareword(&mut self) -> ArrayResult<ArrayValue> {
        let mut text = String::new();
        let mut escaped = false;

        loop {
            match self.peek() {
                None => return Err(self.end_of_input(ParseErrorKind::UnbalancedBraces)),
                Some(c) if c == self.delimiter || c == '}' => break,
                Some(c @ ('{' | '"')) => return Err(ParseError::unexpected(c, self.pos)),
                Some('\\') => {
                    self.bump();
                    match self.bump() {
                        Some(c) => text.push(c),
                        None => return Err(self.end_of_input(ParseErrorKind::UnbalancedBraces)),
                    }
                    escaped = true;
                }
                Some(c) => {
                    text.push(c);
                    self.bump();
                }
            }
        }

        if !escaped && text == NULL_TOKEN {
            Ok(ArrayValue::Null)
        } else {
            Ok(ArrayValue::Text(text))
        }
    }
}
