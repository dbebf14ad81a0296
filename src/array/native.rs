//! Byte-level array literal scanner
//!
//! Iterative, with an explicit level stack. Nesting is still capped at
//! [`MAX_DEPTH`] so the decoded value stays shallow. Structural bytes are all
//! ASCII, which keeps every split on a UTF-8 boundary. Non-ASCII delimiters
//! are handed to the reference parser.

use super::errors::{ArrayResult, ParseError, ParseErrorKind};
use super::parser::{open_brace_offset, ArrayParser, MAX_DEPTH, NULL_TOKEN};
use super::reference::ReferenceParser;
use super::value::ArrayValue;

/// Fast parser for ASCII delimiters
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeParser;

#[derive(Clone, Copy)]
enum Expect {
    /// Just after `{`: an element or `}`
    FirstOrClose,
    /// Just after a delimiter: an element
    Element,
    /// After an element: a delimiter or `}`
    DelimiterOrClose,
}

impl ArrayParser for NativeParser {
    fn name(&self) -> &'static str {
        "native"
    }

    fn supports(&self, delimiter: char) -> bool {
        delimiter.is_ascii()
    }

    fn parse(&self, input: &str, delimiter: char) -> ArrayResult<ArrayValue> {
        if !self.supports(delimiter) {
            return ReferenceParser.parse(input, delimiter);
        }

        let bytes = input.as_bytes();
        let delim = delimiter as u8;
        let mut i = open_brace_offset(input)? + 1;
        let mut stack: Vec<Vec<ArrayValue>> = vec![Vec::new()];
        let mut expect = Expect::FirstOrClose;

        loop {
            let Some(&b) = bytes.get(i) else {
                return Err(ParseError::new(ParseErrorKind::UnbalancedBraces, bytes.len()));
            };

            let close = match expect {
                Expect::FirstOrClose if b == b'}' => true,
                Expect::FirstOrClose | Expect::Element => {
                    let value = match b {
                        b'{' => {
                            if stack.len() >= MAX_DEPTH {
                                return Err(ParseError::new(ParseErrorKind::TooDeep, i));
                            }
                            stack.push(Vec::new());
                            expect = Expect::FirstOrClose;
                            i += 1;
                            continue;
                        }
                        b'"' => {
                            let (value, next) = scan_quoted(input, i + 1)?;
                            i = next;
                            value
                        }
                        _ if b == delim || b == b'}' => {
                            return Err(ParseError::new(ParseErrorKind::EmptyElement, i));
                        }
                        _ => {
                            let (value, next) = scan_bareword(input, i, delim)?;
                            i = next;
                            value
                        }
                    };
                    push(&mut stack, value);
                    expect = Expect::DelimiterOrClose;
                    false
                }
                Expect::DelimiterOrClose if b == delim => {
                    expect = Expect::Element;
                    i += 1;
                    false
                }
                Expect::DelimiterOrClose if b == b'}' => true,
                Expect::DelimiterOrClose => {
                    return Err(ParseError::new(ParseErrorKind::DelimiterExpected, i));
                }
            };

            if close {
                i += 1;
                let level = stack.pop().unwrap_or_default();
                if stack.is_empty() {
                    if i < bytes.len() {
                        return Err(ParseError::new(ParseErrorKind::TrailingCharacters, i));
                    }
                    return Ok(ArrayValue::Array(level));
                }
                push(&mut stack, ArrayValue::Array(level));
                expect = Expect::DelimiterOrClose;
            }
        }
    }
}

fn push(stack: &mut [Vec<ArrayValue>], value: ArrayValue) {
    if let Some(level) = stack.last_mut() {
        level.push(value);
    }
}

fn into_text(input: &str, start: usize, buf: Vec<u8>) -> ArrayResult<String> {
    String::from_utf8(buf).map_err(|e| {
        let pos = start + e.utf8_error().valid_up_to();
        ParseError::unexpected(input[pos..].chars().next().unwrap_or('\u{fffd}'), pos)
    })
}

/// Scan a quoted element whose opening `"` precedes `start`
fn scan_quoted(input: &str, start: usize) -> ArrayResult<(ArrayValue, usize)> {
    let bytes = input.as_bytes();
    let mut buf = Vec::new();
    let mut i = start;

    loop {
        match bytes.get(i) {
            None => return Err(ParseError::new(ParseErrorKind::UnterminatedQuote, bytes.len())),
            Some(b'"') => break,
            Some(b'\\') => match bytes.get(i + 1) {
                Some(&next) => {
                    buf.push(next);
                    i += 2;
                }
                None => {
                    return Err(ParseError::new(ParseErrorKind::UnterminatedQuote, bytes.len()))
                }
            },
            Some(_) => {
                // Copy the whole run up to the next quote or backslash
                let run = bytes[i..]
                    .iter()
                    .position(|&b| b == b'"' || b == b'\\')
                    .unwrap_or(bytes.len() - i);
                buf.extend_from_slice(&bytes[i..i + run]);
                i += run;
            }
        }
    }

    let text = into_text(input, start, buf)?;
    Ok((ArrayValue::Text(text), i + 1))
}

/// Scan a bareword starting at `start`, stopping before the delimiter or `}`
fn scan_bareword(input: &str, start: usize, delim: u8) -> ArrayResult<(ArrayValue, usize)> {
    let bytes = input.as_bytes();
    let mut buf = Vec::new();
    let mut escaped = false;
    let mut i = start;

    loop {
        match bytes.get(i) {
            None => return Err(ParseError::new(ParseErrorKind::UnbalancedBraces, bytes.len())),
            Some(&b) if b == delim || b == b'}' => break,
            Some(&b) if b == b'{' || b == b'"' => {
                return Err(ParseError::unexpected(char::from(b), i))
            }
            Some(b'\\') => match bytes.get(i + 1) {
                Some(&next) => {
                    buf.push(next);
                    escaped = true;
                    i += 2;
                }
                None => {
                    return Err(ParseError::new(ParseErrorKind::UnbalancedBraces, bytes.len()))
                }
            },
            Some(&b) => {
                buf.push(b);
                i += 1;
            }
        }
    }

    if !escaped && buf == NULL_TOKEN.as_bytes() {
        return Ok((ArrayValue::Null, i));
    }
    let text = into_text(input, start, buf)?;
    Ok((ArrayValue::Text(text), i))
}
