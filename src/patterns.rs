//! Built-in regular expressions

use regex::Regex;

/// Compile a pattern that ships with the crate
///
/// Every caller passes a literal that the test suite compiles, so failure
/// here is a bug in the literal, never in caller input.
pub(crate) fn static_regex(pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|e| panic!("built-in pattern {:?} does not compile: {}", pattern, e))
}
