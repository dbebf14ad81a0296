//! Static default value extraction
//!
//! Pattern matching over the catalog's textual default, never evaluation.
//! Anything that cannot be proven to be a literal is `NoDefault`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::rules::{function_call_pattern, postgres_rules, Rule};
use super::types::DefaultSpec;

/// Classifies raw column default definitions
pub struct DefaultValueExtractor {
    rules: Vec<Rule>,
    function_call: Regex,
}

impl DefaultValueExtractor {
    /// Extractor with the PostgreSQL rule table
    pub fn new() -> Self {
        Self {
            rules: postgres_rules(),
            function_call: function_call_pattern(),
        }
    }

    /// Recover the literal value of a default, first matching rule wins
    ///
    /// Returns `Literal` or `NoDefault`; function calls are `NoDefault` here
    /// (see [`classify`](Self::classify)).
    pub fn extract(&self, raw: &str) -> DefaultSpec {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(raw))
            .unwrap_or(DefaultSpec::NoDefault)
    }

    /// Literal text of the default, if one can be recovered
    pub fn extract_value(&self, raw: &str) -> Option<String> {
        self.extract(raw).into_literal()
    }

    /// Name of the rule that decides `raw`, if any
    pub fn matching_rule(&self, raw: &str) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| rule.apply(raw).is_some())
            .map(|rule| rule.name)
    }

    /// True when no literal was recovered and `raw` looks like a call
    pub fn is_function_derived(&self, has_literal: bool, raw: &str) -> bool {
        !has_literal && self.function_call.is_match(raw)
    }

    /// The raw expression when the default is function-derived
    pub fn default_function(&self, default_value: Option<&str>, raw: &str) -> Option<String> {
        self.is_function_derived(default_value.is_some(), raw)
            .then(|| raw.to_string())
    }

    /// `extract`, with call-like defaults reported as `FunctionDerived`
    pub fn classify(&self, raw: &str) -> DefaultSpec {
        match self.extract(raw) {
            DefaultSpec::NoDefault if self.is_function_derived(false, raw) => {
                DefaultSpec::FunctionDerived
            }
            spec => spec,
        }
    }
}

impl Default for DefaultValueExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DefaultValueExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.rules.iter().map(|rule| rule.name).collect();
        f.debug_struct("DefaultValueExtractor")
            .field("rules", &names)
            .finish()
    }
}

static SHARED: LazyLock<DefaultValueExtractor> = LazyLock::new(DefaultValueExtractor::new);

/// The process-wide extractor; patterns are compiled once
pub fn shared() -> &'static DefaultValueExtractor {
    &SHARED
}

/// Classify `raw` with the shared extractor
pub fn extract_default(raw: &str) -> DefaultSpec {
    SHARED.extract(raw)
}

/// Function-derived check with the shared extractor
pub fn is_function_derived(has_literal: bool, raw: &str) -> bool {
    SHARED.is_function_derived(has_literal, raw)
}
