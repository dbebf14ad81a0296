//! Ordered classification rules for column default definitions
//!
//! Rules are tried top to bottom; the first whose pattern matches decides
//! the result, even when that result is `NoDefault`.

use regex::{Captures, Regex};

use super::types::DefaultSpec;
use crate::patterns::static_regex;

/// `'<body>'` with an optional leading `(` or `B`, then a `::type` cast,
/// optionally quoted and optionally an array type.
const QUOTED_LITERAL: &str = r#"(?s)\A[(B]?'(.*)'.*::"?([\w. ]+)"?(?:\[\])?\z"#;

const BOOLEAN: &str = r"\A(?:true|false)\z";

/// Signed integer or decimal, optionally parenthesised, optionally `::bigint`
const NUMERIC: &str = r"\A\(?(-?[0-9]+(?:\.[0-9]*)?)\)?(?:::bigint)?\z";

/// Bare object identifier
const OBJECT_ID: &str = r"\A-?[0-9]+\z";

/// `fn(...)` anywhere, or `(...)::type`
const FUNCTION_CALL: &str = r"\w+\(.*\)|\(.*\)::\w+";

/// Literal spelled `'now'::date` is CURRENT_DATE, not a fixed value
const DYNAMIC_DATE_BODY: &str = "now";
const DYNAMIC_DATE_TYPE: &str = "date";

type Handler = fn(&Captures<'_>) -> DefaultSpec;

/// One (pattern, handler) pair
pub(crate) struct Rule {
    pub(crate) name: &'static str,
    pattern: Regex,
    handler: Handler,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, handler: Handler) -> Self {
        Self {
            name,
            pattern: static_regex(pattern),
            handler,
        }
    }

    /// `None` when the pattern does not match
    pub(crate) fn apply(&self, raw: &str) -> Option<DefaultSpec> {
        self.pattern.captures(raw).map(|caps| (self.handler)(&caps))
    }
}

fn group<'a>(caps: &Captures<'a>, index: usize) -> &'a str {
    caps.get(index).map_or("", |m| m.as_str())
}

fn quoted_literal(caps: &Captures<'_>) -> DefaultSpec {
    let body = group(caps, 1);
    let type_name = group(caps, 2);
    if body == DYNAMIC_DATE_BODY && type_name == DYNAMIC_DATE_TYPE {
        return DefaultSpec::NoDefault;
    }
    // Undo SQL literal escaping
    DefaultSpec::Literal(body.replace("''", "'"))
}

fn whole_match(caps: &Captures<'_>) -> DefaultSpec {
    DefaultSpec::Literal(group(caps, 0).to_string())
}

fn numeric(caps: &Captures<'_>) -> DefaultSpec {
    DefaultSpec::Literal(group(caps, 1).to_string())
}

/// The PostgreSQL rule table, in evaluation order
pub(crate) fn postgres_rules() -> Vec<Rule> {
    vec![
        Rule::new("quoted_literal", QUOTED_LITERAL, quoted_literal),
        Rule::new("boolean", BOOLEAN, whole_match),
        Rule::new("numeric", NUMERIC, numeric),
        // Shadowed by `numeric` for every input; kept for table fidelity
        Rule::new("object_id", OBJECT_ID, whole_match),
    ]
}

pub(crate) fn function_call_pattern() -> Regex {
    static_regex(FUNCTION_CALL)
}
