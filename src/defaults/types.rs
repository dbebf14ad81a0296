//! Default classification results

use serde::Serialize;

/// What a column default definition resolves to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DefaultSpec {
    /// No static value: blank, a recognised dynamic sentinel, or anything
    /// the rules cannot prove is a literal
    NoDefault,
    /// A statically known literal, still in its textual form
    Literal(String),
    /// Computed at insert time by a function or expression
    FunctionDerived,
}

impl DefaultSpec {
    /// The literal text, if any
    pub fn literal(&self) -> Option<&str> {
        match self {
            DefaultSpec::Literal(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_literal(self) -> Option<String> {
        match self {
            DefaultSpec::Literal(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, DefaultSpec::Literal(_))
    }

    pub fn is_function_derived(&self) -> bool {
        matches!(self, DefaultSpec::FunctionDerived)
    }
}
