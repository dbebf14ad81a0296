//! Decoded array values

use serde::{Deserialize, Serialize};

/// A decoded array literal element
///
/// Leaves are the raw element text; no type coercion happens here.
/// Serializes untagged: `null`, a JSON string, or a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrayValue {
    /// The bare `NULL` token
    Null,
    /// An element's unescaped text
    Text(String),
    /// A nested sub-array
    Array(Vec<ArrayValue>),
}

impl ArrayValue {
    /// Shorthand for `ArrayValue::Text`
    pub fn text(value: impl Into<String>) -> Self {
        ArrayValue::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ArrayValue::Null)
    }

    /// Leaf text, if this is a text leaf
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ArrayValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Elements, if this is a (sub)array
    pub fn as_array(&self) -> Option<&[ArrayValue]> {
        match self {
            ArrayValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Consume into elements, if this is a (sub)array
    pub fn into_array(self) -> Option<Vec<ArrayValue>> {
        match self {
            ArrayValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Nesting depth: leaves are 0, `{}` and `{a}` are 1
    pub fn depth(&self) -> usize {
        match self {
            ArrayValue::Array(items) => 1 + items.iter().map(ArrayValue::depth).max().unwrap_or(0),
            _ => 0,
        }
    }
}

impl From<&str> for ArrayValue {
    fn from(value: &str) -> Self {
        ArrayValue::Text(value.to_string())
    }
}

impl From<String> for ArrayValue {
    fn from(value: String) -> Self {
        ArrayValue::Text(value)
    }
}

impl<T: Into<ArrayValue>> From<Option<T>> for ArrayValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ArrayValue::Null, Into::into)
    }
}

impl<T: Into<ArrayValue>> From<Vec<T>> for ArrayValue {
    fn from(items: Vec<T>) -> Self {
        ArrayValue::Array(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_nested_options() {
        let value = ArrayValue::from(vec![vec![Some("a"), None]]);
        assert_eq!(
            value,
            ArrayValue::Array(vec![ArrayValue::Array(vec![
                ArrayValue::text("a"),
                ArrayValue::Null,
            ])])
        );
        assert_eq!(value.depth(), 2);
    }

    #[test]
    fn test_serializes_untagged() {
        let value = ArrayValue::from(vec![Some("x"), None]);
        assert_eq!(serde_json::to_value(&value).unwrap(), json!(["x", null]));
    }

    #[test]
    fn test_deserializes_untagged() {
        let value: ArrayValue = serde_json::from_value(json!([["1"], null])).unwrap();
        assert_eq!(
            value,
            ArrayValue::Array(vec![
                ArrayValue::Array(vec![ArrayValue::text("1")]),
                ArrayValue::Null,
            ])
        );
    }

    #[test]
    fn test_accessors() {
        let value = ArrayValue::from(vec!["a"]);
        assert!(value.as_text().is_none());
        assert_eq!(value.as_array().unwrap()[0].as_text(), Some("a"));
        assert!(!value.is_null());
        assert_eq!(ArrayValue::Null.depth(), 0);
    }
}
