//! Array literal encoder
//!
//! - `None` / JSON null -> `NULL` (unquoted)
//! - sequences -> `{` elements joined by the delimiter `}`
//! - every other scalar is stringified and always double-quoted, with `\`
//!   and `"` backslash-escaped

/// A value that can be written as an array literal element
pub trait ArrayElement {
    fn write_element(&self, writer: &mut ElementWriter<'_>);
}

/// Output sink handed to [`ArrayElement::write_element`]
pub struct ElementWriter<'a> {
    out: &'a mut String,
    delimiter: char,
}

impl<'a> ElementWriter<'a> {
    fn new(out: &'a mut String, delimiter: char) -> Self {
        Self { out, delimiter }
    }

    /// Write the NULL marker
    pub fn null(&mut self) {
        self.out.push_str("NULL");
    }

    /// Write a quoted scalar
    pub fn scalar(&mut self, text: &str) {
        quote_element(self.out, text);
    }

    /// Write a nested sequence
    pub fn sequence<'b, T, I>(&mut self, items: I)
    where
        T: ArrayElement + ?Sized + 'b,
        I: IntoIterator<Item = &'b T>,
    {
        self.out.push('{');
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.out.push(self.delimiter);
            }
            item.write_element(self);
        }
        self.out.push('}');
    }
}

/// Append `text` double-quoted, escaping `\` and `"`
fn quote_element(out: &mut String, text: &str) {
    out.reserve(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
}

/// Encodes values into array literal text for one delimiter
#[derive(Debug, Clone, Copy)]
pub struct ArrayEncoder {
    delimiter: char,
}

impl ArrayEncoder {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Encode `value`; a bare scalar encodes to just its quoted form
    pub fn encode<T: ArrayElement + ?Sized>(&self, value: &T) -> String {
        let mut out = String::new();
        let mut writer = ElementWriter::new(&mut out, self.delimiter);
        value.write_element(&mut writer);
        out
    }
}

impl ArrayElement for str {
    fn write_element(&self, writer: &mut ElementWriter<'_>) {
        writer.scalar(self);
    }
}

impl ArrayElement for String {
    fn write_element(&self, writer: &mut ElementWriter<'_>) {
        writer.scalar(self);
    }
}

impl ArrayElement for char {
    fn write_element(&self, writer: &mut ElementWriter<'_>) {
        writer.scalar(self.encode_utf8(&mut [0u8; 4]));
    }
}

macro_rules! display_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ArrayElement for $ty {
                fn write_element(&self, writer: &mut ElementWriter<'_>) {
                    writer.scalar(&self.to_string());
                }
            }
        )*
    };
}

display_element!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: ArrayElement + ?Sized> ArrayElement for &T {
    fn write_element(&self, writer: &mut ElementWriter<'_>) {
        (**self).write_element(writer);
    }
}

impl<T: ArrayElement> ArrayElement for Option<T> {
    fn write_element(&self, writer: &mut ElementWriter<'_>) {
        match self {
            Some(value) => value.write_element(writer),
            None => writer.null(),
        }
    }
}

impl<T: ArrayElement> ArrayElement for [T] {
    fn write_element(&self, writer: &mut ElementWriter<'_>) {
        writer.sequence(self.iter());
    }
}

impl<T: ArrayElement, const N: usize> ArrayElement for [T; N] {
    fn write_element(&self, writer: &mut ElementWriter<'_>) {
        writer.sequence(self.iter());
    }
}

impl<T: ArrayElement> ArrayElement for Vec<T> {
    fn write_element(&self, writer: &mut ElementWriter<'_>) {
        writer.sequence(self.iter());
    }
}

impl ArrayElement for super::ArrayValue {
    fn write_element(&self, writer: &mut ElementWriter<'_>) {
        match self {
            super::ArrayValue::Null => writer.null(),
            super::ArrayValue::Text(text) => writer.scalar(text),
            super::ArrayValue::Array(items) => writer.sequence(items.iter()),
        }
    }
}

impl ArrayElement for serde_json::Value {
    fn write_element(&self, writer: &mut ElementWriter<'_>) {
        use serde_json::Value;

        match self {
            Value::Null => writer.null(),
            Value::Bool(b) => writer.scalar(if *b { "true" } else { "false" }),
            Value::Number(n) => writer.scalar(&n.to_string()),
            Value::String(s) => writer.scalar(s),
            Value::Array(items) => writer.sequence(items.iter()),
            // Objects have no array form; store their JSON text
            Value::Object(_) => writer.scalar(&self.to_string()),
        }
    }
}
