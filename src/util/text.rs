//! Text coercion, sequence intersection, and diagnostic warnings.
//!
//! These helpers sit underneath both the tokenizer and the configuration
//! resolver.

/// A value that has a natural text rendering.
///
/// `as_text` returns `None` for null or absent values so callers can tell
/// "nothing" apart from "empty text".
pub trait TextValue {
    fn as_text(&self) -> Option<String>;
}

impl TextValue for str {
    fn as_text(&self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl TextValue for String {
    fn as_text(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl<T: TextValue + ?Sized> TextValue for &T {
    fn as_text(&self) -> Option<String> {
        (**self).as_text()
    }
}

impl<T: TextValue> TextValue for Option<T> {
    fn as_text(&self) -> Option<String> {
        self.as_ref().and_then(TextValue::as_text)
    }
}

macro_rules! impl_text_value_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TextValue for $ty {
                fn as_text(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_text_value_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl TextValue for serde_json::Value {
    fn as_text(&self) -> Option<String> {
        use serde_json::Value;

        match self {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            // Floats go through f64 formatting so 1.0 renders as "1".
            Value::Number(n) => Some(match n.as_f64() {
                Some(f) if n.is_f64() => f.to_string(),
                _ => n.to_string(),
            }),
            // Arrays render their elements comma-joined, nulls as empty text.
            Value::Array(items) => Some(
                items
                    .iter()
                    .map(to_text)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            Value::Object(_) => Some(self.to_string()),
        }
    }
}

/// Convert a value to text.
///
/// Null or absent values become the empty string; everything else uses its
/// natural text representation.
pub fn to_text<T: TextValue + ?Sized>(value: &T) -> String {
    value.as_text().unwrap_or_default()
}

/// Return every element of `a` that also occurs somewhere in `b`.
///
/// Order follows `a`, and duplicates in `a` are kept when each one matches.
pub fn intersection<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    if a.is_empty() && b.is_empty() {
        return Vec::new();
    }

    a.iter().filter(|item| b.contains(item)).cloned().collect()
}

/// Emit a non-fatal diagnostic.
///
/// Routed through the `log` facade; when no logger is installed the message
/// is dropped.
pub fn warn<S: AsRef<str>>(message: S) {
    log::warn!("{}", message.as_ref());
}
