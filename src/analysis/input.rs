//! Input shapes accepted by the tokenizer.
//!
//! A tokenizer call takes either one text-like value or a sequence of them.
//! [`TextInput`] normalizes both into an ordered list of entries, keeping
//! null entries around so the tokenizer can drop them explicitly.

use crate::util::text::TextValue;

/// Ordered entries handed to [`super::tokenizer::Tokenizer::tokenize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    entries: Vec<Option<String>>,
}

impl TextInput {
    /// An input with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an input from a sequence of text-like values.
    pub fn from_values<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: TextValue,
    {
        TextInput {
            entries: values.into_iter().map(|v| v.as_text()).collect(),
        }
    }

    fn single<T: TextValue + ?Sized>(value: &T) -> Self {
        TextInput {
            entries: vec![value.as_text()],
        }
    }

    /// Entries that are present, in input order.
    pub fn present(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|entry| entry.as_deref())
    }

    /// Number of entries, including null ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&str> for TextInput {
    fn from(value: &str) -> Self {
        TextInput::single(value)
    }
}

impl From<String> for TextInput {
    fn from(value: String) -> Self {
        TextInput {
            entries: vec![Some(value)],
        }
    }
}

impl From<&String> for TextInput {
    fn from(value: &String) -> Self {
        TextInput::single(value)
    }
}

impl<T: TextValue> From<Option<T>> for TextInput {
    fn from(value: Option<T>) -> Self {
        TextInput::single(&value)
    }
}

impl<T: TextValue> From<Vec<T>> for TextInput {
    fn from(values: Vec<T>) -> Self {
        TextInput::from_values(values)
    }
}

impl<T: TextValue> From<&[T]> for TextInput {
    fn from(values: &[T]) -> Self {
        TextInput::from_values(values)
    }
}

impl From<&serde_json::Value> for TextInput {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Array(items) => TextInput::from_values(items),
            other => TextInput::single(other),
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for TextInput {
                fn from(value: $ty) -> Self {
                    TextInput::single(&value)
                }
            }
        )*
    };
}

impl_from_scalar!(bool, char, i32, i64, u32, u64, usize, f32, f64);
