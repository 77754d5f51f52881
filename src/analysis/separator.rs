//! Token boundary patterns.
//!
//! A [`Separator`] is either the library default (`[\s\-]+`) or a custom
//! regular expression. Only the default separator enables the
//! punctuation-stripping pass in the tokenizer, so the distinction is kept
//! as an explicit variant rather than by comparing pattern text.

use lazy_static::lazy_static;
use regex::Regex;

/// Pattern text of the default separator: runs of whitespace and hyphens.
pub const DEFAULT_SEPARATOR_PATTERN: &str = r"[\s\-]+";

lazy_static! {
    static ref DEFAULT_SEPARATOR: Regex =
        Regex::new(DEFAULT_SEPARATOR_PATTERN).expect("default separator pattern should be valid");
}

/// The pattern used to split normalized text into tokens.
#[derive(Debug, Clone, Default)]
pub enum Separator {
    /// The library default; turns on punctuation stripping.
    #[default]
    Default,
    /// A caller-supplied pattern; punctuation stripping is skipped.
    Custom(Regex),
}

impl Separator {
    /// Compile `pattern` into a custom separator.
    pub fn custom(pattern: &str) -> crate::error::Result<Self> {
        Ok(Separator::Custom(Regex::new(pattern)?))
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Separator::Default)
    }

    /// The compiled pattern backing this separator.
    pub fn as_regex(&self) -> &Regex {
        match self {
            Separator::Default => &*DEFAULT_SEPARATOR,
            Separator::Custom(regex) => regex,
        }
    }

    /// The pattern source text.
    pub fn as_str(&self) -> &str {
        self.as_regex().as_str()
    }
}

impl From<Regex> for Separator {
    fn from(regex: Regex) -> Self {
        Separator::Custom(regex)
    }
}
