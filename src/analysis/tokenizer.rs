//! Separator-driven tokenizer.
//!
//! Text is lower-cased, optionally stripped of punctuation, then split on
//! the active [`Separator`]. Each [`Tokenizer`] owns its separator, so
//! changing it only affects calls made through that instance.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::input::TextInput;
use crate::analysis::separator::Separator;
use crate::error::{LumenError, Result};

lazy_static! {
    /// General punctuation, supplemental punctuation, and ASCII punctuation.
    static ref PUNCTUATION: Regex = Regex::new(
        r##"[\x{2000}-\x{206F}\x{2E00}-\x{2E7F}\\'!"#$%&()*+,\-./:;<=>?@\[\]^_`{|}~]"##
    )
    .expect("punctuation pattern should be valid");
}

/// Settings for building a [`Tokenizer`] from host configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Custom separator pattern. `None` keeps the default separator.
    #[serde(default)]
    pub separator: Option<String>,
}

/// Splits text into lower-cased tokens.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    separator: Separator,
}

impl Tokenizer {
    /// Create a tokenizer using the default separator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer starting with a custom separator.
    pub fn with_separator(separator: Regex) -> Self {
        Tokenizer {
            separator: Separator::Custom(separator),
        }
    }

    pub fn from_config(config: &TokenizerConfig) -> Result<Self> {
        let mut tokenizer = Tokenizer::new();
        if let Some(pattern) = &config.separator {
            tokenizer.set_separator_pattern(pattern)?;
        }
        Ok(tokenizer)
    }

    /// Tokenize a single value or a sequence of values.
    ///
    /// Null entries are skipped. Tokens from every entry are concatenated in
    /// input order; empty pieces are dropped.
    pub fn tokenize<I: Into<TextInput>>(&self, input: I) -> Vec<String> {
        let input = input.into();
        let strip_punctuation = self.separator.is_default();
        let separator = self.separator.as_regex();

        let mut tokens = Vec::new();
        for entry in input.present() {
            let lowered = entry.to_lowercase();
            let text: Cow<'_, str> = if strip_punctuation {
                PUNCTUATION.replace_all(&lowered, " ")
            } else {
                Cow::Borrowed(lowered.as_str())
            };

            tokens.extend(
                separator
                    .split(&text)
                    .filter(|piece| !piece.is_empty())
                    .map(str::to_owned),
            );
        }

        tokens
    }

    /// Replace the active separator with a custom pattern.
    ///
    /// Punctuation stripping is disabled while a custom separator is active,
    /// even when its pattern text matches the default.
    pub fn set_separator(&mut self, separator: Regex) {
        log::debug!("tokenizer separator set to {:?}", separator.as_str());
        self.separator = Separator::Custom(separator);
    }

    /// Replace the active separator if one is given; `None` is ignored.
    pub fn try_set_separator(&mut self, separator: Option<Regex>) {
        if let Some(separator) = separator {
            self.set_separator(separator);
        }
    }

    /// Compile `pattern` and install it as the separator.
    ///
    /// On an invalid pattern the previous separator stays in effect.
    pub fn set_separator_pattern(&mut self, pattern: &str) -> Result<()> {
        let regex = Regex::new(pattern).map_err(|e| {
            LumenError::invalid_argument(format!("Invalid separator pattern: {e}"))
        })?;
        self.set_separator(regex);
        Ok(())
    }

    /// Restore the default separator, re-enabling punctuation stripping.
    pub fn reset_separator(&mut self) {
        log::debug!("tokenizer separator reset to default");
        self.separator = Separator::Default;
    }

    pub fn separator(&self) -> &Separator {
        &self.separator
    }
}
