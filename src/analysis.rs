//! Text analysis for Lumen.
//!
//! Turns raw text into ordered, normalized tokens ready for an inverted
//! index or a query-term extractor.
//!
//! ```text
//! Text → lower-case → punctuation strip (default separator only) → split → Tokens
//! ```
//!
//! # Examples
//!
//! ```
//! use lumen::analysis::Tokenizer;
//!
//! let tokenizer = Tokenizer::new();
//! assert_eq!(tokenizer.tokenize("Hello, World!"), vec!["hello", "world"]);
//! ```

pub mod input;
pub mod separator;
pub mod tokenizer;

pub use input::TextInput;
pub use separator::{DEFAULT_SEPARATOR_PATTERN, Separator};
pub use tokenizer::{Tokenizer, TokenizerConfig};
