//! # Lumen
//!
//! Query-time field configuration and tokenization for client-side
//! full-text search.
//!
//! ## Features
//!
//! - Per-field boosting, boolean models, and term expansion resolved from
//!   possibly-malformed JSON
//! - Tokenization with a configurable separator and punctuation stripping
//! - Instance-owned tokenizer state; no process-wide globals
//!
//! Indexing, scoring, stemming, and stop-word filtering live in the
//! consuming search engine.

pub mod analysis;
pub mod config;
pub mod error;
pub mod util;

// Re-exports for the public API
pub use analysis::{Separator, TextInput, Tokenizer, TokenizerConfig};
pub use config::{BoolMode, ConfigWarning, Configuration, FieldConfig};
pub use error::{LumenError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
