//! Query-time search configuration.
//!
//! Users describe per-field boosting, boolean models, and term expansion as
//! JSON text. [`Configuration`] resolves that text against the index's
//! known fields, layering field-level settings over global ones over
//! defaults. Malformed input never fails resolution; it falls back to the
//! default configuration and records a [`ConfigWarning`].
//!
//! ```text
//! {
//!   "fields": {
//!     "title": {"boost": 2, "bool": "AND", "expand": true},
//!     "body": {"boost": 0}
//!   },
//!   "bool": "OR",
//!   "fieldBool": "OR",
//!   "expand": false
//! }
//! ```

pub mod field;
pub mod resolver;
pub mod user;

pub use field::{BoolMode, FieldConfig};
pub use resolver::{ConfigWarning, Configuration};
pub use user::{UserConfig, UserFieldConfig};
