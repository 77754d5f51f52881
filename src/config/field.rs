use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::LumenError;

/// How multiple matches combine: every one required, or any one enough.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum BoolMode {
    #[serde(rename = "AND")]
    And,
    #[default]
    #[serde(rename = "OR")]
    Or,
}

impl BoolMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoolMode::And => "AND",
            BoolMode::Or => "OR",
        }
    }
}

impl fmt::Display for BoolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoolMode {
    type Err = LumenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("AND") {
            Ok(BoolMode::And)
        } else if s.eq_ignore_ascii_case("OR") {
            Ok(BoolMode::Or)
        } else {
            Err(LumenError::config_parse(format!(
                "unknown boolean model '{s}', expected AND or OR"
            )))
        }
    }
}

impl<'de> Deserialize<'de> for BoolMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// How one field participates in query matching.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldConfig {
    /// Relative importance in scoring. `0` keeps the field tokenized but
    /// excludes it from relevance.
    pub boost: f64,
    /// Whether all query terms must match within this field.
    #[serde(rename = "bool")]
    pub bool_mode: BoolMode,
    /// Whether a match is required in every configured field.
    #[serde(rename = "fieldBool")]
    pub field_bool: BoolMode,
    /// Whether query terms are expanded (e.g. by prefix) for this field.
    pub expand: bool,
}

impl FieldConfig {
    pub const DEFAULT_BOOST: f64 = 1.0;
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            boost: Self::DEFAULT_BOOST,
            bool_mode: BoolMode::Or,
            field_bool: BoolMode::Or,
            expand: false,
        }
    }
}
