//! Strict intermediate form of user-supplied configuration text.
//!
//! Parsing yields a tagged [`Result`]; the resolver decides what to do with
//! a failure. Falsy top-level values (`null`, `false`, `0`, `""`) count as
//! absent so that `{"bool": ""}` behaves like `{}`.

use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::config::field::{BoolMode, FieldConfig};
use crate::error::{LumenError, Result};

/// Top-level user configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    #[serde(rename = "bool", deserialize_with = "falsy_as_none")]
    pub bool_mode: Option<BoolMode>,
    #[serde(
        rename = "fieldBool",
        alias = "field_bool",
        deserialize_with = "falsy_as_none"
    )]
    pub field_bool: Option<BoolMode>,
    #[serde(deserialize_with = "falsy_as_none")]
    pub expand: Option<bool>,
    /// Raw per-field settings, keyed by field name.
    ///
    /// Entries stay unparsed until the resolver knows which names belong to
    /// the index, so a malformed entry for an unknown field is only dropped.
    pub fields: Option<BTreeMap<String, Value>>,
}

/// Settings the user gave for a single field.
///
/// A field-level `fieldBool` is not supported and is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserFieldConfig {
    pub boost: Option<f64>,
    #[serde(rename = "bool", deserialize_with = "falsy_as_none")]
    pub bool_mode: Option<BoolMode>,
    pub expand: Option<bool>,
}

impl UserConfig {
    /// Parse configuration text.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Interpret an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(LumenError::config_parse(
                "configuration must be a JSON object",
            ));
        }

        Ok(UserConfig::deserialize(value)?)
    }

    /// Global settings, with hardcoded defaults for anything not given.
    pub fn globals(&self) -> FieldConfig {
        FieldConfig {
            boost: FieldConfig::DEFAULT_BOOST,
            bool_mode: self.bool_mode.unwrap_or_default(),
            field_bool: self.field_bool.unwrap_or_default(),
            expand: self.expand.unwrap_or(false),
        }
    }
}

impl UserFieldConfig {
    /// Interpret the raw entry given for field `name`.
    pub fn from_value(name: &str, value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(LumenError::config_parse(format!(
                "settings for field '{name}' must be a JSON object"
            )));
        }

        let field = UserFieldConfig::deserialize(value.clone())?;
        if let Some(boost) = field.boost {
            if !boost.is_finite() || boost < 0.0 {
                return Err(LumenError::config_parse(format!(
                    "boost for field '{name}' must be a non-negative number, got {boost}"
                )));
            }
        }
        Ok(field)
    }

    /// Layer this field's settings over `global`.
    ///
    /// `fieldBool` always comes from `global`.
    pub fn resolve(&self, global: &FieldConfig) -> FieldConfig {
        FieldConfig {
            boost: self.boost.unwrap_or(FieldConfig::DEFAULT_BOOST),
            bool_mode: self.bool_mode.unwrap_or(global.bool_mode),
            field_bool: global.field_bool,
            expand: self.expand.unwrap_or(global.expand),
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn falsy_as_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if is_falsy(&value) {
        return Ok(None);
    }
    T::deserialize(value).map(Some).map_err(D::Error::custom)
}
