//! Resolution of per-field search configuration.

use std::collections::HashMap;
use std::fmt;

use ahash::AHashSet;
use serde::Serialize;

use crate::config::field::FieldConfig;
use crate::config::user::{UserConfig, UserFieldConfig};
use crate::error::{LumenError, Result};
use crate::util::text;

/// A non-fatal problem found while resolving a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The configuration text could not be used; defaults were applied.
    ParseFailure(String),
    /// A configured field is not one of the index's fields and was dropped.
    UnknownField(String),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::ParseFailure(reason) => write!(
                f,
                "user configuration parse failed, will use default configuration: {reason}"
            ),
            ConfigWarning::UnknownField(name) => write!(
                f,
                "field name '{name}' in user configuration not found in index instance fields"
            ),
        }
    }
}

/// Resolved query-time configuration: one [`FieldConfig`] per known field.
///
/// Precedence for `bool` and `expand` is field-level, then global, then the
/// hardcoded default. `fieldBool` only has a global setting. `boost` is
/// field-level or `1`.
///
/// # Examples
///
/// ```
/// use lumen::config::{BoolMode, Configuration};
///
/// let config = Configuration::resolve(
///     Some(r#"{"fields": {"title": {"boost": 2}}, "bool": "AND"}"#),
///     Some(["title", "body"]),
/// )
/// .unwrap();
///
/// assert_eq!(config.field("title").unwrap().boost, 2.0);
/// assert_eq!(config.field("body").unwrap().bool_mode, BoolMode::And);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Configuration {
    config: HashMap<String, FieldConfig>,
    #[serde(skip)]
    warnings: Vec<ConfigWarning>,
}

impl Configuration {
    /// Resolve `config` text against the index's known `fields`.
    ///
    /// Unparseable or absent text falls back to the default configuration
    /// with a warning. Fails only when `fields` is `None`.
    pub fn resolve<I, S>(config: Option<&str>, fields: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut configuration = Configuration::default();
        configuration.rebuild(config, fields)?;
        Ok(configuration)
    }

    /// The default configuration for `fields`, without any user input.
    pub fn default_for<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut configuration = Configuration::default();
        configuration.build_default_config(fields);
        configuration
    }

    /// Re-resolve in place, discarding the previous mapping and warnings.
    ///
    /// On `InvalidArgument` the previous state is left untouched.
    pub fn rebuild<I, S>(&mut self, config: Option<&str>, fields: Option<I>) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields: Vec<String> = fields
            .ok_or_else(|| LumenError::invalid_argument("fields should not be null"))?
            .into_iter()
            .map(|field| field.as_ref().to_owned())
            .collect();

        self.warnings.clear();

        let built = UserConfig::parse(config.unwrap_or(""))
            .and_then(|user| self.build_user_config(&user, &fields));
        if let Err(err) = built {
            self.warnings.clear();
            self.warn(ConfigWarning::ParseFailure(err.to_string()));
            self.build_default_config(&fields);
        }

        log::debug!(
            "resolved search configuration for {} fields with {} warnings",
            self.config.len(),
            self.warnings.len()
        );
        Ok(())
    }

    /// Give every field `{boost: 1, bool: OR, expand: false, fieldBool: OR}`.
    pub fn build_default_config<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reset();
        for field in fields {
            self.config
                .insert(field.as_ref().to_owned(), FieldConfig::default());
        }
    }

    /// Layer a parsed user configuration over the defaults for `fields`.
    ///
    /// Fields named by the user but unknown to the index are dropped with a
    /// warning, whatever their shape. Known fields the user did not name take
    /// the global settings. A malformed entry for a known field is an error.
    pub fn build_user_config<I, S>(&mut self, user: &UserConfig, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reset();

        let fields: Vec<S> = fields.into_iter().collect();
        let known: AHashSet<&str> = fields.iter().map(|field| field.as_ref()).collect();
        let global = user.globals();

        for (name, raw) in user.fields.iter().flatten() {
            if known.contains(name.as_str()) {
                let field = UserFieldConfig::from_value(name, raw)?;
                self.config.insert(name.clone(), field.resolve(&global));
            } else {
                self.warn(ConfigWarning::UnknownField(name.clone()));
            }
        }

        for field in &known {
            if !self.config.contains_key(*field) {
                self.config.insert((*field).to_owned(), global);
            }
        }
        Ok(())
    }

    /// The current mapping from field name to configuration.
    pub fn get(&self) -> &HashMap<String, FieldConfig> {
        &self.config
    }

    pub fn field(&self, name: &str) -> Option<&FieldConfig> {
        self.config.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldConfig)> {
        self.config.iter().map(|(name, config)| (name.as_str(), config))
    }

    /// Warnings raised by the most recent resolution.
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Clear the mapping.
    pub fn reset(&mut self) {
        self.config.clear();
    }

    pub fn len(&self) -> usize {
        self.config.len()
    }

    pub fn is_empty(&self) -> bool {
        self.config.is_empty()
    }

    fn warn(&mut self, warning: ConfigWarning) {
        text::warn(warning.to_string());
        self.warnings.push(warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::field::BoolMode;

    const FIELDS: [&str; 2] = ["title", "body"];

    #[test]
    fn test_missing_fields_is_invalid_argument() {
        let err = Configuration::resolve(Some("{}"), None::<Vec<&str>>).unwrap_err();
        assert!(matches!(err, LumenError::InvalidArgument(_)));
    }

    #[test]
    fn test_rebuild_error_keeps_state() {
        let mut config = Configuration::resolve(Some("{}"), Some(FIELDS)).unwrap();
        assert!(config.rebuild(Some("{}"), None::<Vec<&str>>).is_err());
        assert_eq!(config.len(), 2);
    }

    #[test]
    fn test_parse_failure_uses_defaults() {
        for text in [None, Some(""), Some("{bad"), Some("42")] {
            let config = Configuration::resolve(text, Some(FIELDS)).unwrap();
            assert_eq!(config.len(), 2);
            assert_eq!(config.field("title"), Some(&FieldConfig::default()));
            assert_eq!(config.field("body"), Some(&FieldConfig::default()));
            assert!(matches!(
                config.warnings(),
                [ConfigWarning::ParseFailure(_)]
            ));
        }
    }

    #[test]
    fn test_explicit_zero_boost() {
        let config = Configuration::resolve(
            Some(r#"{"fields": {"title": {"boost": 0}}}"#),
            Some(FIELDS),
        )
        .unwrap();

        assert_eq!(config.field("title").unwrap().boost, 0.0);
        assert_eq!(config.field("body"), Some(&FieldConfig::default()));
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn test_unknown_field_dropped() {
        let config = Configuration::resolve(
            Some(r#"{"fields": {"title": {"boost": 3}, "author": {"boost": 2}}}"#),
            Some(FIELDS),
        )
        .unwrap();

        assert!(config.field("author").is_none());
        assert_eq!(config.len(), 2);
        assert_eq!(
            config.warnings(),
            &[ConfigWarning::UnknownField("author".to_string())]
        );
    }

    #[test]
    fn test_malformed_known_field_falls_back() {
        let config = Configuration::resolve(
            Some(r#"{"fields": {"title": {"boost": -1}, "author": {}}, "bool": "AND"}"#),
            Some(FIELDS),
        )
        .unwrap();

        assert_eq!(config.field("title"), Some(&FieldConfig::default()));
        assert_eq!(config.field("body"), Some(&FieldConfig::default()));
        assert!(matches!(
            config.warnings(),
            [ConfigWarning::ParseFailure(_)]
        ));
    }

    #[test]
    fn test_globals_without_fields() {
        let config =
            Configuration::resolve(Some(r#"{"bool": "AND", "expand": true}"#), Some(FIELDS))
                .unwrap();

        let expected = FieldConfig {
            boost: 1.0,
            bool_mode: BoolMode::And,
            field_bool: BoolMode::Or,
            expand: true,
        };
        for (_, field) in config.fields() {
            assert_eq!(field, &expected);
        }
        assert_eq!(config.len(), 2);
    }

    #[test]
    fn test_field_overrides_global() {
        let config = Configuration::resolve(
            Some(
                r#"{
                    "fields": {
                        "title": {"boost": 2, "bool": "AND", "expand": false},
                        "body": {"boost": 1}
                    },
                    "bool": "OR",
                    "fieldBool": "AND",
                    "expand": true
                }"#,
            ),
            Some(FIELDS),
        )
        .unwrap();

        let title = config.field("title").unwrap();
        assert_eq!(title.boost, 2.0);
        assert_eq!(title.bool_mode, BoolMode::And);
        assert_eq!(title.field_bool, BoolMode::And);
        assert!(!title.expand);

        let body = config.field("body").unwrap();
        assert_eq!(body.bool_mode, BoolMode::Or);
        assert_eq!(body.field_bool, BoolMode::And);
        assert!(body.expand);
    }

    #[test]
    fn test_reset_and_get() {
        let mut config = Configuration::default_for(FIELDS);
        assert_eq!(config.get().len(), 2);

        config.reset();
        assert!(config.is_empty());
        assert!(config.get().is_empty());
    }

    #[test]
    fn test_rebuild_replaces_previous() {
        let mut config = Configuration::resolve(
            Some(r#"{"fields": {"stale": {}}}"#),
            Some(vec!["stale".to_string()]),
        )
        .unwrap();
        assert!(config.field("stale").is_some());

        config.rebuild(Some("{}"), Some(FIELDS)).unwrap();
        assert!(config.field("stale").is_none());
        assert!(config.warnings().is_empty());
        assert_eq!(config.len(), 2);
    }

    #[test]
    fn test_serialize() {
        let config = Configuration::resolve(
            Some(r#"{"fields": {"title": {"boost": 2}}}"#),
            Some(["title"]),
        )
        .unwrap();

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": {"boost": 2.0, "bool": "OR", "fieldBool": "OR", "expand": false}
            })
        );
    }
}
