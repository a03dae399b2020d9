//! Sort configuration.
//!
//! Loaded from TOML, e.g.
//!
//! ```toml
//! default_sort = "Name, Id DESC"
//! unknown_field = "abort"
//! text_order = "case_insensitive"
//! max_page_size = 100
//! ```

use crate::{error::ConfigError, order::OrderOptions, value::TextOrder};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

///
/// UnknownFieldPolicy
///
/// What ordering does when a requested field does not resolve.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownFieldPolicy {
    /// Any unresolvable key disables ordering by every key.
    #[default]
    Abort,
    /// Unresolvable keys are dropped; the remaining keys still apply.
    SkipKey,
}

///
/// SortConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    /// Expression used when a request carries no sort expression.
    pub default_sort: Option<String>,
    pub unknown_field: UnknownFieldPolicy,
    pub text_order: TextOrder,
    /// Upper bound on requested page sizes; `None` leaves sizes as requested.
    pub max_page_size: Option<usize>,
}

impl SortConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_page_size == Some(0) {
            return Err(ConfigError::Invalid(
                "max_page_size must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    #[must_use]
    pub const fn order_options(&self) -> OrderOptions {
        OrderOptions {
            unknown_field: self.unknown_field,
            text_order: self.text_order,
        }
    }

    #[must_use]
    pub fn default_sort(&self) -> &str {
        self.default_sort.as_deref().unwrap_or_default()
    }
}

impl FromStr for SortConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml_str(s)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = SortConfig::from_toml_str("").unwrap();

        assert_eq!(config, SortConfig::default());
        assert_eq!(config.unknown_field, UnknownFieldPolicy::Abort);
        assert_eq!(config.default_sort(), "");
        assert_eq!(config.text_order, TextOrder::CaseInsensitive);
    }

    #[test]
    fn parses_every_field() {
        let config: SortConfig = r#"
            default_sort = "Name, Id DESC"
            unknown_field = "skip_key"
            text_order = "ordinal"
            max_page_size = 100
        "#
        .parse()
        .unwrap();

        assert_eq!(config.default_sort(), "Name, Id DESC");
        assert_eq!(config.unknown_field, UnknownFieldPolicy::SkipKey);
        assert_eq!(config.text_order, TextOrder::Ordinal);
        assert_eq!(config.max_page_size, Some(100));
        assert_eq!(
            config.order_options(),
            OrderOptions {
                unknown_field: UnknownFieldPolicy::SkipKey,
                text_order: TextOrder::Ordinal,
            }
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = SortConfig::from_toml_str("sort_default = \"Name\"").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(SortConfig::from_toml_str("unknown_field = \"ignore\"").is_err());
    }

    #[test]
    fn rejects_zero_max_page_size() {
        let err = SortConfig::from_toml_str("max_page_size = 0").unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
