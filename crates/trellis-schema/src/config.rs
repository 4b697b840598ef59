use crate::{MAX_FIELD_NAME_LEN, MAX_TYPE_NAME_LEN, error::ConfigError};
use serde::Deserialize;

///
/// DefinitionConfig
///
/// Limits and opt-in checks applied while node types are declared.
///
/// ```toml
/// max_type_name_len = 96
/// enforce_single_primary = true
/// ```
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DefinitionConfig {
    pub max_type_name_len: usize,
    pub max_field_name_len: usize,

    /// Reject a second `index: primary` property on one type.
    pub enforce_single_primary: bool,
}

impl DefinitionConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.check()?;

        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.max_type_name_len == 0 {
            return Err(ConfigError::OutOfRange(
                "max_type_name_len must be positive".to_string(),
            ));
        }
        if self.max_field_name_len == 0 {
            return Err(ConfigError::OutOfRange(
                "max_field_name_len must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for DefinitionConfig {
    fn default() -> Self {
        Self {
            max_type_name_len: MAX_TYPE_NAME_LEN,
            max_field_name_len: MAX_FIELD_NAME_LEN,
            enforce_single_primary: false,
        }
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
        let config = DefinitionConfig::from_toml_str("").unwrap();

        assert_eq!(config, DefinitionConfig::default());
        assert!(!config.enforce_single_primary);
    }

    #[test]
    fn partial_document_overrides_only_named_keys() {
        let config = DefinitionConfig::from_toml_str(
            "max_field_name_len = 16\nenforce_single_primary = true\n",
        )
        .unwrap();

        assert_eq!(config.max_field_name_len, 16);
        assert_eq!(config.max_type_name_len, MAX_TYPE_NAME_LEN);
        assert!(config.enforce_single_primary);
    }

    #[test]
    fn unknown_keys_and_zero_limits_are_rejected() {
        assert!(matches!(
            DefinitionConfig::from_toml_str("max_depth = 3"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            DefinitionConfig::from_toml_str("max_type_name_len = 0"),
            Err(ConfigError::OutOfRange(_))
        ));
    }
}
