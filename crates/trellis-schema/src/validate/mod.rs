//! Definition-time checks shared by property and association declarations.

pub mod naming;

use crate::{config::DefinitionConfig, error::DefinitionError, value::Options};

/// Option keys accepted by `property`.
pub const PROPERTY_OPTIONS: &[&str] = &["default", "index"];

/// Option keys accepted by `has_edge` and `has_edges`.
pub const ASSOCIATION_OPTIONS: &[&str] = &["reflect"];

/// Fail on the first option key outside `allowed`.
pub fn check_options(
    opts: &Options,
    allowed: &[&str],
    context: &str,
) -> Result<(), DefinitionError> {
    match opts.keys().find(|key| !allowed.contains(key)) {
        Some(key) => Err(DefinitionError::UnknownOption {
            context: context.to_string(),
            key: key.to_string(),
        }),
        None => Ok(()),
    }
}

/// Fail unless `target` looks like a type identifier.
///
/// Purely syntactic: the referenced type may not exist, or may not be a
/// node type at all.
pub fn check_type(
    target: &str,
    context: &str,
    config: &DefinitionConfig,
) -> Result<(), DefinitionError> {
    naming::validate_type_ident(target, config.max_type_name_len).map_err(|_| {
        DefinitionError::InvalidTargetType {
            context: context.to_string(),
            target: target.to_string(),
        }
    })
}

/// Fail unless `name` is a usable field name.
pub fn check_field_name(
    name: &str,
    context: &str,
    config: &DefinitionConfig,
) -> Result<(), DefinitionError> {
    naming::validate_field_ident(name, config.max_field_name_len).map_err(|reason| {
        DefinitionError::InvalidFieldName {
            context: context.to_string(),
            name: name.to_string(),
            reason,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn check_options_names_the_offending_key() {
        let opts = Options::new()
            .with("index", true)
            .with("unique", true)
            .with("also_bad", 1i64);

        let err = check_options(&opts, PROPERTY_OPTIONS, "Book.title").unwrap_err();

        assert_eq!(
            err,
            DefinitionError::UnknownOption {
                context: "Book.title".to_string(),
                key: "unique".to_string(),
            }
        );
        assert!(err.to_string().contains("'unique'"));
    }

    #[test]
    fn check_options_accepts_allowed_and_empty() {
        let opts = Options::new().with("reflect", Value::symbol("author_of"));

        assert!(check_options(&opts, ASSOCIATION_OPTIONS, "Book.authored_by").is_ok());
        assert!(check_options(&Options::new(), &[], "Book.x").is_ok());
    }

    #[test]
    fn check_type_is_syntactic_only() {
        let config = DefinitionConfig::default();

        // never declared anywhere, still plausible
        assert!(check_type("Nowhere::Ghost", "Book.ghost", &config).is_ok());

        let err = check_type("ghost", "Book.ghost", &config).unwrap_err();
        assert!(matches!(err, DefinitionError::InvalidTargetType { .. }));
    }
}
