use thiserror::Error as ThisError;

///
/// DefinitionError
///
/// Raised while a node type is being declared. Every variant is fatal to
/// the type under construction.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DefinitionError {
    #[error("{context}: unknown option '{key}'")]
    UnknownOption { context: String, key: String },

    #[error("{context}: invalid value for option '{key}': {reason}")]
    InvalidOption {
        context: String,
        key: String,
        reason: String,
    },

    #[error("{context}: '{target}' is not a valid type reference")]
    InvalidTargetType { context: String, target: String },

    #[error("invalid type name '{name}': {reason}")]
    InvalidTypeName { name: String, reason: String },

    #[error("{context}: invalid field name '{name}': {reason}")]
    InvalidFieldName {
        context: String,
        name: String,
        reason: String,
    },

    #[error("{context}: field '{name}' already set")]
    DuplicateField { context: String, name: String },

    #[error("{context}: primary index already declared on '{first}', cannot add '{second}'")]
    MultiplePrimary {
        context: String,
        first: String,
        second: String,
    },
}

impl DefinitionError {
    /// Name of the field the error is about, when there is one.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidFieldName { name, .. } | Self::DuplicateField { name, .. } => Some(name),
            Self::MultiplePrimary { second, .. } => Some(second),
            _ => None,
        }
    }
}

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config value out of range: {0}")]
    OutOfRange(String),
}
