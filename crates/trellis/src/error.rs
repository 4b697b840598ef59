use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use trellis_core::error::{AccessError, GetError};
use trellis_schema::error::{ConfigError, DefinitionError};

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_definition(&self) -> bool {
        matches!(self.kind, ErrorKind::Definition(_))
    }
}

impl From<DefinitionError> for Error {
    fn from(err: DefinitionError) -> Self {
        let kind = match err {
            DefinitionError::UnknownOption { .. } | DefinitionError::InvalidOption { .. } => {
                DefinitionErrorKind::Option
            }
            DefinitionError::InvalidTargetType { .. }
            | DefinitionError::InvalidTypeName { .. }
            | DefinitionError::InvalidFieldName { .. } => DefinitionErrorKind::Name,
            DefinitionError::DuplicateField { .. } => DefinitionErrorKind::AlreadySet,
            DefinitionError::MultiplePrimary { .. } => DefinitionErrorKind::Index,
        };

        Self::new(
            ErrorKind::Definition(kind),
            ErrorOrigin::Schema,
            err.to_string(),
        )
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorKind::Config, ErrorOrigin::Config, err.to_string())
    }
}

impl From<trellis_schema::Error> for Error {
    fn from(err: trellis_schema::Error) -> Self {
        match err {
            trellis_schema::Error::Definition(err) => err.into(),
            trellis_schema::Error::Config(err) => err.into(),
        }
    }
}

impl From<AccessError> for Error {
    fn from(err: AccessError) -> Self {
        let kind = match err {
            AccessError::TypeMismatch { .. }
            | AccessError::TargetTypeMismatch { .. }
            | AccessError::TargetUnpersisted { .. } => AccessErrorKind::InvalidTarget,
            AccessError::UnknownField { .. }
            | AccessError::NotAProperty { .. }
            | AccessError::UnknownOperation { .. } => AccessErrorKind::Unknown,
            AccessError::CardinalityMismatch { .. }
            | AccessError::UnsupportedOperation { .. }
            | AccessError::UnexpectedTargets { .. } => AccessErrorKind::Unsupported,
        };

        Self::new(ErrorKind::Access(kind), ErrorOrigin::Accessor, err.to_string())
    }
}

impl<E: std::error::Error> From<GetError<E>> for Error {
    fn from(err: GetError<E>) -> Self {
        match err {
            GetError::Access(err) => err.into(),
            GetError::Repository(err) => Self::new(
                ErrorKind::Repository,
                ErrorOrigin::Repository,
                err.to_string(),
            ),
        }
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    Definition(DefinitionErrorKind),
    Access(AccessErrorKind),
    Config,

    /// Raised by the repository; the message is the repository's own.
    Repository,
}

///
/// DefinitionErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum DefinitionErrorKind {
    /// Unrecognized option key or malformed option value.
    Option,

    /// Type or field identifier is not plausible.
    Name,

    /// Field name declared twice on the same type.
    AlreadySet,

    /// Index declaration conflicts with an earlier one.
    Index,
}

///
/// AccessErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum AccessErrorKind {
    /// Node or target is of the wrong type, or has no id.
    InvalidTarget,

    /// No such field or operation on the node type.
    Unknown,

    /// Operation does not fit the association's cardinality.
    Unsupported,
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Schema,
    Accessor,
    Config,
    Repository,
}

///
/// TESTS
///
