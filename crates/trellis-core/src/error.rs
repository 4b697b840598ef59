use crate::edge::OperationKind;
use thiserror::Error as ThisError;

///
/// AccessError
///
/// Local misuse of a node value or a generated operation. Raised without
/// touching the repository.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum AccessError {
    #[error("operation for '{expected}' applied to a '{found}' node")]
    TypeMismatch { expected: String, found: String },

    #[error("'{node_type}' has no field '{field}'")]
    UnknownField { node_type: String, field: String },

    #[error("'{node_type}.{field}' is not a property")]
    NotAProperty { node_type: String, field: String },

    #[error("'{node_type}' has no operation '{op}'")]
    UnknownOperation { node_type: String, op: String },

    #[error("'{node_type}.{association}' holds a single edge, got {count} targets")]
    CardinalityMismatch {
        node_type: String,
        association: String,
        count: usize,
    },

    #[error("'{op}' is not supported on '{node_type}.{association}'")]
    UnsupportedOperation {
        node_type: String,
        association: String,
        op: OperationKind,
    },

    #[error("'{op}' on '{node_type}.{association}' takes no targets")]
    UnexpectedTargets {
        node_type: String,
        association: String,
        op: OperationKind,
    },

    #[error("'{node_type}.{association}' target of type '{target_type}' has no id")]
    TargetUnpersisted {
        node_type: String,
        association: String,
        target_type: String,
    },

    #[error("'{node_type}.{association}' expects '{expected}' targets, got '{found}'")]
    TargetTypeMismatch {
        node_type: String,
        association: String,
        expected: String,
        found: String,
    },
}

///
/// GetError
///
/// Getter failure. Repository errors pass through untouched.
///

#[derive(Debug, ThisError)]
pub enum GetError<E> {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Repository(E),
}

impl<E> GetError<E> {
    /// The repository's own error, if that is what failed.
    pub fn into_repository(self) -> Option<E> {
        match self {
            Self::Repository(e) => Some(e),
            Self::Access(_) => None,
        }
    }
}
