//! Node type definitions: declaration, validation, record layout, and the
//! frozen descriptor tables the rest of the graph engine reads.

pub mod build;
pub mod config;
pub mod error;
pub mod layout;
pub mod node;
pub mod types;
pub mod validate;
pub mod value;

/// Maximum length for type identifiers, path segments included.
pub const MAX_TYPE_NAME_LEN: usize = 128;

/// Maximum length for field identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        build::NodeTypeBuilder,
        config::DefinitionConfig,
        error::DefinitionError,
        layout::{FieldSlot, RecordLayout},
        node::*,
        types::{Cardinality, IndexKind, MetaField},
        value::{Options, Value},
    };
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Definition(#[from] error::DefinitionError),

    #[error(transparent)]
    Config(#[from] error::ConfigError),
}
