//! ## Crate layout
//! - `core`: node values, the repository contract, and generated edge
//!   operations.
//! - `error`: public error taxonomy shared by every layer.
//! - `schema`: node type declaration, validation, record layout, and
//!   introspection.
//!
//! The `prelude` module carries the vocabulary needed to declare a node type
//! and work with its nodes.

pub use trellis_core as core;
pub use trellis_schema as schema;

pub mod error;

pub use error::Error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::prelude::*;
    pub use crate::schema::prelude::*;
}
