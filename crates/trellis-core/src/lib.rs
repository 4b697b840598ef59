//! Runtime for Trellis node types: node values, the repository seam, and
//! the edge operations generated from each type's association table.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod edge;
pub mod error;
pub mod id;
pub mod model;
pub mod node;
pub mod repo;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or test helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        edge::{Accessors, ManyEdge, OneEdge, Resolved, Targets},
        id::{NodeId, RepoHandle},
        model::NodeModel,
        node::{EdgeValue, FieldValue, Node},
        repo::Repository,
    };
}
