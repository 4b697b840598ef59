//! Repository boundary.
//!
//! The only way this crate reaches stored data. Getters call it; mutators
//! never do.

use crate::{
    id::{NodeId, RepoHandle},
    node::Node,
};

///
/// Repository
///
/// Resolves identifiers to live node values. Not-found handling and any
/// retry policy belong to the implementation; a call either returns a
/// complete result or fails.
///

pub trait Repository {
    type Error: std::error::Error + 'static;

    fn handle(&self) -> RepoHandle;

    fn fetch(&self, target: &str, id: NodeId) -> Result<Node, Self::Error>;

    /// Resolve every id, in order. Fails if any id cannot be resolved.
    fn fetch_many(&self, target: &str, ids: &[NodeId]) -> Result<Vec<Node>, Self::Error>;
}

impl<R: Repository + ?Sized> Repository for &R {
    type Error = R::Error;

    fn handle(&self) -> RepoHandle {
        (**self).handle()
    }

    fn fetch(&self, target: &str, id: NodeId) -> Result<Node, Self::Error> {
        (**self).fetch(target, id)
    }

    fn fetch_many(&self, target: &str, ids: &[NodeId]) -> Result<Vec<Node>, Self::Error> {
        (**self).fetch_many(target, ids)
    }
}
