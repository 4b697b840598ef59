pub(crate) mod fixtures;

use crate::{
    id::{NodeId, RepoHandle},
    node::Node,
    repo::Repository,
};
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};
use thiserror::Error as ThisError;
use trellis_schema::validate::naming::base_name;

///
/// MissingNode
///

#[derive(Debug, Eq, PartialEq, ThisError)]
#[error("{target} {id} not found")]
pub(crate) struct MissingNode {
    pub(crate) target: String,
    pub(crate) id: NodeId,
}

///
/// MemoryRepo
///
/// Test-only repository: hands stored nodes back unchanged and counts calls.
///

#[derive(Default)]
pub(crate) struct MemoryRepo {
    nodes: RefCell<HashMap<NodeId, Node>>,
    next_id: Cell<u128>,
    pub(crate) fetch_calls: Cell<usize>,
    pub(crate) fetch_many_calls: Cell<usize>,
}

impl MemoryRepo {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Assign an id, attach, and store.
    pub(crate) fn insert(&self, node: Node) -> Node {
        let n = self.next_id.get() + 1;
        self.next_id.set(n);

        let node = node.with_id(NodeId::from_u128(n)).attach(self.handle());
        self.nodes
            .borrow_mut()
            .insert(NodeId::from_u128(n), node.clone());

        node
    }

    pub(crate) fn calls(&self) -> usize {
        self.fetch_calls.get() + self.fetch_many_calls.get()
    }
}

impl Repository for MemoryRepo {
    type Error = MissingNode;

    fn handle(&self) -> RepoHandle {
        RepoHandle::new("memory")
    }

    fn fetch(&self, target: &str, id: NodeId) -> Result<Node, MissingNode> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);

        self.nodes
            .borrow()
            .get(&id)
            .filter(|node| base_name(node.type_name()) == base_name(target))
            .cloned()
            .ok_or_else(|| MissingNode {
                target: target.to_string(),
                id,
            })
    }

    fn fetch_many(&self, target: &str, ids: &[NodeId]) -> Result<Vec<Node>, MissingNode> {
        self.fetch_many_calls.set(self.fetch_many_calls.get() + 1);

        let nodes = self.nodes.borrow();
        ids.iter()
            .map(|id| {
                nodes
                    .get(id)
                    .filter(|node| base_name(node.type_name()) == base_name(target))
                    .cloned()
                    .ok_or_else(|| MissingNode {
                        target: target.to_string(),
                        id: *id,
                    })
            })
            .collect()
    }
}
