#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    sync::Arc,
};
use thiserror::Error as ThisError;
use trellis::prelude::*;

///
/// NotFound
///

#[derive(Debug, Eq, PartialEq, ThisError)]
#[error("{target} {id} not found")]
pub struct NotFound {
    pub target: String,
    pub id: NodeId,
}

///
/// StubRepo
///
/// In-memory store keyed by id. Counts calls so tests can assert that
/// nil edges and mutators never reach it.
///

#[derive(Default)]
pub struct StubRepo {
    nodes: RefCell<HashMap<NodeId, Node>>,
    next_id: Cell<u128>,
    calls: Cell<usize>,
}

impl StubRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&self, node: Node) -> Node {
        let id = match node.id() {
            Some(id) => id,
            None => {
                self.next_id.set(self.next_id.get() + 1);
                NodeId::from_u128(self.next_id.get())
            }
        };

        let node = node.with_id(id).attach(self.handle());
        self.nodes.borrow_mut().insert(id, node.clone());

        node
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn lookup(&self, target: &str, id: NodeId) -> Result<Node, NotFound> {
        self.nodes
            .borrow()
            .get(&id)
            .filter(|n| n.type_name() == target)
            .cloned()
            .ok_or_else(|| NotFound {
                target: target.to_string(),
                id,
            })
    }
}

impl Repository for StubRepo {
    type Error = NotFound;

    fn handle(&self) -> RepoHandle {
        RepoHandle::new("stub")
    }

    fn fetch(&self, target: &str, id: NodeId) -> Result<Node, NotFound> {
        self.calls.set(self.calls.get() + 1);
        self.lookup(target, id)
    }

    fn fetch_many(&self, target: &str, ids: &[NodeId]) -> Result<Vec<Node>, NotFound> {
        self.calls.set(self.calls.get() + 1);
        ids.iter().map(|&id| self.lookup(target, id)).collect()
    }
}

///
/// Library
///
/// Author / Book / Publisher, declared through the public builder.
///

pub struct Library {
    pub author: NodeModel,
    pub book: NodeModel,
    pub publisher: NodeModel,
}

impl Library {
    pub fn declare() -> Result<Self, trellis::Error> {
        let author = NodeType::builder("Author")?
            .property("name", Options::new().with("index", Value::symbol("unique")))?
            .has_edges(
                "author_of",
                "Book",
                Options::new().with("reflect", Value::symbol("authored_by")),
            )?
            .build();

        let book = NodeType::builder("Book")?
            .property("title", Options::new().with("index", Value::symbol("unique")))?
            .property("pages", Options::new().with("default", 0i64))?
            .has_edge(
                "authored_by",
                "Author",
                Options::new().with("reflect", Value::symbol("author_of")),
            )?
            .has_edges(
                "published_by",
                "Publisher",
                Options::new().with("reflect", Value::symbol("publisher_of")),
            )?
            .build();

        let publisher = NodeType::builder("Publisher")?
            .property("name", Options::new().with("index", true))?
            .has_edges(
                "publisher_of",
                "Book",
                Options::new().with("reflect", Value::symbol("published_by")),
            )?
            .build();

        Ok(Self {
            author: NodeModel::new(author),
            book: NodeModel::from_shared(Arc::new(book)),
            publisher: publisher.into(),
        })
    }
}
