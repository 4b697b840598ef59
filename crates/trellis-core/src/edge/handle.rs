use crate::{
    edge::{EdgeAccessor, Targets},
    error::{AccessError, GetError},
    node::Node,
    repo::Repository,
};

///
/// OneEdge
/// Single-cardinality view: getter, `set_`, `clear_`.
///

#[derive(Clone, Copy, Debug)]
pub struct OneEdge<'a> {
    edge: &'a EdgeAccessor,
}

impl<'a> OneEdge<'a> {
    pub(crate) const fn new(edge: &'a EdgeAccessor) -> Self {
        Self { edge }
    }

    #[must_use]
    pub const fn accessor(&self) -> &'a EdgeAccessor {
        self.edge
    }

    /// `None` for a nil edge, without calling the repository.
    pub fn get<R: Repository>(
        &self,
        repo: &R,
        node: &Node,
    ) -> Result<Option<Node>, GetError<R::Error>> {
        self.edge.get(repo, node).map(super::Resolved::into_option)
    }

    pub fn get_many<R: Repository>(
        &self,
        repo: &R,
        nodes: &[Node],
    ) -> Result<Vec<Node>, GetError<R::Error>> {
        self.edge.get_many(repo, nodes)
    }

    pub fn set(&self, node: Node, target: &Node) -> Result<Node, AccessError> {
        self.edge.set(node, target)
    }

    pub fn clear(&self, node: Node) -> Result<Node, AccessError> {
        self.edge.clear(node)
    }
}

///
/// ManyEdge
/// Multiple-cardinality view: getter, `add_`, `delete_`, `set_`, `clear_`.
///

#[derive(Clone, Copy, Debug)]
pub struct ManyEdge<'a> {
    edge: &'a EdgeAccessor,
}

impl<'a> ManyEdge<'a> {
    pub(crate) const fn new(edge: &'a EdgeAccessor) -> Self {
        Self { edge }
    }

    #[must_use]
    pub const fn accessor(&self) -> &'a EdgeAccessor {
        self.edge
    }

    pub fn get<R: Repository>(
        &self,
        repo: &R,
        node: &Node,
    ) -> Result<Vec<Node>, GetError<R::Error>> {
        self.edge.get(repo, node).map(super::Resolved::into_vec)
    }

    pub fn get_many<R: Repository>(
        &self,
        repo: &R,
        nodes: &[Node],
    ) -> Result<Vec<Node>, GetError<R::Error>> {
        self.edge.get_many(repo, nodes)
    }

    pub fn add<'t>(
        &self,
        node: Node,
        targets: impl Into<Targets<'t>>,
    ) -> Result<Node, AccessError> {
        self.edge.add(node, targets)
    }

    pub fn delete<'t>(
        &self,
        node: Node,
        targets: impl Into<Targets<'t>>,
    ) -> Result<Node, AccessError> {
        self.edge.delete(node, targets)
    }

    pub fn set<'t>(
        &self,
        node: Node,
        targets: impl Into<Targets<'t>>,
    ) -> Result<Node, AccessError> {
        self.edge.set(node, targets)
    }

    pub fn clear(&self, node: Node) -> Result<Node, AccessError> {
        self.edge.clear(node)
    }
}
