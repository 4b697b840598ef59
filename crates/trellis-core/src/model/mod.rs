//! Runtime model of a node type.
//!
//! Binds a frozen `NodeType` to the operations generated from it. Built
//! once per type; everything here is read-only afterwards.

use crate::{
    edge::{Accessors, ManyEdge, OneEdge},
    node::Node,
};
use std::sync::Arc;
use trellis_schema::node::NodeType;

///
/// NodeModel
///

#[derive(Clone, Debug)]
pub struct NodeModel {
    ty: Arc<NodeType>,
    accessors: Accessors,
}

impl NodeModel {
    #[must_use]
    pub fn new(ty: NodeType) -> Self {
        Self::from_shared(Arc::new(ty))
    }

    #[must_use]
    pub fn from_shared(ty: Arc<NodeType>) -> Self {
        let accessors = Accessors::generate(&ty);

        Self { ty, accessors }
    }

    #[must_use]
    pub const fn node_type(&self) -> &Arc<NodeType> {
        &self.ty
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.ty.name()
    }

    #[must_use]
    pub const fn accessors(&self) -> &Accessors {
        &self.accessors
    }

    /// Fresh node value with declared defaults.
    #[must_use]
    pub fn new_node(&self) -> Node {
        Node::new(Arc::clone(&self.ty))
    }

    #[must_use]
    pub fn one(&self, association: &str) -> Option<OneEdge<'_>> {
        self.accessors.one(association)
    }

    #[must_use]
    pub fn many(&self, association: &str) -> Option<ManyEdge<'_>> {
        self.accessors.many(association)
    }
}

impl From<NodeType> for NodeModel {
    fn from(ty: NodeType) -> Self {
        Self::new(ty)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixtures;

    #[test]
    fn model_exposes_cardinality_specific_handles() {
        let model = NodeModel::from_shared(fixtures::book());

        assert!(model.one("authored_by").is_some());
        assert!(model.many("authored_by").is_none());
        assert!(model.many("published_by").is_some());
        assert!(model.one("published_by").is_none());
        assert!(model.one("title").is_none());
    }

    #[test]
    fn new_node_shares_the_model_type() {
        let model = NodeModel::from_shared(fixtures::book());
        let node = model.new_node();

        assert!(Arc::ptr_eq(node.node_type(), model.node_type()));
        assert_eq!(model.name(), "Book");
    }
}
