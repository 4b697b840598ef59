use crate::node::Node;
use std::slice;

///
/// Targets
///
/// One node or a sequence of nodes handed to an edge mutator.
///

#[derive(Clone, Copy, Debug, Default)]
pub enum Targets<'a> {
    #[default]
    None,
    One(&'a Node),
    Many(&'a [Node]),
}

impl<'a> Targets<'a> {
    #[must_use]
    pub const fn as_slice(self) -> &'a [Node] {
        match self {
            Self::None => &[],
            Self::One(node) => slice::from_ref(node),
            Self::Many(nodes) => nodes,
        }
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.as_slice().len()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a Node> for Targets<'a> {
    fn from(node: &'a Node) -> Self {
        Self::One(node)
    }
}

impl<'a> From<&'a [Node]> for Targets<'a> {
    fn from(nodes: &'a [Node]) -> Self {
        Self::Many(nodes)
    }
}

impl<'a> From<&'a Vec<Node>> for Targets<'a> {
    fn from(nodes: &'a Vec<Node>) -> Self {
        Self::Many(nodes)
    }
}

impl<'a, const N: usize> From<&'a [Node; N]> for Targets<'a> {
    fn from(nodes: &'a [Node; N]) -> Self {
        Self::Many(nodes)
    }
}
