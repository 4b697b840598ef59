use derive_more::{Display, From};
use std::sync::Arc;
use ulid::Ulid;

///
/// NodeId
///
/// Opaque node identifier, assigned by the repository when a node is
/// persisted. Nothing in this crate allocates one.
///

#[derive(Clone, Copy, Debug, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(Ulid);

impl NodeId {
    #[must_use]
    pub const fn from_u128(n: u128) -> Self {
        Self(Ulid(n))
    }

    #[must_use]
    pub const fn as_ulid(self) -> Ulid {
        self.0
    }
}

///
/// RepoHandle
///
/// Identity of the repository a node value is attached to.
///

#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
pub struct RepoHandle(Arc<str>);

impl RepoHandle {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_wraps_the_raw_value() {
        const FIRST: NodeId = NodeId::from_u128(1);

        assert_eq!(FIRST.as_ulid(), Ulid(1));
        assert!(FIRST < NodeId::from_u128(2));
        assert_eq!(NodeId::from(Ulid(9)), NodeId::from_u128(9));
    }
}
