use crate::{types::Cardinality, validate::naming::base_name};
use serde::{Deserialize, Serialize};

///
/// AssociationDescriptor
///
/// An edge field. `target` and `reflect` are names only; neither is
/// resolved or cross-checked here.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AssociationDescriptor {
    pub name: String,
    pub target: String,
    pub cardinality: Cardinality,

    /// Association on `target` that mirrors this edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflect: Option<String>,
}

impl AssociationDescriptor {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        target: impl Into<String>,
        cardinality: Cardinality,
        reflect: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            cardinality,
            reflect,
        }
    }

    #[must_use]
    pub const fn is_many(&self) -> bool {
        matches!(self.cardinality, Cardinality::Many)
    }

    /// Whether a node of type `type_name` may be stored on this edge.
    /// Type paths compare by their final segment only.
    #[must_use]
    pub fn accepts(&self, type_name: &str) -> bool {
        base_name(&self.target) == base_name(type_name)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pathed_targets_accept_their_base_type() {
        let edge =
            AssociationDescriptor::new("holds", "library::Publisher", Cardinality::Many, None);

        assert!(edge.accepts("Publisher"));
        assert!(edge.accepts("library::Publisher"));
        assert!(edge.accepts("archive::Publisher"));
        assert!(!edge.accepts("Author"));
        assert!(!edge.accepts("library::PublisherHouse"));
    }

    #[test]
    fn plain_targets_accept_pathed_node_types() {
        let edge = AssociationDescriptor::new("authored_by", "Author", Cardinality::One, None);

        assert!(edge.accepts("Author"));
        assert!(edge.accepts("people::Author"));
        assert!(!edge.accepts("Authors"));
    }
}
