//! Node values.
//!
//! A `Node` is plain data: meta fields plus one slot per declared field, in
//! record-layout order. Edges hold identifiers only, never other nodes.
//! Every transform takes the node by value and hands back the new one.

use crate::{
    error::AccessError,
    id::{NodeId, RepoHandle},
};
use std::{fmt, sync::Arc};
use trellis_schema::{
    layout::FieldSlot,
    node::NodeType,
    types::{Cardinality, MetaField},
    value::Value,
};

///
/// EdgeValue
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EdgeValue {
    One(Option<NodeId>),
    Many(Vec<NodeId>),
}

impl EdgeValue {
    #[must_use]
    pub const fn empty(cardinality: Cardinality) -> Self {
        match cardinality {
            Cardinality::One => Self::One(None),
            Cardinality::Many => Self::Many(Vec::new()),
        }
    }

    /// Stored identifiers, nil excluded.
    #[must_use]
    pub fn ids(&self) -> &[NodeId] {
        match self {
            Self::One(id) => id.as_slice(),
            Self::Many(ids) => ids,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids().is_empty()
    }
}

///
/// FieldValue
///

#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Property(Value),
    Edge(EdgeValue),
}

///
/// Node
///

#[derive(Clone)]
pub struct Node {
    ty: Arc<NodeType>,
    id: Option<NodeId>,
    repo: Option<RepoHandle>,
    fields: Vec<FieldValue>,
}

impl Node {
    /// Fresh, unpersisted value with every declared default in place.
    #[must_use]
    pub fn new(ty: Arc<NodeType>) -> Self {
        let fields = ty
            .layout()
            .data_fields()
            .iter()
            .filter_map(|field| match field.slot {
                FieldSlot::Property(i) => Some(FieldValue::Property(
                    ty.property_descriptors()[i].default.clone(),
                )),
                FieldSlot::Association(i) => Some(FieldValue::Edge(EdgeValue::empty(
                    ty.association_descriptors()[i].cardinality,
                ))),
                // data fields never carry meta slots
                FieldSlot::Meta(_) => None,
            })
            .collect();

        Self {
            ty,
            id: None,
            repo: None,
            fields,
        }
    }

    #[must_use]
    pub fn node_type(&self) -> &Arc<NodeType> {
        &self.ty
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        self.ty.name()
    }

    #[must_use]
    pub const fn id(&self) -> Option<NodeId> {
        self.id
    }

    #[must_use]
    pub const fn repo(&self) -> Option<&RepoHandle> {
        self.repo.as_ref()
    }

    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Called by the repository once the node is stored.
    #[must_use]
    pub fn with_id(mut self, id: NodeId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn attach(mut self, repo: RepoHandle) -> Self {
        self.repo = Some(repo);
        self
    }

    /// Declared field slots in layout order.
    #[must_use]
    pub fn fields(&self) -> &[FieldValue] {
        &self.fields
    }

    /// Meta field rendered as text; empty while unset.
    #[must_use]
    pub fn meta(&self, field: MetaField) -> String {
        match field {
            MetaField::Id => self.id.map_or_else(String::new, |id| id.to_string()),
            MetaField::Repo => self
                .repo
                .as_ref()
                .map_or_else(String::new, |r| r.name().to_string()),
        }
    }

    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Value> {
        match self.field(name)? {
            FieldValue::Property(value) => Some(value),
            FieldValue::Edge(_) => None,
        }
    }

    #[must_use]
    pub fn edge(&self, name: &str) -> Option<&EdgeValue> {
        match self.field(name)? {
            FieldValue::Edge(edge) => Some(edge),
            FieldValue::Property(_) => None,
        }
    }

    pub fn set_property(
        mut self,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<Self, AccessError> {
        let pos = self.data_position(name)?;
        if !matches!(self.fields[pos], FieldValue::Property(_)) {
            return Err(AccessError::NotAProperty {
                node_type: self.type_name().to_string(),
                field: name.to_string(),
            });
        }
        self.fields[pos] = FieldValue::Property(value.into());

        Ok(self)
    }

    fn field(&self, name: &str) -> Option<&FieldValue> {
        let pos = self.ty.layout().data_position(name)?;

        self.fields.get(pos)
    }

    fn data_position(&self, name: &str) -> Result<usize, AccessError> {
        self.ty
            .layout()
            .data_position(name)
            .ok_or_else(|| AccessError::UnknownField {
                node_type: self.type_name().to_string(),
                field: name.to_string(),
            })
    }

    pub(crate) fn edge_at(&self, pos: usize) -> Option<&EdgeValue> {
        match self.fields.get(pos)? {
            FieldValue::Edge(edge) => Some(edge),
            FieldValue::Property(_) => None,
        }
    }

    #[must_use]
    pub(crate) fn replace_edge(mut self, pos: usize, edge: EdgeValue) -> Self {
        self.fields[pos] = FieldValue::Edge(edge);
        self
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.type_name() == other.type_name()
            && self.id == other.id
            && self.repo == other.repo
            && self.fields == other.fields
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("type", &self.type_name())
            .field("id", &self.id)
            .field("repo", &self.repo)
            .field("fields", &self.fields)
            .finish()
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
    fn new_node_carries_declared_defaults() {
        let book = Node::new(fixtures::book());

        assert_eq!(book.id(), None);
        assert_eq!(book.repo(), None);
        assert_eq!(book.property("title"), Some(&Value::Null));
        assert_eq!(book.property("pages"), Some(&Value::Int(0)));
        assert_eq!(book.edge("authored_by"), Some(&EdgeValue::One(None)));
        assert_eq!(book.edge("published_by"), Some(&EdgeValue::Many(vec![])));
        assert_eq!(book.fields().len(), 4);
    }

    #[test]
    fn property_and_edge_lookups_do_not_cross() {
        let book = Node::new(fixtures::book());

        assert_eq!(book.property("authored_by"), None);
        assert_eq!(book.edge("title"), None);
        assert_eq!(book.property("id"), None);
        assert_eq!(book.property("missing"), None);
    }

    #[test]
    fn set_property_is_a_value_transform() {
        let before = Node::new(fixtures::book());
        let after = before.clone().set_property("title", "Dune").unwrap();

        assert_eq!(before.property("title"), Some(&Value::Null));
        assert_eq!(after.property("title"), Some(&Value::text("Dune")));
        assert_ne!(before, after);
    }

    #[test]
    fn set_property_rejects_edges_and_unknown_fields() {
        let book = Node::new(fixtures::book());

        assert!(matches!(
            book.clone().set_property("authored_by", 1i64),
            Err(AccessError::NotAProperty { .. })
        ));
        assert!(matches!(
            book.set_property("nope", 1i64),
            Err(AccessError::UnknownField { .. })
        ));
    }

    #[test]
    fn meta_fields_render_when_present() {
        let book = Node::new(fixtures::book());
        assert_eq!(book.meta(MetaField::Id), "");

        let book = book
            .with_id(NodeId::from_u128(7))
            .attach(RepoHandle::new("main"));
        assert_eq!(book.meta(MetaField::Id), NodeId::from_u128(7).to_string());
        assert_eq!(book.meta(MetaField::Repo), "main");
        assert!(book.is_persisted());
    }

    #[test]
    fn defaults_are_shared_not_recomputed() {
        let ty = fixtures::book();
        let a = Node::new(ty.clone());
        let b = Node::new(ty);

        assert_eq!(a, b);
    }
}
