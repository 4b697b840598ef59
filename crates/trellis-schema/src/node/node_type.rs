use crate::{
    build::NodeTypeBuilder,
    error::DefinitionError,
    layout::{FieldSlot, RecordLayout},
    node::{AssociationDescriptor, PropertyDescriptor},
    types::{Cardinality, IndexKind},
};
use serde::Serialize;
use std::collections::HashMap;

///
/// NodeType
///
/// Frozen schema of one node type. Lookups by name are total: unknown
/// names yield `None` (or `IndexKind::None`) rather than an error.
///

#[derive(Debug, Serialize)]
pub struct NodeType {
    name: String,
    properties: Vec<PropertyDescriptor>,
    associations: Vec<AssociationDescriptor>,
    layout: RecordLayout,

    #[serde(skip)]
    property_lookup: HashMap<String, usize>,
    #[serde(skip)]
    association_lookup: HashMap<String, usize>,
}

impl NodeType {
    pub(crate) fn new(
        name: String,
        properties: Vec<PropertyDescriptor>,
        associations: Vec<AssociationDescriptor>,
        layout: RecordLayout,
    ) -> Self {
        let property_lookup = properties
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), i))
            .collect();
        let association_lookup = associations
            .iter()
            .enumerate()
            .map(|(i, a)| (a.name.clone(), i))
            .collect();

        Self {
            name,
            properties,
            associations,
            layout,
            property_lookup,
            association_lookup,
        }
    }

    /// Start declaring a node type named `name`.
    pub fn builder(name: impl Into<String>) -> Result<NodeTypeBuilder, DefinitionError> {
        NodeTypeBuilder::new(name)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn layout(&self) -> &RecordLayout {
        &self.layout
    }

    #[must_use]
    pub fn property_descriptors(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    #[must_use]
    pub fn association_descriptors(&self) -> &[AssociationDescriptor] {
        &self.associations
    }

    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.property_lookup.get(name).map(|&i| &self.properties[i])
    }

    #[must_use]
    pub fn association(&self, name: &str) -> Option<&AssociationDescriptor> {
        self.association_lookup
            .get(name)
            .map(|&i| &self.associations[i])
    }

    #[must_use]
    pub fn slot(&self, name: &str) -> Option<FieldSlot> {
        self.layout.slot(name)
    }

    //
    // properties
    //

    #[must_use]
    pub fn properties(&self) -> Vec<&str> {
        self.properties_where(|_| true)
    }

    #[must_use]
    pub fn indexed_properties(&self) -> Vec<&str> {
        self.properties_where(IndexKind::is_indexed)
    }

    /// Index kind of `name`; `IndexKind::None` for unknown names.
    #[must_use]
    pub fn index_kind(&self, name: &str) -> IndexKind {
        self.property(name).map_or(IndexKind::None, |p| p.index)
    }

    /// Properties indexed `unique` or `primary`.
    #[must_use]
    pub fn unique_properties(&self) -> Vec<&str> {
        self.properties_where(IndexKind::is_unique)
    }

    /// Properties carrying a plain boolean index.
    #[must_use]
    pub fn non_unique_indexed_properties(&self) -> Vec<&str> {
        self.properties_where(|kind| kind == IndexKind::NonUnique)
    }

    /// First property indexed `primary`, in declaration order.
    #[must_use]
    pub fn primary_property(&self) -> Option<&str> {
        self.properties_where(|kind| kind == IndexKind::Primary)
            .into_iter()
            .next()
    }

    fn properties_where(&self, pred: impl Fn(IndexKind) -> bool) -> Vec<&str> {
        self.properties
            .iter()
            .filter(|p| pred(p.index))
            .map(|p| p.name.as_str())
            .collect()
    }

    //
    // associations
    //

    #[must_use]
    pub fn associations(&self) -> Vec<&str> {
        self.associations.iter().map(|a| a.name.as_str()).collect()
    }

    /// Mirroring association on the target type; `None` for unknown names.
    #[must_use]
    pub fn reflect(&self, name: &str) -> Option<&str> {
        self.association(name)?.reflect.as_deref()
    }

    /// Target type of `name`; `None` for unknown names.
    #[must_use]
    pub fn target(&self, name: &str) -> Option<&str> {
        self.association(name).map(|a| a.target.as_str())
    }

    #[must_use]
    pub fn cardinality(&self, name: &str) -> Option<Cardinality> {
        self.association(name).map(|a| a.cardinality)
    }
}

///
/// TESTS
///
