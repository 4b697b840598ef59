use crate::{
    error::DefinitionError,
    layout::{FieldSlot, LayoutField},
    node::{AssociationDescriptor, PropertyDescriptor},
    types::{IndexKind, MetaField},
};
use std::collections::HashSet;

///
/// FieldRegistry
///
/// Append-only tables filled while one node type is declared. Owned by the
/// builder, so nothing accumulates across types.
///

#[derive(Debug)]
pub(crate) struct FieldRegistry {
    pub(crate) properties: Vec<PropertyDescriptor>,
    pub(crate) associations: Vec<AssociationDescriptor>,

    // properties and associations, interleaved
    declared: Vec<FieldSlot>,
    names: HashSet<String>,
}

impl FieldRegistry {
    pub(crate) fn new() -> Self {
        Self {
            properties: Vec::new(),
            associations: Vec::new(),
            declared: Vec::new(),
            names: MetaField::ALL
                .iter()
                .map(|meta| meta.name().to_string())
                .collect(),
        }
    }

    /// Claim `name` in the shared meta/property/association namespace.
    /// First registration wins.
    pub(crate) fn claim(&mut self, name: &str, context: &str) -> Result<(), DefinitionError> {
        if !self.names.insert(name.to_string()) {
            return Err(DefinitionError::DuplicateField {
                context: context.to_string(),
                name: name.to_string(),
            });
        }

        Ok(())
    }

    pub(crate) fn push_property(&mut self, property: PropertyDescriptor) {
        self.declared.push(FieldSlot::Property(self.properties.len()));
        self.properties.push(property);
    }

    pub(crate) fn push_association(&mut self, association: AssociationDescriptor) {
        self.declared
            .push(FieldSlot::Association(self.associations.len()));
        self.associations.push(association);
    }

    pub(crate) fn primary(&self) -> Option<&PropertyDescriptor> {
        self.properties
            .iter()
            .find(|p| p.index == IndexKind::Primary)
    }

    /// Declared fields in declaration order, as layout input.
    pub(crate) fn layout_fields(&self) -> impl Iterator<Item = LayoutField> + '_ {
        self.declared.iter().map(|slot| {
            let name = match *slot {
                FieldSlot::Property(i) => self.properties[i].name.clone(),
                FieldSlot::Association(i) => self.associations[i].name.clone(),
                FieldSlot::Meta(meta) => meta.name().to_string(),
            };

            LayoutField { name, slot: *slot }
        })
    }
}
