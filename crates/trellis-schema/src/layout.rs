//! Concrete field order of a node value.
//!
//! Meta fields come first, then properties and associations interleaved in
//! declaration order. Every generated operation and the storage layer agree
//! on this shape.

use crate::types::MetaField;
use serde::Serialize;
use std::collections::HashMap;

///
/// FieldSlot
/// Where a layout field's descriptor lives.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum FieldSlot {
    Meta(MetaField),
    /// Index into the property table.
    Property(usize),
    /// Index into the association table.
    Association(usize),
}

///
/// LayoutField
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LayoutField {
    pub name: String,
    pub slot: FieldSlot,
}

///
/// RecordLayout
///

#[derive(Clone, Debug, Serialize)]
pub struct RecordLayout {
    fields: Vec<LayoutField>,

    #[serde(skip)]
    positions: HashMap<String, usize>,
}

impl RecordLayout {
    /// Build from declared fields, already accepted by the validator.
    pub(crate) fn build(declared: impl IntoIterator<Item = LayoutField>) -> Self {
        let fields: Vec<_> = MetaField::ALL
            .into_iter()
            .map(|meta| LayoutField {
                name: meta.name().to_string(),
                slot: FieldSlot::Meta(meta),
            })
            .chain(declared)
            .collect();

        let positions = fields
            .iter()
            .enumerate()
            .map(|(i, f)| (f.name.clone(), i))
            .collect();

        Self { fields, positions }
    }

    /// Number of meta fields leading every layout.
    pub const META_LEN: usize = MetaField::ALL.len();

    #[must_use]
    pub fn fields(&self) -> &[LayoutField] {
        &self.fields
    }

    /// Declared (non-meta) fields in layout order.
    #[must_use]
    pub fn data_fields(&self) -> &[LayoutField] {
        &self.fields[Self::META_LEN..]
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Position in the full layout, meta fields included.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Position among the declared fields only.
    #[must_use]
    pub fn data_position(&self, name: &str) -> Option<usize> {
        self.position(name)?.checked_sub(Self::META_LEN)
    }

    #[must_use]
    pub fn slot(&self, name: &str) -> Option<FieldSlot> {
        self.position(name).map(|i| self.fields[i].slot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, slot: FieldSlot) -> LayoutField {
        LayoutField {
            name: name.to_string(),
            slot,
        }
    }

    #[test]
    fn meta_fields_lead_then_declaration_order() {
        let layout = RecordLayout::build([
            field("title", FieldSlot::Property(0)),
            field("authored_by", FieldSlot::Association(0)),
            field("pages", FieldSlot::Property(1)),
        ]);

        assert_eq!(
            layout.names(),
            vec!["id", "repo", "title", "authored_by", "pages"]
        );
        assert_eq!(layout.position("authored_by"), Some(3));
        assert_eq!(layout.data_position("authored_by"), Some(1));
        assert_eq!(layout.slot("pages"), Some(FieldSlot::Property(1)));
    }

    #[test]
    fn meta_fields_have_no_data_position() {
        let layout = RecordLayout::build([]);

        assert_eq!(layout.len(), RecordLayout::META_LEN);
        assert_eq!(layout.slot("id"), Some(FieldSlot::Meta(MetaField::Id)));
        assert_eq!(layout.data_position("repo"), None);
        assert_eq!(layout.position("missing"), None);
        assert!(layout.data_fields().is_empty());
    }
}
