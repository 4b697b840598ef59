//! Incremental node type declaration.
//!
//! Each step consumes the builder and hands it back only on success, so a
//! failed declaration leaves nothing behind that could be finished.

mod registry;

use crate::{
    config::DefinitionConfig,
    error::DefinitionError,
    layout::RecordLayout,
    node::{AssociationDescriptor, NodeType, PropertyDescriptor},
    types::{Cardinality, IndexKind},
    validate::{
        ASSOCIATION_OPTIONS, PROPERTY_OPTIONS, check_field_name, check_options, check_type,
        naming::validate_type_ident,
    },
    value::{Options, Value},
};
use registry::FieldRegistry;
use tracing::debug;

///
/// NodeTypeBuilder
///

#[derive(Debug)]
pub struct NodeTypeBuilder {
    name: String,
    config: DefinitionConfig,
    registry: FieldRegistry,
}

impl NodeTypeBuilder {
    pub fn new(name: impl Into<String>) -> Result<Self, DefinitionError> {
        Self::with_config(name, &DefinitionConfig::default())
    }

    pub fn with_config(
        name: impl Into<String>,
        config: &DefinitionConfig,
    ) -> Result<Self, DefinitionError> {
        let name = name.into();
        validate_type_ident(&name, config.max_type_name_len).map_err(|reason| {
            DefinitionError::InvalidTypeName {
                name: name.clone(),
                reason,
            }
        })?;

        debug!(node_type = %name, "node type definition started");

        Ok(Self {
            name,
            config: config.clone(),
            registry: FieldRegistry::new(),
        })
    }

    /// Declare a property. Recognized options: `default`, `index`.
    pub fn property(mut self, name: &str, opts: Options) -> Result<Self, DefinitionError> {
        let context = self.context(name);
        check_field_name(name, &context, &self.config)?;
        check_options(&opts, PROPERTY_OPTIONS, &context)?;

        let index = opts.get("index").map_or(IndexKind::None, IndexKind::from_option);
        let default = opts.get("default").cloned().unwrap_or_default();

        self.registry.claim(name, &context)?;
        if index == IndexKind::Primary
            && self.config.enforce_single_primary
            && let Some(first) = self.registry.primary()
        {
            return Err(DefinitionError::MultiplePrimary {
                context,
                first: first.name.clone(),
                second: name.to_string(),
            });
        }

        self.registry
            .push_property(PropertyDescriptor::new(name, default, index));

        debug!(node_type = %self.name, property = name, %index, "property registered");

        Ok(self)
    }

    /// Declare a single-cardinality association, `nil` by default.
    pub fn has_edge(
        self,
        name: &str,
        target: &str,
        opts: Options,
    ) -> Result<Self, DefinitionError> {
        self.association(name, target, Cardinality::One, opts)
    }

    /// Declare a multiple-cardinality association, empty by default.
    pub fn has_edges(
        self,
        name: &str,
        target: &str,
        opts: Options,
    ) -> Result<Self, DefinitionError> {
        self.association(name, target, Cardinality::Many, opts)
    }

    fn association(
        mut self,
        name: &str,
        target: &str,
        cardinality: Cardinality,
        opts: Options,
    ) -> Result<Self, DefinitionError> {
        let context = self.context(name);
        check_field_name(name, &context, &self.config)?;
        check_type(target, &context, &self.config)?;
        check_options(&opts, ASSOCIATION_OPTIONS, &context)?;

        let reflect = match opts.get("reflect") {
            None | Some(Value::Null) => None,
            Some(value) => Some(self.reflect_name(value, &context)?),
        };

        self.registry.claim(name, &context)?;
        self.registry.push_association(AssociationDescriptor::new(
            name,
            target,
            cardinality,
            reflect,
        ));

        debug!(
            node_type = %self.name,
            association = name,
            edge_target = target,
            %cardinality,
            "association registered"
        );

        Ok(self)
    }

    // reflect names a field on the target type, so it must look like one
    fn reflect_name(&self, value: &Value, context: &str) -> Result<String, DefinitionError> {
        let invalid = |reason: String| DefinitionError::InvalidOption {
            context: context.to_string(),
            key: "reflect".to_string(),
            reason,
        };

        let name = value
            .as_name()
            .ok_or_else(|| invalid(format!("expected a name, got {}", value.label())))?;
        check_field_name(name, context, &self.config).map_err(|e| invalid(e.to_string()))?;

        Ok(name.to_string())
    }

    /// Freeze the declaration into an immutable node type.
    #[must_use]
    pub fn build(self) -> NodeType {
        let layout = RecordLayout::build(self.registry.layout_fields());
        let FieldRegistry {
            properties,
            associations,
            ..
        } = self.registry;

        debug!(
            node_type = %self.name,
            properties = properties.len(),
            associations = associations.len(),
            "node type frozen"
        );

        NodeType::new(self.name, properties, associations, layout)
    }

    fn context(&self, field: &str) -> String {
        format!("{}.{field}", self.name)
    }
}

///
/// TESTS
///
