//! Generated edge operations.
//!
//! One routine walks a node type's association table and binds a getter
//! plus the cardinality-appropriate mutators to each association. Callers
//! reach them through typed handles (`one`/`many`) or by generated name.

mod accessor;
mod handle;
mod targets;


use crate::{
    error::{AccessError, GetError},
    node::Node,
    repo::Repository,
};
use derive_more::Display;
use std::{collections::HashMap, sync::Arc};
use tracing::debug;
use trellis_schema::{node::NodeType, types::Cardinality};

pub use accessor::EdgeAccessor;
pub use handle::{ManyEdge, OneEdge};
pub use targets::Targets;

///
/// OperationKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum OperationKind {
    #[display("get")]
    Get,
    #[display("set")]
    Set,
    #[display("clear")]
    Clear,
    #[display("add")]
    Add,
    #[display("delete")]
    Delete,
}

impl OperationKind {
    const ONE: &'static [Self] = &[Self::Get, Self::Set, Self::Clear];
    const MANY: &'static [Self] = &[Self::Get, Self::Add, Self::Delete, Self::Set, Self::Clear];

    #[must_use]
    pub const fn for_cardinality(cardinality: Cardinality) -> &'static [Self] {
        match cardinality {
            Cardinality::One => Self::ONE,
            Cardinality::Many => Self::MANY,
        }
    }

    /// Generated name: the bare association name for the getter,
    /// `<op>_<association>` otherwise.
    #[must_use]
    pub fn operation_name(self, association: &str) -> String {
        match self {
            Self::Get => association.to_string(),
            _ => format!("{self}_{association}"),
        }
    }
}

///
/// Operation
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Operation {
    pub name: String,
    pub association: String,
    pub kind: OperationKind,
    edge: usize,
}

///
/// Resolved
/// Getter output for a single source node.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Resolved {
    One(Option<Node>),
    Many(Vec<Node>),
}

impl Resolved {
    #[must_use]
    pub fn into_option(self) -> Option<Node> {
        match self {
            Self::One(node) => node,
            Self::Many(nodes) => nodes.into_iter().next(),
        }
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Node> {
        match self {
            Self::One(node) => node.into_iter().collect(),
            Self::Many(nodes) => nodes,
        }
    }
}

///
/// Accessors
///
/// Operation table generated once per node type. Immutable after
/// generation and safe to share across threads.
///

#[derive(Clone, Debug)]
pub struct Accessors {
    ty: Arc<NodeType>,
    edges: Vec<EdgeAccessor>,
    operations: Vec<Operation>,
    edge_lookup: HashMap<String, usize>,
    operation_lookup: HashMap<String, usize>,
}

impl Accessors {
    #[must_use]
    pub fn generate(ty: &Arc<NodeType>) -> Self {
        let mut edges = Vec::new();
        let mut operations = Vec::new();

        for index in 0..ty.association_descriptors().len() {
            let Some(edge) = EdgeAccessor::new(Arc::clone(ty), index) else {
                continue;
            };

            for &kind in edge.operations() {
                operations.push(Operation {
                    name: kind.operation_name(edge.name()),
                    association: edge.name().to_string(),
                    kind,
                    edge: edges.len(),
                });
            }
            edges.push(edge);
        }

        let edge_lookup = edges
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name().to_string(), i))
            .collect();

        // first generated name wins if two associations collide
        let mut operation_lookup = HashMap::new();
        for (i, op) in operations.iter().enumerate() {
            operation_lookup.entry(op.name.clone()).or_insert(i);
        }

        debug!(
            node_type = ty.name(),
            edges = edges.len(),
            operations = operations.len(),
            "accessors generated"
        );

        Self {
            ty: Arc::clone(ty),
            edges,
            operations,
            edge_lookup,
            operation_lookup,
        }
    }

    #[must_use]
    pub const fn node_type(&self) -> &Arc<NodeType> {
        &self.ty
    }

    #[must_use]
    pub fn edge(&self, association: &str) -> Option<&EdgeAccessor> {
        self.edge_lookup.get(association).map(|&i| &self.edges[i])
    }

    #[must_use]
    pub fn edges(&self) -> &[EdgeAccessor] {
        &self.edges
    }

    /// Typed handle for a single-cardinality association.
    #[must_use]
    pub fn one(&self, association: &str) -> Option<OneEdge<'_>> {
        self.edge(association)
            .filter(|e| e.cardinality() == Cardinality::One)
            .map(OneEdge::new)
    }

    /// Typed handle for a multiple-cardinality association.
    #[must_use]
    pub fn many(&self, association: &str) -> Option<ManyEdge<'_>> {
        self.edge(association)
            .filter(|e| e.cardinality() == Cardinality::Many)
            .map(ManyEdge::new)
    }

    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operation_lookup.get(name).map(|&i| &self.operations[i])
    }

    /// Run the mutator generated under `op`, e.g. `add_published_by`.
    pub fn apply<'a>(
        &self,
        op: &str,
        node: Node,
        targets: impl Into<Targets<'a>>,
    ) -> Result<Node, AccessError> {
        let (operation, edge) = self.lookup(op)?;
        let targets = targets.into();

        match operation.kind {
            OperationKind::Set => edge.set(node, targets),
            OperationKind::Add => edge.add(node, targets),
            OperationKind::Delete => edge.delete(node, targets),
            OperationKind::Clear if targets.is_empty() => edge.clear(node),
            kind @ (OperationKind::Clear | OperationKind::Get) => {
                Err(self.misuse(operation, kind, !targets.is_empty()))
            }
        }
    }

    /// Run the getter generated under `op`, i.e. the association name.
    pub fn resolve<R: Repository>(
        &self,
        op: &str,
        repo: &R,
        node: &Node,
    ) -> Result<Resolved, GetError<R::Error>> {
        let (operation, edge) = self.lookup(op)?;

        match operation.kind {
            OperationKind::Get => edge.get(repo, node),
            kind => Err(self.misuse(operation, kind, false).into()),
        }
    }

    fn lookup(&self, op: &str) -> Result<(&Operation, &EdgeAccessor), AccessError> {
        let operation = self
            .operation(op)
            .ok_or_else(|| AccessError::UnknownOperation {
                node_type: self.ty.name().to_string(),
                op: op.to_string(),
            })?;

        Ok((operation, &self.edges[operation.edge]))
    }

    fn misuse(&self, operation: &Operation, op: OperationKind, with_targets: bool) -> AccessError {
        let node_type = self.ty.name().to_string();
        let association = operation.association.clone();

        if with_targets {
            AccessError::UnexpectedTargets {
                node_type,
                association,
                op,
            }
        } else {
            AccessError::UnsupportedOperation {
                node_type,
                association,
                op,
            }
        }
    }
}
