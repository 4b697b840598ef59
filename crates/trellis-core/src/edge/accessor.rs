use crate::{
    edge::{OperationKind, Resolved, Targets},
    error::{AccessError, GetError},
    id::NodeId,
    node::{EdgeValue, Node},
    repo::Repository,
};
use std::{collections::HashSet, sync::Arc};
use tracing::trace;
use trellis_schema::{node::AssociationDescriptor, node::NodeType, types::Cardinality};

///
/// EdgeAccessor
///
/// Getter and mutators for one association, driven entirely by its
/// descriptor. Mutators are pure value transforms; only getters reach the
/// repository.
///

#[derive(Clone, Debug)]
pub struct EdgeAccessor {
    ty: Arc<NodeType>,
    association: usize,
    position: usize,
}

impl EdgeAccessor {
    pub(crate) fn new(ty: Arc<NodeType>, association: usize) -> Option<Self> {
        let name = &ty.association_descriptors().get(association)?.name;
        let position = ty.layout().data_position(name)?;

        Some(Self {
            ty,
            association,
            position,
        })
    }

    #[must_use]
    pub fn descriptor(&self) -> &AssociationDescriptor {
        &self.ty.association_descriptors()[self.association]
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.descriptor().name
    }

    #[must_use]
    pub fn cardinality(&self) -> Cardinality {
        self.descriptor().cardinality
    }

    /// Generated operations, getter first.
    #[must_use]
    pub fn operations(&self) -> &'static [OperationKind] {
        OperationKind::for_cardinality(self.cardinality())
    }

    //
    // getters
    //

    /// Resolve the edge stored on one node.
    ///
    /// A nil single edge and an empty sequence resolve locally, without a
    /// repository call.
    pub fn get<R: Repository>(
        &self,
        repo: &R,
        node: &Node,
    ) -> Result<Resolved, GetError<R::Error>> {
        let target = &self.descriptor().target;

        match self.edge_of(node)? {
            EdgeValue::One(None) => Ok(Resolved::One(None)),
            EdgeValue::One(Some(id)) => {
                trace!(association = self.name(), edge_target = %target, %id, "fetch");
                repo.fetch(target, *id)
                    .map(|n| Resolved::One(Some(n)))
                    .map_err(GetError::Repository)
            }
            EdgeValue::Many(ids) if ids.is_empty() => Ok(Resolved::Many(Vec::new())),
            EdgeValue::Many(ids) => {
                trace!(
                    association = self.name(),
                    edge_target = %target,
                    ids = ids.len(),
                    "fetch_many"
                );
                repo.fetch_many(target, ids)
                    .map(Resolved::Many)
                    .map_err(GetError::Repository)
            }
        }
    }

    /// Resolve the edges of several nodes with one batched fetch.
    ///
    /// Nil identifiers are skipped. Results are deduplicated by node id,
    /// keeping first-seen order.
    pub fn get_many<R: Repository>(
        &self,
        repo: &R,
        nodes: &[Node],
    ) -> Result<Vec<Node>, GetError<R::Error>> {
        let mut ids = Vec::new();
        for node in nodes {
            ids.extend_from_slice(self.edge_of(node)?.ids());
        }
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let target = &self.descriptor().target;
        trace!(
            association = self.name(),
            edge_target = %target,
            ids = ids.len(),
            "fetch_many batched"
        );

        let fetched = repo
            .fetch_many(target, &ids)
            .map_err(GetError::Repository)?;

        Ok(dedup_by_id(fetched))
    }

    //
    // mutators
    //

    /// Replace the stored edge with `targets`, in the supplied order.
    pub fn set<'a>(
        &self,
        node: Node,
        targets: impl Into<Targets<'a>>,
    ) -> Result<Node, AccessError> {
        self.edge_of(&node)?;
        let ids = self.target_ids(targets.into())?;

        let edge = match self.cardinality() {
            Cardinality::One => match ids.as_slice() {
                [id] => EdgeValue::One(Some(*id)),
                _ => {
                    return Err(AccessError::CardinalityMismatch {
                        node_type: self.ty.name().to_string(),
                        association: self.name().to_string(),
                        count: ids.len(),
                    });
                }
            },
            Cardinality::Many => EdgeValue::Many(ids),
        };

        Ok(node.replace_edge(self.position, edge))
    }

    /// Reset to nil or to the empty sequence.
    pub fn clear(&self, node: Node) -> Result<Node, AccessError> {
        self.edge_of(&node)?;

        Ok(node.replace_edge(self.position, EdgeValue::empty(self.cardinality())))
    }

    /// Prepend `targets` ahead of the stored sequence, keeping their order.
    /// Duplicates are kept.
    pub fn add<'a>(
        &self,
        node: Node,
        targets: impl Into<Targets<'a>>,
    ) -> Result<Node, AccessError> {
        self.require_many(OperationKind::Add)?;
        let existing = self.edge_of(&node)?.ids().to_vec();

        let mut ids = self.target_ids(targets.into())?;
        ids.extend(existing);

        Ok(node.replace_edge(self.position, EdgeValue::Many(ids)))
    }

    /// Remove the first occurrence of each target id, once per target;
    /// survivors keep their order. Undoes an `add` of the same targets.
    pub fn delete<'a>(
        &self,
        node: Node,
        targets: impl Into<Targets<'a>>,
    ) -> Result<Node, AccessError> {
        self.require_many(OperationKind::Delete)?;
        let mut ids = self.edge_of(&node)?.ids().to_vec();

        for target in self.target_ids(targets.into())? {
            if let Some(pos) = ids.iter().position(|id| *id == target) {
                ids.remove(pos);
            }
        }

        Ok(node.replace_edge(self.position, EdgeValue::Many(ids)))
    }

    //
    // helpers
    //

    fn edge_of<'n>(&self, node: &'n Node) -> Result<&'n EdgeValue, AccessError> {
        let mismatch = || AccessError::TypeMismatch {
            expected: self.ty.name().to_string(),
            found: node.type_name().to_string(),
        };

        if node.type_name() != self.ty.name() {
            return Err(mismatch());
        }

        node.edge_at(self.position).ok_or_else(mismatch)
    }

    fn require_many(&self, op: OperationKind) -> Result<(), AccessError> {
        match self.cardinality() {
            Cardinality::Many => Ok(()),
            Cardinality::One => Err(AccessError::UnsupportedOperation {
                node_type: self.ty.name().to_string(),
                association: self.name().to_string(),
                op,
            }),
        }
    }

    // every target must be persisted and of the declared target type
    fn target_ids(&self, targets: Targets<'_>) -> Result<Vec<NodeId>, AccessError> {
        let descriptor = self.descriptor();

        targets
            .as_slice()
            .iter()
            .map(|target| {
                if !descriptor.accepts(target.type_name()) {
                    return Err(AccessError::TargetTypeMismatch {
                        node_type: self.ty.name().to_string(),
                        association: self.name().to_string(),
                        expected: descriptor.target.clone(),
                        found: target.type_name().to_string(),
                    });
                }

                target.id().ok_or_else(|| AccessError::TargetUnpersisted {
                    node_type: self.ty.name().to_string(),
                    association: self.name().to_string(),
                    target_type: target.type_name().to_string(),
                })
            })
            .collect()
    }
}

// Keep the first node seen for each id; id-less nodes pass through.
fn dedup_by_id(nodes: Vec<Node>) -> Vec<Node> {
    let mut seen = HashSet::new();

    nodes
        .into_iter()
        .filter(|node| node.id().is_none_or(|id| seen.insert(id)))
        .collect()
}
