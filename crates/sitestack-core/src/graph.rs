//! The resource graph: ordered declarations with explicit edges.
//!
//! Nodes are inserted in topological order and every dependency edge
//! must point at an already-inserted node, so a well-formed graph is
//! acyclic by construction. [`ResourceGraph::verify_acyclic_order`]
//! re-checks the invariant for consumers that want to validate a graph
//! they did not build themselves.

use std::collections::HashSet;

use serde::Serialize;

use sitestack_model::{LogicalId, ResourceKind, ResourceSpec};

use crate::error::GraphError;

/// One declared resource and its dependency edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceNode {
    /// Logical ID, unique within the graph.
    pub id: LogicalId,
    /// The declaration itself.
    pub spec: ResourceSpec,
    /// Logical IDs this node depends on. Each must be declared earlier.
    pub depends_on: Vec<LogicalId>,
}

/// An ordered set of resource declarations forming a strict DAG.
///
/// Iteration order is the topological order handed to the provisioning
/// engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ResourceGraph {
    nodes: Vec<ResourceNode>,
}

impl ResourceGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Insert a node at the end of the topological order.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateLogicalId`] if the ID is taken and
    /// [`GraphError::UnsatisfiedDependency`] if any dependency has not
    /// been inserted yet.
    pub fn insert(&mut self, node: ResourceNode) -> Result<(), GraphError> {
        if self.get(&node.id).is_some() {
            return Err(GraphError::DuplicateLogicalId(node.id.to_string()));
        }
        for dep in &node.depends_on {
            if self.get(dep).is_none() {
                return Err(GraphError::UnsatisfiedDependency {
                    node: node.id.to_string(),
                    dependency: dep.to_string(),
                });
            }
        }
        self.nodes.push(node);
        Ok(())
    }

    /// All nodes in topological order.
    #[must_use]
    pub fn nodes(&self) -> &[ResourceNode] {
        &self.nodes
    }

    /// Look up a node by logical ID.
    #[must_use]
    pub fn get(&self, id: &LogicalId) -> Option<&ResourceNode> {
        self.nodes.iter().find(|n| n.id == *id)
    }

    /// Logical ID of the first node of the given kind, if any.
    #[must_use]
    pub fn find_by_kind(&self, kind: ResourceKind) -> Option<&ResourceNode> {
        self.nodes.iter().find(|n| n.spec.kind() == kind)
    }

    /// Every dependency edge as a `(dependent, dependency)` pair, in
    /// declaration order.
    pub fn edges(&self) -> impl Iterator<Item = (&LogicalId, &LogicalId)> {
        self.nodes
            .iter()
            .flat_map(|n| n.depends_on.iter().map(move |d| (&n.id, d)))
    }

    /// Number of dependency edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.depends_on.len()).sum()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Re-check that IDs are unique and every edge points backwards in
    /// the declared order.
    ///
    /// # Errors
    /// Returns the first [`GraphError`] found, if any.
    pub fn verify_acyclic_order(&self) -> Result<(), GraphError> {
        let mut seen: HashSet<&LogicalId> = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            for dep in &node.depends_on {
                if !seen.contains(dep) {
                    return Err(GraphError::UnsatisfiedDependency {
                        node: node.id.to_string(),
                        dependency: dep.to_string(),
                    });
                }
            }
            if !seen.insert(&node.id) {
                return Err(GraphError::DuplicateLogicalId(node.id.to_string()));
            }
        }
        Ok(())
    }
}
