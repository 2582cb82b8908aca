//! In-Memory Store
//!
//! This module holds the two index structures backing the forest:
//!
//! - `NodeRegistry` - id → `Node`, the canonical owner of node data
//! - `HierarchyIndex` - parent id → ordered child ids, for downward traversal
//!
//! # Consistency
//!
//! The two structures are bidirectionally consistent: a node whose
//! `parent_id` is `Some(p)` is listed exactly once under `p` in the index,
//! and every id the index lists resolves in the registry. `Forest` couples
//! them into one value so a single lock (held by the tree service) guards
//! both, and no reader can observe one map updated without the other.

mod index;
mod registry;

pub use index::HierarchyIndex;
pub use registry::NodeRegistry;

use crate::models::Node;

/// The registry and the hierarchy index, moved around as one unit.
///
/// The loader builds a `Forest` and hands it to `TreeService`, which wraps
/// it in a lock. Outside of tests nothing mutates a `Forest` directly.
#[derive(Debug, Default)]
pub struct Forest {
    /// Canonical id → node mapping
    pub registry: NodeRegistry,
    /// Parent id → child ids, kept in sync with `registry`
    pub index: HierarchyIndex,
}

impl Forest {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self {
            registry: NodeRegistry::new(),
            index: HierarchyIndex::new(),
        }
    }

    /// Number of nodes in the forest.
    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    /// Register a node, mirroring its parent edge into the hierarchy index.
    /// Keeps the two maps consistent for the single-node insert case.
    pub fn insert(&mut self, node: Node) {
        if let Some(parent_id) = &node.parent_id {
            self.index.add_child(parent_id, &node.id);
        }
        self.registry.put(node);
    }
}
