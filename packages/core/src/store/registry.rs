//! Node Registry
//!
//! Canonical ownership of every `Node` in the forest, keyed by id. All other
//! structures hold ids and resolve them here.

use std::collections::HashMap;

use crate::models::Node;

/// Id → `Node` map. Lookups are O(1); iteration order is unspecified.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    nodes: HashMap<String, Node>,
}

impl NodeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Look up a node by id.
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Mutable lookup, used when placement fields are repaired in bulk.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Insert a node, overwriting any previous node with the same id.
    pub fn put(&mut self, node: Node) {
        self.nodes.insert(node.id.clone(), node);
    }

    /// True when a node with this id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no nodes are registered.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
