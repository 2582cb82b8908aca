//! Hierarchy Index
//!
//! Downward adjacency for the forest: parent id → ordered child ids. The
//! registry only records the upward `parent_id` edge, so descendant traversal
//! without this index would mean scanning every node. The index holds ids, not
//! nodes; the registry stays the single owner of node data.

use std::collections::HashMap;

/// Parent id → child id list. Children keep insertion order and behave as a
/// set within one parent.
#[derive(Debug, Default)]
pub struct HierarchyIndex {
    children: HashMap<String, Vec<String>>,
}

impl HierarchyIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
        }
    }

    /// Child ids of `parent_id`, in insertion order. Ids without an entry
    /// (leaves, unknown ids) yield an empty slice.
    pub fn children_of(&self, parent_id: &str) -> &[String] {
        self.children
            .get(parent_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Append `child_id` under `parent_id`. Adding an id already listed under
    /// that parent is a no-op, so an id can never appear twice in one list.
    pub fn add_child(&mut self, parent_id: &str, child_id: &str) {
        let children = self.children.entry(parent_id.to_string()).or_default();
        if !children.iter().any(|existing| existing == child_id) {
            children.push(child_id.to_string());
        }
    }

    /// Remove `child_id` from under `parent_id`. Removing an id that is not
    /// listed is a no-op.
    pub fn remove_child(&mut self, parent_id: &str, child_id: &str) {
        if let Some(children) = self.children.get_mut(parent_id) {
            children.retain(|existing| existing != child_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_keep_insertion_order() {
        let mut index = HierarchyIndex::new();
        index.add_child("earth", "europe");
        index.add_child("earth", "asia");
        index.add_child("earth", "africa");

        assert_eq!(index.children_of("earth"), ["europe", "asia", "africa"]);
    }

    #[test]
    fn test_unknown_parent_yields_empty_slice() {
        let index = HierarchyIndex::new();
        assert!(index.children_of("nowhere").is_empty());
    }

    #[test]
    fn test_duplicate_add_is_ignored() {
        let mut index = HierarchyIndex::new();
        index.add_child("earth", "europe");
        index.add_child("earth", "europe");

        assert_eq!(index.children_of("earth"), ["europe"]);
    }

    #[test]
    fn test_remove_child_detaches_single_id() {
        let mut index = HierarchyIndex::new();
        index.add_child("earth", "europe");
        index.add_child("earth", "asia");

        index.remove_child("earth", "europe");
        assert_eq!(index.children_of("earth"), ["asia"]);
    }

    #[test]
    fn test_remove_absent_child_is_noop() {
        let mut index = HierarchyIndex::new();
        index.add_child("earth", "europe");

        index.remove_child("earth", "atlantis");
        index.remove_child("mars", "europe");
        assert_eq!(index.children_of("earth"), ["europe"]);
    }
}
