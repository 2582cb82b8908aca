//! Tree Service - Descendant Queries and Re-Parenting
//!
//! The single entry point for runtime access to the forest. Owns the
//! `Forest` behind one `tokio::sync::RwLock` so that:
//!
//! - descendant queries run concurrently with each other (shared read), and
//! - a re-parent is one exclusive-write critical section, so its updates to
//!   the registry and the hierarchy index land together. A concurrent reader
//!   observes either the pre-move forest or the post-move forest, never a
//!   node listed under two parents or under none.
//!
//! # Re-parent semantics
//!
//! Moving a node takes its whole subtree along. The moved node's `height`
//! and `root_id` are recomputed from the new parent, and the walk continues
//! through every descendant so the placement invariants hold again before
//! the lock is released. A move whose target sits inside the moved subtree
//! is rejected, keeping the forest acyclic.
//!
//! The service is `Clone`; clones share the same underlying forest.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::models::Node;
use crate::services::error::TreeServiceError;
use crate::store::Forest;

/// Shared handle to the forest. Cheap to clone, safe to use from many tasks.
#[derive(Clone)]
pub struct TreeService {
    /// Both maps live behind one lock so every mutation is atomic to readers.
    forest: Arc<RwLock<Forest>>,
}

impl TreeService {
    /// Wrap a fully loaded forest. From here on the forest is only reachable
    /// through this service (and its clones).
    pub fn new(forest: Forest) -> Self {
        Self {
            forest: Arc::new(RwLock::new(forest)),
        }
    }

    /// Number of nodes in the forest.
    pub async fn node_count(&self) -> usize {
        self.forest.read().await.node_count()
    }

    /// Look up a single node by id.
    pub async fn get_node(&self, id: &str) -> Option<Node> {
        self.forest.read().await.registry.get(id).cloned()
    }

    /// All descendants of `id`, excluding `id` itself.
    ///
    /// Breadth-first over the hierarchy index, so a node close to the leaves
    /// costs proportional to its subtree, not to the whole forest. Leaves
    /// yield an empty vec. Each parent has exactly one entry per child and
    /// the forest is acyclic, so every descendant appears exactly once.
    ///
    /// # Errors
    ///
    /// `TreeServiceError::UnknownId` when `id` is not registered. Naming a
    /// node that does not exist is a caller mistake, not a missing resource,
    /// and the boundary maps it accordingly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use treeline_core::services::{loader, TreeService};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let forest = loader::load_reader(
    ///     "id,parentId,rootId\nearth\neurope,earth,earth\nsweden,europe,earth\n".as_bytes(),
    /// )?;
    /// let tree = TreeService::new(forest);
    ///
    /// let descendants = tree.find_descendants("earth").await?;
    /// assert_eq!(descendants.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn find_descendants(&self, id: &str) -> Result<Vec<Node>, TreeServiceError> {
        let forest = self.forest.read().await;

        if !forest.registry.contains(id) {
            return Err(TreeServiceError::unknown_id(id));
        }

        let mut descendants = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(id.to_string());

        while let Some(current) = queue.pop_front() {
            for child_id in forest.index.children_of(&current) {
                if let Some(child) = forest.registry.get(child_id) {
                    descendants.push(child.clone());
                }
                queue.push_back(child_id.clone());
            }
        }

        Ok(descendants)
    }

    /// Move `id` (with its subtree) under `new_parent_id`.
    ///
    /// Runs entirely inside one write critical section:
    ///
    /// 1. Read the node's current parent id.
    /// 2. Point the node's `parent_id` at the new parent.
    /// 3. Recompute the node's `height` and `root_id` from the new parent.
    /// 4. Remove the node from its old parent's child list.
    /// 5. Add it to the new parent's child list.
    /// 6. Walk the moved subtree and recompute `height` and `root_id` for
    ///    every descendant, bounded by the subtree size.
    ///
    /// Moving a node under its current parent is a permitted no-op move.
    /// A root can be moved under another node, at which point it stops
    /// being a root.
    ///
    /// # Errors
    ///
    /// Checked in order, before anything is touched:
    ///
    /// - `TreeServiceError::NodeNotFound` when `id` is not registered
    /// - `TreeServiceError::ParentNotFound` when `new_parent_id` is not
    ///   registered
    /// - `TreeServiceError::CircularMove` when `new_parent_id` is `id`
    ///   itself or any node inside `id`'s subtree
    ///
    /// On error neither map is modified.
    pub async fn change_parent(
        &self,
        id: &str,
        new_parent_id: &str,
    ) -> Result<(), TreeServiceError> {
        let mut forest = self.forest.write().await;

        // Verify the node exists
        let old_parent_id = match forest.registry.get(id) {
            Some(node) => node.parent_id.clone(),
            None => return Err(TreeServiceError::node_not_found(id)),
        };

        // Verify the new parent exists
        let (parent_height, parent_root) = match forest.registry.get(new_parent_id) {
            Some(parent) => (parent.height, parent.root_id.clone()),
            None => return Err(TreeServiceError::parent_not_found(new_parent_id)),
        };

        // The new parent must not sit inside the moved subtree
        if Self::is_within_subtree(&forest, id, new_parent_id) {
            return Err(TreeServiceError::circular_move(id, new_parent_id));
        }

        // Rewire the moved node itself
        if let Some(node) = forest.registry.get_mut(id) {
            node.parent_id = Some(new_parent_id.to_string());
            node.height = parent_height + 1;
            node.root_id = parent_root;
        }

        // Mirror the edge change into the hierarchy index
        if let Some(old_parent_id) = &old_parent_id {
            forest.index.remove_child(old_parent_id, id);
        }
        forest.index.add_child(new_parent_id, id);

        // Repair placement across the moved subtree: every child is one
        // level below its parent again, sharing the parent's root
        let mut queue = VecDeque::new();
        queue.push_back(id.to_string());
        while let Some(current) = queue.pop_front() {
            let (current_height, current_root) = match forest.registry.get(&current) {
                Some(node) => (node.height, node.root_id.clone()),
                None => continue,
            };
            let child_ids: Vec<String> = forest.index.children_of(&current).to_vec();
            for child_id in child_ids {
                if let Some(child) = forest.registry.get_mut(&child_id) {
                    child.height = current_height + 1;
                    child.root_id = current_root.clone();
                }
                queue.push_back(child_id);
            }
        }

        debug!("Re-parented {} under {}", id, new_parent_id);
        Ok(())
    }

    /// Check whether `candidate` is `node_id` itself or lies inside the
    /// subtree rooted at `node_id`.
    ///
    /// Walks up from `candidate` via parent edges. Terminates because the
    /// forest is acyclic and the exclusive lock is held while this runs.
    fn is_within_subtree(forest: &Forest, node_id: &str, candidate: &str) -> bool {
        let mut current = candidate;
        loop {
            if current == node_id {
                return true;
            }
            match forest
                .registry
                .get(current)
                .and_then(|node| node.parent_id.as_deref())
            {
                Some(parent_id) => current = parent_id,
                None => return false,
            }
        }
    }
}
