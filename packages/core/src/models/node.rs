//! Node Data Structures
//!
//! This module defines the `Node` struct shared by the store, the loader, and
//! the tree service.
//!
//! # Architecture
//!
//! - **Plain record**: A node is an id plus its placement in the forest
//! - **Derived placement**: `root_id` and `height` are never supplied by
//!   callers, they are computed from the parent at construction time
//! - **Forest shape**: `parent_id = None` marks a root; every other node
//!   points at a parent that was registered before it
//!
//! # Examples
//!
//! ```rust
//! use treeline_core::models::Node;
//!
//! let root = Node::new_root("earth");
//! let child = Node::new_child("europe", &root);
//!
//! assert_eq!(child.root_id, "earth");
//! assert_eq!(child.height, 1);
//! ```

use serde::{Deserialize, Serialize};

/// A single labeled node in the forest.
///
/// # Fields
///
/// - `id`: Unique identifier, treated as an opaque case-sensitive string
/// - `parent_id`: Immediate parent, `None` for roots
/// - `root_id`: Id of the root of the tree this node belongs to
/// - `height`: Edge count from the root (`0` for roots)
///
/// # Invariants
///
/// - A root has `parent_id = None`, `root_id = id`, and `height = 0`
/// - A non-root has `root_id` equal to its parent's `root_id` and `height`
///   equal to its parent's `height + 1`
///
/// The constructors uphold these invariants; code that rewires nodes (the
/// tree service) is responsible for re-establishing them before releasing
/// its exclusive access to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique identifier (opaque string, compared case-sensitively)
    pub id: String,

    /// Immediate parent id (`None` means this node is a root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Root of the tree this node belongs to (its own id for roots)
    pub root_id: String,

    /// Distance from the root in edges (0 for roots)
    pub height: u32,
}

impl Node {
    /// Create a root node. Roots are their own `root_id` and sit at height 0.
    pub fn new_root(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            root_id: id.clone(),
            id,
            parent_id: None,
            height: 0,
        }
    }

    /// Create a child of `parent`, deriving `root_id` and `height` from it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use treeline_core::models::Node;
    /// let root = Node::new_root("a");
    /// let child = Node::new_child("b", &root);
    /// let grandchild = Node::new_child("c", &child);
    ///
    /// assert_eq!(grandchild.parent_id.as_deref(), Some("b"));
    /// assert_eq!(grandchild.root_id, "a");
    /// assert_eq!(grandchild.height, 2);
    /// ```
    pub fn new_child(id: impl Into<String>, parent: &Node) -> Self {
        Self {
            id: id.into(),
            parent_id: Some(parent.id.clone()),
            root_id: parent.root_id.clone(),
            height: parent.height + 1,
        }
    }

    /// True when this node is the root of its tree.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
