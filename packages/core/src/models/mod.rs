//! Data Models
//!
//! This module contains the core data structures used throughout Treeline:
//!
//! - `Node` - A labeled node with its derived placement (root, height)
//!
//! Placement fields are computed, never supplied: constructors derive them
//! from the parent so a `Node` can only be built in a consistent state.

mod node;

pub use node::Node;
