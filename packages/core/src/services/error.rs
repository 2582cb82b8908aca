//! Service Layer Error Types
//!
//! This module defines error types for service-layer operations. Each
//! variant carries the offending id(s) so callers can map failures to
//! transport responses without parsing messages.

use thiserror::Error;

/// Tree operation errors
///
/// Variants split along the caller-fault line: `UnknownId` and
/// `CircularMove` mean the request itself was invalid, while `NodeNotFound`
/// and `ParentNotFound` mean a referenced resource is absent.
#[derive(Error, Debug)]
pub enum TreeServiceError {
    /// Descendant query named an id that is not registered
    #[error("Id [{id}] doesn't exist")]
    UnknownId { id: String },

    /// Re-parent target not found by id
    #[error("Id [{id}] doesn't exist")]
    NodeNotFound { id: String },

    /// Requested new parent not found by id
    #[error("ParentId [{id}] doesn't exist")]
    ParentNotFound { id: String },

    /// Re-parent would place a node inside its own subtree
    #[error("Cannot move [{id}] under [{new_parent_id}]: new parent is inside the moved subtree")]
    CircularMove { id: String, new_parent_id: String },
}

impl TreeServiceError {
    /// Create an unknown id error
    pub fn unknown_id(id: impl Into<String>) -> Self {
        Self::UnknownId { id: id.into() }
    }

    /// Create a node not found error
    pub fn node_not_found(id: impl Into<String>) -> Self {
        Self::NodeNotFound { id: id.into() }
    }

    /// Create a parent not found error
    pub fn parent_not_found(id: impl Into<String>) -> Self {
        Self::ParentNotFound { id: id.into() }
    }

    /// Create a circular move error
    pub fn circular_move(id: impl Into<String>, new_parent_id: impl Into<String>) -> Self {
        Self::CircularMove {
            id: id.into(),
            new_parent_id: new_parent_id.into(),
        }
    }
}

/// Record source loading errors
///
/// All of these are fatal: the loader refuses to build a forest from input
/// it cannot fully account for. Line numbers refer to the source file,
/// header included.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Child record references a parent that has not been registered.
    /// Either the input is out of parent-before-child order or the parent
    /// never appears at all.
    #[error("line {line}: node [{id}] references unknown parent [{parent_id}]")]
    MissingParent {
        line: u64,
        id: String,
        parent_id: String,
    },

    /// Two records carry the same id
    #[error("line {line}: duplicate node id [{id}]")]
    DuplicateId { line: u64, id: String },

    /// Record shape or field content the loader refuses to guess about
    #[error("line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// Record source could not be read
    #[error("failed to read record source: {0}")]
    Io(#[from] std::io::Error),

    /// Record source could not be parsed as CSV
    #[error("failed to parse record source: {0}")]
    Csv(#[from] csv::Error),
}

impl LoadError {
    /// Create a malformed record error
    pub fn malformed_record(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}
