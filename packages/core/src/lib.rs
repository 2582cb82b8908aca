//! Treeline Core Business Logic Layer
//!
//! This crate maintains an in-memory forest of labeled nodes, loaded once at
//! startup and then queried and restructured at runtime.
//!
//! # Architecture
//!
//! - **Two-map store**: id → node registry plus parent → children index,
//!   kept bidirectionally consistent and locked as one unit
//! - **Single-pass load**: the CSV source lists parents before children, so
//!   `height` and `root_id` are derived while reading, never looked up later
//! - **Subtree-proportional queries**: descendant lookups walk the hierarchy
//!   index breadth-first and never scan the whole forest
//! - **Atomic re-parenting**: a move rewires both maps and repairs the moved
//!   subtree's placement inside one write critical section
//!
//! # Modules
//!
//! - [`models`] - Data structures (Node)
//! - [`store`] - In-memory forest (registry + hierarchy index)
//! - [`services`] - Business services (TreeService, loader)

pub mod models;
pub mod services;
pub mod store;

// Re-export commonly used types
pub use models::*;
pub use services::*;
pub use store::*;
