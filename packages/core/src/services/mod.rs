//! Business Services
//!
//! This module contains the core business logic services:
//!
//! - `TreeService` - Descendant queries and re-parenting over the forest
//! - `loader` - One-shot startup population of the forest from a CSV source
//!
//! Services own the concurrency discipline: the store itself is plain data,
//! and every runtime access goes through `TreeService`'s lock.

pub mod error;
pub mod loader;
pub mod tree_service;

pub use error::{LoadError, TreeServiceError};
pub use tree_service::TreeService;
