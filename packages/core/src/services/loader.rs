//! Record Source Loader
//!
//! Builds a `Forest` from a CSV record source in one forward pass.
//!
//! # Record format
//!
//! The first row is a header and is skipped. Every following record is either
//!
//! - `id` - a root node, or
//! - `id,parentId,rootId` - a child of `parentId` (an empty `parentId`
//!   also denotes a root)
//!
//! # Ordering requirement
//!
//! A parent's record must precede its children's records: a child's `height`
//! and `rootId` are derived from the parent at the moment the child record is
//! read, so the parent has to be registered already. A record naming an
//! unregistered parent is a fatal `LoadError::MissingParent`.
//!
//! The `rootId` column is redundant (always derivable from the parent) and is
//! only checked: a value that contradicts the derived root fails the load
//! rather than silently winning.
//!
//! # Failure posture
//!
//! Loading is all-or-nothing. Any malformed, duplicate, or out-of-order
//! record aborts with an error naming the offending line, and no forest is
//! produced. Callers run the loader to completion before accepting traffic.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::models::Node;
use crate::services::error::LoadError;
use crate::store::Forest;

/// Load a forest from a CSV file on disk.
pub fn load_path(path: impl AsRef<Path>) -> Result<Forest, LoadError> {
    let path = path.as_ref();
    info!("Loading node records from {}", path.display());
    let file = File::open(path)?;
    load_reader(file)
}

/// Load a forest from any CSV byte source.
pub fn load_reader<R: Read>(source: R) -> Result<Forest, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let mut forest = Forest::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |position| position.line());
        let node = parse_record(&forest, &record, line)?;

        debug!(
            "Registered node {} (root {}, height {})",
            node.id, node.root_id, node.height
        );
        forest.insert(node);
    }

    info!("Loaded {} nodes", forest.node_count());
    Ok(forest)
}

/// Turn one CSV record into a `Node`, validating it against the forest
/// built so far.
fn parse_record(
    forest: &Forest,
    record: &csv::StringRecord,
    line: u64,
) -> Result<Node, LoadError> {
    let id = match record.get(0) {
        Some(id) if !id.is_empty() => id,
        _ => return Err(LoadError::malformed_record(line, "empty id field")),
    };
    if forest.registry.contains(id) {
        return Err(LoadError::DuplicateId {
            line,
            id: id.to_string(),
        });
    }

    match record.len() {
        1 => Ok(Node::new_root(id)),
        3 => {
            let parent_id = record.get(1).unwrap_or("");
            let declared_root = record.get(2).unwrap_or("");

            if parent_id.is_empty() {
                if !declared_root.is_empty() && declared_root != id {
                    return Err(LoadError::malformed_record(
                        line,
                        format!("root record [{id}] declares a different root [{declared_root}]"),
                    ));
                }
                return Ok(Node::new_root(id));
            }

            let parent = forest.registry.get(parent_id).ok_or_else(|| {
                LoadError::MissingParent {
                    line,
                    id: id.to_string(),
                    parent_id: parent_id.to_string(),
                }
            })?;
            let node = Node::new_child(id, parent);
            if !declared_root.is_empty() && declared_root != node.root_id {
                return Err(LoadError::malformed_record(
                    line,
                    format!(
                        "declared root [{declared_root}] contradicts derived root [{}]",
                        node.root_id
                    ),
                ));
            }
            Ok(node)
        }
        count => Err(LoadError::malformed_record(
            line,
            format!("expected 1 or 3 fields, got {count}"),
        )),
    }
}
