//! Content tree error types.

use std::path::PathBuf;

use crate::page::PageId;

/// Error raised while building or loading a [`ContentTree`](crate::ContentTree).
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The tree file could not be read.
    #[error("Failed to read content tree {}: {source}", path.display())]
    Io {
        /// Path of the tree file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The tree file is not valid YAML or does not match the node schema.
    #[error("Invalid content tree: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Two pages share the same identifier.
    #[error("Duplicate page id {0}")]
    DuplicateId(PageId),
    /// Parent index does not refer to a page already added to the builder.
    #[error("Unknown parent index {0}")]
    UnknownParent(usize),
}
