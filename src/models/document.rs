// file: src/models/document.rs
// description: handle identifying one document found during a walk
// reference: internal data structures

use std::path::{Path, PathBuf};

/// A document discovered under the library root. Handles are rebuilt on
/// every walk and carry no identity beyond the path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentHandle {
    path: PathBuf,
}

impl DocumentHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
