//! Persistent storage for serialized trees.
//!
//! Compression persists the tree; decompression loads it back. The store
//! is an explicit dependency passed by the caller, so the codec stays
//! testable without a real storage backend. Each store holds one tree
//! under a fixed slot, matching the one-tree key-value contract of the
//! original workflow.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use huffkit_core::{Error, Result};

use crate::serial::SerializedTree;

/// Key-value storage for one serialized tree.
pub trait TreeStore {
    /// Persist the tree, replacing any previous one.
    fn save(&self, tree: &SerializedTree) -> Result<()>;

    /// Load the stored tree.
    ///
    /// Fails with [`Error::NoStoredTree`] when nothing has been saved.
    fn load(&self) -> Result<SerializedTree>;
}

/// Tree store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileTreeStore {
    path: PathBuf,
}

impl FileTreeStore {
    /// Create a store reading and writing the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TreeStore for FileTreeStore {
    fn save(&self, tree: &SerializedTree) -> Result<()> {
        let json = serde_json::to_vec(tree)
            .map_err(|e| Error::corrupt_tree(format!("tree failed to serialize: {e}")))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn load(&self) -> Result<SerializedTree> {
        let json = match fs::read(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(Error::NoStoredTree),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&json)
            .map_err(|e| Error::corrupt_tree(format!("stored tree is not valid JSON: {e}")))
    }
}

/// In-memory tree store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryTreeStore {
    slot: Mutex<Option<SerializedTree>>,
}

impl MemoryTreeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TreeStore for MemoryTreeStore {
    fn save(&self, tree: &SerializedTree) -> Result<()> {
        // A poisoned lock still guards a valid slot; recover it.
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(tree.clone());
        Ok(())
    }

    fn load(&self) -> Result<SerializedTree> {
        let slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        slot.clone().ok_or(Error::NoStoredTree)
    }
}
