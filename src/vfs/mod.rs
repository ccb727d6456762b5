//! Uniform filesystem adapter surface for the file-browsing menu frames.
//!
//! Concrete backends (browser storage, cloud drives) live outside the core;
//! the core only needs root detection, parent/child path math, listing and
//! an optional delete.

mod browser;
mod memory;

use thiserror::Error;

pub use browser::{format_bytes, BrowserRow, DeleteStatus, FileBrowser};
pub use memory::MemoryFs;

pub type VfsResult<T> = std::result::Result<T, VfsError>;

#[derive(Debug, Error)]
pub enum VfsError {
    #[error("path not found: {0}")]
    NotFound(String),
    #[error("not a directory: {0}")]
    NotADirectory(String),
    #[error("delete is not supported by this adapter")]
    DeleteUnsupported,
}

/// One directory entry as the menu layer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    pub name: String,
    pub is_dir: bool,
    pub size: Option<u64>,
}

impl FsEntry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            size: None,
        }
    }

    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            size: Some(size),
        }
    }
}

/// Adapter seam between the menu's file-browsing frames and whatever backs
/// the storage. Errors surface to the caller; the core never retries.
pub trait FsAdapter {
    fn root(&self) -> &str;

    fn is_root(&self, path: &str) -> bool {
        path == self.root()
    }

    fn parent(&self, path: &str) -> String {
        parent_path(path, self.root())
    }

    fn join(&self, dir: &str, name: &str) -> String {
        join_path(dir, name)
    }

    fn list(&self, path: &str) -> VfsResult<Vec<FsEntry>>;

    fn delete(&mut self, _path: &str) -> VfsResult<()> {
        Err(VfsError::DeleteUnsupported)
    }

    fn supports_delete(&self) -> bool {
        false
    }
}

/// Parent of a slash-separated path, never escaping above `root`.
pub fn parent_path(path: &str, root: &str) -> String {
    if path == root {
        return root.to_string();
    }
    match path.trim_end_matches('/').rsplit_once('/') {
        Some(("", _)) => "/".to_string(),
        Some((parent, _)) => parent.to_string(),
        None => root.to_string(),
    }
}

pub fn join_path(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}
