use std::collections::BTreeMap;

use super::{join_path, FsAdapter, FsEntry, VfsError, VfsResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Dir,
    File { size: u64 },
}

/// In-memory adapter used by tests and the demo binary. Paths are absolute,
/// slash-separated, rooted at `/`.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    nodes: BTreeMap<String, Node>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&mut self, path: &str) -> &mut Self {
        self.ensure_parents(path);
        self.nodes.insert(path.to_string(), Node::Dir);
        self
    }

    pub fn add_file(&mut self, path: &str, size: u64) -> &mut Self {
        self.ensure_parents(path);
        self.nodes.insert(path.to_string(), Node::File { size });
        self
    }

    pub fn contains(&self, path: &str) -> bool {
        self.nodes.contains_key(path)
    }

    fn ensure_parents(&mut self, path: &str) {
        let mut dir = String::new();
        for segment in path.trim_matches('/').split('/') {
            let next = format!("{dir}/{segment}");
            if next != path {
                self.nodes.entry(next.clone()).or_insert(Node::Dir);
            }
            dir = next;
        }
    }

    fn node(&self, path: &str) -> Option<Node> {
        if path == "/" {
            return Some(Node::Dir);
        }
        self.nodes.get(path).copied()
    }
}

impl FsAdapter for MemoryFs {
    fn root(&self) -> &str {
        "/"
    }

    fn list(&self, path: &str) -> VfsResult<Vec<FsEntry>> {
        match self.node(path) {
            None => return Err(VfsError::NotFound(path.to_string())),
            Some(Node::File { .. }) => return Err(VfsError::NotADirectory(path.to_string())),
            Some(Node::Dir) => {}
        }
        let mut entries = Vec::new();
        for (full, node) in &self.nodes {
            let Some(rest) = full.strip_prefix(&join_path(path, "")) else {
                continue;
            };
            if rest.is_empty() || rest.contains('/') {
                continue;
            }
            entries.push(match node {
                Node::Dir => FsEntry::dir(rest),
                Node::File { size } => FsEntry::file(rest, *size),
            });
        }
        // Directories first, then names, mirroring a conventional browser.
        entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
        Ok(entries)
    }

    fn delete(&mut self, path: &str) -> VfsResult<()> {
        match self.node(path) {
            Some(Node::File { .. }) => {
                self.nodes.remove(path);
                Ok(())
            }
            Some(Node::Dir) => Err(VfsError::NotADirectory(path.to_string())),
            None => Err(VfsError::NotFound(path.to_string())),
        }
    }

    fn supports_delete(&self) -> bool {
        true
    }
}
