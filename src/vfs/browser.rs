use super::{FsAdapter, FsEntry, VfsResult};

/// Outcome of a delete request; deletion is a two-step confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStatus {
    /// Deletes disabled, the row is a directory, or there is no such row.
    Ignored,
    /// First request armed the confirmation; the row shows the affordance.
    ConfirmationPending,
    /// Second request on the same row deleted it and refreshed the listing.
    Deleted,
}

/// One renderable row of the browser, with the parent (`..`) row folded in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserRow {
    pub label: String,
    pub is_dir: bool,
    pub size_label: String,
    pub pending_delete: bool,
}

/// Directory-browsing state for the settings menu: one listed path, an
/// optional `..` row, and a pending-delete confirmation that disarms as
/// soon as the selection moves.
#[derive(Debug, Clone)]
pub struct FileBrowser {
    title_prefix: String,
    enable_delete: bool,
    path: String,
    entries: Vec<FsEntry>,
    pending_delete: Option<String>,
}

impl FileBrowser {
    /// Opens a browser at the adapter's root.
    pub fn open(
        adapter: &dyn FsAdapter,
        title_prefix: impl Into<String>,
        enable_delete: bool,
    ) -> VfsResult<Self> {
        let path = adapter.root().to_string();
        let entries = adapter.list(&path)?;
        Ok(Self {
            title_prefix: title_prefix.into(),
            enable_delete,
            path,
            entries,
            pending_delete: None,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Title for the hosting menu frame, e.g. `"VFS: /roms"`.
    pub fn title(&self) -> String {
        format!("{}: {}", self.title_prefix, self.path)
    }

    fn has_parent(&self, adapter: &dyn FsAdapter) -> bool {
        !adapter.is_root(&self.path)
    }

    fn offset(&self, adapter: &dyn FsAdapter) -> usize {
        usize::from(self.has_parent(adapter))
    }

    /// Number of selectable rows, the browser's `total_items` for focus.
    pub fn row_count(&self, adapter: &dyn FsAdapter) -> usize {
        self.entries.len() + self.offset(adapter)
    }

    pub fn rows(&self, adapter: &dyn FsAdapter) -> Vec<BrowserRow> {
        let mut rows = Vec::with_capacity(self.row_count(adapter));
        if self.has_parent(adapter) {
            rows.push(BrowserRow {
                label: "..".to_string(),
                is_dir: true,
                size_label: String::new(),
                pending_delete: false,
            });
        }
        for entry in &self.entries {
            let full = adapter.join(&self.path, &entry.name);
            rows.push(BrowserRow {
                label: entry.name.clone(),
                is_dir: entry.is_dir,
                size_label: if entry.is_dir {
                    String::new()
                } else {
                    entry.size.map(format_bytes).unwrap_or_default()
                },
                pending_delete: self.pending_delete.as_deref() == Some(full.as_str()),
            });
        }
        rows
    }

    /// Re-lists the current path; pending deletes do not survive a refresh.
    pub fn refresh(&mut self, adapter: &dyn FsAdapter) -> VfsResult<()> {
        self.entries = adapter.list(&self.path)?;
        self.pending_delete = None;
        Ok(())
    }

    /// The selection moved; an armed delete confirmation disarms.
    pub fn selection_moved(&mut self) {
        self.pending_delete = None;
    }

    /// Opens the row at `index`: the `..` row navigates to the parent,
    /// directory rows descend. Returns whether the path changed — the caller
    /// resets its selection to the top on navigation.
    pub fn enter(&mut self, adapter: &dyn FsAdapter, index: usize) -> VfsResult<bool> {
        if self.has_parent(adapter) && index == 0 {
            self.path = adapter.parent(&self.path);
            self.refresh(adapter)?;
            return Ok(true);
        }
        let Some(entry) = self.entries.get(index - self.offset(adapter)) else {
            return Ok(false);
        };
        if !entry.is_dir {
            return Ok(false);
        }
        self.path = adapter.join(&self.path, &entry.name);
        self.refresh(adapter)?;
        Ok(true)
    }

    /// Left-key delete flow: the first request on a file row arms the
    /// confirmation, a repeat on the same row deletes through the adapter.
    pub fn request_delete(
        &mut self,
        adapter: &mut dyn FsAdapter,
        index: usize,
    ) -> VfsResult<DeleteStatus> {
        if !self.enable_delete {
            return Ok(DeleteStatus::Ignored);
        }
        let offset = self.offset(adapter);
        if index < offset {
            return Ok(DeleteStatus::Ignored);
        }
        let Some(entry) = self.entries.get(index - offset) else {
            return Ok(DeleteStatus::Ignored);
        };
        if entry.is_dir {
            return Ok(DeleteStatus::Ignored);
        }
        let full = adapter.join(&self.path, &entry.name);
        if self.pending_delete.as_deref() == Some(full.as_str()) {
            adapter.delete(&full)?;
            tracing::debug!(path = %full, "deleted entry");
            self.refresh(adapter)?;
            Ok(DeleteStatus::Deleted)
        } else {
            self.pending_delete = Some(full);
            Ok(DeleteStatus::ConfirmationPending)
        }
    }
}

/// `40960` → `"40.0 KB"`, `0` → `"0 B"`. Decimals shrink as magnitude grows.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let decimals: usize = if exponent == 0 {
        0
    } else if value >= 100.0 {
        0
    } else if value >= 10.0 {
        1
    } else {
        2
    };
    format!("{value:.decimals$} {}", UNITS[exponent])
}
