//! Reference-counted font registration.
//!
//! Layout never blocks on font availability: acquiring a handle only
//! registers the (theme, path) pair and hands back a stable family name;
//! actual face loading is the renderer's fire-and-forget concern.

use std::collections::HashMap;

/// CSS-safe family name derived from a theme-relative font path.
/// `"_inc/fonts/Bold.ttf"` → `"customFont__inc_fonts_Bold_ttf"`.
pub fn font_family_name(font_path: &str) -> String {
    let sanitized: String = font_path
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    format!("customFont_{sanitized}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontHandle {
    pub theme: String,
    pub path: String,
    pub family: String,
}

#[derive(Debug, Default)]
struct FontEntry {
    family: String,
    ref_count: usize,
}

/// Tracks which fonts are in use, keyed by (theme, path). Elements acquire
/// on mount and release on unmount; the entry is evicted when the last
/// reference goes away so a theme switch drops its faces.
#[derive(Debug, Default)]
pub struct FontCache {
    entries: HashMap<(String, String), FontEntry>,
}

impl FontCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&mut self, theme: &str, path: &str) -> FontHandle {
        let entry = self
            .entries
            .entry((theme.to_string(), path.to_string()))
            .or_insert_with(|| FontEntry {
                family: font_family_name(path),
                ref_count: 0,
            });
        entry.ref_count += 1;
        FontHandle {
            theme: theme.to_string(),
            path: path.to_string(),
            family: entry.family.clone(),
        }
    }

    /// Drops one reference; returns true when the entry was evicted.
    pub fn release(&mut self, handle: &FontHandle) -> bool {
        let key = (handle.theme.clone(), handle.path.clone());
        let Some(entry) = self.entries.get_mut(&key) else {
            return false;
        };
        entry.ref_count = entry.ref_count.saturating_sub(1);
        if entry.ref_count == 0 {
            self.entries.remove(&key);
            true
        } else {
            false
        }
    }

    pub fn ref_count(&self, theme: &str, path: &str) -> usize {
        self.entries
            .get(&(theme.to_string(), path.to_string()))
            .map_or(0, |e| e.ref_count)
    }

    pub fn is_loaded(&self, theme: &str, path: &str) -> bool {
        self.ref_count(theme, path) > 0
    }
}
