use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::document::ThemeDocument;

pub type ThemeResult<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme document not found: {path}")]
    NotFound { path: PathBuf },
    #[error("failed to read theme document: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse theme document")]
    Parse(#[from] serde_json::Error),
}

/// Location of a converted theme document inside a themes directory.
pub fn theme_document_path(themes_dir: &Path, theme_name: &str) -> PathBuf {
    themes_dir.join(format!("{theme_name}.json"))
}

/// Loads and parses one theme document snapshot. The result is immutable and
/// shared; every view resolution reads from it without copying the document.
/// Any failure is reported upward — retry policy belongs to the caller.
pub fn load_theme_document(path: &Path) -> ThemeResult<ThemeDocument> {
    let serialized = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ThemeError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ThemeError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let document: ThemeDocument = serde_json::from_str(&serialized)?;
    tracing::debug!(
        theme = %document.name,
        views = document.views.len(),
        variants = document.variant.len(),
        aspect_ratios = document.aspect_ratio.len(),
        "theme document loaded"
    );
    Ok(document)
}
