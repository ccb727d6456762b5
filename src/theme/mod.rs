//! Theme data model, view resolution and element normalization.
//!
//! A theme document is parsed once into an immutable snapshot; resolving a
//! view flattens the base layer and the matched variant/aspect-ratio
//! overlays into a renderable element list, and normalization turns each
//! element's raw string properties into semantic values. Every step degrades
//! instead of failing: a broken theme renders as well as it can.

pub mod defaults;
pub mod document;
pub mod loader;
pub mod normalize;
pub mod resolve;
pub mod variables;

pub use document::{Assets, Capabilities, Element, Overlay, ThemeDocument, View};
pub use loader::{load_theme_document, theme_document_path, ThemeError, ThemeResult};
pub use normalize::{normalize, ElementKind, ElementProps, NormalizedElement, ThemeColor};
pub use resolve::{resolve_view, ResolvedScreen};
pub use variables::{resolve_str, resolve_value, VariableScope};
