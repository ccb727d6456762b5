use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved key under `variables` holding per-color-scheme variable sub-maps.
/// A variable name is never simultaneously a plain value and a scheme map.
pub const COLOR_SCHEMES_KEY: &str = "colorSchemes";

/// A parsed theme document, the immutable snapshot every view resolution
/// reads from. Mirrors the JSON emitted by the offline conversion pipeline
/// losslessly; unknown property shapes are carried through as raw values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub variables: Map<String, Value>,
    #[serde(default)]
    pub capabilities: Capabilities,
    #[serde(default)]
    pub views: Vec<View>,
    #[serde(default)]
    pub variant: Vec<Overlay>,
    #[serde(default, rename = "aspectRatio")]
    pub aspect_ratio: Vec<Overlay>,
    #[serde(default)]
    pub assets: Assets,
}

impl ThemeDocument {
    pub fn view(&self, name: &str) -> Option<&View> {
        self.views.iter().find(|v| v.name == name)
    }

    /// First variant overlay claiming `selector` among its comma-joined
    /// aliases. Declaration order is authoritative when aliases collide.
    pub fn variant_overlay(&self, selector: &str) -> Option<&Overlay> {
        self.variant.iter().find(|o| o.matches(selector))
    }

    pub fn aspect_ratio_overlay(&self, selector: &str) -> Option<&Overlay> {
        self.aspect_ratio.iter().find(|o| o.matches(selector))
    }

    /// Variable sub-map for one color scheme, if the document defines it.
    pub fn color_scheme_variables(&self, scheme: &str) -> Option<&Map<String, Value>> {
        self.variables
            .get(COLOR_SCHEMES_KEY)?
            .as_object()?
            .get(scheme)?
            .as_object()
    }
}

/// Declared selector sets. These drive the settings menus and constrain
/// which override keys the resolver recognizes; an overlay may still be
/// authored without being listed here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capabilities {
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default, rename = "colorSchemes")]
    pub color_schemes: Vec<String>,
    #[serde(default, rename = "aspectRatios")]
    pub aspect_ratios: Vec<String>,
}

/// A named logical screen. Element order is the merge base: overrides match
/// by element name, and the order breaks ties before any explicit `zIndex`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub name: String,
    #[serde(default)]
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    #[serde(rename = "type")]
    pub element_type: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl Element {
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

/// A variant or aspect-ratio layer: a partial variable set plus per-view
/// element overrides keyed by element name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    /// Comma-joined alias list, e.g. `"16:9,16:10"`.
    pub name: String,
    #[serde(default)]
    pub views: Vec<View>,
    #[serde(default)]
    pub variables: Map<String, Value>,
}

impl Overlay {
    pub fn matches(&self, selector: &str) -> bool {
        self.name.split(',').any(|alias| alias.trim() == selector)
    }

    pub fn view(&self, name: &str) -> Option<&View> {
        self.views.iter().find(|v| v.name == name)
    }
}

/// Asset paths discovered by the build pipeline. Unused at serve time but
/// round-tripped so a re-serialized document stays lossless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assets {
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub fonts: Vec<String>,
}
