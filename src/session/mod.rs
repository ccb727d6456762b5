//! Current navigation state: the installed theme snapshot, the selected
//! override tuple, the active screen and a memoized resolution cache.

mod settings;

use std::collections::HashMap;

use crate::theme::{normalize, resolve_view, NormalizedElement, ResolvedScreen, ThemeDocument};

pub use settings::{load_settings, save_settings, SessionError, SessionResult, SessionSettings};

/// The logical screens the shell routes between. Screens are mutually
/// exclusive; the active one owns the focus registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenView {
    #[default]
    System,
    Gamelist,
    Menu,
    Play,
}

impl ScreenView {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Gamelist => "gamelist",
            Self::Menu => "menu",
            Self::Play => "play",
        }
    }
}

type CacheKey = (&'static str, String, String, String);

/// Owns the selection tuple and the installed document snapshot. View
/// resolution is a pure function of both, so resolved screens are memoized
/// per (view, variant, aspectRatio, colorScheme) until the document changes.
#[derive(Debug, Default)]
pub struct Session {
    settings: SessionSettings,
    view: ScreenView,
    document: Option<ThemeDocument>,
    cache: HashMap<CacheKey, ResolvedScreen>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: SessionSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Restores the persisted selections from disk.
    pub fn restore() -> Self {
        Self::with_settings(load_settings())
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn document(&self) -> Option<&ThemeDocument> {
        self.document.as_ref()
    }

    /// Installs a freshly loaded document snapshot. Selections left empty by
    /// the settings default to the first entry of each declared capability
    /// list, mirroring how selector menus present them.
    pub fn install_document(&mut self, document: ThemeDocument) {
        let capabilities = &document.capabilities;
        if self.settings.selected_variant.is_empty() {
            if let Some(first) = capabilities.variants.first() {
                self.settings.selected_variant = first.clone();
            }
        }
        if self.settings.selected_color_scheme.is_empty() {
            if let Some(first) = capabilities.color_schemes.first() {
                self.settings.selected_color_scheme = first.clone();
            }
        }
        if self.settings.selected_aspect_ratio.is_empty() {
            if let Some(first) = capabilities.aspect_ratios.first() {
                self.settings.selected_aspect_ratio = first.clone();
            }
        }
        self.document = Some(document);
        self.cache.clear();
    }

    pub fn clear_document(&mut self) {
        self.document = None;
        self.cache.clear();
    }

    pub fn theme_name(&self) -> &str {
        &self.settings.theme_name
    }

    /// Switching themes drops the installed document; the caller loads the
    /// new one and re-installs it.
    pub fn set_theme_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.settings.theme_name != name {
            self.settings.theme_name = name;
            self.clear_document();
        }
    }

    pub fn set_variant(&mut self, variant: impl Into<String>) {
        self.settings.selected_variant = variant.into();
    }

    pub fn set_color_scheme(&mut self, scheme: impl Into<String>) {
        self.settings.selected_color_scheme = scheme.into();
    }

    pub fn set_aspect_ratio(&mut self, ratio: impl Into<String>) {
        self.settings.selected_aspect_ratio = ratio.into();
    }

    pub fn view(&self) -> ScreenView {
        self.view
    }

    pub fn set_view(&mut self, view: ScreenView) {
        self.view = view;
    }

    /// The resolved screen for the current selection tuple, memoized until
    /// the document changes. Returns `None` before a document is installed.
    pub fn screen(&mut self) -> Option<&ResolvedScreen> {
        let document = self.document.as_ref()?;
        let key: CacheKey = (
            self.view.as_str(),
            self.settings.selected_variant.clone(),
            self.settings.selected_aspect_ratio.clone(),
            self.settings.selected_color_scheme.clone(),
        );
        if !self.cache.contains_key(&key) {
            let screen = resolve_view(
                document,
                self.view.as_str(),
                &self.settings.selected_variant,
                &self.settings.selected_aspect_ratio,
                &self.settings.selected_color_scheme,
            );
            self.cache.insert(key.clone(), screen);
        }
        self.cache.get(&key)
    }

    /// Resolves and normalizes the current screen for rendering, filtering
    /// out elements scoped away from the active view.
    pub fn normalized_elements(&mut self) -> Vec<NormalizedElement> {
        let view = self.view.as_str();
        let Some(screen) = self.screen() else {
            return Vec::new();
        };
        let scope = screen.scope();
        screen
            .elements
            .iter()
            .map(|element| normalize(element, &scope))
            .filter(|element| !element.hidden_for_view(view))
            .collect()
    }
}
