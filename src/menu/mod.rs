//! Settings-menu model: items, frame builders and the push-down stack.

mod builder;
mod stack;

pub use builder::{
    capabilities_menu, format_capability_name, format_theme_name, main_menu, AVAILABLE_THEMES,
};
pub use stack::{
    title_after_pop, Frame, MenuAction, MenuState, FALLBACK_TITLE, MAIN_MENU_TITLE,
};

/// Discriminated routing tag attached to menu items so the shell can tell
/// what a selection means without string-matching ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuMeta {
    EmulatorsRoot,
    EmulatorSystem { system_id: String },
    EmulatorCore { system_id: String, core: String },
    GamesRoot,
    GamesSelectSystem,
    GamesSystem { system_id: String },
    GamesUpload,
    GamesFile { system_id: String, file_name: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub sub_items: Vec<MenuItem>,
    pub disabled: bool,
    /// Marks the active choice in selector submenus (variant, scheme, ...).
    pub selected: bool,
    pub meta: Option<MenuMeta>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_sub_items(mut self, sub_items: Vec<MenuItem>) -> Self {
        self.sub_items = sub_items;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_meta(mut self, meta: MenuMeta) -> Self {
        self.meta = Some(meta);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain_sets_every_field() {
        let item = MenuItem::new("upload", "UPLOAD")
            .disabled(true)
            .selected(true)
            .with_meta(MenuMeta::GamesUpload)
            .with_sub_items(vec![MenuItem::new("x", "X")]);
        assert_eq!(item.id, "upload");
        assert!(item.disabled);
        assert!(item.selected);
        assert_eq!(item.meta, Some(MenuMeta::GamesUpload));
        assert_eq!(item.sub_items.len(), 1);
    }
}
