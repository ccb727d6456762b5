//! Key-code to navigation-action mapping.
//!
//! The polling layer (keyboard events, gamepad buttons translated to key
//! codes) stays outside the core; this table is the boundary it feeds.

use std::collections::HashMap;

use crate::navigation::NavigationAction;

/// Remappable key bindings from platform key codes (`"ArrowUp"`, `"KeyA"`,
/// `" "` for space) to navigation actions.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<String, NavigationAction>,
}

impl KeyMap {
    /// The stock bindings: arrows for movement, Enter/Space/A to select,
    /// Backspace/B to go back, Escape/F1 for the menu.
    pub fn with_default_bindings() -> Self {
        let mut map = Self {
            bindings: HashMap::new(),
        };
        map.bind("ArrowUp", NavigationAction::NavigateUp);
        map.bind("ArrowDown", NavigationAction::NavigateDown);
        map.bind("ArrowLeft", NavigationAction::NavigateLeft);
        map.bind("ArrowRight", NavigationAction::NavigateRight);
        map.bind("Enter", NavigationAction::Select);
        map.bind(" ", NavigationAction::Select);
        map.bind("KeyA", NavigationAction::Select);
        map.bind("Backspace", NavigationAction::Back);
        map.bind("KeyB", NavigationAction::Back);
        map.bind("Escape", NavigationAction::Menu);
        map.bind("F1", NavigationAction::Menu);
        map
    }

    pub fn bind(&mut self, code: impl Into<String>, action: NavigationAction) {
        self.bindings.insert(code.into(), action);
    }

    pub fn unbind(&mut self, code: &str) {
        self.bindings.remove(code);
    }

    pub fn resolve(&self, code: &str) -> Option<NavigationAction> {
        self.bindings.get(code).copied()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::with_default_bindings()
    }
}

/// One entry of the on-screen help strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub key: &'static str,
    pub action: &'static str,
    pub icon: Option<&'static str>,
}

pub const DEFAULT_HELP_ENTRIES: [HelpEntry; 4] = [
    HelpEntry {
        key: "UP/DOWN",
        action: "Navigate",
        icon: Some("updown"),
    },
    HelpEntry {
        key: "A",
        action: "Select",
        icon: Some("a"),
    },
    HelpEntry {
        key: "B",
        action: "Back",
        icon: Some("b"),
    },
    HelpEntry {
        key: "START",
        action: "Menu",
        icon: Some("start"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_all_navigation_actions() {
        let map = KeyMap::default();
        assert_eq!(map.resolve("ArrowUp"), Some(NavigationAction::NavigateUp));
        assert_eq!(map.resolve("ArrowDown"), Some(NavigationAction::NavigateDown));
        assert_eq!(map.resolve("ArrowLeft"), Some(NavigationAction::NavigateLeft));
        assert_eq!(map.resolve("ArrowRight"), Some(NavigationAction::NavigateRight));
        assert_eq!(map.resolve("Enter"), Some(NavigationAction::Select));
        assert_eq!(map.resolve(" "), Some(NavigationAction::Select));
        assert_eq!(map.resolve("Backspace"), Some(NavigationAction::Back));
        assert_eq!(map.resolve("Escape"), Some(NavigationAction::Menu));
    }

    #[test]
    fn gamepad_style_codes_alias_the_primary_actions() {
        let map = KeyMap::default();
        assert_eq!(map.resolve("KeyA"), Some(NavigationAction::Select));
        assert_eq!(map.resolve("KeyB"), Some(NavigationAction::Back));
        assert_eq!(map.resolve("F1"), Some(NavigationAction::Menu));
    }

    #[test]
    fn unbound_codes_resolve_to_none() {
        let map = KeyMap::default();
        assert_eq!(map.resolve("KeyQ"), None);
    }

    #[test]
    fn bindings_can_be_remapped_at_runtime() {
        let mut map = KeyMap::default();
        map.bind("KeyJ", NavigationAction::NavigateDown);
        map.unbind("ArrowDown");
        assert_eq!(map.resolve("KeyJ"), Some(NavigationAction::NavigateDown));
        assert_eq!(map.resolve("ArrowDown"), None);
    }
}
