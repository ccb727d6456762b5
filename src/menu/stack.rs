use super::MenuItem;

pub type Frame = Vec<MenuItem>;

pub const MAIN_MENU_TITLE: &str = "MAIN MENU";
pub const FALLBACK_TITLE: &str = "MENU";

/// A push-down automaton over menu frames. `current` is the visible frame;
/// `stack` holds the frames behind it in back-navigation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    pub stack: Vec<Frame>,
    pub current: Frame,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Drops the whole stack and shows a fresh root frame.
    Reset {
        current: Frame,
        title: Option<String>,
    },
    Push {
        next: Frame,
        title: String,
    },
    Pop,
    /// Swaps the visible frame in place without touching the stack — used to
    /// live-refresh dynamic listings while keeping back-navigation intact.
    ReplaceCurrent {
        items: Frame,
    },
    SetTitle {
        title: String,
    },
}

impl MenuState {
    pub fn new(current: Frame, title: impl Into<String>) -> Self {
        Self {
            stack: Vec::new(),
            current,
            title: title.into(),
        }
    }

    pub fn root(current: Frame) -> Self {
        Self::new(current, MAIN_MENU_TITLE)
    }

    /// The focus registry's `total_items` for the menu region; re-supplied
    /// after every transition.
    pub fn item_count(&self) -> usize {
        self.current.len()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn apply(&mut self, action: MenuAction) {
        match action {
            MenuAction::Reset { current, title } => {
                self.stack.clear();
                self.current = current;
                self.title = title.unwrap_or_else(|| MAIN_MENU_TITLE.to_string());
            }
            MenuAction::Push { next, title } => {
                let outgoing = std::mem::replace(&mut self.current, next);
                self.stack.push(outgoing);
                self.title = title;
            }
            MenuAction::Pop => {
                // Popping an empty stack is a no-op, not an error.
                if self.stack.is_empty() {
                    return;
                }
                self.title = title_after_pop(&self.stack, &self.current);
                if let Some(previous) = self.stack.pop() {
                    self.current = previous;
                }
            }
            MenuAction::ReplaceCurrent { items } => {
                self.current = items;
            }
            MenuAction::SetTitle { title } => {
                self.title = title;
            }
        }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::root(Frame::new())
    }
}

/// Title shown after popping `current` off a stack: the label of the parent
/// item whose submenu the outgoing frame was, found by matching the outgoing
/// frame's first item id against the parent frame's `sub_items`.
pub fn title_after_pop(stack: &[Frame], current: &Frame) -> String {
    let remaining = &stack[..stack.len().saturating_sub(1)];
    let Some(parent) = remaining.last() else {
        return MAIN_MENU_TITLE.to_string();
    };
    let first_id = current.first().map(|item| item.id.as_str());
    parent
        .iter()
        .find(|item| {
            first_id.is_some_and(|id| item.sub_items.iter().any(|sub| sub.id == id))
        })
        .map(|item| item.label.clone())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, label: &str) -> MenuItem {
        MenuItem::new(id, label)
    }

    fn root_frame() -> Frame {
        vec![
            item("scraper", "SCRAPER"),
            MenuItem::new("games", "MANAGE GAMES").with_sub_items(vec![
                item("select-system", "SELECT SYSTEM"),
                item("upload", "UPLOAD"),
            ]),
        ]
    }

    fn games_frame() -> Frame {
        vec![item("select-system", "SELECT SYSTEM"), item("upload", "UPLOAD")]
    }

    #[test]
    fn push_then_pop_restores_the_prior_frame() {
        let mut state = MenuState::root(root_frame());
        state.apply(MenuAction::Push {
            next: games_frame(),
            title: "MANAGE GAMES".to_string(),
        });
        assert_eq!(state.depth(), 1);
        assert_eq!(state.title, "MANAGE GAMES");
        assert_eq!(state.item_count(), 2);

        state.apply(MenuAction::Pop);
        assert_eq!(state.depth(), 0);
        assert_eq!(state.current, root_frame());
        assert_eq!(state.title, MAIN_MENU_TITLE);
    }

    #[test]
    fn pop_title_names_the_parent_submenu() {
        let mut state = MenuState::root(root_frame());
        state.apply(MenuAction::Push {
            next: games_frame(),
            title: "MANAGE GAMES".to_string(),
        });
        state.apply(MenuAction::Push {
            next: vec![item("select-system", "SELECT SYSTEM"), item("file-a", "A.ROM")],
            title: "SELECT SYSTEM".to_string(),
        });

        state.apply(MenuAction::Pop);
        // The restored frame is the games submenu; the outgoing frame's
        // first item id is owned by the root's MANAGE GAMES entry.
        assert_eq!(state.current, games_frame());
        assert_eq!(state.title, "MANAGE GAMES");
    }

    #[test]
    fn pop_without_matching_parent_uses_fallback_title() {
        let mut state = MenuState::root(root_frame());
        state.apply(MenuAction::Push {
            next: games_frame(),
            title: "MANAGE GAMES".to_string(),
        });
        state.apply(MenuAction::Push {
            next: vec![item("unrelated", "X")],
            title: "X".to_string(),
        });
        // Replace the middle frame's origin so no parent claims it.
        state.apply(MenuAction::ReplaceCurrent {
            items: vec![item("orphan", "ORPHAN")],
        });
        state.apply(MenuAction::Pop);
        assert_eq!(state.title, FALLBACK_TITLE);
    }

    #[test]
    fn pop_on_empty_stack_is_a_no_op() {
        let mut state = MenuState::root(root_frame());
        let before = state.clone();
        state.apply(MenuAction::Pop);
        assert_eq!(state, before);
    }

    #[test]
    fn replace_current_keeps_the_stack_intact() {
        let mut state = MenuState::root(root_frame());
        state.apply(MenuAction::Push {
            next: games_frame(),
            title: "MANAGE GAMES".to_string(),
        });
        state.apply(MenuAction::ReplaceCurrent {
            items: vec![item("file-a", "A.ROM"), item("file-b", "B.ROM")],
        });
        assert_eq!(state.depth(), 1);
        assert_eq!(state.item_count(), 2);
        assert_eq!(state.title, "MANAGE GAMES");

        state.apply(MenuAction::Pop);
        assert_eq!(state.current, root_frame());
    }

    #[test]
    fn reset_drops_the_stack_and_defaults_the_title() {
        let mut state = MenuState::root(root_frame());
        state.apply(MenuAction::Push {
            next: games_frame(),
            title: "MANAGE GAMES".to_string(),
        });
        state.apply(MenuAction::Reset {
            current: vec![item("fresh", "FRESH")],
            title: None,
        });
        assert_eq!(state.depth(), 0);
        assert_eq!(state.title, MAIN_MENU_TITLE);
        assert_eq!(state.item_count(), 1);
    }

    #[test]
    fn frame_changes_feed_the_focus_registry() {
        use crate::navigation::{ElementNavigation, FocusKind, FocusRegistry};

        let mut registry = FocusRegistry::new();
        let mut state = MenuState::root(root_frame());
        registry.register(ElementNavigation::new(
            "menu",
            FocusKind::Menu,
            state.item_count(),
        ));
        registry.set_selected_index("menu", 1);

        state.apply(MenuAction::Push {
            next: games_frame(),
            title: "MANAGE GAMES".to_string(),
        });
        registry.set_total_items("menu", state.item_count());
        assert_eq!(registry.entry("menu").map(|e| e.total_items), Some(2));

        // A live refresh shrinks the frame; the selection clamps with it.
        state.apply(MenuAction::ReplaceCurrent {
            items: vec![item("only", "ONLY")],
        });
        registry.set_total_items("menu", state.item_count());
        assert_eq!(registry.entry("menu").map(|e| e.selected_index), Some(0));
    }

    #[test]
    fn set_title_only_touches_the_title() {
        let mut state = MenuState::root(root_frame());
        state.apply(MenuAction::SetTitle {
            title: "VFS: /roms".to_string(),
        });
        assert_eq!(state.title, "VFS: /roms");
        assert_eq!(state.current, root_frame());
    }
}
