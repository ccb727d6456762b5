use super::action::{Direction, NavigationAction};
use super::movement::{can_navigate, grid_columns, step, CanNavigate, FocusKind};

/// One mounted focusable region. Created when the region mounts, destroyed
/// when it unmounts; exactly one registered entry owns focus at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNavigation {
    pub id: String,
    pub kind: FocusKind,
    pub total_items: usize,
    pub selected_index: usize,
    /// Explicit grid column count; derived from the item count when absent.
    pub grid_columns: Option<usize>,
    pub can_navigate: CanNavigate,
}

impl ElementNavigation {
    pub fn new(id: impl Into<String>, kind: FocusKind, total_items: usize) -> Self {
        let mut entry = Self {
            id: id.into(),
            kind,
            total_items,
            selected_index: 0,
            grid_columns: None,
            can_navigate: CanNavigate::ALL,
        };
        entry.refresh_navigability();
        entry
    }

    pub fn with_columns(mut self, cols: usize) -> Self {
        self.grid_columns = Some(cols);
        self.refresh_navigability();
        self
    }

    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.selected_index = index.min(self.total_items.saturating_sub(1));
        self.refresh_navigability();
        self
    }

    pub fn columns(&self) -> usize {
        grid_columns(self.total_items, self.grid_columns)
    }

    fn refresh_navigability(&mut self) {
        self.can_navigate = can_navigate(
            self.kind,
            self.selected_index,
            self.total_items,
            self.columns(),
        );
    }
}

/// The outcome of dispatching one action against the focused element.
/// Callers react to these instead of registering callbacks on the registry,
/// so the registry stays a plain value with no hidden wiring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// A directional move resolved to `index` (possibly unchanged at an
    /// edge). Lists never produce this for left/right.
    Moved {
        id: String,
        direction: Direction,
        index: usize,
    },
    /// A list received left/right: no intrinsic meaning, forwarded for
    /// caller-defined behavior with the current index.
    Lateral {
        id: String,
        direction: Direction,
        index: usize,
    },
    /// `select` on the current index. Repeats re-fire with the same index.
    Selected { id: String, index: usize },
    Back { id: String },
    /// The menu/escape action.
    Escaped { id: String },
}

/// The single source of truth for which region owns directional input.
///
/// An explicit context object owned by the screen-composition root — the
/// exactly-one-focused-element rule comes from constructing one instance at
/// startup and threading it through, not from global state.
#[derive(Debug, Clone, Default)]
pub struct FocusRegistry {
    entries: Vec<ElementNavigation>,
    focused: Option<String>,
}

impl FocusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a focusable region. The first registration auto-focuses.
    /// Re-registering an existing id replaces the entry and moves it to the
    /// end of insertion order — last registration wins.
    pub fn register(&mut self, entry: ElementNavigation) {
        if let Some(pos) = self.entries.iter().position(|e| e.id == entry.id) {
            self.entries.remove(pos);
        }
        let id = entry.id.clone();
        self.entries.push(entry);
        if self.entries.len() == 1 {
            self.focus(&id);
        }
    }

    /// Removes a region. When the focused entry leaves, focus auto-advances
    /// to its insertion-order successor (cyclically); with nothing left,
    /// focus clears and every action becomes a no-op until something
    /// registers again — navigation never gets permanently stuck.
    pub fn deregister(&mut self, id: &str) {
        let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
            return;
        };
        let was_focused = self.focused.as_deref() == Some(id);
        self.entries.remove(pos);
        if !was_focused {
            return;
        }
        self.focused = None;
        if !self.entries.is_empty() {
            let next = self.entries[pos % self.entries.len()].id.clone();
            self.focus(&next);
        }
    }

    pub fn focus(&mut self, id: &str) -> bool {
        if self.entries.iter().any(|e| e.id == id) {
            tracing::debug!(element = id, "focus changed");
            self.focused = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn focused(&self) -> Option<&ElementNavigation> {
        let id = self.focused.as_deref()?;
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused.as_deref() == Some(id)
    }

    pub fn entry(&self, id: &str) -> Option<&ElementNavigation> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Updates an entry's item count (e.g. after a menu frame change),
    /// clamping the selection into the new range.
    pub fn set_total_items(&mut self, id: &str, total_items: usize) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.total_items = total_items;
            entry.selected_index = entry.selected_index.min(total_items.saturating_sub(1));
            entry.refresh_navigability();
        }
    }

    pub fn set_selected_index(&mut self, id: &str, index: usize) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.selected_index = index.min(entry.total_items.saturating_sub(1));
            entry.refresh_navigability();
        }
    }

    /// Consumes one navigation action against the focused entry. Directional
    /// actions move the selection (and recompute navigability); `select`,
    /// `back` and `menu` report without changing registry state. Returns
    /// `None` when nothing is focused.
    pub fn dispatch(&mut self, action: NavigationAction) -> Option<NavOutcome> {
        let focused_id = self.focused.clone()?;
        let entry = self.entries.iter_mut().find(|e| e.id == focused_id)?;
        match action {
            NavigationAction::Select => Some(NavOutcome::Selected {
                id: focused_id,
                index: entry.selected_index,
            }),
            NavigationAction::Back => Some(NavOutcome::Back { id: focused_id }),
            NavigationAction::Menu => Some(NavOutcome::Escaped { id: focused_id }),
            _ => {
                let direction = action.direction()?;
                if !entry.kind.is_grid()
                    && matches!(direction, Direction::Left | Direction::Right)
                {
                    return Some(NavOutcome::Lateral {
                        id: focused_id,
                        direction,
                        index: entry.selected_index,
                    });
                }
                let cols = entry.columns();
                let next = step(
                    entry.kind,
                    direction,
                    entry.selected_index,
                    entry.total_items,
                    cols,
                );
                if next != entry.selected_index {
                    entry.selected_index = next;
                    entry.refresh_navigability();
                }
                Some(NavOutcome::Moved {
                    id: focused_id,
                    direction,
                    index: next,
                })
            }
        }
    }
}
