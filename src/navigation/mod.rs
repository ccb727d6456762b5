//! Focus ownership and directional navigation over resolved elements.
//!
//! One [`FocusRegistry`] instance is owned by the screen-composition root;
//! mounted regions register themselves, exactly one owns input focus, and
//! every abstract [`NavigationAction`] dispatch resolves to a [`NavOutcome`]
//! the caller reacts to.

mod action;
mod movement;
mod registry;

pub use action::{Direction, NavigationAction};
pub use movement::{can_navigate, grid_columns, step, CanNavigate, FocusKind};
pub use registry::{ElementNavigation, FocusRegistry, NavOutcome};
