use super::action::Direction;

/// What kind of focusable region an element is. Lists (textlist, carousel,
/// menu) move linearly with wraparound; grids move in two dimensions with
/// edge clamping and no wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusKind {
    TextList,
    Carousel,
    Grid,
    Menu,
}

impl FocusKind {
    pub const fn is_grid(self) -> bool {
        matches!(self, Self::Grid)
    }
}

/// Per-direction navigability, recomputed after every move so consumers can
/// grey out help hints without re-deriving grid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanNavigate {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub select: bool,
    pub back: bool,
}

impl CanNavigate {
    pub const ALL: Self = Self {
        up: true,
        down: true,
        left: true,
        right: true,
        select: true,
        back: true,
    };
}

/// Effective grid column count: an explicit runtime value wins, otherwise
/// `floor(sqrt(total))`, floored at one column.
pub fn grid_columns(total_items: usize, explicit: Option<usize>) -> usize {
    explicit
        .unwrap_or_else(|| (total_items as f64).sqrt().floor() as usize)
        .max(1)
}

fn grid_rows(total_items: usize, cols: usize) -> usize {
    total_items.div_ceil(cols)
}

/// Applies one directional step and returns the destination index. The
/// result is always within `[0, total_items - 1]` for any input sequence.
///
/// Lists wrap across both ends on up/down; their left/right have no
/// intrinsic meaning and return the current index (callers repurpose those
/// directions, e.g. for a delete request). Grids clamp: vertical moves land
/// on the nearest valid column of a trailing partial row, and horizontal
/// moves are simple increments bounded by the item range.
pub fn step(
    kind: FocusKind,
    direction: Direction,
    index: usize,
    total_items: usize,
    cols: usize,
) -> usize {
    if total_items == 0 {
        return 0;
    }
    if !kind.is_grid() {
        return match direction {
            Direction::Up => {
                if index > 0 {
                    index - 1
                } else {
                    total_items - 1
                }
            }
            Direction::Down => {
                if index < total_items - 1 {
                    index + 1
                } else {
                    0
                }
            }
            Direction::Left | Direction::Right => index,
        };
    }

    let cols = cols.max(1);
    let row = index / cols;
    let col = index % cols;
    match direction {
        Direction::Up => {
            if row == 0 {
                return index;
            }
            let dest = index - cols;
            if dest >= total_items {
                (row - 1) * cols + col.min((total_items - 1) % cols)
            } else {
                dest
            }
        }
        Direction::Down => {
            if row + 1 >= grid_rows(total_items, cols) {
                return index;
            }
            let dest = index + cols;
            if dest >= total_items {
                (row + 1) * cols + col.min((total_items - 1) % cols)
            } else {
                dest
            }
        }
        Direction::Left => index.saturating_sub(1),
        Direction::Right => (index + 1).min(total_items - 1),
    }
}

/// Navigability for the current position. Lists are navigable in every
/// direction (up/down wrap); grids report up/down from the current row and
/// are always laterally navigable.
pub fn can_navigate(kind: FocusKind, index: usize, total_items: usize, cols: usize) -> CanNavigate {
    if !kind.is_grid() || total_items == 0 {
        return CanNavigate::ALL;
    }
    let cols = cols.max(1);
    let row = index / cols;
    CanNavigate {
        up: row > 0,
        down: row + 1 < grid_rows(total_items, cols),
        ..CanNavigate::ALL
    }
}
