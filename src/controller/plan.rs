//! Placement and arrangement controller
//!
//! Drives the item grid: click to select, drag between cells to move or
//! swap, right-click to rotate, and accept drops from an external palette
//! drag the shell forwards in. Selection persists across gestures; the
//! click/drag-over pair is transient and resets on every release.

use std::fmt;

use crate::catalog::{ItemKind, PlacedItem};
use crate::layout::{Layout, Position};

use super::PointerButton;

/// Status line derived from the interaction state, in priority order:
/// external drag, click-drag, hover, selection, default help.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    /// External drag over an occupied cell.
    Replace {
        existing: PlacedItem,
        incoming: ItemKind,
    },
    /// External drag over an empty cell.
    Add(ItemKind),
    /// Click-drag where one side is empty.
    Move(PlacedItem),
    /// Click-drag between two occupied cells.
    Swap(PlacedItem, PlacedItem),
    /// Hovering an occupied cell.
    Occupant(PlacedItem),
    /// A cell with an item is selected.
    Selected(PlacedItem),
    /// Nothing of note; show the default help text.
    Help,
}

impl fmt::Display for CursorHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorHint::Replace { existing, incoming } => {
                write!(f, "Replace {existing} with {incoming}")
            }
            CursorHint::Add(item) => write!(f, "Add {item}"),
            CursorHint::Move(item) => write!(f, "Move {item}"),
            CursorHint::Swap(a, b) => write!(f, "Swap {a} and {b}"),
            CursorHint::Occupant(item) => write!(f, "{item}"),
            CursorHint::Selected(item) => write!(f, "Selected {item}"),
            CursorHint::Help => {
                f.write_str("Left click to select or drag; right click to rotate.")
            }
        }
    }
}

/// What the shell should draw in a room cell right now: the resident item,
/// or a ghost of an in-flight drag at reduced opacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPreview {
    pub item: Option<PlacedItem>,
    /// Render translucent: the cell shows an uncommitted drag result.
    pub dimmed: bool,
}

/// State machine for the placement grid.
#[derive(Debug, Clone)]
pub struct PlanController {
    layout: Layout,
    hovered: Option<Position>,
    selected: Option<Position>,
    clicked: Option<Position>,
    dragged_over: Option<Position>,
    dragged_item: Option<ItemKind>,
    dragged_position: Option<Position>,
}

impl PlanController {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            hovered: None,
            selected: None,
            clicked: None,
            dragged_over: None,
            dragged_item: None,
            dragged_position: None,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Replace the layout wholesale (e.g. after the shell decoded a new
    /// token). Clears all interaction state.
    pub fn set_layout(&mut self, layout: Layout) {
        *self = Self::new(layout);
    }

    pub fn selected_cell(&self) -> Option<Position> {
        self.selected
    }

    pub fn hovered_cell(&self) -> Option<Position> {
        self.hovered
    }

    fn commit(&mut self, next: Layout) -> bool {
        let changed = next != self.layout;
        self.layout = next;
        changed
    }

    /// Pointer pressed on a room cell.
    ///
    /// Primary starts a click gesture (unless one is already in flight);
    /// secondary rotates the occupant clockwise immediately without
    /// touching the gesture state.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is not a room cell; the shell only forwards room
    /// cell events to this controller.
    pub fn pointer_down(&mut self, pos: Position, button: PointerButton) -> bool {
        assert!(pos.is_room(), "plan gestures target room cells, got {pos}");
        match button {
            PointerButton::Primary if self.clicked.is_none() => {
                self.clicked = Some(pos);
                false
            }
            PointerButton::Secondary => {
                let next = self.layout.rotate_item_right(pos);
                self.commit(next)
            }
            _ => false,
        }
    }

    /// Pointer entered a room cell: updates the hover indicator, and the
    /// drag-over target while a click gesture is in flight.
    pub fn pointer_enter(&mut self, pos: Position) {
        assert!(pos.is_room(), "plan gestures target room cells, got {pos}");
        if self.clicked.is_some() {
            self.dragged_over = Some(pos);
        }
        self.hovered = Some(pos);
    }

    /// Pointer left the cell it was hovering.
    pub fn pointer_leave_cell(&mut self) {
        self.hovered = None;
    }

    /// Pointer released anywhere on the grid.
    ///
    /// Completes a drag as a swap, otherwise toggles selection: releasing a
    /// click on a cell other than the current selection selects it,
    /// anything else deselects. Transient click state always resets.
    pub fn pointer_up(&mut self, button: PointerButton) -> bool {
        if button == PointerButton::Secondary {
            return false;
        }
        let mut changed = false;
        match (self.clicked, self.dragged_over) {
            (Some(clicked), Some(over)) => {
                let next = self.layout.swap_items(clicked, over);
                changed = self.commit(next);
                self.selected = None;
            }
            (Some(clicked), None) if self.selected != Some(clicked) => {
                self.selected = Some(clicked);
            }
            _ => {
                self.selected = None;
            }
        }
        self.clicked = None;
        self.dragged_over = None;
        changed
    }

    /// Pointer left the grid container: abandon any in-flight gesture.
    /// Selection persists; nothing is committed.
    pub fn pointer_leave_grid(&mut self) {
        self.clicked = None;
        self.dragged_over = None;
        self.hovered = None;
    }

    /// Rotate the selected item counter-clockwise. No-op without a
    /// selection or with an empty selected cell.
    pub fn rotate_selected_left(&mut self) -> bool {
        match self.selected {
            Some(pos) => {
                let next = self.layout.rotate_item_left(pos);
                self.commit(next)
            }
            None => false,
        }
    }

    /// Rotate the selected item clockwise. No-op without a selection or
    /// with an empty selected cell.
    pub fn rotate_selected_right(&mut self) -> bool {
        match self.selected {
            Some(pos) => {
                let next = self.layout.rotate_item_right(pos);
                self.commit(next)
            }
            None => false,
        }
    }

    /// Remove the selected item and clear the selection. No-op without a
    /// selection.
    pub fn delete_selected(&mut self) -> bool {
        match self.selected {
            Some(pos) => {
                let next = self.layout.set_item(pos, None);
                self.selected = None;
                self.commit(next)
            }
            None => false,
        }
    }

    /// Backspace/Delete pressed. Deletes the selection unless a text input
    /// elsewhere currently holds focus.
    pub fn delete_key(&mut self, text_input_in_focus: bool) -> bool {
        if text_input_in_focus {
            return false;
        }
        self.delete_selected()
    }

    /// Empty every room cell (the "remove all items" affordance, gated by
    /// the shell on `layout().elements()` being non-empty).
    pub fn remove_items(&mut self) -> bool {
        let next = self.layout.remove_items();
        self.commit(next)
    }

    /// The shell started dragging a palette item over the grid. The
    /// controller only consumes this drag, it never initiates one.
    pub fn begin_menu_drag(&mut self, kind: ItemKind) {
        self.dragged_item = Some(kind);
    }

    /// Palette drag moved over a room cell.
    pub fn menu_drag(&mut self, pos: Position) {
        assert!(pos.is_room(), "palette drags target room cells, got {pos}");
        self.dragged_position = Some(pos);
    }

    /// Palette drag left all grid cells; the pending position clears
    /// without mutating the layout.
    pub fn menu_drag_away(&mut self) {
        self.dragged_position = None;
    }

    /// Palette item dropped: the occupant at the pending position is
    /// replaced (not swapped back to the palette). No-op unless both the
    /// dragged item and a position are present.
    pub fn menu_drop(&mut self) -> bool {
        let changed = match (self.dragged_item, self.dragged_position) {
            (Some(kind), Some(pos)) => {
                let next = self.layout.set_item(pos, Some(PlacedItem::new(kind)));
                self.commit(next)
            }
            _ => false,
        };
        self.dragged_item = None;
        self.dragged_position = None;
        changed
    }

    /// Derive the status line for the current interaction state.
    pub fn cursor_hint(&self) -> CursorHint {
        if let (Some(kind), Some(pos)) = (self.dragged_item, self.dragged_position) {
            return match self.layout.item_at(pos) {
                Some(existing) => CursorHint::Replace {
                    existing,
                    incoming: kind,
                },
                None => CursorHint::Add(kind),
            };
        }
        if let (Some(clicked), Some(over)) = (self.clicked, self.dragged_over) {
            match (self.layout.item_at(clicked), self.layout.item_at(over)) {
                (Some(a), Some(b)) => return CursorHint::Swap(a, b),
                (Some(a), None) => return CursorHint::Move(a),
                (None, Some(b)) => return CursorHint::Move(b),
                (None, None) => {}
            }
        }
        if let Some(item) = self.hovered.and_then(|pos| self.layout.item_at(pos)) {
            return CursorHint::Occupant(item);
        }
        if let Some(item) = self.selected.and_then(|pos| self.layout.item_at(pos)) {
            return CursorHint::Selected(item);
        }
        CursorHint::Help
    }

    /// What to render at a room cell: the occupant, or a translucent ghost
    /// of the in-flight drag (the two sides of a click-drag show their
    /// post-swap occupants; an external drag shows the incoming item).
    pub fn preview_at(&self, pos: Position) -> CellPreview {
        assert!(pos.is_room(), "previews exist for room cells, got {pos}");
        let mut preview = CellPreview {
            item: self.layout.item_at(pos),
            dimmed: false,
        };
        if let (Some(clicked), Some(over)) = (self.clicked, self.dragged_over) {
            if pos == over {
                preview = CellPreview {
                    item: self.layout.item_at(clicked),
                    dimmed: true,
                };
            } else if pos == clicked {
                preview = CellPreview {
                    item: self.layout.item_at(over),
                    dimmed: true,
                };
            }
        }
        if let (Some(kind), Some(drag_pos)) = (self.dragged_item, self.dragged_position) {
            if pos == drag_pos {
                preview = CellPreview {
                    item: Some(PlacedItem::new(kind)),
                    dimmed: true,
                };
            }
        }
        preview
    }
}
