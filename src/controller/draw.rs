//! Free-form wall drawing controller
//!
//! Pressing a wall cell cycles its variant and starts a stroke; every wall
//! cell the pointer enters while the stroke is live gets the same variant.
//! Strokes commit incrementally, cell by cell; releasing or leaving the
//! grid just ends the stroke without undoing anything.

use crate::catalog::{CornerShape, WallKind};
use crate::layout::{CellCategory, Layout, Position};

use super::PointerButton;

/// State machine for the wall-drawing grid.
#[derive(Debug, Clone)]
pub struct DrawController {
    layout: Layout,
    /// Variant being painted while a stroke is live.
    target: Option<WallKind>,
    /// Last wall cell touched by the stroke, for gap filling.
    last_wall: Option<Position>,
}

impl DrawController {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            target: None,
            last_wall: None,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Replace the layout wholesale. Ends any live stroke.
    pub fn set_layout(&mut self, layout: Layout) {
        *self = Self::new(layout);
    }

    pub fn is_drawing(&self) -> bool {
        self.target.is_some()
    }

    fn commit(&mut self, next: Layout) -> bool {
        let changed = next != self.layout;
        self.layout = next;
        changed
    }

    /// The wall variant a cell currently reads as, for cycling. A corner
    /// reads empty when no segments meet there and as wall otherwise, so
    /// strokes can start from corners too.
    fn current_variant(&self, pos: Position) -> WallKind {
        match pos.category() {
            CellCategory::Segment => self.layout.wall_at(pos),
            CellCategory::Corner => match self.layout.corner_at(pos) {
                CornerShape::None => WallKind::Empty,
                _ => WallKind::Wall,
            },
            CellCategory::Room => unreachable!("strokes touch wall cells only"),
        }
    }

    fn apply(&mut self, pos: Position, target: WallKind) -> bool {
        self.last_wall = Some(pos);
        let next = self.layout.set_wall(pos, target);
        self.commit(next)
    }

    /// Pointer pressed on a segment or corner cell: cycle that cell's
    /// variant, start a stroke with the result, and apply it immediately.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is a room cell; the shell routes room cell moves
    /// to [`DrawController::room_pointer_move`] instead.
    pub fn pointer_down(&mut self, pos: Position) -> bool {
        assert!(!pos.is_room(), "wall strokes start on wall cells, got {pos}");
        let target = self.current_variant(pos).cycle();
        self.target = Some(target);
        self.apply(pos, target)
    }

    /// Pointer entered a segment or corner cell; paints it while a stroke
    /// is live.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is a room cell.
    pub fn pointer_enter(&mut self, pos: Position) -> bool {
        assert!(!pos.is_room(), "wall strokes paint wall cells, got {pos}");
        match self.target {
            Some(target) => self.apply(pos, target),
            None => false,
        }
    }

    /// Pointer moved across a room cell while a stroke is live.
    ///
    /// Coarse pointer sampling can jump clean over a segment: the pointer
    /// lands in a room cell diagonal to the last touched wall (two grid
    /// steps on one axis, one on the other) without the intervening
    /// segment ever seeing an enter event. Fill that segment so drawn
    /// lines stay contiguous.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is not a room cell.
    pub fn room_pointer_move(&mut self, pos: Position) -> bool {
        assert!(pos.is_room(), "gap filling watches room cells, got {pos}");
        let (Some(target), Some(last)) = (self.target, self.last_wall) else {
            return false;
        };
        let row_step = pos.row.abs_diff(last.row);
        let col_step = pos.col.abs_diff(last.col);
        if row_step == 1 && col_step == 2 {
            self.apply(Position::new(last.row, pos.col), target)
        } else if row_step == 2 && col_step == 1 {
            self.apply(Position::new(pos.row, last.col), target)
        } else {
            false
        }
    }

    /// Pointer released: ends the stroke, except for the secondary button
    /// which never participates in drawing.
    pub fn pointer_up(&mut self, button: PointerButton) {
        if button == PointerButton::Secondary {
            return;
        }
        self.target = None;
        self.last_wall = None;
    }

    /// Pointer left the drawable region: ends the stroke. Cells already
    /// painted stay painted.
    pub fn pointer_leave(&mut self) {
        self.target = None;
        self.last_wall = None;
    }

    /// Clear every wall segment (corners re-derive to empty).
    pub fn remove_walls(&mut self) -> bool {
        let next = self.layout.remove_walls();
        self.commit(next)
    }
}
