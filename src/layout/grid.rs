//! The floorplan grid and its editing operations
//!
//! [`Layout`] is a value type: every operation takes `&self` and returns a
//! new `Layout`, leaving the input untouched. Callers hold "the current
//! layout" and replace it wholesale after each edit, so snapshots never
//! alias each other.

use crate::catalog::{CornerShape, PlacedItem, WallKind};

use super::types::{CellCategory, Dimensions, Position};

/// Content of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Room cell: an optional placed item.
    Room(Option<PlacedItem>),
    /// Wall segment between two rooms.
    Segment(WallKind),
    /// Corner where up to four segments meet; always derived.
    Corner(CornerShape),
}

/// A kitchen floorplan: rooms, wall segments and derived corners.
///
/// Invariants held after every completed operation:
/// - the grid is exactly `2*height - 1` by `2*width - 1` cells;
/// - every corner shape matches the presence of its four neighboring
///   segments (see [`Layout::fix_corner_walls`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Layout {
    /// An empty plan: no items, no walls.
    pub fn empty(dims: Dimensions) -> Self {
        let cells = (0..dims.rows())
            .flat_map(|row| (0..dims.cols()).map(move |col| Position::new(row, col)))
            .map(|pos| match pos.category() {
                CellCategory::Room => Cell::Room(None),
                CellCategory::Segment => Cell::Segment(WallKind::Empty),
                CellCategory::Corner => Cell::Corner(CornerShape::None),
            })
            .collect();
        Self { dims, cells }
    }

    /// Assemble a layout from raw cells. Decoder-only; the cell vector must
    /// already match the grid extent and parity scheme.
    pub(crate) fn from_cells(dims: Dimensions, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), dims.rows() * dims.cols());
        Self { dims, cells }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            self.dims.contains(pos),
            "position {pos} outside {} grid",
            self.dims
        );
        pos.row * self.dims.cols() + pos.col
    }

    /// Content of a grid cell.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is out of range.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Item in a room cell, if any.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is out of range or not a room cell.
    pub fn item_at(&self, pos: Position) -> Option<PlacedItem> {
        match self.cell(pos) {
            Cell::Room(item) => item,
            _ => panic!("{pos} is not a room cell"),
        }
    }

    /// Wall variant of a segment cell.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is out of range or not a segment cell.
    pub fn wall_at(&self, pos: Position) -> WallKind {
        match self.cell(pos) {
            Cell::Segment(kind) => kind,
            _ => panic!("{pos} is not a segment cell"),
        }
    }

    /// Derived shape of a corner cell.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is out of range or not a corner cell.
    pub fn corner_at(&self, pos: Position) -> CornerShape {
        match self.cell(pos) {
            Cell::Corner(shape) => shape,
            _ => panic!("{pos} is not a corner cell"),
        }
    }

    /// Room cells currently holding an item, in row-major order.
    ///
    /// This view is always recomputed from the grid; it gates "remove all"
    /// affordances and counts placed items.
    pub fn elements(&self) -> Vec<(Position, PlacedItem)> {
        let mut out = Vec::new();
        for row in (0..self.dims.rows()).step_by(2) {
            for col in (0..self.dims.cols()).step_by(2) {
                let pos = Position::new(row, col);
                if let Some(item) = self.item_at(pos) {
                    out.push((pos, item));
                }
            }
        }
        out
    }

    /// Replace the content of a room cell.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is out of range or not a room cell; the
    /// controllers never produce such calls from valid input.
    pub fn set_item(&self, pos: Position, item: Option<PlacedItem>) -> Layout {
        let mut next = self.clone();
        let idx = next.index(pos);
        match next.cells[idx] {
            Cell::Room(_) => next.cells[idx] = Cell::Room(item),
            _ => panic!("set_item on non-room cell {pos}"),
        }
        next
    }

    /// Set the wall variant of a segment cell, re-deriving corners.
    ///
    /// Corner cells are accepted as targets so the draw tool can start a
    /// stroke on one, but their stored shape stays derived: the call only
    /// re-runs the corner fix.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is out of range or is a room cell.
    pub fn set_wall(&self, pos: Position, kind: WallKind) -> Layout {
        let mut next = self.clone();
        let idx = next.index(pos);
        match next.cells[idx] {
            Cell::Segment(_) => next.cells[idx] = Cell::Segment(kind),
            Cell::Corner(_) => {}
            Cell::Room(_) => panic!("set_wall on room cell {pos}"),
        }
        next.fix_corners_in_place();
        next
    }

    /// Rotate the item in a room cell a quarter turn counter-clockwise.
    /// No-op when the cell is empty.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is out of range or not a room cell.
    pub fn rotate_item_left(&self, pos: Position) -> Layout {
        match self.item_at(pos) {
            Some(item) => self.set_item(pos, Some(item.rotated_counter_clockwise())),
            None => self.clone(),
        }
    }

    /// Rotate the item in a room cell a quarter turn clockwise.
    /// No-op when the cell is empty.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is out of range or not a room cell.
    pub fn rotate_item_right(&self, pos: Position) -> Layout {
        match self.item_at(pos) {
            Some(item) => self.set_item(pos, Some(item.rotated_clockwise())),
            None => self.clone(),
        }
    }

    /// Exchange the occupants of two room cells, orientation included.
    /// Either side may be empty, which makes this a move. Identical
    /// positions are a no-op.
    ///
    /// # Panics
    ///
    /// Panics when either position is out of range or not a room cell.
    pub fn swap_items(&self, a: Position, b: Position) -> Layout {
        let first = self.item_at(a);
        let second = self.item_at(b);
        if a == b {
            return self.clone();
        }
        self.set_item(a, second).set_item(b, first)
    }

    /// Empty every room cell; walls and corners untouched.
    pub fn remove_items(&self) -> Layout {
        let mut next = self.clone();
        for cell in &mut next.cells {
            if let Cell::Room(item) = cell {
                *item = None;
            }
        }
        next
    }

    /// Clear every wall segment, then re-derive the corners.
    pub fn remove_walls(&self) -> Layout {
        let mut next = self.clone();
        for cell in &mut next.cells {
            if let Cell::Segment(kind) = cell {
                *kind = WallKind::Empty;
            }
        }
        next.fix_corners_in_place();
        next
    }

    /// Recompute every corner shape from its four neighboring segments.
    ///
    /// The other operations already keep corners consistent; this is the
    /// entry point for callers that edited segments in bulk.
    pub fn fix_corner_walls(&self) -> Layout {
        let mut next = self.clone();
        next.fix_corners_in_place();
        next
    }

    fn fix_corners_in_place(&mut self) {
        // Corners sit strictly inside the grid, so all four neighbors exist.
        for row in (1..self.dims.rows()).step_by(2) {
            for col in (1..self.dims.cols()).step_by(2) {
                let up = self.wall_at(Position::new(row - 1, col)) != WallKind::Empty;
                let right = self.wall_at(Position::new(row, col + 1)) != WallKind::Empty;
                let down = self.wall_at(Position::new(row + 1, col)) != WallKind::Empty;
                let left = self.wall_at(Position::new(row, col - 1)) != WallKind::Empty;
                let idx = self.index(Position::new(row, col));
                self.cells[idx] = Cell::Corner(CornerShape::from_arms(up, right, down, left));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ItemKind, Rotation};

    fn small() -> Layout {
        Layout::empty(Dimensions::new(3, 3))
    }

    #[test]
    fn test_empty_plan_has_no_elements() {
        assert!(small().elements().is_empty());
    }

    #[test]
    fn test_set_and_read_item() {
        let pos = Position::new(2, 4);
        let plan = small().set_item(pos, Some(PlacedItem::new(ItemKind::Sink)));
        assert_eq!(plan.item_at(pos), Some(PlacedItem::new(ItemKind::Sink)));
        assert_eq!(plan.elements(), vec![(pos, PlacedItem::new(ItemKind::Sink))]);
    }

    #[test]
    fn test_operations_leave_input_untouched() {
        let plan = small();
        let _ = plan.set_item(Position::new(0, 0), Some(PlacedItem::new(ItemKind::Hob)));
        assert_eq!(plan, small());
    }

    #[test]
    fn test_rotate_empty_cell_is_noop() {
        let plan = small();
        assert_eq!(plan.rotate_item_right(Position::new(0, 0)), plan);
        assert_eq!(plan.rotate_item_left(Position::new(0, 0)), plan);
    }

    #[test]
    fn test_rotate_right_then_left_restores() {
        let pos = Position::new(0, 2);
        let plan = small().set_item(
            pos,
            Some(PlacedItem::with_rotation(ItemKind::Oven, Rotation::R180)),
        );
        assert_eq!(plan.rotate_item_right(pos).rotate_item_left(pos), plan);
        assert_eq!(plan.rotate_item_left(pos).rotate_item_right(pos), plan);
    }

    #[test]
    fn test_four_rotations_restore() {
        let pos = Position::new(4, 4);
        let mut plan = small().set_item(pos, Some(PlacedItem::new(ItemKind::Fridge)));
        let original = plan.clone();
        for _ in 0..4 {
            plan = plan.rotate_item_right(pos);
        }
        assert_eq!(plan, original);
    }

    #[test]
    fn test_swap_twice_restores() {
        let a = Position::new(0, 0);
        let b = Position::new(4, 2);
        let plan = small()
            .set_item(a, Some(PlacedItem::new(ItemKind::Fridge)))
            .set_item(b, Some(PlacedItem::new(ItemKind::Mixer)));
        assert_eq!(plan.swap_items(a, b).swap_items(a, b), plan);
    }

    #[test]
    fn test_swap_with_empty_moves() {
        let a = Position::new(0, 0);
        let b = Position::new(0, 2);
        let plan = small().set_item(a, Some(PlacedItem::new(ItemKind::Shelf)));
        let moved = plan.swap_items(a, b);
        assert_eq!(moved.item_at(a), None);
        assert_eq!(moved.item_at(b), Some(PlacedItem::new(ItemKind::Shelf)));
    }

    #[test]
    fn test_swap_same_cell_is_noop() {
        let a = Position::new(2, 2);
        let plan = small().set_item(a, Some(PlacedItem::new(ItemKind::Sink)));
        assert_eq!(plan.swap_items(a, a), plan);
    }

    #[test]
    fn test_remove_items_keeps_walls() {
        let plan = small()
            .set_item(Position::new(0, 0), Some(PlacedItem::new(ItemKind::Hob)))
            .set_wall(Position::new(0, 1), WallKind::Wall);
        let cleared = plan.remove_items();
        assert!(cleared.elements().is_empty());
        assert_eq!(cleared.wall_at(Position::new(0, 1)), WallKind::Wall);
    }

    #[test]
    fn test_remove_walls_clears_corners() {
        let plan = small()
            .set_wall(Position::new(0, 1), WallKind::Wall)
            .set_wall(Position::new(1, 0), WallKind::Counter);
        let cleared = plan.remove_walls();
        assert_eq!(cleared.wall_at(Position::new(0, 1)), WallKind::Empty);
        assert_eq!(cleared.corner_at(Position::new(1, 1)), CornerShape::None);
    }

    #[test]
    fn test_corner_derivation_after_segment_edits() {
        // Segments above and to the left of corner (1,1).
        let plan = small()
            .set_wall(Position::new(0, 1), WallKind::Wall)
            .set_wall(Position::new(1, 0), WallKind::Counter);
        assert_eq!(
            plan.corner_at(Position::new(1, 1)),
            CornerShape::ElbowDownLeft
        );
    }

    #[test]
    fn test_corners_match_lookup_everywhere() {
        let plan = small()
            .set_wall(Position::new(0, 1), WallKind::Wall)
            .set_wall(Position::new(2, 1), WallKind::Wall)
            .set_wall(Position::new(1, 2), WallKind::Counter)
            .set_wall(Position::new(3, 2), WallKind::Wall);
        for row in (1..plan.dimensions().rows()).step_by(2) {
            for col in (1..plan.dimensions().cols()).step_by(2) {
                let up = plan.wall_at(Position::new(row - 1, col)) != WallKind::Empty;
                let right = plan.wall_at(Position::new(row, col + 1)) != WallKind::Empty;
                let down = plan.wall_at(Position::new(row + 1, col)) != WallKind::Empty;
                let left = plan.wall_at(Position::new(row, col - 1)) != WallKind::Empty;
                assert_eq!(
                    plan.corner_at(Position::new(row, col)),
                    CornerShape::from_arms(up, right, down, left)
                );
            }
        }
    }

    #[test]
    fn test_set_wall_on_corner_only_refixes() {
        let plan = small().set_wall(Position::new(1, 1), WallKind::Wall);
        // No segments are set, so the corner stays derived as empty.
        assert_eq!(plan.corner_at(Position::new(1, 1)), CornerShape::None);
    }

    #[test]
    #[should_panic(expected = "not a room cell")]
    fn test_item_read_on_segment_panics() {
        let _ = small().item_at(Position::new(0, 1));
    }

    #[test]
    #[should_panic(expected = "set_item on non-room cell")]
    fn test_set_item_on_segment_panics() {
        let _ = small().set_item(Position::new(0, 1), None);
    }

    #[test]
    #[should_panic(expected = "set_wall on room cell")]
    fn test_set_wall_on_room_panics() {
        let _ = small().set_wall(Position::new(0, 0), WallKind::Wall);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_range_panics() {
        let _ = small().item_at(Position::new(6, 0));
    }
}
