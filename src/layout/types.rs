//! Coordinate types for the floorplan grid

use std::fmt;

/// Smallest supported room count per axis.
pub const MIN_DIM: usize = 2;
/// Largest supported room count per axis (codec bound).
pub const MAX_DIM: usize = 20;

/// Size of a floorplan in rooms.
///
/// A `width x height` plan is stored on a grid of `2*height - 1` rows and
/// `2*width - 1` columns so that wall segments and corners get their own
/// cells between the rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    /// Construct a plan size.
    ///
    /// # Panics
    ///
    /// Panics when either axis is outside `MIN_DIM..=MAX_DIM`; sizes come
    /// from code or from the codec, which validates before constructing.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            (MIN_DIM..=MAX_DIM).contains(&width) && (MIN_DIM..=MAX_DIM).contains(&height),
            "plan dimensions {width}x{height} outside supported range {MIN_DIM}..={MAX_DIM}"
        );
        Self { width, height }
    }

    /// Number of grid rows, rooms and walls included.
    pub fn rows(self) -> usize {
        self.height * 2 - 1
    }

    /// Number of grid columns, rooms and walls included.
    pub fn cols(self) -> usize {
        self.width * 2 - 1
    }

    /// Whether a grid position falls inside this plan.
    pub fn contains(self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }
}

impl Default for Dimensions {
    /// Size used when no token is present or a token fails to decode.
    fn default() -> Self {
        Self::new(16, 12)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Category of a grid cell, determined by coordinate parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellCategory {
    /// Both coordinates even; holds an optional placed item.
    Room,
    /// Exactly one coordinate odd; holds a wall variant for the edge
    /// between two rooms.
    Segment,
    /// Both coordinates odd; holds a corner shape derived from the four
    /// neighboring segments.
    Corner,
}

/// A position on the floorplan grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Cell category implied by coordinate parity.
    pub fn category(self) -> CellCategory {
        match (self.row % 2, self.col % 2) {
            (0, 0) => CellCategory::Room,
            (1, 1) => CellCategory::Corner,
            _ => CellCategory::Segment,
        }
    }

    pub fn is_room(self) -> bool {
        self.category() == CellCategory::Room
    }

    pub fn is_segment(self) -> bool {
        self.category() == CellCategory::Segment
    }

    pub fn is_corner(self) -> bool {
        self.category() == CellCategory::Corner
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
