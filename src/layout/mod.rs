//! Floorplan grid data model
//!
//! This module owns the grid coordinate scheme and the layout value type
//! with its editing operations. Rooms sit at even/even coordinates, wall
//! segments at mixed parity, and corners at odd/odd, so a `width x height`
//! plan occupies a `2*height - 1` by `2*width - 1` grid.

pub mod grid;
pub mod types;

pub use grid::{Cell, Layout};
pub use types::{CellCategory, Dimensions, Position, MAX_DIM, MIN_DIM};
