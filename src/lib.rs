//! Kitchenplan - grid floorplan model with a shareable URL token
//!
//! This library provides the data model, editing operations, pointer
//! interaction state machines, and share-token codec behind a kitchen
//! floorplan editor. Rendering, palette UI and routing live in the shell;
//! this crate owns everything with invariants.
//!
//! # Example
//!
//! ```rust
//! use kitchenplan::{codec, Dimensions, ItemKind, Layout, PlacedItem, Position};
//!
//! let plan = Layout::empty(Dimensions::new(4, 3))
//!     .set_item(Position::new(0, 0), Some(PlacedItem::new(ItemKind::Fridge)));
//! let token = codec::encode(&plan);
//! assert_eq!(codec::decode(&token).unwrap(), plan);
//! ```

pub mod catalog;
pub mod codec;
pub mod controller;
pub mod error;
pub mod layout;
pub mod render;
pub mod theme;

pub use catalog::{CornerShape, ItemKind, PlacedItem, Rotation, WallKind};
pub use controller::{CursorHint, DrawController, PlanController, PointerButton};
pub use error::DecodeError;
pub use layout::{Cell, CellCategory, Dimensions, Layout, Position};
pub use theme::{Theme, ThemeError};
