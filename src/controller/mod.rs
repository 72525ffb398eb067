//! Pointer-driven interaction state machines
//!
//! Two controllers translate raw input events into layout operations. They
//! share the layout-operation vocabulary but are deliberately separate
//! protocols: [`PlanController`] does click/select/drag-swap arrangement,
//! [`DrawController`] does continuous drag-painting of walls.
//!
//! Each controller owns the current [`crate::Layout`] and replaces it
//! wholesale on every mutation; event handlers return `true` when the
//! layout changed so the shell knows to re-encode the URL token.

pub mod draw;
pub mod plan;

pub use draw::DrawController;
pub use plan::{CellPreview, CursorHint, PlanController};

/// Pointer button, as reported by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button: select and drag.
    Primary,
    /// Middle button; treated like primary on release.
    Auxiliary,
    /// Right button: rotate.
    Secondary,
}
