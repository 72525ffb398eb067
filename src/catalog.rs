//! Registries of placeable items and wall variants
//!
//! The catalog is fixed at build time: every placeable appliance kind and
//! every wall variant has a stable identifier the codec and the theme system
//! key off. There is no dynamic registration.

use std::fmt;

/// Orientation of a placed item, in quarter turns clockwise from upright.
///
/// Rotation belongs to a placement, not to an item kind: the same `Fridge`
/// can sit at any of the four orientations in different cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// All orientations, in codec index order.
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// Quarter-turn index used by the codec (0..=3).
    pub fn index(self) -> u8 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    /// Look up an orientation by codec index.
    pub fn from_index(index: u8) -> Option<Rotation> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Angle in degrees, clockwise positive.
    pub fn degrees(self) -> u16 {
        u16::from(self.index()) * 90
    }

    /// One quarter turn clockwise.
    pub fn clockwise(self) -> Rotation {
        match self {
            Rotation::R0 => Rotation::R90,
            Rotation::R90 => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }

    /// One quarter turn counter-clockwise.
    pub fn counter_clockwise(self) -> Rotation {
        match self {
            Rotation::R0 => Rotation::R270,
            Rotation::R90 => Rotation::R0,
            Rotation::R180 => Rotation::R90,
            Rotation::R270 => Rotation::R180,
        }
    }

    /// CSS transform applied to the item image at this orientation.
    pub fn transform(self) -> &'static str {
        match self {
            Rotation::R0 => "rotate(0deg)",
            Rotation::R90 => "rotate(90deg)",
            Rotation::R180 => "rotate(180deg)",
            Rotation::R270 => "rotate(270deg)",
        }
    }
}

/// A placeable appliance or furniture kind.
///
/// The discriminant order is load-bearing: [`ItemKind::index`] feeds the
/// codec, so new kinds must be appended rather than inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Fridge,
    Hob,
    Oven,
    Sink,
    Dishwasher,
    Microwave,
    PrepStation,
    Cupboard,
    Shelf,
    TrashCan,
    CoffeeMachine,
    Mixer,
    ServingCounter,
    DiningTable,
}

impl ItemKind {
    /// All item kinds, in codec index order.
    pub const ALL: [ItemKind; 14] = [
        ItemKind::Fridge,
        ItemKind::Hob,
        ItemKind::Oven,
        ItemKind::Sink,
        ItemKind::Dishwasher,
        ItemKind::Microwave,
        ItemKind::PrepStation,
        ItemKind::Cupboard,
        ItemKind::Shelf,
        ItemKind::TrashCan,
        ItemKind::CoffeeMachine,
        ItemKind::Mixer,
        ItemKind::ServingCounter,
        ItemKind::DiningTable,
    ];

    /// Stable codec index of this kind.
    pub fn index(self) -> u8 {
        Self::ALL
            .iter()
            .position(|k| *k == self)
            .expect("every kind is listed in ALL") as u8
    }

    /// Look up a kind by codec index.
    pub fn from_index(index: u8) -> Option<ItemKind> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Stable short identifier, used by theme files.
    pub fn id(self) -> &'static str {
        match self {
            ItemKind::Fridge => "fridge",
            ItemKind::Hob => "hob",
            ItemKind::Oven => "oven",
            ItemKind::Sink => "sink",
            ItemKind::Dishwasher => "dishwasher",
            ItemKind::Microwave => "microwave",
            ItemKind::PrepStation => "prep-station",
            ItemKind::Cupboard => "cupboard",
            ItemKind::Shelf => "shelf",
            ItemKind::TrashCan => "trash-can",
            ItemKind::CoffeeMachine => "coffee-machine",
            ItemKind::Mixer => "mixer",
            ItemKind::ServingCounter => "serving-counter",
            ItemKind::DiningTable => "dining-table",
        }
    }

    /// Look up a kind by its short identifier.
    pub fn from_id(id: &str) -> Option<ItemKind> {
        Self::ALL.iter().copied().find(|k| k.id() == id)
    }

    /// Accessible display label.
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Fridge => "Fridge",
            ItemKind::Hob => "Hob",
            ItemKind::Oven => "Oven",
            ItemKind::Sink => "Sink",
            ItemKind::Dishwasher => "Dishwasher",
            ItemKind::Microwave => "Microwave",
            ItemKind::PrepStation => "Prep station",
            ItemKind::Cupboard => "Cupboard",
            ItemKind::Shelf => "Shelf",
            ItemKind::TrashCan => "Trash can",
            ItemKind::CoffeeMachine => "Coffee machine",
            ItemKind::Mixer => "Mixer",
            ItemKind::ServingCounter => "Serving counter",
            ItemKind::DiningTable => "Dining table",
        }
    }

    /// Path of the display image for this kind.
    pub fn image_path(self) -> String {
        format!("/images/display/{}.png", self.id())
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An item kind placed in a room cell at a particular orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedItem {
    pub kind: ItemKind,
    pub rotation: Rotation,
}

impl PlacedItem {
    /// Place a kind at the upright orientation.
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            rotation: Rotation::R0,
        }
    }

    /// Place a kind at an explicit orientation.
    pub fn with_rotation(kind: ItemKind, rotation: Rotation) -> Self {
        Self { kind, rotation }
    }

    /// The same item turned one quarter clockwise.
    pub fn rotated_clockwise(self) -> Self {
        Self {
            rotation: self.rotation.clockwise(),
            ..self
        }
    }

    /// The same item turned one quarter counter-clockwise.
    pub fn rotated_counter_clockwise(self) -> Self {
        Self {
            rotation: self.rotation.counter_clockwise(),
            ..self
        }
    }

    /// CSS transform for rendering this placement.
    pub fn transform(self) -> &'static str {
        self.rotation.transform()
    }
}

impl fmt::Display for PlacedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.label())
    }
}

/// Content of a wall segment between two room cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallKind {
    /// No separation; rooms flow into each other.
    #[default]
    Empty,
    /// Full wall.
    Wall,
    /// Half-height counter.
    Counter,
}

impl WallKind {
    /// Codec code for this variant.
    pub fn code(self) -> u8 {
        match self {
            WallKind::Empty => 0,
            WallKind::Wall => 1,
            WallKind::Counter => 2,
        }
    }

    /// Look up a variant by codec code.
    pub fn from_code(code: u8) -> Option<WallKind> {
        match code {
            0 => Some(WallKind::Empty),
            1 => Some(WallKind::Wall),
            2 => Some(WallKind::Counter),
            _ => None,
        }
    }

    /// The variant the draw tool advances to on a repeated press.
    pub fn cycle(self) -> WallKind {
        match self {
            WallKind::Empty => WallKind::Wall,
            WallKind::Wall => WallKind::Counter,
            WallKind::Counter => WallKind::Empty,
        }
    }

    /// CSS class used by the grid renderer.
    pub fn class_name(self) -> &'static str {
        match self {
            WallKind::Empty => "line-empty",
            WallKind::Wall => "line-wall",
            WallKind::Counter => "line-half",
        }
    }
}

/// Shape of a corner cell, derived from which of its four neighboring
/// segments are present.
///
/// Corners are never set directly; [`crate::Layout::fix_corner_walls`]
/// recomputes them from the segment grid. The variant names describe the
/// arms that meet at the corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CornerShape {
    #[default]
    None,
    StubUp,
    StubRight,
    StubDown,
    StubLeft,
    Vertical,
    Horizontal,
    ElbowUpRight,
    ElbowDownRight,
    ElbowDownLeft,
    ElbowUpLeft,
    TeeUp,
    TeeRight,
    TeeDown,
    TeeLeft,
    Cross,
}

impl CornerShape {
    /// Shape for a given set of present arms, clockwise from the top.
    pub fn from_arms(up: bool, right: bool, down: bool, left: bool) -> CornerShape {
        match (up, right, down, left) {
            (false, false, false, false) => CornerShape::None,
            (true, false, false, false) => CornerShape::StubUp,
            (false, true, false, false) => CornerShape::StubRight,
            (false, false, true, false) => CornerShape::StubDown,
            (false, false, false, true) => CornerShape::StubLeft,
            (true, false, true, false) => CornerShape::Vertical,
            (false, true, false, true) => CornerShape::Horizontal,
            (true, true, false, false) => CornerShape::ElbowUpRight,
            (false, true, true, false) => CornerShape::ElbowDownRight,
            (false, false, true, true) => CornerShape::ElbowDownLeft,
            (true, false, false, true) => CornerShape::ElbowUpLeft,
            (true, true, false, true) => CornerShape::TeeUp,
            (true, true, true, false) => CornerShape::TeeRight,
            (false, true, true, true) => CornerShape::TeeDown,
            (true, false, true, true) => CornerShape::TeeLeft,
            (true, true, true, true) => CornerShape::Cross,
        }
    }

    /// The arms meeting at this corner, clockwise from the top.
    pub fn arms(self) -> (bool, bool, bool, bool) {
        match self {
            CornerShape::None => (false, false, false, false),
            CornerShape::StubUp => (true, false, false, false),
            CornerShape::StubRight => (false, true, false, false),
            CornerShape::StubDown => (false, false, true, false),
            CornerShape::StubLeft => (false, false, false, true),
            CornerShape::Vertical => (true, false, true, false),
            CornerShape::Horizontal => (false, true, false, true),
            CornerShape::ElbowUpRight => (true, true, false, false),
            CornerShape::ElbowDownRight => (false, true, true, false),
            CornerShape::ElbowDownLeft => (false, false, true, true),
            CornerShape::ElbowUpLeft => (true, false, false, true),
            CornerShape::TeeUp => (true, true, false, true),
            CornerShape::TeeRight => (true, true, true, false),
            CornerShape::TeeDown => (false, true, true, true),
            CornerShape::TeeLeft => (true, false, true, true),
            CornerShape::Cross => (true, true, true, true),
        }
    }

    /// Box-drawing glyph used by the text renderer.
    pub fn glyph(self) -> char {
        match self {
            CornerShape::None => ' ',
            CornerShape::StubUp => '╵',
            CornerShape::StubRight => '╶',
            CornerShape::StubDown => '╷',
            CornerShape::StubLeft => '╴',
            CornerShape::Vertical => '│',
            CornerShape::Horizontal => '─',
            CornerShape::ElbowUpRight => '└',
            CornerShape::ElbowDownRight => '┌',
            CornerShape::ElbowDownLeft => '┐',
            CornerShape::ElbowUpLeft => '┘',
            CornerShape::TeeUp => '┴',
            CornerShape::TeeRight => '├',
            CornerShape::TeeDown => '┬',
            CornerShape::TeeLeft => '┤',
            CornerShape::Cross => '┼',
        }
    }
}
