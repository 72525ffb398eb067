//! End-to-end interaction scenarios against the controllers

use pretty_assertions::assert_eq;

use kitchenplan::{
    codec, CornerShape, CursorHint, Dimensions, DrawController, ItemKind, Layout, PlacedItem,
    PlanController, PointerButton, Position, Rotation, WallKind,
};

fn three_by_three() -> Layout {
    Layout::empty(Dimensions::new(3, 3))
}

#[test]
fn click_drag_release_swaps_and_clears_selection() {
    let a = Position::new(0, 0);
    let b = Position::new(2, 2);
    let layout = three_by_three()
        .set_item(a, Some(PlacedItem::new(ItemKind::Fridge)))
        .set_item(
            b,
            Some(PlacedItem::with_rotation(ItemKind::Oven, Rotation::R90)),
        );
    let mut plan = PlanController::new(layout);

    plan.pointer_down(a, PointerButton::Primary);
    plan.pointer_enter(b);
    assert!(plan.pointer_up(PointerButton::Primary));

    assert_eq!(
        plan.layout().item_at(a),
        Some(PlacedItem::with_rotation(ItemKind::Oven, Rotation::R90))
    );
    assert_eq!(plan.layout().item_at(b), Some(PlacedItem::new(ItemKind::Fridge)));
    assert_eq!(plan.selected_cell(), None);
}

#[test]
fn selection_enables_rotate_and_delete() {
    let pos = Position::new(2, 0);
    let mut plan = PlanController::new(
        three_by_three().set_item(pos, Some(PlacedItem::new(ItemKind::Microwave))),
    );

    // No selection yet: actions are no-ops.
    assert!(!plan.rotate_selected_right());

    plan.pointer_down(pos, PointerButton::Primary);
    plan.pointer_up(PointerButton::Primary);
    assert_eq!(plan.selected_cell(), Some(pos));
    assert_eq!(
        plan.cursor_hint(),
        CursorHint::Selected(PlacedItem::new(ItemKind::Microwave))
    );

    assert!(plan.rotate_selected_right());
    assert_eq!(
        plan.layout().item_at(pos),
        Some(PlacedItem::with_rotation(ItemKind::Microwave, Rotation::R90))
    );
    assert!(plan.rotate_selected_left());
    assert_eq!(plan.layout().item_at(pos), Some(PlacedItem::new(ItemKind::Microwave)));

    assert!(plan.delete_selected());
    assert_eq!(plan.layout().item_at(pos), None);
    assert_eq!(plan.selected_cell(), None);
}

#[test]
fn palette_drop_replaces_without_swap_back() {
    let pos = Position::new(0, 2);
    let mut plan = PlanController::new(
        three_by_three().set_item(pos, Some(PlacedItem::new(ItemKind::Shelf))),
    );

    plan.begin_menu_drag(ItemKind::Fridge);
    plan.menu_drag(pos);
    assert_eq!(
        plan.cursor_hint(),
        CursorHint::Replace {
            existing: PlacedItem::new(ItemKind::Shelf),
            incoming: ItemKind::Fridge,
        }
    );
    assert!(plan.menu_drop());

    // The shelf is discarded, not returned anywhere.
    assert_eq!(plan.layout().item_at(pos), Some(PlacedItem::new(ItemKind::Fridge)));
    assert_eq!(plan.layout().elements().len(), 1);
}

#[test]
fn url_token_follows_every_mutation() {
    let mut plan = PlanController::new(three_by_three());
    let mut token = codec::encode(plan.layout());

    plan.begin_menu_drag(ItemKind::Sink);
    plan.menu_drag(Position::new(4, 4));
    if plan.menu_drop() {
        token = codec::encode(plan.layout());
    }
    assert_eq!(codec::decode(&token).unwrap(), *plan.layout());

    if plan.pointer_down(Position::new(4, 4), PointerButton::Secondary) {
        token = codec::encode(plan.layout());
    }
    let decoded = codec::decode(&token).unwrap();
    assert_eq!(
        decoded.item_at(Position::new(4, 4)),
        Some(PlacedItem::with_rotation(ItemKind::Sink, Rotation::R90))
    );
}

#[test]
fn wall_stroke_paints_a_contiguous_line() {
    let mut draw = DrawController::new(three_by_three());

    // Press the segment left of room row 1, then drag rightwards through
    // the corner and the next segment.
    draw.pointer_down(Position::new(1, 0));
    draw.pointer_enter(Position::new(1, 1));
    draw.pointer_enter(Position::new(1, 2));

    assert_eq!(draw.layout().wall_at(Position::new(1, 0)), WallKind::Wall);
    assert_eq!(draw.layout().wall_at(Position::new(1, 2)), WallKind::Wall);
    // The corner between them derives a straight join.
    assert_eq!(
        draw.layout().corner_at(Position::new(1, 1)),
        CornerShape::Horizontal
    );
}

#[test]
fn fast_pointer_row_skip_fills_the_gap() {
    // Press segment (1,0); the next sample already sits in a room a row
    // over and two columns away, so the intervening segment was skipped.
    let mut draw = DrawController::new(three_by_three());
    draw.pointer_down(Position::new(1, 0));
    draw.room_pointer_move(Position::new(0, 2));
    assert_eq!(draw.layout().wall_at(Position::new(1, 2)), WallKind::Wall);
}

#[test]
fn fast_pointer_column_skip_fills_the_gap() {
    let mut draw = DrawController::new(three_by_three());
    draw.pointer_down(Position::new(0, 1));
    draw.room_pointer_move(Position::new(2, 2));
    assert_eq!(draw.layout().wall_at(Position::new(2, 1)), WallKind::Wall);
}

#[test]
fn abandoned_stroke_keeps_painted_cells_only() {
    let mut draw = DrawController::new(three_by_three());
    draw.pointer_down(Position::new(0, 1));
    draw.pointer_leave();
    // Painted incrementally, so the pressed cell stays; nothing else moves.
    let expected = three_by_three().set_wall(Position::new(0, 1), WallKind::Wall);
    assert_eq!(draw.layout(), &expected);

    // The stroke is over: entering more cells paints nothing.
    draw.pointer_enter(Position::new(2, 1));
    assert_eq!(draw.layout(), &expected);
}

#[test]
fn remove_walls_after_drawing_restores_empty_plan() {
    let mut draw = DrawController::new(three_by_three());
    draw.pointer_down(Position::new(0, 1));
    draw.pointer_enter(Position::new(1, 2));
    draw.pointer_up(PointerButton::Primary);
    assert!(draw.remove_walls());
    assert_eq!(draw.layout(), &three_by_three());
}

#[test]
fn draw_and_arrange_share_one_layout_vocabulary() {
    // Draw walls, hand the layout to the plan controller, keep editing,
    // and the token still round-trips.
    let mut draw = DrawController::new(three_by_three());
    draw.pointer_down(Position::new(1, 0));
    draw.pointer_enter(Position::new(1, 2));
    draw.pointer_up(PointerButton::Primary);

    let mut plan = PlanController::new(draw.layout().clone());
    plan.begin_menu_drag(ItemKind::PrepStation);
    plan.menu_drag(Position::new(0, 0));
    plan.menu_drop();

    let reloaded = codec::decode(&codec::encode(plan.layout())).unwrap();
    assert_eq!(&reloaded, plan.layout());
    assert_eq!(reloaded.wall_at(Position::new(1, 2)), WallKind::Wall);
    assert_eq!(
        reloaded.item_at(Position::new(0, 0)),
        Some(PlacedItem::new(ItemKind::PrepStation))
    );
}
