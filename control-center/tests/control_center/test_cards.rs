//! Card hover and expand state

use super::common::*;
use control_center::app::{Action, CardId, Page, Selection};
use control_center::input::{hit_test, map_mouse, Hit};
use control_center_sdk::EntityKind;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use control_center::layout::gallery_layout;
use std::time::Instant;

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_expand_toggles_are_isolated() {
    let now = Instant::now();
    let mut app = app_on(Page::Workflows);
    let first = CardId::new(EntityKind::Workflow, 0);
    let second = CardId::new(EntityKind::Workflow, 1);

    app.dispatch(Action::ToggleExpand(first), now);
    assert!(app.is_expanded(first));
    assert!(!app.is_expanded(second));

    app.dispatch(Action::ToggleExpand(second), now);
    app.dispatch(Action::ToggleExpand(first), now);
    assert!(!app.is_expanded(first));
    assert!(app.is_expanded(second));
}

#[test]
fn test_expand_state_is_independent_per_gallery() {
    let now = Instant::now();
    let mut app = app_on(Page::Workflows);
    app.dispatch(Action::ToggleExpand(CardId::new(EntityKind::Workflow, 0)), now);
    assert!(!app.is_expanded(CardId::new(EntityKind::Agent, 0)));
}

#[test]
fn test_clicking_expand_control_does_not_open_drawer() {
    let mut app = app_on(Page::Workflows);
    render(&mut app);

    let grid = app.gallery_area().unwrap();
    let card = gallery_layout(grid, &app.card_specs(EntityKind::Workflow), 0)[2];
    let toggle = card.expand_toggle;

    let action = map_mouse(&app, mouse(MouseEventKind::Down(MouseButton::Left), toggle.x, toggle.y)).unwrap();
    app.dispatch(action, Instant::now());

    assert!(app.is_expanded(card.id));
    assert_eq!(app.view.selection, Selection::None);
}

#[test]
fn test_expanded_card_shows_full_description() {
    let mut app = app_on(Page::Workflows);
    let card = CardId::new(EntityKind::Workflow, 0);
    let tail = "schedule.";

    let collapsed = render(&mut app);
    assert!(!buffer_contains(&collapsed, tail));

    app.dispatch(Action::ToggleExpand(card), Instant::now());
    let expanded = render(&mut app);
    assert!(buffer_contains(&expanded, tail));
}

#[test]
fn test_pointer_movement_drives_hover() {
    let mut app = app_on(Page::Agents);
    render(&mut app);

    let grid = app.gallery_area().unwrap();
    let card = gallery_layout(grid, &app.card_specs(EntityKind::Agent), 0)[1];
    let over = mouse(MouseEventKind::Moved, card.area.x + 3, card.area.y + 1);
    assert_eq!(hit_test(&app, over.column, over.row), Hit::Card(card.id));

    let action = map_mouse(&app, over).unwrap();
    app.dispatch(action, Instant::now());
    assert_eq!(app.hovered_card, Some(card.id));

    // Moving within the same card changes nothing
    assert_eq!(map_mouse(&app, mouse(MouseEventKind::Moved, card.area.x + 4, card.area.y + 1)), None);

    let away = mouse(MouseEventKind::Moved, 0, 0);
    let action = map_mouse(&app, away).unwrap();
    app.dispatch(action, Instant::now());
    assert_eq!(app.hovered_card, None);
}

#[test]
fn test_keyboard_focus_opens_focused_card() {
    let now = Instant::now();
    let mut app = app_on(Page::Workflows);
    render(&mut app);

    app.dispatch(Action::MoveFocus(control_center::app::FocusMove::Right), now);
    app.dispatch(Action::MoveFocus(control_center::app::FocusMove::Right), now);
    app.dispatch(Action::ActivateFocused, now);
    assert_eq!(app.view.selection, Selection::Workflow(1));
}
