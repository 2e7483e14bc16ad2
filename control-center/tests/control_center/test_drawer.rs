//! Detail drawer selection and interaction

use super::common::*;
use control_center::app::{Action, Page, Selection};
use control_center::input::map_mouse;
use control_center::layout::DrawerLayout;
use control_center_sdk::EntityKind;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_select_then_close_twice() {
    let now = Instant::now();
    let mut app = app_on(Page::Workflows);
    app.dispatch(Action::SelectWorkflow(Some(4)), now);
    assert!(app.drawer_open());

    app.dispatch(Action::CloseDrawer, now);
    assert_eq!(app.view.selection, Selection::None);
    app.dispatch(Action::CloseDrawer, now);
    assert_eq!(app.view.selection, Selection::None);
    assert!(!app.drawer_open());
}

#[test]
fn test_selecting_none_closes() {
    let now = Instant::now();
    let mut app = app_on(Page::Agents);
    app.dispatch(Action::SelectAgent(Some(0)), now);
    app.dispatch(Action::SelectAgent(None), now);
    assert_eq!(app.view.selection, Selection::None);
}

#[test]
fn test_agent_and_workflow_are_mutually_exclusive() {
    let now = Instant::now();
    let mut app = app_on(Page::Workflows);
    app.dispatch(Action::SelectWorkflow(Some(1)), now);
    app.dispatch(Action::SelectAgent(Some(1)), now);
    assert!(app.selected_workflow().is_none());
    assert_eq!(app.selected_agent().unwrap().name, app.catalog.agents[1].name);
}

#[test]
fn test_drawer_generation_counts_mounts() {
    let now = Instant::now();
    let mut app = app_on(Page::Workflows);
    for _ in 0..3 {
        app.dispatch(Action::SelectWorkflow(Some(2)), now);
    }
    app.dispatch(Action::SelectWorkflow(Some(999)), now);
    assert_eq!(app.view.drawer_generation, 3);
    assert_eq!(app.view.selection, Selection::None);
}

#[test]
fn test_clicking_create_image_tool_opens_its_drawer() {
    let mut app = app_on(Page::Workflows);
    let index = app
        .catalog
        .workflows
        .iter()
        .position(|w| w.name == "Create Image Tool")
        .unwrap();

    let buffer = render(&mut app);
    let (x, y) = find_text(&buffer, "Create Image Tool").unwrap();
    let action = map_mouse(&app, click(x, y)).unwrap();
    app.dispatch(action, Instant::now());
    assert_eq!(app.view.selection, Selection::Workflow(index));

    let buffer = render(&mut app);
    let workflow = &app.catalog.workflows[index];
    for (n, step) in workflow.numbered_steps() {
        assert!(buffer_contains(&buffer, &format!("{}. {}", n, step)));
    }
    assert!(buffer_contains(&buffer, " 1. Receive prompt"));
    assert!(!buffer_contains(&buffer, " 0. "));

    // Emerald ACTIVE badge next to the category
    let (bx, by) = find_text(&buffer, "ACTIVE").unwrap();
    let (r, g, b) = control_center_sdk::ColorTag::Emerald.rgb();
    assert_eq!(buffer[(bx, by)].fg, ratatui::style::Color::Rgb(r, g, b));

    // Seeded logs end with the healthy trailer
    assert!(buffer_contains(&buffer, control_center_sdk::ACTIVE_TRAILER[1]));
}

#[test]
fn test_scrim_click_closes_drawer() {
    let mut app = app_on(Page::Agents);
    app.dispatch(Action::SelectAgent(Some(2)), Instant::now());
    render(&mut app);

    let action = map_mouse(&app, click(2, 2)).unwrap();
    app.dispatch(action, Instant::now());
    assert!(!app.drawer_open());
}

#[test]
fn test_close_control_closes_drawer() {
    let mut app = app_on(Page::Agents);
    app.dispatch(Action::SelectAgent(Some(2)), Instant::now());
    render(&mut app);

    let drawer = DrawerLayout::new(app.viewport, 0.0);
    let action = map_mouse(&app, click(drawer.close.x + 1, drawer.close.y)).unwrap();
    app.dispatch(action, Instant::now());
    assert!(!app.drawer_open());
}

#[test]
fn test_agent_drawer_shows_mission_and_tasks() {
    let mut app = app_on(Page::Agents);
    app.dispatch(Action::Activate(control_center::app::CardId::new(EntityKind::Agent, 0)), Instant::now());
    let buffer = render(&mut app);

    let agent = &app.catalog.agents[0];
    assert!(buffer_contains(&buffer, "MISSION"));
    assert!(buffer_contains(&buffer, "Creates advanced cinematic video"));
    assert!(buffer_contains(&buffer, "lighting and motion."));
    assert!(buffer_contains(&buffer, "TASK QUEUE"));
    assert!(buffer_contains(&buffer, &agent.task_queue[0]));

    // Gauge label and its percentage share a row
    let (_, row) = find_text(&buffer, "Performance").unwrap();
    let line = buffer_to_string(&buffer).lines().nth(row as usize).unwrap().to_string();
    assert!(line.contains(&format!("{}%", agent.performance().round() as u16)));
    assert!(line.contains("94%"));
}
