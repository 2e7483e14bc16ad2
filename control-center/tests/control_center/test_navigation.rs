//! Page routing and start-up state

use super::common::*;
use control_center::app::{Action, Page, Selection, Theme};
use std::time::Instant;

#[test]
fn test_initial_state() {
    let app = app_on(Page::Home);
    assert_eq!(app.view.page, Page::Home);
    assert_eq!(app.view.selection, Selection::None);
    assert_eq!(app.view.theme, Theme::Dark);
    assert_eq!(app.view.drawer_generation, 0);
    assert!(!app.drawer_open());
}

#[test]
fn test_start_page_option() {
    let app = app_on(Page::Dashboard);
    assert_eq!(app.view.page, Page::Dashboard);
}

#[test]
fn test_every_page_reachable_by_hotkey() {
    let mut app = app_on(Page::Home);
    for page in Page::ALL {
        app.dispatch(Action::SetPage(Page::from_hotkey(page.hotkey()).unwrap()), Instant::now());
        assert_eq!(app.view.page, page);
    }
}

#[test]
fn test_tab_cycles_through_all_pages() {
    let mut app = app_on(Page::Home);
    let mut seen = Vec::new();
    for _ in 0..Page::ALL.len() {
        seen.push(app.view.page);
        app.dispatch(Action::NextPage, Instant::now());
    }
    assert_eq!(seen, Page::ALL.to_vec());
    assert_eq!(app.view.page, Page::Home);
}

#[test]
fn test_page_change_keeps_selection_and_theme() {
    let now = Instant::now();
    let mut app = app_on(Page::Agents);
    app.dispatch(Action::SelectAgent(Some(3)), now);
    app.dispatch(Action::ToggleTheme, now);

    app.dispatch(Action::SetPage(Page::Tasks), now);
    assert_eq!(app.view.selection, Selection::Agent(3));
    assert_eq!(app.view.theme, Theme::Light);
}

#[test]
fn test_page_change_leaves_search() {
    let now = Instant::now();
    let mut app = app_on(Page::Workflows);
    app.dispatch(Action::StartSearch, now);
    app.dispatch(Action::SearchInput('v'), now);

    app.dispatch(Action::SetPage(Page::Agents), now);
    assert!(!app.is_searching);
    assert!(app.search_query.is_empty());
}
