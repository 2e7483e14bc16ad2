//! Rendering against a test backend

use super::common::*;
use control_center::app::{Action, Page};
use control_center::ui::{
    AGENTS_TITLE, DASHBOARD_TITLE, SETTINGS_TITLE, TASKS_PLACEHOLDER, WORKFLOWS_TITLE,
};
use std::time::Instant;

/// Text only the given page view draws
fn marker(app: &control_center::app::App, page: Page) -> String {
    match page {
        Page::Home => app.catalog.hero.subtitle.split_whitespace().take(4).collect::<Vec<_>>().join(" "),
        Page::Dashboard => DASHBOARD_TITLE.to_string(),
        Page::Tasks => TASKS_PLACEHOLDER.to_string(),
        Page::Agents => AGENTS_TITLE.to_string(),
        Page::Workflows => WORKFLOWS_TITLE.to_string(),
        Page::Settings => SETTINGS_TITLE.to_string(),
    }
}

#[test]
fn test_each_page_renders_exactly_one_view() {
    let mut app = app_on(Page::Home);
    for page in Page::ALL {
        app.dispatch(Action::SetPage(page), Instant::now());
        let buffer = render(&mut app);

        for other in Page::ALL {
            let shown = buffer_contains(&buffer, &marker(&app, other));
            assert_eq!(shown, other == page, "page {} shows view of {}", page, other);
        }
    }
}

#[test]
fn test_home_has_no_header() {
    let mut app = app_on(Page::Home);
    let buffer = render(&mut app);
    assert!(!buffer_contains(&buffer, "Search..."));

    app.dispatch(Action::SetPage(Page::Dashboard), Instant::now());
    let buffer = render(&mut app);
    assert!(buffer_contains(&buffer, "Search..."));
    assert!(buffer_contains(&buffer, "DASHBOARD"));
}

#[test]
fn test_dashboard_shows_metrics_and_progress() {
    let mut app = app_on(Page::Dashboard);
    let buffer = render(&mut app);

    for metric in &app.catalog.metrics {
        assert!(buffer_contains(&buffer, &metric.label), "missing {}", metric.label);
    }
    for item in &app.catalog.progress {
        assert!(buffer_contains(&buffer, &item.label));
        assert!(buffer_contains(&buffer, &format!("{}%", item.percentage().round() as u64)));
    }
    assert!(buffer_contains(&buffer, "OPERATIONAL THROUGHPUT"));
}

#[test]
fn test_gallery_shows_every_card() {
    let mut app = app_on(Page::Agents);
    let buffer = render(&mut app);
    for agent in &app.catalog.agents {
        assert!(buffer_contains(&buffer, &agent.name), "missing {}", agent.name);
    }
}

#[test]
fn test_search_filters_rendered_cards() {
    let now = Instant::now();
    let mut app = app_on(Page::Workflows);
    app.dispatch(Action::StartSearch, now);
    for c in "vfx".chars() {
        app.dispatch(Action::SearchInput(c), now);
    }
    let buffer = render(&mut app);
    assert!(buffer_contains(&buffer, "VFX Converter"));
    assert!(!buffer_contains(&buffer, "Report Generator"));
}

#[test]
fn test_theme_toggle_changes_palette() {
    let mut app = app_on(Page::Settings);
    let dark = render(&mut app);
    assert!(buffer_contains(&dark, "DARK"));

    app.dispatch(Action::ToggleTheme, Instant::now());
    let light = render(&mut app);
    assert!(buffer_contains(&light, "LIGHT"));
    assert_ne!(dark[(0, 0)].bg, light[(0, 0)].bg);
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut app = app_on(Page::Workflows);
    app.dispatch(Action::SelectWorkflow(Some(0)), Instant::now());
    let mut terminal = ratatui::Terminal::new(ratatui::backend::TestBackend::new(20, 6)).unwrap();
    terminal
        .draw(|f| {
            app.viewport = f.area();
            control_center::ui::ui(f, &app, settled());
        })
        .unwrap();
}

#[test]
fn test_mid_transition_frame_renders() {
    let options = control_center::app::AppOptions {
        start_page: Page::Home,
        animations: true,
        ascii_icons: true,
    };
    let mut app = control_center::app::App::new(
        control_center::catalog::Catalog::seeded(),
        Box::new(control_center::preferences::MemoryPreferenceStore::new()),
        options,
    );
    let start = Instant::now();
    let buffer = render_at(&mut app, start);
    assert!(buffer_contains(&buffer, "Launch Dashboard"));
    assert!(app.animator.is_animating(start));
}
