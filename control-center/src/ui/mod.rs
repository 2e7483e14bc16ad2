//! UI rendering functions for the control center TUI
//!
//! Rendering is a pure function of [`App`] and a clock value: transitions
//! are sampled here and never written back.

use std::time::Instant;

use ratatui::{widgets::Block, Frame};

use crate::animation::{Property, Target};
use crate::app::{App, Page};
use crate::layout::ShellLayout;

// Module declarations
mod components;
mod drawer;
mod header_footer;
mod notifications;
mod pages;
mod palette;

// Re-export public functions
pub use components::{render_entity_card, render_progress_row, render_stat_card, EntityCardView};
pub use drawer::{render_drawer, CLOSE_LABEL};
pub use header_footer::{render_footer, render_header, render_sidebar};
pub use notifications::render_notifications;
pub use pages::{
    render_dashboard, render_gallery, render_home, render_settings, render_tasks, AGENTS_TITLE,
    DASHBOARD_TITLE, SETTINGS_TITLE, TASKS_PLACEHOLDER, WORKFLOWS_TITLE,
};
pub use palette::{faded, tag_color, Palette};

/// Main UI rendering function - composes the shell and exactly one page view
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let area = f.area();
    let palette = Palette::for_theme(app.view.theme);
    f.render_widget(Block::default().style(palette.base()), area);

    let shell = ShellLayout::new(area, app.view.page);
    render_sidebar(f, &shell, app, &palette);
    render_header(f, &shell, app, &palette);

    // Page entrance: slide up while fading in
    let opacity = app.animator.sample(Target::Page, Property::Opacity, now);
    let translate = app.animator.sample(Target::Page, Property::TranslateY, now);
    let content = pages::translate_y(shell.content, translate, shell.content);

    match app.view.page {
        Page::Home => render_home(f, content, app, &palette, now),
        Page::Dashboard => render_dashboard(f, content, app, &palette),
        Page::Tasks => render_tasks(f, content, &palette),
        Page::Agents | Page::Workflows => {
            if let Some(kind) = app.view.page.gallery() {
                render_gallery(f, content, app, &palette, kind, now);
            }
        }
        Page::Settings => render_settings(f, content, app, &palette),
    }
    if opacity < 0.6 {
        f.buffer_mut()
            .set_style(shell.content, faded(ratatui::style::Style::default(), opacity));
    }

    render_footer(f, shell.footer, app, &palette);

    if app.drawer_open() {
        render_drawer(f, area, app, &palette, now);
    }

    render_notifications(f, app, area, now);
}
