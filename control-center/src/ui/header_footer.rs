//! Sidebar, header and footer rendering functions

use control_center_sdk::IconTag;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::palette::Palette;
use crate::app::{App, Page, Theme};
use crate::icons::IconSize;
use crate::layout::ShellLayout;

pub fn render_sidebar(f: &mut Frame, shell: &ShellLayout, app: &App, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(palette.border())
        .style(Style::default().bg(palette.surface));
    f.render_widget(block, shell.sidebar);

    let logo = Paragraph::new(Line::from(vec![
        app.icons
            .render_icon(IconTag::Zap, IconSize::Medium, palette.accent),
        Span::styled("CONTROL", palette.heading()),
    ]));
    f.render_widget(logo, Rect::new(shell.logo.x, shell.logo.y + 1, shell.logo.width.saturating_sub(1), 1));

    for (page, rect) in &shell.nav {
        let active = *page == app.view.page;
        let style = if active {
            Style::default()
                .fg(palette.text)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            palette.muted()
        };
        let line = Line::from(vec![
            Span::styled(format!("{} ", page.hotkey()), palette.muted()),
            app.icons.render_icon(page.icon(), IconSize::Small, style.fg.unwrap_or(palette.muted)),
            Span::styled(format!(" {}", page.label()), style),
        ]);
        f.render_widget(
            Paragraph::new(line).style(if active { style } else { Style::default() }),
            Rect::new(rect.x, rect.y, rect.width, 1),
        );
    }
}

pub fn render_header(f: &mut Frame, shell: &ShellLayout, app: &App, palette: &Palette) {
    let Some(area) = shell.header else {
        return;
    };

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(palette.border());
    f.render_widget(block, area);

    let title = Paragraph::new(Span::styled(
        app.view.page.as_str().to_uppercase(),
        palette.heading(),
    ));
    f.render_widget(title, Rect::new(area.x + 2, area.y + 1, area.width.saturating_sub(4), 1));

    if let Some(search) = shell.search {
        let (text, style) = if app.is_searching {
            (format!("/ {}▏", app.search_query), Style::default().fg(palette.text))
        } else if app.search_query.is_empty() {
            ("/ Search...".to_string(), palette.muted())
        } else {
            (format!("/ {}", app.search_query), Style::default().fg(palette.accent))
        };
        let style = if app.view.page.gallery().is_some() {
            style
        } else {
            style.add_modifier(Modifier::DIM)
        };
        f.render_widget(Paragraph::new(Span::styled(text, style)).style(Style::default().bg(palette.surface)), search);
    }

    if let Some(toggle) = shell.theme_toggle {
        let label = match app.view.theme {
            Theme::Dark => "[t] ◑ Dark",
            Theme::Light => "[t] ◐ Light",
        };
        f.render_widget(
            Paragraph::new(Span::styled(label, Style::default().fg(palette.accent))),
            toggle,
        );
    }
}

pub fn render_footer(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let key = |k: &str| Span::styled(format!("[{}]", k), Style::default().add_modifier(Modifier::BOLD));

    let footer_text = if app.drawer_open() {
        Line::from(vec![
            key("Esc"),
            Span::raw(" Close  "),
            key("t"),
            Span::raw(" Theme  "),
            key("Q"),
            Span::raw(" Quit"),
        ])
    } else if app.is_searching {
        Line::from(vec![
            Span::styled("TYPE", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" to filter  "),
            key("Enter"),
            Span::raw(" Keep  "),
            key("Esc"),
            Span::raw(" Clear"),
        ])
    } else if app.view.page.gallery().is_some() {
        Line::from(vec![
            key("←↑↓→/hjkl"),
            Span::raw(" Focus  "),
            key("Enter"),
            Span::raw(" Open  "),
            key("Space"),
            Span::raw(" Expand  "),
            key("/"),
            Span::raw(" Search  "),
            key("1-6"),
            Span::raw(" Pages  "),
            key("Q"),
            Span::raw(" Quit"),
        ])
    } else if app.view.page == Page::Home {
        Line::from(vec![
            key("2"),
            Span::raw(" Dashboard  "),
            key("5"),
            Span::raw(" Workflows  "),
            key("Tab"),
            Span::raw(" Next page  "),
            key("t"),
            Span::raw(" Theme  "),
            key("Q"),
            Span::raw(" Quit"),
        ])
    } else {
        Line::from(vec![
            key("1-6"),
            Span::raw(" Pages  "),
            key("Tab"),
            Span::raw(" Next page  "),
            key("t"),
            Span::raw(" Theme  "),
            key("Q"),
            Span::raw(" Quit"),
        ])
    };

    let footer = Paragraph::new(footer_text).style(palette.muted()).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(palette.border()),
    );
    f.render_widget(footer, area);
}
