//! One view per page

use std::time::Instant;

use control_center_sdk::EntityKind;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::components::{render_entity_card, render_progress_row, render_stat_card, EntityCardView};
use super::palette::{faded, tag_color, Palette};
use crate::animation::{Property, Target, HOVER_SCALE, PX_PER_ROW};
use crate::app::{App, CardId};
use crate::icons::IconSize;
use crate::layout::{
    gallery_grid_area, gallery_layout, HomeLayout, GALLERY_HEADING_HEIGHT, PRIMARY_BUTTON_LABEL,
    SECONDARY_BUTTON_LABEL,
};

pub const DASHBOARD_TITLE: &str = "COMMAND CENTER";
pub const TASKS_PLACEHOLDER: &str = "LIVE OPERATIONS FEED...";
pub const SETTINGS_TITLE: &str = "SYSTEM CONFIGURATION";
pub const WORKFLOWS_TITLE: &str = "PRODUCTION CATALOG";
pub const AGENTS_TITLE: &str = "EXPERT SQUAD";

/// Move a rect down by a `TranslateY` value, clipped to `bounds`
pub(crate) fn translate_y(rect: Rect, translate: f32, bounds: Rect) -> Rect {
    let rows = (translate.max(0.0) / PX_PER_ROW).round() as u16;
    let y = rect.y.saturating_add(rows).min(bounds.bottom());
    let height = rect.height.min(bounds.bottom() - y);
    Rect::new(rect.x, y, rect.width, height)
}

/// Shrink a rect around its center by a scale below 1
fn scale_rect(rect: Rect, scale: f32) -> Rect {
    let scale = scale.clamp(0.0, 1.0);
    let width = (rect.width as f32 * scale).round() as u16;
    let height = (rect.height as f32 * scale).round() as u16;
    Rect::new(
        rect.x + (rect.width - width) / 2,
        rect.y + (rect.height - height) / 2,
        width,
        height,
    )
}

pub fn render_home(f: &mut Frame, area: Rect, app: &App, palette: &Palette, now: Instant) {
    let hero = &app.catalog.hero;
    let layout = HomeLayout::new(area, hero.features.len());
    let sample = |target, property| app.animator.sample(target, property, now);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            app.icons.render_icon(control_center_sdk::IconTag::Sparkles, IconSize::Small, palette.accent),
            Span::styled(
                format!(" {}", hero.tagline.to_uppercase()),
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center),
        layout.tagline,
    );

    let title_opacity = sample(Target::HeroTitle, Property::Opacity);
    let title_area = translate_y(layout.title, sample(Target::HeroTitle, Property::TranslateY), area);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", hero.title.to_uppercase()), faded(palette.heading(), title_opacity)),
            Span::styled(
                hero.highlight.to_uppercase(),
                faded(palette.heading().fg(palette.accent), title_opacity),
            ),
        ]))
        .alignment(Alignment::Center),
        title_area,
    );

    let subtitle_opacity = sample(Target::HeroSubtitle, Property::Opacity);
    let subtitle_area = translate_y(
        layout.subtitle,
        sample(Target::HeroSubtitle, Property::TranslateY),
        area,
    );
    f.render_widget(
        Paragraph::new(hero.subtitle.as_str())
            .style(faded(palette.muted(), subtitle_opacity))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        subtitle_area,
    );

    f.render_widget(
        Paragraph::new(PRIMARY_BUTTON_LABEL)
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.text).bg(palette.accent).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(palette.accent))),
        layout.primary_button,
    );
    f.render_widget(
        Paragraph::new(SECONDARY_BUTTON_LABEL)
            .alignment(Alignment::Center)
            .style(palette.heading())
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(palette.border())),
        layout.secondary_button,
    );

    for (i, (feature, rect)) in hero.features.iter().zip(layout.features.iter()).enumerate() {
        let opacity = sample(Target::Feature(i), Property::Opacity);
        let tile = scale_rect(*rect, sample(Target::Feature(i), Property::Scale));
        if tile.width < 4 || tile.height < 3 {
            continue;
        }
        let lines = vec![
            Line::from(vec![
                app.icons.render_icon(feature.icon, IconSize::Medium, tag_color(feature.color)),
                Span::styled(feature.title.to_uppercase(), palette.heading()),
            ]),
            Line::from(Span::styled(feature.description.clone(), palette.muted())),
        ];
        f.render_widget(
            Paragraph::new(lines)
                .style(faded(Style::default(), opacity))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(faded(palette.border(), opacity)),
                ),
            tile,
        );
    }
}

pub fn render_dashboard(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let catalog = &app.catalog;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let heading = vec![
        Line::from(vec![
            Span::styled(DASHBOARD_TITLE, palette.heading()),
            Span::raw("   "),
            Span::styled("● Status: Synced", Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            format!(
                "Operational system status. {} expert agents and {} active production units.",
                catalog.agents.len(),
                catalog.active_workflow_count()
            ),
            palette.muted(),
        )),
    ];
    f.render_widget(Paragraph::new(heading), rows[0]);

    if !catalog.metrics.is_empty() {
        let count = catalog.metrics.len() as u32;
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..count).map(|_| Constraint::Ratio(1, count)).collect::<Vec<_>>())
            .split(rows[1]);
        for (metric, cell) in catalog.metrics.iter().zip(cells.iter()) {
            render_stat_card(f, *cell, metric, app.icons.as_ref(), palette);
        }
    }

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .split(rows[2]);

    render_throughput(f, bottom[0], app, palette);

    let block = Block::default()
        .title(Span::styled(" SQUAD PERFORMANCE ", palette.heading()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border());
    let inner = block.inner(bottom[1]);
    f.render_widget(block, bottom[1]);

    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            catalog
                .progress
                .iter()
                .map(|_| Constraint::Length(3))
                .collect::<Vec<_>>(),
        )
        .margin(1)
        .split(inner);
    for (item, slot) in catalog.progress.iter().zip(slots.iter()) {
        render_progress_row(f, *slot, item, palette);
    }
}

fn render_throughput(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            app.icons.render_icon(control_center_sdk::IconTag::Chart, IconSize::Small, palette.accent),
            Span::styled(" OPERATIONAL THROUGHPUT ", palette.heading()),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let values = &app.catalog.throughput;
    if values.is_empty() || inner.width == 0 {
        return;
    }
    let gap = 1u16;
    let bar_width = (inner.width.saturating_sub(2) / values.len() as u16)
        .saturating_sub(gap)
        .max(1);

    let bars: Vec<Bar> = values
        .iter()
        .map(|v| Bar::default().value((*v).min(100)).text_value(String::new()))
        .collect();
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .max(100)
        .bar_width(bar_width)
        .bar_gap(gap)
        .bar_style(Style::default().fg(palette.accent));
    f.render_widget(chart, Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), inner.height.saturating_sub(1)));
}

pub fn render_gallery(f: &mut Frame, area: Rect, app: &App, palette: &Palette, kind: EntityKind, now: Instant) {
    let (title, subtitle) = match kind {
        EntityKind::Workflow => (
            WORKFLOWS_TITLE,
            "Manage your automated creation and distribution tools.",
        ),
        EntityKind::Agent => (
            AGENTS_TITLE,
            "Specialised agents dedicated to strategy and creation.",
        ),
    };
    let heading = Rect::new(area.x + 1, area.y, area.width.saturating_sub(2), GALLERY_HEADING_HEIGHT.min(area.height));
    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(title, palette.heading())),
            Line::from(Span::styled(subtitle, palette.muted())),
        ]),
        heading,
    );

    let grid = gallery_grid_area(area);
    let specs = app.card_specs(kind);
    if specs.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(
                format!("No matches for '{}'", app.search_query),
                palette.muted(),
            )),
            grid,
        );
        return;
    }

    for card in gallery_layout(grid, &specs, app.gallery_scroll) {
        let view = entity_view(app, card.id, now);
        if let Some(view) = view {
            render_entity_card(f, &card, &view, app.icons.as_ref(), palette);
        }
    }
}

fn entity_view(app: &App, id: CardId, now: Instant) -> Option<EntityCardView<'_>> {
    let expanded = app.is_expanded(id);
    let scale = if app.animator.enabled() {
        app.animator.sample(Target::Card(id), Property::Scale, now)
    } else if app.hovered_card == Some(id) && !expanded {
        HOVER_SCALE
    } else {
        1.0
    };
    match id.kind {
        EntityKind::Agent => app.catalog.agent(id.index).map(|agent| EntityCardView {
            name: &agent.name,
            subtitle: &agent.role,
            badge: agent.status.as_str(),
            badge_active: matches!(agent.status, control_center_sdk::AgentStatus::Active),
            body: &agent.mission,
            icon: agent.icon,
            color: agent.color,
            expanded,
            scale,
        }),
        EntityKind::Workflow => app.catalog.workflow(id.index).map(|workflow| EntityCardView {
            name: &workflow.name,
            subtitle: &workflow.category,
            badge: workflow.status.as_str(),
            badge_active: workflow.status.is_active(),
            body: &workflow.description,
            icon: workflow.icon,
            color: workflow.color,
            expanded,
            scale,
        }),
    }
}

pub fn render_tasks(f: &mut Frame, area: Rect, palette: &Palette) {
    let text = vec![
        Line::raw(""),
        Line::raw(""),
        Line::from(Span::styled(TASKS_PLACEHOLDER, palette.muted().add_modifier(Modifier::BOLD))),
    ];
    f.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

pub fn render_settings(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let text = vec![
        Line::raw(""),
        Line::raw(""),
        Line::from(Span::styled(SETTINGS_TITLE, palette.muted().add_modifier(Modifier::BOLD))),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Theme: ", palette.muted()),
            Span::styled(app.view.theme.as_str().to_uppercase(), palette.heading().fg(palette.accent)),
            Span::styled("  (press t to switch)", palette.muted()),
        ]),
        Line::from(vec![
            Span::styled("Animations: ", palette.muted()),
            Span::styled(
                if app.animator.enabled() { "ON" } else { "OFF" },
                palette.heading(),
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}
