//! Detail drawer for the selected agent or workflow

use std::time::Instant;

use control_center_sdk::{Agent, ColorTag, Workflow};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::components::render_gauge_row;
use super::palette::{tag_color, Palette};
use crate::animation::{Property, Target};
use crate::app::App;
use crate::icons::IconSize;
use crate::layout::DrawerLayout;

pub const CLOSE_LABEL: &str = "[x] Close";

/// Render the drawer over the whole screen; the caller checks it is open
pub fn render_drawer(f: &mut Frame, area: Rect, app: &App, palette: &Palette, now: Instant) {
    let offset = app
        .animator
        .sample(Target::Drawer, Property::TranslateX, now);
    let drawer = DrawerLayout::new(area, offset);

    // Scrim: dim what is behind the panel
    f.buffer_mut()
        .set_style(drawer.scrim, Style::default().add_modifier(Modifier::DIM));

    if drawer.panel.width < 4 {
        return;
    }
    f.render_widget(Clear, drawer.panel);

    let block = Block::default()
        .borders(Borders::LEFT)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.surface).fg(palette.text));
    let inner = block.inner(drawer.panel);
    f.render_widget(block, drawer.panel);

    if drawer.close.area() > 0 {
        f.render_widget(
            Paragraph::new(Span::styled(CLOSE_LABEL, palette.muted().add_modifier(Modifier::BOLD))),
            drawer.close,
        );
    }

    let body = Rect::new(
        inner.x + 2,
        inner.y + 1,
        inner.width.saturating_sub(4),
        inner.height.saturating_sub(2),
    );

    if let Some(workflow) = app.selected_workflow() {
        render_workflow_detail(f, body, workflow, app, palette);
    } else if let Some(agent) = app.selected_agent() {
        render_agent_detail(f, body, agent, app, palette);
    }
}

#[allow(clippy::too_many_arguments)]
fn header_lines(
    app: &App,
    name: &str,
    subtitle: &str,
    badge: &str,
    badge_active: bool,
    icon: control_center_sdk::IconTag,
    color: ColorTag,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let badge_style = if badge_active {
        Style::default()
            .fg(tag_color(ColorTag::Emerald))
            .add_modifier(Modifier::BOLD)
    } else {
        palette.muted().add_modifier(Modifier::BOLD)
    };
    vec![
        Line::from(app.icons.render_icon(icon, IconSize::Large, tag_color(color))),
        Line::raw(""),
        Line::from(Span::styled(name.to_string(), palette.heading())),
        Line::from(vec![
            Span::styled(subtitle.to_uppercase(), palette.muted()),
            Span::raw("  "),
            Span::styled(badge.to_uppercase(), badge_style),
        ]),
    ]
}

fn render_workflow_detail(f: &mut Frame, area: Rect, workflow: &Workflow, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(workflow.steps.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(header_lines(
            app,
            &workflow.name,
            &workflow.category,
            workflow.status.as_str(),
            workflow.status.is_active(),
            workflow.icon,
            workflow.color,
            palette,
        )),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(workflow.description.as_str())
            .style(palette.muted())
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let steps: Vec<ListItem> = workflow
        .numbered_steps()
        .map(|(n, step)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>2}. ", n),
                    Style::default().fg(tag_color(workflow.color)).add_modifier(Modifier::BOLD),
                ),
                Span::raw(step.to_string()),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(steps).block(
            Block::default()
                .title(Span::styled(" PIPELINE ", palette.heading()))
                .borders(Borders::TOP)
                .border_style(palette.border()),
        ),
        chunks[2],
    );

    let logs: Vec<ListItem> = workflow
        .log_lines()
        .into_iter()
        .map(|line| ListItem::new(Span::styled(line, palette.muted())))
        .collect();
    f.render_widget(
        List::new(logs).block(
            Block::default()
                .title(Span::styled(" LOGS ", palette.heading()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(palette.border()),
        ),
        chunks[3],
    );
}

fn render_agent_detail(f: &mut Frame, area: Rect, agent: &Agent, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(header_lines(
            app,
            &agent.name,
            &agent.role,
            agent.status.as_str(),
            matches!(agent.status, control_center_sdk::AgentStatus::Active),
            agent.icon,
            agent.color,
            palette,
        )),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("MISSION", palette.heading())),
            Line::from(Span::styled(agent.mission.clone(), palette.muted())),
        ])
        .wrap(Wrap { trim: true }),
        chunks[1],
    );

    render_gauge_row(
        f,
        chunks[2],
        "Performance",
        agent.performance() / 100.0,
        agent.color,
        palette,
    );

    let tasks: Vec<ListItem> = agent
        .task_queue
        .iter()
        .map(|task| {
            ListItem::new(Line::from(vec![
                Span::styled("▸ ", Style::default().fg(tag_color(agent.color))),
                Span::raw(task.clone()),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(tasks).block(
            Block::default()
                .title(Span::styled(" TASK QUEUE ", palette.heading()))
                .borders(Borders::TOP)
                .border_style(palette.border()),
        ),
        chunks[3],
    );
}
