//! Stateless building blocks: stat cards, progress rows, entity cards

use control_center_sdk::{clamp_percent, ColorTag, IconTag, Metric, ProgressItem, TrendDirection};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};

use super::palette::{tag_color, Palette};
use crate::icons::{IconRenderer, IconSize};
use crate::layout::{card_text_width, wrap_text, CardLayout, COLLAPSED_BODY_LINES};

/// One labeled metric with its trend
pub fn render_stat_card(
    f: &mut Frame,
    area: Rect,
    metric: &Metric,
    icons: &dyn IconRenderer,
    palette: &Palette,
) {
    let trend_color = match metric.trend() {
        TrendDirection::Up => palette.positive,
        TrendDirection::Down => palette.negative,
    };

    let lines = vec![
        Line::from(vec![
            icons.render_icon(metric.icon, IconSize::Medium, tag_color(metric.color)),
            Span::raw(" "),
            Span::styled(
                metric.delta.clone(),
                Style::default().fg(trend_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(metric.label.clone(), palette.muted())),
        Line::from(Span::styled(metric.value.clone(), palette.heading())),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border());
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Labeled percentage bar; the value is clamped before it reaches the gauge
pub fn render_progress_row(f: &mut Frame, area: Rect, item: &ProgressItem, palette: &Palette) {
    render_gauge_row(f, area, &item.label, item.ratio(), item.color, palette);
}

pub(crate) fn render_gauge_row(
    f: &mut Frame,
    area: Rect,
    label: &str,
    ratio: f64,
    color: ColorTag,
    palette: &Palette,
) {
    if area.height == 0 {
        return;
    }
    let ratio = ratio.clamp(0.0, 1.0);
    let percent = clamp_percent(ratio, 1.0).round() as u16;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let width = rows[0].width as usize;
    let value = format!("{}%", percent);
    let pad = width.saturating_sub(label.chars().count() + value.len());
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(label.to_string(), palette.muted()),
            Span::raw(" ".repeat(pad)),
            Span::styled(value, palette.heading()),
        ])),
        rows[0],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(tag_color(color)).bg(palette.surface))
        .ratio(ratio)
        .label("");
    f.render_widget(gauge, rows[1]);
}

/// What an entity card shows
pub struct EntityCardView<'a> {
    pub name: &'a str,
    pub subtitle: &'a str,
    pub badge: &'a str,
    pub badge_active: bool,
    pub body: &'a str,
    pub icon: IconTag,
    pub color: ColorTag,
    pub expanded: bool,
    /// Hover emphasis; above 1.0 the card is drawn raised
    pub scale: f32,
}

pub fn render_entity_card(
    f: &mut Frame,
    card: &CardLayout,
    view: &EntityCardView,
    icons: &dyn IconRenderer,
    palette: &Palette,
) {
    let raised = view.scale > 1.005;
    let accent = tag_color(view.color);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if raised { BorderType::Thick } else { BorderType::Rounded })
        .border_style(if raised { Style::default().fg(accent) } else { palette.border() });
    let inner = block.inner(card.area);
    f.render_widget(block, card.area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let badge_style = if view.badge_active {
        Style::default()
            .fg(tag_color(ColorTag::Emerald))
            .add_modifier(Modifier::BOLD)
    } else {
        palette.muted().add_modifier(Modifier::BOLD)
    };
    let badge = format!("[{}]", view.badge.to_uppercase());

    let name_style = if raised {
        palette.heading().fg(palette.accent)
    } else {
        palette.heading()
    };

    let text_width = card_text_width(card.area.width);
    let mut body = wrap_text(view.body, text_width);
    if !view.expanded && body.len() > COLLAPSED_BODY_LINES {
        body.truncate(COLLAPSED_BODY_LINES);
        if let Some(last) = body.last_mut() {
            ellipsize(last, text_width);
        }
    }

    let title_width = text_width.saturating_sub(badge.chars().count() + 4);
    let mut lines = vec![
        Line::from(vec![
            icons.render_icon(view.icon, IconSize::Small, accent),
            Span::raw(" "),
            Span::styled(truncate(view.name, title_width), name_style),
            Span::raw(" "),
            Span::styled(badge, badge_style),
        ]),
        Line::from(Span::styled(view.subtitle.to_uppercase(), palette.muted())),
    ];
    lines.extend(
        body.into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(palette.text)))),
    );

    let padded = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(1),
    );
    f.render_widget(Paragraph::new(lines), padded);

    if card.expand_toggle.area() > 0 {
        let label = if view.expanded { "[ less ]" } else { "[ more ]" };
        f.render_widget(
            Paragraph::new(Span::styled(label, Style::default().fg(palette.accent))),
            card.expand_toggle,
        );
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn ellipsize(line: &mut String, width: usize) {
    if line.chars().count() >= width {
        *line = line.chars().take(width.saturating_sub(1)).collect();
    }
    line.push('…');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("much too long", 5), "much…");
    }
}
