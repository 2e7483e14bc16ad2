//! Notification rendering for user-visible feedback

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, NotificationLevel};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

/// Render the newest active notifications stacked above the footer, right-aligned
pub fn render_notifications(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let notifications = app.notifications.active(now);
    if notifications.is_empty() || area.width <= TOAST_WIDTH || area.height < TOAST_HEIGHT + 3 {
        return;
    }

    let x = area.right() - TOAST_WIDTH - 1;
    let mut bottom = area.bottom().saturating_sub(3);

    // Newest at the bottom, at most three
    for notification in notifications.iter().rev().take(3) {
        if bottom < area.y + TOAST_HEIGHT {
            break;
        }
        let rect = Rect::new(x, bottom - TOAST_HEIGHT, TOAST_WIDTH, TOAST_HEIGHT);
        bottom -= TOAST_HEIGHT;

        let (color, icon) = match notification.level {
            NotificationLevel::Error => (Color::Red, "✗"),
            NotificationLevel::Warning => (Color::Yellow, "⚠"),
            NotificationLevel::Info => (Color::Blue, "ℹ"),
            NotificationLevel::Success => (Color::Green, "✓"),
        };

        let text = vec![
            Line::from(Span::styled(
                format!("{} {}", icon, notification.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(notification.message.clone()),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        f.render_widget(Clear, rect);
        f.render_widget(Paragraph::new(text).block(block).wrap(Wrap { trim: true }), rect);
    }
}
