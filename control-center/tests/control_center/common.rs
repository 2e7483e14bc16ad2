//! Common test utilities for control center tests

use std::time::{Duration, Instant};

use control_center::app::{App, AppOptions, Page};
use control_center::catalog::Catalog;
use control_center::preferences::{MemoryPreferenceStore, PreferenceStore};
use control_center::ui::ui;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

pub const WIDTH: u16 = 140;
pub const HEIGHT: u16 = 45;

/// App on `page` with the seeded catalog and animations disabled
pub fn app_on(page: Page) -> App {
    app_with_store(page, Box::new(MemoryPreferenceStore::new()))
}

pub fn app_with_store(page: Page, store: Box<dyn PreferenceStore>) -> App {
    let options = AppOptions {
        start_page: page,
        animations: false,
        ascii_icons: true,
    };
    let mut app = App::new(Catalog::seeded(), store, options);
    app.viewport = Rect::new(0, 0, WIDTH, HEIGHT);
    app
}

/// A clock value after every start-up transition has settled
pub fn settled() -> Instant {
    Instant::now() + Duration::from_secs(5)
}

/// Render one frame at the standard size
pub fn render(app: &mut App) -> Buffer {
    render_at(app, settled())
}

pub fn render_at(app: &mut App, now: Instant) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal
        .draw(|f| {
            app.viewport = f.area();
            ui(f, app, now);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Convert buffer to string for searching
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            result.push_str(buffer[(x, y)].symbol());
        }
        result.push('\n');
    }
    result
}

pub fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
    buffer_to_string(buffer).contains(text)
}

/// First cell where `text` starts
pub fn find_text(buffer: &Buffer, text: &str) -> Option<(u16, u16)> {
    let area = buffer.area;
    for y in 0..area.height {
        let row: String = (0..area.width).map(|x| buffer[(x, y)].symbol()).collect();
        if let Some(byte_idx) = row.find(text) {
            let col = row[..byte_idx].chars().count() as u16;
            return Some((col, y));
        }
    }
    None
}
