//! Screen geometry
//!
//! Rendering and mouse hit-testing both derive their rectangles from these
//! functions, so a click always lands on what was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::{CardId, Page};

pub const SIDEBAR_WIDTH: u16 = 16;
pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;
const NAV_ITEM_HEIGHT: u16 = 2;
const LOGO_HEIGHT: u16 = 3;

pub const MIN_CARD_WIDTH: u16 = 34;
pub const MAX_COLUMNS: u16 = 3;
/// Description lines shown on a collapsed card
pub const COLLAPSED_BODY_LINES: usize = 2;
/// Border, title row, category row and control row around the body
const CARD_CHROME: u16 = 5;
pub const EXPAND_TOGGLE_WIDTH: u16 = 10;

pub const SEARCH_WIDTH: u16 = 30;
pub const THEME_TOGGLE_WIDTH: u16 = 12;

pub const DRAWER_MIN_WIDTH: u16 = 44;
pub const DRAWER_CLOSE_WIDTH: u16 = 11;

/// Whether a cell falls inside a rectangle
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Greedy word wrap; words longer than `width` are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let word: String = word.into_iter().collect();
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Fixed regions of the application shell
#[derive(Debug, Clone, PartialEq)]
pub struct ShellLayout {
    pub sidebar: Rect,
    pub logo: Rect,
    pub nav: Vec<(Page, Rect)>,
    pub header: Option<Rect>,
    pub search: Option<Rect>,
    pub theme_toggle: Option<Rect>,
    pub content: Rect,
    pub footer: Rect,
}

impl ShellLayout {
    pub fn new(area: Rect, page: Page) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(area);
        let sidebar = columns[0];
        let main = columns[1];

        let logo = Rect::new(sidebar.x, sidebar.y, sidebar.width, LOGO_HEIGHT.min(sidebar.height));

        // Home..Workflows stack under the logo; Settings sits at the bottom
        let mut nav = Vec::new();
        let mut y = sidebar.y + LOGO_HEIGHT + 1;
        for item in Page::ALL.iter().filter(|p| **p != Page::Settings) {
            if y + NAV_ITEM_HEIGHT <= sidebar.bottom() {
                nav.push((*item, Rect::new(sidebar.x + 1, y, sidebar.width.saturating_sub(2), NAV_ITEM_HEIGHT)));
            }
            y += NAV_ITEM_HEIGHT;
        }
        let settings_y = sidebar.bottom().saturating_sub(NAV_ITEM_HEIGHT + 1);
        if settings_y >= y {
            nav.push((
                Page::Settings,
                Rect::new(sidebar.x + 1, settings_y, sidebar.width.saturating_sub(2), NAV_ITEM_HEIGHT),
            ));
        }

        let show_header = page != Page::Home;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(if show_header { HEADER_HEIGHT } else { 0 }),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(main);

        let (header, search, theme_toggle) = if show_header {
            let header = rows[0];
            let inner_y = header.y + 1;
            let toggle_x = header.right().saturating_sub(THEME_TOGGLE_WIDTH + 1);
            let theme_toggle = Rect::new(toggle_x, inner_y, THEME_TOGGLE_WIDTH, 1);
            let search_x = toggle_x.saturating_sub(SEARCH_WIDTH + 2);
            let search = if search_x > header.x + 14 {
                Some(Rect::new(search_x, inner_y, SEARCH_WIDTH, 1))
            } else {
                None
            };
            (Some(header), search, Some(theme_toggle))
        } else {
            (None, None, None)
        };

        Self {
            sidebar,
            logo,
            nav,
            header,
            search,
            theme_toggle,
            content: rows[1],
            footer: rows[2],
        }
    }
}

/// Landing page regions
#[derive(Debug, Clone, PartialEq)]
pub struct HomeLayout {
    pub tagline: Rect,
    pub title: Rect,
    pub subtitle: Rect,
    pub primary_button: Rect,
    pub secondary_button: Rect,
    pub features: Vec<Rect>,
}

pub const PRIMARY_BUTTON_LABEL: &str = " Launch Dashboard → ";
pub const SECONDARY_BUTTON_LABEL: &str = " View Workflows ";

impl HomeLayout {
    pub fn new(area: Rect, feature_count: usize) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1), // tagline
                Constraint::Length(1),
                Constraint::Length(2), // title
                Constraint::Length(1),
                Constraint::Length(2), // subtitle
                Constraint::Length(1),
                Constraint::Length(3), // buttons
                Constraint::Length(1),
                Constraint::Min(0), // features
            ])
            .split(area);

        let primary_width = PRIMARY_BUTTON_LABEL.chars().count() as u16 + 2;
        let secondary_width = SECONDARY_BUTTON_LABEL.chars().count() as u16 + 2;
        let total = primary_width + 2 + secondary_width;
        let start = area.x + area.width.saturating_sub(total) / 2;
        let buttons = rows[7];
        let primary_button = Rect::new(start, buttons.y, primary_width.min(area.width), buttons.height);
        let secondary_button = Rect::new(
            (start + primary_width + 2).min(area.right()),
            buttons.y,
            secondary_width.min(area.right().saturating_sub(start + primary_width + 2)),
            buttons.height,
        );

        let features = if feature_count == 0 {
            Vec::new()
        } else {
            let strip = rows[9];
            let height = strip.height.min(6);
            let constraints: Vec<Constraint> = (0..feature_count)
                .map(|_| Constraint::Ratio(1, feature_count as u32))
                .collect();
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(constraints)
                .split(Rect::new(strip.x, strip.y, strip.width, height))
                .iter()
                .copied()
                .collect()
        };

        Self {
            tagline: rows[1],
            title: rows[3],
            subtitle: rows[5],
            primary_button,
            secondary_button,
            features,
        }
    }
}

/// Rows above the card grid for the gallery heading
pub const GALLERY_HEADING_HEIGHT: u16 = 3;

/// Card grid area inside the page content
pub fn gallery_grid_area(content: Rect) -> Rect {
    let inner = Rect::new(
        content.x + 1,
        content.y,
        content.width.saturating_sub(2),
        content.height,
    );
    let heading = GALLERY_HEADING_HEIGHT.min(inner.height);
    Rect::new(inner.x, inner.y + heading, inner.width, inner.height - heading)
}

/// Number of card columns that fit in a gallery
pub fn gallery_columns(area: Rect) -> usize {
    (area.width / MIN_CARD_WIDTH).clamp(1, MAX_COLUMNS) as usize
}

/// Text width inside a card of the given outer width
pub fn card_text_width(card_width: u16) -> usize {
    card_width.saturating_sub(4).max(1) as usize
}

/// Outer width of a card in a gallery spanning `area`
pub fn card_width(area: Rect) -> u16 {
    area.width / gallery_columns(area) as u16
}

/// What the gallery needs to know about a card to place it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSpec {
    pub id: CardId,
    /// Description lines the card shows
    pub body_lines: usize,
}

impl CardSpec {
    pub fn height(&self) -> u16 {
        CARD_CHROME + self.body_lines as u16
    }
}

/// Placement of one gallery card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    pub id: CardId,
    pub area: Rect,
    /// Expand/collapse control; empty when the card is clipped
    pub expand_toggle: Rect,
    pub clipped: bool,
}

/// Height of each grid row, in grid order
pub fn gallery_row_heights(cards: &[CardSpec], columns: usize) -> Vec<u16> {
    cards
        .chunks(columns.max(1))
        .map(|row| row.iter().map(CardSpec::height).max().unwrap_or(0))
        .collect()
}

/// Place cards in a grid, starting at grid row `scroll_row`
pub fn gallery_layout(area: Rect, cards: &[CardSpec], scroll_row: usize) -> Vec<CardLayout> {
    let columns = gallery_columns(area);
    let width = card_width(area);
    let heights = gallery_row_heights(cards, columns);

    let mut layouts = Vec::new();
    let mut y = area.y;
    for (row_idx, row) in cards.chunks(columns).enumerate().skip(scroll_row) {
        if y >= area.bottom() {
            break;
        }
        let row_height = heights[row_idx];
        let visible_height = row_height.min(area.bottom() - y);

        for (col, spec) in row.iter().enumerate() {
            let x = area.x + width * col as u16;
            let full_height = spec.height();
            let height = full_height.min(visible_height);
            let clipped = height < full_height;
            let card = Rect::new(x, y, width, height);
            let expand_toggle = if clipped || height < 3 {
                Rect::default()
            } else {
                Rect::new(x + 2, y + height - 2, EXPAND_TOGGLE_WIDTH.min(width.saturating_sub(4)), 1)
            };
            layouts.push(CardLayout {
                id: spec.id,
                area: card,
                expand_toggle,
                clipped,
            });
        }
        y += row_height;
    }
    layouts
}

/// Smallest scroll offset change that brings grid row `target` fully into view
pub fn scroll_to_row(area: Rect, row_heights: &[u16], scroll_row: usize, target: usize) -> usize {
    if target < scroll_row {
        return target;
    }
    let mut scroll = scroll_row;
    loop {
        let used: u16 = row_heights
            .iter()
            .skip(scroll)
            .take(target + 1 - scroll)
            .sum();
        if used <= area.height || scroll == target {
            return scroll;
        }
        scroll += 1;
    }
}

/// Detail drawer regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerLayout {
    pub scrim: Rect,
    pub panel: Rect,
    pub close: Rect,
}

impl DrawerLayout {
    /// `offset` is the slide-in translation as a fraction of the panel width
    pub fn new(area: Rect, offset: f32) -> Self {
        let width = ((area.width as u32 * 45 / 100) as u16)
            .max(DRAWER_MIN_WIDTH)
            .min(area.width);
        let resting_x = area.right() - width;
        let shift = (offset.clamp(0.0, 1.0) * width as f32).round() as u16;
        let x = (resting_x + shift).min(area.right());
        let panel = Rect::new(x, area.y, area.right() - x, area.height);

        let close = if panel.width >= DRAWER_CLOSE_WIDTH + 2 && panel.height > 2 {
            Rect::new(panel.right() - DRAWER_CLOSE_WIDTH - 1, panel.y + 1, DRAWER_CLOSE_WIDTH, 1)
        } else {
            Rect::default()
        };

        Self {
            scrim: area,
            panel,
            close,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use control_center_sdk::EntityKind;

    fn specs(n: usize, expanded: &[usize]) -> Vec<CardSpec> {
        (0..n)
            .map(|i| CardSpec {
                id: CardId::new(EntityKind::Workflow, i),
                body_lines: if expanded.contains(&i) { 6 } else { COLLAPSED_BODY_LINES },
            })
            .collect()
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        let lines = wrap_text("abcdefghij kl", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij", "kl"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn test_shell_hides_header_on_home() {
        let area = Rect::new(0, 0, 120, 40);
        let home = ShellLayout::new(area, Page::Home);
        assert!(home.header.is_none());
        assert!(home.theme_toggle.is_none());

        let dashboard = ShellLayout::new(area, Page::Dashboard);
        assert!(dashboard.header.is_some());
        assert!(dashboard.search.is_some());
        assert_eq!(dashboard.content.y, HEADER_HEIGHT);
    }

    #[test]
    fn test_shell_lists_every_page_when_tall_enough() {
        let shell = ShellLayout::new(Rect::new(0, 0, 120, 40), Page::Home);
        let pages: Vec<Page> = shell.nav.iter().map(|(p, _)| *p).collect();
        assert_eq!(pages, Page::ALL.to_vec());
    }

    #[test]
    fn test_gallery_columns_by_width() {
        assert_eq!(gallery_columns(Rect::new(0, 0, 20, 10)), 1);
        assert_eq!(gallery_columns(Rect::new(0, 0, 70, 10)), 2);
        assert_eq!(gallery_columns(Rect::new(0, 0, 300, 10)), 3);
    }

    #[test]
    fn test_expanded_card_grows_its_row() {
        let area = Rect::new(0, 0, 102, 60);
        let layout = gallery_layout(area, &specs(6, &[1]), 0);
        assert_eq!(layout.len(), 6);

        let collapsed = layout[0].area.height;
        let expanded = layout[1].area.height;
        assert!(expanded > collapsed);
        // second grid row starts below the tallest card of the first
        assert_eq!(layout[3].area.y, expanded);
    }

    #[test]
    fn test_expand_toggle_inside_card() {
        let area = Rect::new(0, 0, 102, 60);
        for card in gallery_layout(area, &specs(3, &[]), 0) {
            assert!(hit(card.area, card.expand_toggle.x, card.expand_toggle.y));
        }
    }

    #[test]
    fn test_clipped_cards_have_no_toggle() {
        let area = Rect::new(0, 0, 34, 10);
        let layout = gallery_layout(area, &specs(3, &[]), 0);
        let clipped: Vec<_> = layout.iter().filter(|c| c.clipped).collect();
        assert!(!clipped.is_empty());
        assert!(clipped.iter().all(|c| c.expand_toggle.area() == 0));
    }

    #[test]
    fn test_scroll_to_row_brings_target_into_view() {
        let area = Rect::new(0, 0, 34, 15);
        let heights = vec![7, 7, 7, 7];
        assert_eq!(scroll_to_row(area, &heights, 0, 1), 0);
        assert_eq!(scroll_to_row(area, &heights, 0, 3), 2);
        assert_eq!(scroll_to_row(area, &heights, 3, 1), 1);
    }

    #[test]
    fn test_drawer_slides_from_trailing_edge() {
        let area = Rect::new(0, 0, 100, 30);
        let resting = DrawerLayout::new(area, 0.0);
        assert_eq!(resting.panel.right(), area.right());
        assert_eq!(resting.panel.width, 45);

        let offscreen = DrawerLayout::new(area, 1.0);
        assert_eq!(offscreen.panel.width, 0);

        let halfway = DrawerLayout::new(area, 0.5);
        assert!(halfway.panel.x > resting.panel.x);
    }

    #[test]
    fn test_drawer_on_very_wide_terminal() {
        let area = Rect::new(0, 0, 1500, 40);
        let drawer = DrawerLayout::new(area, 0.0);
        assert_eq!(drawer.panel.width, 675);
        assert_eq!(drawer.panel.x, 825);
        assert_eq!(drawer.close.right(), drawer.panel.right() - 1);
    }

    #[test]
    fn test_hit() {
        let rect = Rect::new(2, 3, 4, 2);
        assert!(hit(rect, 2, 3));
        assert!(hit(rect, 5, 4));
        assert!(!hit(rect, 6, 4));
        assert!(!hit(rect, 2, 5));
        assert!(!hit(Rect::default(), 0, 0));
    }
}
