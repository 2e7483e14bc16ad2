//! Terminal events to actions
//!
//! Hit-testing uses the same layout functions as rendering, with the drawer
//! at its resting position.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{Action, App, CardId, FocusMove, Page};
use crate::layout::{gallery_layout, hit, DrawerLayout, HomeLayout, ShellLayout};

/// What sits under a terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Nav(Page),
    ThemeToggle,
    Search,
    LaunchDashboard,
    ViewWorkflows,
    Card(CardId),
    ExpandToggle(CardId),
    DrawerClose,
    DrawerPanel,
    Scrim,
    Nothing,
}

pub fn hit_test(app: &App, column: u16, row: u16) -> Hit {
    let area = app.viewport;

    if app.drawer_open() {
        let drawer = DrawerLayout::new(area, 0.0);
        if hit(drawer.close, column, row) {
            return Hit::DrawerClose;
        }
        if hit(drawer.panel, column, row) {
            return Hit::DrawerPanel;
        }
        return Hit::Scrim;
    }

    let shell = ShellLayout::new(area, app.view.page);
    if let Some((page, _)) = shell.nav.iter().find(|(_, rect)| hit(*rect, column, row)) {
        return Hit::Nav(*page);
    }
    if shell.theme_toggle.is_some_and(|r| hit(r, column, row)) {
        return Hit::ThemeToggle;
    }
    if shell.search.is_some_and(|r| hit(r, column, row)) {
        return Hit::Search;
    }

    if app.view.page == Page::Home {
        let home = HomeLayout::new(shell.content, app.catalog.hero.features.len());
        if hit(home.primary_button, column, row) {
            return Hit::LaunchDashboard;
        }
        if hit(home.secondary_button, column, row) {
            return Hit::ViewWorkflows;
        }
        return Hit::Nothing;
    }

    if let (Some(kind), Some(grid)) = (app.view.page.gallery(), app.gallery_area()) {
        for card in gallery_layout(grid, &app.card_specs(kind), app.gallery_scroll) {
            // The toggle sits inside the card and wins over activation
            if hit(card.expand_toggle, column, row) {
                return Hit::ExpandToggle(card.id);
            }
            if hit(card.area, column, row) {
                return Hit::Card(card.id);
            }
        }
    }

    Hit::Nothing
}

pub fn map_key(app: &App, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if app.is_searching {
        return match key.code {
            KeyCode::Esc => Some(Action::ClearSearch),
            KeyCode::Enter => Some(Action::FinishSearch),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
    }

    let global = match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char(c) if Page::from_hotkey(c).is_some() => Page::from_hotkey(c).map(Action::SetPage),
        KeyCode::Tab => Some(Action::NextPage),
        KeyCode::BackTab => Some(Action::PreviousPage),
        KeyCode::Esc => Some(Action::Back),
        _ => None,
    };
    if global.is_some() {
        return global;
    }

    // The drawer is modal for card navigation
    if app.drawer_open() {
        return None;
    }

    match key.code {
        KeyCode::Char('/') => Some(Action::StartSearch),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveFocus(FocusMove::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveFocus(FocusMove::Right)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveFocus(FocusMove::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveFocus(FocusMove::Down)),
        KeyCode::Enter => Some(Action::ActivateFocused),
        KeyCode::Char(' ') | KeyCode::Char('e') => Some(Action::ToggleExpandFocused),
        KeyCode::PageDown => Some(Action::Scroll(1)),
        KeyCode::PageUp => Some(Action::Scroll(-1)),
        _ => None,
    }
}

pub fn map_mouse(app: &App, mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match hit_test(app, mouse.column, mouse.row) {
                Hit::Nav(page) => Some(Action::SetPage(page)),
                Hit::ThemeToggle => Some(Action::ToggleTheme),
                Hit::Search => Some(Action::StartSearch),
                Hit::LaunchDashboard => Some(Action::SetPage(Page::Dashboard)),
                Hit::ViewWorkflows => Some(Action::SetPage(Page::Workflows)),
                Hit::Card(id) => Some(Action::Activate(id)),
                Hit::ExpandToggle(id) => Some(Action::ToggleExpand(id)),
                Hit::DrawerClose | Hit::Scrim => Some(Action::CloseDrawer),
                Hit::DrawerPanel | Hit::Nothing => None,
            }
        }
        MouseEventKind::Moved => {
            if app.drawer_open() {
                return None;
            }
            let card = match hit_test(app, mouse.column, mouse.row) {
                Hit::Card(id) | Hit::ExpandToggle(id) => Some(id),
                _ => None,
            };
            (card != app.hovered_card).then_some(Action::Hover(card))
        }
        MouseEventKind::ScrollDown if !app.drawer_open() => Some(Action::Scroll(1)),
        MouseEventKind::ScrollUp if !app.drawer_open() => Some(Action::Scroll(-1)),
        _ => None,
    }
}
