//! User intent reported back to the shell
//!
//! Input handlers never touch state directly; they translate events into an
//! [`Action`] and the shell applies it in one place.

use tracing::trace;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SetPage(Page),
    NextPage,
    PreviousPage,

    SelectAgent(Option<usize>),
    SelectWorkflow(Option<usize>),
    CloseDrawer,

    Hover(Option<CardId>),
    ToggleExpand(CardId),
    Activate(CardId),

    /// Expand or collapse the hovered card
    ToggleExpandFocused,
    /// Open the drawer for the hovered card
    ActivateFocused,
    MoveFocus(FocusMove),
    Scroll(isize),

    ToggleTheme,

    StartSearch,
    SearchInput(char),
    SearchBackspace,
    FinishSearch,
    ClearSearch,

    /// Esc: close the drawer first, then drop the search filter
    Back,
    Quit,
}

impl App {
    /// Apply a single action
    pub fn dispatch(&mut self, action: Action, now: Instant) {
        trace!(?action, "dispatch");

        match action {
            Action::SetPage(page) => self.set_active_page(page, now),
            Action::NextPage => self.set_active_page(self.view.page.next(), now),
            Action::PreviousPage => self.set_active_page(self.view.page.previous(), now),

            Action::SelectAgent(idx) => self.select_agent(idx, now),
            Action::SelectWorkflow(idx) => self.select_workflow(idx, now),
            Action::CloseDrawer => self.close_drawer(),

            Action::Hover(card) => self.hover(card, now),
            Action::ToggleExpand(card) => self.toggle_expand(card, now),
            Action::Activate(card) => self.activate(card, now),

            Action::ToggleExpandFocused => {
                if let Some(card) = self.hovered_card {
                    self.toggle_expand(card, now);
                }
            }
            Action::ActivateFocused => {
                if let Some(card) = self.hovered_card {
                    self.activate(card, now);
                }
            }
            Action::MoveFocus(direction) => self.move_focus(direction, now),
            Action::Scroll(delta) => self.scroll_gallery(delta),

            Action::ToggleTheme => self.toggle_theme(),

            Action::StartSearch => self.start_search(),
            Action::SearchInput(c) => self.push_search_char(c, now),
            Action::SearchBackspace => self.pop_search_char(now),
            Action::FinishSearch => self.finish_search(),
            Action::ClearSearch => self.clear_search(now),

            Action::Back => {
                if self.drawer_open() {
                    self.close_drawer();
                } else {
                    self.clear_search(now);
                }
            }
            Action::Quit => {
                self.should_quit = true;
            }
        }
    }
}
