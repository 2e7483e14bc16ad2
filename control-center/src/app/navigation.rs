//! Page routing, selection and card focus

use control_center_sdk::{Agent, EntityKind, Workflow};
use tracing::debug;

use super::*;
use crate::animation::Target;
use crate::layout::{gallery_columns, gallery_row_heights, scroll_to_row};

/// Direction of a keyboard focus move in a gallery grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Left,
    Right,
    Up,
    Down,
}

impl App {
    /// Switch pages and replay the entrance transition
    ///
    /// Selecting the page that is already shown does nothing.
    pub fn set_active_page(&mut self, page: Page, now: Instant) {
        if self.view.page == page {
            return;
        }
        debug!(from = %self.view.page, to = %page, "page change");

        self.view.page = page;
        self.gallery_scroll = 0;
        self.is_searching = false;
        self.search_query.clear();
        self.hover(None, now);
        self.play_page_enter(now);
    }

    pub fn select_agent(&mut self, idx: Option<usize>, now: Instant) {
        match idx.filter(|i| *i < self.catalog.agents.len()) {
            Some(i) => self.open_drawer(Selection::Agent(i), now),
            None => self.close_drawer(),
        }
    }

    pub fn select_workflow(&mut self, idx: Option<usize>, now: Instant) {
        match idx.filter(|i| *i < self.catalog.workflows.len()) {
            Some(i) => self.open_drawer(Selection::Workflow(i), now),
            None => self.close_drawer(),
        }
    }

    fn open_drawer(&mut self, selection: Selection, now: Instant) {
        self.view.selection = selection;
        self.view.drawer_generation += 1;
        // The drawer takes the keyboard; the query stays applied
        self.finish_search();
        debug!(
            ?selection,
            generation = self.view.drawer_generation,
            "drawer mount"
        );
        self.animator.trigger(Trigger::DrawerMount, now);
    }

    /// Clear the selection; closing an already closed drawer is a no-op
    pub fn close_drawer(&mut self) {
        if !self.view.selection.is_none() {
            debug!(selection = ?self.view.selection, "drawer closed");
        }
        self.view.selection = Selection::None;
        self.animator.reset(Target::Drawer);
    }

    pub fn selected_agent(&self) -> Option<&Agent> {
        self.view.selection.agent().and_then(|i| self.catalog.agent(i))
    }

    pub fn selected_workflow(&self) -> Option<&Workflow> {
        self.view
            .selection
            .workflow()
            .and_then(|i| self.catalog.workflow(i))
    }

    /// The drawer shows iff the selection resolves in the catalog
    pub fn drawer_open(&self) -> bool {
        self.selected_agent().is_some() || self.selected_workflow().is_some()
    }

    /// Move the hovered card through the visible grid
    pub fn move_focus(&mut self, direction: FocusMove, now: Instant) {
        let Some(kind) = self.view.page.gallery() else {
            return;
        };
        let visible = self.visible_cards(kind);
        if visible.is_empty() {
            return;
        }
        let columns = self.gallery_area().map(gallery_columns).unwrap_or(1);

        let current = self
            .hovered_card
            .filter(|id| id.kind == kind)
            .and_then(|id| visible.iter().position(|i| *i == id.index));

        let pos = match current {
            None => 0,
            Some(pos) => match direction {
                FocusMove::Left => pos.saturating_sub(1),
                FocusMove::Right => (pos + 1).min(visible.len() - 1),
                FocusMove::Up => pos.checked_sub(columns).unwrap_or(pos),
                FocusMove::Down => {
                    if pos + columns < visible.len() {
                        pos + columns
                    } else {
                        pos
                    }
                }
            },
        };

        self.hover(Some(CardId::new(kind, visible[pos])), now);
        self.scroll_to_position(kind, pos, columns);
    }

    fn scroll_to_position(&mut self, kind: EntityKind, pos: usize, columns: usize) {
        let Some(area) = self.gallery_area() else {
            return;
        };
        let heights = gallery_row_heights(&self.card_specs(kind), columns);
        self.gallery_scroll = scroll_to_row(area, &heights, self.gallery_scroll, pos / columns);
    }

    /// Scroll the active gallery by whole grid rows
    pub fn scroll_gallery(&mut self, delta: isize) {
        let Some(kind) = self.view.page.gallery() else {
            return;
        };
        let columns = self.gallery_area().map(gallery_columns).unwrap_or(1);
        let rows = self.visible_cards(kind).len().div_ceil(columns);
        let max = rows.saturating_sub(1);

        self.gallery_scroll = self
            .gallery_scroll
            .saturating_add_signed(delta)
            .min(max);
    }
}
