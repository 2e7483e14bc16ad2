//! Per-card hover and expand state

use control_center_sdk::EntityKind;

use super::*;
use crate::animation::Target;
use crate::layout::{
    card_text_width, card_width, gallery_grid_area, wrap_text, CardSpec, ShellLayout,
    COLLAPSED_BODY_LINES,
};

impl App {
    /// Move the pointer onto a card, or off every card
    pub fn hover(&mut self, card: Option<CardId>, now: Instant) {
        if self.hovered_card == card {
            return;
        }

        if let Some(previous) = self.hovered_card.take() {
            if !self.is_expanded(previous) {
                self.animator.trigger(Trigger::HoverLeave(previous), now);
            }
        }

        self.hovered_card = card;
        if let Some(card) = card {
            // Expanded cards stay at rest while hovered
            if !self.is_expanded(card) {
                self.animator.trigger(Trigger::HoverEnter(card), now);
            }
        }
    }

    pub fn is_expanded(&self, card: CardId) -> bool {
        self.expanded_cards.contains(&card)
    }

    /// Flip the description of one card between two lines and full text
    pub fn toggle_expand(&mut self, card: CardId, now: Instant) {
        if self.expanded_cards.remove(&card) {
            if self.hovered_card == Some(card) {
                self.animator.trigger(Trigger::HoverEnter(card), now);
            }
        } else {
            self.expanded_cards.insert(card);
            self.animator.reset(Target::Card(card));
        }
    }

    /// Open the detail drawer for a card's entity
    pub fn activate(&mut self, card: CardId, now: Instant) {
        match card.kind {
            EntityKind::Agent => self.select_agent(Some(card.index), now),
            EntityKind::Workflow => self.select_workflow(Some(card.index), now),
        }
    }

    /// Card grid area of the current page, when it shows a gallery
    pub fn gallery_area(&self) -> Option<Rect> {
        self.view.page.gallery()?;
        if self.viewport.area() == 0 {
            return None;
        }
        let shell = ShellLayout::new(self.viewport, self.view.page);
        Some(gallery_grid_area(shell.content))
    }

    /// Description shown on a card
    pub fn card_body(&self, card: CardId) -> Option<&str> {
        match card.kind {
            EntityKind::Agent => self.catalog.agent(card.index).map(|a| a.mission.as_str()),
            EntityKind::Workflow => self
                .catalog
                .workflow(card.index)
                .map(|w| w.description.as_str()),
        }
    }

    /// Placement input for every visible card of a gallery
    pub fn card_specs(&self, kind: EntityKind) -> Vec<CardSpec> {
        let text_width = self
            .gallery_area()
            .map(|area| card_text_width(card_width(area)))
            .unwrap_or(40);

        self.visible_cards(kind)
            .into_iter()
            .map(|index| {
                let id = CardId::new(kind, index);
                let body_lines = if self.is_expanded(id) {
                    let text = self.card_body(id).unwrap_or_default();
                    wrap_text(text, text_width).len().max(COLLAPSED_BODY_LINES)
                } else {
                    COLLAPSED_BODY_LINES
                };
                CardSpec { id, body_lines }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Property, HOVER_SCALE};
    use crate::preferences::MemoryPreferenceStore;
    use std::time::Duration;

    fn app() -> App {
        let options = AppOptions {
            start_page: Page::Workflows,
            animations: true,
            ascii_icons: false,
        };
        App::new(Catalog::seeded(), Box::new(MemoryPreferenceStore::new()), options)
    }

    fn scale(app: &App, card: CardId, at: Instant) -> f32 {
        app.animator.sample(Target::Card(card), Property::Scale, at)
    }

    #[test]
    fn test_expand_is_isolated_per_card() {
        let now = Instant::now();
        let mut app = app();
        let a = CardId::new(EntityKind::Workflow, 0);
        let b = CardId::new(EntityKind::Workflow, 1);

        app.toggle_expand(a, now);
        assert!(app.is_expanded(a));
        assert!(!app.is_expanded(b));

        app.toggle_expand(a, now);
        assert!(!app.is_expanded(a));
    }

    #[test]
    fn test_hover_enter_suppressed_while_expanded() {
        let t0 = Instant::now();
        let later = t0 + Duration::from_millis(500);
        let mut app = app();
        let card = CardId::new(EntityKind::Workflow, 3);

        app.toggle_expand(card, t0);
        app.hover(Some(card), t0);
        assert_eq!(scale(&app, card, later), 1.0);

        // collapsing under the pointer brings the emphasis back
        app.toggle_expand(card, later);
        assert_eq!(scale(&app, card, later + Duration::from_millis(300)), HOVER_SCALE);
    }

    #[test]
    fn test_expanding_hovered_card_returns_it_to_rest() {
        let t0 = Instant::now();
        let mut app = app();
        let card = CardId::new(EntityKind::Workflow, 2);

        app.hover(Some(card), t0);
        assert_eq!(scale(&app, card, t0 + Duration::from_millis(300)), HOVER_SCALE);

        app.toggle_expand(card, t0 + Duration::from_millis(300));
        assert_eq!(scale(&app, card, t0 + Duration::from_millis(300)), 1.0);
    }

    #[test]
    fn test_activate_opens_matching_drawer() {
        let now = Instant::now();
        let mut app = app();
        app.activate(CardId::new(EntityKind::Agent, 4), now);
        assert_eq!(app.view.selection, Selection::Agent(4));
    }

    #[test]
    fn test_expanded_card_reports_more_lines() {
        let now = Instant::now();
        let mut app = app();
        app.viewport = Rect::new(0, 0, 60, 40);
        let card = CardId::new(EntityKind::Workflow, 0);

        app.toggle_expand(card, now);
        let specs = app.card_specs(EntityKind::Workflow);
        assert!(specs[0].body_lines > COLLAPSED_BODY_LINES);
        assert_eq!(specs[1].body_lines, COLLAPSED_BODY_LINES);
    }
}
