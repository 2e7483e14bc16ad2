//! Header search over the active gallery

use control_center_sdk::EntityKind;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use super::*;

impl App {
    /// Catalog indices of the cards the gallery shows, in catalog order
    pub fn visible_cards(&self, kind: EntityKind) -> Vec<usize> {
        let haystacks: Vec<String> = match kind {
            EntityKind::Agent => self
                .catalog
                .agents
                .iter()
                .map(|a| format!("{} {} {}", a.name, a.role, a.mission))
                .collect(),
            EntityKind::Workflow => self
                .catalog
                .workflows
                .iter()
                .map(|w| format!("{} {} {}", w.name, w.category, w.description))
                .collect(),
        };

        let query = self.search_query.trim();
        if query.is_empty() {
            return (0..haystacks.len()).collect();
        }

        let matcher = SkimMatcherV2::default();
        haystacks
            .iter()
            .enumerate()
            .filter(|(_, text)| matcher.fuzzy_match(text, query).is_some())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn start_search(&mut self) {
        if self.view.page.gallery().is_some() {
            self.is_searching = true;
        }
    }

    /// Leave the search field, keeping the filter
    pub fn finish_search(&mut self) {
        self.is_searching = false;
    }

    /// Leave the search field and drop the filter
    pub fn clear_search(&mut self, now: Instant) {
        self.is_searching = false;
        if !self.search_query.is_empty() {
            self.search_query.clear();
            self.on_query_changed(now);
        }
    }

    pub fn push_search_char(&mut self, c: char, now: Instant) {
        self.search_query.push(c);
        self.on_query_changed(now);
    }

    pub fn pop_search_char(&mut self, now: Instant) {
        if self.search_query.pop().is_some() {
            self.on_query_changed(now);
        }
    }

    fn on_query_changed(&mut self, now: Instant) {
        self.gallery_scroll = 0;
        if let Some(card) = self.hovered_card {
            if !self.visible_cards(card.kind).contains(&card.index) {
                self.hover(None, now);
            }
        }
    }
}
