//! Application state and module organization
//!
//! This module contains the main App struct and re-exports all functionality
//! organized by concern.

use std::collections::HashSet;
use std::time::Instant;

use ratatui::layout::Rect;
use tracing::info;

use crate::animation::{Animator, Trigger};
use crate::catalog::Catalog;
use crate::icons::{AsciiIcons, GlyphIcons, IconRenderer};
use crate::preferences::{load_theme, PreferenceStore};

mod models;
pub use models::*;

mod actions;
mod cards;
mod navigation;
mod notifications;
mod search;
mod theme;

pub use actions::Action;
pub use navigation::FocusMove;
pub use notifications::{Notification, NotificationLevel, NotificationManager, NOTIFICATION_TTL};

impl App {
    pub fn new(catalog: Catalog, store: Box<dyn PreferenceStore>, options: AppOptions) -> Self {
        let theme = load_theme(store.as_ref());
        let icons: Box<dyn IconRenderer> = if options.ascii_icons {
            Box::new(AsciiIcons)
        } else {
            Box::new(GlyphIcons)
        };

        let mut app = Self {
            catalog,
            view: ViewState {
                page: options.start_page,
                theme,
                ..ViewState::default()
            },
            expanded_cards: HashSet::new(),
            hovered_card: None,
            gallery_scroll: 0,
            search_query: String::new(),
            is_searching: false,
            should_quit: false,
            viewport: Rect::default(),
            notifications: NotificationManager::new(),
            animator: Animator::new(options.animations),
            icons,
            store,
        };

        info!(
            page = %app.view.page,
            theme = app.view.theme.as_str(),
            animations = options.animations,
            "control center started"
        );

        // First mount plays the same entrance as a navigation
        app.play_page_enter(Instant::now());
        app
    }

    pub(crate) fn play_page_enter(&mut self, now: Instant) {
        self.animator.trigger(Trigger::PageEnter, now);
        if self.view.page == Page::Home {
            let features = self.catalog.hero.features.len();
            self.animator.trigger(Trigger::HeroEnter { features }, now);
        }
    }
}
