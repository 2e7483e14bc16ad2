//! Main application state

use std::collections::HashSet;

use ratatui::layout::Rect;

use super::{CardId, Page, ViewState};
use crate::animation::Animator;
use crate::app::NotificationManager;
use crate::catalog::Catalog;
use crate::icons::IconRenderer;
use crate::preferences::PreferenceStore;

/// Start-up options that are not part of the view state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppOptions {
    pub start_page: Page,
    pub animations: bool,
    pub ascii_icons: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            start_page: Page::Home,
            animations: true,
            ascii_icons: false,
        }
    }
}

/// Main application state
///
/// The shell is the only owner of [`ViewState`]; everything else reads it
/// and reports intent back through [`crate::app::Action`].
pub struct App {
    pub catalog: Catalog,
    pub view: ViewState,

    // Per-card UI state
    pub expanded_cards: HashSet<CardId>,
    pub hovered_card: Option<CardId>,
    /// First visible grid row of the active gallery
    pub gallery_scroll: usize,

    // Header search
    pub search_query: String,
    pub is_searching: bool,

    pub should_quit: bool,
    /// Terminal area of the last frame
    pub viewport: Rect,

    pub notifications: NotificationManager,
    pub animator: Animator,
    pub icons: Box<dyn IconRenderer>,
    pub(crate) store: Box<dyn PreferenceStore>,
}
