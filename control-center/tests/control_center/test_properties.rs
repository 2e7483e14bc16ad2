//! Property tests for clamping and theme toggling

use super::common::*;
use control_center::app::{Action, Page};
use control_center::preferences::MemoryPreferenceStore;
use control_center_sdk::{clamp_percent, ColorTag, ProgressItem};
use proptest::prelude::*;
use std::time::Instant;

proptest! {
    #[test]
    fn prop_percentage_is_clamped_ratio(current in -1000.0f64..1000.0, total in 0.001f64..1000.0) {
        let item = ProgressItem {
            label: "x".to_string(),
            current,
            total,
            color: ColorTag::Blue,
        };
        let expected = (current / total * 100.0).clamp(0.0, 100.0);
        prop_assert!((item.percentage() - expected).abs() < 1e-9);
        prop_assert!((0.0..=100.0).contains(&item.percentage()));
    }

    #[test]
    fn prop_non_positive_total_is_zero(current in any::<f64>(), total in -1000.0f64..=0.0) {
        prop_assert_eq!(clamp_percent(current, total), 0.0);
    }

    #[test]
    fn prop_toggle_twice_restores_theme(start_light in any::<bool>()) {
        let store = if start_light {
            MemoryPreferenceStore::with_entry(control_center::preferences::THEME_KEY, "light")
        } else {
            MemoryPreferenceStore::new()
        };
        let mut app = app_with_store(Page::Home, Box::new(store.clone()));
        let before = app.view.theme;

        app.dispatch(Action::ToggleTheme, Instant::now());
        app.dispatch(Action::ToggleTheme, Instant::now());

        prop_assert_eq!(app.view.theme, before);
        prop_assert_eq!(store.writes().len(), 2);
    }

    #[test]
    fn prop_close_after_any_selection_is_closed(idx in 0usize..20, agent in any::<bool>()) {
        let mut app = app_on(Page::Workflows);
        let now = Instant::now();
        if agent {
            app.dispatch(Action::SelectAgent(Some(idx)), now);
        } else {
            app.dispatch(Action::SelectWorkflow(Some(idx)), now);
        }
        app.dispatch(Action::CloseDrawer, now);
        prop_assert!(app.view.selection.is_none());
        prop_assert!(!app.drawer_open());
    }
}
