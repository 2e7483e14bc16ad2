//! Light/dark switching

use tracing::{info, warn};

use super::*;
use crate::preferences::save_theme;

impl App {
    /// Flip the theme and persist it
    ///
    /// The preference is written once per call. A failed write keeps the
    /// new theme for this session and raises a warning.
    pub fn toggle_theme(&mut self) {
        let theme = self.view.theme.toggled();
        self.view.theme = theme;

        match save_theme(self.store.as_mut(), theme) {
            Ok(()) => {
                info!(theme = theme.as_str(), "theme changed");
                self.notifications
                    .success("Theme", format!("Switched to {} mode", theme.as_str()));
            }
            Err(e) => {
                warn!(error = %e, theme = theme.as_str(), "failed to persist theme");
                self.notifications.warning(
                    "Theme not saved",
                    format!("{} mode applies to this session only: {}", theme.as_str(), e),
                );
            }
        }
    }
}
