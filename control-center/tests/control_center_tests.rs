//! Integration tests for the control center
//!
//! This suite drives the application headlessly:
//! - Page routing and the start-up state
//! - Theme persistence across restarts
//! - Card hover and expand state
//! - Detail drawer selection and mouse interaction
//! - Rendering against a test backend
//! - Property tests for clamping and theme toggling

mod control_center {
    mod common;
    mod test_navigation;
    mod test_theme;
    mod test_cards;
    mod test_drawer;
    mod test_render;
    mod test_properties;
}
