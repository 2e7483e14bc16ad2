//! Terminal control center for an automated media production squad
//!
//! The binary in `main.rs` wires the terminal to [`app::App`]; everything
//! else lives here so the integration tests can drive it headlessly.

// Shell state and actions
pub mod app;

// Seeded and file-backed content
pub mod catalog;

// Theme persistence
pub mod preferences;

// Declarative transitions and their interpreter
pub mod animation;

pub mod icons;

// Geometry shared by rendering and hit-testing
pub mod layout;

pub mod input;

pub mod config;

pub mod ui;
