//! Data models for the application

mod app;
mod card;
mod view;

pub use app::*;
pub use card::*;
pub use view::*;
