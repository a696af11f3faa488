//! User Interface module
//!
//! Terminal UI using ratatui: a three-field form, the household list,
//! and a JSON output panel.

pub mod app;
pub mod form;
pub mod widgets;

pub use app::App;
