//! Export module - JSON projection of the household

mod json;

pub use json::to_pretty_json;
