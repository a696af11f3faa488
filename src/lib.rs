//! Roster - a terminal household roster builder
//!
//! Fill in a three-field form, build an ordered household list,
//! and serialize it to pretty-printed JSON.

pub mod export;
pub mod roster;
pub mod ui;

// Re-export commonly used types
pub use roster::{EntryId, Household, HouseholdMember, Relationship, Roster, ValidationError};
