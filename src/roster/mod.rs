//! Roster module - Core household model and component logic

mod error;
mod household;
mod member;
mod state;

pub use error::ValidationError;
pub use household::{EntryId, Household, RosterEntry};
pub use member::{HouseholdMember, Relationship};
pub use state::Roster;
