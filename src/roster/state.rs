//! Roster component
//!
//! Owns the authoritative household sequence. The UI layer feeds it raw
//! form values and renders a projection of it; serialization reads the
//! sequence directly, never the rendered rows.

use super::error::ValidationError;
use super::household::{EntryId, Household};
use super::member::{HouseholdMember, Relationship};
use crate::export;

/// The roster component: an ordered household plus the operations over it.
#[derive(Debug, Default)]
pub struct Roster {
    household: Household,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            household: Household::new(),
        }
    }

    pub fn household(&self) -> &Household {
        &self.household
    }

    /// Validate raw form values and append a member.
    ///
    /// Age is checked before relationship, matching the form's field order.
    /// On failure the household is untouched.
    pub fn add_member(
        &mut self,
        age: &str,
        relationship: Option<Relationship>,
        smoker: bool,
    ) -> Result<EntryId, ValidationError> {
        let age = match parse_age(age) {
            Some(age) => age,
            None => {
                log::warn!("Rejected add: invalid age {:?}", age);
                return Err(ValidationError::InvalidAge);
            }
        };
        let relationship = match relationship {
            Some(relationship) => relationship,
            None => {
                log::warn!("Rejected add: no relationship selected");
                return Err(ValidationError::InvalidRelationship);
            }
        };

        let id = self
            .household
            .add(HouseholdMember::new(relationship, age, smoker));
        log::info!(
            "Added {} (age {}), household size {}",
            relationship,
            age,
            self.household.len()
        );
        Ok(id)
    }

    /// Remove the entry with the given id. Returns whether anything was
    /// removed; the UI only offers the affordance on rendered rows, so a
    /// `false` here means a stale id and is logged rather than surfaced.
    pub fn remove_member(&mut self, id: EntryId) -> bool {
        match self.household.remove(id) {
            Some(member) => {
                log::info!(
                    "Removed {} (age {}), household size {}",
                    member.relationship,
                    member.age,
                    self.household.len()
                );
                true
            }
            None => {
                log::warn!("Remove requested for unknown entry {:?}", id);
                false
            }
        }
    }

    /// Pretty-printed JSON of the current household. Read-only.
    pub fn to_json(&self) -> serde_json::Result<String> {
        export::to_pretty_json(&self.household)
    }
}

/// Parse a raw age string. Signed first so "-5" fails the positivity
/// check rather than the parse.
fn parse_age(raw: &str) -> Option<u32> {
    let age = raw.trim().parse::<i64>().ok()?;
    if age > 0 {
        u32::try_from(age).ok()
    } else {
        None
    }
}
