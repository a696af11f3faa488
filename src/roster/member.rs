//! Household member model.

use serde::{Deserialize, Serialize};

/// How a household member is related to the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    /// The applicant themselves ("self" on the wire; not a legal variant name)
    #[serde(rename = "self")]
    Myself,
    Spouse,
    Child,
    Parent,
    Grandparent,
    Other,
}

impl Relationship {
    /// All selectable options, in presentation order.
    pub const ALL: [Relationship; 6] = [
        Relationship::Myself,
        Relationship::Spouse,
        Relationship::Child,
        Relationship::Parent,
        Relationship::Grandparent,
        Relationship::Other,
    ];

    /// Label shown in the form and in rendered rows. Matches the
    /// serialized string.
    pub fn label(&self) -> &'static str {
        match self {
            Relationship::Myself => "self",
            Relationship::Spouse => "spouse",
            Relationship::Child => "child",
            Relationship::Parent => "parent",
            Relationship::Grandparent => "grandparent",
            Relationship::Other => "other",
        }
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One validated household member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdMember {
    pub relationship: Relationship,
    pub age: u32,
    pub smoker: bool,
}

impl HouseholdMember {
    pub fn new(relationship: Relationship, age: u32, smoker: bool) -> Self {
        Self {
            relationship,
            age,
            smoker,
        }
    }

    /// Smoker status as shown in a rendered row.
    pub fn smoker_label(&self) -> &'static str {
        if self.smoker {
            "smoker"
        } else {
            "nonsmoker"
        }
    }
}
