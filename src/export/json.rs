//! JSON projection of the household.
//!
//! Output shape: `{ "household": [ { relationship, age, smoker }, ... ] }`,
//! pretty-printed with 2-space indentation, in display order.

use serde::Serialize;

use crate::roster::{Household, HouseholdMember};

/// Top-level document shape.
#[derive(Serialize)]
struct HouseholdDoc<'a> {
    household: Vec<&'a HouseholdMember>,
}

/// Serialize the household as pretty-printed JSON.
pub fn to_pretty_json(household: &Household) -> serde_json::Result<String> {
    let doc = HouseholdDoc {
        household: household.members().collect(),
    };
    serde_json::to_string_pretty(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Relationship, Roster};

    #[test]
    fn test_empty_household() {
        let roster = Roster::new();
        let json = to_pretty_json(roster.household()).unwrap();
        assert_eq!(json, "{\n  \"household\": []\n}");
    }

    #[test]
    fn test_single_member_exact_output() {
        let mut roster = Roster::new();
        roster
            .add_member("30", Some(Relationship::Parent), false)
            .unwrap();

        let json = to_pretty_json(roster.household()).unwrap();
        let expected = "\
{
  \"household\": [
    {
      \"relationship\": \"parent\",
      \"age\": 30,
      \"smoker\": false
    }
  ]
}";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_order_and_fields_round_trip() {
        let mut roster = Roster::new();
        roster
            .add_member("34", Some(Relationship::Myself), false)
            .unwrap();
        roster
            .add_member("33", Some(Relationship::Spouse), true)
            .unwrap();
        roster
            .add_member("5", Some(Relationship::Child), false)
            .unwrap();

        let json = to_pretty_json(roster.household()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let members = value["household"].as_array().unwrap();

        assert_eq!(members.len(), 3);
        assert_eq!(members[0]["relationship"], "self");
        assert_eq!(members[0]["age"], 34);
        assert_eq!(members[0]["smoker"], false);
        assert_eq!(members[1]["relationship"], "spouse");
        assert_eq!(members[1]["smoker"], true);
        assert_eq!(members[2]["relationship"], "child");
        assert_eq!(members[2]["age"], 5);
    }

    #[test]
    fn test_serialize_is_idempotent() {
        let mut roster = Roster::new();
        roster
            .add_member("30", Some(Relationship::Parent), true)
            .unwrap();

        let first = to_pretty_json(roster.household()).unwrap();
        let second = to_pretty_json(roster.household()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reflects_removal() {
        let mut roster = Roster::new();
        let first = roster
            .add_member("30", Some(Relationship::Parent), false)
            .unwrap();
        roster
            .add_member("5", Some(Relationship::Child), false)
            .unwrap();
        roster.remove_member(first);

        let json = roster.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let members = value["household"].as_array().unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0]["relationship"], "child");
    }
}
