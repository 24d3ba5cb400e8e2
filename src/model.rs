//! Domain records and wire shapes.
//!
//! The JSON surface uses camelCase keys; the store is the only owner of
//! record state, so these types carry no behavior beyond validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored subscription record.
///
/// `id` is assigned by the store on insert and immutable afterwards.
/// `next_billing` is an ISO-8601 date string; it is stored as given and
/// never advanced by the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub cost: f64,
    pub billing_cycle: String,
    pub next_billing: String,
    #[serde(default)]
    pub description: String,
}

/// Request body for create and update.
///
/// Shares the record's wire shape minus the id; any id in the body is
/// ignored (the path parameter wins on update). Absent fields
/// deserialize to their zero values so the presence checks below answer
/// 400, matching the treatment of explicitly blank fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscriptionInput {
    pub name: String,
    pub category: String,
    pub cost: f64,
    pub billing_cycle: String,
    pub next_billing: String,
    pub description: String,
}

/// A required field failed the presence or positivity check.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("{0} must not be empty")]
    BlankField(&'static str),

    #[error("cost must be greater than zero")]
    NonPositiveCost,
}

impl SubscriptionInput {
    /// Validate the presence checks shared by create and update.
    ///
    /// name, category, billingCycle and nextBilling must be non-blank and
    /// cost strictly positive. The date string is not format-checked; a
    /// value the store rejects surfaces as a storage failure.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        for (value, field) in [
            (&self.name, "name"),
            (&self.category, "category"),
            (&self.billing_cycle, "billingCycle"),
            (&self.next_billing, "nextBilling"),
        ] {
            if value.trim().is_empty() {
                return Err(InvalidInput::BlankField(field));
            }
        }

        if self.cost <= 0.0 {
            return Err(InvalidInput::NonPositiveCost);
        }

        Ok(())
    }

    /// Attach a store-assigned id, producing the full record.
    pub fn into_record(self, id: i64) -> Subscription {
        Subscription {
            id,
            name: self.name,
            category: self.category,
            cost: self.cost,
            billing_cycle: self.billing_cycle,
            next_billing: self.next_billing,
            description: self.description,
        }
    }
}

/// Per-category spend, summed over all records in the category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpend {
    pub category: String,
    pub cost: f64,
}

/// Aggregate statistics payload.
///
/// `total_monthly` is the sum of the per-category sums. Both collections
/// serialize as empty arrays when no data exists, never null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_monthly: f64,
    pub by_category: Vec<CategorySpend>,
    pub upcoming: Vec<Subscription>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> SubscriptionInput {
        SubscriptionInput {
            name: "Netflix".into(),
            category: "Streaming".into(),
            cost: 15.99,
            billing_cycle: "monthly".into(),
            next_billing: "2024-07-01".into(),
            description: String::new(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_blank_fields_rejected() {
        for field in ["name", "category", "billingCycle", "nextBilling"] {
            let mut input = valid_input();
            match field {
                "name" => input.name = "  ".into(),
                "category" => input.category = String::new(),
                "billingCycle" => input.billing_cycle = " ".into(),
                _ => input.next_billing = String::new(),
            }
            assert_eq!(
                input.validate(),
                Err(InvalidInput::BlankField(field)),
                "expected {field} to be rejected"
            );
        }
    }

    #[test]
    fn test_non_positive_cost_rejected() {
        let mut input = valid_input();
        input.cost = 0.0;
        assert_eq!(input.validate(), Err(InvalidInput::NonPositiveCost));

        input.cost = -3.5;
        assert_eq!(input.validate(), Err(InvalidInput::NonPositiveCost));
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let record = valid_input().into_record(7);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["billingCycle"], "monthly");
        assert_eq!(json["nextBilling"], "2024-07-01");
        assert_eq!(json["description"], "");
    }

    #[test]
    fn test_absent_fields_fail_validation_not_deserialization() {
        let input: SubscriptionInput =
            serde_json::from_str(r#"{"name":"Netflix"}"#).unwrap();
        assert_eq!(input.validate(), Err(InvalidInput::BlankField("category")));
    }

    #[test]
    fn test_description_defaults_to_empty() {
        let input: SubscriptionInput = serde_json::from_str(
            r#"{"name":"Netflix","category":"Streaming","cost":15.99,
                "billingCycle":"monthly","nextBilling":"2024-07-01"}"#,
        )
        .unwrap();
        assert_eq!(input.description, "");
    }
}
