use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub mod expense {
    use super::*;

    /// An expense row as the service sends it.
    ///
    /// Field names follow the wire contract (`_id` is the server-assigned
    /// opaque identifier). `amount` tolerates missing or non-numeric values
    /// and decodes them as `0.0` so aggregation never fails on one bad row.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct ExpenseDto {
        #[serde(rename = "_id")]
        pub id: String,
        #[serde(default)]
        pub item: String,
        #[serde(default)]
        pub category: String,
        #[serde(default, deserialize_with = "amount_or_zero")]
        pub amount: f64,
        pub date: DateTime<Utc>,
    }

    /// Response of `GET /expenses?userId&page&limit`.
    ///
    /// `data` is the requested page slice (newest first); `all_data` is the
    /// complete set for the user, returned in the same round-trip.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseListResponse {
        pub data: Vec<ExpenseDto>,
        #[serde(rename = "allData")]
        pub all_data: Vec<ExpenseDto>,
        #[serde(rename = "totalCount")]
        pub total_count: u64,
    }

    /// Request body for `DELETE /expenses/{id}`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseDelete {
        #[serde(rename = "userId")]
        pub user_id: String,
    }
}

pub mod budget {
    use super::*;

    /// Response of `GET /budget/{userId}`.
    ///
    /// A user without a stored budget decodes as `0.0`; the client never
    /// invents a ceiling locally.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetResponse {
        #[serde(default, deserialize_with = "amount_or_zero")]
        pub budget: f64,
    }

    /// Request body for `POST /budget`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetUpsert {
        #[serde(rename = "userId")]
        pub user_id: String,
        pub budget: f64,
    }
}

/// Decodes a currency value defensively: numbers pass through, numeric
/// strings are parsed, anything else (null, objects, garbage text) becomes
/// `0.0`. Combined with `#[serde(default)]` an absent field is also `0.0`.
fn amount_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let value = match Raw::deserialize(deserializer) {
        Ok(Raw::Num(n)) if n.is_finite() => n,
        Ok(Raw::Text(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use crate::budget::BudgetResponse;
    use crate::expense::{ExpenseDto, ExpenseListResponse};

    #[test]
    fn expense_decodes_wire_names() {
        let raw = r#"{
            "_id": "66f1a2",
            "item": "Groceries",
            "category": "Food",
            "amount": 42.5,
            "date": "2025-03-01T10:00:00Z"
        }"#;

        let expense: ExpenseDto = serde_json::from_str(raw).unwrap();

        assert_eq!(expense.id, "66f1a2");
        assert_eq!(expense.item, "Groceries");
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.amount, 42.5);
    }

    #[test]
    fn missing_amount_decodes_as_zero() {
        let raw = r#"{"_id": "a", "item": "x", "category": "Misc", "date": "2025-03-01T10:00:00Z"}"#;
        let expense: ExpenseDto = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.amount, 0.0);
    }

    #[test]
    fn malformed_amount_decodes_as_zero() {
        for bad in [r#"null"#, r#""not a number""#, r#"{"nested": 1}"#] {
            let raw = format!(
                r#"{{"_id": "a", "item": "x", "category": "Misc", "amount": {bad}, "date": "2025-03-01T10:00:00Z"}}"#
            );
            let expense: ExpenseDto = serde_json::from_str(&raw).unwrap();
            assert_eq!(expense.amount, 0.0, "amount {bad} should coerce to 0");
        }
    }

    #[test]
    fn numeric_string_amount_is_parsed() {
        let raw = r#"{"_id": "a", "item": "x", "category": "Misc", "amount": "12.75", "date": "2025-03-01T10:00:00Z"}"#;
        let expense: ExpenseDto = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.amount, 12.75);
    }

    #[test]
    fn list_response_decodes_both_views() {
        let raw = r#"{
            "data": [{"_id": "a", "item": "x", "category": "Food", "amount": 10, "date": "2025-03-01T10:00:00Z"}],
            "allData": [
                {"_id": "a", "item": "x", "category": "Food", "amount": 10, "date": "2025-03-01T10:00:00Z"},
                {"_id": "b", "item": "y", "category": "Travel", "amount": 20, "date": "2025-02-01T10:00:00Z"}
            ],
            "totalCount": 2
        }"#;

        let response: ExpenseListResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.all_data.len(), 2);
        assert_eq!(response.total_count, 2);
    }

    #[test]
    fn absent_budget_decodes_as_zero() {
        let response: BudgetResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(response.budget, 0.0);
        let response: BudgetResponse = serde_json::from_str(r#"{"budget": null}"#).unwrap();
        assert_eq!(response.budget, 0.0);
    }
}
