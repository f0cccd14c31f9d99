//! Farm expense records and their aggregate summary.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Farm, Patch, ResourceRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub expense_date: NaiveDate,
    pub month: String,
    pub farm: Farm,
    pub expense_cost: f64,
    /// Expense category, e.g. "FEED", "MEDICINE", "SALARIES".
    pub head: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResourceRecord for Expense {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpense {
    pub expense_date: NaiveDate,
    pub month: String,
    pub farm: Farm,
    pub expense_cost: f64,
    pub head: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm: Option<Farm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Patch<Expense> for UpdateExpense {
    fn apply_to(&self, record: &mut Expense) {
        if let Some(v) = self.expense_date {
            record.expense_date = v;
        }
        if let Some(v) = &self.month {
            record.month = v.clone();
        }
        if let Some(v) = self.farm {
            record.farm = v;
        }
        if let Some(v) = self.expense_cost {
            record.expense_cost = v;
        }
        if let Some(v) = &self.head {
            record.head = v.clone();
        }
        if let Some(v) = &self.notes {
            record.notes = Some(v.clone());
        }
    }
}

/// Server-computed aggregate for the active filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    pub total: f64,
    pub by_head: Vec<HeadTotal>,
    pub by_farm: Vec<FarmTotal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadTotal {
    pub head: String,
    #[serde(rename = "_sum")]
    pub sum: CostSum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmTotal {
    pub farm: String,
    #[serde(rename = "_sum")]
    pub sum: CostSum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSum {
    #[serde(default)]
    pub expense_cost: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_wire_shape() {
        let json = r#"{
            "id": 12,
            "expenseDate": "2024-05-10",
            "month": "MAY",
            "farm": "MATITAL",
            "expenseCost": 2500.5,
            "head": "MEDICINE",
            "notes": "vaccines",
            "createdAt": "2024-05-10T08:30:00.000Z",
            "updatedAt": "2024-05-11T09:00:00.000Z"
        }"#;
        let e: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(e.id, 12);
        assert_eq!(e.farm, Farm::Matital);
        assert_eq!(e.expense_date, NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
        assert_eq!(e.notes.as_deref(), Some("vaccines"));
    }

    #[test]
    fn summary_parses_prisma_sum_groups() {
        let json = r#"{
            "total": 4000,
            "byHead": [ { "head": "FEED", "_sum": { "expenseCost": 3000 } } ],
            "byFarm": [ { "farm": "KAASI_19", "_sum": { "expenseCost": null } } ]
        }"#;
        let s: ExpenseSummary = serde_json::from_str(json).unwrap();
        assert_eq!(s.by_head[0].sum.expense_cost, Some(3000.0));
        assert_eq!(s.by_farm[0].sum.expense_cost, None);
    }

    #[test]
    fn patch_merges_only_submitted_fields() {
        let mut e: Expense = serde_json::from_str(
            r#"{
                "id": 1, "expenseDate": "2024-01-01", "month": "JANUARY",
                "farm": "OTHER", "expenseCost": 100, "head": "RENT",
                "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        let patch = UpdateExpense {
            expense_cost: Some(250.0),
            notes: Some("adjusted".into()),
            ..Default::default()
        };
        patch.apply_to(&mut e);
        assert_eq!(e.expense_cost, 250.0);
        assert_eq!(e.notes.as_deref(), Some("adjusted"));
        assert_eq!(e.head, "RENT");
    }

    #[test]
    fn update_body_skips_absent_fields() {
        let patch = UpdateExpense {
            farm: Some(Farm::Kaasi19),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"farm":"KAASI_19"}"#);
    }
}
