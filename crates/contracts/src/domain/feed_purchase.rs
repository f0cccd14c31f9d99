//! Feed purchase ledger entries.
//!
//! Feed rows are double-entry style: a purchase books a debit, a payment books
//! a credit, and the server maintains `running_balance` across the ledger.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Farm, Patch, ResourceRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPurchase {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(default)]
    pub month: Option<String>,
    /// "IN" for purchases, "OUT" for payments.
    pub voucher_type: String,
    pub feed_type: String,
    pub farm: Farm,
    pub bags: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub debit: Option<f64>,
    #[serde(default)]
    pub credit: Option<f64>,
    pub running_balance: f64,
    pub reconciled: bool,
    pub posted_to_statement: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResourceRecord for FeedPurchase {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedPurchase {
    pub date: NaiveDate,
    pub month: String,
    pub voucher_type: String,
    pub feed_type: String,
    pub farm: Farm,
    pub bags: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<f64>,
    pub reconciled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeedPurchase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm: Option<Farm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bags: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconciled: Option<bool>,
}

impl Patch<FeedPurchase> for UpdateFeedPurchase {
    fn apply_to(&self, record: &mut FeedPurchase) {
        if let Some(v) = self.date {
            record.date = v;
        }
        if let Some(v) = &self.voucher_type {
            record.voucher_type = v.clone();
        }
        if let Some(v) = &self.feed_type {
            record.feed_type = v.clone();
        }
        if let Some(v) = self.farm {
            record.farm = v;
        }
        if let Some(v) = self.bags {
            record.bags = v;
        }
        if let Some(v) = &self.description {
            record.description = Some(v.clone());
        }
        if let Some(v) = self.debit {
            record.debit = Some(v);
        }
        if let Some(v) = self.credit {
            record.credit = Some(v);
        }
        if let Some(v) = self.reconciled {
            record.reconciled = v;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSummary {
    pub total_debit: f64,
    pub total_credit: f64,
    pub total_bags: f64,
    pub current_balance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_with_null_credit() {
        let json = r#"{
            "id": 3,
            "date": "2024-04-02",
            "month": null,
            "voucherType": "IN",
            "feedType": "LAYER_MASH",
            "farm": "COMBINED",
            "bags": 40,
            "description": "April delivery",
            "debit": 180000,
            "credit": null,
            "runningBalance": -180000,
            "reconciled": false,
            "postedToStatement": false,
            "createdAt": "2024-04-02T06:00:00Z",
            "updatedAt": "2024-04-02T06:00:00Z"
        }"#;
        let r: FeedPurchase = serde_json::from_str(json).unwrap();
        assert_eq!(r.farm, Farm::Combined);
        assert_eq!(r.debit, Some(180000.0));
        assert_eq!(r.credit, None);
        assert!(r.month.is_none());
    }

    #[test]
    fn summary_parses() {
        let s: FeedSummary = serde_json::from_str(
            r#"{"totalDebit":500000,"totalCredit":420000,"totalBags":120,"currentBalance":-80000}"#,
        )
        .unwrap();
        assert_eq!(s.total_bags, 120.0);
        assert_eq!(s.current_balance, -80000.0);
    }
}
