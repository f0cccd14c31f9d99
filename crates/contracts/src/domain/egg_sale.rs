//! Egg sale records: quantity sold, pricing, and payment settlement.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Farm, Patch, ResourceRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EggSale {
    pub id: i64,
    pub sale_date: NaiveDate,
    #[serde(default)]
    pub challan_number: Option<String>,
    pub farm: Farm,
    pub eggs_sold: i64,
    pub price_per_egg: f64,
    pub total_amount: f64,
    pub amount_received: f64,
    pub payment_due: f64,
    /// Sale channel, e.g. "CASH" or "CREDIT".
    #[serde(rename = "type")]
    pub sale_type: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResourceRecord for EggSale {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEggSale {
    pub sale_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challan_number: Option<String>,
    pub farm: Farm,
    pub eggs_sold: i64,
    pub price_per_egg: f64,
    pub total_amount: f64,
    pub amount_received: f64,
    pub payment_due: f64,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub sale_type: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEggSale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challan_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm: Option<Farm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eggs_sold: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_egg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_received: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_due: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub sale_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Patch<EggSale> for UpdateEggSale {
    fn apply_to(&self, record: &mut EggSale) {
        if let Some(v) = self.sale_date {
            record.sale_date = v;
        }
        if let Some(v) = &self.challan_number {
            record.challan_number = Some(v.clone());
        }
        if let Some(v) = self.farm {
            record.farm = v;
        }
        if let Some(v) = self.eggs_sold {
            record.eggs_sold = v;
        }
        if let Some(v) = self.price_per_egg {
            record.price_per_egg = v;
        }
        if let Some(v) = self.total_amount {
            record.total_amount = v;
        }
        if let Some(v) = self.amount_received {
            record.amount_received = v;
        }
        if let Some(v) = self.payment_due {
            record.payment_due = v;
        }
        if let Some(v) = &self.sale_type {
            record.sale_type = v.clone();
        }
        if let Some(v) = &self.description {
            record.notes = Some(v.clone());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EggSaleSummary {
    pub total_eggs_sold: i64,
    pub total_revenue: f64,
    pub total_received: f64,
    pub total_due: f64,
    pub by_farm: Vec<FarmSaleTotal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmSaleTotal {
    pub farm: String,
    #[serde(rename = "_sum")]
    pub sum: SaleSum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleSum {
    #[serde(default)]
    pub eggs_sold: Option<i64>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub payment_received: Option<f64>,
    #[serde(default)]
    pub payment_due: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_type_field() {
        let json = r#"{
            "id": 8,
            "saleDate": "2024-06-01",
            "challanNumber": "CH-104",
            "farm": "MATITAL",
            "eggsSold": 3000,
            "pricePerEgg": 11.5,
            "totalAmount": 34500,
            "amountReceived": 20000,
            "paymentDue": 14500,
            "type": "CREDIT",
            "notes": "weekly dealer",
            "createdAt": "2024-06-01T10:00:00Z",
            "updatedAt": "2024-06-01T10:00:00Z"
        }"#;
        let s: EggSale = serde_json::from_str(json).unwrap();
        assert_eq!(s.sale_type, "CREDIT");
        assert_eq!(s.payment_due, 14500.0);
    }

    #[test]
    fn summary_parses() {
        let json = r#"{
            "totalEggsSold": 9000,
            "totalRevenue": 103500,
            "totalReceived": 80000,
            "totalDue": 23500,
            "byFarm": [
                { "farm": "MATITAL",
                  "_sum": { "eggsSold": 9000, "totalAmount": 103500,
                            "paymentReceived": 80000, "paymentDue": 23500 } }
            ]
        }"#;
        let s: EggSaleSummary = serde_json::from_str(json).unwrap();
        assert_eq!(s.by_farm[0].sum.payment_received, Some(80000.0));
    }

    #[test]
    fn patch_routes_description_to_notes() {
        let mut sale: EggSale = serde_json::from_str(
            r#"{
                "id": 1, "saleDate": "2024-06-01", "farm": "OTHER",
                "eggsSold": 100, "pricePerEgg": 10, "totalAmount": 1000,
                "amountReceived": 1000, "paymentDue": 0, "type": "CASH",
                "createdAt": "2024-06-01T00:00:00Z", "updatedAt": "2024-06-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        let patch = UpdateEggSale {
            description: Some("paid in full".into()),
            ..Default::default()
        };
        patch.apply_to(&mut sale);
        assert_eq!(sale.notes.as_deref(), Some("paid in full"));
    }
}
