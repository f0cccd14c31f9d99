//! Daily egg production records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Farm, Patch, ResourceRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EggProduction {
    pub id: i64,
    pub date: NaiveDate,
    pub farm: Farm,
    pub chicken_eggs: i64,
    pub total_eggs: i64,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResourceRecord for EggProduction {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEggProduction {
    pub date: NaiveDate,
    pub farm: Farm,
    pub chicken_eggs: i64,
    pub total_eggs: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEggProduction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm: Option<Farm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chicken_eggs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_eggs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Patch<EggProduction> for UpdateEggProduction {
    fn apply_to(&self, record: &mut EggProduction) {
        if let Some(v) = self.date {
            record.date = v;
        }
        if let Some(v) = self.farm {
            record.farm = v;
        }
        if let Some(v) = self.chicken_eggs {
            record.chicken_eggs = v;
        }
        if let Some(v) = self.total_eggs {
            record.total_eggs = v;
        }
        if let Some(v) = &self.notes {
            record.notes = Some(v.clone());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EggProductionSummary {
    pub total_eggs: i64,
    pub by_farm: Vec<FarmEggTotal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmEggTotal {
    pub farm: String,
    #[serde(rename = "_sum")]
    pub sum: EggSum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EggSum {
    #[serde(default)]
    pub chicken_eggs: Option<i64>,
    #[serde(default)]
    pub total_eggs: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_parses_per_farm_groups() {
        let json = r#"{
            "totalEggs": 9200,
            "byFarm": [
                { "farm": "KAASI_19", "_sum": { "chickenEggs": 4100, "totalEggs": 4300 } },
                { "farm": "MATITAL", "_sum": { "chickenEggs": null, "totalEggs": 4900 } }
            ]
        }"#;
        let s: EggProductionSummary = serde_json::from_str(json).unwrap();
        assert_eq!(s.total_eggs, 9200);
        assert_eq!(s.by_farm.len(), 2);
        assert_eq!(s.by_farm[1].sum.chicken_eggs, None);
        assert_eq!(s.by_farm[1].sum.total_eggs, Some(4900));
    }
}
