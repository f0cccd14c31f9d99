//! Uniform API response wrapper
//!
//! Every endpoint answers with `{ "message": ..., "data": ... }`. Success is
//! signaled by the message field, not by the HTTP status code: a 200 with any
//! message other than "success" is still a failure.

use serde::{Deserialize, Serialize};

/// Response envelope shared by all endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub message: String,

    #[serde(default)]
    pub data: Option<T>,

    /// Backend error detail, present on failure responses only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.message.eq_ignore_ascii_case("success")
    }

    /// Failure detail in preference order: `result`, then `message`.
    pub fn failure_detail(&self) -> String {
        self.result.clone().unwrap_or_else(|| self.message.clone())
    }
}

/// Pagination block returned with every list payload.
/// `pages` is authoritative for the total page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u32,
}

/// List payload: one page of items plus the pagination block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PageInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_case_insensitive() {
        let e: Envelope<i32> = serde_json::from_str(r#"{"message":"Success","data":7}"#).unwrap();
        assert!(e.is_success());
        assert_eq!(e.data, Some(7));

        let e: Envelope<i32> = serde_json::from_str(r#"{"message":"SUCCESS","data":7}"#).unwrap();
        assert!(e.is_success());
    }

    #[test]
    fn failure_prefers_result_field() {
        let e: Envelope<i32> =
            serde_json::from_str(r#"{"message":"error","result":"farm is required"}"#).unwrap();
        assert!(!e.is_success());
        assert_eq!(e.failure_detail(), "farm is required");

        let e: Envelope<i32> = serde_json::from_str(r#"{"message":"not found"}"#).unwrap();
        assert_eq!(e.failure_detail(), "not found");
    }

    #[test]
    fn missing_data_deserializes_as_none() {
        let e: Envelope<i32> = serde_json::from_str(r#"{"message":"success"}"#).unwrap();
        assert!(e.data.is_none());
    }

    #[test]
    fn paginated_payload_parses() {
        let json = r#"{
            "message": "success",
            "data": {
                "items": [1, 2, 3],
                "pagination": { "page": 1, "limit": 10, "total": 23, "pages": 3 }
            }
        }"#;
        let e: Envelope<Paginated<i32>> = serde_json::from_str(json).unwrap();
        let page = e.data.unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.pagination.pages, 3);
    }
}
