//! Response envelope used by every backend endpoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Rejected(String),

    #[error("response did not contain any data")]
    MissingData,
}

/// Paging block attached to list responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(rename = "totalPage", default = "first_page")]
    pub total_page: u32,
}

fn first_page() -> u32 {
    1
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 0,
            total: 0,
            total_page: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(rename = "statusCode", default)]
    pub status_code: u16,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

/// A list response together with its paging block.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: Meta,
}

impl<T> ApiResponse<T> {
    /// Unwraps `data` of a successful response.
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected(self.message));
        }
        self.data.ok_or(ApiError::MissingData)
    }

    /// For endpoints whose `data` is irrelevant (delete, logout): the
    /// backend message on success.
    pub fn into_ack(self) -> Result<String, ApiError> {
        if self.success {
            Ok(self.message)
        } else {
            Err(ApiError::Rejected(self.message))
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Like [`ApiResponse::into_result`] but keeps the paging block.
    ///
    /// A missing `meta` is treated as a single page holding every item.
    pub fn into_page(self) -> Result<Page<T>, ApiError> {
        let meta = self.meta;
        let items = self.into_result()?;
        let meta = meta.unwrap_or(Meta {
            total: items.len() as u32,
            ..Meta::default()
        });
        Ok(Page { items, meta })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_unwraps_data() {
        let json = r#"{"success":true,"statusCode":200,"message":"ok","data":[1,2,3]}"#;
        let resp: ApiResponse<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.into_result().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_failure_carries_message() {
        let json = r#"{"success":false,"statusCode":400,"message":"Tour not found"}"#;
        let resp: ApiResponse<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert_eq!(
            resp.into_result(),
            Err(ApiError::Rejected("Tour not found".to_string()))
        );
    }

    #[test]
    fn test_success_without_data() {
        let resp: ApiResponse<String> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(resp.into_result(), Err(ApiError::MissingData));
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Session {
        url: String,
    }

    #[test]
    fn test_payload_without_default() {
        let json = r#"{"success":true,"statusCode":201,"data":{"url":"https://pay.example.com/s/1"}}"#;
        let resp: ApiResponse<Session> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.meta, None);
        assert_eq!(
            resp.into_result().unwrap(),
            Session { url: "https://pay.example.com/s/1".to_string() }
        );

        let resp: ApiResponse<Session> =
            serde_json::from_str(r#"{"success":false,"message":"Tour is full"}"#).unwrap();
        assert_eq!(resp.into_result(), Err(ApiError::Rejected("Tour is full".to_string())));
    }

    #[test]
    fn test_ack_ignores_null_data() {
        let json = r#"{"success":true,"statusCode":200,"message":"Tour type deleted","data":null}"#;
        let resp: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.into_ack().unwrap(), "Tour type deleted");
    }

    #[test]
    fn test_into_page_reads_meta() {
        let json = r#"{
            "success": true,
            "data": ["a", "b"],
            "meta": {"page": 2, "limit": 2, "total": 5, "totalPage": 3}
        }"#;
        let resp: ApiResponse<Vec<String>> = serde_json::from_str(json).unwrap();
        let page = resp.into_page().unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.meta.page, 2);
        assert_eq!(page.meta.total_page, 3);
    }

    #[test]
    fn test_into_page_without_meta() {
        let json = r#"{"success": true, "data": ["a", "b"]}"#;
        let resp: ApiResponse<Vec<String>> = serde_json::from_str(json).unwrap();
        let page = resp.into_page().unwrap();
        assert_eq!(page.meta.total, 2);
        assert_eq!(page.meta.total_page, 1);
    }
}
