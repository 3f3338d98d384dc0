//! API Response types
//!
//! Standardized API response envelope shared by all services.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorResponse, status_for_code};

/// Pagination metadata for listing responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResponse {
    /// Total number of items across all pages
    pub total_count: u64,
    /// Total number of pages
    pub total_pages: u32,
    /// Current page number (1-based)
    pub current_page: u32,
    /// Items per page
    pub page_size: u32,
}

impl PaginationResponse {
    /// Create pagination metadata, rounding the page count up
    pub fn new(current_page: u32, page_size: u32, total_count: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            ((total_count as f64) / (page_size as f64)).ceil() as u32
        };
        Self {
            total_count,
            total_pages,
            current_page,
            page_size,
        }
    }
}

/// Unified API response envelope
///
/// `data` is always present; `pagination` accompanies listing responses
/// and `error` accompanies failures. No combination is forbidden, the
/// envelope itself stays policy-free.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response payload
    pub data: T,
    /// Pagination metadata (listing responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationResponse>,
    /// Error envelope (failures)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            data,
            pagination: None,
            error: None,
        }
    }

    /// Create a successful listing response
    pub fn paginated(data: T, pagination: PaginationResponse) -> Self {
        Self {
            data,
            pagination: Some(pagination),
            error: None,
        }
    }

    /// Attach pagination metadata
    pub fn with_pagination(mut self, pagination: PaginationResponse) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Attach an error envelope
    pub fn with_error(mut self, error: ErrorResponse) -> Self {
        self.error = Some(error);
        self
    }
}

impl ApiResponse<()> {
    /// Create a failure response with an empty payload
    pub fn failure(error: ErrorResponse) -> Self {
        Self {
            data: (),
            pagination: None,
            error: Some(error),
        }
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = match &self.error {
            None => http::StatusCode::OK,
            Some(err) => status_for_code(&err.code),
        };
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(PaginationResponse::new(1, 20, 0).total_pages, 0);
        assert_eq!(PaginationResponse::new(1, 20, 20).total_pages, 1);
        assert_eq!(PaginationResponse::new(1, 20, 21).total_pages, 2);
        assert_eq!(PaginationResponse::new(1, 7, 50).total_pages, 8);
    }

    #[test]
    fn test_zero_page_size() {
        let meta = PaginationResponse::new(1, 0, 42);
        assert_eq!(meta.total_pages, 0);
        assert_eq!(meta.page_size, 0);
    }

    #[test]
    fn test_ok_omits_optional_sections() {
        let response = ApiResponse::ok(vec!["a", "b"]);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({ "data": ["a", "b"] }));
    }

    #[test]
    fn test_paginated_wire_form() {
        let response = ApiResponse::paginated(vec![1, 2, 3], PaginationResponse::new(2, 3, 10));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["data"], json!([1, 2, 3]));
        assert_eq!(value["pagination"]["totalCount"], 10);
        assert_eq!(value["pagination"]["totalPages"], 4);
        assert_eq!(value["pagination"]["currentPage"], 2);
        assert_eq!(value["pagination"]["pageSize"], 3);
    }

    #[test]
    fn test_failure_envelope() {
        let response = ApiResponse::failure(ErrorResponse::new("NOT_FOUND", "Employee not found"));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["data"], json!(null));
        assert_eq!(value["error"]["code"], "NOT_FOUND");
        assert!(value.get("pagination").is_none());
    }

    #[test]
    fn test_data_and_error_may_coexist() {
        // Partial results with a warning-style error are representable
        let response = ApiResponse::ok(json!({"imported": 7}))
            .with_error(ErrorResponse::new("VALIDATION_FAILED", "3 rows skipped"));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["data"]["imported"], 7);
        assert_eq!(value["error"]["code"], "VALIDATION_FAILED");
    }

    #[test]
    fn test_envelope_deserialize() {
        let json = r#"{"data":{"id":"e1"},"pagination":{"totalCount":1,"totalPages":1,"currentPage":1,"pageSize":20}}"#;
        let response: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(response.pagination.unwrap().total_count, 1);
        assert!(response.error.is_none());
    }
}
