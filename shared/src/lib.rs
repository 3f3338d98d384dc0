//! Shared types for the HRMS platform
//!
//! Common types used across multiple services and frontend clients:
//! entity models, pagination contracts, API response envelopes, error
//! types and employee domain events.

pub mod error;
pub mod events;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use request::{PaginationRequest, SortOrder};
pub use response::{ApiResponse, PaginationResponse};
