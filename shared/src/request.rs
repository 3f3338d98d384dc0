//! Request types for the shared crate
//!
//! Listing-query inputs shared between API clients and backend services.

use serde::{Deserialize, Serialize};

/// Default page size for listing queries
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size a consumer should request
pub const MAX_PAGE_SIZE: u32 = 100;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn is_descending(&self) -> bool {
        matches!(self, Self::Desc)
    }
}

/// Listing-query parameters
///
/// `page` is 1-based. Sorting is optional; the backend decides the
/// fallback ordering when `sort_by` is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationRequest {
    /// Page number (1-based)
    pub page: u32,
    /// Items per page
    pub page_size: u32,
    /// Sort field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Sort direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl PaginationRequest {
    /// Create a request for the given page with the default page size
    pub fn page(page: u32) -> Self {
        Self {
            page,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: None,
            sort_order: None,
        }
    }

    /// Add sorting
    pub fn sorted_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(field.into());
        self.sort_order = Some(order);
        self
    }

    /// Offset for database queries
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1)) as u64 * self.page_size as u64
    }

    /// Limit (clamped to [`MAX_PAGE_SIZE`])
    pub fn limit(&self) -> u32 {
        std::cmp::min(self.page_size, MAX_PAGE_SIZE)
    }
}

impl Default for PaginationRequest {
    fn default() -> Self {
        Self::page(1)
    }
}
