//! Data models
//!
//! Shared between backend services and frontend clients (via API).
//! Field names serialize as camelCase to match the frontend contract.
//! Dates and timestamps are ISO 8601 strings.

pub mod contact;
pub mod employee;

// Re-exports
pub use contact::*;
pub use employee::*;
