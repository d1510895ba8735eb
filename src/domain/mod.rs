//! Typed wire model for the escrow marketplace admin API.
//!
//! Shapes mirror the backend contract exactly: camelCase field names,
//! SCREAMING_SNAKE_CASE status enums, monetary values as JSON numbers.

pub mod kyc;
pub mod transaction;
pub mod user;

use serde::{Deserialize, Serialize};

/// Paging envelope shared by every listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_count: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub limit: i64,
    pub has_more: bool,
}
