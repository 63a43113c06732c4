//! Page window normalization and pagination metadata

use serde::Serialize;
use utoipa::ToSchema;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// A normalized page window: `page >= 1`, `1 <= limit <= 100`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Normalize raw `page` / `limit` query values.
    ///
    /// Missing, unparseable or non-positive values take the defaults; a limit
    /// above the maximum is clamped.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(DEFAULT_PAGE);

        let limit = limit
            .and_then(|l| l.trim().parse::<i64>().ok())
            .filter(|l| *l >= 1)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);

        Self { page, limit }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total_items: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub limit: i64,
}

impl PaginationMeta {
    pub fn new(request: PageRequest, total_items: i64) -> Self {
        let total_pages = if total_items > 0 {
            (total_items + request.limit - 1) / request.limit
        } else {
            0
        };

        Self {
            total_items,
            total_pages,
            current_page: request.page,
            limit: request.limit,
        }
    }
}
