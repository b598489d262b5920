//! Pagination parameters for list queries.

use serde::{Deserialize, Serialize};

/// Pagination parameters shared across all list operations.
///
/// - `per_page`: 1–100, default 25
/// - `page`: ≥ 1, default 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_per_page() -> u32 {
    25
}

fn default_page() -> u32 {
    1
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            page: default_page(),
        }
    }
}

impl PageRequest {
    /// Clamp `per_page` to the valid range 1–100 and `page` to ≥ 1.
    ///
    /// Call before deriving `limit`/`offset` to enforce bounds.
    pub fn clamped(self) -> Self {
        Self {
            per_page: self.per_page.clamp(1, 100),
            page: self.page.max(1),
        }
    }

    /// Row limit for the query.
    pub fn limit(self) -> u64 {
        self.per_page as u64
    }

    /// Row offset for the query. Saturates at page 0 so an unclamped
    /// request cannot underflow.
    pub fn offset(self) -> u64 {
        (self.page.saturating_sub(1) as u64) * self.per_page as u64
    }
}
