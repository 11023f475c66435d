//! Pagination and sorting for list endpoints.

use serde::{Deserialize, Serialize};

/// Sort direction for listings ordered by creation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first.
    #[default]
    Asc,
    /// Newest first.
    Desc,
}

impl SortOrder {
    /// Sanitizes a raw sort parameter.
    ///
    /// Only the exact strings `asc` and `desc` are recognized; anything else
    /// falls back to ascending.
    #[must_use]
    pub fn sanitize(raw: &str) -> Self {
        match raw {
            "desc" => Self::Desc,
            _ => Self::Asc,
        }
    }

    /// Returns the canonical name of the direction.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Raw list query string (`?page=&limit=&sort=`).
///
/// Kept as text so that non-numeric values can be treated as "not given"
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// Page number (1-indexed).
    pub page: Option<String>,
    /// Number of items per page.
    pub limit: Option<String>,
    /// Sort direction, `asc` or `desc`.
    pub sort: Option<String>,
}

/// Sanitized listing parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number (1-indexed); 0 means "no pagination".
    pub page: u32,
    /// Items per page; 0 means "no pagination".
    pub limit: u32,
    /// Sort direction.
    pub sort: SortOrder,
}

impl PageRequest {
    /// Creates a request, clamping negative values to zero.
    #[must_use]
    pub fn new(page: i64, limit: i64, sort: &str) -> Self {
        Self {
            page: clamp(page),
            limit: clamp(limit),
            sort: SortOrder::sanitize(sort),
        }
    }

    /// Returns `(offset, limit)` when both page and limit are positive.
    ///
    /// Offset is `(page - 1) * limit`, capped at `i64::MAX`. A capped offset
    /// yields an empty page.
    #[must_use]
    pub fn window(&self) -> Option<(u64, u64)> {
        if self.page == 0 || self.limit == 0 {
            return None;
        }
        let limit = u64::from(self.limit);
        let offset = u64::from(self.page - 1)
            .saturating_mul(limit)
            .min(MAX_OFFSET);
        Some((offset, limit))
    }
}

/// Largest offset a SQL backend accepts.
const MAX_OFFSET: u64 = i64::MAX.unsigned_abs();

fn clamp(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

fn parse_or_zero(raw: Option<&str>) -> i64 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

impl From<ListQuery> for PageRequest {
    fn from(query: ListQuery) -> Self {
        Self::new(
            parse_or_zero(query.page.as_deref()),
            parse_or_zero(query.limit.as_deref()),
            query.sort.as_deref().unwrap_or_default(),
        )
    }
}
