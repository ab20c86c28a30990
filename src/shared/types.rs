use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::{DEFAULT_PAGE, QUESTIONS_PER_PAGE};

/// Category id to lower-cased category label
pub type CategoryMap = BTreeMap<i32, String>;

/// Body returned by every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Bare acknowledgement for operations that return nothing else
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Query parameters for paginated listings.
///
/// `page` is kept as raw text: anything that does not parse as an integer
/// is treated as if it were absent.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number (1-indexed, default: 1)
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE)
    }

    /// Slice one page out of `items`.
    ///
    /// Bounds are `(page - 1) * QUESTIONS_PER_PAGE` and one page past that. A negative bound counts
    /// back from the end of `items`, then both are clamped to the list, so page
    /// 0 and pages past the end come out empty.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = i64::try_from(items.len()).unwrap_or(i64::MAX);
        let per_page = QUESTIONS_PER_PAGE as i64;
        let start = self.page().saturating_sub(1).saturating_mul(per_page);
        let end = start.saturating_add(per_page);

        let (start, end) = (resolve_index(start, len), resolve_index(end, len));
        if start >= end {
            return &[];
        }
        &items[start..end]
    }
}

fn resolve_index(index: i64, len: i64) -> usize {
    let index = if index < 0 { index.saturating_add(len) } else { index };
    index.clamp(0, len) as usize
}
