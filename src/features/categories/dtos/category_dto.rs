use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::types::CategoryMap;

/// Response DTO for the category listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryListDto {
    pub success: bool,
    /// Category id to lower-cased label
    pub categories: CategoryMap,
}

impl CategoryListDto {
    pub fn new(categories: CategoryMap) -> Self {
        Self {
            success: true,
            categories,
        }
    }
}
