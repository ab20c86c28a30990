use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppPath;
use crate::features::categories::dtos::CategoryListDto;
use crate::features::categories::services::CategoryService;
use crate::features::questions::dtos::QuestionListDto;
use crate::shared::types::ErrorResponse;

/// List all categories
///
/// Returns a mapping from category id to its lower-cased label.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Category mapping", body = CategoryListDto),
        (status = 404, description = "No categories available", body = ErrorResponse),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<CategoryListDto>> {
    let categories = service.list().await?;
    Ok(Json(categories))
}

/// List the questions of one category
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Questions in the category", body = QuestionListDto),
        (status = 404, description = "Category not found", body = ErrorResponse),
    ),
    tag = "categories"
)]
pub async fn list_category_questions(
    State(service): State<Arc<CategoryService>>,
    AppPath(category_id): AppPath<i32>,
) -> Result<Json<QuestionListDto>> {
    let questions = service.list_questions(category_id).await?;
    Ok(Json(questions))
}
