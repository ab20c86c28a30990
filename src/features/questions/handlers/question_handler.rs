use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::questions::dtos::{
    CreateQuestionDto, DeleteQuestionResponseDto, QuestionListDto, QuestionPageDto,
    SearchQuestionsDto,
};
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ErrorResponse, PageQuery, SuccessResponse};

/// List questions, ten per page
///
/// Also returns every category and the most common category on the page.
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionPageDto),
        (status = 404, description = "Page is empty", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    query: std::result::Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionPageDto>> {
    // A malformed query string is treated like an absent one
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let page = service.list_page(&query).await?;
    Ok(Json(page))
}

/// Delete a question
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponseDto),
        (status = 422, description = "Question missing or could not be deleted", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<DeleteQuestionResponseDto>> {
    let deleted = service.delete(id).await?;
    Ok(Json(deleted))
}

/// Create a question
#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionDto,
    responses(
        (status = 200, description = "Question created", body = SuccessResponse),
        (status = 422, description = "Invalid question", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(service): State<Arc<QuestionService>>,
    AppJson(dto): AppJson<CreateQuestionDto>,
) -> Result<Json<SuccessResponse>> {
    dto.validate()
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    service.create(dto).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Search questions by text
#[utoipa::path(
    post,
    path = "/search",
    request_body = SearchQuestionsDto,
    responses(
        (status = 200, description = "Matching questions (possibly none)", body = QuestionListDto),
        (status = 422, description = "Invalid search request", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(service): State<Arc<QuestionService>>,
    AppJson(dto): AppJson<SearchQuestionsDto>,
) -> Result<Json<QuestionListDto>> {
    let results = service.search(&dto.search_term).await?;
    Ok(Json(results))
}
