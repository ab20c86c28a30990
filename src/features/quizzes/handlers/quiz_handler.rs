use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::ErrorResponse;

/// Draw the next quiz question
///
/// Picks a random question from the requested category (or from all
/// categories when `quiz_category.id` is 0) that is not listed in
/// `previous_questions`. `question` is an empty string when none is left.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next question, or \"\" when exhausted", body = QuizResponseDto),
        (status = 422, description = "Invalid quiz request", body = ErrorResponse),
    ),
    tag = "quizzes"
)]
pub async fn next_quiz_question(
    State(service): State<Arc<QuizService>>,
    AppJson(dto): AppJson<QuizRequestDto>,
) -> Result<Json<QuizResponseDto>> {
    let question = service
        .next_question(&dto.previous_questions, dto.quiz_category.id)
        .await?;
    Ok(Json(QuizResponseDto::new(question)))
}
