use serde::{Deserialize, Serialize, Serializer};
use serde_aux::prelude::deserialize_number_from_string;
use utoipa::openapi::schema::{ObjectBuilder, OneOfBuilder, Schema, Type};
use utoipa::openapi::{Ref, RefOr};
use utoipa::ToSchema;

use crate::features::questions::dtos::QuestionResponseDto;

/// Request DTO for drawing the next quiz question
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    /// Ids of questions already shown in this quiz
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategoryDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    /// Category to draw from, `0` for all categories
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub id: i32,
}

/// Next quiz question, or `""` once every candidate has been shown
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuizResponseDto {
    pub success: bool,
    #[serde(serialize_with = "question_or_empty")]
    #[schema(schema_with = question_or_empty_schema, required = true)]
    pub question: Option<QuestionResponseDto>,
}

impl QuizResponseDto {
    pub fn new(question: Option<QuestionResponseDto>) -> Self {
        Self {
            success: true,
            question,
        }
    }
}

fn question_or_empty<S>(
    question: &Option<QuestionResponseDto>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match question {
        Some(q) => q.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

/// Either a question object or the empty string
fn question_or_empty_schema() -> impl Into<RefOr<Schema>> {
    OneOfBuilder::new()
        .item(Ref::from_schema_name("QuestionResponseDto"))
        .item(
            ObjectBuilder::new()
                .schema_type(Type::String)
                .enum_values(Some([""]))
                .description(Some("Every candidate question has been shown")),
        )
}
