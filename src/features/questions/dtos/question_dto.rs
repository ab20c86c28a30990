use serde::{Deserialize, Serialize};
use serde_aux::prelude::deserialize_number_from_string;
use utoipa::ToSchema;
use validator::Validate;

use crate::features::questions::models::{NewQuestion, Question};
use crate::shared::types::CategoryMap;

/// Formatted question as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponseDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionResponseDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Request DTO for creating a question
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionDto {
    #[validate(length(min = 1, message = "A question can't be empty"))]
    pub question: String,

    #[validate(length(min = 1, message = "An answer can't be empty"))]
    pub answer: String,

    /// Category id (a numeric string is accepted too)
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub category: i32,

    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub difficulty: i32,
}

impl From<CreateQuestionDto> for NewQuestion {
    fn from(dto: CreateQuestionDto) -> Self {
        Self {
            question: dto.question,
            answer: dto.answer,
            category: dto.category,
            difficulty: dto.difficulty,
        }
    }
}

/// Request DTO for searching questions
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    /// Case-insensitive substring to look for in question text
    pub search_term: String,
}

/// One page of questions plus the full category mapping
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionPageDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    /// Number of questions across all pages
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: String,
}

/// Unpaginated list of questions (search results, questions by category)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionListDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
    pub current_category: String,
}

impl QuestionListDto {
    pub fn new(questions: Vec<QuestionResponseDto>, current_category: String) -> Self {
        Self {
            success: true,
            total_questions: questions.len(),
            questions,
            current_category,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteQuestionResponseDto {
    pub success: bool,
    pub question_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_dto_accepts_numeric_strings() {
        let dto: CreateQuestionDto = serde_json::from_value(json!({
            "question": "Who?",
            "answer": "Me",
            "category": "3",
            "difficulty": 2
        }))
        .unwrap();

        assert_eq!(dto.category, 3);
        assert_eq!(dto.difficulty, 2);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_dto_rejects_empty_text() {
        let dto: CreateQuestionDto = serde_json::from_value(json!({
            "question": "",
            "answer": "Me",
            "category": 1,
            "difficulty": 1
        }))
        .unwrap();
        assert!(dto.validate().is_err());

        let dto: CreateQuestionDto = serde_json::from_value(json!({
            "question": "Who?",
            "answer": "",
            "category": 1,
            "difficulty": 1
        }))
        .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_dto_requires_every_field() {
        let result = serde_json::from_value::<CreateQuestionDto>(json!({
            "question": "Who?",
            "answer": "Me",
            "category": 1
        }));
        assert!(result.is_err());
    }
}
