use utoipa::{Modify, OpenApi};

use crate::core::config::SwaggerConfig;
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::questions::{dtos as questions_dtos, handlers as questions_handlers};
use crate::features::quizzes::{dtos as quizzes_dtos, handlers as quizzes_handlers};
use crate::shared::types::{ErrorResponse, SuccessResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::list_category_questions,
        // Questions
        questions_handlers::list_questions,
        questions_handlers::create_question,
        questions_handlers::delete_question,
        questions_handlers::search_questions,
        // Quizzes
        quizzes_handlers::next_quiz_question,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            SuccessResponse,
            // Categories
            categories_dtos::CategoryListDto,
            // Questions
            questions_dtos::QuestionResponseDto,
            questions_dtos::CreateQuestionDto,
            questions_dtos::SearchQuestionsDto,
            questions_dtos::QuestionPageDto,
            questions_dtos::QuestionListDto,
            questions_dtos::DeleteQuestionResponseDto,
            // Quizzes
            quizzes_dtos::QuizRequestDto,
            quizzes_dtos::QuizCategoryDto,
            quizzes_dtos::QuizResponseDto,
        )
    ),
    tags(
        (name = "categories", description = "Trivia categories"),
        (name = "questions", description = "Question listing, search and management"),
        (name = "quizzes", description = "Quiz play"),
    ),
    info(
        title = "Trivia API",
        version = "0.1.0",
        description = "API documentation for the trivia game backend",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl From<&SwaggerConfig> for SwaggerInfoModifier {
    fn from(config: &SwaggerConfig) -> Self {
        Self {
            title: config.title.clone(),
            version: config.version.clone(),
            description: config.description.clone(),
        }
    }
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

/// OpenAPI document with the configured title, version and description
pub fn api_doc(config: &SwaggerConfig) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    SwaggerInfoModifier::from(config).modify(&mut openapi);
    openapi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_lists_every_route() {
        let config = SwaggerConfig {
            title: "Quiz Night".to_string(),
            version: "9.9.9".to_string(),
            description: "Test".to_string(),
        };
        let doc = api_doc(&config);

        assert_eq!(doc.info.title, "Quiz Night");
        assert_eq!(doc.info.version, "9.9.9");
        for path in [
            "/categories",
            "/categories/{id}/questions",
            "/questions",
            "/questions/{id}",
            "/search",
            "/quizzes",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
