use std::sync::Arc;

use crate::core::error::{AppError, Result, StoreResultExt};
use crate::features::categories::models::category_map;
use crate::features::questions::dtos::{
    CreateQuestionDto, DeleteQuestionResponseDto, QuestionListDto, QuestionPageDto,
    QuestionResponseDto,
};
use crate::modules::store::TriviaStore;
use crate::shared::aggregation::most_common_category;
use crate::shared::types::PageQuery;

/// Service for question listing, search, creation and deletion
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
}

impl QuestionService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// One page of questions ordered by id
    pub async fn list_page(&self, query: &PageQuery) -> Result<QuestionPageDto> {
        let mut tx = self
            .store
            .begin()
            .await
            .or_not_found("Failed to open transaction")?;
        let questions = tx
            .questions()
            .await
            .or_not_found("Failed to list questions")?;
        let categories = tx
            .categories()
            .await
            .or_not_found("Failed to list categories")?;
        tx.commit()
            .await
            .or_not_found("Failed to commit transaction")?;

        let page: Vec<QuestionResponseDto> = query
            .slice(&questions)
            .iter()
            .cloned()
            .map(|q| q.into())
            .collect();

        if page.is_empty() {
            return Err(AppError::NotFound(format!(
                "Page {} is empty ({} questions in total)",
                query.page(),
                questions.len()
            )));
        }

        let categories = category_map(&categories);
        let current_category = most_common_category(&categories, page.iter().map(|q| q.category));

        Ok(QuestionPageDto {
            success: true,
            questions: page,
            total_questions: questions.len(),
            categories,
            current_category,
        })
    }

    /// Delete a question by id
    pub async fn delete(&self, id: i32) -> Result<DeleteQuestionResponseDto> {
        let mut tx = self
            .store
            .begin()
            .await
            .or_unprocessable("Failed to open transaction")?;

        let existing = tx
            .find_question(id)
            .await
            .or_unprocessable("Failed to look up question")?;
        if existing.is_none() {
            return Err(AppError::Unprocessable(format!("Question {} not found", id)));
        }

        tx.delete_question(id)
            .await
            .or_unprocessable("Failed to delete question")?;
        tx.commit()
            .await
            .or_unprocessable("Failed to commit transaction")?;

        tracing::info!("Question deleted: id={}", id);

        Ok(DeleteQuestionResponseDto {
            success: true,
            question_id: id,
        })
    }

    /// Insert a new question. The dto must already be validated.
    pub async fn create(&self, dto: CreateQuestionDto) -> Result<()> {
        let mut tx = self
            .store
            .begin()
            .await
            .or_unprocessable("Failed to open transaction")?;
        let question = tx
            .insert_question(dto.into())
            .await
            .or_unprocessable("Failed to create question")?;
        tx.commit()
            .await
            .or_unprocessable("Failed to commit transaction")?;

        tracing::info!(
            "Question created: id={}, category={}",
            question.id,
            question.category
        );

        Ok(())
    }

    /// Case-insensitive substring search over question text
    pub async fn search(&self, term: &str) -> Result<QuestionListDto> {
        let mut tx = self
            .store
            .begin()
            .await
            .or_unprocessable("Failed to open transaction")?;
        let questions = tx
            .search_questions(term)
            .await
            .or_unprocessable("Failed to search questions")?;
        let categories = tx
            .categories()
            .await
            .or_unprocessable("Failed to list categories")?;
        tx.commit()
            .await
            .or_unprocessable("Failed to commit transaction")?;

        let questions: Vec<QuestionResponseDto> = questions.into_iter().map(|q| q.into()).collect();
        let current_category = most_common_category(
            &category_map(&categories),
            questions.iter().map(|q| q.category),
        );

        Ok(QuestionListDto::new(questions, current_category))
    }
}
