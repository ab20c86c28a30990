use std::sync::Arc;

use crate::core::error::{AppError, Result, StoreResultExt};
use crate::features::categories::dtos::CategoryListDto;
use crate::features::categories::models::category_map;
use crate::features::questions::dtos::{QuestionListDto, QuestionResponseDto};
use crate::modules::store::TriviaStore;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn TriviaStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// List every category as an id -> label mapping
    pub async fn list(&self) -> Result<CategoryListDto> {
        let mut tx = self
            .store
            .begin()
            .await
            .or_not_found("Failed to open transaction")?;
        let categories = tx
            .categories()
            .await
            .or_not_found("Failed to list categories")?;
        tx.commit()
            .await
            .or_not_found("Failed to commit transaction")?;

        if categories.is_empty() {
            return Err(AppError::NotFound("No categories available".to_string()));
        }

        Ok(CategoryListDto::new(category_map(&categories)))
    }

    /// List every question in a category, labelled with that category
    pub async fn list_questions(&self, category_id: i32) -> Result<QuestionListDto> {
        let mut tx = self
            .store
            .begin()
            .await
            .or_not_found("Failed to open transaction")?;
        let questions = tx
            .questions_in_category(category_id)
            .await
            .or_not_found("Failed to list questions by category")?;
        let categories = tx
            .categories()
            .await
            .or_not_found("Failed to list categories")?;
        tx.commit()
            .await
            .or_not_found("Failed to commit transaction")?;

        let current_category = category_map(&categories)
            .remove(&category_id)
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", category_id)))?;

        let questions: Vec<QuestionResponseDto> = questions.into_iter().map(|q| q.into()).collect();

        Ok(QuestionListDto::new(questions, current_category))
    }
}
