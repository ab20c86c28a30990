//! Trivia persistence.
//!
//! Every request works inside one [`TriviaTransaction`] obtained from
//! [`TriviaStore::begin`]. Calling [`TriviaTransaction::commit`] publishes the
//! changes; dropping the transaction without committing rolls them back.
//!
//! Two backends implement the store:
//!
//! | Backend | Type | Notes |
//! |---------|------|-------|
//! | Postgres | [`PgTriviaStore`] | Production backend, schema from `migrations/` |
//! | Memory | [`MemoryTriviaStore`] | Local development and tests |

mod memory;
mod postgres;
pub mod seed;

use async_trait::async_trait;
use thiserror::Error;

use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

pub use memory::MemoryTriviaStore;
pub use postgres::PgTriviaStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Question {0} does not exist")]
    QuestionNotFound(i32),
}

#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// Open a unit of work for one request
    async fn begin(&self) -> Result<Box<dyn TriviaTransaction>, StoreError>;
}

#[async_trait]
pub trait TriviaTransaction: Send {
    /// All categories, ordered by id
    async fn categories(&mut self) -> Result<Vec<Category>, StoreError>;

    /// All questions, ordered by id
    async fn questions(&mut self) -> Result<Vec<Question>, StoreError>;

    /// Questions whose category equals `category_id`, ordered by id
    async fn questions_in_category(&mut self, category_id: i32)
        -> Result<Vec<Question>, StoreError>;

    /// Questions whose text contains `term`, ignoring case, ordered by id
    async fn search_questions(&mut self, term: &str) -> Result<Vec<Question>, StoreError>;

    async fn find_question(&mut self, id: i32) -> Result<Option<Question>, StoreError>;

    async fn insert_question(&mut self, question: NewQuestion) -> Result<Question, StoreError>;

    /// Fails with [`StoreError::QuestionNotFound`] when nothing was deleted
    async fn delete_question(&mut self, id: i32) -> Result<(), StoreError>;

    async fn commit(self: Box<Self>) -> Result<(), StoreError>;
}
