use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::{seed, StoreError, TriviaStore, TriviaTransaction};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

#[derive(Debug, Clone)]
struct MemoryState {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_question_id: i32,
}

/// In-process trivia store.
///
/// A transaction holds the store lock for its whole lifetime and works on a
/// private copy of the data, so transactions are serialized and an uncommitted
/// transaction leaves no trace.
#[derive(Clone)]
pub struct MemoryTriviaStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryTriviaStore {
    pub fn new(mut categories: Vec<Category>, mut questions: Vec<Question>) -> Self {
        categories.sort_by_key(|c| c.id);
        questions.sort_by_key(|q| q.id);
        let next_question_id = questions.last().map_or(1, |q| q.id + 1);

        Self {
            state: Arc::new(Mutex::new(MemoryState {
                categories,
                questions,
                next_question_id,
            })),
        }
    }

    /// Store preloaded with the same data the database migrations seed
    pub fn seeded() -> Self {
        Self::new(seed::categories(), seed::questions())
    }
}

#[async_trait]
impl TriviaStore for MemoryTriviaStore {
    async fn begin(&self) -> Result<Box<dyn TriviaTransaction>, StoreError> {
        let guard = Arc::clone(&self.state).lock_owned().await;
        let working = (*guard).clone();
        Ok(Box::new(MemoryTriviaTransaction { guard, working }))
    }
}

struct MemoryTriviaTransaction {
    guard: OwnedMutexGuard<MemoryState>,
    working: MemoryState,
}

impl MemoryTriviaTransaction {
    fn filtered<F>(&self, predicate: F) -> Vec<Question>
    where
        F: Fn(&Question) -> bool,
    {
        self.working
            .questions
            .iter()
            .filter(|q| predicate(q))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl TriviaTransaction for MemoryTriviaTransaction {
    async fn categories(&mut self) -> Result<Vec<Category>, StoreError> {
        Ok(self.working.categories.clone())
    }

    async fn questions(&mut self) -> Result<Vec<Question>, StoreError> {
        Ok(self.working.questions.clone())
    }

    async fn questions_in_category(
        &mut self,
        category_id: i32,
    ) -> Result<Vec<Question>, StoreError> {
        Ok(self.filtered(|q| q.category == category_id))
    }

    async fn search_questions(&mut self, term: &str) -> Result<Vec<Question>, StoreError> {
        let term = term.to_lowercase();
        Ok(self.filtered(|q| q.question.to_lowercase().contains(&term)))
    }

    async fn find_question(&mut self, id: i32) -> Result<Option<Question>, StoreError> {
        Ok(self.working.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert_question(&mut self, question: NewQuestion) -> Result<Question, StoreError> {
        let created = question.with_id(self.working.next_question_id);
        self.working.next_question_id += 1;
        self.working.questions.push(created.clone());
        Ok(created)
    }

    async fn delete_question(&mut self, id: i32) -> Result<(), StoreError> {
        let before = self.working.questions.len();
        self.working.questions.retain(|q| q.id != id);

        if self.working.questions.len() == before {
            return Err(StoreError::QuestionNotFound(id));
        }
        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        let MemoryTriviaTransaction { mut guard, working } = *self;
        *guard = working;
        Ok(())
    }
}
