use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use super::{StoreError, TriviaStore, TriviaTransaction};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Postgres-backed trivia store
pub struct PgTriviaStore {
    pool: PgPool,
}

impl PgTriviaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgTriviaStore {
    async fn begin(&self) -> Result<Box<dyn TriviaTransaction>, StoreError> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgTriviaTransaction { tx }))
    }
}

struct PgTriviaTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl TriviaTransaction for PgTriviaTransaction {
    async fn categories(&mut self) -> Result<Vec<Category>, StoreError> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
                .fetch_all(&mut *self.tx)
                .await?;
        Ok(categories)
    }

    async fn questions(&mut self) -> Result<Vec<Question>, StoreError> {
        let query = format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id");
        let questions = sqlx::query_as::<_, Question>(&query)
            .fetch_all(&mut *self.tx)
            .await?;
        Ok(questions)
    }

    async fn questions_in_category(
        &mut self,
        category_id: i32,
    ) -> Result<Vec<Question>, StoreError> {
        let query =
            format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY id");
        let questions = sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .fetch_all(&mut *self.tx)
            .await?;
        Ok(questions)
    }

    async fn search_questions(&mut self, term: &str) -> Result<Vec<Question>, StoreError> {
        let query = format!(
            r"SELECT {QUESTION_COLUMNS} FROM questions WHERE question ILIKE $1 ESCAPE '\' ORDER BY id"
        );
        let pattern = format!("%{}%", escape_like(term));
        let questions = sqlx::query_as::<_, Question>(&query)
            .bind(pattern)
            .fetch_all(&mut *self.tx)
            .await?;
        Ok(questions)
    }

    async fn find_question(&mut self, id: i32) -> Result<Option<Question>, StoreError> {
        let query = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1");
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;
        Ok(question)
    }

    async fn insert_question(&mut self, question: NewQuestion) -> Result<Question, StoreError> {
        let query = format!(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {QUESTION_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Question>(&query)
            .bind(&question.question)
            .bind(&question.answer)
            .bind(question.category)
            .bind(question.difficulty)
            .fetch_one(&mut *self.tx)
            .await?;
        Ok(created)
    }

    async fn delete_question(&mut self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *self.tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::QuestionNotFound(id));
        }
        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        let PgTriviaTransaction { tx } = *self;
        tx.commit().await?;
        Ok(())
    }
}

/// Escape LIKE metacharacters so the search term matches literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("title"), "title");
        assert_eq!(escape_like("100%"), r"100\%");
        assert_eq!(escape_like("snake_case"), r"snake\_case");
        assert_eq!(escape_like(r"a\b"), r"a\\b");
    }
}
