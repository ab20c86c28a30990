use sqlx::FromRow;

/// Database model for question
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Question about to be inserted; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl NewQuestion {
    pub fn with_id(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
