//! Starter data for the in-memory store.
//!
//! Mirrors `migrations/20250101000001_seed_trivia_data.sql` row for row, so both
//! backends start from the same questions.

use crate::features::categories::models::Category;
use crate::features::questions::models::Question;

const CATEGORIES: &[(i32, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

// (question, answer, category, difficulty)
const QUESTIONS: &[(&str, &str, i32, i32)] = &[
    ("What is the largest planet in our solar system?", "Jupiter", 1, 1),
    ("Which element has the chemical symbol 'Fe'?", "Iron", 1, 2),
    ("What is the powerhouse of the cell?", "Mitochondria", 1, 1),
    ("Which scientist proposed the three laws of motion?", "Isaac Newton", 1, 2),
    ("How many bones are in the adult human body?", "206", 1, 3),
    ("Who painted the ceiling of the Sistine Chapel?", "Michelangelo", 2, 2),
    ("Which Dutch artist cut off part of his own ear?", "Vincent van Gogh", 2, 1),
    ("What is the title of the painting also known as La Gioconda?", "Mona Lisa", 2, 2),
    ("Which art movement is Salvador Dali associated with?", "Surrealism", 2, 3),
    ("What is the longest river in Africa?", "The Nile", 3, 2),
    ("Which country has the most natural lakes?", "Canada", 3, 4),
    ("What is the capital city of Australia?", "Canberra", 3, 2),
    ("In which year did the Berlin Wall fall?", "1989", 4, 2),
    ("Who was the first emperor of Rome?", "Augustus", 4, 3),
    ("Which ship sank on its maiden voyage in 1912?", "Titanic", 4, 1),
    (
        "What title did Napoleon Bonaparte crown himself with in 1804?",
        "Emperor of the French",
        4,
        3,
    ),
    ("Which film won the first Academy Award for Best Animated Feature?", "Shrek", 5, 3),
    ("Who composed the score for the original Star Wars trilogy?", "John Williams", 5, 2),
    (
        "What is the title of the first Harry Potter book published in the US?",
        "Harry Potter and the Sorcerer's Stone",
        5,
        1,
    ),
    ("Which country has won the most FIFA World Cup titles?", "Brazil", 6, 2),
    ("How many players are on a basketball team on the court at once?", "5", 6, 1),
    ("In which sport would you perform a slam dunk?", "Basketball", 6, 1),
];

pub fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|&(id, category_type)| Category {
            id,
            category_type: category_type.to_string(),
        })
        .collect()
}

/// Seed questions with ids assigned from 1 in declaration order
pub fn questions() -> Vec<Question> {
    QUESTIONS
        .iter()
        .zip(1..)
        .map(|(&(question, answer, category, difficulty), id)| Question {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            difficulty,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED_SQL: &str =
        include_str!("../../../migrations/20250101000001_seed_trivia_data.sql");

    fn sql_text(value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }

    #[test]
    fn test_mirrors_sql_seed() {
        let categories = categories();
        let questions = questions();

        for category in &categories {
            let row = format!("({}, {})", category.id, sql_text(&category.category_type));
            assert!(SEED_SQL.contains(&row), "missing category row {}", row);
        }

        for q in &questions {
            let row = format!(
                "({}, {}, {}, {}, {})",
                q.id,
                sql_text(&q.question),
                sql_text(&q.answer),
                q.category,
                q.difficulty
            );
            assert!(SEED_SQL.contains(&row), "missing question row {}", row);
        }

        let sql_rows = SEED_SQL
            .lines()
            .filter(|line| line.trim_start().starts_with('('))
            .count();
        assert_eq!(sql_rows, categories.len() + questions.len());
    }
}
