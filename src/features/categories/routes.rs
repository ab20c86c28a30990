use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route(
            "/categories/{id}/questions",
            get(handlers::list_category_questions),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::features::categories::models::Category;
    use crate::features::questions::models::Question;
    use crate::modules::store::{seed, MemoryTriviaStore};
    use crate::shared::test_helpers::{seeded_server, server_with};

    #[tokio::test]
    async fn test_list_categories() {
        let server = seeded_server();
        let response = server.get("/categories").await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({
                "success": true,
                "categories": {
                    "1": "science",
                    "2": "art",
                    "3": "geography",
                    "4": "history",
                    "5": "entertainment",
                    "6": "sports"
                }
            })
        );
    }

    #[tokio::test]
    async fn test_no_categories_is_not_found() {
        let server = server_with(MemoryTriviaStore::new(Vec::new(), Vec::new()));
        let response = server.get("/categories").await;

        response.assert_status_not_found();
        assert_eq!(
            response.json::<Value>(),
            json!({ "success": false, "message": "Not Found" })
        );
    }

    #[tokio::test]
    async fn test_questions_by_category() {
        let server = seeded_server();
        let response = server.get("/categories/4/questions").await;

        response.assert_status_ok();
        let json = response.json::<Value>();
        let questions = json["questions"].as_array().unwrap();
        assert_eq!(json["current_category"], "history");
        assert_eq!(json["total_questions"], 4);
        assert_eq!(questions.len(), 4);
        assert!(questions.iter().all(|q| q["category"] == 4));
    }

    #[tokio::test]
    async fn test_single_question_category() {
        let store = MemoryTriviaStore::new(
            vec![Category {
                id: 1,
                category_type: "Science".to_string(),
            }],
            vec![Question {
                id: 1,
                question: "What is H2O?".to_string(),
                answer: "Water".to_string(),
                category: 1,
                difficulty: 1,
            }],
        );
        let server = server_with(store);

        let json = server.get("/categories/1/questions").await.json::<Value>();
        assert_eq!(json["current_category"], "science");
        assert_eq!(
            json["questions"],
            json!([{
                "id": 1,
                "question": "What is H2O?",
                "answer": "Water",
                "category": 1,
                "difficulty": 1
            }])
        );
    }

    #[tokio::test]
    async fn test_empty_category_is_not_an_error() {
        let server = server_with(MemoryTriviaStore::new(seed::categories(), Vec::new()));
        let response = server.get("/categories/2/questions").await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({
                "success": true,
                "questions": [],
                "total_questions": 0,
                "current_category": "art"
            })
        );
    }

    #[tokio::test]
    async fn test_unknown_category_is_not_found() {
        let server = seeded_server();

        server
            .get("/categories/99/questions")
            .await
            .assert_status_not_found();
        server
            .get("/categories/science/questions")
            .await
            .assert_status_not_found();
    }
}
