use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::questions::handlers;
use crate::features::questions::services::QuestionService;

/// Create routes for the questions feature
pub fn routes(service: Arc<QuestionService>) -> Router {
    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route("/questions/{id}", delete(handlers::delete_question))
        .route("/search", post(handlers::search_questions))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use fake::faker::lorem::en::Sentence;
    use fake::Fake;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::seeded_server;

    #[tokio::test]
    async fn test_first_page_has_ten_questions() {
        let server = seeded_server();
        let response = server.get("/questions").await;

        response.assert_status_ok();
        let json = response.json::<Value>();
        assert_eq!(json["success"], true);
        assert_eq!(json["questions"].as_array().unwrap().len(), 10);
        assert_eq!(json["total_questions"], 22);
        assert_eq!(json["categories"]["1"], "science");
        assert_eq!(json["categories"].as_object().unwrap().len(), 6);
        assert_eq!(json["current_category"], "science");
        assert_eq!(json["questions"][0]["id"], 1);
    }

    #[tokio::test]
    async fn test_last_page_is_partial() {
        let server = seeded_server();
        let response = server.get("/questions").add_query_param("page", 3).await;

        response.assert_status_ok();
        let json = response.json::<Value>();
        let ids: Vec<i64> = json["questions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|q| q["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![21, 22]);
        assert_eq!(json["total_questions"], 22);
        assert_eq!(json["current_category"], "sports");
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_not_found() {
        let server = seeded_server();

        for page in ["4", "0", "-3"] {
            let response = server.get("/questions").add_query_param("page", page).await;
            response.assert_status_not_found();
            assert_eq!(
                response.json::<Value>(),
                json!({ "success": false, "message": "Not Found" })
            );
        }
    }

    #[tokio::test]
    async fn test_negative_pages_count_from_the_end() {
        let server = seeded_server();

        for (page, expected) in [("-1", (3..=12).collect::<Vec<i64>>()), ("-2", vec![1, 2])] {
            let response = server.get("/questions").add_query_param("page", page).await;
            response.assert_status_ok();

            let json = response.json::<Value>();
            let ids: Vec<i64> = json["questions"]
                .as_array()
                .unwrap()
                .iter()
                .map(|q| q["id"].as_i64().unwrap())
                .collect();
            assert_eq!(ids, expected);
            assert_eq!(json["total_questions"], 22);
        }
    }

    #[tokio::test]
    async fn test_unparsable_page_means_first_page() {
        let server = seeded_server();
        let response = server.get("/questions").add_query_param("page", "two").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["questions"][0]["id"], 1);
    }

    #[tokio::test]
    async fn test_delete_question() {
        let server = seeded_server();

        let response = server.delete("/questions/1").await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({ "success": true, "question_id": 1 })
        );

        let json = server.get("/questions").await.json::<Value>();
        assert_eq!(json["total_questions"], 21);
        assert!(json["questions"]
            .as_array()
            .unwrap()
            .iter()
            .all(|q| q["id"] != 1));
    }

    #[tokio::test]
    async fn test_delete_missing_question_is_unprocessable() {
        let server = seeded_server();

        let response = server.delete("/questions/9999").await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.json::<Value>(),
            json!({ "success": false, "message": "Unprocessable" })
        );

        // Deleting twice fails the second time
        server.delete("/questions/5").await.assert_status_ok();
        server
            .delete("/questions/5")
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_question() {
        let server = seeded_server();
        let text: String = Sentence(3..8).fake();

        let response = server
            .post("/questions")
            .json(&json!({
                "question": text,
                "answer": "Forty-two",
                "category": 1,
                "difficulty": 4
            }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!({ "success": true }));

        let json = server
            .get("/questions")
            .add_query_param("page", 3)
            .await
            .json::<Value>();
        assert_eq!(json["total_questions"], 23);
        assert_eq!(json["questions"][2]["question"], text.as_str());
        assert_eq!(json["questions"][2]["answer"], "Forty-two");
        assert_eq!(json["questions"][2]["difficulty"], 4);
    }

    #[tokio::test]
    async fn test_create_accepts_string_category() {
        let server = seeded_server();

        server
            .post("/questions")
            .json(&json!({
                "question": "Which planet is known as the red planet?",
                "answer": "Mars",
                "category": "1",
                "difficulty": "2"
            }))
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_questions() {
        let server = seeded_server();

        let bodies = [
            json!({ "question": "", "answer": "Mars", "category": 1, "difficulty": 1 }),
            json!({ "question": "Red planet?", "answer": "", "category": 1, "difficulty": 1 }),
            json!({ "question": "Red planet?", "answer": "Mars", "category": 1 }),
            json!({ "answer": "Mars", "category": 1, "difficulty": 1 }),
            json!({ "question": "Red planet?", "answer": "Mars", "category": "x", "difficulty": 1 }),
        ];

        for body in bodies {
            let response = server.post("/questions").json(&body).await;
            response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(response.json::<Value>()["message"], "Unprocessable");
        }

        let json = server.get("/questions").await.json::<Value>();
        assert_eq!(json["total_questions"], 22);
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_json() {
        let server = seeded_server();

        server
            .post("/questions")
            .text("{not json")
            .content_type("application/json")
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let server = seeded_server();

        let lower = server
            .post("/search")
            .json(&json!({ "search_term": "title" }))
            .await;
        let upper = server
            .post("/search")
            .json(&json!({ "search_term": "TITLE" }))
            .await;

        lower.assert_status_ok();
        upper.assert_status_ok();
        let lower = lower.json::<Value>();
        assert_eq!(lower, upper.json::<Value>());
        assert_eq!(lower["total_questions"], 4);
        assert_eq!(lower["questions"].as_array().unwrap().len(), 4);
        // One match each in art, history, entertainment and sports; art comes first
        assert_eq!(lower["current_category"], "art");
    }

    #[tokio::test]
    async fn test_search_without_matches_is_not_an_error() {
        let server = seeded_server();
        let response = server
            .post("/search")
            .json(&json!({ "search_term": "xylophone" }))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({
                "success": true,
                "questions": [],
                "total_questions": 0,
                "current_category": ""
            })
        );
    }

    #[tokio::test]
    async fn test_search_term_is_matched_literally() {
        let server = seeded_server();
        let response = server
            .post("/search")
            .json(&json!({ "search_term": "%" }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["total_questions"], 0);
    }

    #[tokio::test]
    async fn test_search_requires_term() {
        let server = seeded_server();

        server
            .post("/search")
            .json(&json!({ "searchTerm": "title" }))
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}
