use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, QuizConfig, SwaggerConfig};
use crate::core::error::AppError;
use crate::core::{middleware, openapi};
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::questions::{routes as questions_routes, QuestionService};
use crate::features::quizzes::{routes as quizzes_routes, QuizService};
use crate::modules::store::TriviaStore;

/// Services shared by all requests, built once at startup
#[derive(Clone)]
pub struct AppServices {
    pub categories: Arc<CategoryService>,
    pub questions: Arc<QuestionService>,
    pub quizzes: Arc<QuizService>,
}

impl AppServices {
    pub fn new(store: Arc<dyn TriviaStore>, quiz: &QuizConfig) -> Self {
        let quizzes = match quiz.rng_seed {
            Some(seed) => {
                tracing::info!("Quiz draws seeded with {}", seed);
                QuizService::with_seed(Arc::clone(&store), seed)
            }
            None => QuizService::new(Arc::clone(&store)),
        };

        Self {
            categories: Arc::new(CategoryService::new(Arc::clone(&store))),
            questions: Arc::new(QuestionService::new(Arc::clone(&store))),
            quizzes: Arc::new(quizzes),
        }
    }
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn route_not_found() -> AppError {
    AppError::NotFound("No route matched".to_string())
}

/// Build the complete application router with every middleware layer
pub fn build_router(services: AppServices, app: &AppConfig, swagger: &SwaggerConfig) -> Router {
    let docs =
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::api_doc(swagger));

    let router = Router::new()
        .merge(docs)
        .merge(categories_routes::routes(services.categories))
        .merge(questions_routes::routes(services.questions))
        .merge(quizzes_routes::routes(services.quizzes))
        .route("/health", get(health_check))
        .fallback(route_not_found);

    middleware::with_cors(router, &app.cors_allowed_origin)
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
