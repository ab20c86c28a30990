#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use axum_test::TestServer;

#[cfg(test)]
use crate::core::app::{build_router, AppServices};
#[cfg(test)]
use crate::core::config::{AppConfig, QuizConfig, SwaggerConfig};
#[cfg(test)]
use crate::modules::store::MemoryTriviaStore;

#[cfg(test)]
pub fn test_app_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_allowed_origin: "http://localhost:3000".to_string(),
    }
}

#[cfg(test)]
fn test_swagger_config() -> SwaggerConfig {
    SwaggerConfig {
        title: "Trivia API".to_string(),
        version: "0.1.0".to_string(),
        description: "Test".to_string(),
    }
}

/// Full application (all layers) over the given in-memory store
#[cfg(test)]
pub fn server_with(store: MemoryTriviaStore) -> TestServer {
    let services = AppServices::new(Arc::new(store), &QuizConfig { rng_seed: None });
    let router = build_router(services, &test_app_config(), &test_swagger_config());
    TestServer::new(router).unwrap()
}

/// Full application over the seeded in-memory store
#[cfg(test)]
pub fn seeded_server() -> TestServer {
    server_with(MemoryTriviaStore::seeded())
}
