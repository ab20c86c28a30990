//! Trivia categories.
//!
//! Categories are seeded by the migrations and never modified through the API.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/categories` | Id -> label mapping of every category |
//! | GET | `/categories/{id}/questions` | All questions in one category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
