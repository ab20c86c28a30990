//! Trivia questions: paginated listing, search, creation and deletion.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | Ten questions per page, with categories |
//! | POST | `/questions` | Create a question |
//! | DELETE | `/questions/{id}` | Delete a question |
//! | POST | `/search` | Case-insensitive search over question text |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionService;
