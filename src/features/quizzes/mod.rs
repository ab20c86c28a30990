//! Quiz play: random unseen questions, optionally limited to one category.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::QuizService;
