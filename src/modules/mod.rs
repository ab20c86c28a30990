//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the persistence backends the API runs on.

pub mod store;
