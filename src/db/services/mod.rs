//! High-level database API. SQL lives here; the rest of the application
//! works with domain models and never sees the schema directly.

pub mod prediction_service;

pub use prediction_service::*;
