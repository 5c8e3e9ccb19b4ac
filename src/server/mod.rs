pub mod config;

use thiserror::Error;

/// Fatal initialization failures. The process must exit without binding the
/// listener when any of these occur.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("classifier artifact error: {0}")]
    Model(#[from] crate::model::ModelError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("template error: {0}")]
    Templates(#[from] tera::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
