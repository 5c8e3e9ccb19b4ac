use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::services::prediction_pipeline::PipelineError;

/// Errors surfaced to the browser. Only [`AppError::user_message`] is ever
/// rendered; internal detail stays in the logs.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("model contract violation")]
    ModelContract,
    #[error("template rendering failed: {0}")]
    Render(#[from] tera::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::ModelContract | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show an end user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(message) => message.clone(),
            AppError::ModelContract => {
                "The prediction service returned an unexpected result. Please try again later."
                    .to_string()
            }
            AppError::Render(_) => "An error occurred while processing your request.".to_string(),
        }
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match &err {
            PipelineError::MissingField { .. } | PipelineError::InvalidField { .. } => {
                AppError::InvalidInput(err.to_string())
            }
            PipelineError::ModelContract { .. } => AppError::ModelContract,
        }
    }
}

/// Last resort, used when the error view itself cannot be rendered.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.user_message();
        (
            self.status(),
            Html(format!(
                "<!DOCTYPE html><html><body><p>{message}</p></body></html>"
            )),
        )
            .into_response()
    }
}
