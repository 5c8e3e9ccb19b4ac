use std::collections::HashMap;
use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use tera::Context;
use tracing::warn;

use crate::web::{AppState, error_page, render_page};

/// GET on the prediction endpoint shows the input form.
pub async fn predict_form(State(state): State<Arc<AppState>>) -> Response {
    let mut context = Context::new();
    context.insert("prediction_text", "");
    match render_page(&state, "index.html", &context) {
        Ok(html) => html.into_response(),
        Err(err) => error_page(&state, err),
    }
}

/// Runs the submission pipeline and renders the result view, or the error
/// view on any failure.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    match state.pipeline.handle_submission(&fields).await {
        Ok(outcome) => {
            let mut context = Context::new();
            context.insert("prediction_text", outcome.label.as_str());
            context.insert("record_id", &outcome.record_id);
            match render_page(&state, "result.html", &context) {
                Ok(html) => html.into_response(),
                Err(err) => error_page(&state, err),
            }
        }
        Err(err) => {
            warn!(error = %err, "Submission rejected.");
            error_page(&state, err.into())
        }
    }
}
