//! Static page handlers. No business logic here, only view selection.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use tera::Context;

use crate::web::{AppState, error::AppError, render_page};

/// Context for the input-form shell: the result area starts out empty.
fn form_context() -> Context {
    let mut context = Context::new();
    context.insert("prediction_text", "");
    context
}

pub async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    render_page(&state, "home.html", &Context::new())
}

/// The input-form shell. A POST re-renders the form with the result area
/// cleared, preserving the historical behavior of the form page.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    render_page(&state, "index.html", &form_context())
}

pub async fn instruction(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    render_page(&state, "instruction.html", &Context::new())
}

pub async fn about(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    render_page(&state, "about.html", &Context::new())
}

pub async fn feedback(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    render_page(&state, "feedback.html", &Context::new())
}

pub async fn response(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    render_page(&state, "response.html", &Context::new())
}
