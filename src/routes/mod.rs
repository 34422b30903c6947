pub mod notes;

use crate::AppState;
use crate::error::AppError;
use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(notes::index))
        .route("/notes", get(notes::list_notes))
        .route("/notes/new", get(notes::new_note_form))
        .route("/notes/new", post(notes::create_note))
        .route("/notes/:note_id", get(notes::get_note))
        .route("/notes/:note_id/edit", get(notes::edit_note_form))
        .route("/notes/:note_id/edit", post(notes::update_note))
        .route("/notes/:note_id/delete", post(notes::delete_note))
        .fallback(not_found)
        .with_state(state)
}

// 未匹配路由的兜底页面
async fn not_found() -> impl IntoResponse {
    AppError::not_found("Page").into_response()
}
