use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use minijinja::{context, value::Value};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::AppState;
use crate::db::DbConnection;
use crate::db::models::note::Note;
use crate::error::AppError;
use crate::services::notes_service::NotesService;
use crate::templates;
use crate::validation::note::NoteFormErrors;

#[derive(Deserialize)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
}

/// What the templates see for one note: formatted timestamps, stringly id.
#[derive(Serialize)]
struct NoteView {
    id: String,
    title: String,
    content: String,
    created_at: String,
    updated_at: String,
}

impl From<&Note> for NoteView {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id.to_string(),
            title: note.title.clone(),
            content: note.content.clone(),
            created_at: note.created_at.format("%Y-%m-%d %H:%M").to_string(),
            updated_at: note.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

fn db_conn(state: &AppState) -> Result<DbConnection, AppError> {
    state.db.get().map_err(AppError::Pool)
}

fn render(state: &AppState, status: StatusCode, name: &str, ctx: Value) -> Response {
    match templates::render(&state.templates, name, ctx) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}

// 首页重定向到笔记列表
pub async fn index() -> impl IntoResponse {
    Redirect::to("/notes")
}

// 笔记列表页
pub async fn list_notes(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut conn = match db_conn(&state) {
        Ok(conn) => conn,
        Err(err) => return err.into_response(),
    };

    match NotesService::list(&mut conn) {
        Ok(notes) => {
            let notes: Vec<NoteView> = notes.iter().map(NoteView::from).collect();
            render(&state, StatusCode::OK, "notes_list.html", context! { notes })
        }
        Err(err) => err.into_response(),
    }
}

// 查看单个笔记
pub async fn get_note(
    State(state): State<Arc<AppState>>,
    Path(note_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match db_conn(&state) {
        Ok(conn) => conn,
        Err(err) => return err.into_response(),
    };

    match NotesService::get_by_id(&mut conn, note_id) {
        Ok(note) => render(
            &state,
            StatusCode::OK,
            "note_detail.html",
            context! { note => NoteView::from(&note) },
        ),
        Err(err) => err.into_response(),
    }
}

// 新建笔记表单
pub async fn new_note_form(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    render(
        &state,
        StatusCode::OK,
        "note_form.html",
        context! {
            heading => "New note",
            action => "/notes/new",
            cancel_url => "/notes",
            title => "",
            content => "",
            errors => NoteFormErrors::default(),
        },
    )
}

// 创建笔记
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NoteForm>,
) -> impl IntoResponse {
    let mut conn = match db_conn(&state) {
        Ok(conn) => conn,
        Err(err) => return err.into_response(),
    };

    match NotesService::create(&mut conn, &form.title, &form.content) {
        Ok(note) => Redirect::to(&format!("/notes/{}", note.id)).into_response(),
        Err(AppError::InvalidForm { errors }) => render(
            &state,
            StatusCode::UNPROCESSABLE_ENTITY,
            "note_form.html",
            context! {
                heading => "New note",
                action => "/notes/new",
                cancel_url => "/notes",
                title => form.title,
                content => form.content,
                errors => errors,
            },
        ),
        Err(err) => err.into_response(),
    }
}

// 编辑笔记表单，回填已保存的值
pub async fn edit_note_form(
    State(state): State<Arc<AppState>>,
    Path(note_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match db_conn(&state) {
        Ok(conn) => conn,
        Err(err) => return err.into_response(),
    };

    match NotesService::get_by_id(&mut conn, note_id) {
        Ok(note) => render(
            &state,
            StatusCode::OK,
            "note_form.html",
            context! {
                heading => "Edit note",
                action => format!("/notes/{}/edit", note.id),
                cancel_url => format!("/notes/{}", note.id),
                title => note.title,
                content => note.content,
                errors => NoteFormErrors::default(),
            },
        ),
        Err(err) => err.into_response(),
    }
}

// 更新笔记：校验通过则写回并重定向，否则带错误重新渲染表单
pub async fn update_note(
    State(state): State<Arc<AppState>>,
    Path(note_id): Path<Uuid>,
    Form(form): Form<NoteForm>,
) -> impl IntoResponse {
    let mut conn = match db_conn(&state) {
        Ok(conn) => conn,
        Err(err) => return err.into_response(),
    };

    match NotesService::update(&mut conn, note_id, &form.title, &form.content) {
        Ok(note) => Redirect::to(&format!("/notes/{}", note.id)).into_response(),
        Err(AppError::InvalidForm { errors }) => render(
            &state,
            StatusCode::UNPROCESSABLE_ENTITY,
            "note_form.html",
            context! {
                heading => "Edit note",
                action => format!("/notes/{}/edit", note_id),
                cancel_url => format!("/notes/{}", note_id),
                title => form.title,
                content => form.content,
                errors => errors,
            },
        ),
        Err(err) => err.into_response(),
    }
}

// 删除笔记
pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path(note_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match db_conn(&state) {
        Ok(conn) => conn,
        Err(err) => return err.into_response(),
    };

    match NotesService::delete(&mut conn, note_id) {
        Ok(()) => Redirect::to("/notes").into_response(),
        Err(err) => err.into_response(),
    }
}
