use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::models::note::{NewNote, Note},
    db::repositories::notes::NoteRepo,
    error::AppError,
    validation::note::validate_note_form,
};

pub struct NotesService;

impl NotesService {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<Note>, AppError> {
        NoteRepo::list(conn).map_err(|e| AppError::internal(format!("Failed to list notes: {}", e)))
    }

    pub fn get_by_id(conn: &mut PgConnection, note_id: Uuid) -> Result<Note, AppError> {
        NoteRepo::find_by_id(conn, note_id)
            .map_err(|e| AppError::internal(format!("Failed to find note: {}", e)))?
            .ok_or_else(|| AppError::not_found("Note"))
    }

    pub fn create(conn: &mut PgConnection, title: &str, content: &str) -> Result<Note, AppError> {
        let title = title.trim();
        let content = content.trim();

        validate_note_form(title, content).map_err(AppError::invalid_form)?;

        let new_note = NewNote {
            title: title.to_string(),
            content: content.to_string(),
        };

        NoteRepo::insert(conn, &new_note)
            .map_err(|e| AppError::internal(format!("Failed to create note: {}", e)))
    }

    pub fn update(
        conn: &mut PgConnection,
        note_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Note, AppError> {
        let title = title.trim();
        let content = content.trim();

        // Check the note exists before looking at the submission, so an
        // unknown id answers 404 even when the fields are also invalid.
        NoteRepo::find_by_id(conn, note_id)
            .map_err(|e| AppError::internal(format!("Failed to find note: {}", e)))?
            .ok_or_else(|| AppError::not_found("Note"))?;

        validate_note_form(title, content).map_err(AppError::invalid_form)?;

        NoteRepo::update(conn, note_id, title, content)
            .map_err(|e| AppError::internal(format!("Failed to update note: {}", e)))
    }

    pub fn delete(conn: &mut PgConnection, note_id: Uuid) -> Result<(), AppError> {
        NoteRepo::find_by_id(conn, note_id)
            .map_err(|e| AppError::internal(format!("Failed to find note: {}", e)))?
            .ok_or_else(|| AppError::not_found("Note"))?;

        NoteRepo::delete(conn, note_id)
            .map_err(|e| AppError::internal(format!("Failed to delete note: {}", e)))?;

        Ok(())
    }
}
