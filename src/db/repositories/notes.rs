use diesel::prelude::*;

use crate::db::models::note::{NewNote, Note};

pub struct NoteRepo;

impl NoteRepo {
    pub fn find_by_id(
        conn: &mut PgConnection,
        note_id: uuid::Uuid,
    ) -> Result<Option<Note>, diesel::result::Error> {
        use crate::schema::notes::dsl::*;
        notes.filter(id.eq(note_id)).first::<Note>(conn).optional()
    }

    pub fn list(conn: &mut PgConnection) -> Result<Vec<Note>, diesel::result::Error> {
        use crate::schema::notes::dsl::*;
        notes.order(updated_at.desc()).load::<Note>(conn)
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_note: &NewNote,
    ) -> Result<Note, diesel::result::Error> {
        diesel::insert_into(crate::schema::notes::table)
            .values(new_note)
            .get_result(conn)
    }

    pub fn update(
        conn: &mut PgConnection,
        note_id: uuid::Uuid,
        new_title: &str,
        new_content: &str,
    ) -> Result<Note, diesel::result::Error> {
        use crate::schema::notes::dsl::*;
        diesel::update(notes.filter(id.eq(note_id)))
            .set((
                title.eq(new_title),
                content.eq(new_content),
                updated_at.eq(chrono::Utc::now()),
            ))
            .get_result(conn)
    }

    pub fn delete(
        conn: &mut PgConnection,
        note_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::notes::dsl::*;
        diesel::delete(notes.filter(id.eq(note_id))).execute(conn)
    }
}
