//! Note database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{ensure_pet_owned, unknown, Database, DbError, DbResult};
use crate::models::{Note, NoteCategory};

const NOTE_COLUMNS: &str = "id, owner_id, pet_id, title, content, category, created_at, updated_at";

impl Database {
    /// Insert a note for one of the owner's pets.
    pub fn insert_note(&self, note: &Note) -> DbResult<()> {
        ensure_pet_owned(self, &note.owner_id, &note.pet_id)?;

        self.conn.execute(
            r#"
            INSERT INTO notes (
                id, owner_id, pet_id, title, content, category, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                note.id,
                note.owner_id,
                note.pet_id,
                note.title,
                note.content,
                note.category.map(|c| c.as_str()),
                note.created_at,
                note.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Replace a note's title, content and category. Returns false if the
    /// owner has no such note.
    pub fn update_note(&self, owner_id: &str, note: &Note) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE notes SET
                title = ?3,
                content = ?4,
                category = ?5,
                updated_at = ?6
            WHERE id = ?1 AND owner_id = ?2
            "#,
            params![
                note.id,
                owner_id,
                note.title,
                note.content,
                note.category.map(|c| c.as_str()),
                chrono::Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(rows_affected > 0)
    }

    pub fn get_note(&self, owner_id: &str, id: &str) -> DbResult<Option<Note>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM notes WHERE id = ?1 AND owner_id = ?2", NOTE_COLUMNS),
                [id, owner_id],
                NoteRow::from_row,
            )
            .optional()?
            .map(|row| row.try_into())
            .transpose()
    }

    /// The owner's notes, optionally for one pet, newest first.
    pub fn list_notes(&self, owner_id: &str, pet_id: Option<&str>) -> DbResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(&format!(
            r#"
            SELECT {} FROM notes
            WHERE owner_id = ?1 AND (?2 IS NULL OR pet_id = ?2)
            ORDER BY created_at DESC, id ASC
            "#,
            NOTE_COLUMNS
        ))?;

        let rows = stmt.query_map(params![owner_id, pet_id], NoteRow::from_row)?;

        let mut notes = Vec::new();
        for row in rows {
            notes.push(row?.try_into()?);
        }
        Ok(notes)
    }

    pub fn delete_note(&self, owner_id: &str, id: &str) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            "DELETE FROM notes WHERE id = ?1 AND owner_id = ?2",
            [id, owner_id],
        )?;
        Ok(rows_affected > 0)
    }
}

struct NoteRow {
    id: String,
    owner_id: String,
    pet_id: String,
    title: String,
    content: String,
    category: Option<String>,
    created_at: String,
    updated_at: String,
}

impl NoteRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            owner_id: row.get(1)?,
            pet_id: row.get(2)?,
            title: row.get(3)?,
            content: row.get(4)?,
            category: row.get(5)?,
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }
}

impl TryFrom<NoteRow> for Note {
    type Error = DbError;

    fn try_from(row: NoteRow) -> Result<Self, Self::Error> {
        let category = row
            .category
            .map(|c| NoteCategory::parse(&c).ok_or_else(|| unknown("note category", &c)))
            .transpose()?;

        Ok(Note {
            id: row.id,
            owner_id: row.owner_id,
            pet_id: row.pet_id,
            title: row.title,
            content: row.content,
            category,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
