//! Pet database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::Pet;

const PET_COLUMNS: &str =
    "id, owner_id, name, species, breed, birth_date, notes, created_at, updated_at";

fn pet_from_row(row: &Row<'_>) -> rusqlite::Result<Pet> {
    Ok(Pet {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        name: row.get(2)?,
        species: row.get(3)?,
        breed: row.get(4)?,
        birth_date: row.get(5)?,
        notes: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

impl Database {
    /// Insert a new pet.
    pub fn insert_pet(&self, pet: &Pet) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO pets (
                id, owner_id, name, species, breed, birth_date, notes,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                pet.id,
                pet.owner_id,
                pet.name,
                pet.species,
                pet.breed,
                pet.birth_date,
                pet.notes,
                pet.created_at,
                pet.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Update an existing pet. Returns false if the owner has no such pet.
    pub fn update_pet(&self, owner_id: &str, pet: &Pet) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE pets SET
                name = ?3,
                species = ?4,
                breed = ?5,
                birth_date = ?6,
                notes = ?7,
                updated_at = ?8
            WHERE id = ?1 AND owner_id = ?2
            "#,
            params![
                pet.id,
                owner_id,
                pet.name,
                pet.species,
                pet.breed,
                pet.birth_date,
                pet.notes,
                chrono::Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get one of the owner's pets by ID.
    pub fn get_pet(&self, owner_id: &str, pet_id: &str) -> DbResult<Option<Pet>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM pets WHERE id = ?1 AND owner_id = ?2", PET_COLUMNS),
                [pet_id, owner_id],
                pet_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List the owner's pets, newest first.
    pub fn list_pets(&self, owner_id: &str) -> DbResult<Vec<Pet>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM pets WHERE owner_id = ? ORDER BY created_at DESC, id",
            PET_COLUMNS
        ))?;

        let rows = stmt.query_map([owner_id], pet_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Number of pets the owner has registered.
    pub fn count_pets(&self, owner_id: &str) -> DbResult<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM pets WHERE owner_id = ?",
            [owner_id],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Whether `pet_id` exists and belongs to `owner_id`.
    pub fn pet_belongs_to(&self, owner_id: &str, pet_id: &str) -> DbResult<bool> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM pets WHERE id = ?1 AND owner_id = ?2",
                [pet_id, owner_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// Delete a pet together with its appointments, medications and weights.
    pub fn delete_pet(&self, owner_id: &str, pet_id: &str) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            "DELETE FROM pets WHERE id = ?1 AND owner_id = ?2",
            [pet_id, owner_id],
        )?;
        Ok(rows_affected > 0)
    }
}
