//! Medication database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{ensure_pet_owned, unknown, Database, DbError, DbResult};
use crate::models::{Medication, MedicationStatus, Schedule};

const MEDICATION_COLUMNS: &str = "id, owner_id, pet_id, name, start_date, next_due_date, end_date, \
     schedule, dosage, dosage_unit, route, reason, notes, status, completed_date, \
     completion_notes, created_at, updated_at";

impl Database {
    /// Insert a new medication for one of the owner's pets.
    pub fn insert_medication(&self, medication: &Medication) -> DbResult<()> {
        ensure_pet_owned(self, &medication.owner_id, &medication.pet_id)?;

        self.conn.execute(
            r#"
            INSERT INTO medications (
                id, owner_id, pet_id, name, start_date, next_due_date, end_date,
                schedule, dosage, dosage_unit, route, reason, notes, status,
                completed_date, completion_notes, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)
            "#,
            params![
                medication.id,
                medication.owner_id,
                medication.pet_id,
                medication.name,
                medication.start_date,
                medication.next_due_date,
                medication.end_date,
                medication.schedule.as_str(),
                medication.dosage,
                medication.dosage_unit,
                medication.route,
                medication.reason,
                medication.notes,
                medication.status.as_str(),
                medication.completed_date,
                medication.completion_notes,
                medication.created_at,
                medication.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Update an existing medication. Returns false if the owner has no such
    /// medication.
    pub fn update_medication(&self, owner_id: &str, medication: &Medication) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE medications SET
                name = ?3,
                start_date = ?4,
                next_due_date = ?5,
                end_date = ?6,
                schedule = ?7,
                dosage = ?8,
                dosage_unit = ?9,
                route = ?10,
                reason = ?11,
                notes = ?12,
                status = ?13,
                updated_at = ?14
            WHERE id = ?1 AND owner_id = ?2
            "#,
            params![
                medication.id,
                owner_id,
                medication.name,
                medication.start_date,
                medication.next_due_date,
                medication.end_date,
                medication.schedule.as_str(),
                medication.dosage,
                medication.dosage_unit,
                medication.route,
                medication.reason,
                medication.notes,
                medication.status.as_str(),
                chrono::Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Mark an active medication as completed.
    ///
    /// Clears the next due date. Returns false if the owner has no such
    /// medication or it is no longer active.
    pub fn complete_medication(
        &self,
        owner_id: &str,
        id: &str,
        completed_date: &str,
        completion_notes: Option<&str>,
    ) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE medications SET
                status = 'completed',
                next_due_date = NULL,
                completed_date = ?3,
                completion_notes = ?4,
                updated_at = ?5
            WHERE id = ?1 AND owner_id = ?2 AND status = 'active'
            "#,
            params![
                id,
                owner_id,
                completed_date,
                completion_notes,
                chrono::Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get one of the owner's medications by ID.
    pub fn get_medication(&self, owner_id: &str, id: &str) -> DbResult<Option<Medication>> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {} FROM medications WHERE id = ?1 AND owner_id = ?2",
                    MEDICATION_COLUMNS
                ),
                [id, owner_id],
                MedicationRow::from_row,
            )
            .optional()?
            .map(|row| row.try_into())
            .transpose()
    }

    /// List the owner's medications, optionally for one pet.
    pub fn list_medications(&self, owner_id: &str, pet_id: Option<&str>) -> DbResult<Vec<Medication>> {
        let mut stmt = self.conn.prepare(&format!(
            r#"
            SELECT {} FROM medications
            WHERE owner_id = ?1 AND (?2 IS NULL OR pet_id = ?2)
            ORDER BY COALESCE(next_due_date, start_date) ASC, id ASC
            "#,
            MEDICATION_COLUMNS
        ))?;

        let rows = stmt.query_map(params![owner_id, pet_id], MedicationRow::from_row)?;

        let mut medications = Vec::new();
        for row in rows {
            medications.push(row?.try_into()?);
        }
        Ok(medications)
    }

    /// Delete one of the owner's medications.
    pub fn delete_medication(&self, owner_id: &str, id: &str) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            "DELETE FROM medications WHERE id = ?1 AND owner_id = ?2",
            [id, owner_id],
        )?;
        Ok(rows_affected > 0)
    }
}

/// Intermediate row struct for database mapping.
struct MedicationRow {
    id: String,
    owner_id: String,
    pet_id: String,
    name: String,
    start_date: String,
    next_due_date: Option<String>,
    end_date: Option<String>,
    schedule: String,
    dosage: Option<String>,
    dosage_unit: Option<String>,
    route: Option<String>,
    reason: Option<String>,
    notes: Option<String>,
    status: String,
    completed_date: Option<String>,
    completion_notes: Option<String>,
    created_at: String,
    updated_at: String,
}

impl MedicationRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            owner_id: row.get(1)?,
            pet_id: row.get(2)?,
            name: row.get(3)?,
            start_date: row.get(4)?,
            next_due_date: row.get(5)?,
            end_date: row.get(6)?,
            schedule: row.get(7)?,
            dosage: row.get(8)?,
            dosage_unit: row.get(9)?,
            route: row.get(10)?,
            reason: row.get(11)?,
            notes: row.get(12)?,
            status: row.get(13)?,
            completed_date: row.get(14)?,
            completion_notes: row.get(15)?,
            created_at: row.get(16)?,
            updated_at: row.get(17)?,
        })
    }
}

impl TryFrom<MedicationRow> for Medication {
    type Error = DbError;

    fn try_from(row: MedicationRow) -> Result<Self, Self::Error> {
        let schedule = Schedule::parse(&row.schedule).ok_or_else(|| unknown("schedule", &row.schedule))?;
        let status = MedicationStatus::parse(&row.status)
            .ok_or_else(|| unknown("medication status", &row.status))?;

        Ok(Medication {
            id: row.id,
            owner_id: row.owner_id,
            pet_id: row.pet_id,
            name: row.name,
            start_date: row.start_date,
            next_due_date: row.next_due_date,
            end_date: row.end_date,
            schedule,
            dosage: row.dosage,
            dosage_unit: row.dosage_unit,
            route: row.route,
            reason: row.reason,
            notes: row.notes,
            status,
            completed_date: row.completed_date,
            completion_notes: row.completion_notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
