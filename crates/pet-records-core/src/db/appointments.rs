//! Appointment database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{ensure_pet_owned, unknown, Database, DbError, DbResult};
use crate::models::{Appointment, AppointmentCategory, AppointmentStatus};

const APPOINTMENT_COLUMNS: &str = "id, owner_id, pet_id, pet_name, date, time, category, \
     vet_name, clinic, notes, status, created_at, updated_at";

impl Database {
    /// Insert a new appointment for one of the owner's pets.
    pub fn insert_appointment(&self, appointment: &Appointment) -> DbResult<()> {
        ensure_pet_owned(self, &appointment.owner_id, &appointment.pet_id)?;

        self.conn.execute(
            r#"
            INSERT INTO appointments (
                id, owner_id, pet_id, pet_name, date, time, category,
                vet_name, clinic, notes, status, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
            "#,
            params![
                appointment.id,
                appointment.owner_id,
                appointment.pet_id,
                appointment.pet_name,
                appointment.date,
                appointment.time,
                appointment.category.as_str(),
                appointment.vet_name,
                appointment.clinic,
                appointment.notes,
                appointment.status.as_str(),
                appointment.created_at,
                appointment.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Update an existing appointment. Returns false if the owner has no such
    /// appointment.
    pub fn update_appointment(&self, owner_id: &str, appointment: &Appointment) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE appointments SET
                date = ?3,
                time = ?4,
                category = ?5,
                vet_name = ?6,
                clinic = ?7,
                notes = ?8,
                status = ?9,
                updated_at = ?10
            WHERE id = ?1 AND owner_id = ?2
            "#,
            params![
                appointment.id,
                owner_id,
                appointment.date,
                appointment.time,
                appointment.category.as_str(),
                appointment.vet_name,
                appointment.clinic,
                appointment.notes,
                appointment.status.as_str(),
                chrono::Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get one of the owner's appointments by ID.
    pub fn get_appointment(&self, owner_id: &str, id: &str) -> DbResult<Option<Appointment>> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {} FROM appointments WHERE id = ?1 AND owner_id = ?2",
                    APPOINTMENT_COLUMNS
                ),
                [id, owner_id],
                AppointmentRow::from_row,
            )
            .optional()?
            .map(|row| row.try_into())
            .transpose()
    }

    /// List the owner's appointments, optionally for one pet, by date.
    pub fn list_appointments(&self, owner_id: &str, pet_id: Option<&str>) -> DbResult<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(&format!(
            r#"
            SELECT {} FROM appointments
            WHERE owner_id = ?1 AND (?2 IS NULL OR pet_id = ?2)
            ORDER BY date ASC, time ASC, id ASC
            "#,
            APPOINTMENT_COLUMNS
        ))?;

        let rows = stmt.query_map(params![owner_id, pet_id], AppointmentRow::from_row)?;

        let mut appointments = Vec::new();
        for row in rows {
            appointments.push(row?.try_into()?);
        }
        Ok(appointments)
    }

    /// Delete one of the owner's appointments.
    pub fn delete_appointment(&self, owner_id: &str, id: &str) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            "DELETE FROM appointments WHERE id = ?1 AND owner_id = ?2",
            [id, owner_id],
        )?;
        Ok(rows_affected > 0)
    }
}

/// Intermediate row struct for database mapping.
struct AppointmentRow {
    id: String,
    owner_id: String,
    pet_id: String,
    pet_name: Option<String>,
    date: String,
    time: Option<String>,
    category: String,
    vet_name: Option<String>,
    clinic: Option<String>,
    notes: Option<String>,
    status: String,
    created_at: String,
    updated_at: String,
}

impl AppointmentRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            owner_id: row.get(1)?,
            pet_id: row.get(2)?,
            pet_name: row.get(3)?,
            date: row.get(4)?,
            time: row.get(5)?,
            category: row.get(6)?,
            vet_name: row.get(7)?,
            clinic: row.get(8)?,
            notes: row.get(9)?,
            status: row.get(10)?,
            created_at: row.get(11)?,
            updated_at: row.get(12)?,
        })
    }
}

impl TryFrom<AppointmentRow> for Appointment {
    type Error = DbError;

    fn try_from(row: AppointmentRow) -> Result<Self, Self::Error> {
        let category = AppointmentCategory::parse(&row.category)
            .ok_or_else(|| unknown("appointment category", &row.category))?;
        let status = AppointmentStatus::parse(&row.status)
            .ok_or_else(|| unknown("appointment status", &row.status))?;

        Ok(Appointment {
            id: row.id,
            owner_id: row.owner_id,
            pet_id: row.pet_id,
            pet_name: row.pet_name,
            date: row.date,
            time: row.time,
            category,
            vet_name: row.vet_name,
            clinic: row.clinic,
            notes: row.notes,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
