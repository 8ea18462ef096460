//! `RecordStore` implementation backed by SQLite.

use rusqlite::params;

use super::{Database, DbError, DbResult};
use crate::models::{Appointment, Medication};
use crate::timeline::{RecordStore, StatusUpdate, StoreError, StoreResult};

impl From<DbError> for StoreError {
    fn from(e: DbError) -> Self {
        StoreError::Unavailable(e.to_string())
    }
}

impl Database {
    /// Apply conditional status updates in one transaction.
    ///
    /// Each update only touches a row that still has its expected status and
    /// owner, so a row already moved by another caller counts as zero. Any
    /// SQLite error rolls the whole batch back.
    pub fn apply_status_updates(&self, updates: &[StatusUpdate]) -> DbResult<usize> {
        // The connection is owned by this wrapper, so no transaction can be
        // open already.
        let tx = self.conn.unchecked_transaction()?;
        let mut applied = 0;
        {
            let mut stmt = tx.prepare(
                r#"
                UPDATE appointments SET
                    status = ?1,
                    updated_at = ?2
                WHERE id = ?3 AND owner_id = ?4 AND status = ?5
                "#,
            )?;
            for update in updates {
                applied += stmt.execute(params![
                    update.new_status.as_str(),
                    update.updated_at,
                    update.id,
                    update.owner_id,
                    update.expected_status.as_str(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(applied)
    }
}

impl RecordStore for Database {
    fn appointments_for_owner(
        &self,
        owner_id: &str,
        pet_id: Option<&str>,
    ) -> StoreResult<Vec<Appointment>> {
        Ok(self.list_appointments(owner_id, pet_id)?)
    }

    fn medications_for_owner(
        &self,
        owner_id: &str,
        pet_id: Option<&str>,
    ) -> StoreResult<Vec<Medication>> {
        Ok(self.list_medications(owner_id, pet_id)?)
    }

    fn batch_update_status(&self, updates: &[StatusUpdate]) -> StoreResult<usize> {
        Ok(self.apply_status_updates(updates)?)
    }
}
