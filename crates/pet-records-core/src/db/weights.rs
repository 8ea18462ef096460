//! Weight record database operations.

use rusqlite::params;

use super::{ensure_pet_owned, unknown, Database, DbResult};
use crate::models::{WeightRecord, WeightUnit};

impl Database {
    /// Record a weigh-in for one of the owner's pets.
    pub fn insert_weight(&self, record: &WeightRecord) -> DbResult<()> {
        ensure_pet_owned(self, &record.owner_id, &record.pet_id)?;

        self.conn.execute(
            r#"
            INSERT INTO weight_records (
                id, owner_id, pet_id, date, weight, unit, notes, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                record.id,
                record.owner_id,
                record.pet_id,
                record.date,
                record.weight,
                record.unit.as_str(),
                record.notes,
                record.created_at,
                record.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Weight history for a pet, oldest first.
    pub fn list_weights(&self, owner_id: &str, pet_id: &str) -> DbResult<Vec<WeightRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, owner_id, pet_id, date, weight, unit, notes, created_at, updated_at
            FROM weight_records
            WHERE owner_id = ?1 AND pet_id = ?2
            ORDER BY date ASC, created_at ASC
            "#,
        )?;

        let rows = stmt.query_map([owner_id, pet_id], |row| {
            Ok((
                WeightRecord {
                    id: row.get(0)?,
                    owner_id: row.get(1)?,
                    pet_id: row.get(2)?,
                    date: row.get(3)?,
                    weight: row.get(4)?,
                    unit: WeightUnit::Kg,
                    notes: row.get(6)?,
                    created_at: row.get(7)?,
                    updated_at: row.get(8)?,
                },
                row.get::<_, String>(5)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (mut record, unit) = row?;
            record.unit = WeightUnit::parse(&unit).ok_or_else(|| unknown("weight unit", &unit))?;
            records.push(record);
        }
        Ok(records)
    }

    /// Delete one of the owner's weight records.
    pub fn delete_weight(&self, owner_id: &str, id: &str) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            "DELETE FROM weight_records WHERE id = ?1 AND owner_id = ?2",
            [id, owner_id],
        )?;
        Ok(rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbError;
    use crate::models::Pet;

    #[test]
    fn test_weight_history() {
        let db = Database::open_in_memory().unwrap();
        let pet = Pet::new("user-1".into(), "Max".into(), "dog".into());
        db.insert_pet(&pet).unwrap();

        let later = WeightRecord::new("user-1".into(), pet.id.clone(), "2024-03-01".into(), 66.0, WeightUnit::Lbs);
        let earlier = WeightRecord::new("user-1".into(), pet.id.clone(), "2024-01-01".into(), 29.5, WeightUnit::Kg);
        db.insert_weight(&later).unwrap();
        db.insert_weight(&earlier).unwrap();

        let history = db.list_weights("user-1", &pet.id).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].date, "2024-01-01");
        assert_eq!(history[1].unit, WeightUnit::Lbs);

        assert!(db.list_weights("user-2", &pet.id).unwrap().is_empty());

        assert!(db.delete_weight("user-1", &earlier.id).unwrap());
        assert_eq!(db.list_weights("user-1", &pet.id).unwrap().len(), 1);
    }

    #[test]
    fn test_weight_for_foreign_pet_rejected() {
        let db = Database::open_in_memory().unwrap();
        let pet = Pet::new("user-1".into(), "Max".into(), "dog".into());
        db.insert_pet(&pet).unwrap();

        let record = WeightRecord::new("user-2".into(), pet.id, "2024-01-01".into(), 10.0, WeightUnit::Kg);
        assert!(matches!(db.insert_weight(&record), Err(DbError::NotFound(_))));
    }
}
