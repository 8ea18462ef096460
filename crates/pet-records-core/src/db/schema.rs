//! SQLite schema definition.

/// Complete database schema for pet records.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Pets
-- ============================================================================

CREATE TABLE IF NOT EXISTS pets (
    id TEXT PRIMARY KEY,
    owner_id TEXT NOT NULL,
    name TEXT NOT NULL,
    species TEXT NOT NULL,
    breed TEXT,
    birth_date TEXT,
    notes TEXT,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_pets_owner ON pets(owner_id);

-- ============================================================================
-- Appointments
-- ============================================================================

-- date/time are kept as text so a bad legacy value surfaces per record
-- instead of failing the whole query.
CREATE TABLE IF NOT EXISTS appointments (
    id TEXT PRIMARY KEY,
    owner_id TEXT NOT NULL,
    pet_id TEXT NOT NULL REFERENCES pets(id) ON DELETE CASCADE,
    pet_name TEXT,
    date TEXT NOT NULL,                          -- YYYY-MM-DD
    time TEXT,                                   -- HH:MM
    category TEXT NOT NULL DEFAULT 'checkup',    -- checkup, grooming, emergency, vaccination, other
    vet_name TEXT,
    clinic TEXT,
    notes TEXT,
    status TEXT NOT NULL DEFAULT 'scheduled',    -- scheduled, completed, cancelled
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_appointments_owner_pet ON appointments(owner_id, pet_id);
CREATE INDEX IF NOT EXISTS idx_appointments_status ON appointments(status);

-- ============================================================================
-- Medications
-- ============================================================================

CREATE TABLE IF NOT EXISTS medications (
    id TEXT PRIMARY KEY,
    owner_id TEXT NOT NULL,
    pet_id TEXT NOT NULL REFERENCES pets(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    start_date TEXT NOT NULL,
    next_due_date TEXT,
    end_date TEXT,
    schedule TEXT NOT NULL DEFAULT 'once',
    dosage TEXT,
    dosage_unit TEXT,
    route TEXT,
    reason TEXT,
    notes TEXT,
    status TEXT NOT NULL DEFAULT 'active',       -- active, completed, discontinued
    completed_date TEXT,
    completion_notes TEXT,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_medications_owner_pet ON medications(owner_id, pet_id);

-- ============================================================================
-- Weight Records
-- ============================================================================

CREATE TABLE IF NOT EXISTS weight_records (
    id TEXT PRIMARY KEY,
    owner_id TEXT NOT NULL,
    pet_id TEXT NOT NULL REFERENCES pets(id) ON DELETE CASCADE,
    date TEXT NOT NULL,
    weight REAL NOT NULL CHECK (weight > 0),
    unit TEXT NOT NULL CHECK (unit IN ('kg', 'lbs')),
    notes TEXT,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_weight_records_owner_pet ON weight_records(owner_id, pet_id);

-- ============================================================================
-- Notes
-- ============================================================================

CREATE TABLE IF NOT EXISTS notes (
    id TEXT PRIMARY KEY,
    owner_id TEXT NOT NULL,
    pet_id TEXT NOT NULL REFERENCES pets(id) ON DELETE CASCADE,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    category TEXT,                               -- behavior, health, general, emergency
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_notes_owner_pet ON notes(owner_id, pet_id);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);
    }

    #[test]
    fn test_schema_is_reentrant() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        assert!(conn.execute_batch(SCHEMA).is_ok());
    }

    #[test]
    fn test_weight_constraints() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        conn.execute(
            "INSERT INTO pets (id, owner_id, name, species) VALUES ('p1', 'u1', 'Max', 'dog')",
            [],
        )
        .unwrap();

        // Non-positive weight should fail
        let result = conn.execute(
            "INSERT INTO weight_records (id, owner_id, pet_id, date, weight, unit) VALUES ('w1', 'u1', 'p1', '2024-01-01', 0, 'kg')",
            [],
        );
        assert!(result.is_err());

        // Unknown unit should fail
        let result = conn.execute(
            "INSERT INTO weight_records (id, owner_id, pet_id, date, weight, unit) VALUES ('w1', 'u1', 'p1', '2024-01-01', 10, 'stone')",
            [],
        );
        assert!(result.is_err());

        let result = conn.execute(
            "INSERT INTO weight_records (id, owner_id, pet_id, date, weight, unit) VALUES ('w1', 'u1', 'p1', '2024-01-01', 10, 'kg')",
            [],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_default_timestamps_are_rfc3339() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        conn.execute(
            "INSERT INTO pets (id, owner_id, name, species) VALUES ('p1', 'u1', 'Max', 'dog')",
            [],
        )
        .unwrap();

        let (created, updated): (String, String) = conn
            .query_row("SELECT created_at, updated_at FROM pets WHERE id = 'p1'", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&created).is_ok(), "{}", created);
        assert!(chrono::DateTime::parse_from_rfc3339(&updated).is_ok(), "{}", updated);
    }

    #[test]
    fn test_records_require_existing_pet() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        let result = conn.execute(
            "INSERT INTO appointments (id, owner_id, pet_id, date) VALUES ('a1', 'u1', 'missing', '2024-01-01')",
            [],
        );
        assert!(result.is_err());
    }
}
