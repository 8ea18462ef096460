//! Pet Records Core Library
//!
//! Local-first pet health records with schedule classification.
//!
//! # Architecture
//!
//! ```text
//!        Host app (authenticated owner_id)
//!                      │
//!          ┌───────────▼───────────┐
//!          │     PetRecordsCore    │  FFI object, owner passed per call
//!          └───────────┬───────────┘
//!                      │
//!        ┌─────────────┼──────────────────────┐
//!        │             │                      │
//!        ▼             ▼                      ▼
//!   CRUD (db)    classify (pure)    auto-complete (explicit write)
//!                      │                      │
//!                      └──────► RecordStore ◄─┘
//!                               (SQLite)
//! ```
//!
//! # Core Principle
//!
//! **Reads never write.** Listing or classifying records has no side effects;
//! marking past appointments as completed is a separate call.
//!
//! # Modules
//!
//! - [`db`]: SQLite database layer, owner-scoped CRUD, `RecordStore` impl
//! - [`models`]: Domain types (Pet, Appointment, Medication, WeightRecord, Note)
//! - [`timeline`]: Classification, ordering and auto-completion
//! - [`config`]: Runtime configuration
//! - [`logging`]: `tracing` subscriber setup

pub mod config;
pub mod db;
pub mod logging;
pub mod models;
pub mod timeline;

// Re-export commonly used types
pub use config::{CoreConfig, ReferenceClock};
pub use db::Database;
pub use models::{
    Appointment, AppointmentCategory, AppointmentStatus, Medication, MedicationStatus, Note,
    NoteCategory, Pet, Schedule, WeightRecord, WeightUnit,
};
pub use timeline::{
    auto_complete_past_appointments, classify, sweep_past_appointments, Classification,
    DashboardSummary, RecordStore, TransitionReport,
};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PetRecordsError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    #[error("Partial update: {0}")]
    PartialUpdate(String),
}

impl From<db::DbError> for PetRecordsError {
    fn from(e: db::DbError) -> Self {
        match e {
            db::DbError::NotFound(what) => PetRecordsError::NotFound(what),
            other => PetRecordsError::DatabaseError(other.to_string()),
        }
    }
}

impl From<timeline::TransitionError> for PetRecordsError {
    fn from(e: timeline::TransitionError) -> Self {
        match e {
            timeline::TransitionError::PersistenceUnavailable(msg) => {
                PetRecordsError::PersistenceUnavailable(msg)
            }
            timeline::TransitionError::PartialFailure { applied, requested } => {
                PetRecordsError::PartialUpdate(format!("{} of {} appointments", applied, requested))
            }
        }
    }
}

impl From<timeline::StoreError> for PetRecordsError {
    fn from(e: timeline::StoreError) -> Self {
        timeline::TransitionError::from(e).into()
    }
}

impl From<config::ConfigError> for PetRecordsError {
    fn from(e: config::ConfigError) -> Self {
        PetRecordsError::InvalidInput(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for PetRecordsError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        PetRecordsError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create a database at the given path.
#[uniffi::export]
pub fn open_database(path: String, config_json: Option<String>) -> Result<Arc<PetRecordsCore>, PetRecordsError> {
    let config = load_config(config_json)?;
    let db = Database::open(&path)?;
    Ok(Arc::new(PetRecordsCore::new(db, config)))
}

/// Create an in-memory database (for testing).
#[uniffi::export]
pub fn open_database_in_memory(config_json: Option<String>) -> Result<Arc<PetRecordsCore>, PetRecordsError> {
    let config = load_config(config_json)?;
    let db = Database::open_in_memory()?;
    Ok(Arc::new(PetRecordsCore::new(db, config)))
}

/// Install the built-in log subscriber. Returns false if one already exists.
#[uniffi::export]
pub fn init_logging(filter: String) -> Result<bool, PetRecordsError> {
    logging::init_logging(&filter)
        .map_err(|e| PetRecordsError::InvalidInput(format!("log filter '{}': {}", filter, e)))
}

/// Parse the config and apply its log filter, if any.
fn load_config(config_json: Option<String>) -> Result<CoreConfig, PetRecordsError> {
    let config = match config_json {
        Some(json) => CoreConfig::from_json(&json)?,
        None => CoreConfig::default(),
    };
    if let Some(filter) = &config.log_filter {
        if !init_logging(filter.clone())? {
            tracing::debug!(filter = %filter, "Log subscriber already installed, keeping it");
        }
    }
    Ok(config)
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe database wrapper for FFI.
///
/// Every call takes the caller's `owner_id`; nothing is read or written
/// outside that owner's records.
#[derive(uniffi::Object)]
pub struct PetRecordsCore {
    db: Arc<Mutex<Database>>,
    config: CoreConfig,
}

impl PetRecordsCore {
    fn new(db: Database, config: CoreConfig) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            config,
        }
    }
}

#[uniffi::export]
impl PetRecordsCore {
    // =========================================================================
    // Pet Operations
    // =========================================================================

    /// Register a new pet.
    pub fn create_pet(
        &self,
        owner_id: String,
        name: String,
        species: String,
        breed: Option<String>,
        birth_date: Option<String>,
    ) -> Result<FfiPet, PetRecordsError> {
        let db = self.db.lock()?;
        let mut pet = Pet::new(owner_id, name, species);
        pet.species = pet.canonical_species();
        pet.breed = breed;
        pet.birth_date = birth_date;
        db.insert_pet(&pet)?;
        Ok(pet.into())
    }

    /// Get one of the owner's pets.
    pub fn get_pet(&self, owner_id: String, pet_id: String) -> Result<Option<FfiPet>, PetRecordsError> {
        let db = self.db.lock()?;
        Ok(db.get_pet(&owner_id, &pet_id)?.map(Into::into))
    }

    /// List the owner's pets, newest first.
    pub fn list_pets(&self, owner_id: String) -> Result<Vec<FfiPet>, PetRecordsError> {
        let db = self.db.lock()?;
        Ok(db.list_pets(&owner_id)?.into_iter().map(Into::into).collect())
    }

    /// Replace a pet's editable fields. Returns false if the owner has no such pet.
    pub fn update_pet(&self, owner_id: String, pet: FfiPet) -> Result<bool, PetRecordsError> {
        let db = self.db.lock()?;
        let Some(mut stored) = db.get_pet(&owner_id, &pet.id)? else {
            return Ok(false);
        };
        stored.name = pet.name;
        stored.species = pet.species;
        stored.species = stored.canonical_species();
        stored.breed = pet.breed;
        stored.birth_date = pet.birth_date;
        Ok(db.update_pet(&owner_id, &stored)?)
    }

    /// Delete a pet and everything recorded for it.
    pub fn delete_pet(&self, owner_id: String, pet_id: String) -> Result<bool, PetRecordsError> {
        let db = self.db.lock()?;
        Ok(db.delete_pet(&owner_id, &pet_id)?)
    }

    // =========================================================================
    // Appointment Operations
    // =========================================================================

    /// Schedule a new appointment for one of the owner's pets.
    pub fn create_appointment(
        &self,
        owner_id: String,
        input: FfiAppointmentInput,
    ) -> Result<FfiAppointment, PetRecordsError> {
        let db = self.db.lock()?;
        let pet = db
            .get_pet(&owner_id, &input.pet_id)?
            .ok_or_else(|| PetRecordsError::NotFound(format!("pet {}", input.pet_id)))?;

        let mut appointment = Appointment::new(owner_id, pet.id, input.date);
        appointment.pet_name = Some(pet.name);
        appointment.time = input.time;
        appointment.category = parse_enum("category", &input.category, AppointmentCategory::parse)?;
        appointment.vet_name = input.vet_name;
        appointment.clinic = input.clinic;
        appointment.notes = input.notes;

        db.insert_appointment(&appointment)?;
        Ok(appointment.into())
    }

    /// Get one of the owner's appointments.
    pub fn get_appointment(
        &self,
        owner_id: String,
        appointment_id: String,
    ) -> Result<Option<FfiAppointment>, PetRecordsError> {
        let db = self.db.lock()?;
        Ok(db.get_appointment(&owner_id, &appointment_id)?.map(Into::into))
    }

    /// Change an appointment's status (e.g., cancel it).
    pub fn set_appointment_status(
        &self,
        owner_id: String,
        appointment_id: String,
        status: String,
    ) -> Result<bool, PetRecordsError> {
        let db = self.db.lock()?;
        let Some(mut appointment) = db.get_appointment(&owner_id, &appointment_id)? else {
            return Ok(false);
        };
        appointment.status = parse_enum("status", &status, AppointmentStatus::parse)?;
        Ok(db.update_appointment(&owner_id, &appointment)?)
    }

    /// Delete one of the owner's appointments.
    pub fn delete_appointment(&self, owner_id: String, appointment_id: String) -> Result<bool, PetRecordsError> {
        let db = self.db.lock()?;
        Ok(db.delete_appointment(&owner_id, &appointment_id)?)
    }

    /// Upcoming and past appointments, optionally for one pet. Read-only.
    pub fn classify_appointments(
        &self,
        owner_id: String,
        pet_id: Option<String>,
    ) -> Result<FfiAppointmentTimeline, PetRecordsError> {
        let db = self.db.lock()?;
        let appointments = db.appointments_for_owner(&owner_id, pet_id.as_deref())?;
        let classified = classify(&appointments, self.config.reference_clock.now());
        Ok(classified.into())
    }

    /// Mark the owner's past-due scheduled appointments as completed.
    pub fn auto_complete_past_appointments(
        &self,
        owner_id: String,
        pet_id: Option<String>,
    ) -> Result<FfiTransitionReport, PetRecordsError> {
        let db = self.db.lock()?;
        let report = sweep_past_appointments(
            &*db,
            &owner_id,
            pet_id.as_deref(),
            self.config.reference_clock.now(),
        )?;
        Ok(report.into())
    }

    // =========================================================================
    // Medication Operations
    // =========================================================================

    /// Add a medication for one of the owner's pets.
    pub fn create_medication(
        &self,
        owner_id: String,
        input: FfiMedicationInput,
    ) -> Result<FfiMedication, PetRecordsError> {
        let db = self.db.lock()?;
        let mut medication = Medication::new(owner_id, input.pet_id, input.name, input.start_date);
        medication.next_due_date = input.next_due_date;
        medication.end_date = input.end_date;
        medication.schedule = parse_enum("schedule", &input.schedule, Schedule::parse)?;
        medication.dosage = input.dosage;
        medication.dosage_unit = input.dosage_unit;
        medication.route = input.route;
        medication.reason = input.reason;
        medication.notes = input.notes;

        db.insert_medication(&medication)?;
        Ok(medication.into())
    }

    /// Get one of the owner's medications.
    pub fn get_medication(
        &self,
        owner_id: String,
        medication_id: String,
    ) -> Result<Option<FfiMedication>, PetRecordsError> {
        let db = self.db.lock()?;
        Ok(db.get_medication(&owner_id, &medication_id)?.map(Into::into))
    }

    /// Move a medication's next due date, e.g. after a dose is given.
    pub fn reschedule_medication(
        &self,
        owner_id: String,
        medication_id: String,
        next_due_date: Option<String>,
    ) -> Result<bool, PetRecordsError> {
        let db = self.db.lock()?;
        let Some(mut medication) = db.get_medication(&owner_id, &medication_id)? else {
            return Ok(false);
        };
        medication.next_due_date = next_due_date;
        Ok(db.update_medication(&owner_id, &medication)?)
    }

    /// Mark an active medication as completed.
    pub fn complete_medication(
        &self,
        owner_id: String,
        medication_id: String,
        completed_date: String,
        completion_notes: Option<String>,
    ) -> Result<bool, PetRecordsError> {
        let db = self.db.lock()?;
        Ok(db.complete_medication(
            &owner_id,
            &medication_id,
            &completed_date,
            completion_notes.as_deref(),
        )?)
    }

    /// Delete one of the owner's medications.
    pub fn delete_medication(&self, owner_id: String, medication_id: String) -> Result<bool, PetRecordsError> {
        let db = self.db.lock()?;
        Ok(db.delete_medication(&owner_id, &medication_id)?)
    }

    /// Current and past medications, optionally for one pet. Read-only.
    pub fn classify_medications(
        &self,
        owner_id: String,
        pet_id: Option<String>,
    ) -> Result<FfiMedicationTimeline, PetRecordsError> {
        let db = self.db.lock()?;
        let medications = db.medications_for_owner(&owner_id, pet_id.as_deref())?;
        let classified = classify(&medications, self.config.reference_clock.now());
        Ok(classified.into())
    }

    // =========================================================================
    // Weight Operations
    // =========================================================================

    /// Record a weigh-in.
    pub fn record_weight(
        &self,
        owner_id: String,
        pet_id: String,
        date: String,
        weight: f64,
        unit: String,
        notes: Option<String>,
    ) -> Result<FfiWeightRecord, PetRecordsError> {
        if !(weight.is_finite() && weight > 0.0) {
            return Err(PetRecordsError::InvalidInput(format!("weight {}", weight)));
        }
        let db = self.db.lock()?;
        let unit = parse_enum("unit", &unit, WeightUnit::parse)?;
        let mut record = WeightRecord::new(owner_id, pet_id, date, weight, unit);
        record.notes = notes;
        db.insert_weight(&record)?;
        Ok(record.into())
    }

    /// Weight history for a pet, oldest first.
    pub fn list_weights(&self, owner_id: String, pet_id: String) -> Result<Vec<FfiWeightRecord>, PetRecordsError> {
        let db = self.db.lock()?;
        Ok(db.list_weights(&owner_id, &pet_id)?.into_iter().map(Into::into).collect())
    }

    /// Delete one of the owner's weight records.
    pub fn delete_weight(&self, owner_id: String, weight_id: String) -> Result<bool, PetRecordsError> {
        let db = self.db.lock()?;
        Ok(db.delete_weight(&owner_id, &weight_id)?)
    }

    // =========================================================================
    // Note Operations
    // =========================================================================

    /// Write a note about one of the owner's pets.
    pub fn create_note(
        &self,
        owner_id: String,
        pet_id: String,
        title: String,
        content: String,
        category: Option<String>,
    ) -> Result<FfiNote, PetRecordsError> {
        let db = self.db.lock()?;
        let mut note = Note::new(owner_id, pet_id, title, content);
        note.category = parse_note_category(category)?;
        db.insert_note(&note)?;
        Ok(note.into())
    }

    pub fn get_note(&self, owner_id: String, note_id: String) -> Result<Option<FfiNote>, PetRecordsError> {
        let db = self.db.lock()?;
        Ok(db.get_note(&owner_id, &note_id)?.map(Into::into))
    }

    /// The owner's notes, optionally for one pet, newest first.
    pub fn list_notes(&self, owner_id: String, pet_id: Option<String>) -> Result<Vec<FfiNote>, PetRecordsError> {
        let db = self.db.lock()?;
        Ok(db.list_notes(&owner_id, pet_id.as_deref())?.into_iter().map(Into::into).collect())
    }

    /// Replace a note's text and category. Returns false if the owner has no such note.
    pub fn update_note(
        &self,
        owner_id: String,
        note_id: String,
        title: String,
        content: String,
        category: Option<String>,
    ) -> Result<bool, PetRecordsError> {
        let db = self.db.lock()?;
        let Some(mut note) = db.get_note(&owner_id, &note_id)? else {
            return Ok(false);
        };
        note.title = title;
        note.content = content;
        note.category = parse_note_category(category)?;
        Ok(db.update_note(&owner_id, &note)?)
    }

    pub fn delete_note(&self, owner_id: String, note_id: String) -> Result<bool, PetRecordsError> {
        let db = self.db.lock()?;
        Ok(db.delete_note(&owner_id, &note_id)?)
    }

    // =========================================================================
    // Dashboard
    // =========================================================================

    /// Counts and next-up items across all of the owner's pets. Read-only.
    pub fn dashboard_summary(&self, owner_id: String) -> Result<FfiDashboardSummary, PetRecordsError> {
        let db = self.db.lock()?;
        let total_pets = db.count_pets(&owner_id)?;
        let appointments = db.appointments_for_owner(&owner_id, None)?;
        let medications = db.medications_for_owner(&owner_id, None)?;

        let summary = DashboardSummary::build(
            total_pets,
            &appointments,
            &medications,
            self.config.reference_clock.now(),
            self.config.dashboard_limit,
        );
        Ok(summary.into())
    }
}

fn parse_enum<T>(field: &str, value: &str, parse: fn(&str) -> Option<T>) -> Result<T, PetRecordsError> {
    parse(value).ok_or_else(|| PetRecordsError::InvalidInput(format!("{} '{}'", field, value)))
}

fn parse_note_category(category: Option<String>) -> Result<Option<NoteCategory>, PetRecordsError> {
    category
        .map(|c| parse_enum("category", &c, NoteCategory::parse))
        .transpose()
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe pet.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPet {
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub birth_date: Option<String>,
}

impl From<Pet> for FfiPet {
    fn from(pet: Pet) -> Self {
        Self {
            id: pet.id,
            name: pet.name,
            species: pet.species,
            breed: pet.breed,
            birth_date: pet.birth_date,
        }
    }
}

/// New appointment fields supplied by the host app.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointmentInput {
    pub pet_id: String,
    pub date: String,
    pub time: Option<String>,
    pub category: String,
    pub vet_name: Option<String>,
    pub clinic: Option<String>,
    pub notes: Option<String>,
}

/// FFI-safe appointment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointment {
    pub id: String,
    pub pet_id: String,
    pub pet_name: Option<String>,
    pub date: String,
    pub time: Option<String>,
    pub category: String,
    pub vet_name: Option<String>,
    pub clinic: Option<String>,
    pub notes: Option<String>,
    pub status: String,
}

impl From<Appointment> for FfiAppointment {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            pet_id: appointment.pet_id,
            pet_name: appointment.pet_name,
            date: appointment.date,
            time: appointment.time,
            category: appointment.category.as_str().to_string(),
            vet_name: appointment.vet_name,
            clinic: appointment.clinic,
            notes: appointment.notes,
            status: appointment.status.as_str().to_string(),
        }
    }
}

/// A record left out of classification.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMalformedRecord {
    pub id: String,
    pub reason: String,
}

impl From<timeline::MalformedRecord> for FfiMalformedRecord {
    fn from(record: timeline::MalformedRecord) -> Self {
        Self {
            id: record.id,
            reason: record.reason,
        }
    }
}

/// Appointments split into upcoming and past.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointmentTimeline {
    pub upcoming: Vec<FfiAppointment>,
    pub past: Vec<FfiAppointment>,
    pub malformed: Vec<FfiMalformedRecord>,
}

impl From<Classification<Appointment>> for FfiAppointmentTimeline {
    fn from(c: Classification<Appointment>) -> Self {
        Self {
            upcoming: c.active.into_iter().map(Into::into).collect(),
            past: c.past.into_iter().map(Into::into).collect(),
            malformed: c.malformed.into_iter().map(Into::into).collect(),
        }
    }
}

/// New medication fields supplied by the host app.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedicationInput {
    pub pet_id: String,
    pub name: String,
    pub start_date: String,
    pub next_due_date: Option<String>,
    pub end_date: Option<String>,
    pub schedule: String,
    pub dosage: Option<String>,
    pub dosage_unit: Option<String>,
    pub route: Option<String>,
    pub reason: Option<String>,
    pub notes: Option<String>,
}

/// FFI-safe medication.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedication {
    pub id: String,
    pub pet_id: String,
    pub name: String,
    pub start_date: String,
    pub next_due_date: Option<String>,
    pub end_date: Option<String>,
    pub schedule: String,
    pub dosage: Option<String>,
    pub dosage_unit: Option<String>,
    pub status: String,
    pub completed_date: Option<String>,
}

impl From<Medication> for FfiMedication {
    fn from(medication: Medication) -> Self {
        Self {
            id: medication.id,
            pet_id: medication.pet_id,
            name: medication.name,
            start_date: medication.start_date,
            next_due_date: medication.next_due_date,
            end_date: medication.end_date,
            schedule: medication.schedule.as_str().to_string(),
            dosage: medication.dosage,
            dosage_unit: medication.dosage_unit,
            status: medication.status.as_str().to_string(),
            completed_date: medication.completed_date,
        }
    }
}

/// Medications split into current and past.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedicationTimeline {
    pub current: Vec<FfiMedication>,
    pub past: Vec<FfiMedication>,
    pub malformed: Vec<FfiMalformedRecord>,
}

impl From<Classification<Medication>> for FfiMedicationTimeline {
    fn from(c: Classification<Medication>) -> Self {
        Self {
            current: c.active.into_iter().map(Into::into).collect(),
            past: c.past.into_iter().map(Into::into).collect(),
            malformed: c.malformed.into_iter().map(Into::into).collect(),
        }
    }
}

/// FFI-safe weight record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiWeightRecord {
    pub id: String,
    pub pet_id: String,
    pub date: String,
    pub weight: f64,
    pub unit: String,
    pub weight_kg: f64,
    pub notes: Option<String>,
}

impl From<WeightRecord> for FfiWeightRecord {
    fn from(record: WeightRecord) -> Self {
        Self {
            weight_kg: record.weight_kg(),
            id: record.id,
            pet_id: record.pet_id,
            date: record.date,
            weight: record.weight,
            unit: record.unit.as_str().to_string(),
            notes: record.notes,
        }
    }
}

/// FFI-safe note.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNote {
    pub id: String,
    pub pet_id: String,
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Note> for FfiNote {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            pet_id: note.pet_id,
            title: note.title,
            content: note.content,
            category: note.category.map(|c| c.as_str().to_string()),
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

/// FFI-safe auto-completion outcome.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTransitionReport {
    pub updated: u32,
    pub eligible: u32,
    pub skipped_foreign: u32,
    pub skipped_malformed: u32,
}

impl From<TransitionReport> for FfiTransitionReport {
    fn from(report: TransitionReport) -> Self {
        Self {
            updated: report.updated as u32,
            eligible: report.eligible as u32,
            skipped_foreign: report.skipped_foreign as u32,
            skipped_malformed: report.skipped_malformed as u32,
        }
    }
}

/// FFI-safe dashboard summary.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDashboardSummary {
    pub total_pets: u32,
    pub upcoming_appointments: u32,
    pub due_medications: u32,
    pub health_alerts: u32,
    pub next_appointments: Vec<FfiAppointment>,
    pub next_medications: Vec<FfiMedication>,
    pub malformed_records: u32,
}

impl From<DashboardSummary> for FfiDashboardSummary {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            total_pets: summary.total_pets as u32,
            upcoming_appointments: summary.upcoming_appointments as u32,
            due_medications: summary.due_medications as u32,
            health_alerts: summary.health_alerts as u32,
            next_appointments: summary.next_appointments.into_iter().map(Into::into).collect(),
            next_medications: summary.next_medications.into_iter().map(Into::into).collect(),
            malformed_records: summary.malformed_records as u32,
        }
    }
}
