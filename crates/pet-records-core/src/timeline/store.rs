//! Persistence boundary consumed by the timeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Appointment, AppointmentStatus, Medication};

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Batch partially applied: {applied} of {requested} updates")]
    PartialBatch { applied: usize, requested: usize },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A conditional status change for one appointment.
///
/// Applied only while the stored row still has `expected_status` and belongs
/// to `owner_id`; otherwise it is a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub id: String,
    pub owner_id: String,
    pub expected_status: AppointmentStatus,
    pub new_status: AppointmentStatus,
    pub updated_at: String,
}

/// Owner-scoped record source and sink.
pub trait RecordStore {
    /// Appointments owned by `owner_id`, optionally limited to one pet.
    fn appointments_for_owner(
        &self,
        owner_id: &str,
        pet_id: Option<&str>,
    ) -> StoreResult<Vec<Appointment>>;

    /// Medications owned by `owner_id`, optionally limited to one pet.
    fn medications_for_owner(
        &self,
        owner_id: &str,
        pet_id: Option<&str>,
    ) -> StoreResult<Vec<Medication>>;

    /// Apply all updates atomically. Returns the number of rows changed.
    fn batch_update_status(&self, updates: &[StatusUpdate]) -> StoreResult<usize>;
}
