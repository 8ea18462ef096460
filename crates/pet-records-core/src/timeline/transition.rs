//! Auto-completion of past-due appointments.
//!
//! This is the only write the timeline performs. It is never triggered by a
//! classification or listing call; callers invoke it on demand or from a
//! timer via [`sweep_past_appointments`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::effective::{is_past, TimelineRecord};
use super::store::{RecordStore, StatusUpdate, StoreError};
use crate::models::{Appointment, AppointmentStatus};

/// Transition errors.
#[derive(Error, Debug)]
pub enum TransitionError {
    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    #[error("Partial failure: {applied} of {requested} appointments updated")]
    PartialFailure { applied: usize, requested: usize },
}

impl From<StoreError> for TransitionError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Unavailable(msg) => TransitionError::PersistenceUnavailable(msg),
            StoreError::PartialBatch { applied, requested } => {
                TransitionError::PartialFailure { applied, requested }
            }
        }
    }
}

pub type TransitionResult<T> = Result<T, TransitionError>;

/// Outcome of one auto-completion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionReport {
    /// Appointments actually flipped to completed
    pub updated: usize,
    /// Appointments that qualified and were sent to the store
    pub eligible: usize,
    /// Records dropped because they belong to another owner
    pub skipped_foreign: usize,
    /// Records dropped because their date or time could not be read
    pub skipped_malformed: usize,
}

/// The pure half of a transition: which appointments should flip.
#[derive(Debug, Clone, Default)]
pub struct TransitionPlan {
    pub updates: Vec<StatusUpdate>,
    pub skipped_foreign: usize,
    pub skipped_malformed: usize,
}

/// Decide which of `records` are past-due and still scheduled.
pub fn plan_completions(
    records: &[Appointment],
    reference: NaiveDateTime,
    owner_id: &str,
    updated_at: &str,
) -> TransitionPlan {
    let mut plan = TransitionPlan::default();

    for record in records {
        if record.owner_id() != owner_id {
            tracing::warn!(
                record_id = %record.id,
                owner_id,
                "Ignoring appointment owned by another user"
            );
            plan.skipped_foreign += 1;
            continue;
        }

        if record.status != AppointmentStatus::Scheduled {
            continue;
        }

        match is_past(record, reference) {
            Ok(true) => plan.updates.push(StatusUpdate {
                id: record.id.clone(),
                owner_id: owner_id.to_string(),
                expected_status: AppointmentStatus::Scheduled,
                new_status: AppointmentStatus::Completed,
                updated_at: updated_at.to_string(),
            }),
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(record_id = %e.id, reason = %e.reason, "Skipping malformed appointment");
                plan.skipped_malformed += 1;
            }
        }
    }

    plan
}

/// Mark every past-due scheduled appointment in `records` as completed.
///
/// Records not owned by `owner_id` are dropped, never written. All updates
/// go to the store as one atomic batch; a store failure is returned as an
/// error and nothing is reported as updated.
pub fn auto_complete_past_appointments<S>(
    records: &[Appointment],
    reference: NaiveDateTime,
    owner_id: &str,
    store: &S,
) -> TransitionResult<TransitionReport>
where
    S: RecordStore + ?Sized,
{
    let updated_at = chrono::Utc::now().to_rfc3339();
    let plan = plan_completions(records, reference, owner_id, &updated_at);

    let eligible = plan.updates.len();
    let mut report = TransitionReport {
        updated: 0,
        eligible,
        skipped_foreign: plan.skipped_foreign,
        skipped_malformed: plan.skipped_malformed,
    };

    if plan.updates.is_empty() {
        return Ok(report);
    }

    report.updated = store.batch_update_status(&plan.updates).map_err(|e| {
        tracing::error!(owner_id, eligible, error = %e, "Auto-complete batch failed");
        TransitionError::from(e)
    })?;

    tracing::info!(
        owner_id,
        updated = report.updated,
        eligible = report.eligible,
        "Marked past appointments as completed"
    );

    Ok(report)
}

/// Load the owner's appointments from `store` and auto-complete the past ones.
pub fn sweep_past_appointments<S>(
    store: &S,
    owner_id: &str,
    pet_id: Option<&str>,
    reference: NaiveDateTime,
) -> TransitionResult<TransitionReport>
where
    S: RecordStore + ?Sized,
{
    let appointments = store.appointments_for_owner(owner_id, pet_id)?;
    auto_complete_past_appointments(&appointments, reference, owner_id, store)
}
