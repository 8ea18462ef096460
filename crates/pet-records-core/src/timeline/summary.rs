//! Dashboard summary built from classified records.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::classifier::classify;
use crate::models::{Appointment, Medication};

pub const DEFAULT_DASHBOARD_LIMIT: usize = 5;

/// Counts and next-up items for an owner's dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_pets: usize,
    pub upcoming_appointments: usize,
    pub due_medications: usize,
    /// Upcoming appointments plus due medications
    pub health_alerts: usize,
    /// Earliest upcoming appointments, at most `limit`
    pub next_appointments: Vec<Appointment>,
    /// Earliest due medications, at most `limit`
    pub next_medications: Vec<Medication>,
    /// Records left out because their dates could not be read
    pub malformed_records: usize,
}

impl DashboardSummary {
    pub fn build(
        total_pets: usize,
        appointments: &[Appointment],
        medications: &[Medication],
        reference: NaiveDateTime,
        limit: usize,
    ) -> Self {
        let appts = classify(appointments, reference);
        let meds = classify(medications, reference);

        let upcoming_appointments = appts.active.len();
        let due_medications = meds.active.len();

        Self {
            total_pets,
            upcoming_appointments,
            due_medications,
            health_alerts: upcoming_appointments + due_medications,
            next_appointments: appts.active.into_iter().take(limit).collect(),
            next_medications: meds.active.into_iter().take(limit).collect(),
            malformed_records: appts.malformed.len() + meds.malformed.len(),
        }
    }
}
