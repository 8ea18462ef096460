//! Medication models.

use serde::{Deserialize, Serialize};

/// Medication course status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MedicationStatus {
    Active,
    Completed,
    Discontinued,
}

/// Dosing schedule. `Once` is the only non-repeating schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Schedule {
    Once,
    Daily,
    TwiceDaily,
    ThreeTimesDaily,
    Weekly,
    Monthly,
    AsNeeded,
    Other,
}

/// A medication, vaccination or other course of treatment for a pet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    /// Unique medication ID
    pub id: String,
    /// Owning user
    pub owner_id: String,
    /// Pet receiving the medication
    pub pet_id: String,
    /// Drug or product name
    pub name: String,
    /// First administration date (YYYY-MM-DD)
    pub start_date: String,
    /// Next scheduled administration, absent for one-time or finished courses
    pub next_due_date: Option<String>,
    /// Planned end of the course
    pub end_date: Option<String>,
    /// Dosing schedule
    pub schedule: Schedule,
    /// Dose amount (e.g., "2.5")
    pub dosage: Option<String>,
    /// Dose unit (e.g., "mg", "mL")
    pub dosage_unit: Option<String>,
    /// Administration route (e.g., "oral", "topical")
    pub route: Option<String>,
    /// Reason for prescribing
    pub reason: Option<String>,
    /// Free-text notes
    pub notes: Option<String>,
    /// Course status
    pub status: MedicationStatus,
    /// Date the course was marked completed
    pub completed_date: Option<String>,
    /// Notes captured at completion
    pub completion_notes: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl Medication {
    /// Create a new active one-time medication.
    pub fn new(owner_id: String, pet_id: String, name: String, start_date: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id,
            pet_id,
            name,
            start_date,
            next_due_date: None,
            end_date: None,
            schedule: Schedule::Once,
            dosage: None,
            dosage_unit: None,
            route: None,
            reason: None,
            notes: None,
            status: MedicationStatus::Active,
            completed_date: None,
            completion_notes: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Builder-style schedule setter.
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Builder-style next due date setter.
    pub fn due(mut self, next_due_date: impl Into<String>) -> Self {
        self.next_due_date = Some(next_due_date.into());
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == MedicationStatus::Active
    }

    pub fn is_recurring(&self) -> bool {
        self.schedule.is_recurring()
    }
}

impl Schedule {
    pub fn is_recurring(&self) -> bool {
        !matches!(self, Schedule::Once)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Schedule::Once => "once",
            Schedule::Daily => "daily",
            Schedule::TwiceDaily => "twice_daily",
            Schedule::ThreeTimesDaily => "three_times_daily",
            Schedule::Weekly => "weekly",
            Schedule::Monthly => "monthly",
            Schedule::AsNeeded => "as_needed",
            Schedule::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "once" => Some(Schedule::Once),
            "daily" => Some(Schedule::Daily),
            "twice_daily" => Some(Schedule::TwiceDaily),
            "three_times_daily" => Some(Schedule::ThreeTimesDaily),
            "weekly" => Some(Schedule::Weekly),
            "monthly" => Some(Schedule::Monthly),
            "as_needed" => Some(Schedule::AsNeeded),
            "other" => Some(Schedule::Other),
            _ => None,
        }
    }
}

impl MedicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MedicationStatus::Active => "active",
            MedicationStatus::Completed => "completed",
            MedicationStatus::Discontinued => "discontinued",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(MedicationStatus::Active),
            "completed" => Some(MedicationStatus::Completed),
            "discontinued" => Some(MedicationStatus::Discontinued),
            _ => None,
        }
    }
}
