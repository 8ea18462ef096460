//! Appointment models.

use serde::{Deserialize, Serialize};

/// Appointment lifecycle status.
///
/// Only `Scheduled` appointments can be auto-completed; the other two are
/// terminal as far as the timeline is concerned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// Kind of visit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentCategory {
    Checkup,
    Grooming,
    Emergency,
    Vaccination,
    Other,
}

/// A vet, grooming or other appointment for a pet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Unique appointment ID
    pub id: String,
    /// Owning user
    pub owner_id: String,
    /// Pet the appointment concerns
    pub pet_id: String,
    /// Pet name, denormalized for display
    pub pet_name: Option<String>,
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    /// Time of day (HH:MM, 24h)
    pub time: Option<String>,
    /// Visit category
    pub category: AppointmentCategory,
    /// Veterinarian name
    pub vet_name: Option<String>,
    /// Clinic name
    pub clinic: Option<String>,
    /// Free-text notes
    pub notes: Option<String>,
    /// Lifecycle status
    pub status: AppointmentStatus,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl Appointment {
    /// Create a new scheduled checkup.
    pub fn new(owner_id: String, pet_id: String, date: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id,
            pet_id,
            pet_name: None,
            date,
            time: None,
            category: AppointmentCategory::Checkup,
            vet_name: None,
            clinic: None,
            notes: None,
            status: AppointmentStatus::Scheduled,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Builder-style time setter.
    pub fn at(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn is_scheduled(&self) -> bool {
        self.status == AppointmentStatus::Scheduled
    }
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "scheduled" => Some(AppointmentStatus::Scheduled),
            "completed" => Some(AppointmentStatus::Completed),
            "cancelled" => Some(AppointmentStatus::Cancelled),
            _ => None,
        }
    }
}

impl AppointmentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentCategory::Checkup => "checkup",
            AppointmentCategory::Grooming => "grooming",
            AppointmentCategory::Emergency => "emergency",
            AppointmentCategory::Vaccination => "vaccination",
            AppointmentCategory::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "checkup" => Some(AppointmentCategory::Checkup),
            "grooming" => Some(AppointmentCategory::Grooming),
            "emergency" => Some(AppointmentCategory::Emergency),
            "vaccination" => Some(AppointmentCategory::Vaccination),
            "other" => Some(AppointmentCategory::Other),
            _ => None,
        }
    }
}
