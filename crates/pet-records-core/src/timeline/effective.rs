//! Date/time comparison primitives.
//!
//! Stored dates are literal owner wall-clock calendar strings. They are never
//! shifted between timezones; the reference instant is produced by a single
//! [`ReferenceClock`](crate::config::ReferenceClock) and compared naively.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use thiserror::Error;

use crate::models::{Appointment, AppointmentStatus, Medication};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const DATETIME_MINUTES_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// A record whose required date (or optional time) cannot be interpreted.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("Malformed record {id}: {reason}")]
pub struct MalformedRecord {
    pub id: String,
    pub reason: String,
}

impl MalformedRecord {
    fn new(id: &str, reason: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}

/// Parse a calendar date.
///
/// Accepts `YYYY-MM-DD` and full ISO date-times (`2024-01-01T00:00:00.000Z`,
/// `2024-01-01T09:30`), in which case only the literal calendar part is used.
/// A date-time whose time or offset does not parse is rejected.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if !value.contains('T') {
        return NaiveDate::parse_from_str(value, DATE_FORMAT).ok();
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(value, DATETIME_MINUTES_FORMAT).map(|dt| dt.date()))
        .ok()
}

/// Parse a 24h time of day (`HH:MM`, one-digit hours allowed).
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).ok()
}

fn required_date(id: &str, field: &str, value: &str) -> Result<NaiveDate, MalformedRecord> {
    if value.trim().is_empty() {
        return Err(MalformedRecord::new(id, format!("missing {}", field)));
    }
    parse_date(value)
        .ok_or_else(|| MalformedRecord::new(id, format!("invalid {} '{}'", field, value)))
}

fn optional_date(id: &str, field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, MalformedRecord> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => required_date(id, field, v).map(Some),
    }
}

/// A record that can be placed on the owner's timeline.
pub trait TimelineRecord {
    fn record_id(&self) -> &str;

    fn owner_id(&self) -> &str;

    /// Calendar date used for bucket membership and ordering.
    fn effective_date(&self) -> Result<NaiveDate, MalformedRecord>;

    /// Date-time used for `is_past` and ordering.
    fn effective_instant(&self) -> Result<NaiveDateTime, MalformedRecord>;

    /// Whether the record belongs in the active/upcoming bucket at `reference`.
    fn belongs_to_active(&self, reference: NaiveDateTime) -> Result<bool, MalformedRecord>;
}

/// Strictly before the reference instant, using date+time granularity.
pub fn is_past<R: TimelineRecord + ?Sized>(
    record: &R,
    reference: NaiveDateTime,
) -> Result<bool, MalformedRecord> {
    Ok(record.effective_instant()? < reference)
}

/// Same calendar day as the reference or later, ignoring time of day.
pub fn is_upcoming_or_due_today<R: TimelineRecord + ?Sized>(
    record: &R,
    reference: NaiveDateTime,
) -> Result<bool, MalformedRecord> {
    Ok(record.effective_date()? >= reference.date())
}

impl TimelineRecord for Appointment {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &str {
        &self.owner_id
    }

    fn effective_date(&self) -> Result<NaiveDate, MalformedRecord> {
        required_date(&self.id, "date", &self.date)
    }

    fn effective_instant(&self) -> Result<NaiveDateTime, MalformedRecord> {
        let date = self.effective_date()?;
        let time = match self.time.as_deref().map(str::trim) {
            None | Some("") => NaiveTime::MIN,
            Some(t) => parse_time(t)
                .ok_or_else(|| MalformedRecord::new(&self.id, format!("invalid time '{}'", t)))?,
        };
        Ok(date.and_time(time))
    }

    fn belongs_to_active(&self, reference: NaiveDateTime) -> Result<bool, MalformedRecord> {
        // Validate the full instant even though membership is day-granular,
        // so a bad time is reported the same way by every operation.
        self.effective_instant()?;
        Ok(self.status == AppointmentStatus::Scheduled && is_upcoming_or_due_today(self, reference)?)
    }
}

impl Medication {
    /// Date that decides bucket membership.
    ///
    /// One-time courses use the next due date, falling back to the start
    /// date. Repeating courses use only the next due date; `None` means the
    /// course is ongoing with nothing scheduled and stays current.
    pub fn governing_date(&self) -> Result<Option<NaiveDate>, MalformedRecord> {
        let start = required_date(&self.id, "start_date", &self.start_date)?;
        let next_due = optional_date(&self.id, "next_due_date", self.next_due_date.as_deref())?;
        if self.is_recurring() {
            Ok(next_due)
        } else {
            Ok(Some(next_due.unwrap_or(start)))
        }
    }
}

impl TimelineRecord for Medication {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &str {
        &self.owner_id
    }

    fn effective_date(&self) -> Result<NaiveDate, MalformedRecord> {
        let start = required_date(&self.id, "start_date", &self.start_date)?;
        let next_due = optional_date(&self.id, "next_due_date", self.next_due_date.as_deref())?;
        Ok(next_due.unwrap_or(start))
    }

    fn effective_instant(&self) -> Result<NaiveDateTime, MalformedRecord> {
        Ok(self.effective_date()?.and_time(NaiveTime::MIN))
    }

    fn belongs_to_active(&self, reference: NaiveDateTime) -> Result<bool, MalformedRecord> {
        let governing = self.governing_date()?;
        if !self.is_active() {
            return Ok(false);
        }
        Ok(match governing {
            None => true,
            Some(date) => date >= reference.date(),
        })
    }
}
