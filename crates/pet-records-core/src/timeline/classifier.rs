//! Partitioning of records into active and past buckets.

use std::cmp::Ordering;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::effective::{MalformedRecord, TimelineRecord};

/// Result of classifying a batch of records at a reference instant.
#[derive(Debug, Clone, Serialize)]
pub struct Classification<R> {
    /// Upcoming / current records, earliest first
    pub active: Vec<R>,
    /// Past / closed records, most recent first
    pub past: Vec<R>,
    /// Records excluded because their dates could not be read
    pub malformed: Vec<MalformedRecord>,
}

impl<R> Classification<R> {
    /// Number of records placed in either bucket.
    pub fn classified_count(&self) -> usize {
        self.active.len() + self.past.len()
    }
}

/// Split `records` into active and past buckets.
///
/// Pure and deterministic: ties on the effective instant are broken by
/// record id, and malformed records land in neither bucket.
pub fn classify<R>(records: &[R], reference: NaiveDateTime) -> Classification<R>
where
    R: TimelineRecord + Clone,
{
    let mut active = Vec::new();
    let mut past = Vec::new();
    let mut malformed = Vec::new();

    for record in records {
        let placed = record.effective_instant().and_then(|instant| {
            record
                .belongs_to_active(reference)
                .map(|is_active| (instant, is_active))
        });

        match placed {
            Ok((instant, true)) => active.push((instant, record)),
            Ok((instant, false)) => past.push((instant, record)),
            Err(e) => {
                tracing::warn!(record_id = %e.id, reason = %e.reason, "Skipping malformed record");
                malformed.push(e);
            }
        }
    }

    active.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| by_id(a.1, b.1)));
    past.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| by_id(a.1, b.1)));

    tracing::debug!(
        active = active.len(),
        past = past.len(),
        malformed = malformed.len(),
        %reference,
        "Classified records"
    );

    Classification {
        active: active.into_iter().map(|(_, r)| r.clone()).collect(),
        past: past.into_iter().map(|(_, r)| r.clone()).collect(),
        malformed,
    }
}

fn by_id<R: TimelineRecord>(a: &R, b: &R) -> Ordering {
    a.record_id().cmp(b.record_id())
}
