//! Property tests for timeline classification.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use pet_records_core::models::{Appointment, AppointmentStatus, Medication, MedicationStatus, Schedule};
use pet_records_core::timeline::{classify, plan_completions, TimelineRecord};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

fn appointment_strategy() -> impl Strategy<Value = Appointment> {
    (
        "[a-f0-9]{4}",
        -30_i64..30,
        proptest::option::of((0_u32..24, 0_u32..60)),
        prop_oneof![
            Just(AppointmentStatus::Scheduled),
            Just(AppointmentStatus::Completed),
            Just(AppointmentStatus::Cancelled),
        ],
    )
        .prop_map(|(id, offset, time, status)| {
            let date = base_date() + Duration::days(offset);
            let mut appt = Appointment::new("owner".into(), "pet".into(), date.format("%Y-%m-%d").to_string());
            appt.id = id;
            appt.time = time.map(|(h, m)| format!("{:02}:{:02}", h, m));
            appt.status = status;
            appt
        })
}

fn medication_strategy() -> impl Strategy<Value = Medication> {
    (
        "[a-f0-9]{4}",
        -60_i64..0,
        proptest::option::of(-30_i64..30),
        prop_oneof![Just(Schedule::Once), Just(Schedule::Daily), Just(Schedule::Monthly)],
        prop_oneof![
            Just(MedicationStatus::Active),
            Just(MedicationStatus::Completed),
            Just(MedicationStatus::Discontinued),
        ],
    )
        .prop_map(|(id, start, due, schedule, status)| {
            let start = base_date() + Duration::days(start);
            let mut med = Medication::new("owner".into(), "pet".into(), "Med".into(), start.format("%Y-%m-%d").to_string())
                .with_schedule(schedule);
            med.id = id;
            med.next_due_date = due.map(|d| (base_date() + Duration::days(d)).format("%Y-%m-%d").to_string());
            med.status = status;
            med
        })
}

fn reference_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (0_u32..24, 0_u32..60).prop_map(|(h, m)| base_date().and_hms_opt(h, m, 0).unwrap())
}

fn ids<R: TimelineRecord>(records: &[R]) -> Vec<String> {
    records.iter().map(|r| r.record_id().to_string()).collect()
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn appointments_partition_strictly(
        records in proptest::collection::vec(appointment_strategy(), 0..40),
        reference in reference_strategy(),
    ) {
        let classified = classify(&records, reference);
        prop_assert!(classified.malformed.is_empty());
        prop_assert_eq!(classified.classified_count(), records.len());

        let mut seen: Vec<String> = ids(&classified.active);
        seen.extend(ids(&classified.past));
        let mut expected = ids(&records);
        seen.sort();
        expected.sort();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn medications_partition_strictly(
        records in proptest::collection::vec(medication_strategy(), 0..40),
        reference in reference_strategy(),
    ) {
        let classified = classify(&records, reference);
        prop_assert_eq!(classified.classified_count(), records.len());
        prop_assert!(classified.active.iter().all(|m| m.status == MedicationStatus::Active));
    }

    #[test]
    fn appointment_buckets_are_ordered(
        records in proptest::collection::vec(appointment_strategy(), 0..40),
        reference in reference_strategy(),
    ) {
        let classified = classify(&records, reference);
        for pair in classified.active.windows(2) {
            prop_assert!(pair[0].effective_instant().unwrap() <= pair[1].effective_instant().unwrap());
        }
        for pair in classified.past.windows(2) {
            prop_assert!(pair[0].effective_instant().unwrap() >= pair[1].effective_instant().unwrap());
        }
    }

    #[test]
    fn medication_buckets_are_ordered(
        records in proptest::collection::vec(medication_strategy(), 0..40),
        reference in reference_strategy(),
    ) {
        let classified = classify(&records, reference);
        for pair in classified.active.windows(2) {
            let (a, b) = (pair[0].effective_date().unwrap(), pair[1].effective_date().unwrap());
            prop_assert!(a < b || (a == b && pair[0].id <= pair[1].id));
        }
        for pair in classified.past.windows(2) {
            let (a, b) = (pair[0].effective_date().unwrap(), pair[1].effective_date().unwrap());
            prop_assert!(a > b || (a == b && pair[0].id <= pair[1].id));
        }
    }

    #[test]
    fn scheduled_before_today_is_never_active(
        records in proptest::collection::vec(appointment_strategy(), 0..40),
        reference in reference_strategy(),
    ) {
        let classified = classify(&records, reference);
        for appt in &classified.active {
            prop_assert_eq!(appt.status, AppointmentStatus::Scheduled);
            prop_assert!(appt.effective_date().unwrap() >= reference.date());
        }
    }

    #[test]
    fn planned_updates_are_owned_scheduled_and_past(
        mut records in proptest::collection::vec(appointment_strategy(), 0..40),
        foreign in proptest::collection::vec(any::<bool>(), 40),
        reference in reference_strategy(),
    ) {
        for (appt, is_foreign) in records.iter_mut().zip(foreign) {
            if is_foreign {
                appt.owner_id = "intruder".into();
            }
        }
        let plan = plan_completions(&records, reference, "owner", "now");

        let eligible: Vec<&Appointment> = records
            .iter()
            .filter(|a| a.owner_id == "owner" && a.status == AppointmentStatus::Scheduled)
            .filter(|a| a.effective_instant().unwrap() < reference)
            .collect();
        let eligible_ids: HashSet<&str> = eligible.iter().map(|a| a.id.as_str()).collect();

        prop_assert_eq!(plan.updates.len(), eligible.len());
        for update in &plan.updates {
            prop_assert!(eligible_ids.contains(update.id.as_str()));
            prop_assert_eq!(update.owner_id.as_str(), "owner");
        }
        prop_assert_eq!(
            plan.skipped_foreign,
            records.iter().filter(|a| a.owner_id != "owner").count()
        );
    }
}
