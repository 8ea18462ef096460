//! End-to-end tests through the exported API object.

use pet_records_core::{
    init_logging, open_database, open_database_in_memory, FfiAppointmentInput, FfiMedicationInput, PetRecordsError,
};

fn appointment(pet_id: &str, date: &str) -> FfiAppointmentInput {
    FfiAppointmentInput {
        pet_id: pet_id.to_string(),
        date: date.to_string(),
        time: Some("10:30".to_string()),
        category: "checkup".to_string(),
        vet_name: Some("Dr. Patel".to_string()),
        clinic: None,
        notes: None,
    }
}

fn medication(pet_id: &str, name: &str, schedule: &str, next_due: Option<&str>) -> FfiMedicationInput {
    FfiMedicationInput {
        pet_id: pet_id.to_string(),
        name: name.to_string(),
        start_date: "2020-01-01".to_string(),
        next_due_date: next_due.map(str::to_string),
        end_date: None,
        schedule: schedule.to_string(),
        dosage: Some("1".to_string()),
        dosage_unit: Some("tablet".to_string()),
        route: None,
        reason: None,
        notes: None,
    }
}

#[test]
fn test_full_workflow() {
    let core = open_database_in_memory(None).unwrap();
    let pet = core
        .create_pet("user-1".into(), "Biscuit".into(), "dog".into(), Some("Beagle".into()), None)
        .unwrap();

    let past = core.create_appointment("user-1".into(), appointment(&pet.id, "2001-05-01")).unwrap();
    let future = core.create_appointment("user-1".into(), appointment(&pet.id, "2999-05-01")).unwrap();
    assert_eq!(past.pet_name.as_deref(), Some("Biscuit"));
    assert_eq!(past.status, "scheduled");

    // Reading never completes anything.
    let timeline = core.classify_appointments("user-1".into(), None).unwrap();
    assert_eq!(timeline.upcoming[0].id, future.id);
    assert_eq!(timeline.past[0].id, past.id);
    assert_eq!(timeline.past[0].status, "scheduled");

    let report = core.auto_complete_past_appointments("user-1".into(), None).unwrap();
    assert_eq!(report.updated, 1);

    let timeline = core.classify_appointments("user-1".into(), None).unwrap();
    assert_eq!(timeline.past[0].status, "completed");

    let again = core.auto_complete_past_appointments("user-1".into(), None).unwrap();
    assert_eq!(again.updated, 0);
}

#[test]
fn test_dashboard_summary() {
    let core = open_database_in_memory(Some(r#"{"dashboard_limit": 2}"#.into())).unwrap();
    let pet = core.create_pet("user-1".into(), "Biscuit".into(), "dog".into(), None, None).unwrap();

    for date in ["2999-01-01", "2999-02-01", "2999-03-01"] {
        core.create_appointment("user-1".into(), appointment(&pet.id, date)).unwrap();
    }
    core.create_medication("user-1".into(), medication(&pet.id, "Heartgard", "monthly", Some("2999-01-01")))
        .unwrap();
    core.create_medication("user-1".into(), medication(&pet.id, "Old course", "once", None))
        .unwrap();

    let summary = core.dashboard_summary("user-1".into()).unwrap();
    assert_eq!(summary.total_pets, 1);
    assert_eq!(summary.upcoming_appointments, 3);
    assert_eq!(summary.due_medications, 1);
    assert_eq!(summary.health_alerts, 4);
    assert_eq!(summary.next_appointments.len(), 2);
    assert_eq!(summary.next_appointments[0].date, "2999-01-01");

    let other = core.dashboard_summary("user-2".into()).unwrap();
    assert_eq!(other.total_pets, 0);
    assert_eq!(other.health_alerts, 0);
}

#[test]
fn test_complete_medication_moves_it_to_past() {
    let core = open_database_in_memory(None).unwrap();
    let pet = core.create_pet("user-1".into(), "Pepper".into(), "cat".into(), None, None).unwrap();
    let med = core
        .create_medication("user-1".into(), medication(&pet.id, "Clavamox", "twice_daily", Some("2999-01-01")))
        .unwrap();

    let before = core.classify_medications("user-1".into(), Some(pet.id.clone())).unwrap();
    assert_eq!(before.current.len(), 1);

    assert!(core
        .complete_medication("user-1".into(), med.id.clone(), "2024-06-10".into(), Some("Finished".into()))
        .unwrap());
    assert!(!core
        .complete_medication("user-1".into(), med.id.clone(), "2024-06-11".into(), None)
        .unwrap());

    let after = core.classify_medications("user-1".into(), Some(pet.id)).unwrap();
    assert!(after.current.is_empty());
    assert_eq!(after.past[0].status, "completed");
    assert_eq!(after.past[0].completed_date.as_deref(), Some("2024-06-10"));
}

#[test]
fn test_other_owner_cannot_touch_records() {
    let core = open_database_in_memory(None).unwrap();
    let pet = core.create_pet("user-1".into(), "Biscuit".into(), "dog".into(), None, None).unwrap();
    let appt = core.create_appointment("user-1".into(), appointment(&pet.id, "2001-01-01")).unwrap();

    let err = core.create_appointment("user-2".into(), appointment(&pet.id, "2999-01-01")).unwrap_err();
    assert!(matches!(err, PetRecordsError::NotFound(_)));

    assert!(core.get_pet("user-2".into(), pet.id.clone()).unwrap().is_none());
    assert!(!core.delete_appointment("user-2".into(), appt.id.clone()).unwrap());

    let report = core.auto_complete_past_appointments("user-2".into(), None).unwrap();
    assert_eq!(report.updated, 0);
    let timeline = core.classify_appointments("user-1".into(), None).unwrap();
    assert_eq!(timeline.past[0].status, "scheduled");
}

#[test]
fn test_invalid_input_rejected() {
    let core = open_database_in_memory(None).unwrap();
    let pet = core.create_pet("user-1".into(), "Biscuit".into(), "dog".into(), None, None).unwrap();

    let mut bad = appointment(&pet.id, "2999-01-01");
    bad.category = "spa day".into();
    assert!(matches!(
        core.create_appointment("user-1".into(), bad),
        Err(PetRecordsError::InvalidInput(_))
    ));

    assert!(matches!(
        core.record_weight("user-1".into(), pet.id.clone(), "2024-01-01".into(), -3.0, "kg".into(), None),
        Err(PetRecordsError::InvalidInput(_))
    ));
    assert!(matches!(
        core.record_weight("user-1".into(), pet.id, "2024-01-01".into(), 3.0, "stone".into(), None),
        Err(PetRecordsError::InvalidInput(_))
    ));

    assert!(matches!(
        open_database_in_memory(Some(r#"{"dashboard_limit": 0}"#.into())),
        Err(PetRecordsError::InvalidInput(_))
    ));
}

#[test]
fn test_configured_log_filter_is_applied() {
    assert!(matches!(
        open_database_in_memory(Some(r#"{"log_filter": "pet_records_core=loud"}"#.into())),
        Err(PetRecordsError::InvalidInput(_))
    ));
    assert!(matches!(
        init_logging("pet_records_core=loud".into()),
        Err(PetRecordsError::InvalidInput(_))
    ));

    let core = open_database_in_memory(Some(r#"{"log_filter": "pet_records_core=debug"}"#.into())).unwrap();
    // The subscriber is already in place, so a second install is a no-op.
    assert!(!init_logging("info".into()).unwrap());
    assert!(core.list_pets("user-1".into()).unwrap().is_empty());
}

#[test]
fn test_weights_and_cascade_delete() {
    let core = open_database_in_memory(None).unwrap();
    let pet = core.create_pet("user-1".into(), "Biscuit".into(), "dog".into(), None, None).unwrap();

    core.record_weight("user-1".into(), pet.id.clone(), "2024-02-01".into(), 22.0, "lbs".into(), None)
        .unwrap();
    let first = core
        .record_weight("user-1".into(), pet.id.clone(), "2024-01-01".into(), 10.0, "kg".into(), None)
        .unwrap();
    assert_eq!(first.weight_kg, 10.0);

    let history = core.list_weights("user-1".into(), pet.id.clone()).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].date, "2024-01-01");
    assert!((history[1].weight_kg - 9.979).abs() < 0.01);

    assert!(core.delete_pet("user-1".into(), pet.id.clone()).unwrap());
    assert!(core.list_weights("user-1".into(), pet.id).unwrap().is_empty());
    assert!(core.list_pets("user-1".into()).unwrap().is_empty());
}

#[test]
fn test_file_database_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pets.db").to_string_lossy().into_owned();

    {
        let core = open_database(path.clone(), None).unwrap();
        core.create_pet("user-1".into(), "Biscuit".into(), "dog".into(), None, None).unwrap();
    }

    let reopened = open_database(path, Some(r#"{"reference_clock": "utc"}"#.into())).unwrap();
    let pets = reopened.list_pets("user-1".into()).unwrap();
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].name, "Biscuit");
}

#[test]
fn test_edit_records() {
    let core = open_database_in_memory(None).unwrap();
    let mut pet = core.create_pet("user-1".into(), "Biscuit".into(), "Dog".into(), None, None).unwrap();
    assert_eq!(pet.species, "dog");

    pet.name = "Sir Biscuit".into();
    pet.species = "DOG".into();
    assert!(core.update_pet("user-1".into(), pet.clone()).unwrap());
    assert!(!core.update_pet("user-2".into(), pet.clone()).unwrap());
    let stored = core.get_pet("user-1".into(), pet.id.clone()).unwrap().unwrap();
    assert_eq!(stored.name, "Sir Biscuit");
    assert_eq!(stored.species, "dog");

    let med = core
        .create_medication("user-1".into(), medication(&pet.id, "Heartgard", "monthly", Some("2001-01-01")))
        .unwrap();
    assert!(core.classify_medications("user-1".into(), None).unwrap().current.is_empty());
    assert!(core
        .reschedule_medication("user-1".into(), med.id.clone(), Some("2999-01-01".into()))
        .unwrap());
    let current = core.classify_medications("user-1".into(), None).unwrap().current;
    assert_eq!(current[0].next_due_date.as_deref(), Some("2999-01-01"));

    let appt = core.create_appointment("user-1".into(), appointment(&pet.id, "2999-01-01")).unwrap();
    assert!(core
        .set_appointment_status("user-1".into(), appt.id.clone(), "cancelled".into())
        .unwrap());
    let cancelled = core.get_appointment("user-1".into(), appt.id).unwrap().unwrap();
    assert_eq!(cancelled.status, "cancelled");

    let weight = core
        .record_weight("user-1".into(), pet.id.clone(), "2024-01-01".into(), 12.5, "kg".into(), None)
        .unwrap();
    assert!(core.delete_weight("user-1".into(), weight.id).unwrap());
    assert!(core.get_medication("user-2".into(), med.id).unwrap().is_none());
}

#[test]
fn test_notes_workflow() {
    let core = open_database_in_memory(None).unwrap();
    let pet = core.create_pet("user-1".into(), "Biscuit".into(), "dog".into(), None, None).unwrap();

    let note = core
        .create_note(
            "user-1".into(),
            pet.id.clone(),
            "Limping".into(),
            "Favouring the left hind leg".into(),
            Some("health".into()),
        )
        .unwrap();
    assert_eq!(note.category.as_deref(), Some("health"));

    assert!(matches!(
        core.create_note("user-1".into(), pet.id.clone(), "x".into(), "y".into(), Some("diet".into())),
        Err(PetRecordsError::InvalidInput(_))
    ));
    assert!(matches!(
        core.create_note("user-2".into(), pet.id.clone(), "x".into(), "y".into(), None),
        Err(PetRecordsError::NotFound(_))
    ));

    assert!(core
        .update_note("user-1".into(), note.id.clone(), "Limping".into(), "Better today".into(), None)
        .unwrap());
    assert!(!core
        .update_note("user-2".into(), note.id.clone(), "t".into(), "c".into(), None)
        .unwrap());
    let stored = core.get_note("user-1".into(), note.id.clone()).unwrap().unwrap();
    assert_eq!(stored.content, "Better today");
    assert_eq!(stored.category, None);

    assert_eq!(core.list_notes("user-1".into(), Some(pet.id.clone())).unwrap().len(), 1);
    assert!(core.list_notes("user-2".into(), None).unwrap().is_empty());

    assert!(core.delete_note("user-1".into(), note.id).unwrap());
    assert!(core.list_notes("user-1".into(), None).unwrap().is_empty());
}
