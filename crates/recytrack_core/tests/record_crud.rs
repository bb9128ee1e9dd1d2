use recytrack_core::{
    MemoryRecordStore, Record, RecordStore, RecordUpdate, StoreError, TrackerService,
};

fn store_with(records: &[(&str, &str, i64, &str)]) -> MemoryRecordStore {
    let mut store = MemoryRecordStore::new();
    for (id, item, quantity, date) in records {
        store
            .create_record(Record::new(*id, *item, *quantity, *date).unwrap())
            .unwrap();
    }
    store
}

#[test]
fn create_and_get_roundtrip() {
    let store = store_with(&[("R1", "Plastic Bottles", 10, "2024-01-15")]);

    let loaded = store.get_record("R1").unwrap();
    assert_eq!(loaded.id, "R1");
    assert_eq!(loaded.item, "Plastic Bottles");
    assert_eq!(loaded.quantity, 10);
    assert_eq!(loaded.date, "2024-01-15");
}

#[test]
fn get_missing_id_is_none_not_an_error() {
    let store = MemoryRecordStore::new();
    assert!(store.get_record("RX").is_none());
}

#[test]
fn duplicate_create_fails_and_keeps_existing_entry() {
    let mut store = store_with(&[("R1", "Glass", 3, "2024-02-01")]);

    let err = store
        .create_record(Record::new("R1", "Cans", 99, "2024-03-01").unwrap())
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateId(id) if id == "R1"));

    let kept = store.get_record("R1").unwrap();
    assert_eq!(kept.item, "Glass");
    assert_eq!(kept.quantity, 3);
    assert_eq!(store.len(), 1);
}

#[test]
fn update_changes_only_provided_fields() {
    let mut store = store_with(&[("R1", "Glass", 3, "2024-02-01")]);

    let update = RecordUpdate {
        quantity: Some(7),
        ..RecordUpdate::default()
    };
    store.update_record("R1", &update).unwrap();

    let loaded = store.get_record("R1").unwrap();
    assert_eq!(loaded.quantity, 7);
    assert_eq!(loaded.item, "Glass");
    assert_eq!(loaded.date, "2024-02-01");
}

#[test]
fn update_missing_id_fails_and_creates_nothing() {
    let mut store = MemoryRecordStore::new();

    let update = RecordUpdate {
        item: Some("Paper".to_string()),
        ..RecordUpdate::default()
    };
    let err = store.update_record("RX", &update).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == "RX"));
    assert!(store.is_empty());
}

#[test]
fn update_validation_failure_leaves_record_unmodified() {
    let mut store = store_with(&[("R1", "Glass", 3, "2024-02-01")]);

    // Valid item plus invalid quantity: nothing may be applied.
    let update = RecordUpdate {
        item: Some("Paper".to_string()),
        quantity: Some(-1),
        ..RecordUpdate::default()
    };
    let err = store.update_record("R1", &update).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    let loaded = store.get_record("R1").unwrap();
    assert_eq!(loaded.item, "Glass");
    assert_eq!(loaded.quantity, 3);
}

#[test]
fn update_rejects_malformed_date() {
    let mut store = store_with(&[("R1", "Glass", 3, "2024-02-01")]);

    let update = RecordUpdate {
        date: Some("02/01/2024".to_string()),
        ..RecordUpdate::default()
    };
    let err = store.update_record("R1", &update).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store.get_record("R1").unwrap().date, "2024-02-01");
}

#[test]
fn empty_update_is_a_noop_on_existing_record() {
    let mut store = store_with(&[("R1", "Glass", 3, "2024-02-01")]);

    let update = RecordUpdate::default();
    assert!(update.is_empty());
    store.update_record("R1", &update).unwrap();

    let loaded = store.get_record("R1").unwrap();
    assert_eq!(loaded, Record::new("R1", "Glass", 3, "2024-02-01").unwrap());
}

#[test]
fn delete_then_get_returns_none() {
    let mut store = store_with(&[("R1", "Glass", 3, "2024-02-01")]);

    store.delete_record("R1").unwrap();
    assert!(store.get_record("R1").is_none());

    let err = store.delete_record("R1").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == "R1"));
}

#[test]
fn service_wraps_store_calls() {
    let mut service = TrackerService::new(MemoryRecordStore::new());

    service
        .create_record("R1", "Plastic Bottles", 10, "2024-01-15")
        .unwrap();

    let err = service
        .create_record("R1", "Cans", 5, "2024-01-16")
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateId(_)));

    let fetched = service.read_record("R1").unwrap();
    assert_eq!(fetched.item, "Plastic Bottles");

    let update = RecordUpdate {
        quantity: Some(12),
        ..RecordUpdate::default()
    };
    service.update_record("R1", &update).unwrap();
    assert_eq!(service.read_record("R1").unwrap().quantity, 12);

    service.delete_record("R1").unwrap();
    assert!(service.read_record("R1").is_none());

    let store = service.into_store();
    assert!(store.is_empty());
}

#[test]
fn service_create_propagates_validation_failures() {
    let mut service = TrackerService::new(MemoryRecordStore::new());

    let err = service
        .create_record("R1", "Cans", -1, "2024-01-16")
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(recytrack_core::RecordValidationError::NegativeQuantity(-1))
    ));
    assert!(service.read_record("R1").is_none());
}
