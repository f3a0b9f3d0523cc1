use capture_canonical::{
    DocHash, Metadata, NoteContent, PermissionSet, PrincipalId, Role, UpdateNotes,
};
use capture_core::{
    CaptureEvent, Collaborator, EventStatus, EventVersion, Note, RegistryConfig,
};
use capture_store::{
    event_view, filter_events, load_snapshot, notes_for_event, save_snapshot, AndFilter,
    EventFilter, FacilityFilter, MemoryStore, OrFilter, RegistryStore, Snapshot, StatusFilter,
    StoreError, TimeRangeFilter,
};
use std::fs;
use tempfile::TempDir;

fn principal(name: &str) -> PrincipalId {
    PrincipalId::parse(name).unwrap()
}

fn make_event(id: u64, facility: &str, status: EventStatus, timestamp: u64) -> CaptureEvent {
    CaptureEvent {
        event_id: id,
        facility: principal(facility),
        co2_amount: 1_000 * id as u128,
        timestamp,
        doc_hash: DocHash::new([id as u8; 32]),
        metadata: Metadata::parse(format!("event {id}")).unwrap(),
        status,
        last_updated: timestamp,
    }
}

// Inserts an event the way the registry does: row, hash claim, counter.
fn register(store: &mut MemoryStore, event: CaptureEvent) {
    store.put_hash(event.doc_hash, event.event_id);
    store.set_next_event_id(event.event_id + 1);
    store.put_event(event);
}

fn make_populated_store() -> MemoryStore {
    let mut store = MemoryStore::new(principal("org:admin"));
    register(&mut store, make_event(1, "org:plant-a", EventStatus::Pending, 10));
    register(&mut store, make_event(2, "org:plant-b", EventStatus::Verified, 20));
    register(&mut store, make_event(3, "org:plant-a", EventStatus::Rejected, 30));

    store.put_version(EventVersion {
        event_id: 1,
        version: 2,
        co2_amount: 900,
        doc_hash: DocHash::new([0xee; 32]),
        notes: UpdateNotes::parse("recalibrated meter").unwrap(),
        timestamp: 15,
    });
    store.put_collaborator(Collaborator {
        event_id: 1,
        principal: principal("org:auditor"),
        role: Role::parse("auditor").unwrap(),
        permissions: PermissionSet::parse(["update-status"]).unwrap(),
        added_at: 12,
    });
    for (note_id, event_id) in [(1, 1), (2, 3), (3, 1)] {
        store.put_note(Note {
            event_id,
            note_id,
            author: principal("org:plant-a"),
            content: NoteContent::parse(format!("note {note_id}")).unwrap(),
            timestamp: 16,
        });
    }
    store.set_next_note_id(4);
    store
}

#[test]
fn test_new_store_defaults() {
    let store = MemoryStore::new(principal("org:deployer"));
    assert_eq!(store.next_event_id(), 1);
    assert_eq!(store.next_note_id(), 1);
    assert!(!store.is_paused());
    assert_eq!(store.admin(), principal("org:deployer"));
    assert_eq!(store.config(), RegistryConfig::default());
    assert!(store.events().is_empty());
}

#[test]
fn test_per_event_tables_are_scoped() {
    let store = make_populated_store();
    assert_eq!(store.versions(1).len(), 1);
    assert!(store.versions(2).is_empty());
    assert_eq!(store.collaborators(1).len(), 1);
    assert!(store.collaborator(2, &principal("org:auditor")).is_none());

    let ids: Vec<u64> = notes_for_event(&store, 1).iter().map(|n| n.note_id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(store.note(1, 2).is_none());
    assert!(store.note(3, 2).is_some());
}

#[test]
fn test_collaborator_overwrite_replaces_entry() {
    let mut store = make_populated_store();
    store.put_collaborator(Collaborator {
        event_id: 1,
        principal: principal("org:auditor"),
        role: Role::parse("lead auditor").unwrap(),
        permissions: PermissionSet::parse(["add-notes"]).unwrap(),
        added_at: 40,
    });
    let entry = store.collaborator(1, &principal("org:auditor")).unwrap();
    assert_eq!(entry.role.as_str(), "lead auditor");
    assert!(!entry.has_permission("update-status"));
    assert_eq!(store.collaborators(1).len(), 1);
}

#[test]
fn test_event_view() {
    let store = make_populated_store();
    let view = event_view(&store, 1).unwrap();
    assert_eq!(view.event.event_id, 1);
    assert_eq!(view.versions[0].version, 2);
    assert_eq!(view.collaborators[0].principal, principal("org:auditor"));
    assert_eq!(view.notes.len(), 2);
    assert!(event_view(&store, 99).is_none());
}

#[test]
fn test_filters() {
    let store = make_populated_store();

    let by_facility = FacilityFilter {
        facility: principal("org:plant-a"),
    };
    let ids: Vec<u64> = filter_events(&store, &by_facility)
        .iter()
        .map(|e| e.event_id)
        .collect();
    assert_eq!(ids, vec![1, 3]);

    let window = TimeRangeFilter {
        after: Some(20),
        before: Some(30),
    };
    assert_eq!(filter_events(&store, &window).len(), 2);

    let and = AndFilter {
        filters: vec![
            Box::new(by_facility.clone()) as Box<dyn EventFilter>,
            Box::new(StatusFilter {
                status: EventStatus::Rejected,
            }) as Box<dyn EventFilter>,
        ],
    };
    let matched = filter_events(&store, &and);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].event_id, 3);

    let or = OrFilter {
        filters: vec![
            Box::new(StatusFilter {
                status: EventStatus::Verified,
            }) as Box<dyn EventFilter>,
            Box::new(StatusFilter {
                status: EventStatus::Pending,
            }) as Box<dyn EventFilter>,
        ],
    };
    assert_eq!(filter_events(&store, &or).len(), 2);

    assert_eq!(filter_events(&store, &AndFilter::default()).len(), 3);
    assert!(filter_events(&store, &OrFilter::default()).is_empty());
    assert!(TimeRangeFilter::default().matches(&store.event(1).unwrap()));
}

#[test]
fn test_snapshot_round_trip_preserves_state() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("registry.json");

    let mut store = make_populated_store();
    store.set_paused(true);
    save_snapshot(&path, &store).unwrap();

    let loaded = load_snapshot(&path).unwrap();
    assert_eq!(loaded, store);
    assert!(loaded.is_paused());
    assert_eq!(loaded.next_note_id(), 4);
    assert_eq!(loaded.event_for_hash(&DocHash::new([2u8; 32])), Some(2));
    assert!(!temp_dir.path().join("registry.json.tmp").exists());
}

#[test]
fn test_snapshot_persists_text_limits() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("registry.json");
    let config = RegistryConfig {
        max_metadata_len: 40,
        max_note_len: 20,
    };
    let store = MemoryStore::with_config(principal("org:admin"), config);
    save_snapshot(&path, &store).unwrap();

    assert_eq!(load_snapshot(&path).unwrap().config(), config);
}

#[test]
fn test_snapshot_without_limits_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("registry.json");
    let mut value = serde_json::to_value(Snapshot::from(&make_populated_store())).unwrap();
    value.as_object_mut().unwrap().remove("config");
    fs::write(&path, serde_json::to_vec(&value).unwrap()).unwrap();

    assert_eq!(load_snapshot(&path).unwrap().config(), RegistryConfig::default());
}

#[test]
fn test_load_rejects_rows_over_stored_limits() {
    let temp_dir = TempDir::new().unwrap();

    // "event 1" is seven characters.
    let mut snapshot = Snapshot::from(&make_populated_store());
    snapshot.config.max_metadata_len = 5;
    let path = write_snapshot(&temp_dir, &snapshot);
    assert!(matches!(load_snapshot(&path), Err(StoreError::Corrupt(_))));

    // "note 1" is six characters.
    let mut snapshot = Snapshot::from(&make_populated_store());
    snapshot.config.max_note_len = 3;
    let path = write_snapshot(&temp_dir, &snapshot);
    assert!(matches!(load_snapshot(&path), Err(StoreError::Corrupt(_))));
}

#[test]
fn test_load_rejects_limits_over_capacity() {
    let temp_dir = TempDir::new().unwrap();
    let mut snapshot = Snapshot::from(&make_populated_store());
    snapshot.config.max_metadata_len = Metadata::MAX_LEN + 1;
    let path = write_snapshot(&temp_dir, &snapshot);

    assert!(matches!(load_snapshot(&path), Err(StoreError::Corrupt(_))));
}

#[test]
fn test_failed_save_removes_temporary_file() {
    let temp_dir = TempDir::new().unwrap();
    // A directory in the way makes the final rename fail.
    let path = temp_dir.path().join("registry.json");
    fs::create_dir(&path).unwrap();

    let result = save_snapshot(&path, &make_populated_store());
    assert!(matches!(result, Err(StoreError::Io(_))));
    assert!(!temp_dir.path().join("registry.json.tmp").exists());
    assert!(path.is_dir());
}

fn write_snapshot(temp_dir: &TempDir, snapshot: &Snapshot) -> std::path::PathBuf {
    let path = temp_dir.path().join("registry.json");
    fs::write(&path, serde_json::to_vec(snapshot).unwrap()).unwrap();
    path
}

#[test]
fn test_load_rejects_duplicate_hash_claim() {
    let temp_dir = TempDir::new().unwrap();
    let mut snapshot = Snapshot::from(&make_populated_store());
    // Point event 3 at event 1's hash.
    snapshot.events[2].doc_hash = snapshot.events[0].doc_hash;
    let path = write_snapshot(&temp_dir, &snapshot);

    assert!(matches!(load_snapshot(&path), Err(StoreError::Corrupt(_))));
}

#[test]
fn test_load_rejects_dangling_rows() {
    let temp_dir = TempDir::new().unwrap();
    let mut snapshot = Snapshot::from(&make_populated_store());
    snapshot.notes[0].event_id = 42;
    let path = write_snapshot(&temp_dir, &snapshot);

    assert!(matches!(load_snapshot(&path), Err(StoreError::Corrupt(_))));
}

#[test]
fn test_load_rejects_stale_counter() {
    let temp_dir = TempDir::new().unwrap();
    let mut snapshot = Snapshot::from(&make_populated_store());
    snapshot.next_event_id = 3;
    let path = write_snapshot(&temp_dir, &snapshot);

    assert!(matches!(load_snapshot(&path), Err(StoreError::Corrupt(_))));
}

#[test]
fn test_load_rejects_unknown_format() {
    let temp_dir = TempDir::new().unwrap();
    let mut snapshot = Snapshot::from(&make_populated_store());
    snapshot.format = 9;
    let path = write_snapshot(&temp_dir, &snapshot);

    assert!(matches!(
        load_snapshot(&path),
        Err(StoreError::UnsupportedFormat(9))
    ));
}

#[test]
fn test_load_rejects_invalid_fields() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("registry.json");
    let mut value = serde_json::to_value(Snapshot::from(&make_populated_store())).unwrap();
    value["events"][0]["doc_hash"] = serde_json::json!("abcd");
    fs::write(&path, serde_json::to_vec(&value).unwrap()).unwrap();

    assert!(matches!(load_snapshot(&path), Err(StoreError::Json(_))));
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_snapshot(temp_dir.path().join("absent.json"));
    assert!(matches!(result, Err(StoreError::Io(_))));
}
