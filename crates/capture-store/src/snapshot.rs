//! Snapshot persistence.
//!
//! A snapshot is the row form of the five tables plus the global config
//! fields, text limits and counters. Loading re-checks the invariants the registry
//! maintains, so a hand-edited file cannot smuggle in a duplicate hash claim
//! or a dangling row.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use capture_canonical::{DocHash, PrincipalId};
use capture_core::{
    CaptureEvent, Collaborator, EventId, EventVersion, Note, NoteId, RegistryConfig,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StoreError;
use crate::memory::MemoryStore;

/// Current snapshot format version.
pub const SNAPSHOT_FORMAT: u32 = 1;

/// One row of the hash index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashIndexEntry {
    /// Claimed document hash.
    pub doc_hash: DocHash,
    /// Event that first claimed it.
    pub event_id: EventId,
}

/// Serializable row form of a registry's complete state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Format version, currently [`SNAPSHOT_FORMAT`].
    pub format: u32,
    /// Id the next registration receives.
    pub next_event_id: EventId,
    /// Id the next note receives.
    pub next_note_id: NoteId,
    /// Pause flag.
    pub paused: bool,
    /// Current admin.
    pub admin: PrincipalId,
    /// Text limits every stored row obeys.
    #[serde(default)]
    pub config: RegistryConfig,
    /// Event rows in id order.
    pub events: Vec<CaptureEvent>,
    /// Hash index rows in hash order.
    pub hash_index: Vec<HashIndexEntry>,
    /// Version rows in key order.
    pub versions: Vec<EventVersion>,
    /// Collaborator rows in key order.
    pub collaborators: Vec<Collaborator>,
    /// Note rows in key order.
    pub notes: Vec<Note>,
}

impl From<&MemoryStore> for Snapshot {
    fn from(store: &MemoryStore) -> Self {
        Snapshot {
            format: SNAPSHOT_FORMAT,
            next_event_id: store.next_event_id,
            next_note_id: store.next_note_id,
            paused: store.paused,
            admin: store.admin.clone(),
            config: store.config,
            events: store.events.values().cloned().collect(),
            hash_index: store
                .hash_index
                .iter()
                .map(|(doc_hash, event_id)| HashIndexEntry {
                    doc_hash: *doc_hash,
                    event_id: *event_id,
                })
                .collect(),
            versions: store
                .versions
                .values()
                .flat_map(|rows| rows.values().cloned())
                .collect(),
            collaborators: store
                .collaborators
                .values()
                .flat_map(|rows| rows.values().cloned())
                .collect(),
            notes: store
                .notes
                .values()
                .flat_map(|rows| rows.values().cloned())
                .collect(),
        }
    }
}

fn corrupt(reason: impl Into<String>) -> StoreError {
    StoreError::Corrupt(reason.into())
}

impl TryFrom<Snapshot> for MemoryStore {
    type Error = StoreError;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        if snapshot.format != SNAPSHOT_FORMAT {
            return Err(StoreError::UnsupportedFormat(snapshot.format));
        }
        if snapshot.next_event_id == 0 || snapshot.next_note_id == 0 {
            return Err(corrupt("counters start at 1"));
        }

        if snapshot.config != snapshot.config.validated() {
            return Err(corrupt("text limits exceed field capacity"));
        }

        let mut store = MemoryStore::with_config(snapshot.admin, snapshot.config);
        store.next_event_id = snapshot.next_event_id;
        store.next_note_id = snapshot.next_note_id;
        store.paused = snapshot.paused;

        for event in snapshot.events {
            if event.event_id == 0 || event.event_id >= store.next_event_id {
                return Err(corrupt(format!(
                    "event {} outside allocated range",
                    event.event_id
                )));
            }
            if event.co2_amount == 0 {
                return Err(corrupt(format!("event {} has zero amount", event.event_id)));
            }
            if event.metadata.char_len() > store.config.max_metadata_len {
                return Err(corrupt(format!(
                    "event {} metadata exceeds {} characters",
                    event.event_id, store.config.max_metadata_len
                )));
            }
            let event_id = event.event_id;
            if store.events.insert(event_id, event).is_some() {
                return Err(corrupt(format!("duplicate event {event_id}")));
            }
        }

        for entry in snapshot.hash_index {
            let claimant = store
                .events
                .get(&entry.event_id)
                .ok_or_else(|| {
                    corrupt(format!(
                        "hash index points at missing event {}",
                        entry.event_id
                    ))
                })?;
            if claimant.doc_hash != entry.doc_hash {
                return Err(corrupt(format!(
                    "hash index entry {} does not match event {}",
                    entry.doc_hash, entry.event_id
                )));
            }
            if store.hash_index.insert(entry.doc_hash, entry.event_id).is_some() {
                return Err(corrupt(format!("duplicate hash claim {}", entry.doc_hash)));
            }
        }
        if store.hash_index.len() != store.events.len() {
            return Err(corrupt("every event must claim exactly one hash"));
        }

        for version in snapshot.versions {
            if !store.events.contains_key(&version.event_id) {
                return Err(corrupt(format!(
                    "version {} references missing event {}",
                    version.version, version.event_id
                )));
            }
            if version.co2_amount == 0 {
                return Err(corrupt(format!(
                    "version {} of event {} has zero amount",
                    version.version, version.event_id
                )));
            }
            let (event_id, number) = (version.event_id, version.version);
            let rows = store.versions.entry(event_id).or_default();
            if rows.insert(number, version).is_some() {
                return Err(corrupt(format!(
                    "duplicate version {number} of event {event_id}"
                )));
            }
        }

        for collaborator in snapshot.collaborators {
            if !store.events.contains_key(&collaborator.event_id) {
                return Err(corrupt(format!(
                    "collaborator {} references missing event {}",
                    collaborator.principal, collaborator.event_id
                )));
            }
            let event_id = collaborator.event_id;
            let principal = collaborator.principal.clone();
            let rows = store.collaborators.entry(event_id).or_default();
            if rows.insert(principal.clone(), collaborator).is_some() {
                return Err(corrupt(format!(
                    "duplicate collaborator {principal} on event {event_id}"
                )));
            }
        }

        let mut note_ids = BTreeSet::new();
        for note in snapshot.notes {
            if !store.events.contains_key(&note.event_id) {
                return Err(corrupt(format!(
                    "note {} references missing event {}",
                    note.note_id, note.event_id
                )));
            }
            if note.note_id == 0 || note.note_id >= store.next_note_id {
                return Err(corrupt(format!("note {} outside allocated range", note.note_id)));
            }
            if note.content.char_len() > store.config.max_note_len {
                return Err(corrupt(format!(
                    "note {} exceeds {} characters",
                    note.note_id, store.config.max_note_len
                )));
            }
            if !note_ids.insert(note.note_id) {
                return Err(corrupt(format!("duplicate note {}", note.note_id)));
            }
            store
                .notes
                .entry(note.event_id)
                .or_default()
                .insert(note.note_id, note);
        }

        Ok(store)
    }
}

/// Writes `store` to `path` as pretty JSON.
///
/// The file is written beside `path` first and then renamed over it, so a
/// crash never leaves a half-written snapshot in place. The temporary file
/// is removed again if any step fails.
pub fn save_snapshot<P: AsRef<Path>>(path: P, store: &MemoryStore) -> Result<(), StoreError> {
    let path = path.as_ref();
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let snapshot = Snapshot::from(store);
    if let Err(e) = write_and_replace(&tmp, path, &snapshot) {
        if let Err(cleanup) = fs::remove_file(&tmp) {
            debug!(path = %tmp.display(), error = %cleanup, "temporary snapshot not removed");
        }
        return Err(e);
    }

    debug!(
        path = %path.display(),
        events = snapshot.events.len(),
        "saved registry snapshot"
    );
    Ok(())
}

fn write_and_replace(tmp: &Path, path: &Path, snapshot: &Snapshot) -> Result<(), StoreError> {
    let file = File::create(tmp)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, snapshot)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    drop(writer);
    fs::rename(tmp, path)?;
    Ok(())
}

/// Reads and validates a snapshot written by [`save_snapshot`].
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<MemoryStore, StoreError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let snapshot: Snapshot = serde_json::from_reader(reader)?;
    let store = MemoryStore::try_from(snapshot)?;

    debug!(
        path = %path.display(),
        events = store.event_count(),
        "loaded registry snapshot"
    );
    Ok(store)
}
