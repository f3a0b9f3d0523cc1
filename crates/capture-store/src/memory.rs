//! In-memory backend.

use std::collections::BTreeMap;

use capture_canonical::{DocHash, PrincipalId};
use capture_core::{
    CaptureEvent, Collaborator, EventId, EventVersion, Note, NoteId, RegistryConfig, VersionNumber,
};

use crate::traits::RegistryStore;

/// `BTreeMap`-backed tables; the reference backend.
///
/// Per-event tables are nested maps so that range reads for one event never
/// touch another event's rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    pub(crate) events: BTreeMap<EventId, CaptureEvent>,
    pub(crate) hash_index: BTreeMap<DocHash, EventId>,
    pub(crate) versions: BTreeMap<EventId, BTreeMap<VersionNumber, EventVersion>>,
    pub(crate) collaborators: BTreeMap<EventId, BTreeMap<PrincipalId, Collaborator>>,
    pub(crate) notes: BTreeMap<EventId, BTreeMap<NoteId, Note>>,
    pub(crate) next_event_id: EventId,
    pub(crate) next_note_id: NoteId,
    pub(crate) paused: bool,
    pub(crate) admin: PrincipalId,
    pub(crate) config: RegistryConfig,
}

impl MemoryStore {
    /// Creates empty tables with `admin` (the deployer) as admin.
    ///
    /// Counters start at 1, the registry starts unpaused and the text limits
    /// are the defaults.
    pub fn new(admin: PrincipalId) -> Self {
        Self::with_config(admin, RegistryConfig::default())
    }

    /// Like [`MemoryStore::new`] with explicit text limits.
    ///
    /// The limits are fixed for the lifetime of the tables and clamped to the
    /// structural capacity of their fields.
    pub fn with_config(admin: PrincipalId, config: RegistryConfig) -> Self {
        Self {
            events: BTreeMap::new(),
            hash_index: BTreeMap::new(),
            versions: BTreeMap::new(),
            collaborators: BTreeMap::new(),
            notes: BTreeMap::new(),
            next_event_id: 1,
            next_note_id: 1,
            paused: false,
            admin,
            config: config.validated(),
        }
    }

    /// Number of registered events.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

impl RegistryStore for MemoryStore {
    fn event(&self, event_id: EventId) -> Option<CaptureEvent> {
        self.events.get(&event_id).cloned()
    }

    fn put_event(&mut self, event: CaptureEvent) {
        self.events.insert(event.event_id, event);
    }

    fn events(&self) -> Vec<CaptureEvent> {
        self.events.values().cloned().collect()
    }

    fn event_for_hash(&self, hash: &DocHash) -> Option<EventId> {
        self.hash_index.get(hash).copied()
    }

    fn put_hash(&mut self, hash: DocHash, event_id: EventId) {
        self.hash_index.insert(hash, event_id);
    }

    fn version(&self, event_id: EventId, version: VersionNumber) -> Option<EventVersion> {
        self.versions.get(&event_id)?.get(&version).cloned()
    }

    fn put_version(&mut self, version: EventVersion) {
        self.versions
            .entry(version.event_id)
            .or_default()
            .insert(version.version, version);
    }

    fn versions(&self, event_id: EventId) -> Vec<EventVersion> {
        self.versions
            .get(&event_id)
            .map(|rows| rows.values().cloned().collect())
            .unwrap_or_default()
    }

    fn collaborator(&self, event_id: EventId, principal: &PrincipalId) -> Option<Collaborator> {
        self.collaborators.get(&event_id)?.get(principal).cloned()
    }

    fn put_collaborator(&mut self, collaborator: Collaborator) {
        self.collaborators
            .entry(collaborator.event_id)
            .or_default()
            .insert(collaborator.principal.clone(), collaborator);
    }

    fn collaborators(&self, event_id: EventId) -> Vec<Collaborator> {
        self.collaborators
            .get(&event_id)
            .map(|rows| rows.values().cloned().collect())
            .unwrap_or_default()
    }

    fn note(&self, event_id: EventId, note_id: NoteId) -> Option<Note> {
        self.notes.get(&event_id)?.get(&note_id).cloned()
    }

    fn put_note(&mut self, note: Note) {
        self.notes
            .entry(note.event_id)
            .or_default()
            .insert(note.note_id, note);
    }

    fn notes(&self, event_id: EventId) -> Vec<Note> {
        self.notes
            .get(&event_id)
            .map(|rows| rows.values().cloned().collect())
            .unwrap_or_default()
    }

    fn next_event_id(&self) -> EventId {
        self.next_event_id
    }

    fn set_next_event_id(&mut self, next: EventId) {
        self.next_event_id = next;
    }

    fn next_note_id(&self) -> NoteId {
        self.next_note_id
    }

    fn set_next_note_id(&mut self, next: NoteId) {
        self.next_note_id = next;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn admin(&self) -> PrincipalId {
        self.admin.clone()
    }

    fn set_admin(&mut self, admin: PrincipalId) {
        self.admin = admin;
    }

    fn config(&self) -> RegistryConfig {
        self.config
    }
}
