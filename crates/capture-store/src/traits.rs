//! Storage backend trait.

use capture_canonical::{DocHash, PrincipalId};
use capture_core::{
    CaptureEvent, Collaborator, EventId, EventVersion, Note, NoteId, RegistryConfig, VersionNumber,
};

/// Keyed tables and global config of one registry instance.
///
/// Reads return owned records so backends are free to choose their layout.
/// Writes insert or overwrite and cannot fail; callers validate first.
pub trait RegistryStore {
    /// Event by id.
    fn event(&self, event_id: EventId) -> Option<CaptureEvent>;
    /// Inserts or replaces an event keyed by its id.
    fn put_event(&mut self, event: CaptureEvent);
    /// All events in ascending id order.
    fn events(&self) -> Vec<CaptureEvent>;

    /// Event that first claimed `hash`.
    fn event_for_hash(&self, hash: &DocHash) -> Option<EventId>;
    /// Records `hash` as claimed by `event_id`.
    fn put_hash(&mut self, hash: DocHash, event_id: EventId);

    /// Version record for `(event_id, version)`.
    fn version(&self, event_id: EventId, version: VersionNumber) -> Option<EventVersion>;
    /// Inserts or replaces a version record.
    fn put_version(&mut self, version: EventVersion);
    /// Version records of one event in ascending version order.
    fn versions(&self, event_id: EventId) -> Vec<EventVersion>;

    /// Collaborator entry for `(event_id, principal)`.
    fn collaborator(&self, event_id: EventId, principal: &PrincipalId) -> Option<Collaborator>;
    /// Inserts or replaces a collaborator entry.
    fn put_collaborator(&mut self, collaborator: Collaborator);
    /// Collaborator entries of one event ordered by principal.
    fn collaborators(&self, event_id: EventId) -> Vec<Collaborator>;

    /// Note for `(event_id, note_id)`.
    fn note(&self, event_id: EventId, note_id: NoteId) -> Option<Note>;
    /// Inserts a note.
    fn put_note(&mut self, note: Note);
    /// Notes of one event in ascending id order.
    fn notes(&self, event_id: EventId) -> Vec<Note>;

    /// Id the next registration receives.
    fn next_event_id(&self) -> EventId;
    /// Sets the next event id.
    fn set_next_event_id(&mut self, next: EventId);
    /// Id the next note receives, shared across all events.
    fn next_note_id(&self) -> NoteId;
    /// Sets the next note id.
    fn set_next_note_id(&mut self, next: NoteId);
    /// Whether mutations are paused.
    fn is_paused(&self) -> bool;
    /// Sets the pause flag.
    fn set_paused(&mut self, paused: bool);
    /// Current admin.
    fn admin(&self) -> PrincipalId;
    /// Replaces the admin.
    fn set_admin(&mut self, admin: PrincipalId);
    /// Text limits this registry was created with.
    fn config(&self) -> RegistryConfig;
}
