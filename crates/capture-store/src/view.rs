//! View API for per-event aggregates.

use capture_core::{CaptureEvent, Collaborator, EventId, EventVersion, Note};
use serde::Serialize;

use crate::traits::RegistryStore;

/// An event together with every row layered on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventView {
    /// The event itself.
    pub event: CaptureEvent,
    /// Version records in ascending version order.
    pub versions: Vec<EventVersion>,
    /// Collaborator entries ordered by principal.
    pub collaborators: Vec<Collaborator>,
    /// Notes in ascending id order.
    pub notes: Vec<Note>,
}

/// Collects the event and its versions, collaborators and notes.
///
/// Returns `None` if the event does not exist.
pub fn event_view<S: RegistryStore + ?Sized>(store: &S, event_id: EventId) -> Option<EventView> {
    let event = store.event(event_id)?;
    Some(EventView {
        event,
        versions: store.versions(event_id),
        collaborators: store.collaborators(event_id),
        notes: store.notes(event_id),
    })
}

/// Notes of one event. Ids are not contiguous because the counter is global.
pub fn notes_for_event<S: RegistryStore + ?Sized>(store: &S, event_id: EventId) -> Vec<Note> {
    store.notes(event_id)
}
