use capture_canonical::{
    DocHash, Metadata, NoteContent, PermissionSet, PrincipalId, Role, StatusLabel, UpdateNotes,
};
use serde::{Deserialize, Serialize};

use crate::errors::RegistryError;

/// Identifier of a capture event, allocated from 1 upward.
pub type EventId = u64;

/// Identifier of a note, drawn from one counter shared by all events.
pub type NoteId = u64;

/// Caller-chosen version number of a correction record.
pub type VersionNumber = u64;

/// Fixed-point scaled CO2 amount.
pub type Co2Amount = u128;

/// Lifecycle status of a capture event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Initial status after registration.
    Pending,
    /// Claim accepted.
    Verified,
    /// Claim refused.
    Rejected,
    /// Claim corrected by a version record or explicitly marked updated.
    Updated,
}

impl EventStatus {
    /// Statuses an update may move an event into.
    pub const SETTABLE: [EventStatus; 3] = [
        EventStatus::Verified,
        EventStatus::Rejected,
        EventStatus::Updated,
    ];

    /// Wire name of the status.
    pub const fn as_str(self) -> &'static str {
        match self {
            EventStatus::Pending => "pending",
            EventStatus::Verified => "verified",
            EventStatus::Rejected => "rejected",
            EventStatus::Updated => "updated",
        }
    }

    /// Looks up any status by wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pending" => Some(EventStatus::Pending),
            "verified" => Some(EventStatus::Verified),
            "rejected" => Some(EventStatus::Rejected),
            "updated" => Some(EventStatus::Updated),
            _ => None,
        }
    }

    /// Resolves a requested status label to a settable target.
    ///
    /// `pending` and unknown labels are rejected with
    /// [`RegistryError::InvalidStatus`].
    pub fn settable(label: &StatusLabel) -> Result<Self, RegistryError> {
        Self::SETTABLE
            .into_iter()
            .find(|s| s.as_str() == label.as_str())
            .ok_or(RegistryError::InvalidStatus)
    }

    /// Label form of this status, suitable for an update request.
    pub fn label(self) -> StatusLabel {
        StatusLabel::parse(self.as_str()).unwrap_or_default()
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A recorded claim of captured CO2 backed by a document hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureEvent {
    /// Event identifier.
    pub event_id: EventId,
    /// Registrant; immutable after creation.
    pub facility: PrincipalId,
    /// Claimed amount, always positive.
    pub co2_amount: Co2Amount,
    /// Logical time of registration.
    pub timestamp: u64,
    /// Supporting document hash, unique across the registry.
    pub doc_hash: DocHash,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Current lifecycle status.
    pub status: EventStatus,
    /// Logical time of the most recent mutation.
    pub last_updated: u64,
}

/// Append-only correction layered over an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventVersion {
    /// Parent event.
    pub event_id: EventId,
    /// Caller-supplied version number.
    pub version: VersionNumber,
    /// Corrected amount, always positive.
    pub co2_amount: Co2Amount,
    /// Corrected document hash; not part of the hash index.
    pub doc_hash: DocHash,
    /// Explanation of the correction.
    pub notes: UpdateNotes,
    /// Logical time the version was recorded.
    pub timestamp: u64,
}

/// Principal granted permission tokens on one event by its facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    /// Event the grant is scoped to.
    pub event_id: EventId,
    /// Grantee.
    pub principal: PrincipalId,
    /// Descriptive role label.
    pub role: Role,
    /// Granted tokens.
    pub permissions: PermissionSet,
    /// Logical time of the latest grant.
    pub added_at: u64,
}

impl Collaborator {
    /// Returns true if the grant contains `token`.
    pub fn has_permission(&self, token: &str) -> bool {
        self.permissions.contains(token)
    }
}

/// Append-only note attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Event the note belongs to.
    pub event_id: EventId,
    /// Identifier from the global note counter.
    pub note_id: NoteId,
    /// Principal that wrote the note.
    pub author: PrincipalId,
    /// Note body.
    pub content: NoteContent,
    /// Logical time the note was added.
    pub timestamp: u64,
}
