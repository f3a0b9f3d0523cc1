//! The capture event registry.

use capture_canonical::{
    DocHash, Metadata, NoteContent, PermissionSet, PrincipalId, Role, StatusLabel, UpdateNotes,
};
use capture_core::authorization::is_admin;
use capture_core::{
    AccessRule, CaptureEvent, Clock, Co2Amount, Collaborator, EventId, EventStatus, EventVersion,
    Note, NoteId, RegistryConfig, RegistryError, VersionNumber,
};
use capture_store::{event_view, filter_events, EventFilter, EventView, MemoryStore, RegistryStore};
use tracing::{debug, info, warn};

/// Logs a rejected precondition and passes the error through.
fn reject(op: &'static str, caller: &PrincipalId, error: RegistryError) -> RegistryError {
    debug!(op, caller = %caller, code = error.code(), %error, "rejected");
    error
}

/// Registry of capture events over a store and an injected clock.
///
/// Mutations take `&mut self`, so one call runs at a time; wrap the registry
/// in a [`SharedRegistry`](crate::SharedRegistry) to share it across threads.
#[derive(Debug)]
pub struct Registry<S = MemoryStore, C = capture_core::ManualClock> {
    store: S,
    clock: C,
}

impl<C: Clock> Registry<MemoryStore, C> {
    /// Creates a registry with empty tables and `admin` as the deployer.
    pub fn deploy(admin: PrincipalId, clock: C) -> Self {
        Self::new(MemoryStore::new(admin), clock)
    }
}

impl<S: RegistryStore, C: Clock> Registry<S, C> {
    /// Wraps existing tables; text limits come from the store.
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Underlying tables.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Text limits stored with the tables.
    pub fn config(&self) -> RegistryConfig {
        self.store.config()
    }

    // --- authorization primitives ---

    /// Returns true iff `caller` is the current admin.
    pub fn is_admin(&self, caller: &PrincipalId) -> bool {
        is_admin(caller, &self.store.admin())
    }

    /// Returns true iff `caller` is a collaborator on `event_id` holding `token`.
    pub fn has_permission(&self, event_id: EventId, caller: &PrincipalId, token: &str) -> bool {
        self.store
            .collaborator(event_id, caller)
            .is_some_and(|entry| entry.has_permission(token))
    }

    fn ensure_active(&self, op: &'static str, caller: &PrincipalId) -> Result<(), RegistryError> {
        if self.store.is_paused() {
            return Err(reject(op, caller, RegistryError::Paused));
        }
        Ok(())
    }

    fn ensure_admin(&self, op: &'static str, caller: &PrincipalId) -> Result<(), RegistryError> {
        if !self.is_admin(caller) {
            return Err(reject(op, caller, RegistryError::Unauthorized));
        }
        Ok(())
    }

    fn load_event(
        &self,
        op: &'static str,
        caller: &PrincipalId,
        event_id: EventId,
    ) -> Result<CaptureEvent, RegistryError> {
        self.store
            .event(event_id)
            .ok_or_else(|| reject(op, caller, RegistryError::NotFound))
    }

    fn authorize(
        &self,
        op: &'static str,
        rule: AccessRule,
        caller: &PrincipalId,
        event: &CaptureEvent,
    ) -> Result<(), RegistryError> {
        let grant = match rule.permission {
            Some(_) => self.store.collaborator(event.event_id, caller),
            None => None,
        };
        if rule.permits(caller, event, &self.store.admin(), grant.as_ref()) {
            Ok(())
        } else {
            Err(reject(op, caller, RegistryError::Unauthorized))
        }
    }

    // --- admin operations ---

    /// Stops every per-event mutation until unpaused. Admin only.
    pub fn pause_contract(&mut self, caller: &PrincipalId) -> Result<(), RegistryError> {
        self.ensure_admin("pause_contract", caller)?;
        self.store.set_paused(true);
        warn!(caller = %caller, "registry paused");
        Ok(())
    }

    /// Resumes mutations. Admin only.
    pub fn unpause_contract(&mut self, caller: &PrincipalId) -> Result<(), RegistryError> {
        self.ensure_admin("unpause_contract", caller)?;
        self.store.set_paused(false);
        info!(caller = %caller, "registry unpaused");
        Ok(())
    }

    /// Hands the admin role to `new_admin`. Admin only.
    pub fn set_admin(
        &mut self,
        caller: &PrincipalId,
        new_admin: PrincipalId,
    ) -> Result<(), RegistryError> {
        self.ensure_admin("set_admin", caller)?;
        warn!(caller = %caller, new_admin = %new_admin, "admin reassigned");
        self.store.set_admin(new_admin);
        Ok(())
    }

    // --- event operations ---

    /// Registers a capture event and returns its id.
    ///
    /// Checks, in order: not paused, positive amount, unclaimed hash,
    /// metadata within the stored limit, an id left in the counter. The hash stays claimed for the
    /// lifetime of the registry whatever happens to the event later.
    pub fn register_capture_event(
        &mut self,
        caller: &PrincipalId,
        co2_amount: Co2Amount,
        doc_hash: DocHash,
        metadata: Metadata,
    ) -> Result<EventId, RegistryError> {
        const OP: &str = "register_capture_event";
        self.ensure_active(OP, caller)?;
        if co2_amount == 0 {
            return Err(reject(OP, caller, RegistryError::InvalidAmount));
        }
        if self.store.event_for_hash(&doc_hash).is_some() {
            return Err(reject(OP, caller, RegistryError::AlreadyRegistered));
        }
        if metadata.char_len() > self.store.config().max_metadata_len {
            return Err(reject(OP, caller, RegistryError::ContentTooLong));
        }
        let event_id = self.store.next_event_id();
        let next_event_id = event_id
            .checked_add(1)
            .ok_or_else(|| reject(OP, caller, RegistryError::IdsExhausted))?;

        let now = self.clock.now();
        self.store.put_event(CaptureEvent {
            event_id,
            facility: caller.clone(),
            co2_amount,
            timestamp: now,
            doc_hash,
            metadata,
            status: EventStatus::Pending,
            last_updated: now,
        });
        self.store.put_hash(doc_hash, event_id);
        self.store.set_next_event_id(next_event_id);

        info!(
            event_id,
            facility = %caller,
            co2_amount = %co2_amount,
            doc_hash = %doc_hash,
            "capture event registered"
        );
        Ok(event_id)
    }

    /// Moves an event to `verified`, `rejected` or `updated`.
    ///
    /// Allowed for the facility, `update-status` collaborators and the admin.
    pub fn update_event_status(
        &mut self,
        caller: &PrincipalId,
        event_id: EventId,
        new_status: &StatusLabel,
    ) -> Result<(), RegistryError> {
        const OP: &str = "update_event_status";
        self.ensure_active(OP, caller)?;
        let mut event = self.load_event(OP, caller, event_id)?;
        self.authorize(OP, AccessRule::UPDATE_EVENT_STATUS, caller, &event)?;
        let status = EventStatus::settable(new_status).map_err(|e| reject(OP, caller, e))?;

        let previous = event.status;
        event.status = status;
        event.last_updated = self.clock.now();
        self.store.put_event(event);

        info!(event_id, caller = %caller, from = %previous, to = %status, "event status updated");
        Ok(())
    }

    /// Records a correction under a caller-chosen version number.
    ///
    /// Allowed for the facility and `add-version` collaborators only. An
    /// existing record with the same number is overwritten. The event's
    /// status becomes `updated` whatever it was before. The corrected hash
    /// is not checked against or added to the hash index.
    pub fn add_event_version(
        &mut self,
        caller: &PrincipalId,
        event_id: EventId,
        version: VersionNumber,
        updated_co2_amount: Co2Amount,
        updated_doc_hash: DocHash,
        update_notes: UpdateNotes,
    ) -> Result<(), RegistryError> {
        const OP: &str = "add_event_version";
        self.ensure_active(OP, caller)?;
        let mut event = self.load_event(OP, caller, event_id)?;
        self.authorize(OP, AccessRule::ADD_EVENT_VERSION, caller, &event)?;
        if updated_co2_amount == 0 {
            return Err(reject(OP, caller, RegistryError::InvalidAmount));
        }

        let now = self.clock.now();
        let replaced = self.store.version(event_id, version).is_some();
        self.store.put_version(EventVersion {
            event_id,
            version,
            co2_amount: updated_co2_amount,
            doc_hash: updated_doc_hash,
            notes: update_notes,
            timestamp: now,
        });
        event.status = EventStatus::Updated;
        event.last_updated = now;
        self.store.put_event(event);

        if replaced {
            warn!(event_id, version, caller = %caller, "event version overwritten");
        }
        info!(
            event_id,
            version,
            caller = %caller,
            co2_amount = %updated_co2_amount,
            "event version added"
        );
        Ok(())
    }

    /// Grants `collaborator` the given tokens on one event.
    ///
    /// Only the event's facility may call this; re-adding a principal
    /// replaces its role and tokens entirely.
    pub fn add_collaborator(
        &mut self,
        caller: &PrincipalId,
        event_id: EventId,
        collaborator: PrincipalId,
        role: Role,
        permissions: PermissionSet,
    ) -> Result<(), RegistryError> {
        const OP: &str = "add_collaborator";
        self.ensure_active(OP, caller)?;
        let event = self.load_event(OP, caller, event_id)?;
        self.authorize(OP, AccessRule::ADD_COLLABORATOR, caller, &event)?;

        info!(
            event_id,
            collaborator = %collaborator,
            role = %role,
            permissions = permissions.len(),
            "collaborator granted"
        );
        self.store.put_collaborator(Collaborator {
            event_id,
            principal: collaborator,
            role,
            permissions,
            added_at: self.clock.now(),
        });
        Ok(())
    }

    /// Appends a note and returns its id from the global note counter.
    ///
    /// Allowed for the facility, `add-notes` collaborators and the admin.
    pub fn add_note(
        &mut self,
        caller: &PrincipalId,
        event_id: EventId,
        content: NoteContent,
    ) -> Result<NoteId, RegistryError> {
        const OP: &str = "add_note";
        self.ensure_active(OP, caller)?;
        let event = self.load_event(OP, caller, event_id)?;
        self.authorize(OP, AccessRule::ADD_NOTE, caller, &event)?;
        if content.char_len() > self.store.config().max_note_len {
            return Err(reject(OP, caller, RegistryError::ContentTooLong));
        }
        let note_id = self.store.next_note_id();
        let next_note_id = note_id
            .checked_add(1)
            .ok_or_else(|| reject(OP, caller, RegistryError::IdsExhausted))?;

        self.store.put_note(Note {
            event_id,
            note_id,
            author: caller.clone(),
            content,
            timestamp: self.clock.now(),
        });
        self.store.set_next_note_id(next_note_id);

        info!(event_id, note_id, author = %caller, "note added");
        Ok(note_id)
    }

    // --- queries ---

    /// Event by id.
    pub fn get_event_details(&self, event_id: EventId) -> Option<CaptureEvent> {
        self.store.event(event_id)
    }

    /// Version record `(event_id, version)`.
    pub fn get_event_version(
        &self,
        event_id: EventId,
        version: VersionNumber,
    ) -> Option<EventVersion> {
        self.store.version(event_id, version)
    }

    /// Collaborator entry `(event_id, principal)`.
    pub fn get_collaborator(
        &self,
        event_id: EventId,
        principal: &PrincipalId,
    ) -> Option<Collaborator> {
        self.store.collaborator(event_id, principal)
    }

    /// Note `(event_id, note_id)`.
    pub fn get_note(&self, event_id: EventId, note_id: NoteId) -> Option<Note> {
        self.store.note(event_id, note_id)
    }

    /// Id the next registration will receive.
    pub fn get_next_event_id(&self) -> EventId {
        self.store.next_event_id()
    }

    /// Whether mutations are paused.
    pub fn is_contract_paused(&self) -> bool {
        self.store.is_paused()
    }

    /// Current admin.
    pub fn get_contract_admin(&self) -> PrincipalId {
        self.store.admin()
    }

    /// Event that claimed `doc_hash`, if any.
    pub fn get_event_id_by_hash(&self, doc_hash: &DocHash) -> Option<EventId> {
        self.store.event_for_hash(doc_hash)
    }

    /// Events matching `filter`, in ascending id order.
    pub fn list_events<F: EventFilter + ?Sized>(&self, filter: &F) -> Vec<CaptureEvent> {
        filter_events(&self.store, filter)
    }

    /// Event with its versions, collaborators and notes.
    pub fn event_view(&self, event_id: EventId) -> Option<EventView> {
        event_view(&self.store, event_id)
    }
}
