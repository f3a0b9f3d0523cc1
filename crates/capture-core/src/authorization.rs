use capture_canonical::PrincipalId;

use crate::records::{CaptureEvent, Collaborator};

/// Token letting a collaborator change an event's status.
pub const UPDATE_STATUS: &str = "update-status";
/// Token letting a collaborator add version records.
pub const ADD_VERSION: &str = "add-version";
/// Token letting a collaborator add notes.
pub const ADD_NOTES: &str = "add-notes";

/// Returns true iff `caller` is the current admin.
pub fn is_admin(caller: &PrincipalId, admin: &PrincipalId) -> bool {
    caller == admin
}

/// Which principals may perform a per-event operation.
///
/// Each operation accepts a different OR-combination of the event's
/// facility, collaborators holding one specific token, and the admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRule {
    /// The event's facility may act.
    pub owner: bool,
    /// Collaborators holding this token may act.
    pub permission: Option<&'static str>,
    /// The current admin may act.
    pub admin: bool,
}

impl AccessRule {
    /// Facility, `update-status` collaborators, or admin.
    pub const UPDATE_EVENT_STATUS: AccessRule = AccessRule {
        owner: true,
        permission: Some(UPDATE_STATUS),
        admin: true,
    };

    /// Facility or `add-version` collaborators; the admin cannot bypass.
    pub const ADD_EVENT_VERSION: AccessRule = AccessRule {
        owner: true,
        permission: Some(ADD_VERSION),
        admin: false,
    };

    /// Facility only.
    pub const ADD_COLLABORATOR: AccessRule = AccessRule {
        owner: true,
        permission: None,
        admin: false,
    };

    /// Facility, `add-notes` collaborators, or admin.
    pub const ADD_NOTE: AccessRule = AccessRule {
        owner: true,
        permission: Some(ADD_NOTES),
        admin: true,
    };

    /// Decides whether `caller` may act on `event`.
    ///
    /// `grant` is the collaborator entry stored for `(event, caller)`, if any;
    /// an entry for a different event or principal never matches.
    pub fn permits(
        &self,
        caller: &PrincipalId,
        event: &CaptureEvent,
        admin: &PrincipalId,
        grant: Option<&Collaborator>,
    ) -> bool {
        if self.owner && *caller == event.facility {
            return true;
        }
        if let (Some(token), Some(grant)) = (self.permission, grant) {
            if grant.event_id == event.event_id
                && grant.principal == *caller
                && grant.has_permission(token)
            {
                return true;
            }
        }
        self.admin && is_admin(caller, admin)
    }
}
