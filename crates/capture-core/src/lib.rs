//! Core record types and rules for the capture event registry.
//!
//! This crate provides:
//! - Records stored in the registry tables (events, versions, collaborators, notes)
//! - The stable numeric error contract and the success/failure response envelope
//! - The authorization predicate shared by every per-event operation
//! - The injected logical clock and registry configuration
//!
//! Core invariants:
//! - A facility principal never changes after registration
//! - `pending` is only ever an initial status, never a settable target
//! - Time comes from an injected clock the registry reads but never drives
//!
#![deny(missing_docs)]

/// Authorization rules and permission tokens.
pub mod authorization;
/// Injected logical clocks.
pub mod clock;
/// Registry configuration.
pub mod config;
/// Numeric error contract.
pub mod errors;
/// Records stored in the registry tables.
pub mod records;
/// Success/failure response envelope.
pub mod response;

pub use authorization::{AccessRule, ADD_NOTES, ADD_VERSION, UPDATE_STATUS};
pub use clock::{Clock, FixedClock, ManualClock};
pub use config::RegistryConfig;
pub use errors::RegistryError;
pub use records::{
    CaptureEvent, Co2Amount, Collaborator, EventId, EventStatus, EventVersion, Note, NoteId,
    VersionNumber,
};
pub use response::Response;
