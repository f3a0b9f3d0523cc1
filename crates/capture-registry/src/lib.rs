//! Permissioned registry of CO2 capture events.
//!
//! The registry records immutable capture events keyed by a unique document
//! hash, tracks their status, layers caller-numbered corrections on top,
//! and lets each event's facility delegate capabilities to collaborators.
//! Notes are append-only and draw ids from one counter shared by all events.
//!
//! ## Quick Start
//!
//! ```rust
//! use capture_canonical::{DocHash, Metadata, PermissionSet, PrincipalId, Role, StatusLabel};
//! use capture_core::{EventStatus, ManualClock};
//! use capture_registry::Registry;
//!
//! let admin = PrincipalId::parse("org:registry-admin")?;
//! let facility = PrincipalId::parse("org:plant-7")?;
//! let auditor = PrincipalId::parse("org:auditor")?;
//!
//! let mut registry = Registry::deploy(admin, ManualClock::new(1));
//! let event_id = registry
//!     .register_capture_event(&facility, 1_000_000, DocHash::new([1; 32]), Metadata::default())?;
//!
//! registry.add_collaborator(
//!     &facility,
//!     event_id,
//!     auditor.clone(),
//!     Role::parse("auditor")?,
//!     PermissionSet::parse(["update-status"])?,
//! )?;
//! registry.update_event_status(&auditor, event_id, &StatusLabel::parse("verified")?)?;
//!
//! let event = registry.get_event_details(event_id).expect("registered");
//! assert_eq!(event.status, EventStatus::Verified);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Every mutating operation checks its preconditions in a fixed order and
//! writes nothing unless all of them pass.

#![deny(missing_docs)]

/// The registry component and its operations.
pub mod registry;
/// Thread-safe handle serializing writers.
pub mod shared;

pub use registry::Registry;
pub use shared::SharedRegistry;
