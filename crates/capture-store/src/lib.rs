//! Table storage for the capture event registry.
//!
//! This crate provides:
//! - The `RegistryStore` trait over the five registry tables and global config
//! - `MemoryStore`, the reference in-memory backend
//! - JSON snapshots holding exactly the tables, counters and config fields
//! - Event filtering and per-event views for read-side queries
//!
//! Stores do not enforce registry rules; the registry checks every
//! precondition before it writes.

#![deny(missing_docs)]

/// Error types for store operations.
pub mod error;
/// Event filtering API.
pub mod filter;
/// In-memory backend.
pub mod memory;
/// Snapshot persistence.
pub mod snapshot;
/// Storage backend trait.
pub mod traits;
/// Per-event aggregate views.
pub mod view;

pub use error::StoreError;
pub use filter::{
    filter_events, AndFilter, EventFilter, FacilityFilter, OrFilter, StatusFilter,
    TimeRangeFilter,
};
pub use memory::MemoryStore;
pub use snapshot::{load_snapshot, save_snapshot, HashIndexEntry, Snapshot, SNAPSHOT_FORMAT};
pub use traits::RegistryStore;
pub use view::{event_view, notes_for_event, EventView};
