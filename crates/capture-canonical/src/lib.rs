//! Boundary primitives for the capture event registry.
//!
//! Every value that crosses into a registry operation is built from one of
//! these types. Construction performs the format-level checks (fixed hash
//! length, text capacity, list capacity), so an operation never sees a value
//! that violates a structural bound. Business-level limits such as the
//! configured metadata length are enforced by the registry itself.
//!
#![deny(missing_docs)]

/// Fixed-length opaque document hashes.
pub mod doc_hash;
/// Principal identifiers.
pub mod identifiers;
/// Bounded permission token lists.
pub mod permissions;
/// Bounded text newtypes.
pub mod text;
/// Validation errors raised by boundary primitives.
pub mod validation;

pub use doc_hash::DocHash;
pub use identifiers::PrincipalId;
pub use permissions::PermissionSet;
pub use text::{Metadata, NoteContent, PermissionToken, Role, StatusLabel, UpdateNotes};
pub use validation::ValidationError;
