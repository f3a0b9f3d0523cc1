//! Thread-safe registry handle.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::registry::Registry;
use capture_store::MemoryStore;

/// Cloneable handle to one registry shared across threads.
///
/// Mutations hold the write lock for the whole call, so they are applied one
/// at a time and never interleave. Queries take the read lock, run
/// concurrently with each other, and only ever observe committed state.
#[derive(Debug)]
pub struct SharedRegistry<S = MemoryStore, C = capture_core::ManualClock> {
    inner: Arc<RwLock<Registry<S, C>>>,
}

impl<S, C> Clone for SharedRegistry<S, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, C> SharedRegistry<S, C> {
    /// Takes ownership of `registry`.
    pub fn new(registry: Registry<S, C>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Runs one mutation under the write lock.
    pub fn write<R>(&self, op: impl FnOnce(&mut Registry<S, C>) -> R) -> R {
        let mut guard = self.inner.write();
        op(&mut *guard)
    }

    /// Runs one or more queries under a read lock.
    pub fn read<R>(&self, query: impl FnOnce(&Registry<S, C>) -> R) -> R {
        let guard = self.inner.read();
        query(&*guard)
    }
}
