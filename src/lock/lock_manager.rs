use std::sync::Arc;

use super::{Lock, LockError};

/// Factory trait for obtaining per-key locks.
///
/// Data structures that guard many independent records use a `LockManager`
/// to get one lock per record instead of a single lock for everything.
pub trait LockManager: Send + Sync {
    /// The concrete lock type returned by this manager.
    type Lock: Lock;

    /// Get (or create) a lock for the given identifier.
    ///
    /// Repeated calls with the same `id` must return the same logical lock.
    fn get_lock(&self, id: &str) -> Result<Arc<Self::Lock>, LockError>;
}
