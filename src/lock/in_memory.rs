use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::trace;

use super::{LockError, LockManager, ReentrantLock};

/// In-memory lock manager backed by a `HashMap<String, Arc<ReentrantLock>>`.
///
/// It lazily creates one `ReentrantLock` per unique key and returns the same
/// `Arc` for repeated lookups.
#[derive(Debug)]
pub struct InMemoryLockManager {
    locks: Mutex<HashMap<String, Arc<ReentrantLock>>>,
}

impl InMemoryLockManager {
    pub fn new() -> Self {
        InMemoryLockManager {
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Lock every key in `ids`, blocking as needed.
    ///
    /// Keys are deduplicated and taken in sorted order, so callers locking
    /// overlapping key sets through this method always queue up in the same
    /// order. The returned set releases everything when dropped.
    pub fn lock_all(&self, ids: &[&str]) -> Result<LockSet, LockError> {
        let mut unique: Vec<&str> = ids.to_vec();
        unique.sort_unstable();
        unique.dedup();

        lock_each(&unique, |id| self.get_lock(id))
    }

    pub fn len(&self) -> Result<usize, LockError> {
        Ok(self.map()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, LockError> {
        Ok(self.map()?.is_empty())
    }

    fn map(&self) -> Result<MutexGuard<'_, HashMap<String, Arc<ReentrantLock>>>, LockError> {
        self.locks
            .lock()
            .map_err(|_| LockError::Poisoned("lock manager map poisoned".into()))
    }
}

/// Resolve and acquire each key in order.
///
/// The set is built up front so an error part way through releases what was
/// already taken.
fn lock_each<F>(ids: &[&str], mut resolve: F) -> Result<LockSet, LockError>
where
    F: FnMut(&str) -> Result<Arc<ReentrantLock>, LockError>,
{
    let mut set = LockSet {
        locks: Vec::with_capacity(ids.len()),
        _not_send: PhantomData,
    };
    for &id in ids {
        let lock = resolve(id)?;
        lock.acquire();
        trace!(id, "key locked");
        set.locks.push(lock);
    }

    Ok(set)
}

impl Default for InMemoryLockManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LockManager for InMemoryLockManager {
    type Lock = ReentrantLock;

    fn get_lock(&self, id: &str) -> Result<Arc<ReentrantLock>, LockError> {
        let mut locks = self.map()?;
        Ok(locks
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(ReentrantLock::new()))
            .clone())
    }
}

/// Locks taken together by [`InMemoryLockManager::lock_all`].
///
/// Dropping the set releases the locks in reverse acquisition order.
#[must_use = "the locks are released as soon as the set is dropped"]
#[derive(Debug)]
pub struct LockSet {
    locks: Vec<Arc<ReentrantLock>>,
    _not_send: PhantomData<*const ()>,
}

impl LockSet {
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

impl Drop for LockSet {
    fn drop(&mut self) {
        for lock in self.locks.iter().rev() {
            let released = lock.release();
            debug_assert!(released, "lock set released a key it no longer holds");
        }
    }
}
