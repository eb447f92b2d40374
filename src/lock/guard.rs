use std::fmt;
use std::marker::PhantomData;

use super::ReentrantLock;

/// One hold on a [`ReentrantLock`], released when dropped.
///
/// Guards nest: a thread that already owns the lock can take more guards,
/// and the lock is freed once the outermost one goes away. The guard is
/// `!Send` because only the owning thread may give the hold back.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct ReentrantLockGuard<'a> {
    lock: &'a ReentrantLock,
    _not_send: PhantomData<*const ()>,
}

impl<'a> ReentrantLockGuard<'a> {
    fn new(lock: &'a ReentrantLock) -> Self {
        ReentrantLockGuard {
            lock,
            _not_send: PhantomData,
        }
    }

    pub fn hold_count(&self) -> usize {
        self.lock.hold_count()
    }

    pub fn lock(&self) -> &'a ReentrantLock {
        self.lock
    }
}

impl ReentrantLock {
    /// Blocking acquire that releases through the returned guard.
    pub fn guard(&self) -> ReentrantLockGuard<'_> {
        self.acquire();
        ReentrantLockGuard::new(self)
    }

    /// Non-blocking acquire; `None` when another thread holds the lock.
    pub fn try_guard(&self) -> Option<ReentrantLockGuard<'_>> {
        self.try_acquire().then(|| ReentrantLockGuard::new(self))
    }
}

impl Drop for ReentrantLockGuard<'_> {
    fn drop(&mut self) {
        let released = self.lock.release();
        debug_assert!(released, "guard dropped after its hold was already released");
    }
}

impl fmt::Debug for ReentrantLockGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReentrantLockGuard")
            .field("status", &self.lock.status())
            .finish()
    }
}
