use super::LockError;

/// Trait for a single lock instance.
///
/// Implementations provide blocking lock, non-blocking try-lock, and unlock.
/// Unlike the boolean surface of [`ReentrantLock`](super::ReentrantLock),
/// every outcome that is not a plain success is reported as a [`LockError`].
pub trait Lock: Send + Sync {
    /// Acquire the lock, blocking until it becomes available.
    fn lock(&self) -> Result<(), LockError>;

    /// Try to acquire the lock without blocking.
    /// Returns `Ok(true)` if acquired, `Ok(false)` if held by another thread.
    fn try_lock(&self) -> Result<bool, LockError>;

    /// Release one hold on the lock.
    fn unlock(&self) -> Result<(), LockError>;
}
