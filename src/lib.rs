//! A reentrant mutual-exclusion lock for OS threads.
//!
//! [`ReentrantLock`] tracks which thread owns it and how many times that
//! thread has taken it. The owner can acquire again without blocking itself;
//! other threads wait until every acquisition has been released.
//!
//! ```
//! use reentrant_lock::ReentrantLock;
//!
//! let lock = ReentrantLock::new();
//! lock.acquire();
//! assert!(lock.try_acquire()); // same thread, no deadlock
//! assert_eq!(lock.hold_count(), 2);
//! assert!(lock.release());
//! assert!(lock.release());
//! assert!(!lock.is_locked());
//! ```
//!
//! Prefer [`ReentrantLock::guard`] where possible so every path out of a
//! critical section releases its hold.

mod lock;

pub use lock::{
    InMemoryLockManager, Lock, LockError, LockManager, LockSet, LockStatus, OwnerId,
    ReentrantLock, ReentrantLockGuard,
};
