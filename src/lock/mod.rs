mod error;
mod guard;
mod in_memory;
#[allow(clippy::module_inception)]
mod lock;
mod lock_manager;
mod owner;
mod reentrant;

pub use error::LockError;
pub use guard::ReentrantLockGuard;
pub use in_memory::{InMemoryLockManager, LockSet};
pub use lock::Lock;
pub use lock_manager::LockManager;
pub use owner::OwnerId;
pub use reentrant::{LockStatus, ReentrantLock};
