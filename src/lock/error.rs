use std::fmt;

use super::OwnerId;

/// Error type for lock operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockError {
    /// The underlying lock primitive was poisoned (e.g. a thread panicked while holding it).
    Poisoned(String),
    /// The calling thread tried to unlock a lock it does not hold.
    NotOwner {
        caller: OwnerId,
        owner: Option<OwnerId>,
    },
}

impl fmt::Display for LockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockError::Poisoned(msg) => write!(f, "lock poisoned: {}", msg),
            LockError::NotOwner {
                caller,
                owner: Some(owner),
            } => write!(f, "{} cannot unlock a lock held by {}", caller, owner),
            LockError::NotOwner {
                caller,
                owner: None,
            } => write!(f, "{} cannot unlock a lock nobody holds", caller),
        }
    }
}

impl std::error::Error for LockError {}
