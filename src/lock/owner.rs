use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_OWNER_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static CURRENT: OwnerId = OwnerId(NEXT_OWNER_ID.fetch_add(1, Ordering::Relaxed));
}

/// Identity of a thread as seen by the locks in this crate.
///
/// Ids are handed out lazily, the first time a thread asks for one, and are
/// never reused within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(u64);

impl OwnerId {
    /// The id of the calling thread.
    pub fn current() -> Self {
        CURRENT.with(|id| *id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "thread#{}", self.0)
    }
}
