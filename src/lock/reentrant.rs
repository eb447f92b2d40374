use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{Lock, LockError, OwnerId};

/// Point-in-time view of a [`ReentrantLock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockStatus {
    pub owner: Option<OwnerId>,
    pub hold_count: usize,
}

#[derive(Debug, Default)]
struct State {
    owner: Option<OwnerId>,
    holds: usize,
}

impl State {
    fn try_take(&mut self, caller: OwnerId) -> bool {
        match self.owner {
            None => {
                self.owner = Some(caller);
                self.holds = 1;
                true
            }
            Some(owner) if owner == caller => {
                self.holds += 1;
                true
            }
            Some(_) => false,
        }
    }
}

/// A lock that the owning thread may take again without deadlocking itself.
///
/// Every successful acquisition must be matched by one [`release`](Self::release)
/// from the same thread; the lock becomes free for other threads only once the
/// hold count drops back to zero. Waiters are woken all at once and race for
/// the lock, no arrival order is kept.
///
/// The owner/hold-count pair lives behind a `Mutex` + `Condvar`. Those critical
/// sections never run caller code, so a poisoned internal mutex carries no
/// broken state and is simply recovered.
#[derive(Debug)]
pub struct ReentrantLock {
    state: Mutex<State>,
    wake: Condvar,
}

impl ReentrantLock {
    pub fn new() -> Self {
        ReentrantLock {
            state: Mutex::new(State::default()),
            wake: Condvar::new(),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Take the lock if it is free or already held by the calling thread.
    ///
    /// Returns `false` without touching the lock when another thread holds it.
    pub fn try_acquire(&self) -> bool {
        let caller = OwnerId::current();
        self.state().try_take(caller)
    }

    /// Take the lock, blocking until the current owner has fully released it.
    ///
    /// There is no timeout. Spurious wakeups are retried, so this only returns
    /// once the calling thread owns the lock.
    pub fn acquire(&self) {
        let caller = OwnerId::current();
        let mut state = self.state();
        while !state.try_take(caller) {
            trace!(%caller, owner = ?state.owner, "lock contended, waiting");
            state = self
                .wake
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
        trace!(%caller, holds = state.holds, "lock acquired");
    }

    /// Give back one hold.
    ///
    /// Returns `false`, leaving the lock untouched, when the calling thread is
    /// not the owner. Dropping the last hold frees the lock and wakes every
    /// waiting thread.
    pub fn release(&self) -> bool {
        let caller = OwnerId::current();
        match self.give_back(caller) {
            Ok(()) => true,
            Err(owner) => {
                debug!(%caller, ?owner, "release rejected, caller does not hold the lock");
                false
            }
        }
    }

    /// Drop one hold taken by `caller`, or report the actual owner.
    fn give_back(&self, caller: OwnerId) -> Result<(), Option<OwnerId>> {
        let mut state = self.state();
        if state.owner != Some(caller) {
            return Err(state.owner);
        }

        state.holds -= 1;
        if state.holds == 0 {
            state.owner = None;
            drop(state);
            trace!(%caller, "lock freed, waking waiters");
            self.wake.notify_all();
        }
        Ok(())
    }

    /// Number of acquisitions by the owner not yet matched by a release.
    pub fn hold_count(&self) -> usize {
        self.state().holds
    }

    pub fn owner(&self) -> Option<OwnerId> {
        self.state().owner
    }

    pub fn is_locked(&self) -> bool {
        self.state().owner.is_some()
    }

    pub fn is_held_by_current_thread(&self) -> bool {
        self.state().owner == Some(OwnerId::current())
    }

    pub fn status(&self) -> LockStatus {
        let state = self.state();
        LockStatus {
            owner: state.owner,
            hold_count: state.holds,
        }
    }
}

impl Default for ReentrantLock {
    fn default() -> Self {
        Self::new()
    }
}

impl Lock for ReentrantLock {
    fn lock(&self) -> Result<(), LockError> {
        self.acquire();
        Ok(())
    }

    fn try_lock(&self) -> Result<bool, LockError> {
        Ok(self.try_acquire())
    }

    fn unlock(&self) -> Result<(), LockError> {
        let caller = OwnerId::current();
        self.give_back(caller)
            .map_err(|owner| LockError::NotOwner { caller, owner })
    }
}
