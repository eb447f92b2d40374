#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;

use reentrant_lock::ReentrantLock;

/// Counter whose increment is a separate load and store, so concurrent
/// increments lose updates unless callers serialize them.
#[derive(Default)]
pub struct RacyCounter {
    value: AtomicUsize,
}

impl RacyCounter {
    pub fn increment(&self) {
        let current = self.value.load(Ordering::Relaxed);
        thread::yield_now();
        self.value.store(current + 1, Ordering::Relaxed);
    }

    pub fn get(&self) -> usize {
        self.value.load(Ordering::Relaxed)
    }
}

/// Spawn a thread that blocks in `acquire`, then reports and releases.
///
/// The first receiver fires once the thread is about to acquire, the second
/// once it got the lock.
pub fn spawn_acquirer(lock: &Arc<ReentrantLock>) -> (Receiver<()>, Receiver<()>) {
    let (tx_started, rx_started) = mpsc::channel();
    let (tx_got, rx_got) = mpsc::channel();
    let lock = Arc::clone(lock);
    thread::spawn(move || {
        tx_started.send(()).unwrap();
        lock.acquire();
        tx_got.send(()).unwrap();
        assert!(lock.release());
    });
    (rx_started, rx_got)
}
