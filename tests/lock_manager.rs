//! Keyed locking through `InMemoryLockManager`.

mod common;

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use common::RacyCounter;
use reentrant_lock::{InMemoryLockManager, Lock, LockError, LockManager, OwnerId};

#[test]
fn keys_lock_independently() {
    let manager = Arc::new(InMemoryLockManager::new());
    let a = manager.get_lock("a").unwrap();
    a.lock().unwrap();

    let other = Arc::clone(&manager);
    let (got_a, got_b) = thread::spawn(move || {
        let b = other.get_lock("b").unwrap();
        let got_b = b.try_lock().unwrap();
        b.unlock().unwrap();
        (other.get_lock("a").unwrap().try_lock().unwrap(), got_b)
    })
    .join()
    .unwrap();

    assert!(!got_a);
    assert!(got_b);
    a.unlock().unwrap();
}

#[test]
fn unlock_from_wrong_thread_reports_owner() {
    let manager = Arc::new(InMemoryLockManager::new());
    let lock = manager.get_lock("order-1").unwrap();
    lock.lock().unwrap();
    let me = OwnerId::current();

    let other = Arc::clone(&manager);
    let (caller, err) = thread::spawn(move || {
        let err = other.get_lock("order-1").unwrap().unlock().unwrap_err();
        (OwnerId::current(), err)
    })
    .join()
    .unwrap();

    assert_eq!(
        err,
        LockError::NotOwner {
            caller,
            owner: Some(me),
        }
    );
    assert!(err.to_string().contains("cannot unlock a lock held by"));
    lock.unlock().unwrap();
}

#[test]
fn overlapping_lock_all_calls_do_not_deadlock() {
    const ROUNDS: usize = 200;

    let manager = Arc::new(InMemoryLockManager::new());
    let counter = Arc::new(RacyCounter::default());

    let spawn = |ids: [&'static str; 3]| {
        let manager = Arc::clone(&manager);
        let counter = Arc::clone(&counter);
        thread::spawn(move || {
            for _ in 0..ROUNDS {
                let _set = manager.lock_all(&ids).unwrap();
                counter.increment();
            }
        })
    };

    let forward = spawn(["k1", "k2", "k3"]);
    let backward = spawn(["k3", "k2", "k1"]);

    let (tx_done, rx_done) = mpsc::channel();
    thread::spawn(move || {
        forward.join().unwrap();
        backward.join().unwrap();
        tx_done.send(()).unwrap();
    });

    assert!(rx_done.recv_timeout(Duration::from_secs(30)).is_ok());
    assert_eq!(counter.get(), 2 * ROUNDS);
}

#[test]
fn lock_all_is_reentrant_with_held_keys() {
    let manager = InMemoryLockManager::new();
    let a = manager.get_lock("a").unwrap();
    let _held = a.guard();

    let set = manager.lock_all(&["a", "b"]).unwrap();
    assert_eq!(a.hold_count(), 2);
    drop(set);
    assert_eq!(a.hold_count(), 1);
}
