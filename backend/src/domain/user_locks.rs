//! Per-user mutual exclusion for read-modify-write cycles.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::UserId;

type Slot = Arc<AsyncMutex<()>>;

/// Registry handing out one async mutex per user.
///
/// Holding the guard across load, scoring and save serialises updates for a
/// single user while other users proceed in parallel. A slot only lives while
/// someone holds or waits for it, so the map tracks active writers rather
/// than every user ever seen.
#[derive(Debug, Default)]
pub struct UserLocks {
    slots: Mutex<HashMap<UserId, Slot>>,
}

/// Exclusive access to one user's data; releasing it prunes an idle slot.
#[derive(Debug)]
pub struct UserLockGuard<'a> {
    locks: &'a UserLocks,
    user_id: UserId,
    guard: Option<OwnedMutexGuard<()>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `user_id`'s data.
    pub async fn lock(&self, user_id: &UserId) -> UserLockGuard<'_> {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(user_id.clone()).or_default())
        };
        UserLockGuard {
            locks: self,
            user_id: user_id.clone(),
            guard: Some(slot.lock_owned().await),
        }
    }

    /// Number of users currently holding or waiting for a lock.
    pub fn tracked_users(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn release(&self, user_id: &UserId) {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        // Waiters clone the slot under this map lock, so a count of one
        // means nobody else can reach it.
        let idle = slots
            .get(user_id)
            .is_some_and(|slot| Arc::strong_count(slot) == 1);
        if idle {
            slots.remove(user_id);
        }
    }
}

impl Drop for UserLockGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        self.locks.release(&self.user_id);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn same_user_waits_for_release() {
        let locks = Arc::new(UserLocks::new());
        let user = UserId::random();
        let guard = locks.lock(&user).await;

        let contender = {
            let locks = Arc::clone(&locks);
            let user = user.clone();
            tokio::spawn(async move {
                let _guard = locks.lock(&user).await;
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!contender.is_finished());

        drop(guard);
        tokio::time::timeout(Duration::from_secs(1), contender)
            .await
            .expect("contender acquires after release")
            .expect("task completes");
    }

    #[rstest]
    #[tokio::test]
    async fn different_users_do_not_contend() {
        let locks = UserLocks::new();
        let first = UserId::random();
        let second = UserId::random();

        let _held = locks.lock(&first).await;
        let other = tokio::time::timeout(Duration::from_millis(200), locks.lock(&second)).await;

        assert!(other.is_ok());
        assert_eq!(locks.tracked_users(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn released_slots_are_pruned() {
        let locks = UserLocks::new();
        for _ in 0..5 {
            let _guard = locks.lock(&UserId::random()).await;
        }

        assert_eq!(locks.tracked_users(), 0);
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn slot_survives_while_a_waiter_remains() {
        let locks = Arc::new(UserLocks::new());
        let user = UserId::random();
        let guard = locks.lock(&user).await;

        let waiter = {
            let locks = Arc::clone(&locks);
            let user = user.clone();
            tokio::spawn(async move {
                let _guard = locks.lock(&user).await;
                tokio::time::sleep(Duration::from_millis(20)).await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        drop(guard);
        assert_eq!(locks.tracked_users(), 1);

        waiter.await.expect("waiter completes");
        assert_eq!(locks.tracked_users(), 0);
    }
}
