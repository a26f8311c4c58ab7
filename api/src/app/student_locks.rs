//! Per-student critical sections
//!
//! Serializes the read-modify-write of a student's stats so two concurrent
//! merges for the same student cannot lose an update.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::entities::StudentId;

/// Keyed async mutexes, one per student currently being merged
#[derive(Default)]
pub struct StudentLocks {
    locks: Mutex<HashMap<StudentId, Arc<AsyncMutex<()>>>>,
}

impl StudentLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to a student's stats.
    ///
    /// Merges for different students never block each other.
    pub async fn lock(&self, student_id: StudentId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            // Drop entries nobody holds or waits on
            locks.retain(|_, l| Arc::strong_count(l) > 1);
            locks.entry(student_id).or_default().clone()
        };
        lock.lock_owned().await
    }

    #[cfg(test)]
    pub fn tracked(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_student_is_exclusive() {
        let locks = StudentLocks::new();
        let _held = locks.lock(StudentId(1)).await;

        let second = tokio::time::timeout(Duration::from_millis(50), locks.lock(StudentId(1))).await;

        assert!(second.is_err(), "second lock should wait while first is held");
    }

    #[tokio::test]
    async fn different_students_do_not_block() {
        let locks = StudentLocks::new();
        let _a = locks.lock(StudentId(1)).await;

        let b = tokio::time::timeout(Duration::from_millis(50), locks.lock(StudentId(2))).await;

        assert!(b.is_ok());
    }

    #[tokio::test]
    async fn released_locks_are_pruned() {
        let locks = StudentLocks::new();
        {
            let _a = locks.lock(StudentId(1)).await;
        }
        let _b = locks.lock(StudentId(2)).await;

        assert_eq!(locks.tracked(), 1);
    }
}
