// Pending fetch tracker - per-instance completion barrier for a fetch cycle
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchProgress {
    Remaining(i64),
    /// The last outstanding task finished; the entry has been removed
    Drained,
    /// Nothing was pending for the instance
    NotTracked,
}

/// In-flight request counts keyed by instance id.
///
/// Keyed by instance only, not by cycle: a task left over from a superseded
/// cycle still counts against the instance's current cycle.
#[derive(Debug, Clone, Default)]
pub struct PendingFetches {
    counts: Arc<Mutex<HashMap<String, i64>>>,
}

impl PendingFetches {
    pub fn new() -> Self {
        Self::default()
    }

    fn counts(&self) -> MutexGuard<'_, HashMap<String, i64>> {
        self.counts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn begin_cycle(&self, unique_id: &str) {
        self.counts().insert(unique_id.to_string(), 0);
    }

    pub fn add(&self, unique_id: &str) -> i64 {
        let mut counts = self.counts();
        let count = counts.entry(unique_id.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    pub fn complete(&self, unique_id: &str) -> FetchProgress {
        let mut counts = self.counts();
        let remaining = match counts.get_mut(unique_id) {
            Some(count) if *count > 0 => {
                *count -= 1;
                *count
            }
            _ => return FetchProgress::NotTracked,
        };

        if remaining <= 0 {
            counts.remove(unique_id);
            FetchProgress::Drained
        } else {
            FetchProgress::Remaining(remaining)
        }
    }

    pub fn clear(&self, unique_id: &str) {
        self.counts().remove(unique_id);
    }

    pub fn pending(&self, unique_id: &str) -> Option<i64> {
        self.counts().get(unique_id).copied()
    }
}
