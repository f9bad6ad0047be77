use super::QuotesStore;
use crate::quotes::types::{QuoteError, QuoteId, QuoteRecord};

use rand::Rng;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// State guarded by the store lock.
///
/// Every key in `records` equals the `id` of its value, and `last_id` is the
/// largest identifier ever issued (deleted ones included).
#[derive(Debug, Default)]
struct StoreState {
    last_id: u64,
    records: HashMap<QuoteId, QuoteRecord>,
}

/// Process-memory quote store.
///
/// All access goes through one exclusive lock. Critical sections are a map
/// lookup, insert or remove plus at most one random draw, so readers and
/// writers share the same lock.
#[derive(Debug, Default)]
pub struct MemoryQuotesStore {
    state: Mutex<StoreState>,
}

impl MemoryQuotesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose next identifier will be `last_id + 1`.
    #[cfg(test)]
    pub(crate) fn with_last_id(last_id: u64) -> Self {
        Self {
            state: Mutex::new(StoreState {
                last_id,
                records: HashMap::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().records.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // No critical section can leave the state half-written, so a
        // poisoned guard is still consistent.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl QuotesStore for MemoryQuotesStore {
    fn create(&self, author: String, text: String) -> Result<QuoteId, QuoteError> {
        let mut state = self.lock();

        let next = state
            .last_id
            .checked_add(1)
            .ok_or(QuoteError::CapacityExceeded)?;
        state.last_id = next;

        let id = QuoteId(next);
        state.records.insert(id, QuoteRecord { id, author, text });

        tracing::debug!("Stored quote {} ({} total)", id, state.records.len());
        Ok(id)
    }

    fn get_all(&self) -> Vec<QuoteRecord> {
        self.lock().records.values().cloned().collect()
    }

    fn get_by_author(&self, author: &str) -> Vec<QuoteRecord> {
        self.lock()
            .records
            .values()
            .filter(|record| record.author == author)
            .cloned()
            .collect()
    }

    fn get_random(&self) -> Result<QuoteRecord, QuoteError> {
        let state = self.lock();

        let count = state.records.len();
        if count == 0 {
            return Err(QuoteError::EmptyStore);
        }

        let idx = rand::thread_rng().gen_range(0..count);
        state
            .records
            .values()
            .nth(idx)
            .cloned()
            .ok_or(QuoteError::EmptyStore)
    }

    fn delete(&self, id: QuoteId) -> Result<(), QuoteError> {
        let mut state = self.lock();

        if state.records.remove(&id).is_none() {
            return Err(QuoteError::NotFound);
        }

        tracing::debug!("Deleted quote {} ({} left)", id, state.records.len());
        Ok(())
    }
}
