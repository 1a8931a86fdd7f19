//! Ordered in-memory world state
//!
//! Keys are kept in a `BTreeMap`, so range scans come back in ascending
//! lexical key order, the same order the platform's state database uses.

use std::collections::{BTreeMap, VecDeque};
use std::ops::Bound;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use core_kernel::{KeyValue, StateIterator, StoreError, WorldState};
use tracing::trace;

/// In-memory implementation of [`WorldState`]
///
/// Range iterators work on a snapshot taken when the scan is opened. The store
/// counts iterators that were opened but not yet closed so callers can verify
/// that every scan was released.
#[derive(Debug, Default)]
pub struct MemoryWorldState {
    entries: BTreeMap<String, Vec<u8>>,
    open_iterators: Arc<AtomicUsize>,
}

impl MemoryWorldState {
    /// Creates an empty world state
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a world state pre-populated with `entries`
    pub fn with_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Vec<u8>>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            open_iterators: Arc::default(),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys in ascending order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of range iterators opened and not yet closed
    pub fn open_iterators(&self) -> usize {
        self.open_iterators.load(Ordering::SeqCst)
    }
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty() {
        return Err(StoreError::invalid_key("key must not be empty"));
    }
    Ok(())
}

impl WorldState for MemoryWorldState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        validate_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        validate_key(key)?;
        trace!(key, bytes = value.len(), "put state");
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn get_state_by_range<'a>(
        &'a self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Box<dyn StateIterator + 'a>, StoreError> {
        if !start_key.is_empty() && !end_key.is_empty() && start_key > end_key {
            return Err(StoreError::iterator(format!(
                "start key {:?} sorts after end key {:?}",
                start_key, end_key
            )));
        }

        let lower = if start_key.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start_key)
        };
        let upper = if end_key.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end_key)
        };

        let snapshot: VecDeque<KeyValue> = self
            .entries
            .range::<str, _>((lower, upper))
            .map(|(key, value)| KeyValue::new(key.clone(), value.clone()))
            .collect();

        trace!(start_key, end_key, matched = snapshot.len(), "opened range scan");
        self.open_iterators.fetch_add(1, Ordering::SeqCst);

        Ok(Box::new(MemoryStateIterator {
            remaining: snapshot,
            closed: false,
            open_iterators: Arc::clone(&self.open_iterators),
        }))
    }
}

/// Iterator over a snapshot of matching entries
#[derive(Debug)]
pub struct MemoryStateIterator {
    remaining: VecDeque<KeyValue>,
    closed: bool,
    open_iterators: Arc<AtomicUsize>,
}

impl StateIterator for MemoryStateIterator {
    fn has_next(&self) -> bool {
        !self.closed && !self.remaining.is_empty()
    }

    fn next_entry(&mut self) -> Result<KeyValue, StoreError> {
        if self.closed {
            return Err(StoreError::IteratorClosed);
        }
        self.remaining
            .pop_front()
            .ok_or(StoreError::IteratorExhausted)
    }

    fn close(&mut self) -> Result<(), StoreError> {
        if self.closed {
            return Err(StoreError::IteratorClosed);
        }
        self.closed = true;
        self.remaining.clear();
        self.open_iterators.fetch_sub(1, Ordering::SeqCst);
        Ok(())
    }
}
