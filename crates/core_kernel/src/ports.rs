//! World-State Port
//!
//! The ledger platform owns persistence; the contract only sees the three
//! primitive operations defined here. Adapters implement [`WorldState`]:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │     Claim Ledger Contract    │
//! └──────────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────┐
//! │     WorldState (this port)   │
//! │  get / put / range scan      │
//! └──────────────────────────────┘
//!        ▲                 ▲
//!        │                 │
//! ┌──────┴───────┐  ┌──────┴────────┐
//! │  In-memory   │  │ Peer-backed   │
//! │ (infra_state)│  │ (platform)    │
//! └──────────────┘  └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut scan = RangeScan::open(&state, "", "")?;
//! for entry in &mut scan {
//!     let entry = entry?;
//!     println!("{} => {} bytes", entry.key, entry.value.len());
//! }
//! // the iterator is closed here, or on any early return above
//! ```

use crate::error::StoreError;

/// A single entry yielded by a range scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Vec<u8>,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Cursor over the results of a range scan
///
/// Mirrors the platform protocol: `has_next` / `next_entry`, plus an explicit
/// `close` that releases the underlying resources.
pub trait StateIterator {
    /// Returns true if another entry is available
    fn has_next(&self) -> bool;

    /// Advances the cursor and returns the next entry
    fn next_entry(&mut self) -> Result<KeyValue, StoreError>;

    /// Releases the iterator
    fn close(&mut self) -> Result<(), StoreError>;
}

/// The key-value world state exposed by the ledger platform
pub trait WorldState {
    /// Reads the value stored under `key`
    ///
    /// A missing key is `Ok(None)`, not an error.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Writes `value` under `key`, replacing any previous value
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Opens an iterator over keys in `[start_key, end_key)` in ascending
    /// order. An empty bound leaves that side of the range open.
    fn get_state_by_range<'a>(
        &'a self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Box<dyn StateIterator + 'a>, StoreError>;
}

/// A range scan whose iterator is closed exactly once, on every exit path
///
/// Call [`RangeScan::close`] to observe close errors; otherwise the iterator
/// is closed on drop and a failure is only logged.
pub struct RangeScan<'a> {
    inner: Box<dyn StateIterator + 'a>,
    closed: bool,
}

impl<'a> RangeScan<'a> {
    /// Opens a range scan over `state`
    pub fn open<S: WorldState + ?Sized>(
        state: &'a S,
        start_key: &str,
        end_key: &str,
    ) -> Result<Self, StoreError> {
        let inner = state.get_state_by_range(start_key, end_key)?;
        Ok(Self::new(inner))
    }

    /// Takes ownership of an already opened iterator
    pub fn new(inner: Box<dyn StateIterator + 'a>) -> Self {
        Self {
            inner,
            closed: false,
        }
    }

    /// Closes the iterator, reporting any error from the store
    pub fn close(mut self) -> Result<(), StoreError> {
        self.closed = true;
        self.inner.close()
    }
}

impl Iterator for RangeScan<'_> {
    type Item = Result<KeyValue, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.closed || !self.inner.has_next() {
            return None;
        }
        Some(self.inner.next_entry())
    }
}

impl Drop for RangeScan<'_> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(error) = self.inner.close() {
            tracing::warn!(%error, "failed to close range scan iterator");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingIterator {
        entries: Vec<KeyValue>,
        closes: Rc<Cell<u32>>,
    }

    impl StateIterator for CountingIterator {
        fn has_next(&self) -> bool {
            !self.entries.is_empty()
        }

        fn next_entry(&mut self) -> Result<KeyValue, StoreError> {
            if self.entries.is_empty() {
                return Err(StoreError::IteratorExhausted);
            }
            Ok(self.entries.remove(0))
        }

        fn close(&mut self) -> Result<(), StoreError> {
            self.closes.set(self.closes.get() + 1);
            Ok(())
        }
    }

    fn scan(entries: Vec<KeyValue>, closes: &Rc<Cell<u32>>) -> RangeScan<'static> {
        RangeScan::new(Box::new(CountingIterator {
            entries,
            closes: Rc::clone(closes),
        }))
    }

    #[test]
    fn test_range_scan_yields_in_order() {
        let closes = Rc::new(Cell::new(0));
        let keys: Vec<String> = scan(
            vec![KeyValue::new("a", "1"), KeyValue::new("b", "2")],
            &closes,
        )
        .map(|entry| entry.unwrap().key)
        .collect();

        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_range_scan_closed_on_drop() {
        let closes = Rc::new(Cell::new(0));
        {
            let mut range = scan(vec![KeyValue::new("a", "1")], &closes);
            let _ = range.next();
        }
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_range_scan_explicit_close_runs_once() {
        let closes = Rc::new(Cell::new(0));
        let range = scan(vec![], &closes);
        range.close().unwrap();
        assert_eq!(closes.get(), 1);
    }
}
