//! World-State Test Doubles
//!
//! `FaultyWorldState` wraps the in-memory store and fails selected
//! operations, for exercising the contract's store-error paths.

use core_kernel::{KeyValue, StateIterator, StoreError, WorldState};
use infra_state::MemoryWorldState;

/// Which operations a [`FaultyWorldState`] fails
#[derive(Debug, Clone, Default)]
pub struct Faults {
    pub fail_get: bool,
    pub fail_put: bool,
    pub fail_scan: bool,
    /// Fail the `next_entry` call after this many successful ones
    pub fail_next_after: Option<usize>,
    pub fail_close: bool,
}

/// In-memory world state with injected failures
#[derive(Debug, Default)]
pub struct FaultyWorldState {
    inner: MemoryWorldState,
    faults: Faults,
}

impl FaultyWorldState {
    pub fn new(inner: MemoryWorldState, faults: Faults) -> Self {
        Self { inner, faults }
    }

    pub fn failing_reads() -> Self {
        Self::new(MemoryWorldState::new(), Faults { fail_get: true, ..Faults::default() })
    }

    pub fn failing_writes() -> Self {
        Self::new(MemoryWorldState::new(), Faults { fail_put: true, ..Faults::default() })
    }

    pub fn failing_scans(inner: MemoryWorldState) -> Self {
        Self::new(inner, Faults { fail_scan: true, ..Faults::default() })
    }

    pub fn failing_iteration(inner: MemoryWorldState, after: usize) -> Self {
        Self::new(inner, Faults { fail_next_after: Some(after), ..Faults::default() })
    }

    /// The wrapped store
    pub fn inner(&self) -> &MemoryWorldState {
        &self.inner
    }
}

impl WorldState for FaultyWorldState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if self.faults.fail_get {
            return Err(StoreError::unavailable(format!("read of {} refused", key)));
        }
        self.inner.get_state(key)
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        if self.faults.fail_put {
            return Err(StoreError::unavailable(format!("write of {} refused", key)));
        }
        self.inner.put_state(key, value)
    }

    fn get_state_by_range<'a>(
        &'a self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Box<dyn StateIterator + 'a>, StoreError> {
        if self.faults.fail_scan {
            return Err(StoreError::iterator("range query rejected by peer"));
        }
        let inner = self.inner.get_state_by_range(start_key, end_key)?;
        Ok(Box::new(FaultyIterator {
            inner,
            served: 0,
            fail_next_after: self.faults.fail_next_after,
            fail_close: self.faults.fail_close,
        }))
    }
}

struct FaultyIterator<'a> {
    inner: Box<dyn StateIterator + 'a>,
    served: usize,
    fail_next_after: Option<usize>,
    fail_close: bool,
}

impl StateIterator for FaultyIterator<'_> {
    fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    fn next_entry(&mut self) -> Result<KeyValue, StoreError> {
        if self.fail_next_after == Some(self.served) {
            return Err(StoreError::iterator(format!("cursor lost after {} entries", self.served)));
        }
        self.served += 1;
        self.inner.next_entry()
    }

    fn close(&mut self) -> Result<(), StoreError> {
        self.inner.close()?;
        if self.fail_close {
            return Err(StoreError::iterator("close acknowledged late"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failing_iteration_still_releases() {
        let state = FaultyWorldState::failing_iteration(
            MemoryWorldState::with_entries([("a", "1"), ("b", "2")]),
            1,
        );
        let mut iterator = state.get_state_by_range("", "").unwrap();
        assert!(iterator.next_entry().is_ok());
        assert!(iterator.next_entry().is_err());
        iterator.close().unwrap();
        assert_eq!(state.inner().open_iterators(), 0);
    }
}
