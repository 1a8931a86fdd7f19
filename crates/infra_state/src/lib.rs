//! World-State Infrastructure
//!
//! This crate provides world-state adapters for running the claim ledger
//! contract outside a ledger peer: an ordered in-memory key-value store that
//! implements `core_kernel::WorldState`.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::WorldState;
//! use infra_state::MemoryWorldState;
//!
//! let mut state = MemoryWorldState::new();
//! state.put_state("CLAIM0", b"{}".to_vec()).unwrap();
//! assert_eq!(state.get_state("CLAIM0").unwrap(), Some(b"{}".to_vec()));
//! ```

pub mod memory;

pub use memory::{MemoryStateIterator, MemoryWorldState};
