//! Core Kernel - Foundational abstractions for the claim ledger
//!
//! This crate provides the building blocks shared by the contract, the
//! world-state adapters and the gateway:
//! - The world-state port (`get`, `put`, range scan) the ledger platform exposes
//! - Store errors reported by world-state adapters
//! - Ledger keys and transaction identifiers

pub mod error;
pub mod identifiers;
pub mod ports;

pub use error::StoreError;
pub use identifiers::{ClaimKey, TxId, CLAIM_KEY_PREFIX};
pub use ports::{KeyValue, RangeScan, StateIterator, WorldState};
