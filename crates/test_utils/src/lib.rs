//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claim ledger test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claim records and invocation arguments
//! - `builders`: Builder for `createClaim` argument lists
//! - `stores`: World-state doubles that inject store failures
//! - `assertions`: Assertion helpers for contract responses
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod stores;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use stores::*;
pub use assertions::*;
pub use generators::*;
