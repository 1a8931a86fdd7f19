//! Claim Ledger Contract
//!
//! This crate implements the chaincode that manages claim records in a
//! ledger's key-value world state. The platform hands every invocation to
//! [`Chaincode::invoke`] as a function name plus string arguments:
//!
//! ```text
//! queryClaim(key)                         -> raw record bytes (empty if absent)
//! initLedger()                            -> seeds CLAIM0
//! createClaim(key, f1, ..., f7)           -> writes one record
//! queryAllClaims()                        -> [{"Key":..., "Record":...}, ...]
//! ```
//!
//! # Example
//!
//! ```rust
//! use domain_claims::{Chaincode, ClaimContract};
//! use infra_state::MemoryWorldState;
//!
//! let contract = ClaimContract::default();
//! let mut state = MemoryWorldState::new();
//!
//! assert!(contract.invoke(&mut state, "initLedger", &[]).is_ok());
//! let response = contract.invoke(&mut state, "queryClaim", &["CLAIM0".to_string()]);
//! assert!(!response.payload.is_empty());
//! ```

pub mod claim;
pub mod command;
pub mod config;
pub mod contract;
pub mod error;
pub mod query;
pub mod response;

pub use claim::{seed_claims, Claim, CLAIM_FIELD_COUNT};
pub use command::Function;
pub use config::{ContractConfig, ScanScope};
pub use contract::{Chaincode, ClaimContract};
pub use error::ContractError;
pub use query::QueryResultBuffer;
pub use response::{Response, Status};
