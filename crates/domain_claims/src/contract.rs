//! Claim ledger contract
//!
//! Each invocation is resolved into a [`Function`] and handled with exactly
//! one store operation (or one range scan). Nothing is cached between
//! invocations; the world state is the only state.

use core_kernel::{ClaimKey, RangeScan, WorldState};
use tracing::{debug, info, warn};

use crate::claim::{seed_claims, Claim};
use crate::command::Function;
use crate::config::ContractConfig;
use crate::error::ContractError;
use crate::query::QueryResultBuffer;
use crate::response::Response;

/// Interface the ledger platform drives a contract through
pub trait Chaincode {
    /// Called once when the contract is instantiated
    fn init(&self, state: &mut dyn WorldState, args: &[String]) -> Response;

    /// Called for every transaction or query submitted to the contract
    fn invoke(&self, state: &mut dyn WorldState, function: &str, args: &[String]) -> Response;
}

/// Contract managing claim records
#[derive(Debug, Clone, Default)]
pub struct ClaimContract {
    config: ContractConfig,
}

impl ClaimContract {
    pub fn new(config: ContractConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    /// Resolves and runs one invocation, returning the success payload
    pub fn execute(
        &self,
        state: &mut dyn WorldState,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        let function: Function = function.parse()?;
        function.check_args(args)?;
        debug!(%function, args = args.len(), "dispatching invocation");

        match function {
            Function::QueryClaim => self.query_claim(state, &args[0]),
            Function::InitLedger => self.init_ledger(state),
            Function::CreateClaim => self.create_claim(state, &args[0], &args[1..]),
            Function::QueryAllClaims => self.query_all_claims(state),
        }
    }

    fn query_claim(&self, state: &dyn WorldState, key: &str) -> Result<Vec<u8>, ContractError> {
        match state.get_state(key) {
            Ok(value) => Ok(value.unwrap_or_default()),
            Err(error) if self.config.strict_store_errors => Err(error.into()),
            Err(error) => {
                warn!(key, %error, "read failed, answering as absent key");
                Ok(Vec::new())
            }
        }
    }

    fn init_ledger(&self, state: &mut dyn WorldState) -> Result<Vec<u8>, ContractError> {
        for (index, claim) in seed_claims().into_iter().enumerate() {
            let key = ClaimKey::seeded(index);
            let bytes = claim.to_bytes()?;
            self.write(state, key.as_str(), bytes)?;
            info!(%key, service = %claim.service_performed, "added seed claim");
        }
        Ok(Vec::new())
    }

    fn create_claim(
        &self,
        state: &mut dyn WorldState,
        key: &str,
        fields: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        let claim = Claim::from_fields(fields)?;
        self.write(state, key, claim.to_bytes()?)?;
        debug!(key, "stored claim");
        Ok(Vec::new())
    }

    fn query_all_claims(&self, state: &dyn WorldState) -> Result<Vec<u8>, ContractError> {
        let (start_key, end_key) = self.config.scan_scope.bounds();
        let mut scan = RangeScan::open(state, &start_key, &end_key)?;

        let mut results = QueryResultBuffer::new();
        for entry in &mut scan {
            let entry = entry?;
            results.push(&entry.key, &entry.value);
        }
        if let Err(error) = scan.close() {
            warn!(%error, "failed to close range scan iterator, returning results");
        }

        let payload = results.finish();
        debug!(payload = %String::from_utf8_lossy(&payload), "queryAllClaims");
        Ok(payload)
    }

    /// Writes one value, ignoring store failures unless configured strict
    fn write(
        &self,
        state: &mut dyn WorldState,
        key: &str,
        value: Vec<u8>,
    ) -> Result<(), ContractError> {
        match state.put_state(key, value) {
            Ok(()) => Ok(()),
            Err(error) if self.config.strict_store_errors => Err(error.into()),
            Err(error) => {
                warn!(key, %error, "write failed, ignoring");
                Ok(())
            }
        }
    }
}

impl Chaincode for ClaimContract {
    fn init(&self, _state: &mut dyn WorldState, _args: &[String]) -> Response {
        Response::success(Vec::new())
    }

    fn invoke(&self, state: &mut dyn WorldState, function: &str, args: &[String]) -> Response {
        let result = self.execute(state, function, args);
        if let Err(error) = &result {
            warn!(function, %error, "invocation failed");
        }
        result.into()
    }
}
