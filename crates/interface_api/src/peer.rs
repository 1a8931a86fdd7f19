//! In-process peer
//!
//! Hosts the claim contract over an in-memory world state. Invocations are
//! serialized by a single lock, standing in for the platform's transaction
//! isolation; each one gets its own transaction id and tracing span.

use core_kernel::TxId;
use domain_claims::{Chaincode, ClaimContract, ContractError, Function, Response};
use infra_state::MemoryWorldState;
use tokio::sync::Mutex;
use tracing::{debug, info_span};

/// Result of a submitted invocation
#[derive(Debug, Clone)]
pub struct Invocation {
    pub tx_id: TxId,
    pub response: Response,
}

/// Contract plus the world state it runs against
#[derive(Debug)]
pub struct Peer {
    contract: ClaimContract,
    state: Mutex<MemoryWorldState>,
}

impl Peer {
    pub fn new(contract: ClaimContract, state: MemoryWorldState) -> Self {
        Self {
            contract,
            state: Mutex::new(state),
        }
    }

    pub fn contract(&self) -> &ClaimContract {
        &self.contract
    }

    /// Instantiates the contract
    pub async fn instantiate(&self, args: &[String]) -> Invocation {
        let tx_id = TxId::new_v7();
        let mut state = self.state.lock().await;
        let response = info_span!("init", %tx_id)
            .in_scope(|| self.contract.init(&mut *state, args));
        Invocation { tx_id, response }
    }

    /// Submits an invocation by name and returns the platform envelope
    pub async fn submit(&self, function: &str, args: &[String]) -> Invocation {
        let tx_id = TxId::new_v7();
        let mut state = self.state.lock().await;
        let response = info_span!("invoke", %tx_id, function)
            .in_scope(|| self.contract.invoke(&mut *state, function, args));
        debug!(%tx_id, status = response.status.code(), "invocation complete");
        Invocation { tx_id, response }
    }

    /// Runs a resolved function and returns its typed result
    pub async fn execute(
        &self,
        function: Function,
        args: &[String],
    ) -> Result<(TxId, Vec<u8>), ContractError> {
        let tx_id = TxId::new_v7();
        let mut state = self.state.lock().await;
        let payload = info_span!("invoke", %tx_id, function = function.name())
            .in_scope(|| self.contract.execute(&mut *state, function.name(), args))?;
        Ok((tx_id, payload))
    }

    /// Number of keys currently in the world state
    pub async fn key_count(&self) -> usize {
        self.state.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_assigns_distinct_tx_ids() {
        let peer = Peer::new(ClaimContract::default(), MemoryWorldState::new());

        let first = peer.submit("initLedger", &[]).await;
        let second = peer.submit("queryAllClaims", &[]).await;

        assert!(first.response.is_ok());
        assert!(second.response.is_ok());
        assert_ne!(first.tx_id, second.tx_id);
        assert_eq!(peer.key_count().await, 1);
    }

    #[tokio::test]
    async fn test_instantiate_leaves_state_empty() {
        let peer = Peer::new(ClaimContract::default(), MemoryWorldState::new());

        assert!(peer.instantiate(&[]).await.response.is_ok());
        assert_eq!(peer.key_count().await, 0);
    }
}
