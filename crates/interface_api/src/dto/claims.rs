//! Claims DTOs

use core_kernel::TxId;
use domain_claims::Claim;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/claims`: the key plus the seven claim fields
#[derive(Debug, Deserialize)]
pub struct CreateClaimRequest {
    pub key: String,
    #[serde(flatten)]
    pub claim: Claim,
}

impl CreateClaimRequest {
    /// `createClaim` arguments: key first, then the fields in wire order
    pub fn into_args(self) -> Vec<String> {
        let mut args = Vec::with_capacity(8);
        args.push(self.key);
        args.extend(self.claim.into_fields());
        args
    }
}

#[derive(Debug, Serialize)]
pub struct CreateClaimResponse {
    pub key: String,
    pub tx_id: TxId,
}

#[derive(Debug, Serialize)]
pub struct LedgerInitResponse {
    pub tx_id: TxId,
    pub seeded: usize,
}
