//! Generic invocation DTOs

use core_kernel::TxId;
use domain_claims::Status;
use serde::{Deserialize, Serialize};

use crate::peer::Invocation;

#[derive(Debug, Deserialize)]
pub struct InvokeRequest {
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
}

/// The contract's response envelope; the payload is rendered as text
#[derive(Debug, Serialize)]
pub struct InvokeResponse {
    pub tx_id: TxId,
    pub status: Status,
    pub message: String,
    pub payload: String,
}

impl From<Invocation> for InvokeResponse {
    fn from(invocation: Invocation) -> Self {
        let response = invocation.response;
        Self {
            tx_id: invocation.tx_id,
            status: response.status,
            message: response.message,
            payload: String::from_utf8_lossy(&response.payload).into_owned(),
        }
    }
}
