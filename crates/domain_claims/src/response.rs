//! Invocation response envelope

use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// Outcome status of an invocation, using the platform's numeric codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Status {
    Ok,
    Error,
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::Error => 500,
        }
    }
}

impl From<Status> for u16 {
    fn from(status: Status) -> u16 {
        status.code()
    }
}

impl TryFrom<u16> for Status {
    type Error = String;

    fn try_from(code: u16) -> Result<Self, String> {
        match code {
            200 => Ok(Status::Ok),
            500 => Ok(Status::Error),
            other => Err(format!("unsupported status code {}", other)),
        }
    }
}

/// Response returned to the platform for one invocation
///
/// A successful response carries a payload (possibly empty); a failed one
/// carries only a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    pub message: String,
    pub payload: Vec<u8>,
}

impl Response {
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: Status::Ok,
            message: String::new(),
            payload,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

impl From<Result<Vec<u8>, ContractError>> for Response {
    fn from(result: Result<Vec<u8>, ContractError>) -> Self {
        match result {
            Ok(payload) => Response::success(payload),
            Err(error) => Response::error(error.to_string()),
        }
    }
}
