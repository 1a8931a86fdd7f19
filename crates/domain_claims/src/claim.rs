//! Claim record

use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// Number of fields carried by a claim record
pub const CLAIM_FIELD_COUNT: usize = 7;

/// A claim as stored in the world state
///
/// Every attribute is free text; amounts and the claimable flag are not
/// parsed. Field order here is the field order of the stored JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// Service performed, e.g. "Acupuncture"
    pub service_performed: String,
    /// Identifier of the service provider
    pub service_provider_id: String,
    /// Employer number
    pub employer_no: String,
    /// Employee number
    pub employee_no: String,
    /// Claimability flag, stored as text
    pub is_claimable: String,
    /// Amount claimed, stored as text
    pub amount_claimed: String,
    /// Amount processed, stored as text
    pub amount_processed: String,
}

impl Claim {
    /// Builds a claim from exactly seven field values, in wire order
    pub fn from_fields(fields: &[String]) -> Result<Self, ContractError> {
        match fields {
            [service_performed, service_provider_id, employer_no, employee_no, is_claimable, amount_claimed, amount_processed] => {
                Ok(Self {
                    service_performed: service_performed.clone(),
                    service_provider_id: service_provider_id.clone(),
                    employer_no: employer_no.clone(),
                    employee_no: employee_no.clone(),
                    is_claimable: is_claimable.clone(),
                    amount_claimed: amount_claimed.clone(),
                    amount_processed: amount_processed.clone(),
                })
            }
            _ => Err(ContractError::argument_count(CLAIM_FIELD_COUNT, fields.len())),
        }
    }

    /// Field values in wire order
    pub fn into_fields(self) -> [String; CLAIM_FIELD_COUNT] {
        [
            self.service_performed,
            self.service_provider_id,
            self.employer_no,
            self.employee_no,
            self.is_claimable,
            self.amount_claimed,
            self.amount_processed,
        ]
    }

    /// Serializes the claim to its stored JSON form
    pub fn to_bytes(&self) -> Result<Vec<u8>, ContractError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Parses a stored claim
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ContractError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Records written by `initLedger`, stored under `CLAIM0`, `CLAIM1`, ...
pub fn seed_claims() -> Vec<Claim> {
    vec![Claim {
        service_performed: "Acupuncture".to_string(),
        service_provider_id: "123abc".to_string(),
        employer_no: "456cde".to_string(),
        employee_no: "abc123".to_string(),
        is_claimable: "true".to_string(),
        amount_claimed: "87.5".to_string(),
        amount_processed: "87.5".to_string(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_field_names_and_order() {
        let bytes = seed_claims()[0].to_bytes().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"servicePerformed":"Acupuncture","serviceProviderId":"123abc","employerNo":"456cde","employeeNo":"abc123","isClaimable":"true","amountClaimed":"87.5","amountProcessed":"87.5"}"#
        );
    }

    #[test]
    fn test_from_fields_wrong_length() {
        let fields = vec!["only".to_string()];
        assert!(matches!(
            Claim::from_fields(&fields),
            Err(ContractError::ArgumentCount { expected: 7, actual: 1 })
        ));
    }

    #[test]
    fn test_amounts_stay_textual() {
        let fields: Vec<String> = ["a", "b", "c", "d", "maybe", "not-a-number", ""]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let claim = Claim::from_fields(&fields).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&claim.to_bytes().unwrap()).unwrap();
        assert_eq!(value["isClaimable"], "maybe");
        assert_eq!(value["amountClaimed"], "not-a-number");
        assert_eq!(value["amountProcessed"], "");
    }
}
