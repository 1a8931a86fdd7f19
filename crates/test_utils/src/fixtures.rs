//! Pre-built Test Fixtures
//!
//! Provides ready-to-use claim data. These fixtures are consistent and
//! predictable for unit tests.

use domain_claims::{seed_claims, Claim};

/// Fixture for claim records
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// The record `initLedger` writes under `CLAIM0`
    pub fn seed() -> Claim {
        seed_claims().remove(0)
    }

    /// A claim that has been approved and fully processed
    pub fn physiotherapy() -> Claim {
        Claim {
            service_performed: "Physiotherapy".to_string(),
            service_provider_id: "PRV-0042".to_string(),
            employer_no: "EMP-7781".to_string(),
            employee_no: "E-1001".to_string(),
            is_claimable: "true".to_string(),
            amount_claimed: "120.00".to_string(),
            amount_processed: "120.00".to_string(),
        }
    }

    /// A claim that was rejected and not processed
    pub fn massage_rejected() -> Claim {
        Claim {
            service_performed: "Massage".to_string(),
            service_provider_id: "PRV-0007".to_string(),
            employer_no: "EMP-7781".to_string(),
            employee_no: "E-2002".to_string(),
            is_claimable: "false".to_string(),
            amount_claimed: "65".to_string(),
            amount_processed: "0".to_string(),
        }
    }
}

/// Fixture for raw invocation data
pub struct InvocationFixtures;

impl InvocationFixtures {
    /// Function names that must all be rejected as unknown
    pub fn unknown_functions() -> Vec<&'static str> {
        vec![
            "",
            "changeCarOwner",
            "queryCar",
            "QueryClaim",
            "createclaim",
            " queryClaim",
            "queryAllClaims ",
            "deleteClaim",
        ]
    }

    /// Converts string slices into an owned argument list
    pub fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }
}
