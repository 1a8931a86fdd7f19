//! Test Data Builders
//!
//! Provides a builder for `createClaim` argument lists with sensible
//! defaults, so tests only spell out the fields they care about.

use domain_claims::Claim;

use crate::fixtures::ClaimFixtures;

/// Builder for the eight `createClaim` arguments (key + seven fields)
#[derive(Debug, Clone)]
pub struct ClaimArgsBuilder {
    key: String,
    claim: Claim,
}

impl Default for ClaimArgsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimArgsBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            key: "CLAIM1".to_string(),
            claim: ClaimFixtures::physiotherapy(),
        }
    }

    /// Starts from an existing claim
    pub fn from_claim(key: impl Into<String>, claim: Claim) -> Self {
        Self {
            key: key.into(),
            claim,
        }
    }

    /// Sets the world-state key
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn service_performed(mut self, value: impl Into<String>) -> Self {
        self.claim.service_performed = value.into();
        self
    }

    pub fn service_provider_id(mut self, value: impl Into<String>) -> Self {
        self.claim.service_provider_id = value.into();
        self
    }

    pub fn employer_no(mut self, value: impl Into<String>) -> Self {
        self.claim.employer_no = value.into();
        self
    }

    pub fn employee_no(mut self, value: impl Into<String>) -> Self {
        self.claim.employee_no = value.into();
        self
    }

    pub fn is_claimable(mut self, value: impl Into<String>) -> Self {
        self.claim.is_claimable = value.into();
        self
    }

    pub fn amount_claimed(mut self, value: impl Into<String>) -> Self {
        self.claim.amount_claimed = value.into();
        self
    }

    pub fn amount_processed(mut self, value: impl Into<String>) -> Self {
        self.claim.amount_processed = value.into();
        self
    }

    /// The claim the arguments describe
    pub fn claim(&self) -> &Claim {
        &self.claim
    }

    /// Builds the argument list
    pub fn build(self) -> Vec<String> {
        let mut args = Vec::with_capacity(8);
        args.push(self.key);
        args.extend(self.claim.into_fields());
        args
    }
}
