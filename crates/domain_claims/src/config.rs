//! Contract configuration

use serde::{Deserialize, Serialize};

use core_kernel::ClaimKey;

/// Key range scanned by `queryAllClaims`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanScope {
    /// Every key in the world state, claim or not
    #[default]
    FullKeyspace,
    /// Only keys starting with `CLAIM`
    ClaimNamespace,
}

impl ScanScope {
    /// Start and end keys passed to the range scan
    pub fn bounds(self) -> (String, String) {
        match self {
            ScanScope::FullKeyspace => (String::new(), String::new()),
            ScanScope::ClaimNamespace => ClaimKey::namespace_range(),
        }
    }
}

/// Contract behaviour switches
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Range scanned by `queryAllClaims`
    pub scan_scope: ScanScope,
    /// Fail `queryClaim`, `initLedger` and `createClaim` on store errors
    /// instead of ignoring them
    pub strict_store_errors: bool,
}

impl ContractConfig {
    pub fn with_scan_scope(mut self, scope: ScanScope) -> Self {
        self.scan_scope = scope;
        self
    }

    pub fn with_strict_store_errors(mut self, strict: bool) -> Self {
        self.strict_store_errors = strict;
        self
    }
}
