//! Gateway configuration

use domain_claims::{ContractConfig, ScanScope};
use serde::Deserialize;

/// Gateway configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Key range scanned by `queryAllClaims`
    pub scan_scope: ScanScope,
    /// Propagate store errors the contract ignores by default
    pub strict_store_errors: bool,
    /// Run `initLedger` once at startup
    pub seed_on_start: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
            log_level: "info".to_string(),
            scan_scope: ScanScope::FullKeyspace,
            strict_store_errors: false,
            seed_on_start: true,
        }
    }
}

impl GatewayConfig {
    /// Loads configuration from `GATEWAY_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("GATEWAY").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Contract settings derived from this configuration
    pub fn contract_config(&self) -> ContractConfig {
        ContractConfig::default()
            .with_scan_scope(self.scan_scope)
            .with_strict_store_errors(self.strict_store_errors)
    }
}
