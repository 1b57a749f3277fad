//! Provider configuration.

use std::time::Duration;

use clap::Args;

/// Connection settings for the store API.
///
/// Every setting can come from the environment, so a host can configure the
/// provider without passing flags.
#[derive(Args, Debug, Clone)]
pub struct ProviderConfig {
    /// Store API address, with or without scheme (e.g. http://localhost)
    #[arg(long, env = "SERVICE_ADDRESS")]
    pub address: String,

    /// Store API port
    #[arg(long, env = "SERVICE_PORT")]
    pub port: u16,

    /// API token sent in the x-auth-token header
    #[arg(long, env = "SERVICE_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "SERVICE_TIMEOUT", default_value = "30")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    pub fn new(address: impl Into<String>, port: u16, token: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            port,
            token: token.into(),
            timeout_secs: 30,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
