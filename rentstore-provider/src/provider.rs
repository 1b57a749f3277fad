//! Provider context handed to every controller call.

use tracing::info;

use crate::client::StoreClient;
use crate::config::ProviderConfig;
use crate::error::Result;

/// Holds the single store client shared by all controllers.
#[derive(Debug, Clone)]
pub struct Provider {
    client: StoreClient,
}

impl Provider {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Build the store client from configuration.
    pub fn configure(config: &ProviderConfig) -> Result<Self> {
        let client = StoreClient::new(
            &config.address,
            config.port,
            config.token.clone(),
            config.timeout(),
        )?;
        info!("Configured store provider for {}", client.base_url());
        Ok(Self::new(client))
    }

    pub fn client(&self) -> &StoreClient {
        &self.client
    }
}
