use std::time::Duration;

use nx_common::config::DirectoryConfig;

use crate::error::DirectoryError;
use crate::presence::GatewayPresence;
use crate::topology::Topology;

const TOPOLOGY_PATH: &str = "/api/presence/topology";
const GATEWAY_PRESENCE_PATH: &str = "/api/presence/gateways";

/// Typed HTTP client for the mixnet directory server.
pub struct DirectoryClient {
    base_url: String,
    client: reqwest::Client,
}

impl DirectoryClient {
    pub fn new(config: &DirectoryConfig) -> Result<Self, DirectoryError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET the current network topology.
    pub async fn get_topology(&self) -> Result<Topology, DirectoryError> {
        let url = format!("{}{}", self.base_url, TOPOLOGY_PATH);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(DirectoryError::Status {
                endpoint: TOPOLOGY_PATH,
                status: response.status(),
            });
        }
        let topology = response.json().await?;
        Ok(topology)
    }

    /// POST a gateway presence notification. Success is any 2xx status.
    pub async fn post_gateway_presence(
        &self,
        presence: &GatewayPresence,
    ) -> Result<(), DirectoryError> {
        let url = format!("{}{}", self.base_url, GATEWAY_PRESENCE_PATH);
        let response = self.client.post(&url).json(presence).send().await?;
        if !response.status().is_success() {
            return Err(DirectoryError::Status {
                endpoint: GATEWAY_PRESENCE_PATH,
                status: response.status(),
            });
        }
        Ok(())
    }
}
