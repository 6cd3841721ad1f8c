// ── Device facade ──
//
// Entry point for consumers: build the HTTP client from a `DeviceConfig`
// and run tasks against it. Stateless; every `apply` re-reads the device.

use asactl_api::{AsaClient, Credentials, TransportConfig};
use tracing::debug;

use crate::client::DeviceClient;
use crate::config::DeviceConfig;
use crate::error::CoreError;
use crate::reconcile::Outcome;
use crate::task::{Task, run_task};

pub struct Device<C = AsaClient> {
    client: C,
}

impl Device<AsaClient> {
    /// Build the HTTP client. No request is sent until a task is applied.
    pub fn new(config: &DeviceConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig::default()
            .with_validate_certs(config.tls.validates())
            .with_timeout(config.timeout);
        let credentials = Credentials::new(config.username.clone(), config.password.clone());
        let client = AsaClient::new(config.url.clone(), credentials, &transport)?;
        debug!(url = %config.url, "device client ready");
        Ok(Self { client })
    }
}

impl<C: DeviceClient> Device<C> {
    pub fn with_client(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn apply(&self, task: &Task) -> Result<Outcome, CoreError> {
        run_task(&self.client, task).await
    }
}
