// Device-level commands.

use serde_json::json;
use tracing::debug;

use crate::client::AsaClient;
use crate::error::Error;
use crate::models::DeviceResponse;

impl AsaClient {
    /// Save the running configuration to startup configuration.
    ///
    /// `POST /api/commands/writemem`; the ASA answers 200 on success.
    pub async fn write_mem(&self) -> Result<DeviceResponse, Error> {
        let url = self.api_url("api/commands/writemem")?;
        debug!("saving running configuration");
        self.post(url, &json!({})).await
    }
}
