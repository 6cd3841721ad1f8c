// ── State fetcher ──
//
// One read of the managed object, classified into found / not found or a
// fatal error. Nothing here mutates the device.

use serde_json::Value;
use tracing::debug;

use asactl_api::{DeviceResponse, ObjectEndpoint};

use crate::client::DeviceClient;
use crate::error::CoreError;

/// The object as it currently exists on the device.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrentState {
    Found(Value),
    NotFound,
}

/// Read `{endpoint}/{id}` and classify the response.
pub async fn fetch<C: DeviceClient>(
    client: &C,
    endpoint: ObjectEndpoint,
    id: &str,
) -> Result<CurrentState, CoreError> {
    let response = client.get_object(endpoint, id).await?;
    let state = classify(endpoint, id, response)?;
    debug!(
        %endpoint,
        id,
        found = matches!(state, CurrentState::Found(_)),
        "current state fetched"
    );
    Ok(state)
}

/// 200 found, 404 not found, 401 unauthorized; any other status is fatal.
pub fn classify(
    endpoint: ObjectEndpoint,
    id: &str,
    response: DeviceResponse,
) -> Result<CurrentState, CoreError> {
    match response.status {
        200 => response
            .body
            .map(CurrentState::Found)
            .ok_or_else(|| CoreError::MalformedResponse {
                object: describe(endpoint, id),
                reason: "empty body".into(),
            }),
        404 => Ok(CurrentState::NotFound),
        401 => Err(CoreError::Unauthorized),
        status => Err(CoreError::UnsupportedResponse {
            object: describe(endpoint, id),
            status,
        }),
    }
}

pub(crate) fn describe(endpoint: ObjectEndpoint, id: &str) -> String {
    format!("{endpoint} '{id}'")
}
