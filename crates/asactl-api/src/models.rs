// Response and endpoint types shared by every ASA REST call.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Object collections exposed by the ASA REST API.
///
/// Each collection supports `POST` on the collection path and
/// `GET`/`PUT`/`PATCH`/`DELETE` on `{collection}/{objectId}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectEndpoint {
    NetworkObjects,
    NetworkObjectGroups,
    NetworkServices,
    Ikev1Policies,
}

impl ObjectEndpoint {
    /// Collection path relative to the device root.
    pub fn path(self) -> &'static str {
        match self {
            Self::NetworkObjects => "api/objects/networkobjects",
            Self::NetworkObjectGroups => "api/objects/networkobjectgroups",
            Self::NetworkServices => "api/objects/networkservices",
            Self::Ikev1Policies => "api/vpn/ikev1policy",
        }
    }
}

impl fmt::Display for ObjectEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NetworkObjects => "network object",
            Self::NetworkObjectGroups => "network object-group",
            Self::NetworkServices => "service object",
            Self::Ikev1Policies => "IKEv1 policy",
        };
        f.write_str(label)
    }
}

/// Status code and decoded body of a single ASA REST exchange.
///
/// The body is `None` for empty responses (201/204 typically carry none)
/// and for error responses whose body is not JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceResponse {
    pub status: u16,
    pub body: Option<serde_json::Value>,
}

impl DeviceResponse {
    pub fn new(status: u16, body: Option<serde_json::Value>) -> Self {
        Self { status, body }
    }

    /// Shorthand for a response without a body.
    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }
}
