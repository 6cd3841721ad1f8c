// ── Managed object kinds ──
//
// Each submodule owns one resource kind: its declared arguments, the
// translation into a desired wire body, and its `ManagedObject` strategy.

pub mod group;
pub mod ike;
pub mod network;
pub mod service;

pub use group::{NetworkObjectGroup, NetworkObjectGroupArgs};
pub use ike::{Ikev1Policy, Ikev1PolicyArgs};
pub use network::{NetworkObject, NetworkObjectArgs};
pub use service::{ServiceObject, ServiceObjectArgs};

use serde_json::{Map, Value};

use crate::error::ValidationError;

fn require_name(name: &str) -> Result<&str, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        Err(ValidationError::missing("name", "an object name is required"))
    } else {
        Ok(name)
    }
}

/// Declared descriptions only count when non-empty.
fn declared(description: Option<&String>) -> Option<&str> {
    description.map(String::as_str).filter(|d| !d.is_empty())
}

fn put_description(body: &mut Map<String, Value>, description: Option<&str>) {
    if let Some(description) = description {
        body.insert("description".into(), description.into());
    }
}

/// Present on both sides and equal, or absent on both.
fn description_matches(desired: &Value, current: &Value) -> bool {
    desired.get("description") == current.get("description")
}
