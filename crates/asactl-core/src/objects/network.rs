// Network objects: a single address, subnet, range or FQDN.

use serde_json::{Map, Value, json};

use asactl_api::ObjectEndpoint;

use super::{declared, description_matches, put_description, require_name};
use crate::error::ValidationError;
use crate::model::{Category, Intent};
use crate::reconcile::ManagedObject;

#[derive(Debug, Clone, Default)]
pub struct NetworkObjectArgs {
    pub name: String,
    pub state: Intent,
    pub category: Option<Category>,
    pub value: Option<String>,
    pub description: Option<String>,
}

/// Desired state of one network object.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkObject {
    name: String,
    intent: Intent,
    body: Value,
}

impl NetworkObjectArgs {
    pub fn translate(&self) -> Result<NetworkObject, ValidationError> {
        let name = require_name(&self.name)?;

        let host = match (self.category, self.value.as_deref()) {
            (Some(category), Some(value)) => Some((category, value)),
            (None, None) => None,
            _ => {
                return Err(ValidationError::combination(
                    "category and value must be given together",
                ));
            }
        };

        if self.state == Intent::Present && host.is_none() {
            return Err(ValidationError::missing(
                "category",
                "required when state is present",
            ));
        }

        let mut body = Map::new();
        body.insert("name".into(), name.into());
        body.insert("objectId".into(), name.into());
        body.insert("kind".into(), "object#NetworkObj".into());

        if let Some((category, value)) = host {
            if category.is_reference() {
                return Err(ValidationError::InvalidChoice {
                    field: "category".into(),
                    value: category.to_string(),
                    expected: "an address, subnet, range or fqdn category".into(),
                });
            }
            body.insert(
                "host".into(),
                json!({ "kind": category.kind(), "value": value }),
            );
        }
        put_description(&mut body, declared(self.description.as_ref()));

        Ok(NetworkObject {
            name: name.to_owned(),
            intent: self.state,
            body: Value::Object(body),
        })
    }
}

impl ManagedObject for NetworkObject {
    const ENDPOINT: ObjectEndpoint = ObjectEndpoint::NetworkObjects;

    fn identifier(&self) -> &str {
        &self.name
    }

    fn intent(&self) -> Intent {
        self.intent
    }

    fn desired(&self) -> &Value {
        &self.body
    }

    fn matches(&self, current: &Value) -> bool {
        current.get("host") == self.body.get("host") && description_matches(&self.body, current)
    }
}
