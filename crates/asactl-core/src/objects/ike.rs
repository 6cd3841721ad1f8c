// IKEv1 policies, identified by their priority.

use serde_json::{Map, Value, json};

use asactl_api::ObjectEndpoint;

use crate::error::ValidationError;
use crate::model::{Authentication, Encryption, HashAlgorithm, Intent, ResourceKind};
use crate::reconcile::ManagedObject;

const DH_GROUPS: &[u8] = &[1, 2, 5];
const LIFETIME_MIN: u32 = 120;
const LIFETIME_MAX: u32 = 2_147_483_647;

#[derive(Debug, Clone, Default)]
pub struct Ikev1PolicyArgs {
    /// Policy priority, `1`-`65535`.
    pub priority: String,
    pub state: Intent,
    pub authentication: Option<Authentication>,
    pub encryption: Option<Encryption>,
    pub hash: Option<HashAlgorithm>,
    /// Diffie-Hellman group.
    pub group: Option<String>,
    /// SA lifetime in seconds.
    pub lifetime: Option<String>,
}

/// Desired state of one IKEv1 policy.
#[derive(Debug, Clone, PartialEq)]
pub struct Ikev1Policy {
    priority: String,
    intent: Intent,
    body: Value,
}

impl Ikev1PolicyArgs {
    /// `host` is the device authority used to build the policy's `selfLink`.
    pub fn translate(&self, host: &str) -> Result<Ikev1Policy, ValidationError> {
        let priority = parse_priority(&self.priority)?;
        let id = priority.to_string();

        let mut body = Map::new();
        body.insert("priority".into(), priority.into());
        body.insert("objectId".into(), id.clone().into());

        if self.state == Intent::Present {
            let Some(authentication) = self.authentication else {
                return Err(ValidationError::missing(
                    "authentication",
                    "required when state is present",
                ));
            };
            let (Some(encryption), Some(hash), Some(group), Some(lifetime)) = (
                self.encryption,
                self.hash,
                self.group.as_deref(),
                self.lifetime.as_deref(),
            ) else {
                return Err(ValidationError::combination(
                    "authentication, encryption, hash, group and lifetime must be given together",
                ));
            };

            body.insert("lifetimeInSecs".into(), parse_lifetime(lifetime)?.into());
            body.insert("authentication".into(), json!(authentication));
            body.insert("encryption".into(), json!(encryption));
            body.insert("hash".into(), json!(hash));
            body.insert("dhgroup".into(), parse_group(group)?.into());
            body.insert("kind".into(), json!(ResourceKind::IkeV1Policy));
            body.insert(
                "selfLink".into(),
                format!("https://{host}/{}/{id}", ObjectEndpoint::Ikev1Policies.path()).into(),
            );
        }

        Ok(Ikev1Policy {
            priority: id,
            intent: self.state,
            body: Value::Object(body),
        })
    }
}

fn parse_priority(raw: &str) -> Result<u16, ValidationError> {
    raw.trim()
        .parse::<u16>()
        .ok()
        .filter(|p| *p >= 1)
        .ok_or_else(|| ValidationError::InvalidRange {
            field: "priority".into(),
            value: raw.into(),
            expected: "an integer between 1 and 65535".into(),
        })
}

fn parse_lifetime(raw: &str) -> Result<u32, ValidationError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|l| (LIFETIME_MIN..=LIFETIME_MAX).contains(l))
        .ok_or_else(|| ValidationError::InvalidRange {
            field: "lifetime".into(),
            value: raw.into(),
            expected: format!("an integer between {LIFETIME_MIN} and {LIFETIME_MAX}"),
        })
}

fn parse_group(raw: &str) -> Result<u8, ValidationError> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|g| DH_GROUPS.contains(g))
        .ok_or_else(|| ValidationError::InvalidRange {
            field: "group".into(),
            value: raw.into(),
            expected: "one of 1, 2, 5".into(),
        })
}

impl ManagedObject for Ikev1Policy {
    const ENDPOINT: ObjectEndpoint = ObjectEndpoint::Ikev1Policies;

    fn identifier(&self) -> &str {
        &self.priority
    }

    fn intent(&self) -> Intent {
        self.intent
    }

    fn desired(&self) -> &Value {
        &self.body
    }

    /// Every declared field must be present on the device with the same value.
    fn matches(&self, current: &Value) -> bool {
        let Value::Object(desired) = &self.body else {
            return false;
        };
        desired
            .iter()
            .all(|(key, value)| current.get(key) == Some(value))
    }
}
