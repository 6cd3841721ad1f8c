// ── Domain model ──
//
// Closed vocabularies shared by the translator and the reconciler: wire
// kind tags, declared categories, lifecycle intent and group members.

pub mod ike;
pub mod kind;

pub use ike::{Authentication, Encryption, HashAlgorithm};
pub use kind::{Category, ResourceKind};

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantNames};

use crate::error::ValidationError;

/// Declared lifecycle of a managed resource (or of one group member).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Intent {
    #[default]
    Present,
    Absent,
}

/// One element of an object-group's member set.
///
/// Literal members carry a `value`; references to other objects carry an
/// `objectId` and a `refLink`. Equality is structural, field by field, which
/// is how members are looked up in the group read back from the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberEntry {
    pub kind: ResourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_link: Option<String>,
}

impl MemberEntry {
    pub fn literal(kind: ResourceKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(value.into()),
            object_id: None,
            ref_link: None,
        }
    }

    pub fn reference(kind: ResourceKind, object_id: impl Into<String>, ref_link: String) -> Self {
        Self {
            kind,
            value: None,
            object_id: Some(object_id.into()),
            ref_link: Some(ref_link),
        }
    }
}

/// Parse a declared closed-choice option, reporting the accepted values on
/// failure.
pub fn parse_choice<T>(field: &str, value: &str) -> Result<T, ValidationError>
where
    T: FromStr + VariantNames,
{
    value.parse().map_err(|_| ValidationError::InvalidChoice {
        field: field.into(),
        value: value.into(),
        expected: T::VARIANTS.join(", "),
    })
}
