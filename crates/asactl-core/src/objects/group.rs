// Network object-groups.
//
// A group is reconciled one member at a time: the declared entry is added
// or removed on its own, and the group description is patched separately
// when it is declared and differs. Bulk member lists are not synchronised.

use serde_json::{Map, Value, json};

use asactl_api::ObjectEndpoint;

use super::{declared, put_description, require_name};
use crate::error::ValidationError;
use crate::model::{Category, Intent, MemberEntry};
use crate::reconcile::{ManagedObject, Step};

#[derive(Debug, Clone, Default)]
pub struct NetworkObjectGroupArgs {
    pub name: String,
    pub state: Intent,
    pub category: Option<Category>,
    pub value: Option<String>,
    /// Lifecycle of the single declared member.
    pub entry_state: Option<Intent>,
    pub description: Option<String>,
    /// Full member list. Reserved; rejected when set.
    pub members: Option<Vec<String>>,
}

/// Desired state of one object-group.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkObjectGroup {
    name: String,
    intent: Intent,
    entry: Option<(Value, Intent)>,
    description: Option<String>,
    body: Value,
}

impl NetworkObjectGroupArgs {
    /// `host` is the device authority used to build reference links.
    pub fn translate(&self, host: &str) -> Result<NetworkObjectGroup, ValidationError> {
        let name = require_name(&self.name)?;

        if self.members.is_some() {
            if self.category.is_some() {
                return Err(ValidationError::combination(
                    "category and members are mutually exclusive",
                ));
            }
            if self.state == Intent::Present {
                return Err(ValidationError::Unsupported {
                    field: "members".into(),
                    reason: "synchronising a full member list is not implemented".into(),
                });
            }
        }

        let entry = match (self.category, self.entry_state, self.value.as_deref()) {
            (Some(category), Some(entry_state), Some(value)) => {
                Some((json!(member_entry(category, value, host)), entry_state))
            }
            (None, None, None) => None,
            _ => {
                return Err(ValidationError::combination(
                    "category, entry_state and value must be given together",
                ));
            }
        };

        let description = declared(self.description.as_ref()).map(str::to_owned);

        let mut body = Map::new();
        body.insert("name".into(), name.into());
        body.insert("kind".into(), "object#NetworkObjGroup".into());
        put_description(&mut body, description.as_deref());
        if let Some((member, Intent::Present)) = &entry {
            body.insert("members".into(), json!([member]));
        }

        Ok(NetworkObjectGroup {
            name: name.to_owned(),
            intent: self.state,
            entry,
            description,
            body: Value::Object(body),
        })
    }
}

fn member_entry(category: Category, value: &str, host: &str) -> MemberEntry {
    let collection = match category {
        Category::Object => ObjectEndpoint::NetworkObjects,
        Category::ObjectGroup => ObjectEndpoint::NetworkObjectGroups,
        literal => return MemberEntry::literal(literal.kind(), value),
    };
    MemberEntry::reference(
        category.kind(),
        value,
        format!("https://{host}/{}/{value}", collection.path()),
    )
}

/// Whether `member` is in the group's current member set.
pub fn find_member(current: &Value, member: &Value) -> bool {
    current
        .get("members")
        .and_then(Value::as_array)
        .is_some_and(|members| members.contains(member))
}

impl ManagedObject for NetworkObjectGroup {
    const ENDPOINT: ObjectEndpoint = ObjectEndpoint::NetworkObjectGroups;

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
        self.plan_existing(current).is_empty()
    }

    /// At most one membership step, then at most one description step.
    fn plan_existing(&self, current: &Value) -> Vec<Step> {
        let mut steps = Vec::new();

        if let Some((member, entry_state)) = &self.entry {
            match (find_member(current, member), entry_state) {
                (false, Intent::Present) => steps.push(Step::AddMember(member.clone())),
                (true, Intent::Absent) => steps.push(Step::RemoveMember(member.clone())),
                _ => {}
            }
        }

        if let Some(description) = &self.description {
            if current.get("description").and_then(Value::as_str) != Some(description.as_str()) {
                steps.push(Step::SetDescription(description.clone()));
            }
        }

        steps
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn with_member(category: Category, value: &str, entry_state: Intent) -> NetworkObjectGroupArgs {
        NetworkObjectGroupArgs {
            name: "servers".into(),
            category: Some(category),
            value: Some(value.into()),
            entry_state: Some(entry_state),
            ..Default::default()
        }
    }

    #[test]
    fn create_body_includes_present_member() {
        let group = with_member(Category::Ipv4Address, "10.0.0.5", Intent::Present)
            .translate("asa")
            .unwrap();
        assert_eq!(
            group.desired(),
            &json!({
                "name": "servers",
                "kind": "object#NetworkObjGroup",
                "members": [{ "kind": "IPv4Address", "value": "10.0.0.5" }]
            })
        );
    }

    #[test]
    fn create_body_skips_absent_member() {
        let group = with_member(Category::Ipv4Address, "10.0.0.5", Intent::Absent)
            .translate("asa")
            .unwrap();
        assert!(group.desired().get("members").is_none());
    }

    #[test]
    fn reference_members_carry_ref_link() {
        let group = with_member(Category::ObjectGroup, "dmz", Intent::Present)
            .translate("10.0.0.1:8443")
            .unwrap();
        assert_eq!(
            group.desired()["members"][0],
            json!({
                "kind": "objectRef#NetworkObjGroup",
                "objectId": "dmz",
                "refLink": "https://10.0.0.1:8443/api/objects/networkobjectgroups/dmz"
            })
        );

        let group = with_member(Category::Object, "web1", Intent::Present)
            .translate("asa")
            .unwrap();
        assert_eq!(
            group.desired()["members"][0]["refLink"],
            "https://asa/api/objects/networkobjects/web1"
        );
    }

    #[test]
    fn partial_entry_is_rejected() {
        let args = NetworkObjectGroupArgs {
            entry_state: None,
            ..with_member(Category::Ipv4Address, "10.0.0.5", Intent::Present)
        };
        assert!(matches!(
            args.translate("asa"),
            Err(ValidationError::InvalidFieldCombination { .. })
        ));
    }

    #[test]
    fn members_list_is_unsupported() {
        let args = NetworkObjectGroupArgs {
            name: "servers".into(),
            members: Some(vec!["web1".into()]),
            ..Default::default()
        };
        assert!(matches!(
            args.translate("asa"),
            Err(ValidationError::Unsupported { .. })
        ));

        let both = NetworkObjectGroupArgs {
            members: Some(vec!["web1".into()]),
            ..with_member(Category::Object, "web1", Intent::Present)
        };
        assert!(matches!(
            both.translate("asa"),
            Err(ValidationError::InvalidFieldCombination { .. })
        ));
    }

    #[test]
    fn existing_member_is_noop() {
        let group = with_member(Category::Ipv4Address, "10.0.0.5", Intent::Present)
            .translate("asa")
            .unwrap();
        let current = json!({
            "name": "servers",
            "members": [
                { "kind": "IPv4Address", "value": "10.0.0.4" },
                { "kind": "IPv4Address", "value": "10.0.0.5" }
            ]
        });
        assert!(group.plan_existing(&current).is_empty());
        assert!(group.matches(&current));
    }

    #[test]
    fn missing_member_is_added() {
        let group = with_member(Category::Ipv4Address, "10.0.0.5", Intent::Present)
            .translate("asa")
            .unwrap();
        let current = json!({ "name": "servers", "members": [] });
        assert_eq!(
            group.plan_existing(&current),
            vec![Step::AddMember(json!({ "kind": "IPv4Address", "value": "10.0.0.5" }))]
        );
    }

    #[test]
    fn absent_member_removal() {
        let group = with_member(Category::Ipv4Address, "10.0.0.5", Intent::Absent)
            .translate("asa")
            .unwrap();

        let without = json!({ "members": [] });
        assert!(group.plan_existing(&without).is_empty());

        let with = json!({ "members": [{ "kind": "IPv4Address", "value": "10.0.0.5" }] });
        assert_eq!(
            group.plan_existing(&with),
            vec![Step::RemoveMember(json!({ "kind": "IPv4Address", "value": "10.0.0.5" }))]
        );
    }

    #[test]
    fn membership_and_description_in_one_pass() {
        let group = NetworkObjectGroupArgs {
            description: Some("web tier".into()),
            ..with_member(Category::Ipv4Address, "10.0.0.5", Intent::Present)
        }
        .translate("asa")
        .unwrap();
        let current = json!({ "name": "servers", "description": "old", "members": [] });

        assert_eq!(
            group.plan_existing(&current),
            vec![
                Step::AddMember(json!({ "kind": "IPv4Address", "value": "10.0.0.5" })),
                Step::SetDescription("web tier".into()),
            ]
        );
    }

    #[test]
    fn undeclared_description_is_left_alone() {
        let group = NetworkObjectGroupArgs {
            name: "servers".into(),
            ..Default::default()
        }
        .translate("asa")
        .unwrap();
        let current = json!({ "name": "servers", "description": "managed elsewhere" });
        assert!(group.plan_existing(&current).is_empty());
    }
}
