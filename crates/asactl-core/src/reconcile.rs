// ── Reconciler ──
//
// Fetch the current object, decide the steps that converge it to the
// desired state, run them. The decision is a pure function of the desired
// object and the fetched state (`plan`); only `reconcile` touches the device.
//
//   current    intent   steps
//   NotFound   absent   none
//   NotFound   present  create
//   Found      absent   delete
//   Found      present  none when it matches, otherwise the object's
//                       `plan_existing` (update for simple objects)

use serde::Serialize;
use serde_json::{Value, json};
use strum::{Display, IntoStaticStr};
use tracing::info;

use asactl_api::{DeviceResponse, ObjectEndpoint};

use crate::client::DeviceClient;
use crate::error::CoreError;
use crate::fetch::{CurrentState, describe, fetch};
use crate::model::Intent;

// ── Strategy trait ──────────────────────────────────────────────────

/// Per-kind reconciliation strategy.
///
/// Implementations are produced by the translator and are immutable; they
/// only describe the desired state and how to compare against the device.
pub trait ManagedObject: Send + Sync {
    /// Collection the object lives in.
    const ENDPOINT: ObjectEndpoint;

    /// Identifier used in item URLs (name, or priority for IKE policies).
    fn identifier(&self) -> &str;

    /// Declared lifecycle.
    fn intent(&self) -> Intent;

    /// Wire body sent when the object has to be created or replaced.
    fn desired(&self) -> &Value;

    /// Kind-specific equality against the object read back from the device.
    fn matches(&self, current: &Value) -> bool;

    /// Steps for an existing object that should stay present.
    fn plan_existing(&self, current: &Value) -> Vec<Step> {
        if self.matches(current) {
            Vec::new()
        } else {
            vec![Step::Update(self.desired().clone())]
        }
    }
}

/// One mutating call against the device.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Create(Value),
    Update(Value),
    Delete,
    AddMember(Value),
    RemoveMember(Value),
    SetDescription(String),
}

/// What a successful step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    Created,
    Updated,
    Deleted,
    MemberAdded,
    MemberRemoved,
    DescriptionUpdated,
    Saved,
}

/// Result of a converged invocation.
///
/// `changed` is true when any action ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub changed: bool,
    pub actions: Vec<Action>,
}

impl Outcome {
    pub fn unchanged() -> Self {
        Self::from_actions(Vec::new())
    }

    pub fn from_actions(actions: Vec<Action>) -> Self {
        Self {
            changed: !actions.is_empty(),
            actions,
        }
    }
}

// ── Planning ────────────────────────────────────────────────────────

/// Decide the steps that converge `current` to `object`.
pub fn plan<O: ManagedObject>(object: &O, current: &CurrentState) -> Vec<Step> {
    match (current, object.intent()) {
        (CurrentState::NotFound, Intent::Absent) => Vec::new(),
        (CurrentState::NotFound, Intent::Present) => vec![Step::Create(object.desired().clone())],
        (CurrentState::Found(_), Intent::Absent) => vec![Step::Delete],
        (CurrentState::Found(existing), Intent::Present) => object.plan_existing(existing),
    }
}

// ── Execution ───────────────────────────────────────────────────────

/// Fetch, plan and apply. The first failing call aborts the invocation.
pub async fn reconcile<C, O>(client: &C, object: &O) -> Result<Outcome, CoreError>
where
    C: DeviceClient,
    O: ManagedObject,
{
    let id = object.identifier();
    let current = fetch(client, O::ENDPOINT, id).await?;
    let steps = plan(object, &current);

    let mut actions = Vec::with_capacity(steps.len());
    for step in steps {
        actions.push(execute(client, O::ENDPOINT, id, step).await?);
    }
    Ok(Outcome::from_actions(actions))
}

async fn execute<C: DeviceClient>(
    client: &C,
    endpoint: ObjectEndpoint,
    id: &str,
    step: Step,
) -> Result<Action, CoreError> {
    let (action, response) = match step {
        Step::Create(body) => (Action::Created, client.create_object(endpoint, &body).await?),
        Step::Update(body) => (
            Action::Updated,
            client.update_object(endpoint, id, &body).await?,
        ),
        Step::Delete => (Action::Deleted, client.delete_object(endpoint, id).await?),
        Step::AddMember(member) => (
            Action::MemberAdded,
            client.add_group_members(id, &[member]).await?,
        ),
        Step::RemoveMember(member) => (
            Action::MemberRemoved,
            client.remove_group_members(id, &[member]).await?,
        ),
        Step::SetDescription(description) => (
            Action::DescriptionUpdated,
            client
                .patch_object(endpoint, id, &json!({ "description": description }))
                .await?,
        ),
    };

    expect_status(&response, expected_status(action), action, || {
        describe(endpoint, id)
    })?;
    info!(%endpoint, id, %action, "device updated");
    Ok(action)
}

/// Persist the running configuration.
pub async fn write_mem<C: DeviceClient>(client: &C) -> Result<Outcome, CoreError> {
    let response = client.write_mem().await?;
    expect_status(&response, 200, Action::Saved, || {
        "running configuration".to_owned()
    })?;
    info!("running configuration saved");
    Ok(Outcome::from_actions(vec![Action::Saved]))
}

fn expected_status(action: Action) -> u16 {
    match action {
        Action::Created => 201,
        Action::Saved => 200,
        Action::Updated
        | Action::Deleted
        | Action::MemberAdded
        | Action::MemberRemoved
        | Action::DescriptionUpdated => 204,
    }
}

fn expect_status(
    response: &DeviceResponse,
    expected: u16,
    action: Action,
    object: impl FnOnce() -> String,
) -> Result<(), CoreError> {
    if response.status == expected {
        return Ok(());
    }
    let operation = match action {
        Action::Created => "create",
        Action::Updated => "update",
        Action::Deleted => "delete",
        Action::MemberAdded => "add member to",
        Action::MemberRemoved => "remove member from",
        Action::DescriptionUpdated => "change description of",
        Action::Saved => "save",
    };
    Err(CoreError::OperationFailed {
        operation: operation.into(),
        object: object(),
        status: response.status,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct Plain {
        intent: Intent,
        body: Value,
    }

    impl ManagedObject for Plain {
        const ENDPOINT: ObjectEndpoint = ObjectEndpoint::NetworkObjects;

        fn identifier(&self) -> &str {
            "web1"
        }

        fn intent(&self) -> Intent {
            self.intent
        }

        fn desired(&self) -> &Value {
            &self.body
        }

        fn matches(&self, current: &Value) -> bool {
            current == &self.body
        }
    }

    fn plain(intent: Intent) -> Plain {
        Plain {
            intent,
            body: json!({ "name": "web1", "value": "10.0.0.1" }),
        }
    }

    #[test]
    fn absent_and_missing_is_noop() {
        assert!(plan(&plain(Intent::Absent), &CurrentState::NotFound).is_empty());
    }

    #[test]
    fn present_and_missing_creates() {
        let object = plain(Intent::Present);
        assert_eq!(
            plan(&object, &CurrentState::NotFound),
            vec![Step::Create(object.body.clone())]
        );
    }

    #[test]
    fn absent_and_found_deletes() {
        let current = CurrentState::Found(json!({ "name": "web1" }));
        assert_eq!(plan(&plain(Intent::Absent), &current), vec![Step::Delete]);
    }

    #[test]
    fn present_and_matching_is_noop() {
        let object = plain(Intent::Present);
        let current = CurrentState::Found(object.body.clone());
        assert!(plan(&object, &current).is_empty());
    }

    #[test]
    fn present_and_differing_updates() {
        let object = plain(Intent::Present);
        let current = CurrentState::Found(json!({ "name": "web1", "value": "10.0.0.2" }));
        assert_eq!(
            plan(&object, &current),
            vec![Step::Update(object.body.clone())]
        );
    }

    #[test]
    fn outcome_changed_is_union_of_actions() {
        assert!(!Outcome::unchanged().changed);
        let outcome = Outcome::from_actions(vec![Action::MemberAdded, Action::DescriptionUpdated]);
        assert!(outcome.changed);
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({ "changed": true, "actions": ["member_added", "description_updated"] })
        );
    }

    #[test]
    fn unexpected_status_names_operation() {
        let err = expect_status(&DeviceResponse::empty(400), 201, Action::Created, || {
            "network object 'web1'".into()
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unable to create network object 'web1' (HTTP 400)"
        );
    }
}
