// ── Change reporter ──
//
// Terminal result of one invocation: the changed flag with the actions that
// produced it, or a failure with its message. Never both.

use serde::Serialize;

use crate::error::CoreError;
use crate::reconcile::{Action, Outcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Success { changed: bool, actions: Vec<Action> },
    Failure { failed: bool, msg: String },
}

impl Report {
    pub fn success(outcome: Outcome) -> Self {
        Self::Success {
            changed: outcome.changed,
            actions: outcome.actions,
        }
    }

    pub fn failure(err: &CoreError) -> Self {
        Self::Failure {
            failed: true,
            msg: err.to_string(),
        }
    }

    pub fn from_result(result: &Result<Outcome, CoreError>) -> Self {
        match result {
            Ok(outcome) => Self::success(outcome.clone()),
            Err(err) => Self::failure(err),
        }
    }

    pub fn changed(&self) -> bool {
        matches!(self, Self::Success { changed: true, .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_serializes_changed_and_actions() {
        let report = Report::success(Outcome::from_actions(vec![Action::Created]));
        assert!(report.changed());
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({ "changed": true, "actions": ["created"] })
        );
    }

    #[test]
    fn failure_carries_message_only() {
        let report = Report::from_result(&Err(CoreError::Unauthorized));
        assert!(report.is_failure());
        assert!(!report.changed());
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({ "failed": true, "msg": "Authentication error" })
        );
    }
}
