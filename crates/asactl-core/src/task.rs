// ── Task dispatch ──
//
// One declared task per invocation. Translation runs before any remote
// call, so invalid input never reaches the device.

use tracing::debug;

use crate::client::DeviceClient;
use crate::error::{CoreError, ValidationError};
use crate::objects::{
    Ikev1PolicyArgs, NetworkObjectArgs, NetworkObjectGroupArgs, ServiceObjectArgs,
};
use crate::reconcile::{Outcome, reconcile, write_mem};

#[derive(Debug, Clone)]
pub enum Task {
    NetworkObject(NetworkObjectArgs),
    NetworkObjectGroup(NetworkObjectGroupArgs),
    ServiceObject(ServiceObjectArgs),
    Ikev1Policy(Ikev1PolicyArgs),
    WriteMem,
}

impl Task {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NetworkObject(_) => "network-object",
            Self::NetworkObjectGroup(_) => "network-object-group",
            Self::ServiceObject(_) => "service-object",
            Self::Ikev1Policy(_) => "ikev1-policy",
            Self::WriteMem => "write-mem",
        }
    }

    /// Check the declared state without a device.
    ///
    /// Runs the same translation as [`run_task`]; the authority only feeds
    /// reference links, so a placeholder stands in for it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        const PLACEHOLDER_HOST: &str = "localhost";
        match self {
            Self::NetworkObject(args) => args.translate().map(drop),
            Self::NetworkObjectGroup(args) => args.translate(PLACEHOLDER_HOST).map(drop),
            Self::ServiceObject(args) => args.translate().map(drop),
            Self::Ikev1Policy(args) => args.translate(PLACEHOLDER_HOST).map(drop),
            Self::WriteMem => Ok(()),
        }
    }
}

/// Translate the task's declared state and converge the device to it.
pub async fn run_task<C: DeviceClient>(client: &C, task: &Task) -> Result<Outcome, CoreError> {
    debug!(task = task.label(), "running task");
    match task {
        Task::NetworkObject(args) => {
            let object = args.translate()?;
            reconcile(client, &object).await
        }
        Task::NetworkObjectGroup(args) => {
            let object = args.translate(&client.host())?;
            reconcile(client, &object).await
        }
        Task::ServiceObject(args) => {
            let object = args.translate()?;
            reconcile(client, &object).await
        }
        Task::Ikev1Policy(args) => {
            let object = args.translate(&client.host())?;
            reconcile(client, &object).await
        }
        Task::WriteMem => write_mem(client).await,
    }
}
