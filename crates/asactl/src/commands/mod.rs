//! Command dispatch.

pub mod config_cmd;
pub mod objects;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Route a device command to its handler.
pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    // Bad input is reported before the device config is resolved.
    match objects::task_for(cmd).map(|task| task.and_then(|t| t.validate().map(|()| t))) {
        Some(Ok(task)) => objects::handle(task, global).await,
        Some(Err(err)) => Err(objects::reject(err, global)),
        None => Err(CliError::Internal {
            message: "command has no device task".into(),
        }),
    }
}
