//! Object subcommand handlers: translate flags into a task, converge, report.

use asactl_core::{
    Device, Ikev1PolicyArgs, Intent, NetworkObjectArgs, NetworkObjectGroupArgs, Report,
    ServiceObjectArgs, Task, ValidationError, parse_choice,
};

use crate::cli::{self, Command, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

// ── Flag translation ────────────────────────────────────────────────

fn choice<T>(field: &str, value: Option<&String>) -> Result<Option<T>, ValidationError>
where
    T: std::str::FromStr + strum::VariantNames,
{
    value.map(|v| parse_choice(field, v)).transpose()
}

fn network_object(args: cli::NetworkObjectArgs) -> Result<Task, ValidationError> {
    Ok(Task::NetworkObject(NetworkObjectArgs {
        state: parse_choice::<Intent>("state", &args.state)?,
        category: choice("category", args.category.as_ref())?,
        name: args.name,
        value: args.value,
        description: args.description,
    }))
}

fn network_object_group(args: cli::NetworkObjectGroupArgs) -> Result<Task, ValidationError> {
    Ok(Task::NetworkObjectGroup(NetworkObjectGroupArgs {
        state: parse_choice::<Intent>("state", &args.state)?,
        category: choice("category", args.category.as_ref())?,
        entry_state: choice("entry_state", args.entry_state.as_ref())?,
        name: args.name,
        value: args.value,
        description: args.description,
        members: args.members,
    }))
}

fn service_object(args: cli::ServiceObjectArgs) -> Result<Task, ValidationError> {
    Ok(Task::ServiceObject(ServiceObjectArgs {
        state: parse_choice::<Intent>("state", &args.state)?,
        name: args.name,
        protocol: args.protocol,
        src_port: args.src_port,
        dst_port: args.dst_port,
        description: args.description,
    }))
}

fn ikev1_policy(args: cli::Ikev1PolicyArgs) -> Result<Task, ValidationError> {
    Ok(Task::Ikev1Policy(Ikev1PolicyArgs {
        state: parse_choice::<Intent>("state", &args.state)?,
        authentication: choice("authentication", args.authentication.as_ref())?,
        encryption: choice("encryption", args.encryption.as_ref())?,
        hash: choice("hash", args.hash.as_ref())?,
        priority: args.priority,
        group: args.group,
        lifetime: args.lifetime,
    }))
}

/// Map an object subcommand to its task. `None` for non-object commands.
pub fn task_for(cmd: Command) -> Option<Result<Task, ValidationError>> {
    Some(match cmd {
        Command::NetworkObject(args) => network_object(args),
        Command::NetworkObjectGroup(args) => network_object_group(args),
        Command::ServiceObject(args) => service_object(args),
        Command::Ikev1Policy(args) => ikev1_policy(args),
        Command::WriteMem => Ok(Task::WriteMem),
        Command::Config(_) | Command::Completions(_) => return None,
    })
}

// ── Handler ─────────────────────────────────────────────────────────

/// Converge one task and print its report.
///
/// Failures are reported on stdout in the selected format and returned so
/// `main` can print the diagnostic and exit non-zero.
pub async fn handle(task: Task, global: &GlobalOpts) -> Result<(), CliError> {
    let (profile, device_config) = config::device_config(global)?;
    let device = Device::new(&device_config)?;

    tracing::debug!(task = task.label(), profile = %profile, "applying");
    let result = device.apply(&task).await;

    let report = Report::from_result(&result);
    tracing::info!(
        task = task.label(),
        changed = report.changed(),
        failed = report.is_failure(),
        "task finished"
    );
    output::print_output(&output::render_report(&global.output, &report), global.quiet);

    result
        .map(|_| ())
        .map_err(|e| CliError::from(e).for_profile(&profile))
}

/// Report a flag combination rejected before any connection is made.
pub fn reject(err: ValidationError, global: &GlobalOpts) -> CliError {
    let err = asactl_core::CoreError::from(err);
    let report = Report::failure(&err);
    output::print_output(&output::render_report(&global.output, &report), global.quiet);
    CliError::from(err)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;

    use asactl_core::{Category, Encryption};

    use super::*;
    use crate::cli::Cli;

    fn task(args: &[&str]) -> Task {
        let cli = Cli::try_parse_from(std::iter::once("asactl").chain(args.iter().copied())).unwrap();
        task_for(cli.command).unwrap().unwrap()
    }

    #[test]
    fn network_object_flags_become_typed_args() {
        let Task::NetworkObject(args) = task(&[
            "network-object",
            "--name",
            "web1",
            "--category",
            "ipv4_subnet",
            "--value",
            "10.0.0.0/24",
        ]) else {
            panic!("wrong task");
        };
        assert_eq!(args.state, Intent::Present);
        assert_eq!(args.category, Some(Category::Ipv4Subnet));
        assert_eq!(args.value.as_deref(), Some("10.0.0.0/24"));
    }

    #[test]
    fn group_members_split_on_commas() {
        let Task::NetworkObjectGroup(args) = task(&[
            "network-object-group",
            "--name",
            "servers",
            "--state",
            "absent",
            "--members",
            "a,b",
        ]) else {
            panic!("wrong task");
        };
        assert_eq!(args.state, Intent::Absent);
        assert_eq!(args.members, Some(vec!["a".to_owned(), "b".to_owned()]));
    }

    #[test]
    fn ike_encryption_uses_device_spelling() {
        let Task::Ikev1Policy(args) = task(&[
            "ikev1-policy",
            "--priority",
            "10",
            "--encryption",
            "aes-256",
        ]) else {
            panic!("wrong task");
        };
        assert_eq!(args.encryption, Some(Encryption::Aes256));
    }

    #[test]
    fn config_is_not_an_object_task() {
        let cli = Cli::try_parse_from(["asactl", "config", "path"]).unwrap();
        assert!(task_for(cli.command).is_none());
    }
}
