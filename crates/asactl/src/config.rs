//! Layer CLI flags over the profile configuration.
//!
//! Precedence: flag > env var (clap) > profile > `[defaults]`.

use secrecy::SecretString;

use asactl_config::{Config, ConfigError, Profile, profile_to_device_config};
use asactl_core::DeviceConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use asactl_config::{config_path, load_config_or_default};

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

pub fn available_profiles(config: &Config) -> String {
    join_profiles(&config.profile_names())
}

/// Profile names for a help line; `(none)` when there are none.
pub fn join_profiles(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".into()
    } else {
        names.join(", ")
    }
}

/// Build the device connection settings for this invocation.
///
/// Returns the profile name alongside so errors can point at it. An explicit
/// `--profile` that does not exist is an error; a missing default profile is
/// not, as long as flags supply the host and credentials.
pub fn device_config(global: &GlobalOpts) -> Result<(String, DeviceConfig), CliError> {
    let cfg = load_config_or_default();
    let name = active_profile_name(global, &cfg);

    let profile = match cfg.profile(Some(&name)) {
        Ok((_, profile)) => profile.clone(),
        Err(ConfigError::ProfileNotFound { .. }) if global.profile.is_none() => Profile::default(),
        Err(err) => return Err(err.into()),
    };

    let merged = apply_overrides(profile, global);
    if merged.host.is_empty() {
        return Err(CliError::NoConfig {
            path: config_path().display().to_string(),
        });
    }

    let password = global.password.clone().map(SecretString::from);
    let device = profile_to_device_config(&merged, &name, &cfg.defaults, password)?;
    tracing::debug!(profile = %name, url = %device.url, "resolved device");
    Ok((name, device))
}

fn apply_overrides(profile: Profile, global: &GlobalOpts) -> Profile {
    Profile {
        host: global.host.clone().unwrap_or(profile.host),
        username: global.username.clone().or(profile.username),
        validate_certs: global.validate_certs.or(profile.validate_certs),
        timeout: global.timeout.or(profile.timeout),
        ..profile
    }
}
