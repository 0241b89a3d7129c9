//! Environment overrides.
//!
//! `THEMEPORT_*` variables take precedence over every config file.

use crate::error::ConfigError;

use super::Config;

/// Timeout override in whole seconds.
pub(super) const ENV_TIMEOUT_SECS: &str = "THEMEPORT_TIMEOUT_SECS";
/// Preview color override (`1`/`0`, `true`/`false`, `on`/`off`, `yes`/`no`).
pub(super) const ENV_COLOR: &str = "THEMEPORT_COLOR";

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(timeout) = non_empty(env_lookup(ENV_TIMEOUT_SECS)) {
        let parsed = timeout.parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid {ENV_TIMEOUT_SECS} value `{timeout}`: expected positive integer seconds"
            ))
        })?;
        config.network.timeout_secs = Some(parsed.max(1));
    }
    if let Some(color) = non_empty(env_lookup(ENV_COLOR)) {
        config.display.color = parse_flag(&color).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "invalid {ENV_COLOR} value `{color}`: expected true/false"
            ))
        })?;
    }
    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
