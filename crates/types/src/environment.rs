//! Hosted vs. local execution.
//!
//! Constrained hosted runtimes do not ship a standard Chrome and need a
//! purpose-built Chromium with adjusted sandboxing. Which one applies is
//! decided by a single boolean-like process flag.

use serde::Deserialize;

/// Process flag marking a constrained hosted runtime.
pub const HOSTED_FLAG_VAR: &str = "FLEETDOC_HOSTED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionEnvironment {
    Hosted,
    Local,
}

impl ExecutionEnvironment {
    /// Interprets a raw flag value. Unset or unrecognised values mean local.
    pub fn from_flag(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => {
                ExecutionEnvironment::Hosted
            }
            _ => ExecutionEnvironment::Local,
        }
    }

    /// Reads [`HOSTED_FLAG_VAR`] from the process environment.
    pub fn detect() -> Self {
        let raw = std::env::var(HOSTED_FLAG_VAR).ok();
        let env = Self::from_flag(raw.as_deref());
        log::debug!("{}={:?} -> {:?}", HOSTED_FLAG_VAR, raw, env);
        env
    }
}

/// Configured environment choice. `Auto` defers to the process flag at the
/// moment it is resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentSetting {
    #[default]
    Auto,
    Hosted,
    Local,
}

impl EnvironmentSetting {
    pub fn resolve(self) -> ExecutionEnvironment {
        match self {
            EnvironmentSetting::Auto => ExecutionEnvironment::detect(),
            EnvironmentSetting::Hosted => ExecutionEnvironment::Hosted,
            EnvironmentSetting::Local => ExecutionEnvironment::Local,
        }
    }
}
