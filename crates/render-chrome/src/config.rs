use fleetdoc_types::{EnvironmentSetting, PageGeometry};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Settings for [`crate::ChromeRenderer`]. Every field has a default, so an
/// empty configuration source is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// `auto` consults the hosted flag on every render call.
    pub environment: EnvironmentSetting,
    /// Chrome binary for local runs. Discovered automatically when unset.
    pub chrome_path: Option<PathBuf>,
    /// Chromium binary for hosted runs.
    pub hosted_chromium_path: Option<PathBuf>,
    pub navigation_timeout_ms: u64,
    pub network_idle_timeout_ms: u64,
    /// Pause after the network settles, for image and font decoding.
    pub grace_delay_ms: u64,
    pub margin_mm: f32,
    /// Appended to the environment's launch arguments.
    pub extra_args: Vec<String>,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            environment: EnvironmentSetting::Auto,
            chrome_path: None,
            hosted_chromium_path: None,
            navigation_timeout_ms: 30_000,
            network_idle_timeout_ms: 30_000,
            grace_delay_ms: 500,
            margin_mm: 10.0,
            extra_args: Vec::new(),
        }
    }
}

impl ChromeConfig {
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_millis(self.navigation_timeout_ms)
    }

    pub fn network_idle_timeout(&self) -> Duration {
        Duration::from_millis(self.network_idle_timeout_ms)
    }

    pub fn grace_delay(&self) -> Duration {
        Duration::from_millis(self.grace_delay_ms)
    }

    pub fn page(&self) -> PageGeometry {
        PageGeometry::a4().with_margin_mm(self.margin_mm)
    }

    /// How long the browser connection may sit idle before headless_chrome
    /// gives up on it. Must outlast the longest single wait of a render.
    pub fn idle_browser_timeout(&self) -> Duration {
        let longest = self
            .navigation_timeout_ms
            .max(self.network_idle_timeout_ms)
            .max(self.grace_delay_ms);
        Duration::from_millis(longest + 10_000)
    }
}
