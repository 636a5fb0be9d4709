use crate::config::ChromeConfig;
use crate::resolver::BrowserBinary;
use fleetdoc_traits::RenderFailure;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Instant;

/// One browser process, owned for the duration of a single render.
///
/// The process is terminated when the session is dropped, whichever way the
/// render ends.
pub struct BrowserSession {
    browser: Option<Browser>,
    binary: String,
    started: Instant,
}

impl std::fmt::Debug for BrowserSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserSession")
            .field("binary", &self.binary)
            .field("alive", &self.browser.is_some())
            .finish()
    }
}

impl BrowserSession {
    pub fn launch(binary: &BrowserBinary, config: &ChromeConfig) -> Result<Self, RenderFailure> {
        let started = Instant::now();
        let args: Vec<&OsStr> = binary.args.iter().map(|a| a.as_os_str()).collect();

        let options = LaunchOptions::default_builder()
            .path(Some(binary.path.clone()))
            .headless(true)
            .sandbox(binary.sandbox)
            .args(args)
            .idle_browser_timeout(config.idle_browser_timeout())
            .build()
            .map_err(|e| RenderFailure::Launch(format!("invalid launch options: {}", e)))?;

        let browser = Browser::new(options).map_err(|e| {
            log::error!("Failed to launch {}: {}", binary.path.display(), e);
            RenderFailure::Launch(e.to_string())
        })?;

        log::debug!(
            "Launched {} (sandbox: {}) in {:?}",
            binary.path.display(),
            binary.sandbox,
            started.elapsed()
        );

        Ok(Self {
            browser: Some(browser),
            binary: binary.path.display().to_string(),
            started,
        })
    }

    pub fn new_tab(&self) -> Result<Arc<Tab>, RenderFailure> {
        let browser = self
            .browser
            .as_ref()
            .ok_or_else(|| RenderFailure::Crashed("browser session already closed".into()))?;
        browser.new_tab().map_err(|e| {
            log::error!("Failed to create tab: {}", e);
            RenderFailure::Launch(format!("tab creation failed: {}", e))
        })
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        if let Some(browser) = self.browser.take() {
            drop(browser);
            log::debug!(
                "Browser {} terminated after {:?}",
                self.binary,
                self.started.elapsed()
            );
        }
    }
}

/// Closes `tab`, logging instead of failing. The PDF has already been
/// captured by the time this runs.
pub(crate) fn close_tab_safely(tab: &Tab) {
    if let Err(e) = tab.close(true) {
        log::warn!("Failed to close tab (browser teardown will reclaim it): {}", e);
    } else {
        log::trace!("Tab closed");
    }
}
