use crate::config::ChromeConfig;
use crate::events::page_listener;
use crate::idle::NetworkIdleTracker;
use crate::print::print_options;
use crate::resolver::{BinaryResolver, HostedChromiumResolver, LocalChromeResolver};
use crate::session::{BrowserSession, close_tab_safely};
use fleetdoc_traits::{HtmlRenderer, RenderFailure, RenderStage};
use fleetdoc_types::{ExecutionEnvironment, PDF_SIGNATURE};
use headless_chrome::Tab;
use headless_chrome::protocol::cdp::{Log, Page, Runtime};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;

/// Renders HTML through a fresh headless Chromium per call.
#[derive(Debug)]
pub struct ChromeRenderer {
    config: ChromeConfig,
    local: Box<dyn BinaryResolver>,
    hosted: Box<dyn BinaryResolver>,
}

impl ChromeRenderer {
    pub fn new(config: ChromeConfig) -> Self {
        let local = Box::new(LocalChromeResolver::new(config.chrome_path.clone()));
        let hosted = Box::new(HostedChromiumResolver::from_env(
            config.hosted_chromium_path.clone(),
        ));
        Self {
            config,
            local,
            hosted,
        }
    }

    /// Replaces binary discovery for both environments.
    pub fn with_resolvers(
        mut self,
        local: Box<dyn BinaryResolver>,
        hosted: Box<dyn BinaryResolver>,
    ) -> Self {
        self.local = local;
        self.hosted = hosted;
        self
    }

    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    fn resolver_for(&self, environment: ExecutionEnvironment) -> &dyn BinaryResolver {
        match environment {
            ExecutionEnvironment::Hosted => self.hosted.as_ref(),
            ExecutionEnvironment::Local => self.local.as_ref(),
        }
    }

    fn print_page(&self, tab: &Tab, url: &str) -> Result<Vec<u8>, RenderFailure> {
        tab.set_default_timeout(self.config.navigation_timeout());

        let tracker = Arc::new(NetworkIdleTracker::new());
        tab.add_event_listener(Arc::new(page_listener(Arc::clone(&tracker))))
            .map_err(|e| RenderFailure::Launch(format!("event listener: {}", e)))?;
        tab.call_method(Page::SetLifecycleEventsEnabled { enabled: true })
            .map_err(|e| RenderFailure::Launch(format!("lifecycle events: {}", e)))?;
        // Diagnostics only; a tab without them still renders.
        if let Err(e) = tab.call_method(Log::Enable(None)) {
            log::debug!("Log domain unavailable: {}", e);
        }
        if let Err(e) = tab.call_method(Runtime::Enable(None)) {
            log::debug!("Runtime domain unavailable: {}", e);
        }

        tracker.reset();
        let nav_start = Instant::now();
        tab.navigate_to(url)
            .map_err(|e| RenderFailure::Navigation(e.to_string()))?;
        tab.wait_until_navigated()
            .map_err(|e| navigation_failure(&e.to_string(), nav_start.elapsed()))?;
        log::debug!("Document loaded in {:?}", nav_start.elapsed());

        let idle_start = Instant::now();
        if !tracker.wait(self.config.network_idle_timeout()) {
            log::warn!(
                "Network still busy after {:?}; giving up on this render",
                idle_start.elapsed()
            );
            return Err(RenderFailure::Timeout {
                stage: RenderStage::NetworkIdle,
                waited_ms: millis(idle_start.elapsed()),
            });
        }
        log::debug!("Network idle after {:?}", idle_start.elapsed());

        std::thread::sleep(self.config.grace_delay());

        let print_start = Instant::now();
        let pdf = tab
            .print_to_pdf(Some(print_options(&self.config.page())))
            .map_err(|e| RenderFailure::Rasterize(e.to_string()))?;
        if !pdf.starts_with(PDF_SIGNATURE) {
            return Err(RenderFailure::Rasterize(format!(
                "browser returned {} bytes that are not a PDF",
                pdf.len()
            )));
        }
        log::debug!(
            "PDF printed in {:?} ({} bytes)",
            print_start.elapsed(),
            pdf.len()
        );
        Ok(pdf)
    }
}

impl HtmlRenderer for ChromeRenderer {
    fn render(&self, html: &str) -> Result<Vec<u8>, RenderFailure> {
        let started = Instant::now();
        let environment = self.config.environment.resolve();
        let resolver = self.resolver_for(environment);
        let binary = resolver
            .resolve()?
            .with_extra_args(self.config.extra_args.iter());
        log::debug!(
            "Rendering {} bytes of HTML via {} ({:?})",
            html.len(),
            resolver.name(),
            environment
        );

        let document = stage_html(html)?;
        let url = file_url(document.path());

        let session = BrowserSession::launch(&binary, &self.config)?;
        let tab = session.new_tab()?;
        let result = self.print_page(&tab, &url);
        close_tab_safely(&tab);
        drop(tab);
        drop(session);

        match &result {
            Ok(pdf) => log::info!(
                "Browser render finished in {:?} ({} bytes)",
                started.elapsed(),
                pdf.len()
            ),
            Err(e) => log::warn!("Browser render failed after {:?}: {}", started.elapsed(), e),
        }
        result
    }

    fn name(&self) -> &'static str {
        "chrome"
    }
}

/// Writes the HTML to a temporary `.html` file so the page gets a real
/// origin and relative URLs resolve against a directory. The file is
/// removed when the handle drops.
fn stage_html(html: &str) -> Result<NamedTempFile, RenderFailure> {
    let mut file = tempfile::Builder::new()
        .prefix("fleetdoc-")
        .suffix(".html")
        .tempfile()?;
    file.write_all(html.as_bytes())?;
    file.flush()?;
    Ok(file)
}

fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

fn navigation_failure(message: &str, waited: Duration) -> RenderFailure {
    let lower = message.to_ascii_lowercase();
    if lower.contains("timed out") || lower.contains("timeout") {
        RenderFailure::Timeout {
            stage: RenderStage::Navigation,
            waited_ms: millis(waited),
        }
    } else {
        RenderFailure::Navigation(message.to_string())
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
