//! HtmlRenderer trait for abstracting the high-fidelity render path.
//!
//! The orchestrator only needs "HTML in, PDF bytes or a failure out". Keeping
//! that behind a trait lets the browser backend be swapped for a stub in tests
//! or disabled entirely in fallback-only deployments.

use std::fmt::Debug;
use thiserror::Error;

/// Where in the render the time budget ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStage {
    Launch,
    Navigation,
    NetworkIdle,
    Print,
}

impl std::fmt::Display for RenderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RenderStage::Launch => "launch",
            RenderStage::Navigation => "navigation",
            RenderStage::NetworkIdle => "network idle",
            RenderStage::Print => "print",
        };
        f.write_str(name)
    }
}

/// Any reason the high-fidelity path could not produce a document.
///
/// The orchestrator treats every variant the same way (fall back); the
/// distinction exists for logs.
#[derive(Error, Debug, Clone)]
pub enum RenderFailure {
    #[error("Browser binary not found: {0}")]
    BinaryNotFound(String),

    #[error("Failed to launch browser: {0}")]
    Launch(String),

    #[error("Failed to load document: {0}")]
    Navigation(String),

    #[error("Timed out during {stage} after {waited_ms}ms")]
    Timeout { stage: RenderStage, waited_ms: u64 },

    #[error("Failed to print page to PDF: {0}")]
    Rasterize(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Renderer crashed: {0}")]
    Crashed(String),

    #[error("Renderer unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for RenderFailure {
    fn from(err: std::io::Error) -> Self {
        RenderFailure::Io(err.to_string())
    }
}

/// A renderer turning a complete HTML document into PDF bytes.
///
/// Implementations are blocking. Async callers are expected to move the call
/// onto a blocking thread. Implementations must release every OS resource
/// they acquire before returning, on success and on failure alike.
///
/// # Implementations
///
/// - `ChromeRenderer` (fleetdoc-render-chrome): headless Chromium
/// - [`UnavailableRenderer`]: always fails, used for fallback-only mode
pub trait HtmlRenderer: Send + Sync + Debug {
    /// Render `html` to a PDF.
    fn render(&self, html: &str) -> Result<Vec<u8>, RenderFailure>;

    /// Returns a human-readable name for this renderer (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A renderer that never succeeds.
#[derive(Debug, Clone)]
pub struct UnavailableRenderer {
    reason: String,
}

impl UnavailableRenderer {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for UnavailableRenderer {
    fn default() -> Self {
        Self::new("high-fidelity rendering disabled")
    }
}

impl HtmlRenderer for UnavailableRenderer {
    fn render(&self, _html: &str) -> Result<Vec<u8>, RenderFailure> {
        Err(RenderFailure::Unavailable(self.reason.clone()))
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}
