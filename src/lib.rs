//! fleetdoc: HTML to PDF document generation with graceful degradation.
//!
//! [`DocumentService`] turns an HTML document into PDF bytes. The preferred
//! path drives a headless browser for a faithful print of the page. When that
//! fails for any reason the service extracts the visible text and encodes it
//! into a minimal single-page PDF, so a call always yields a valid document.
//!
//! ```ignore
//! use fleetdoc::{DocumentServiceBuilder, RenderRequest, Settings};
//!
//! let service = DocumentServiceBuilder::new()
//!     .with_settings(Settings::load()?)
//!     .build()?;
//! let document = service
//!     .render_document(RenderRequest::new(html).with_filename_hint("Q3 fleet report"))
//!     .await;
//! std::fs::write(document.filename(), document.bytes())?;
//! ```

pub mod config;
pub mod error;
pub mod pipeline;

pub use crate::config::{FallbackSettings, Settings};
pub use error::PipelineError;
pub use pipeline::{DocumentService, DocumentServiceBuilder, PLACEHOLDER_TEXT};

pub use fleetdoc_render_chrome::{ChromeConfig, ChromeRenderer};
pub use fleetdoc_render_minimal::{LineBudget, MinimalPdfEncoder};
pub use fleetdoc_text::ExtractionOptions;
pub use fleetdoc_traits::{HtmlRenderer, RenderFailure, RenderStage, UnavailableRenderer};
pub use fleetdoc_types::{
    DocumentOrigin, EnvironmentSetting, ExecutionEnvironment, RenderRequest, RenderedDocument,
};
