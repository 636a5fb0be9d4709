#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use fleetdoc::{DocumentService, DocumentServiceBuilder, HtmlRenderer, RenderFailure};
use lopdf::Document as LopdfDocument;
use std::sync::atomic::{AtomicUsize, Ordering};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Parse raw bytes with lopdf
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text drawn by `Tj` operators on the first page, one entry per line.
    pub fn lines(&self) -> Vec<String> {
        pdf_assertions::shown_strings(&self.doc)
    }
}

/// Renderer returning a fixed payload, counting calls.
#[derive(Debug, Default)]
pub struct FixedRenderer {
    pub payload: Vec<u8>,
    pub calls: AtomicUsize,
}

impl FixedRenderer {
    pub fn pdf() -> Self {
        Self {
            payload: b"%PDF-1.7\n% browser output\n%%EOF\n".to_vec(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn returning(payload: &[u8]) -> Self {
        Self {
            payload: payload.to_vec(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl HtmlRenderer for FixedRenderer {
    fn render(&self, _html: &str) -> Result<Vec<u8>, RenderFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.payload.clone())
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Renderer that fails with a chosen error.
#[derive(Debug)]
pub struct FailingRenderer(pub RenderFailure);

impl HtmlRenderer for FailingRenderer {
    fn render(&self, _html: &str) -> Result<Vec<u8>, RenderFailure> {
        Err(self.0.clone())
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Renderer that panics mid-render, like a crashed browser binding.
#[derive(Debug)]
pub struct PanickingRenderer;

impl HtmlRenderer for PanickingRenderer {
    fn render(&self, _html: &str) -> Result<Vec<u8>, RenderFailure> {
        panic!("browser connection dropped")
    }

    fn name(&self) -> &'static str {
        "panicking"
    }
}

pub fn service_with<R: HtmlRenderer + 'static>(renderer: R) -> DocumentService {
    DocumentServiceBuilder::new()
        .with_renderer(renderer)
        .build()
        .expect("default settings are valid")
}

pub fn fallback_service() -> DocumentService {
    DocumentServiceBuilder::new()
        .fallback_only(true)
        .build()
        .expect("default settings are valid")
}
