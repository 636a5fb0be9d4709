// src/pipeline/service.rs
use fleetdoc_render_minimal::MinimalPdfEncoder;
use fleetdoc_text::{ExtractionOptions, extract_text_with};
use fleetdoc_traits::{HtmlRenderer, RenderFailure};
use fleetdoc_types::{
    DocumentOrigin, PDF_SIGNATURE, RenderRequest, RenderedDocument, suggested_filename,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinError;

/// Encoded in place of the document when not even its text can be recovered.
pub const PLACEHOLDER_TEXT: &str =
    "Document could not be rendered. The original content is unavailable.";

/// The document generation entry point.
///
/// Rendering is total: the browser is tried first, then the extracted plain
/// text, then [`PLACEHOLDER_TEXT`]. Every returned document is a valid PDF.
/// [`RenderedDocument::origin`] tells callers which layer produced it.
///
/// The service is cheap to clone and safe to share between tasks. Each call
/// gets its own browser process.
#[derive(Debug, Clone)]
pub struct DocumentService {
    renderer: Arc<dyn HtmlRenderer>,
    encoder: MinimalPdfEncoder,
    extraction: ExtractionOptions,
}

impl DocumentService {
    pub(crate) fn new(
        renderer: Arc<dyn HtmlRenderer>,
        encoder: MinimalPdfEncoder,
        extraction: ExtractionOptions,
    ) -> Self {
        Self {
            renderer,
            encoder,
            extraction,
        }
    }

    pub fn renderer_name(&self) -> &'static str {
        self.renderer.name()
    }

    pub async fn render_html(&self, html: &str) -> RenderedDocument {
        self.render_document(RenderRequest::new(html)).await
    }

    pub async fn render_document(&self, request: RenderRequest) -> RenderedDocument {
        let started = Instant::now();
        let filename = suggested_filename(request.filename_hint());

        match self.render_with_browser(&request.html).await {
            Ok(bytes) => {
                log::info!(
                    "Rendered {} with {} in {:?} ({} bytes)",
                    filename,
                    self.renderer.name(),
                    started.elapsed(),
                    bytes.len()
                );
                RenderedDocument::new(bytes, DocumentOrigin::Browser, false, filename)
            }
            Err(failure) => {
                log::warn!(
                    "{} renderer failed for {}: {}; falling back to plain text",
                    self.renderer.name(),
                    filename,
                    failure
                );
                let document = self.encode_fallback(&request.html, filename);
                log::info!(
                    "Produced {:?} fallback for {} in {:?} ({} bytes{})",
                    document.origin(),
                    document.filename(),
                    started.elapsed(),
                    document.len(),
                    if document.is_truncated() { ", truncated" } else { "" }
                );
                document
            }
        }
    }

    /// Runs only the fallback path: extracted text, or the placeholder when
    /// extraction fails.
    pub fn render_fallback(&self, html: &str) -> RenderedDocument {
        self.encode_fallback(html, suggested_filename(None))
    }

    async fn render_with_browser(&self, html: &str) -> Result<Vec<u8>, RenderFailure> {
        let renderer = Arc::clone(&self.renderer);
        let html = html.to_owned();
        let bytes = tokio::task::spawn_blocking(move || renderer.render(&html))
            .await
            .map_err(|e| RenderFailure::Crashed(describe_join_error(e)))??;

        if !bytes.starts_with(PDF_SIGNATURE) {
            return Err(RenderFailure::Rasterize(format!(
                "renderer returned {} bytes without a PDF signature",
                bytes.len()
            )));
        }
        Ok(bytes)
    }

    fn encode_fallback(&self, html: &str, filename: String) -> RenderedDocument {
        let (text, origin, text_truncated) = match extract_text_with(html, &self.extraction) {
            Ok(extracted) => (extracted.text, DocumentOrigin::PlainText, extracted.truncated),
            Err(e) => {
                log::warn!("Text extraction failed: {}; using placeholder", e);
                (
                    PLACEHOLDER_TEXT.to_string(),
                    DocumentOrigin::Placeholder,
                    false,
                )
            }
        };

        let encoded = self.encoder.encode(&text);
        RenderedDocument::new(
            encoded.bytes,
            origin,
            text_truncated || encoded.truncated,
            filename,
        )
    }
}

fn describe_join_error(err: JoinError) -> String {
    if err.is_cancelled() {
        return "render task was cancelled".to_string();
    }
    let payload = err.into_panic();
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("renderer panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("renderer panicked: {}", message)
    } else {
        "renderer panicked".to_string()
    }
}
