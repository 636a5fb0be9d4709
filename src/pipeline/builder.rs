// src/pipeline/builder.rs
use super::service::DocumentService;
use crate::config::Settings;
use crate::error::PipelineError;
use fleetdoc_render_chrome::ChromeRenderer;
use fleetdoc_render_minimal::{LineBudget, MinimalPdfEncoder};
use fleetdoc_text::ExtractionOptions;
use fleetdoc_traits::{HtmlRenderer, UnavailableRenderer};
use std::sync::Arc;

/// A builder for creating a [`DocumentService`].
#[derive(Debug, Default)]
pub struct DocumentServiceBuilder {
    settings: Settings,
    renderer: Option<Arc<dyn HtmlRenderer>>,
    line_budget: Option<LineBudget>,
    extraction: Option<ExtractionOptions>,
    fallback_only: bool,
}

impl DocumentServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `settings` for the browser and the fallback limits. Explicit
    /// `with_*` calls still take precedence.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Replaces the headless Chromium renderer.
    pub fn with_renderer<R: HtmlRenderer + 'static>(mut self, renderer: R) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    pub fn with_shared_renderer(mut self, renderer: Arc<dyn HtmlRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn with_line_budget(mut self, budget: LineBudget) -> Self {
        self.line_budget = Some(budget);
        self
    }

    pub fn with_extraction_options(mut self, options: ExtractionOptions) -> Self {
        self.extraction = Some(options);
        self
    }

    /// Skips the browser entirely; every document comes from the fallback
    /// path.
    pub fn fallback_only(mut self, fallback_only: bool) -> Self {
        self.fallback_only = fallback_only;
        self
    }

    /// Consumes the builder and creates the [`DocumentService`].
    pub fn build(self) -> Result<DocumentService, PipelineError> {
        self.settings.validate()?;

        let budget = self
            .line_budget
            .unwrap_or_else(|| self.settings.fallback.line_budget());
        if budget.max_chars_per_line == 0 || budget.max_lines == 0 {
            return Err(PipelineError::Config(format!(
                "line budget must allow at least one character and one line (got {}x{})",
                budget.max_chars_per_line, budget.max_lines
            )));
        }

        let extraction = self
            .extraction
            .unwrap_or_else(|| self.settings.fallback.extraction_options());
        if extraction.max_chars == 0 {
            return Err(PipelineError::Config(
                "extraction must keep at least one character".to_string(),
            ));
        }

        let renderer: Arc<dyn HtmlRenderer> = if self.fallback_only {
            Arc::new(UnavailableRenderer::new("fallback-only mode"))
        } else if let Some(renderer) = self.renderer {
            renderer
        } else {
            Arc::new(ChromeRenderer::new(self.settings.renderer.clone()))
        };

        log::debug!(
            "Document service: renderer={}, fallback budget {}x{}, extraction cap {} chars",
            renderer.name(),
            budget.max_chars_per_line,
            budget.max_lines,
            extraction.max_chars
        );

        Ok(DocumentService::new(
            renderer,
            MinimalPdfEncoder::new().with_budget(budget),
            extraction,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_chrome_renderer() {
        let service = DocumentServiceBuilder::new().build().unwrap();
        assert_eq!(service.renderer_name(), "chrome");
    }

    #[test]
    fn fallback_only_overrides_custom_renderer() {
        let service = DocumentServiceBuilder::new()
            .with_renderer(UnavailableRenderer::new("custom"))
            .fallback_only(true)
            .build()
            .unwrap();
        assert_eq!(service.renderer_name(), "unavailable");
    }

    #[test]
    fn rejects_empty_line_budget() {
        let result = DocumentServiceBuilder::new()
            .with_line_budget(LineBudget {
                max_chars_per_line: 80,
                max_lines: 0,
            })
            .build();
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }

    #[test]
    fn rejects_zero_extraction_cap() {
        let result = DocumentServiceBuilder::new()
            .with_extraction_options(ExtractionOptions {
                max_chars: 0,
                ..ExtractionOptions::default()
            })
            .build();
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }

    #[test]
    fn invalid_settings_fail_the_build() {
        let mut settings = Settings::default();
        settings.fallback.max_chars_per_line = 0;
        let result = DocumentServiceBuilder::new().with_settings(settings).build();
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }
}
