// src/config.rs
use crate::error::PipelineError;
use fleetdoc_render_chrome::ChromeConfig;
use fleetdoc_render_minimal::LineBudget;
use fleetdoc_text::ExtractionOptions;
use serde::Deserialize;
use std::path::Path;

/// Variable naming an explicit settings file.
pub const CONFIG_PATH_VAR: &str = "FLEETDOC_CONFIG";
/// Settings file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "fleetdoc.toml";
/// Prefix for environment overrides, e.g. `FLEETDOC__RENDERER__GRACE_DELAY_MS`.
pub const ENV_PREFIX: &str = "FLEETDOC";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub renderer: ChromeConfig,
    pub fallback: FallbackSettings,
}

/// Limits for the plain-text fallback document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FallbackSettings {
    pub max_chars_per_line: usize,
    pub max_lines: usize,
    /// Extracted text is cut to this many characters before encoding.
    pub max_extracted_chars: usize,
    /// HTML larger than this skips extraction and yields the placeholder.
    pub max_input_bytes: usize,
}

impl Default for FallbackSettings {
    fn default() -> Self {
        let budget = LineBudget::default();
        let extraction = ExtractionOptions::default();
        Self {
            max_chars_per_line: budget.max_chars_per_line,
            max_lines: budget.max_lines,
            max_extracted_chars: extraction.max_chars,
            max_input_bytes: extraction.max_input_bytes,
        }
    }
}

impl FallbackSettings {
    pub fn line_budget(&self) -> LineBudget {
        LineBudget::new(self.max_chars_per_line, self.max_lines)
    }

    pub fn extraction_options(&self) -> ExtractionOptions {
        ExtractionOptions {
            max_chars: self.max_extracted_chars,
            max_input_bytes: self.max_input_bytes,
        }
    }
}

impl Settings {
    /// Loads settings from the file named by [`CONFIG_PATH_VAR`] (or
    /// [`DEFAULT_CONFIG_FILE`] when it exists), then layers `FLEETDOC__*`
    /// environment variables on top. No source at all yields the defaults.
    pub fn load() -> Result<Self, PipelineError> {
        let explicit = std::env::var(CONFIG_PATH_VAR)
            .ok()
            .filter(|path| !path.is_empty());

        match explicit {
            Some(path) => {
                if !Path::new(&path).is_file() {
                    return Err(PipelineError::Config(format!(
                        "{} points at '{}', which does not exist",
                        CONFIG_PATH_VAR, path
                    )));
                }
                Self::load_from(Some(Path::new(&path)))
            }
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                Self::load_from(default.is_file().then_some(default))
            }
        }
    }

    /// Loads from an optional TOML file plus the environment.
    pub fn load_from(file: Option<&Path>) -> Result<Self, PipelineError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            log::debug!("Loading settings from {}", path.display());
            builder = builder.add_source(
                config::File::from(path).format(config::FileFormat::Toml),
            );
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("renderer.extra_args")
                .try_parsing(true),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.fallback.max_chars_per_line == 0 {
            return Err(PipelineError::Config(
                "fallback.max_chars_per_line must be at least 1".to_string(),
            ));
        }
        if self.fallback.max_lines == 0 {
            return Err(PipelineError::Config(
                "fallback.max_lines must be at least 1".to_string(),
            ));
        }
        if self.renderer.margin_mm < 0.0 {
            return Err(PipelineError::Config(format!(
                "renderer.margin_mm must not be negative (got {})",
                self.renderer.margin_mm
            )));
        }
        Ok(())
    }
}
