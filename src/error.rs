// src/error.rs
use thiserror::Error;

/// Errors raised while assembling a [`crate::DocumentService`] or driving the
/// CLI around it. Rendering itself never fails; see
/// [`crate::DocumentService::render_document`].
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load settings: {0}")]
    Settings(#[from] config::ConfigError),
}
