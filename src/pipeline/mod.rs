//! Document generation orchestration.
//!
//! - [`DocumentService`]: renders HTML to PDF, degrading to plain text
//! - [`DocumentServiceBuilder`]: assembles a service from settings and parts

mod builder;
mod service;

pub use builder::DocumentServiceBuilder;
pub use service::{DocumentService, PLACEHOLDER_TEXT};
