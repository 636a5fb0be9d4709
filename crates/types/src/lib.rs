pub mod document;
pub mod environment;
pub mod geometry;

pub use document::{
    DocumentMetadata, DocumentOrigin, PDF_SIGNATURE, RenderRequest, RenderedDocument,
    suggested_filename,
};
pub use environment::{EnvironmentSetting, ExecutionEnvironment, HOSTED_FLAG_VAR};
pub use geometry::PageGeometry;
