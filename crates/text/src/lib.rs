//! Plain-text extraction from assembled HTML documents.
//!
//! Used by the fallback path when the browser renderer is unavailable: the
//! same HTML is reduced to readable text which the minimal encoder can lay
//! out without any rendering engine.

mod error;
mod extract;

pub use error::ExtractionError;
pub use extract::{
    DEFAULT_MAX_CHARS, DEFAULT_MAX_INPUT_BYTES, ExtractedText, ExtractionOptions, extract_text,
    extract_text_with,
};
