//! Hand-encoded minimal PDF output.
//!
//! This crate builds a single-page, single-font PDF directly from a text
//! string: catalog, page tree, page, content stream, font, cross-reference
//! table and trailer. It has no rendering engine behind it and cannot fail,
//! which is what makes it usable as the last fallback of the pipeline.
//!
//! The output is a pure function of the input text, the [`LineBudget`] and
//! the [`TextLayout`]: no timestamps, IDs or random data are embedded.

mod encoder;
mod graph;
mod text;
mod writer;

pub use encoder::{EncodedDocument, LineBudget, MinimalPdfEncoder, TextLayout};
pub use graph::{ObjectBody, ObjectGraph, ObjectRecord};
pub use text::{escape_literal, wrap_lines};
pub use writer::serialize;
