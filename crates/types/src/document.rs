use std::fmt;

/// Every PDF file starts with this byte sequence.
pub const PDF_SIGNATURE: &[u8] = b"%PDF-";

const DEFAULT_FILENAME: &str = "document";

/// Optional caller-supplied metadata for a render request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMetadata {
    /// A human-readable name the caller would like the file to carry,
    /// e.g. "Invoice 2024-113". Sanitized before use.
    pub filename_hint: String,
}

/// A complete HTML document handed to the pipeline.
///
/// All data is expected to be inlined already; the renderer does not
/// guarantee that network fetches made by the page will succeed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderRequest {
    pub html: String,
    pub metadata: Option<DocumentMetadata>,
}

impl RenderRequest {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            metadata: None,
        }
    }

    pub fn with_filename_hint(mut self, hint: impl Into<String>) -> Self {
        self.metadata = Some(DocumentMetadata {
            filename_hint: hint.into(),
        });
        self
    }

    pub fn filename_hint(&self) -> Option<&str> {
        self.metadata.as_ref().map(|m| m.filename_hint.as_str())
    }
}

/// Which layer of the pipeline produced a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentOrigin {
    /// Full-fidelity output from the headless browser.
    Browser,
    /// Plain text extracted from the HTML, hand-encoded.
    PlainText,
    /// A fixed notice, used when not even text could be recovered.
    Placeholder,
}

impl DocumentOrigin {
    pub fn is_degraded(self) -> bool {
        !matches!(self, DocumentOrigin::Browser)
    }
}

impl fmt::Display for DocumentOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DocumentOrigin::Browser => "browser",
            DocumentOrigin::PlainText => "plain-text fallback",
            DocumentOrigin::Placeholder => "placeholder",
        };
        f.write_str(label)
    }
}

/// The finished document. Produced once per request and handed over to the
/// caller; the pipeline keeps no reference to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    bytes: Vec<u8>,
    origin: DocumentOrigin,
    truncated: bool,
    filename: String,
}

impl RenderedDocument {
    pub fn new(bytes: Vec<u8>, origin: DocumentOrigin, truncated: bool, filename: String) -> Self {
        Self {
            bytes,
            origin,
            truncated,
            filename,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn origin(&self) -> DocumentOrigin {
        self.origin
    }

    /// True when content was dropped to fit the fallback budget. Always false
    /// for browser output.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Suggested download name, always ending in `.pdf`.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn is_pdf(&self) -> bool {
        self.bytes.starts_with(PDF_SIGNATURE)
    }
}

/// Turns an arbitrary caller hint into a safe `*.pdf` file name.
pub fn suggested_filename(hint: Option<&str>) -> String {
    let stem = hint
        .map(|h| h.trim().trim_end_matches(".pdf").trim_end_matches(".PDF"))
        .map(slug::slugify)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
    format!("{}.pdf", stem)
}
