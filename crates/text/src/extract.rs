use crate::error::ExtractionError;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Character cap applied to extracted text.
pub const DEFAULT_MAX_CHARS: usize = 5_000;
/// Inputs larger than this are refused rather than scanned.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;

// An unterminated block swallows everything up to the end of input.
static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script(?:\s[^>]*)?>.*?(?:</script\s*>|\z)")
        .expect("BUG: invalid SCRIPT_RE regex literal")
});
static STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style(?:\s[^>]*)?>.*?(?:</style\s*>|\z)")
        .expect("BUG: invalid STYLE_RE regex literal")
});
static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?(?:-->|\z)").expect("BUG: invalid COMMENT_RE regex literal")
});
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Quoted attribute values may contain `>`.
    Regex::new(r#"</?[A-Za-z!?](?:"[^"]*"|'[^']*'|[^'">])*>"#)
        .expect("BUG: invalid TAG_RE regex literal")
});
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z]{2,8});")
        .expect("BUG: invalid ENTITY_RE regex literal")
});
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("BUG: invalid WHITESPACE_RE regex literal"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionOptions {
    pub max_chars: usize,
    pub max_input_bytes: usize,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    /// Set when the text was cut at `max_chars`.
    pub truncated: bool,
}

/// Extracts readable text using [`ExtractionOptions::default`].
pub fn extract_text(html: &str) -> Result<ExtractedText, ExtractionError> {
    extract_text_with(html, &ExtractionOptions::default())
}

/// Strips scripts, styles, comments and tags, decodes common entities,
/// collapses whitespace and caps the length.
pub fn extract_text_with(
    html: &str,
    options: &ExtractionOptions,
) -> Result<ExtractedText, ExtractionError> {
    if html.len() > options.max_input_bytes {
        return Err(ExtractionError::InputTooLarge {
            len: html.len(),
            limit: options.max_input_bytes,
        });
    }

    // Comments first: markup inside a comment is inert.
    let without_comments = COMMENT_RE.replace_all(html, " ");
    let without_scripts = SCRIPT_RE.replace_all(&without_comments, " ");
    let without_styles = STYLE_RE.replace_all(&without_scripts, " ");
    let without_tags = TAG_RE.replace_all(&without_styles, " ");
    let decoded = ENTITY_RE.replace_all(&without_tags, |caps: &Captures| decode_entity(caps));
    let collapsed = WHITESPACE_RE.replace_all(&decoded, " ");
    let collapsed = collapsed.trim();

    let (text, truncated) = cap_chars(collapsed, options.max_chars);
    if truncated {
        log::debug!(
            "Extracted text capped at {} characters (from {})",
            options.max_chars,
            collapsed.chars().count()
        );
    }

    Ok(ExtractedText {
        text: text.trim_end().to_string(),
        truncated,
    })
}

fn decode_entity(caps: &Captures) -> String {
    let body = &caps[1];
    let decoded = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = body.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        named_entity(body)
    };

    match decoded {
        Some(c) => c.to_string(),
        None => caps[0].to_string(),
    }
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "copy" => '©',
        "reg" => '®',
        "euro" => '€',
        "pound" => '£',
        "ndash" => '–',
        "mdash" => '—',
        _ => return None,
    };
    Some(c)
}

fn cap_chars(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (&text[..byte_idx], true),
        None => (text, false),
    }
}
