use crate::graph::{ObjectBody, ObjectGraph};
use crate::text::{escape_literal, wrap_lines};
use crate::writer::serialize;
use fleetdoc_types::PageGeometry;

/// How much text the fallback page accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBudget {
    pub max_chars_per_line: usize,
    pub max_lines: usize,
}

impl Default for LineBudget {
    fn default() -> Self {
        Self {
            max_chars_per_line: 90,
            max_lines: 60,
        }
    }
}

impl LineBudget {
    pub fn new(max_chars_per_line: usize, max_lines: usize) -> Self {
        Self {
            max_chars_per_line: max_chars_per_line.max(1),
            max_lines,
        }
    }
}

/// Where and how large the text is drawn. Coordinates are PDF points with
/// the origin at the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLayout {
    pub page: PageGeometry,
    pub font_size: f32,
    pub line_height: f32,
    pub origin_x: f32,
    pub origin_y: f32,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            page: PageGeometry::a4(),
            font_size: 10.0,
            line_height: 12.0,
            origin_x: 50.0,
            origin_y: 792.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedDocument {
    pub bytes: Vec<u8>,
    /// Set when text beyond the [`LineBudget`] was dropped.
    pub truncated: bool,
    pub line_count: usize,
}

/// Builds a single-page Helvetica PDF from plain text.
#[derive(Debug, Clone, Default)]
pub struct MinimalPdfEncoder {
    budget: LineBudget,
    layout: TextLayout,
}

impl MinimalPdfEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_budget(mut self, budget: LineBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_layout(mut self, layout: TextLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn budget(&self) -> LineBudget {
        self.budget
    }

    /// Encodes `text` into a complete PDF. Never fails; empty text yields a
    /// valid blank page.
    pub fn encode(&self, text: &str) -> EncodedDocument {
        let (lines, truncated) = wrap_lines(
            text,
            self.budget.max_chars_per_line,
            self.budget.max_lines,
        );
        if truncated {
            log::debug!(
                "Fallback text exceeds {} lines of {} chars; remainder dropped",
                self.budget.max_lines,
                self.budget.max_chars_per_line
            );
        }

        let content = self.content_stream(&lines);
        let bytes = self.build_document(content);

        EncodedDocument {
            bytes,
            truncated,
            line_count: lines.len(),
        }
    }

    fn content_stream(&self, lines: &[String]) -> Vec<u8> {
        let layout = &self.layout;
        let text_len: usize = lines.iter().map(|l| l.len() + 16).sum();
        let mut ops: Vec<u8> = Vec::with_capacity(64 + text_len);
        ops.extend_from_slice(b"BT\n");
        ops.extend_from_slice(format!("/F1 {} Tf\n", fmt_pt(layout.font_size)).as_bytes());
        ops.extend_from_slice(
            format!("{} {} Td\n", fmt_pt(layout.origin_x), fmt_pt(layout.origin_y)).as_bytes(),
        );
        let advance = format!("0 {} Td\n", fmt_pt(-layout.line_height));
        for line in lines {
            ops.push(b'(');
            ops.extend_from_slice(&escape_literal(line));
            ops.extend_from_slice(b") Tj\n");
            ops.extend_from_slice(advance.as_bytes());
        }
        ops.extend_from_slice(b"ET");
        ops
    }

    fn build_document(&self, content: Vec<u8>) -> Vec<u8> {
        let [x0, y0, x1, y1] = self.layout.page.media_box();

        // Fixed order: catalog, page tree, page, contents, font.
        let mut graph = ObjectGraph::new();
        let catalog_id = graph.next_id();
        let pages_id = catalog_id + 1;
        let page_id = catalog_id + 2;
        let contents_id = catalog_id + 3;
        let font_id = catalog_id + 4;

        graph.push_dictionary(format!("<< /Type /Catalog /Pages {} 0 R >>", pages_id));
        graph.push_dictionary(format!(
            "<< /Type /Pages /Kids [{} 0 R] /Count 1 >>",
            page_id
        ));
        graph.push_dictionary(format!(
            "<< /Type /Page /Parent {} 0 R /MediaBox [{} {} {} {}] \
             /Resources << /Font << /F1 {} 0 R >> >> /Contents {} 0 R >>",
            pages_id, x0, y0, x1, y1, font_id, contents_id
        ));
        graph.push(ObjectBody::Stream {
            extra_entries: String::new(),
            data: content,
        });
        graph.push_dictionary(
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
        );
        debug_assert_eq!(graph.len() as u32, font_id);

        serialize(&graph, catalog_id)
    }
}

fn fmt_pt(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let s = format!("{:.2}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
