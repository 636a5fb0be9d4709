use crate::graph::{ObjectBody, ObjectGraph};

const HEADER: &[u8] = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n";

/// Serializes `graph` into a complete PDF file.
///
/// Each object's offset is taken from the buffer length immediately before
/// the object is appended, so the cross-reference table always points at
/// the first byte of `N 0 obj`. The free-list head is entry 0; object `N`
/// is entry `N`.
pub fn serialize(graph: &ObjectGraph, root_id: u32) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::with_capacity(1024 + estimated_body_len(graph));
    out.extend_from_slice(HEADER);

    let mut offsets = Vec::with_capacity(graph.len());
    for record in graph.records() {
        offsets.push(out.len());
        write_indirect_object(&mut out, record.id, &record.body);
    }

    let xref_start = out.len();
    write_xref(&mut out, &offsets);

    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            offsets.len() + 1,
            root_id,
            xref_start
        )
        .as_bytes(),
    );

    debug_assert!(
        graph
            .records()
            .iter()
            .zip(&offsets)
            .all(|(r, &off)| out[off..].starts_with(format!("{} 0 obj", r.id).as_bytes())),
        "cross-reference offset drifted from object position"
    );

    out
}

fn write_indirect_object(out: &mut Vec<u8>, id: u32, body: &ObjectBody) {
    out.extend_from_slice(format!("{} 0 obj\n", id).as_bytes());
    match body {
        ObjectBody::Dictionary(dict) => out.extend_from_slice(dict.as_bytes()),
        ObjectBody::Stream {
            extra_entries,
            data,
        } => {
            // Length excludes the EOL that precedes `endstream`.
            let mut dict = format!("<< /Length {}", data.len());
            if !extra_entries.is_empty() {
                dict.push(' ');
                dict.push_str(extra_entries);
            }
            dict.push_str(" >>\nstream\n");
            out.extend_from_slice(dict.as_bytes());
            out.extend_from_slice(data);
            out.extend_from_slice(b"\nendstream");
        }
    }
    out.extend_from_slice(b"\nendobj\n");
}

fn write_xref(out: &mut Vec<u8>, offsets: &[usize]) {
    out.extend_from_slice(format!("xref\n0 {}\n", offsets.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
}

fn estimated_body_len(graph: &ObjectGraph) -> usize {
    graph
        .records()
        .iter()
        .map(|r| match &r.body {
            ObjectBody::Dictionary(d) => d.len() + 32,
            ObjectBody::Stream { data, .. } => data.len() + 64,
        })
        .sum()
}
