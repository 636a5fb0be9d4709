use lopdf::Document as LopdfDocument;
use lopdf::Object;
use lopdf::content::Content;

/// Strings passed to `Tj` on the first page, decoded as WinAnsi/Latin-1.
pub fn shown_strings(doc: &LopdfDocument) -> Vec<String> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.values().next() else {
        return Vec::new();
    };
    let raw = doc.get_page_content(*page_id).expect("page has content");
    let content = Content::decode(&raw).expect("content stream parses");

    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(bytes, _)) => Some(bytes.iter().map(|&b| b as char).collect()),
            _ => None,
        })
        .collect()
}

/// BaseFont names of every font dictionary in the document.
pub fn font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut names = Vec::new();
    for object in doc.objects.values() {
        if let Ok(dict) = object.as_dict()
            && let Ok(type_val) = dict.get(b"Type")
            && let Ok(type_name) = type_val.as_name()
            && type_name == b"Font"
            && let Ok(base_font) = dict.get(b"BaseFont")
            && let Ok(font_name) = base_font.as_name()
        {
            names.push(String::from_utf8_lossy(font_name).to_string());
        }
    }
    names
}

/// Byte offset stored after the last `startxref` keyword.
pub fn startxref(bytes: &[u8]) -> usize {
    let text = String::from_utf8_lossy(bytes);
    let at = text.rfind("startxref\n").expect("startxref keyword") + "startxref\n".len();
    text[at..]
        .lines()
        .next()
        .and_then(|line| line.trim().parse().ok())
        .expect("numeric startxref")
}

/// Checks that the classic cross-reference table is well formed and that
/// every in-use entry points at the first byte of its `N 0 obj` header.
/// Returns the number of entries, including the free-list head.
pub fn assert_xref_consistent(bytes: &[u8]) -> usize {
    let start = startxref(bytes);
    let table = String::from_utf8_lossy(&bytes[start..]).into_owned();
    let mut lines = table.split('\n');
    assert_eq!(lines.next(), Some("xref"), "startxref does not point at xref");

    let subsection = lines.next().expect("subsection header");
    let mut header = subsection.split(' ');
    assert_eq!(header.next(), Some("0"));
    let count: usize = header.next().and_then(|n| n.parse().ok()).expect("entry count");

    let free = lines.next().expect("free-list head");
    assert_eq!(free, "0000000000 65535 f ");
    for id in 1..count {
        let entry = lines.next().expect("xref entry");
        assert_eq!(entry.len(), 19, "entry {id} is not 20 bytes with its EOL");
        assert!(entry.ends_with(" 00000 n "), "entry {id}: {entry:?}");
        let offset: usize = entry[..10].parse().expect("numeric offset");
        let expected = format!("{} 0 obj", id);
        assert!(
            bytes[offset..].starts_with(expected.as_bytes()),
            "entry {id} points at {:?}",
            String::from_utf8_lossy(&bytes[offset..(offset + 12).min(bytes.len())])
        );
    }
    assert_eq!(lines.next(), Some("trailer"));
    count
}

/// Checks every `/Length N >>\nstream\n` against the actual data length.
pub fn assert_stream_lengths(bytes: &[u8]) {
    let marker = b"/Length ";
    let mut cursor = 0;
    let mut streams = 0;
    while let Some(pos) = find(&bytes[cursor..], marker) {
        let len_start = cursor + pos + marker.len();
        let len_end = len_start
            + bytes[len_start..]
                .iter()
                .position(|b| !b.is_ascii_digit())
                .expect("length terminator");
        let declared: usize = std::str::from_utf8(&bytes[len_start..len_end])
            .unwrap()
            .parse()
            .unwrap();
        let keyword = b"stream\n";
        let data_start = len_end
            + find(&bytes[len_end..], keyword).expect("stream keyword")
            + keyword.len();
        assert!(
            bytes[data_start + declared..].starts_with(b"\nendstream"),
            "declared /Length {declared} does not end at endstream"
        );
        streams += 1;
        cursor = data_start + declared;
    }
    assert!(streams > 0, "no streams found");
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
