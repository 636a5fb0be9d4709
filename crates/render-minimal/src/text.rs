//! Line wrapping and PDF string-literal escaping.

/// Encodes `text` as the body of a PDF literal string (without the
/// surrounding parentheses) for a font using `/WinAnsiEncoding`.
///
/// - `\`, `(` and `)` are prefixed with a backslash.
/// - Printable ASCII is copied through.
/// - U+00A0..=U+00FF become three-digit octal escapes; WinAnsi matches
///   Latin-1 in that range.
/// - Control characters become spaces, anything else becomes `?`.
pub fn escape_literal(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\\' | '(' | ')' => {
                out.push(b'\\');
                out.push(c as u8);
            }
            ' '..='~' => out.push(c as u8),
            '\u{a0}'..='\u{ff}' => {
                out.extend_from_slice(format!("\\{:03o}", c as u32).as_bytes());
            }
            c if c.is_control() => out.push(b' '),
            _ => out.push(b'?'),
        }
    }
    out
}

/// Greedy word wrap.
///
/// Explicit newlines start a new line. Words are packed into lines of at most
/// `max_chars` characters; a word longer than that is split across lines.
/// At most `max_lines` lines are returned; the flag reports whether anything
/// was dropped.
pub fn wrap_lines(text: &str, max_chars: usize, max_lines: usize) -> (Vec<String>, bool) {
    let max_chars = max_chars.max(1);
    let mut lines: Vec<String> = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0usize;

        for word in paragraph.split_whitespace() {
            let mut word_chars: Vec<char> = word.chars().collect();

            if current_len > 0 && current_len + 1 + word_chars.len() <= max_chars {
                current.push(' ');
                current.extend(word_chars.iter());
                current_len += 1 + word_chars.len();
                continue;
            }

            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                if lines.len() > max_lines {
                    lines.truncate(max_lines);
                    return (lines, true);
                }
            }

            while word_chars.len() > max_chars {
                let rest = word_chars.split_off(max_chars);
                lines.push(word_chars.into_iter().collect());
                word_chars = rest;
                if lines.len() > max_lines {
                    lines.truncate(max_lines);
                    return (lines, true);
                }
            }

            current_len = word_chars.len();
            current = word_chars.into_iter().collect();
        }

        lines.push(current);
        if lines.len() > max_lines {
            lines.truncate(max_lines);
            return (lines, true);
        }
    }

    (lines, false)
}
