//! Step 6: whitespace.

use glyphguard_tables::ranges::is_space_separator;

/// Space separators and TAB become ASCII spaces, CRLF and lone CR become LF,
/// runs of spaces collapse, lines are trimmed, and no more than one blank
/// line survives between two non-blank ones.
pub fn normalize_whitespace(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = String::with_capacity(unified.len());
    let mut blank_run = 0usize;
    for (idx, line) in unified.split('\n').enumerate() {
        let collapsed = collapse_line(line);
        if collapsed.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&collapsed);
    }
    out
}

fn collapse_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut pending_space = false;
    for c in line.chars() {
        if c == ' ' || c == '\t' || is_space_separator(c as u32) {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unifies_line_endings() {
        assert_eq!(normalize_whitespace("a\r\nb\rc\n"), "a\nb\nc\n");
    }

    #[test]
    fn collapses_unicode_spaces() {
        assert_eq!(normalize_whitespace("  a\u{00A0}\u{2003}\tb \u{3000}"), "a b");
    }

    #[test]
    fn caps_blank_lines() {
        assert_eq!(normalize_whitespace("a\n\n\n  \n\nb"), "a\n\nb");
    }
}
