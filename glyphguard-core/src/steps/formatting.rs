//! Step 10: bullets, HTML tags and markdown emphasis.

use glyphguard_tables::ranges::is_bullet;
use lazy_static::lazy_static;
use regex::Regex;

use crate::config::Mode;

lazy_static! {
    static ref HTML_TAG: Regex =
        Regex::new(r"(?s)<!--.*?-->|</?[A-Za-z][A-Za-z0-9:-]*(?:\s[^<>]*)?/?>").unwrap();
    /// Applied in order; each keeps its inner text.
    static ref EMPHASIS: [Regex; 5] = [
        Regex::new(r"\*\*([^*\n]+?)\*\*").unwrap(),
        Regex::new(r"__([^_\n]+?)__").unwrap(),
        Regex::new(r"~~([^~\n]+?)~~").unwrap(),
        Regex::new(r"\*([^*\s](?:[^*\n]*[^*\s])?)\*").unwrap(),
        Regex::new(r"`([^`\n]+)`").unwrap(),
    ];
}

/// Bullets become `-` and HTML tags are removed in every mode. Markdown
/// emphasis markers are removed outside safe mode. Tag and emphasis
/// removal repeat until nothing matches, since removing one can expose
/// another.
pub fn strip_formatting(text: &str, mode: Mode) -> String {
    let mut current: String = text.chars().map(|c| if is_bullet(c as u32) { '-' } else { c }).collect();
    loop {
        let mut next = HTML_TAG.replace_all(&current, "").into_owned();
        if !mode.is_safe() {
            for pattern in EMPHASIS.iter() {
                next = pattern.replace_all(&next, "$1").into_owned();
            }
        }
        if next == current {
            return current;
        }
        current = next;
    }
}
