//! Steps 2 and 3: control characters removed in every mode.

use glyphguard_tables::ranges::{is_ascii_control, is_bidi_control};

use super::strip_chars;
use crate::stats::{Advisory, Stats};

/// C0 and C1 controls, keeping TAB, LF and CR for the whitespace step.
pub fn strip_ascii_controls(text: &str, stats: &mut Stats) -> String {
    let (out, removed) = strip_chars(text, |c| is_ascii_control(c as u32));
    if removed > 0 {
        stats.raise(Advisory::AsciiControls);
    }
    out
}

/// Embeddings, overrides and isolates: U+202A..U+202E and U+2066..U+2069.
pub fn strip_bidi_controls(text: &str, stats: &mut Stats) -> String {
    let (out, removed) = strip_chars(text, |c| is_bidi_control(c as u32));
    if removed > 0 {
        stats.raise(Advisory::BidiControls);
    }
    out
}
