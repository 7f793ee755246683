//! Steps 11 to 13: noncharacters, Private Use and the TAG block.

use glyphguard_tables::is_noncharacter;
use glyphguard_tables::ranges::{in_range, is_private_use, is_tag, BLACK_FLAG, TAG_CANCEL, TAG_SPEC};

use super::strip_chars;
use crate::config::Mode;
use crate::stats::{Advisory, Stats};

/// U+FDD0..U+FDEF and the last two codepoints of every plane. Aggressive and strict.
pub fn strip_noncharacters(text: &str, mode: Mode, stats: &mut Stats) -> String {
    if mode.is_safe() {
        return text.to_string();
    }
    let (out, removed) = strip_chars(text, |c| is_noncharacter(c as u32));
    if removed > 0 {
        stats.raise(Advisory::Noncharacters);
    }
    out
}

/// The three Private Use areas. Strict only.
pub fn strip_private_use(text: &str, mode: Mode, stats: &mut Stats) -> String {
    if mode != Mode::Strict {
        return text.to_string();
    }
    let (out, removed) = strip_chars(text, |c| is_private_use(c as u32));
    if removed > 0 {
        stats.raise(Advisory::PrivateUse);
    }
    out
}

/// Length in chars of a well-formed emoji tag sequence starting at `chars[0]`:
/// BLACK FLAG, one or more tag letters, CANCEL TAG.
fn flag_sequence_len(chars: &[char]) -> Option<usize> {
    if chars.first().map(|&c| c as u32) != Some(BLACK_FLAG) {
        return None;
    }
    let letters = chars[1..].iter().take_while(|&&c| in_range(c as u32, TAG_SPEC)).count();
    if letters == 0 {
        return None;
    }
    match chars.get(1 + letters) {
        Some(&c) if c as u32 == TAG_CANCEL => Some(letters + 2),
        _ => None,
    }
}

/// Removes U+E0000..U+E007F. Subdivision flags such as England's stay intact
/// except in aggressive mode, which removes their tags as well.
pub fn strip_tag_block(text: &str, mode: Mode, stats: &mut Stats) -> String {
    if !text.chars().any(|c| is_tag(c as u32)) {
        return text.to_string();
    }
    let protect_flags = mode != Mode::Aggressive;
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut removed = 0usize;
    let mut i = 0;
    while i < chars.len() {
        if protect_flags {
            if let Some(len) = flag_sequence_len(&chars[i..]) {
                out.extend(&chars[i..i + len]);
                i += len;
                continue;
            }
        }
        let c = chars[i];
        if is_tag(c as u32) {
            removed += 1;
        } else {
            out.push(c);
        }
        i += 1;
    }
    if removed > 0 {
        stats.raise(Advisory::TagChars);
    }
    out
}
