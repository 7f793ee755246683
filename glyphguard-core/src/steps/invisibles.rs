//! Steps 5 and 17: invisible characters.
//!
//! Safe mode keeps ZWNJ/ZWJ, the directional marks and the emoji
//! presentation selector, which legitimate Persian, Indic and emoji text
//! depends on. The other modes remove them too.

use glyphguard_tables::ranges::{
    in_range, in_ranges, is_bidi_mark, ALWAYS_INVISIBLE, EMOJI_VARIATION_SELECTOR, JOINERS, MONGOLIAN_FVS,
    TEXT_VARIATION_SELECTORS, VARIATION_SELECTORS_SUPPLEMENT,
};

use super::strip_chars;
use crate::config::Mode;
use crate::stats::{Advisory, Stats};

pub fn is_stripped_invisible(c: char, mode: Mode) -> bool {
    let cp = c as u32;
    if in_ranges(cp, ALWAYS_INVISIBLE) || in_range(cp, TEXT_VARIATION_SELECTORS) {
        return true;
    }
    !mode.is_safe()
        && (in_range(cp, JOINERS)
            || is_bidi_mark(cp)
            || cp == EMOJI_VARIATION_SELECTOR
            || in_ranges(cp, MONGOLIAN_FVS)
            || in_range(cp, VARIATION_SELECTORS_SUPPLEMENT))
}

pub fn strip_invisibles(text: &str, mode: Mode, stats: &mut Stats) -> String {
    let (out, removed) = strip_chars(text, |c| is_stripped_invisible(c, mode));
    if removed > 0 {
        stats.invisibles_removed += removed;
        stats.raise(Advisory::DefaultIgnorables);
    }
    out
}
