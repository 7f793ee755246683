//! Inclusive codepoint range tables.
//!
//! Every table is sorted by its first codepoint and free of overlaps so that
//! [`in_ranges`] can binary search it.

use crate::CodepointRange;

/// Explicit directional embeddings, overrides and isolates (Trojan Source).
pub const BIDI_CONTROLS: &[CodepointRange] = &[(0x202A, 0x202E), (0x2066, 0x2069)];

/// Implicit directional marks: ALM, LRM and RLM.
pub const BIDI_MARKS: &[CodepointRange] = &[(0x061C, 0x061C), (0x200E, 0x200F)];

/// Default_Ignorable_Code_Point minus the BiDi controls, the BiDi marks and the
/// TAG block, which each have a table of their own.
pub const DEFAULT_IGNORABLES: &[CodepointRange] = &[
    (0x00AD, 0x00AD),
    (0x034F, 0x034F),
    (0x115F, 0x1160),
    (0x17B4, 0x17B5),
    (0x180B, 0x180F),
    (0x200B, 0x200D),
    (0x2060, 0x2065),
    (0x206A, 0x206F),
    (0x3164, 0x3164),
    (0xFE00, 0xFE0F),
    (0xFEFF, 0xFEFF),
    (0xFFA0, 0xFFA0),
    (0xFFF0, 0xFFF8),
    (0x1BCA0, 0x1BCA3),
    (0x1D173, 0x1D17A),
    (0xE0080, 0xE0FFF),
];

pub const TAG_BLOCK: CodepointRange = (0xE0000, 0xE007F);
pub const TAG_CANCEL: u32 = 0xE007F;
/// Printable tag letters that spell a subdivision flag (`gbeng`, `gbsct`, ...).
pub const TAG_SPEC: CodepointRange = (0xE0020, 0xE007E);
/// WAVING BLACK FLAG, the base of every emoji tag sequence.
pub const BLACK_FLAG: u32 = 0x1F3F4;

pub const NONCHARACTER_BLOCK: CodepointRange = (0xFDD0, 0xFDEF);

pub const PRIVATE_USE: &[CodepointRange] = &[
    (0xE000, 0xF8FF),
    (0xF0000, 0xFFFFD),
    (0x100000, 0x10FFFD),
];

pub const ARABIC_INDIC_DIGITS: CodepointRange = (0x0660, 0x0669);
pub const EXTENDED_ARABIC_INDIC_DIGITS: CodepointRange = (0x06F0, 0x06F9);

/// C0 and C1 controls except TAB, LF and CR.
pub const ASCII_CONTROLS: &[CodepointRange] = &[
    (0x0000, 0x0008),
    (0x000B, 0x000C),
    (0x000E, 0x001F),
    (0x007F, 0x009F),
];

/// General category Zs, without the ASCII space itself.
pub const UNICODE_SPACE_SEPARATORS: &[CodepointRange] = &[
    (0x00A0, 0x00A0),
    (0x1680, 0x1680),
    (0x2000, 0x200A),
    (0x202F, 0x202F),
    (0x205F, 0x205F),
    (0x3000, 0x3000),
];

/// VS1..VS15. VS16 (U+FE0F, emoji presentation) is listed separately.
pub const TEXT_VARIATION_SELECTORS: CodepointRange = (0xFE00, 0xFE0E);
pub const EMOJI_VARIATION_SELECTOR: u32 = 0xFE0F;
pub const VARIATION_SELECTORS_SUPPLEMENT: CodepointRange = (0xE0100, 0xE01EF);
/// Mongolian free variation selectors FVS1..FVS4.
pub const MONGOLIAN_FVS: &[CodepointRange] = &[(0x180B, 0x180D), (0x180F, 0x180F)];

/// Invisible characters removed in every mode.
pub const ALWAYS_INVISIBLE: &[CodepointRange] = &[
    (0x00AD, 0x00AD), // soft hyphen
    (0x180E, 0x180E), // mongolian vowel separator
    (0x200B, 0x200B), // zero width space
    (0x2028, 0x2028), // line separator
    (0x2060, 0x2064), // word joiner, invisible math operators
    (0x206A, 0x206F), // arabic shaping and digit shape controls
    (0xFEFF, 0xFEFF), // byte order mark
];

/// ZWNJ and ZWJ. Kept in safe mode because scripts and emoji need them.
pub const JOINERS: CodepointRange = (0x200C, 0x200D);

/// Unicode bullets rewritten to an ASCII hyphen.
pub const BULLETS: &[CodepointRange] = &[
    (0x2022, 0x2023),
    (0x2043, 0x2043),
    (0x2219, 0x2219),
    (0x25AA, 0x25AB),
    (0x25CF, 0x25CF),
    (0x25E6, 0x25E6),
    (0x29BE, 0x29BF),
];

/// Returns true when `cp` lies inside one of the sorted inclusive `ranges`.
pub fn in_ranges(cp: u32, ranges: &[CodepointRange]) -> bool {
    ranges
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                core::cmp::Ordering::Less
            } else if lo > cp {
                core::cmp::Ordering::Greater
            } else {
                core::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

pub fn in_range(cp: u32, range: CodepointRange) -> bool {
    range.0 <= cp && cp <= range.1
}

/// U+FDD0..U+FDEF plus the last two codepoints of each plane 0x0..=0x10.
pub fn is_noncharacter(cp: u32) -> bool {
    in_range(cp, NONCHARACTER_BLOCK) || (cp <= 0x10FFFF && (cp & 0xFFFE) == 0xFFFE)
}

pub fn is_bidi_control(cp: u32) -> bool {
    in_ranges(cp, BIDI_CONTROLS)
}

pub fn is_bidi_mark(cp: u32) -> bool {
    in_ranges(cp, BIDI_MARKS)
}

pub fn is_default_ignorable(cp: u32) -> bool {
    in_ranges(cp, DEFAULT_IGNORABLES)
}

pub fn is_tag(cp: u32) -> bool {
    in_range(cp, TAG_BLOCK)
}

pub fn is_private_use(cp: u32) -> bool {
    in_ranges(cp, PRIVATE_USE)
}

pub fn is_ascii_control(cp: u32) -> bool {
    in_ranges(cp, ASCII_CONTROLS)
}

pub fn is_space_separator(cp: u32) -> bool {
    in_ranges(cp, UNICODE_SPACE_SEPARATORS)
}

pub fn is_bullet(cp: u32) -> bool {
    in_ranges(cp, BULLETS)
}
