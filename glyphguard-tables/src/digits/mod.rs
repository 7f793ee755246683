use crate::ranges::{in_range, ARABIC_INDIC_DIGITS, EXTENDED_ARABIC_INDIC_DIGITS};

/// Codepoint of the digit zero of every general category `Nd` run.
/// Each run covers `zero..=zero + 9`.
pub const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Decimal value of any `Nd` codepoint.
pub fn decimal_value(c: char) -> Option<u8> {
    let cp = c as u32;
    let idx = match DECIMAL_ZEROS.binary_search(&cp) {
        Ok(idx) => idx,
        Err(0) => return None,
        Err(idx) => idx - 1,
    };
    let offset = cp - DECIMAL_ZEROS[idx];
    if offset <= 9 {
        Some(offset as u8)
    } else {
        None
    }
}

/// Decimal value restricted to ASCII, Arabic-Indic and Extended Arabic-Indic digits.
pub fn arabic_indic_value(c: char) -> Option<u8> {
    let cp = c as u32;
    if c.is_ascii_digit() {
        Some((cp - 0x30) as u8)
    } else if in_range(cp, ARABIC_INDIC_DIGITS) {
        Some((cp - ARABIC_INDIC_DIGITS.0) as u8)
    } else if in_range(cp, EXTENDED_ARABIC_INDIC_DIGITS) {
        Some((cp - EXTENDED_ARABIC_INDIC_DIGITS.0) as u8)
    } else {
        None
    }
}
