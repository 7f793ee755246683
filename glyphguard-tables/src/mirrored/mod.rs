use crate::ranges::in_ranges;
use crate::CodepointRange;

/// Brackets, quotes and relations carrying `Bidi_Mirrored=Yes`.
pub const MIRRORED: &[CodepointRange] = &[
    (0x0028, 0x0029),
    (0x003C, 0x003C),
    (0x003E, 0x003E),
    (0x005B, 0x005B),
    (0x005D, 0x005D),
    (0x007B, 0x007B),
    (0x007D, 0x007D),
    (0x00AB, 0x00AB),
    (0x00BB, 0x00BB),
    (0x0F3A, 0x0F3D),
    (0x169B, 0x169C),
    (0x2039, 0x203A),
    (0x2045, 0x2046),
    (0x207D, 0x207E),
    (0x208D, 0x208E),
    (0x2208, 0x220D),
    (0x2264, 0x226B),
    (0x226E, 0x226F),
    (0x2282, 0x228B),
    (0x2308, 0x230B),
    (0x2329, 0x232A),
    (0x27E6, 0x27EF),
    (0x2983, 0x2998),
    (0x3008, 0x3011),
    (0x3014, 0x301B),
    (0xFF08, 0xFF09),
    (0xFF1C, 0xFF1C),
    (0xFF1E, 0xFF1E),
    (0xFF3B, 0xFF3B),
    (0xFF3D, 0xFF3D),
    (0xFF5B, 0xFF5B),
    (0xFF5D, 0xFF5D),
    (0xFF5F, 0xFF60),
    (0xFF62, 0xFF63),
];

pub fn is_mirrored(c: char) -> bool {
    in_ranges(c as u32, MIRRORED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets() {
        assert!(is_mirrored('('));
        assert!(is_mirrored(']'));
        assert!(is_mirrored('\u{00AB}'));
        assert!(!is_mirrored('a'));
        assert!(!is_mirrored('-'));
    }
}
