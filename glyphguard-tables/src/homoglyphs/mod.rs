/// Cyrillic and Greek letters that render like a Latin letter, sorted by codepoint.
pub const HOMOGLYPHS: &[(char, char)] = &[
    ('\u{0391}', 'A'), // Greek Alpha
    ('\u{0392}', 'B'), // Greek Beta
    ('\u{0395}', 'E'), // Greek Epsilon
    ('\u{0396}', 'Z'), // Greek Zeta
    ('\u{0397}', 'H'), // Greek Eta
    ('\u{0399}', 'I'), // Greek Iota
    ('\u{039A}', 'K'), // Greek Kappa
    ('\u{039C}', 'M'), // Greek Mu
    ('\u{039D}', 'N'), // Greek Nu
    ('\u{039F}', 'O'), // Greek Omicron
    ('\u{03A1}', 'P'), // Greek Rho
    ('\u{03A4}', 'T'), // Greek Tau
    ('\u{03A5}', 'Y'), // Greek Upsilon
    ('\u{03A7}', 'X'), // Greek Chi
    ('\u{03B1}', 'a'), // Greek small alpha
    ('\u{03B9}', 'i'), // Greek small iota
    ('\u{03BD}', 'v'), // Greek small nu
    ('\u{03BF}', 'o'), // Greek small omicron
    ('\u{03C1}', 'p'), // Greek small rho
    ('\u{03C5}', 'u'), // Greek small upsilon
    ('\u{03C7}', 'x'), // Greek small chi
    ('\u{0405}', 'S'), // Cyrillic Dze
    ('\u{0406}', 'I'), // Cyrillic Byelorussian-Ukrainian I
    ('\u{0408}', 'J'), // Cyrillic Je
    ('\u{0410}', 'A'),
    ('\u{0412}', 'B'),
    ('\u{0415}', 'E'),
    ('\u{041A}', 'K'),
    ('\u{041C}', 'M'),
    ('\u{041D}', 'H'),
    ('\u{041E}', 'O'),
    ('\u{0420}', 'P'),
    ('\u{0421}', 'C'),
    ('\u{0422}', 'T'),
    ('\u{0423}', 'Y'),
    ('\u{0425}', 'X'),
    ('\u{0430}', 'a'),
    ('\u{0435}', 'e'),
    ('\u{043E}', 'o'),
    ('\u{0440}', 'p'),
    ('\u{0441}', 'c'),
    ('\u{0443}', 'y'),
    ('\u{0445}', 'x'),
    ('\u{0455}', 's'),
    ('\u{0456}', 'i'),
    ('\u{0458}', 'j'),
    ('\u{04BB}', 'h'), // Cyrillic Shha
    ('\u{04CF}', 'l'), // Cyrillic Palochka
    ('\u{0501}', 'd'), // Cyrillic Komi De
    ('\u{051A}', 'Q'),
    ('\u{051B}', 'q'),
    ('\u{051C}', 'W'),
    ('\u{051D}', 'w'),
];

const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Latin/ASCII replacement for a confusable letter or digit.
///
/// Fullwidth forms are only folded for letters and digits; fullwidth
/// punctuation such as `＜` or `＆` is left alone. Folded letters can still
/// complete a tag or an entity next to ASCII punctuation (`<ｂ>`, `&ｌｔ;`),
/// so callers that strip markup must run again after folding.
pub fn homoglyph_for(c: char) -> Option<char> {
    let cp = c as u32;
    let fullwidth_alnum = (0xFF10..=0xFF19).contains(&cp)
        || (0xFF21..=0xFF3A).contains(&cp)
        || (0xFF41..=0xFF5A).contains(&cp);
    if fullwidth_alnum {
        return char::from_u32(cp - FULLWIDTH_OFFSET);
    }
    HOMOGLYPHS
        .binary_search_by_key(&c, |&(from, _)| from)
        .ok()
        .map(|idx| HOMOGLYPHS[idx].1)
}

pub fn is_homoglyph(c: char) -> bool {
    homoglyph_for(c).is_some()
}
