/// Typographic punctuation and its ASCII spelling, sorted by codepoint.
pub const PUNCTUATION: &[(char, &str)] = &[
    ('\u{00AB}', "\""),  // left guillemet
    ('\u{00BB}', "\""),  // right guillemet
    ('\u{2010}', "-"),   // hyphen
    ('\u{2011}', "-"),   // non-breaking hyphen
    ('\u{2012}', "-"),   // figure dash
    ('\u{2013}', "-"),   // en dash
    ('\u{2014}', "-"),   // em dash
    ('\u{2015}', "-"),   // horizontal bar
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201A}', "'"),
    ('\u{201B}', "'"),
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{201E}', "\""),
    ('\u{201F}', "\""),
    ('\u{2026}', "..."), // ellipsis
    ('\u{2032}', "'"),   // prime
    ('\u{2033}', "\""),  // double prime
    ('\u{2039}', "'"),   // single guillemets
    ('\u{203A}', "'"),
    ('\u{2212}', "-"),   // minus sign
];

pub fn punctuation_for(c: char) -> Option<&'static str> {
    PUNCTUATION
        .binary_search_by_key(&c, |&(from, _)| from)
        .ok()
        .map(|idx| PUNCTUATION[idx].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted() {
        for pair in PUNCTUATION.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn lookups() {
        assert_eq!(punctuation_for('\u{201C}'), Some("\""));
        assert_eq!(punctuation_for('\u{2026}'), Some("..."));
        assert_eq!(punctuation_for('-'), None);
    }
}
