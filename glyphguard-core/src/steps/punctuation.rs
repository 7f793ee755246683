//! Step 8: typographic punctuation to ASCII.

use glyphguard_tables::punctuation::punctuation_for;

pub fn normalize_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match punctuation_for(c) {
            Some(ascii) => out.push_str(ascii),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_dashes_and_ellipsis() {
        assert_eq!(
            normalize_punctuation("\u{201C}Hi\u{201D} \u{2014} it\u{2019}s \u{00AB}ok\u{00BB}\u{2026}"),
            "\"Hi\" - it's \"ok\"..."
        );
    }
}
