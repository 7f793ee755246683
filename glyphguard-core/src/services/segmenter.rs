use unicode_segmentation::UnicodeSegmentation;

use super::GraphemeSegmenter;

/// Extended grapheme clusters per UAX #29.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeGraphemes;

impl GraphemeSegmenter for UnicodeGraphemes {
    fn graphemes<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.graphemes(true).collect()
    }

    fn name(&self) -> &'static str {
        "unicode-segmentation"
    }
}

/// One "grapheme" per scalar value. Multi-codepoint emoji and combining
/// sequences are split apart, which shifts diff indices but keeps them valid.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodepointSegmenter;

impl GraphemeSegmenter for CodepointSegmenter {
    fn graphemes<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.char_indices()
            .map(|(start, c)| &text[start..start + c.len_utf8()])
            .collect()
    }

    fn name(&self) -> &'static str {
        "codepoint"
    }

    fn is_fallback(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clusters_combining_and_emoji() {
        let text = "e\u{0301}\u{1F469}\u{200D}\u{1F4BB}!";
        assert_eq!(
            UnicodeGraphemes.graphemes(text),
            vec!["e\u{0301}", "\u{1F469}\u{200D}\u{1F4BB}", "!"]
        );
    }

    #[test]
    fn codepoint_fallback_splits_everything() {
        let text = "e\u{0301}\u{1F600}";
        assert_eq!(CodepointSegmenter.graphemes(text), vec!["e", "\u{0301}", "\u{1F600}"]);
        assert!(CodepointSegmenter.graphemes("").is_empty());
    }

    #[test]
    fn crlf_is_one_cluster() {
        assert_eq!(UnicodeGraphemes.graphemes("a\r\nb"), vec!["a", "\r\n", "b"]);
    }
}
